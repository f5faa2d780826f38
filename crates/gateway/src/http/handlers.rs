//! Request handlers. Bodies are taken as raw bytes so malformed JSON and schema errors are
//! reported by the gateway's own validation. Path and query extraction failures are turned
//! into [`GatewayError::MalformedInput`], so every failure carries the JSON error body.

use crate::error::GatewayError;
use crate::model::{EnrichedOrder, OrderId, PaginatedOrders, Product, ProductId};
use crate::orchestration::PageQuery;
use crate::service::Gateway;
use axum::body::Bytes;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;
use tracing::debug;

pub const PRODUCT_DELETED: &str = "Product deleted successfully";

fn path_id(path: Result<Path<String>, PathRejection>) -> Result<String, GatewayError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            debug!(%rejection, "Path rejected");
            Err(GatewayError::MalformedInput(rejection.body_text()))
        }
    }
}

fn page_query(
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<PageQuery, GatewayError> {
    match query {
        Ok(Query(query)) => Ok(query),
        Err(rejection) => {
            debug!(%rejection, "Query rejected");
            Err(GatewayError::MalformedInput(rejection.body_text()))
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IdResponse<T> {
    pub id: T,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub async fn get_product(
    State(gateway): State<Gateway>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Product>, GatewayError> {
    let id = path_id(path)?;
    gateway.get_product(&ProductId(id)).await.map(Json)
}

pub async fn delete_product(
    State(gateway): State<Gateway>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, GatewayError> {
    let id = path_id(path)?;
    gateway.delete_product(&ProductId(id)).await?;
    Ok(Json(MessageResponse {
        message: PRODUCT_DELETED,
    }))
}

pub async fn create_product(
    State(gateway): State<Gateway>,
    body: Bytes,
) -> Result<Json<IdResponse<ProductId>>, GatewayError> {
    let id = gateway.create_product(&body).await?;
    Ok(Json(IdResponse { id }))
}

pub async fn get_order(
    State(gateway): State<Gateway>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<EnrichedOrder>, GatewayError> {
    let id = path_id(path)?;
    gateway.get_order(&id).await.map(Json)
}

pub async fn create_order(
    State(gateway): State<Gateway>,
    body: Bytes,
) -> Result<Json<IdResponse<OrderId>>, GatewayError> {
    let id = gateway.create_order(&body).await?;
    Ok(Json(IdResponse { id }))
}

pub async fn list_orders(
    State(gateway): State<Gateway>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<PaginatedOrders>, GatewayError> {
    let query = page_query(query)?;
    gateway.list_orders(&query).await.map(Json)
}
