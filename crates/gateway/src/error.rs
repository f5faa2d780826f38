//! # Gateway Errors
//!
//! [`GatewayError`] is the one condition type every request path returns. Backend and
//! validation errors convert into it with `?`; [`GatewayError::outcome`] then maps it onto
//! the closed set of client-facing [`OutcomeKind`]s.
//!
//! Internal conditions are logged with their cause when turned into a response, and the
//! client only ever sees the generic [`INTERNAL_ERROR_MESSAGE`].

use crate::catalog_actor::CatalogError;
use crate::model::{OrderId, ProductId};
use crate::orders_actor::OrdersError;
use crate::validation::{FieldError, ValidationError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// The message returned for every internal error.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    /// The request body, path or query string could not be parsed.
    #[error("{0}")]
    MalformedInput(String),

    /// The request parsed but some fields are missing or invalid.
    #[error("Invalid request: {} field error(s)", .0.len())]
    SchemaViolation(Vec<FieldError>),

    #[error("Product Id {0} not found")]
    ProductNotFound(ProductId),

    /// Carries whatever the caller used to name the order.
    #[error("Order Id {0} not found")]
    OrderNotFound(String),

    /// The product is referenced by an order and cannot be deleted.
    #[error("Product with ID '{product_id}' is associated with an order and cannot be deleted")]
    UnavailableProduct {
        product_id: ProductId,
        order_id: OrderId,
    },

    /// An existing order references a product the catalog no longer has.
    #[error("Order {order_id} references missing product {product_id}")]
    InconsistentOrder {
        order_id: OrderId,
        product_id: ProductId,
    },

    /// Anything else: an unreachable backend, a rejected record.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Client-facing outcome kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    BadRequest,
    NotFound,
    Conflict,
    InternalError,
}

impl OutcomeKind {
    pub fn status(self) -> StatusCode {
        match self {
            OutcomeKind::BadRequest => StatusCode::BAD_REQUEST,
            OutcomeKind::NotFound => StatusCode::NOT_FOUND,
            OutcomeKind::Conflict => StatusCode::CONFLICT,
            OutcomeKind::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl GatewayError {
    pub fn outcome(&self) -> OutcomeKind {
        match self {
            GatewayError::MalformedInput(_) | GatewayError::SchemaViolation(_) => {
                OutcomeKind::BadRequest
            }
            GatewayError::ProductNotFound(_) | GatewayError::OrderNotFound(_) => {
                OutcomeKind::NotFound
            }
            GatewayError::UnavailableProduct { .. } => OutcomeKind::Conflict,
            GatewayError::InconsistentOrder { .. } | GatewayError::Internal(_) => {
                OutcomeKind::InternalError
            }
        }
    }

    /// Machine-readable code for the response body.
    pub fn code(&self) -> &'static str {
        match self {
            GatewayError::MalformedInput(_) => "BAD_REQUEST",
            GatewayError::SchemaViolation(_) => "VALIDATION_ERROR",
            GatewayError::ProductNotFound(_) => "PRODUCT_NOT_FOUND",
            GatewayError::OrderNotFound(_) => "ORDER_NOT_FOUND",
            GatewayError::UnavailableProduct { .. } => "UNAVAILABLE_PRODUCT",
            GatewayError::InconsistentOrder { .. } | GatewayError::Internal(_) => {
                "INTERNAL_ERROR"
            }
        }
    }

    /// Converts the error into the body sent to the client.
    pub fn to_api_error(&self) -> ApiError {
        let message = match self.outcome() {
            OutcomeKind::InternalError => INTERNAL_ERROR_MESSAGE.to_string(),
            _ => self.to_string(),
        };
        let details = match self {
            GatewayError::SchemaViolation(fields) => Some(fields.clone()),
            _ => None,
        };
        ApiError {
            error: self.code().to_string(),
            message,
            details,
        }
    }
}

impl From<ValidationError> for GatewayError {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::Malformed(msg) => {
                GatewayError::MalformedInput(format!("Invalid json: {msg}"))
            }
            ValidationError::Schema(fields) => GatewayError::SchemaViolation(fields),
        }
    }
}

impl From<CatalogError> for GatewayError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(id) => GatewayError::ProductNotFound(id),
            other => GatewayError::Internal(other.to_string()),
        }
    }
}

impl From<OrdersError> for GatewayError {
    fn from(e: OrdersError) -> Self {
        match e {
            OrdersError::NotFound(id) => GatewayError::OrderNotFound(id),
            other => GatewayError::Internal(other.to_string()),
        }
    }
}

/// JSON error body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let outcome = self.outcome();
        if outcome == OutcomeKind::InternalError {
            error!(error = %self, "Request failed");
        }
        (outcome.status(), Json(self.to_api_error())).into_response()
    }
}
