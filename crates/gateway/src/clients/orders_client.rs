//! # Orders Client
//!
//! Provides the [`OrdersBackend`] interface on top of a `StoreClient<Order>`.
use crate::backend::OrdersBackend;
use crate::model::{LineItem, Order, OrderId, ProductId};
use crate::orders_actor::OrdersError;
use async_trait::async_trait;
use record_actor::{BackendClient, StoreClient, StoreError};
use tracing::{debug, info, instrument};

/// Client for interacting with the Orders actor.
#[derive(Clone)]
pub struct OrdersClient {
    inner: StoreClient<Order>,
}

impl OrdersClient {
    pub fn new(inner: StoreClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl BackendClient<Order> for OrdersClient {
    type Error = OrdersError;

    fn inner(&self) -> &StoreClient<Order> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        match e {
            StoreError::NotFound(id) => OrdersError::NotFound(id),
            StoreError::RecordError(source) => OrdersError::InvalidRecord(source.to_string()),
            transport => OrdersError::Unavailable(transport.to_string()),
        }
    }
}

#[async_trait]
impl OrdersBackend for OrdersClient {
    #[instrument(skip(self))]
    async fn get_order(&self, id: OrderId) -> Result<Order, OrdersError> {
        self.fetch(id)
            .await?
            .ok_or_else(|| OrdersError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    async fn get_order_by_product_id(&self, product_id: &ProductId) -> Result<Order, OrdersError> {
        debug!("Sending request");
        let wanted = product_id.clone();
        self.inner
            .find(move |order: &Order| order.references(&wanted))
            .await
            .map_err(Self::map_error)?
            .ok_or_else(|| OrdersError::NotFound(product_id.to_string()))
    }

    #[instrument(skip(self, line_items), fields(items = line_items.len()))]
    async fn create_order(&self, line_items: Vec<LineItem>) -> Result<OrderId, OrdersError> {
        debug!(?line_items, "create_order called");
        info!("Sending create_order to actor");
        self.inner.insert(line_items).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn list_orders(&self, page: u32, per_page: u32) -> Result<Vec<Order>, OrdersError> {
        debug!("Sending request");
        self.inner.page(page, per_page).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn get_total_orders(&self) -> Result<u64, OrdersError> {
        debug!("Sending request");
        self.inner.count().await.map_err(Self::map_error)
    }
}
