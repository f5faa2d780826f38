//! # Gateway Service
//!
//! [`Gateway`] is what the HTTP handlers call. Each operation validates its input, runs the
//! relevant orchestration component and returns a [`GatewayError`] for anything that is not
//! a success.

use crate::backend::{CatalogBackend, OrdersBackend};
use crate::error::GatewayError;
use crate::model::{EnrichedOrder, OrderId, PaginatedOrders, Product, ProductId};
use crate::orchestration::{
    OrderEnrichment, PageQuery, PaginationCoordinator, ProductDeletionGuard, ProductLookupGuard,
};
use crate::validation::{parse_create_order, parse_product};
use std::sync::Arc;
use tracing::{info, instrument};

/// The client-facing API, composed over the two backends.
///
/// Cloning is cheap; every clone shares the same backend handles.
#[derive(Clone)]
pub struct Gateway {
    orders: Arc<dyn OrdersBackend>,
    catalog: Arc<dyn CatalogBackend>,
    lookup: ProductLookupGuard,
    deletion: ProductDeletionGuard,
    enrichment: OrderEnrichment,
    pagination: PaginationCoordinator,
}

impl Gateway {
    pub fn new(
        orders: Arc<dyn OrdersBackend>,
        catalog: Arc<dyn CatalogBackend>,
        image_root: impl Into<String>,
    ) -> Self {
        let enrichment = OrderEnrichment::new(catalog.clone(), image_root);
        Self {
            lookup: ProductLookupGuard::new(catalog.clone()),
            deletion: ProductDeletionGuard::new(orders.clone(), catalog.clone()),
            pagination: PaginationCoordinator::new(orders.clone(), enrichment.clone()),
            enrichment,
            orders,
            catalog,
        }
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &ProductId) -> Result<Product, GatewayError> {
        Ok(self.catalog.get(id).await?)
    }

    /// Validates `body` as a product and stores it under its own id.
    #[instrument(skip_all)]
    pub async fn create_product(&self, body: &[u8]) -> Result<ProductId, GatewayError> {
        let product = parse_product(body)?;
        let id = self.catalog.create(product).await?;
        info!(product_id = %id, "Product created");
        Ok(id)
    }

    pub async fn delete_product(&self, id: &ProductId) -> Result<(), GatewayError> {
        self.deletion.delete(id).await
    }

    /// `id` is the raw path segment. Anything other than plain decimal digits names no
    /// order; a sign prefix such as `+1` is not accepted.
    #[instrument(skip(self))]
    pub async fn get_order(&self, id: &str) -> Result<EnrichedOrder, GatewayError> {
        let not_found = || GatewayError::OrderNotFound(id.to_string());
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(not_found());
        }
        let order_id = id.parse::<u64>().map(OrderId).map_err(|_| not_found())?;
        let order = self.orders.get_order(order_id).await?;
        self.enrichment.enrich(order).await
    }

    /// Validates `body`, checks every referenced product, then creates the order.
    #[instrument(skip_all)]
    pub async fn create_order(&self, body: &[u8]) -> Result<OrderId, GatewayError> {
        let request = parse_create_order(body)?;
        self.lookup.validate(&request.order_details).await?;
        let id = self.orders.create_order(request.order_details).await?;
        info!(order_id = %id, "Order created");
        Ok(id)
    }

    pub async fn list_orders(&self, query: &PageQuery) -> Result<PaginatedOrders, GatewayError> {
        self.pagination.list(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestration::test_support::{order, product, Backends, IMAGE_ROOT};
    use record_actor::StoreError;
    use rstest::rstest;

    fn gateway(backends: &Backends) -> Gateway {
        Gateway::new(backends.orders(), backends.catalog(), IMAGE_ROOT)
    }

    const GHOST_ORDER: &[u8] = br#"{"order_details": [
        {"product_id": "A", "price": "10.00", "quantity": 1},
        {"product_id": "GHOST", "price": "5.00", "quantity": 1}
    ]}"#;

    #[tokio::test]
    async fn test_order_with_missing_product_is_never_created() {
        let mut backends = Backends::new();
        backends
            .catalog_store
            .expect_get("A".into())
            .return_ok(Some(product("A")));
        backends.catalog_store.expect_get("GHOST".into()).return_ok(None);

        let result = gateway(&backends).create_order(GHOST_ORDER).await;
        assert_eq!(result, Err(GatewayError::ProductNotFound("GHOST".into())));
        // No Insert was scripted for the ledger; verify() fails if one arrived.
        backends.verify();
        assert!(backends.orders_store.inserted().is_empty());
    }

    #[tokio::test]
    async fn test_order_is_created_after_all_products_resolve() {
        let mut backends = Backends::new();
        backends
            .catalog_store
            .expect_get("A".into())
            .return_ok(Some(product("A")));
        backends
            .catalog_store
            .expect_get("GHOST".into())
            .return_ok(Some(product("GHOST")));
        backends.orders_store.expect_insert().return_ok(OrderId(1));

        let id = gateway(&backends).create_order(GHOST_ORDER).await.unwrap();
        assert_eq!(id, OrderId(1));

        let drafts = backends.orders_store.inserted();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].len(), 2);
        backends.verify();
    }

    #[tokio::test]
    async fn test_invalid_order_body_reaches_no_backend() {
        let backends = Backends::new();

        let result = gateway(&backends)
            .create_order(br#"{"order_details": [{"product_id": "A"}]}"#)
            .await;
        assert!(matches!(result, Err(GatewayError::SchemaViolation(fields)) if fields.len() == 2));
        backends.verify();
    }

    #[rstest]
    #[case::letters("abc")]
    #[case::plus_sign("+1")]
    #[case::minus_sign("-1")]
    #[case::padded(" 1")]
    #[case::empty("")]
    #[case::overflow("18446744073709551616")]
    #[tokio::test]
    async fn test_non_numeric_order_id_is_not_found(#[case] id: &str) {
        let backends = Backends::new();

        // No Get was scripted for the ledger; one would be reported by verify().
        let result = gateway(&backends).get_order(id).await;
        assert_eq!(result, Err(GatewayError::OrderNotFound(id.into())));
        backends.verify();
    }

    #[tokio::test]
    async fn test_get_order_is_enriched() {
        let mut backends = Backends::new();
        backends
            .orders_store
            .expect_get(OrderId(7))
            .return_ok(Some(order(7, &["A"])));
        backends
            .catalog_store
            .expect_get("A".into())
            .return_ok(Some(product("A")));

        let enriched = gateway(&backends).get_order("7").await.unwrap();
        assert_eq!(enriched.order_details[0].product, product("A"));
        assert_eq!(enriched.order_details[0].image, "http://images.test/A.jpg");
        backends.verify();
    }

    #[tokio::test]
    async fn test_create_product_stores_validated_body() {
        let mut backends = Backends::new();
        backends.catalog_store.expect_insert().return_ok("A".into());

        let body = br#"{"id": "A", "title": "The A", "passenger_capacity": 100, "maximum_speed": 7.5, "in_stock": 3}"#;
        let id = gateway(&backends).create_product(body).await.unwrap();

        assert_eq!(id, ProductId::from("A"));
        assert_eq!(backends.catalog_store.inserted(), vec![product("A")]);
        backends.verify();
    }

    #[tokio::test]
    async fn test_catalog_failure_is_internal() {
        let mut backends = Backends::new();
        backends
            .catalog_store
            .expect_get("A".into())
            .return_err(StoreError::ActorDropped);

        let result = gateway(&backends).get_product(&"A".into()).await;
        assert!(matches!(result, Err(GatewayError::Internal(_))));
        backends.verify();
    }
}
