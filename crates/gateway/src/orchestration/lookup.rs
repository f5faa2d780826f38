//! Product existence check for new orders.

use crate::backend::CatalogBackend;
use crate::catalog_actor::CatalogError;
use crate::error::GatewayError;
use crate::model::LineItem;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Checks that every product an order refers to exists before the order is created.
#[derive(Clone)]
pub struct ProductLookupGuard {
    catalog: Arc<dyn CatalogBackend>,
}

impl ProductLookupGuard {
    pub fn new(catalog: Arc<dyn CatalogBackend>) -> Self {
        Self { catalog }
    }

    /// Looks up each line item's product in request order.
    ///
    /// Stops at the first product the catalog does not have and reports it as
    /// [`GatewayError::ProductNotFound`]; later items are not checked. Nothing is written to
    /// either backend here.
    #[instrument(skip_all, fields(items = order_details.len()))]
    pub async fn validate(&self, order_details: &[LineItem]) -> Result<(), GatewayError> {
        for item in order_details {
            match self.catalog.get(&item.product_id).await {
                Ok(_) => debug!(product_id = %item.product_id, "Product exists"),
                Err(CatalogError::NotFound(id)) => {
                    warn!(product_id = %id, "Order references missing product");
                    return Err(GatewayError::ProductNotFound(id));
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;
    use crate::orchestration::test_support::{item, product, Backends};
    use record_actor::StoreError;

    #[tokio::test]
    async fn test_all_products_present() {
        let mut backends = Backends::new();
        backends
            .catalog_store
            .expect_get("A".into())
            .return_ok(Some(product("A")));
        backends
            .catalog_store
            .expect_get("B".into())
            .return_ok(Some(product("B")));
        let guard = ProductLookupGuard::new(backends.catalog());

        let result = guard.validate(&[item("A"), item("B")]).await;
        assert_eq!(result, Ok(()));
        backends.verify();
    }

    #[tokio::test]
    async fn test_first_missing_product_stops_the_check() {
        let mut backends = Backends::new();
        backends
            .catalog_store
            .expect_get("A".into())
            .return_ok(Some(product("A")));
        backends.catalog_store.expect_get("GHOST".into()).return_ok(None);
        let guard = ProductLookupGuard::new(backends.catalog());

        // "LATER" is never looked up. An extra request would show up in verify().
        let result = guard
            .validate(&[item("A"), item("GHOST"), item("LATER")])
            .await;
        assert_eq!(
            result,
            Err(GatewayError::ProductNotFound(ProductId::from("GHOST")))
        );
        backends.verify();
    }

    #[tokio::test]
    async fn test_empty_order_needs_no_lookups() {
        let backends = Backends::new();
        let guard = ProductLookupGuard::new(backends.catalog());

        assert_eq!(guard.validate(&[]).await, Ok(()));
        backends.verify();
    }

    #[tokio::test]
    async fn test_unreachable_catalog_is_internal() {
        let mut backends = Backends::new();
        backends
            .catalog_store
            .expect_get("A".into())
            .return_err(StoreError::ActorClosed);
        let guard = ProductLookupGuard::new(backends.catalog());

        let result = guard.validate(&[item("A")]).await;
        assert!(matches!(result, Err(GatewayError::Internal(_))));
        backends.verify();
    }
}
