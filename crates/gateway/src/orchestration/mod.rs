//! # Orchestration
//!
//! The request-scoped components that fan out across the two backends. Each holds only
//! shared backend handles and immutable configuration, so cloning them per request is cheap
//! and no state survives between requests.
//!
//! - [`ProductLookupGuard`] - all-or-nothing product existence check before order creation
//! - [`ProductDeletionGuard`] - refuses to delete products that an order still references
//! - [`OrderEnrichment`] - joins line items with catalog records and image locations
//! - [`PaginationCoordinator`] - one page of enriched orders plus the ledger total
//!
//! Per-item backend calls are issued sequentially in line-item order and the first failure
//! aborts the whole operation.
//!
//! ## Consistency
//!
//! Both guards are check-then-act. A product can be deleted after the lookup guard has seen
//! it, and an order can be created after the deletion guard has checked for one. Neither
//! backend offers a combined primitive, so these windows stay open.

pub mod deletion;
pub mod enrichment;
pub mod lookup;
pub mod pagination;

pub use deletion::{DeletionState, ProductDeletionGuard};
pub use enrichment::OrderEnrichment;
pub use lookup::ProductLookupGuard;
pub use pagination::{PageQuery, PageRequest, PaginationCoordinator};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::backend::{CatalogBackend, OrdersBackend};
    use crate::clients::{CatalogClient, OrdersClient};
    use crate::model::{LineItem, Order, OrderId, Product};
    use record_actor::mock::MockStore;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    pub const IMAGE_ROOT: &str = "http://images.test";

    /// Typed clients over scripted stores.
    pub struct Backends {
        pub catalog_store: MockStore<Product>,
        pub orders_store: MockStore<Order>,
    }

    impl Backends {
        pub fn new() -> Self {
            Self {
                catalog_store: MockStore::new(),
                orders_store: MockStore::new(),
            }
        }

        pub fn catalog(&self) -> Arc<dyn CatalogBackend> {
            Arc::new(CatalogClient::new(self.catalog_store.client()))
        }

        pub fn orders(&self) -> Arc<dyn OrdersBackend> {
            Arc::new(OrdersClient::new(self.orders_store.client()))
        }

        pub fn verify(&self) {
            self.catalog_store.verify();
            self.orders_store.verify();
        }
    }

    pub fn product(id: &str) -> Product {
        Product::new(id, format!("The {id}"), 100, 7.5, 3)
    }

    pub fn item(product_id: &str) -> LineItem {
        LineItem::new(product_id, Decimal::new(1999, 2), 2)
    }

    pub fn order(id: u64, product_ids: &[&str]) -> Order {
        Order {
            id: OrderId(id),
            order_details: product_ids.iter().map(|p| item(p)).collect(),
        }
    }
}
