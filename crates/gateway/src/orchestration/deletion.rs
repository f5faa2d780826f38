//! # Guarded Product Deletion
//!
//! [`ProductDeletionGuard`] walks a small state machine per request: it asks the orders
//! ledger whether any order still references the product, and only deletes from the
//! catalog when none does. [`DeletionState`] names each step so the log shows where a
//! deletion stopped.

use crate::backend::{CatalogBackend, OrdersBackend};
use crate::catalog_actor::CatalogError;
use crate::error::GatewayError;
use crate::model::{OrderId, ProductId};
use crate::orders_actor::OrdersError;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// States of one guarded deletion.
///
/// `CheckInUse` is the entry state. `Refuse`, `Deleted` and `NotFound` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionState {
    CheckInUse,
    /// An order still references the product.
    Refuse(OrderId),
    Proceed,
    Deleted,
    NotFound,
}

/// Deletes a product only when no order references it.
#[derive(Clone)]
pub struct ProductDeletionGuard {
    orders: Arc<dyn OrdersBackend>,
    catalog: Arc<dyn CatalogBackend>,
}

impl ProductDeletionGuard {
    pub fn new(orders: Arc<dyn OrdersBackend>, catalog: Arc<dyn CatalogBackend>) -> Self {
        Self { orders, catalog }
    }

    /// Runs the guard from `CheckInUse` to a terminal state.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &ProductId) -> Result<(), GatewayError> {
        let mut state = DeletionState::CheckInUse;
        loop {
            debug!(?state, "Deletion guard");
            state = match state {
                DeletionState::CheckInUse => self.check_in_use(id).await?,
                DeletionState::Proceed => self.proceed(id).await?,
                DeletionState::Refuse(order_id) => {
                    info!(%order_id, "Product is in use, deletion refused");
                    return Err(GatewayError::UnavailableProduct {
                        product_id: id.clone(),
                        order_id,
                    });
                }
                DeletionState::Deleted => {
                    info!("Product deleted");
                    return Ok(());
                }
                DeletionState::NotFound => return Err(GatewayError::ProductNotFound(id.clone())),
            };
        }
    }

    async fn check_in_use(&self, id: &ProductId) -> Result<DeletionState, GatewayError> {
        match self.orders.get_order_by_product_id(id).await {
            Ok(order) => Ok(DeletionState::Refuse(order.id)),
            Err(OrdersError::NotFound(_)) => Ok(DeletionState::Proceed),
            Err(e) => Err(e.into()),
        }
    }

    async fn proceed(&self, id: &ProductId) -> Result<DeletionState, GatewayError> {
        match self.catalog.delete(id).await {
            Ok(()) => Ok(DeletionState::Deleted),
            Err(CatalogError::NotFound(_)) => Ok(DeletionState::NotFound),
            Err(e) => Err(e.into()),
        }
    }
}
