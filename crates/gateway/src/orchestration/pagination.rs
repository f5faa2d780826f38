//! Page listing of orders. [`PageQuery`] holds the raw query values, [`PageRequest`] the
//! coerced ones, and [`PaginationCoordinator`] fetches and enriches a single page.

use crate::backend::OrdersBackend;
use crate::error::GatewayError;
use crate::model::PaginatedOrders;
use crate::orchestration::OrderEnrichment;
use crate::validation::FieldError;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, instrument};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Raw `page` / `per_page` query values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

/// Coerced pagination parameters. Both are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    /// Absent values take their defaults; present values must be integers ≥ 1.
    pub fn from_query(query: &PageQuery) -> Result<Self, GatewayError> {
        let mut errors = Vec::new();
        let page = coerce(&mut errors, "page", query.page.as_deref(), DEFAULT_PAGE);
        let per_page = coerce(
            &mut errors,
            "per_page",
            query.per_page.as_deref(),
            DEFAULT_PER_PAGE,
        );

        if !errors.is_empty() {
            return Err(GatewayError::SchemaViolation(errors));
        }
        Ok(Self { page, per_page })
    }
}

fn coerce(errors: &mut Vec<FieldError>, field: &str, value: Option<&str>, default: u32) -> u32 {
    let Some(raw) = value else {
        return default;
    };
    match raw.trim().parse::<i64>() {
        Ok(n) if n < 1 => errors.push(FieldError::new(field, "Must be at least 1.")),
        Ok(n) => match u32::try_from(n) {
            Ok(n) => return n,
            Err(_) => errors.push(FieldError::new(field, "Number too large.")),
        },
        Err(_) => errors.push(FieldError::new(field, "Not a valid integer.")),
    }
    default
}

/// Serves the order listing: one page from the ledger, the ledger total, then enrichment.
#[derive(Clone)]
pub struct PaginationCoordinator {
    orders: Arc<dyn OrdersBackend>,
    enrichment: OrderEnrichment,
}

impl PaginationCoordinator {
    pub fn new(orders: Arc<dyn OrdersBackend>, enrichment: OrderEnrichment) -> Self {
        Self { orders, enrichment }
    }

    /// `total` is taken from its own ledger request, not from the page length. The two
    /// requests do not share a snapshot.
    #[instrument(skip(self))]
    pub async fn list(&self, query: &PageQuery) -> Result<PaginatedOrders, GatewayError> {
        let request = PageRequest::from_query(query)?;

        let orders = self
            .orders
            .list_orders(request.page, request.per_page)
            .await?;
        let total = self.orders.get_total_orders().await?;
        debug!(returned = orders.len(), total, "Fetched page");

        let orders = self.enrichment.enrich_page(orders).await?;
        Ok(PaginatedOrders { orders, total })
    }
}
