//! # Tracing Setup
//!
//! The gateway logs through `tracing` with structured fields. Store actors log each request
//! they serve with a `record_type` field, the typed clients and orchestration components run
//! inside `#[instrument]` spans, and `tower-http`'s `TraceLayer` opens one span per HTTP
//! request.
//!
//! ## Configuration
//!
//! The filter comes from `RUST_LOG`. When it is unset, [`DEFAULT_FILTER`] applies.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p gateway
//! ```
//!
//! **With `RUST_LOG=debug`**, deleting a product that no order references looks like:
//!
//! ```text
//! DEBUG request:delete:delete_product: Deletion guard state=CheckInUse
//! DEBUG request:delete:delete_product:get_order_by_product_id: Sending request
//! DEBUG Find record_type="Order" found=false
//! DEBUG request:delete:delete_product: Deletion guard state=Proceed
//! INFO Deleted record_type="Product" key=the_odyssey size=2
//! DEBUG request:delete:delete_product: Deletion guard state=Deleted
//! INFO request:delete:delete_product: Product deleted
//! ```

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,tower_http=debug";

pub fn setup_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
