//! # Orders Gateway
//!
//! An HTTP gateway that composes an order ledger and a product catalog into one
//! client-facing API. The gateway owns no records; it validates requests, fans out to the
//! two backends, enriches orders with catalog data and translates backend conditions into
//! client-facing outcomes.
//!
//! ## Module Tour
//!
//! ### 1. The Core ([`orchestration`])
//! The invariants live here.
//! - [`ProductLookupGuard`](orchestration::ProductLookupGuard): an order is never created
//!   for a product the catalog does not have.
//! - [`ProductDeletionGuard`](orchestration::ProductDeletionGuard): a product referenced by
//!   an order is never deleted.
//! - [`OrderEnrichment`](orchestration::OrderEnrichment): every returned line item carries
//!   its product and image, or the whole response fails.
//! - [`PaginationCoordinator`](orchestration::PaginationCoordinator): a page of orders with
//!   the ledger total.
//!
//! ### 2. The Seams ([`backend`], [`clients`])
//! [`CatalogBackend`](backend::CatalogBackend) and [`OrdersBackend`](backend::OrdersBackend)
//! are the only way the gateway talks to a backend. The in-process clients implement them
//! over [`record_actor::StoreClient`].
//!
//! ### 3. The Backends ([`catalog_actor`], [`orders_actor`])
//! [`Record`](record_actor::Record) implementations for [`Product`](model::Product) and
//! [`Order`](model::Order), run as in-memory actors.
//!
//! ### 4. The Edges ([`validation`], [`error`], [`http`])
//! Request bodies in, [`GatewayError`](error::GatewayError) outcomes out.
//!
//! ### 5. The Wiring ([`config`], [`lifecycle`])
//! [`GatewaySystem`](lifecycle::GatewaySystem) starts the actors and builds the
//! [`Gateway`](service::Gateway).
//!
//! ## Running
//!
//! ```bash
//! PRODUCT_IMAGE_ROOT=http://images.local RUST_LOG=info cargo run -p gateway
//! ```

pub mod backend;
pub mod catalog_actor;
pub mod clients;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod orchestration;
pub mod orders_actor;
pub mod service;
pub mod validation;
