//! # Lifecycle
//!
//! Process wiring: starting and stopping the backend actors, and tracing setup.

pub mod gateway_system;
pub mod tracing;

pub use gateway_system::GatewaySystem;
pub use self::tracing::setup_tracing;
