use crate::config::GatewayConfig;
use crate::http;
use crate::service::Gateway;
use axum::Router;
use std::sync::Arc;
use tracing::{error, info};

/// Runs the in-process backends and owns the [`Gateway`] built over them.
///
/// `GatewaySystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the catalog and orders actors
/// - **Dependency Wiring**: Handing both clients and the image root to the [`Gateway`]
///
/// # Example
///
/// ```rust
/// use gateway::config::GatewayConfig;
/// use gateway::lifecycle::GatewaySystem;
///
/// #[tokio::main]
/// async fn main() {
///     let config = GatewayConfig {
///         image_root: "http://images.local".to_string(),
///         bind_addr: "127.0.0.1:0".parse().unwrap(),
///     };
///     let system = GatewaySystem::start(&config);
///     let product = system.gateway.get_product(&"unknown".into()).await;
///     assert!(product.is_err());
///     system.shutdown().await.unwrap();
/// }
/// ```
pub struct GatewaySystem {
    pub gateway: Gateway,

    /// Task handles for the running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl GatewaySystem {
    /// Spawns both backend actors and builds the gateway over their clients.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: &GatewayConfig) -> Self {
        let (catalog_actor, catalog_client) = crate::catalog_actor::new();
        let (orders_actor, orders_client) = crate::orders_actor::new();

        let catalog_handle = tokio::spawn(catalog_actor.run());
        let orders_handle = tokio::spawn(orders_actor.run());

        let gateway = Gateway::new(
            Arc::new(orders_client),
            Arc::new(catalog_client),
            config.image_root.clone(),
        );
        info!(image_root = %config.image_root, "System started");

        Self {
            gateway,
            handles: vec![catalog_handle, orders_handle],
        }
    }

    /// A router serving this system's gateway.
    pub fn router(&self) -> Router {
        http::router(self.gateway.clone())
    }

    /// Gracefully shuts down both actors.
    ///
    /// Dropping the gateway closes the actors' mailboxes once every other clone of it
    /// (routers included) is gone; only then do the actor tasks finish. Drop or stop
    /// serving all routers before calling this.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if both actors shut down cleanly
    /// - `Err(String)` if an actor task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.gateway);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
