//! # Configuration
//!
//! Read once at process start and never changed afterwards.
//!
//! | Variable             | Required | Default        |
//! |----------------------|----------|----------------|
//! | `PRODUCT_IMAGE_ROOT` | yes      |                |
//! | `GATEWAY_BIND_ADDR`  | no       | `0.0.0.0:8000` |
//!
//! A `.env` file in the working directory is loaded by `main` before these are read.

use std::net::SocketAddr;
use thiserror::Error;

pub const IMAGE_ROOT_VAR: &str = "PRODUCT_IMAGE_ROOT";
pub const BIND_ADDR_VAR: &str = "GATEWAY_BIND_ADDR";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid bind address '{value}': {reason}")]
    InvalidBindAddr { value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    /// Prefix of every product image location.
    pub image_root: String,
    pub bind_addr: SocketAddr,
}

impl GatewayConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, which returns a variable's value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let image_root = lookup(IMAGE_ROOT_VAR).ok_or(ConfigError::Missing(IMAGE_ROOT_VAR))?;

        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidBindAddr {
                value: raw_addr.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            image_root,
            bind_addr,
        })
    }
}
