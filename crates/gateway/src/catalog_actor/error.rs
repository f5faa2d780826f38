//! Error types for the catalog service.

use crate::model::ProductId;
use thiserror::Error;

/// Errors reported by the catalog backend.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The catalog refused to store the product.
    #[error("Invalid product record: {0}")]
    InvalidRecord(String),

    /// The catalog could not be reached or dropped the request.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}
