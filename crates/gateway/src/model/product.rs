/// Represents a product in the catalog.
///
/// # Record Store
/// This struct implements the [`Record`](record_actor::Record) trait, keyed by its
/// caller-assigned [`ProductId`]. See [`catalog_actor`](crate::catalog_actor).
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products. Assigned by whoever creates the product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub passenger_capacity: i64,
    pub maximum_speed: f64,
    pub in_stock: i64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier chosen by the caller
    /// * `title` - Display title
    /// * `passenger_capacity` - Number of passengers carried
    /// * `maximum_speed` - Top speed
    /// * `in_stock` - Units available
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        passenger_capacity: i64,
        maximum_speed: f64,
        in_stock: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            passenger_capacity,
            maximum_speed,
            in_stock,
        }
    }
}
