//! Record trait implementation for the Product domain type.
//!
//! Products are stored under the id their creator chose, so [`Record::assign_key`] ignores
//! the store's sequence number. Storing a product whose id already exists replaces it.

use super::error::CatalogError;
use crate::model::{Product, ProductId};
use record_actor::Record;

impl Record for Product {
    type Key = ProductId;
    type Draft = Product;
    type Error = CatalogError;

    fn assign_key(_sequence: u64, draft: &Product) -> ProductId {
        draft.id.clone()
    }

    fn from_draft(id: ProductId, draft: Product) -> Result<Self, CatalogError> {
        if id.as_str().is_empty() {
            return Err(CatalogError::InvalidRecord(
                "product id must not be empty".to_string(),
            ));
        }
        Ok(draft)
    }
}
