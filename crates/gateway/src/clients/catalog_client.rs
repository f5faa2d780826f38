//! # Catalog Client
//!
//! Provides the [`CatalogBackend`] interface on top of a `StoreClient<Product>`.
use crate::backend::CatalogBackend;
use crate::catalog_actor::CatalogError;
use crate::model::{Product, ProductId};
use async_trait::async_trait;
use record_actor::{BackendClient, StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the Catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: StoreClient<Product>,
}

impl CatalogClient {
    pub fn new(inner: StoreClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl BackendClient<Product> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &StoreClient<Product> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        match e {
            StoreError::NotFound(id) => CatalogError::NotFound(ProductId(id)),
            StoreError::RecordError(source) => CatalogError::InvalidRecord(source.to_string()),
            transport => CatalogError::Unavailable(transport.to_string()),
        }
    }
}

#[async_trait]
impl CatalogBackend for CatalogClient {
    #[instrument(skip(self))]
    async fn get(&self, id: &ProductId) -> Result<Product, CatalogError> {
        self.fetch(id.clone())
            .await?
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &ProductId) -> Result<(), CatalogError> {
        self.remove(id.clone()).await
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn create(&self, product: Product) -> Result<ProductId, CatalogError> {
        debug!(?product, "Sending request");
        self.inner.insert(product).await.map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use record_actor::mock::MockStore;

    fn odyssey() -> Product {
        Product::new("the_odyssey", "The Odyssey", 101, 5.0, 10)
    }

    #[tokio::test]
    async fn test_get_returns_product() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_get(ProductId::from("the_odyssey"))
            .return_ok(Some(odyssey()));
        let client = CatalogClient::new(mock.client());

        let product = client.get(&ProductId::from("the_odyssey")).await.unwrap();
        assert_eq!(product, odyssey());
        mock.verify();
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_get(ProductId::from("ghost")).return_ok(None);
        let client = CatalogClient::new(mock.client());

        let result = client.get(&ProductId::from("ghost")).await;
        assert_eq!(result, Err(CatalogError::NotFound(ProductId::from("ghost"))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_delete_missing_product_is_not_found() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_delete(ProductId::from("ghost"))
            .return_err(StoreError::NotFound("ghost".to_string()));
        let client = CatalogClient::new(mock.client());

        let result = client.delete(&ProductId::from("ghost")).await;
        assert_eq!(result, Err(CatalogError::NotFound(ProductId::from("ghost"))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_transport_failure_is_unavailable() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_get(ProductId::from("the_odyssey"))
            .return_err(StoreError::ActorDropped);
        let client = CatalogClient::new(mock.client());

        let result = client.get(&ProductId::from("the_odyssey")).await;
        assert!(matches!(result, Err(CatalogError::Unavailable(_))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_create_sends_product_as_draft() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_insert().return_ok(ProductId::from("the_odyssey"));
        let client = CatalogClient::new(mock.client());

        let id = client.create(odyssey()).await.unwrap();
        assert_eq!(id, ProductId::from("the_odyssey"));
        assert_eq!(mock.inserted(), vec![odyssey()]);
        mock.verify();
    }
}
