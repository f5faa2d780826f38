//! Order enrichment: each line item gets its catalog record and an image URL built from
//! the configured image root.

use crate::backend::CatalogBackend;
use crate::catalog_actor::CatalogError;
use crate::error::GatewayError;
use crate::model::{EnrichedLineItem, EnrichedOrder, Order, ProductId};
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// Joins orders with catalog data and derived image locations.
#[derive(Clone)]
pub struct OrderEnrichment {
    catalog: Arc<dyn CatalogBackend>,
    image_root: Arc<str>,
}

impl OrderEnrichment {
    pub fn new(catalog: Arc<dyn CatalogBackend>, image_root: impl Into<String>) -> Self {
        let image_root: String = image_root.into();
        Self {
            catalog,
            image_root: Arc::from(image_root),
        }
    }

    /// `{image_root}/{product_id}.jpg`
    pub fn image_for(&self, product_id: &ProductId) -> String {
        format!("{}/{}.jpg", self.image_root, product_id)
    }

    /// Enriches every line item of `order`, keeping their order.
    ///
    /// If the catalog no longer has one of the products, the whole order fails with
    /// [`GatewayError::InconsistentOrder`]; no partially enriched order is returned.
    #[instrument(skip_all, fields(order_id = %order.id))]
    pub async fn enrich(&self, order: Order) -> Result<EnrichedOrder, GatewayError> {
        let Order { id, order_details } = order;

        let mut enriched = Vec::with_capacity(order_details.len());
        for item in order_details {
            let product = match self.catalog.get(&item.product_id).await {
                Ok(product) => product,
                Err(CatalogError::NotFound(product_id)) => {
                    error!(%product_id, "Order references a product missing from the catalog");
                    return Err(GatewayError::InconsistentOrder {
                        order_id: id,
                        product_id,
                    });
                }
                Err(e) => return Err(e.into()),
            };
            let image = self.image_for(&item.product_id);
            debug!(product_id = %item.product_id, "Joined line item");
            enriched.push(EnrichedLineItem {
                product_id: item.product_id,
                price: item.price,
                quantity: item.quantity,
                product,
                image,
            });
        }

        Ok(EnrichedOrder {
            id,
            order_details: enriched,
        })
    }

    /// Enriches a page of orders. One failing order fails the page.
    pub async fn enrich_page(&self, orders: Vec<Order>) -> Result<Vec<EnrichedOrder>, GatewayError> {
        let mut enriched = Vec::with_capacity(orders.len());
        for order in orders {
            enriched.push(self.enrich(order).await?);
        }
        Ok(enriched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderId;
    use crate::orchestration::test_support::{order, product, Backends, IMAGE_ROOT};

    #[tokio::test]
    async fn test_every_line_item_gets_product_and_image() {
        let mut backends = Backends::new();
        backends
            .catalog_store
            .expect_get("the_odyssey".into())
            .return_ok(Some(product("the_odyssey")));
        backends
            .catalog_store
            .expect_get("the_enigma".into())
            .return_ok(Some(product("the_enigma")));
        let enrichment = OrderEnrichment::new(backends.catalog(), IMAGE_ROOT);

        let enriched = enrichment
            .enrich(order(1, &["the_odyssey", "the_enigma"]))
            .await
            .unwrap();

        assert_eq!(enriched.id, OrderId(1));
        let lines: Vec<(&str, &str, &str)> = enriched
            .order_details
            .iter()
            .map(|l| (l.product_id.as_str(), l.product.id.as_str(), l.image.as_str()))
            .collect();
        assert_eq!(
            lines,
            vec![
                ("the_odyssey", "the_odyssey", "http://images.test/the_odyssey.jpg"),
                ("the_enigma", "the_enigma", "http://images.test/the_enigma.jpg"),
            ]
        );
        backends.verify();
    }

    #[tokio::test]
    async fn test_missing_product_fails_the_whole_order() {
        let mut backends = Backends::new();
        backends
            .catalog_store
            .expect_get("the_odyssey".into())
            .return_ok(Some(product("the_odyssey")));
        backends.catalog_store.expect_get("deleted".into()).return_ok(None);
        let enrichment = OrderEnrichment::new(backends.catalog(), IMAGE_ROOT);

        let result = enrichment
            .enrich(order(5, &["the_odyssey", "deleted", "never_asked"]))
            .await;

        assert_eq!(
            result,
            Err(GatewayError::InconsistentOrder {
                order_id: OrderId(5),
                product_id: "deleted".into(),
            })
        );
        backends.verify();
    }

    #[tokio::test]
    async fn test_one_bad_order_fails_the_page() {
        let mut backends = Backends::new();
        backends
            .catalog_store
            .expect_get("A".into())
            .return_ok(Some(product("A")));
        backends.catalog_store.expect_get("B".into()).return_ok(None);
        let enrichment = OrderEnrichment::new(backends.catalog(), IMAGE_ROOT);

        let result = enrichment
            .enrich_page(vec![order(1, &["A"]), order(2, &["B"]), order(3, &["A"])])
            .await;

        assert!(matches!(
            result,
            Err(GatewayError::InconsistentOrder { order_id: OrderId(2), .. })
        ));
        backends.verify();
    }

    #[tokio::test]
    async fn test_image_location_format() {
        let backends = Backends::new();
        let enrichment = OrderEnrichment::new(backends.catalog(), "/static/images");
        assert_eq!(
            enrichment.image_for(&"the_enigma".into()),
            "/static/images/the_enigma.jpg"
        );
    }
}
