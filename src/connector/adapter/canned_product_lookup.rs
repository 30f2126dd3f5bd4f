use async_trait::async_trait;
use tracing::debug;

use crate::application::{LookupOutcome, ProductLookup};
use crate::domain::{DomainError, ProductRecord, Specifications};

/// An in-memory [`ProductLookup`] over a small fixed catalog.
///
/// Used by `--offline` runs and tests so the pipeline works without the
/// catalog service or network access. Applies the same filter semantics the
/// real service exposes: category equality, price ceiling, result limit.
pub struct CannedProductLookup {
    catalog: Vec<ProductRecord>,
}

impl Default for CannedProductLookup {
    fn default() -> Self {
        Self::new()
    }
}

fn product(
    name: &str,
    price: u64,
    brand: &str,
    category: &str,
    rating: f64,
    description: &str,
) -> ProductRecord {
    ProductRecord {
        name: Some(name.to_string()),
        price: Some(price),
        brand: Some(brand.to_string()),
        category: Some(category.to_string()),
        specifications: Some(Specifications {
            rating: Some(rating),
            extra: serde_json::Map::new(),
        }),
        description: Some(description.to_string()),
    }
}

impl CannedProductLookup {
    pub fn new() -> Self {
        Self::with_catalog(vec![
            product(
                "Asus VivoBook 14",
                7_499_000,
                "Asus",
                "laptop",
                4.4,
                "Ringan untuk kerja harian, layar 14 inci dan SSD 512GB",
            ),
            product(
                "Lenovo Legion 5",
                16_999_000,
                "Lenovo",
                "laptop",
                4.7,
                "Laptop gaming dengan RTX 4060 dan layar 165Hz",
            ),
            product(
                "Samsung Galaxy A35",
                4_599_000,
                "Samsung",
                "smartphone",
                4.5,
                "Layar Super AMOLED, baterai 5000mAh, kamera 50MP",
            ),
            product(
                "Xiaomi Redmi Note 13",
                2_799_000,
                "Xiaomi",
                "smartphone",
                4.3,
                "Pilihan hemat dengan performa harian yang stabil",
            ),
            product(
                "Sony WH-CH520",
                899_000,
                "Sony",
                "headphone",
                4.6,
                "Headphone nirkabel dengan baterai hingga 50 jam",
            ),
            product(
                "Canon EOS R50",
                11_499_000,
                "Canon",
                "kamera",
                4.8,
                "Kamera mirrorless ringkas untuk kreator pemula",
            ),
        ])
    }

    pub fn with_catalog(catalog: Vec<ProductRecord>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl ProductLookup for CannedProductLookup {
    async fn search(
        &self,
        keyword: &str,
        category: Option<&str>,
        max_price: Option<u64>,
        limit: usize,
    ) -> Result<LookupOutcome, DomainError> {
        let products: Vec<ProductRecord> = self
            .catalog
            .iter()
            .filter(|p| match category {
                Some(wanted) => p.category.as_deref() == Some(wanted),
                None => true,
            })
            .filter(|p| match max_price {
                Some(ceiling) => p.price.is_some_and(|price| price <= ceiling),
                None => true,
            })
            .take(limit)
            .cloned()
            .collect();

        debug!(
            "Canned catalog matched {} products for keyword {:?}",
            products.len(),
            keyword
        );

        let message = if products.is_empty() {
            "Tidak ada produk di katalog yang cocok dengan filter tersebut.".to_string()
        } else {
            format!(
                "Berikut {} produk dari katalog yang cocok dengan pencarian Anda.",
                products.len()
            )
        };

        Ok(LookupOutcome::new(products, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_category_filter_restricts_results() {
        let lookup = CannedProductLookup::new();

        let outcome = lookup.search("hp", Some("smartphone"), None, 5).await.unwrap();

        assert!(!outcome.products.is_empty());
        assert!(outcome
            .products
            .iter()
            .all(|p| p.category.as_deref() == Some("smartphone")));
    }

    #[tokio::test]
    async fn test_price_ceiling_excludes_expensive_products() {
        let lookup = CannedProductLookup::new();

        let outcome = lookup
            .search("laptop murah", Some("laptop"), Some(8_000_000), 5)
            .await
            .unwrap();

        assert!(outcome
            .products
            .iter()
            .all(|p| p.price.is_some_and(|price| price <= 8_000_000)));
    }

    #[tokio::test]
    async fn test_limit_caps_result_count() {
        let lookup = CannedProductLookup::new();

        let outcome = lookup.search("", None, None, 2).await.unwrap();

        assert_eq!(outcome.products.len(), 2);
    }

    #[tokio::test]
    async fn test_no_match_returns_empty_with_message() {
        let lookup = CannedProductLookup::new();

        let outcome = lookup
            .search("drone", Some("drone"), None, 5)
            .await
            .unwrap();

        assert!(outcome.products.is_empty());
        assert!(!outcome.message.is_empty());
    }
}
