use async_trait::async_trait;

use crate::domain::{DomainError, ProductRecord};

/// What a catalog search returned: the matched products plus a
/// human-readable message describing how the match went (filters relaxed,
/// nothing in stock, and so on). The message is forwarded into the prompt
/// context verbatim.
#[derive(Debug, Clone, Default)]
pub struct LookupOutcome {
    pub products: Vec<ProductRecord>,
    pub message: String,
}

impl LookupOutcome {
    pub fn new(products: Vec<ProductRecord>, message: impl Into<String>) -> Self {
        Self {
            products,
            message: message.into(),
        }
    }
}

/// Searches the product catalog.
///
/// Implementors encapsulate the catalog service's transport and ranking;
/// consumers only hand over the raw question keyword and the interpreted
/// filters.
#[async_trait]
pub trait ProductLookup: Send + Sync {
    /// Search for products matching `keyword`, optionally constrained by
    /// `category` and `max_price`, returning at most `limit` records.
    async fn search(
        &self,
        keyword: &str,
        category: Option<&str>,
        max_price: Option<u64>,
        limit: usize,
    ) -> Result<LookupOutcome, DomainError>;
}
