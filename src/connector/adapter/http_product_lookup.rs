use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::{LookupOutcome, ProductLookup};
use crate::domain::{DomainError, ProductRecord};

/// Default target: the catalog search service running locally.
pub const CATALOG_DEFAULT_BASE_URL: &str = "http://localhost:8001";
const SEARCH_PATH: &str = "/api/products/search";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(serde::Serialize)]
struct SearchRequest<'a> {
    keyword: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_price: Option<u64>,
    limit: usize,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Vec<ProductRecord>,
    #[serde(default)]
    message: String,
}

/// HTTP client for the external catalog search service.
///
/// The service owns ranking and fallback relaxation; this adapter only
/// forwards the keyword and filters and maps the wire shape onto
/// [`LookupOutcome`].
pub struct HttpProductLookup {
    client: reqwest::Client,
    url: String,
}

impl HttpProductLookup {
    pub fn new(base_url: impl Into<String>) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                DomainError::construction(format!(
                    "HttpProductLookup: failed to build HTTP client: {e}"
                ))
            })?;

        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), SEARCH_PATH);

        Ok(Self { client, url })
    }
}

#[async_trait]
impl ProductLookup for HttpProductLookup {
    async fn search(
        &self,
        keyword: &str,
        category: Option<&str>,
        max_price: Option<u64>,
        limit: usize,
    ) -> Result<LookupOutcome, DomainError> {
        let request = SearchRequest {
            keyword,
            category,
            max_price,
            limit,
        };

        debug!("POST {}", self.url);
        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::lookup(format!("HttpProductLookup: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("HttpProductLookup: catalog returned {status}: {body}");
            return Err(DomainError::lookup(format!(
                "HttpProductLookup: catalog returned {status}"
            )));
        }

        let search_response: SearchResponse = response.json().await.map_err(|e| {
            DomainError::lookup(format!("HttpProductLookup: failed to parse response: {e}"))
        })?;

        Ok(LookupOutcome::new(
            search_response.products,
            search_response.message,
        ))
    }
}
