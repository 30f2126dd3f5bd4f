use crate::connector::adapter::{CATALOG_DEFAULT_BASE_URL, GEMINI_DEFAULT_BASE_URL};
use crate::domain::DomainError;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const GEMINI_BASE_URL_ENV: &str = "GEMINI_BASE_URL";
pub const CATALOG_BASE_URL_ENV: &str = "CATALOG_BASE_URL";

/// Value shipped in `.env.example`; treated the same as an unset key.
const API_KEY_PLACEHOLDER: &str = "your-gemini-api-key";

/// Process configuration, constructed once at startup and passed by
/// reference into the container. There is no global settings state.
#[derive(Debug, Clone)]
pub struct Settings {
    gemini_api_key: String,
    gemini_base_url: String,
    catalog_base_url: String,
}

impl Settings {
    /// Build settings from explicit values.
    ///
    /// Fails when the API key is empty or still holds the placeholder from
    /// `.env.example`; the service must not come up half-configured.
    pub fn new(
        gemini_api_key: impl Into<String>,
        gemini_base_url: impl Into<String>,
        catalog_base_url: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let gemini_api_key: String = gemini_api_key.into();

        if gemini_api_key.trim().is_empty() {
            return Err(DomainError::configuration(format!(
                "{API_KEY_ENV} is not set"
            )));
        }
        if gemini_api_key.trim() == API_KEY_PLACEHOLDER {
            return Err(DomainError::configuration(format!(
                "{API_KEY_ENV} still holds the placeholder value"
            )));
        }

        Ok(Self {
            gemini_api_key,
            gemini_base_url: gemini_base_url.into(),
            catalog_base_url: catalog_base_url.into(),
        })
    }

    /// Read settings from the environment, applying the default base URLs
    /// for anything not overridden.
    pub fn from_env() -> Result<Self, DomainError> {
        let api_key = std::env::var(API_KEY_ENV).unwrap_or_default();
        let gemini_base_url = std::env::var(GEMINI_BASE_URL_ENV)
            .unwrap_or_else(|_| GEMINI_DEFAULT_BASE_URL.to_string());
        let catalog_base_url = std::env::var(CATALOG_BASE_URL_ENV)
            .unwrap_or_else(|_| CATALOG_DEFAULT_BASE_URL.to_string());

        Self::new(api_key, gemini_base_url, catalog_base_url)
    }

    pub fn gemini_api_key(&self) -> &str {
        &self.gemini_api_key
    }

    pub fn gemini_base_url(&self) -> &str {
        &self.gemini_base_url
    }

    pub fn catalog_base_url(&self) -> &str {
        &self.catalog_base_url
    }
}
