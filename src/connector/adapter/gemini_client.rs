use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::TextGenerator;
use crate::domain::DomainError;

/// Google Generative Language API endpoint.
pub const GEMINI_DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const MODELS_PATH: &str = "/v1beta/models";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(serde::Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(serde::Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: String,
}

/// HTTP client for the Gemini `generateContent` API.
///
/// Implements [`TextGenerator`] so the answer pipeline stays decoupled from
/// transport and vendor-specific serialization. The model identifier is part
/// of the request URL and supplied per call.
///
/// Point `base_url` at any Generative-Language-compatible server; the
/// credential travels as the `key` query parameter.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                DomainError::construction(format!("GeminiClient: failed to build HTTP client: {e}"))
            })?;

        let base: String = base_url.into();

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base.trim_end_matches('/').to_string(),
        })
    }

    /// Concatenate the text parts of the first candidate.
    fn extract_text(response: ApiResponse) -> Option<String> {
        let candidate = response.candidates.into_iter().next()?;
        if candidate.content.parts.is_empty() {
            return None;
        }

        Some(
            candidate
                .content
                .parts
                .into_iter()
                .map(|p| p.text)
                .collect::<Vec<_>>()
                .join(""),
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, DomainError> {
        let url = format!("{}{}/{}:generateContent", self.base_url, MODELS_PATH, model);

        let request = ApiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        debug!("POST {} ({} prompt chars)", url, prompt.len());
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::generation(format!("GeminiClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("GeminiClient: API returned {status}: {body}");
            return Err(DomainError::generation(format!(
                "GeminiClient: API returned {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::generation(format!("GeminiClient: failed to parse response: {e}"))
        })?;

        Self::extract_text(api_response).ok_or_else(|| {
            DomainError::generation("GeminiClient: response contained no candidates")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_reads_first_candidate() {
        let response: ApiResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "hello"}]}}]}"#,
        )
        .unwrap();

        assert_eq!(GeminiClient::extract_text(response), Some("hello".to_string()));
    }

    #[test]
    fn test_extract_text_joins_multiple_parts() {
        let response: ApiResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "a"}, {"text": "b"}]}}]}"#,
        )
        .unwrap();

        assert_eq!(GeminiClient::extract_text(response), Some("ab".to_string()));
    }

    #[test]
    fn test_extract_text_handles_missing_candidates() {
        let response: ApiResponse = serde_json::from_str(r#"{}"#).unwrap();

        assert_eq!(GeminiClient::extract_text(response), None);
    }

    #[test]
    fn test_extract_text_handles_empty_parts() {
        let response: ApiResponse =
            serde_json::from_str(r#"{"candidates": [{"content": {"parts": []}}]}"#).unwrap();

        assert_eq!(GeminiClient::extract_text(response), None);
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = GeminiClient::new("key", "http://localhost:9090/").unwrap();

        assert_eq!(client.base_url, "http://localhost:9090");
    }
}
