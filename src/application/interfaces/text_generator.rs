use async_trait::async_trait;

use crate::domain::DomainError;

/// An interface for sending a prompt to a generative model and receiving
/// the response text.
///
/// Implementors encapsulate transport, serialization, and vendor-specific
/// API details. The model identifier is supplied per call because the two
/// answer paths use different models.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, DomainError>;
}
