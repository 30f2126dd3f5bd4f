use std::sync::Arc;

use tracing::debug;

use crate::application::{AnswerQuestionUseCase, ProductLookup, TextGenerator};
use crate::config::Settings;
use crate::connector::adapter::{
    CannedProductLookup, EchoTextGenerator, GeminiClient, HttpProductLookup,
};
use crate::domain::DomainError;

/// One-time dependency wiring: settings in, collaborator handles out.
///
/// Adapters are constructed exactly once and shared; every use case call
/// gets the same immutable handles. Construction failures propagate so the
/// service never comes up with a half-initialized collaborator set.
pub struct Container {
    product_lookup: Arc<dyn ProductLookup>,
    text_generator: Arc<dyn TextGenerator>,
}

impl Container {
    /// Wire the live adapters from validated settings.
    pub fn new(settings: &Settings) -> Result<Self, DomainError> {
        debug!(
            "Wiring live collaborators (catalog at {})",
            settings.catalog_base_url()
        );

        let product_lookup = Arc::new(HttpProductLookup::new(settings.catalog_base_url())?);
        let text_generator = Arc::new(GeminiClient::new(
            settings.gemini_api_key(),
            settings.gemini_base_url(),
        )?);

        Ok(Self {
            product_lookup,
            text_generator,
        })
    }

    /// Wire the built-in catalog and the echo generator; no settings, no
    /// network.
    pub fn offline() -> Self {
        debug!("Wiring offline collaborators (canned catalog, echo generator)");

        Self {
            product_lookup: Arc::new(CannedProductLookup::new()),
            text_generator: Arc::new(EchoTextGenerator::new()),
        }
    }

    pub fn answer_use_case(&self) -> AnswerQuestionUseCase {
        AnswerQuestionUseCase::new(self.product_lookup.clone(), self.text_generator.clone())
    }
}
