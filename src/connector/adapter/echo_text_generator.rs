use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::TextGenerator;
use crate::domain::DomainError;

const DEFAULT_REPLY: &str =
    "Berdasarkan produk di atas, berikut rekomendasi saya untuk kebutuhan Anda.";

/// A deterministic [`TextGenerator`] for `--offline` runs and tests.
///
/// Always replies with a fixed sentence and records every `(model, prompt)`
/// pair it receives so tests can assert on the assembled prompt.
pub struct EchoTextGenerator {
    reply: String,
    calls: Mutex<Vec<(String, String)>>,
}

impl Default for EchoTextGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl EchoTextGenerator {
    pub fn new() -> Self {
        Self::with_reply(DEFAULT_REPLY)
    }

    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// The `(model, prompt)` pairs seen so far, in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for EchoTextGenerator {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, DomainError> {
        debug!("Echo generation for model {model} ({} prompt chars)", prompt.len());

        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), prompt.to_string()));

        Ok(self.reply.clone())
    }
}
