//! Focus message generation: render the prompt, ask the backend, return its text.

use crate::adapters::HttpOllamaClient;
use crate::domain::{AppError, BackendConfig, SessionSnapshot, render_focus_prompt};
use crate::ports::TextGenerator;

/// Turns session snapshots into motivational messages.
///
/// Holds no per-call state; every `generate` is independent.
#[derive(Debug, Clone)]
pub struct MessageGenerator<G> {
    generator: G,
}

impl MessageGenerator<HttpOllamaClient> {
    /// Build a generator backed by the Ollama server described by `config`.
    pub fn from_config(config: &BackendConfig) -> Result<Self, AppError> {
        Ok(Self::new(HttpOllamaClient::new(config)?))
    }
}

impl<G: TextGenerator> MessageGenerator<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// The prompt that `generate` would send for this snapshot.
    pub fn render_prompt(&self, snapshot: &SessionSnapshot) -> Result<String, AppError> {
        Ok(render_focus_prompt(snapshot)?)
    }

    /// Generate one message. Blocks until the backend answers or fails.
    pub fn generate(&self, snapshot: &SessionSnapshot) -> Result<String, AppError> {
        let prompt = self.render_prompt(snapshot)?;
        self.generator.generate(&prompt)
    }
}
