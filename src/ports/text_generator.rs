//! Text-generation backend port definition.

use crate::domain::AppError;

/// Port for a text-generation backend: send a rendered prompt, receive text.
pub trait TextGenerator {
    /// Generate a completion for `prompt`.
    ///
    /// Returns the backend's text exactly as received.
    fn generate(&self, prompt: &str) -> Result<String, AppError>;
}

impl<T: TextGenerator + ?Sized> TextGenerator for &T {
    fn generate(&self, prompt: &str) -> Result<String, AppError> {
        (**self).generate(prompt)
    }
}

impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    fn generate(&self, prompt: &str) -> Result<String, AppError> {
        (**self).generate(prompt)
    }
}
