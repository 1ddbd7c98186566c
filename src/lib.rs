//! focuscoach: motivational nudges for focus sessions from a local Ollama model.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::HttpOllamaClient;
pub use app::MessageGenerator;
pub use app::api::{generate_focus_message, smoke_test};
pub use app::commands::smoke::SmokeOutcome;
pub use app::configuration::load_config;
pub use domain::{AppError, BackendConfig, CoachConfig, SessionSnapshot, render_focus_prompt};
pub use ports::TextGenerator;
