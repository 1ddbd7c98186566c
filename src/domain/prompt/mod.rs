pub mod error;
pub mod focus_prompt;

pub use error::PromptRenderError;
pub use focus_prompt::{FOCUS_PROMPT_NAME, FOCUS_PROMPT_TEMPLATE, render_focus_prompt};
