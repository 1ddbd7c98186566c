pub mod configuration;
pub mod error;
pub mod prompt;
pub mod session;

pub use configuration::{BackendConfig, CoachConfig, parse_config_content};
pub use error::AppError;
pub use prompt::{PromptRenderError, render_focus_prompt};
pub use session::SessionSnapshot;
