pub mod backend_config;
pub mod loader;

pub use backend_config::{BackendConfig, CoachConfig};
pub use loader::parse_config_content;
