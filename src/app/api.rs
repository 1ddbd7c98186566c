//! Public library API.

use std::io::Write;

use crate::app::MessageGenerator;
use crate::app::commands::smoke::{self, SmokeOutcome};
use crate::domain::{AppError, BackendConfig, SessionSnapshot};

/// Generate one focus message from the backend described by `config`.
pub fn generate_focus_message(
    config: &BackendConfig,
    duration: u32,
    vibe: &str,
    minute: u32,
    cheat_count: u32,
) -> Result<String, AppError> {
    let generator = MessageGenerator::from_config(config)?;
    generator.generate(&SessionSnapshot::new(duration, vibe, minute, cheat_count))
}

/// Run the smoke test with the built-in parameters, reporting to `out`.
///
/// Only a failure to write to `out` is returned as an error; an unusable
/// config or backend ends up in the returned `SmokeOutcome`.
pub fn smoke_test<W: Write>(config: &BackendConfig, out: &mut W) -> Result<SmokeOutcome, AppError> {
    let generator = MessageGenerator::from_config(config);
    Ok(smoke::execute(generator, &SessionSnapshot::default(), &config.model, out)?)
}
