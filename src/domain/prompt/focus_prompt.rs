use std::sync::OnceLock;

use minijinja::{AutoEscape, Environment, UndefinedBehavior};

use super::error::PromptRenderError;
use crate::domain::SessionSnapshot;

/// Name used for the focus prompt in render errors.
pub const FOCUS_PROMPT_NAME: &str = "focus_message";

/// Instruction sent to the model for every focus message.
///
/// Opens with a blank line; the model sees the text exactly as laid out here.
pub const FOCUS_PROMPT_TEMPLATE: &str = "
You're a motivational AI assistant helping a human stay focused during a deep work session.

Their current session:
- Duration: {{ duration }} minutes
- Vibe: {{ vibe }}
- Minutes passed: {{ minute }}
- Cheat Events: {{ cheat_count }}

Give a short, powerful message to keep them focused. Use a tone matching the vibe. Be concise and human.
";

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Render the focus prompt for a session snapshot.
///
/// Values are inserted verbatim (no escaping). Template syntax inside the
/// vibe is not evaluated.
pub fn render_focus_prompt(snapshot: &SessionSnapshot) -> Result<String, PromptRenderError> {
    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env
    });

    env.render_str(FOCUS_PROMPT_TEMPLATE, snapshot).map_err(|err| {
        PromptRenderError::TemplateRenderError {
            template: FOCUS_PROMPT_NAME.to_string(),
            reason: err.to_string(),
        }
    })
}
