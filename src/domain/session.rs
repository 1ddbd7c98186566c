//! Session snapshot domain model.

use serde::Serialize;

/// Point-in-time description of a focus session.
///
/// Values are passed through to the prompt as given: an empty vibe or a
/// `minute` past `duration` is not rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// Planned session length in minutes.
    pub duration: u32,
    /// Free-text tone descriptor, e.g. "calm" or "intense".
    pub vibe: String,
    /// Minutes elapsed so far.
    pub minute: u32,
    /// Number of distraction events recorded so far.
    pub cheat_count: u32,
}

impl SessionSnapshot {
    pub fn new(duration: u32, vibe: impl Into<String>, minute: u32, cheat_count: u32) -> Self {
        Self { duration, vibe: vibe.into(), minute, cheat_count }
    }
}

impl Default for SessionSnapshot {
    /// The parameter set exercised by the smoke harness.
    fn default() -> Self {
        Self::new(25, "calm", 10, 1)
    }
}
