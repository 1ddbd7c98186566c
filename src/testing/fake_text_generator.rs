use crate::domain::AppError;
use crate::ports::TextGenerator;
use std::sync::{Arc, Mutex};

/// Stand-in backend that records prompts and replays a canned outcome.
#[derive(Clone)]
pub struct FakeTextGenerator {
    pub received_prompts: Arc<Mutex<Vec<String>>>,
    outcome: FakeOutcome,
}

#[derive(Clone)]
enum FakeOutcome {
    Reply(String),
    Unavailable(String),
    Protocol { message: String, status: Option<u16> },
}

impl FakeTextGenerator {
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_outcome(FakeOutcome::Reply(text.into()))
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::with_outcome(FakeOutcome::Unavailable(reason.into()))
    }

    pub fn protocol_error(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::with_outcome(FakeOutcome::Protocol { message: message.into(), status })
    }

    fn with_outcome(outcome: FakeOutcome) -> Self {
        Self { received_prompts: Arc::new(Mutex::new(vec![])), outcome }
    }

    pub fn get_received_prompts(&self) -> Vec<String> {
        self.received_prompts.lock().unwrap().clone()
    }
}

impl TextGenerator for FakeTextGenerator {
    fn generate(&self, prompt: &str) -> Result<String, AppError> {
        self.received_prompts.lock().unwrap().push(prompt.to_string());
        match &self.outcome {
            FakeOutcome::Reply(text) => Ok(text.clone()),
            FakeOutcome::Unavailable(reason) => Err(AppError::BackendUnavailable(reason.clone())),
            FakeOutcome::Protocol { message, status } => {
                Err(AppError::BackendProtocol { message: message.clone(), status: *status })
            }
        }
    }
}
