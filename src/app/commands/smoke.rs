//! Manual smoke test against a live backend.
//!
//! Prints what it sends and what comes back. A backend failure is reported on
//! the console and does not fail the command.

use std::io::{self, Write};

use crate::app::MessageGenerator;
use crate::domain::{AppError, SessionSnapshot};
use crate::ports::TextGenerator;

const SEPARATOR: &str = "--------------------------------------------------";

/// What happened during a smoke run.
#[derive(Debug)]
pub enum SmokeOutcome {
    Generated { message: String },
    Failed { error: AppError },
}

impl SmokeOutcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, SmokeOutcome::Generated { .. })
    }
}

/// Run one generation for `snapshot` and report it to `out`.
///
/// A generator that failed to build is reported like a failed generation.
/// `model` is only used in the hint printed on failure. The returned error is
/// reserved for failures writing to `out`.
pub fn execute<G, W>(
    generator: Result<MessageGenerator<G>, AppError>,
    snapshot: &SessionSnapshot,
    model: &str,
    out: &mut W,
) -> io::Result<SmokeOutcome>
where
    G: TextGenerator,
    W: Write,
{
    writeln!(out, "🧪 Testing Focus Message Generation")?;
    writeln!(
        out,
        "Parameters: duration={}, minute={}, vibe='{}', cheat_count={}",
        snapshot.duration, snapshot.minute, snapshot.vibe, snapshot.cheat_count
    )?;
    writeln!(out, "{}", SEPARATOR)?;

    match generator.and_then(|generator| generator.generate(snapshot)) {
        Ok(message) => {
            writeln!(out, "✅ Generated Message:")?;
            writeln!(out, "{}", message)?;
            writeln!(out, "{}", SEPARATOR)?;
            Ok(SmokeOutcome::Generated { message })
        }
        Err(error) => {
            writeln!(out, "❌ Error generating message: {}", error)?;
            writeln!(out, "💡 Make sure Ollama is running with {} model installed", model)?;
            Ok(SmokeOutcome::Failed { error })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTextGenerator;

    fn run(fake: FakeTextGenerator) -> (SmokeOutcome, String) {
        let generator = Ok(MessageGenerator::new(fake));
        let mut out = Vec::new();
        let outcome = execute(generator, &SessionSnapshot::default(), "gemma:2b", &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn success_prints_parameters_and_message() {
        let (outcome, output) = run(FakeTextGenerator::replying("Ten minutes in. Keep going."));

        assert!(outcome.is_generated());
        let expected = format!(
            "🧪 Testing Focus Message Generation\n\
             Parameters: duration=25, minute=10, vibe='calm', cheat_count=1\n\
             {sep}\n\
             ✅ Generated Message:\n\
             Ten minutes in. Keep going.\n\
             {sep}\n",
            sep = SEPARATOR
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn unavailable_backend_prints_error_and_hint() {
        let (outcome, output) = run(FakeTextGenerator::unavailable("connection refused"));

        assert!(matches!(outcome, SmokeOutcome::Failed { error: AppError::BackendUnavailable(_) }));
        assert!(output.contains("Parameters: duration=25, minute=10, vibe='calm', cheat_count=1"));
        assert!(output.contains(
            "❌ Error generating message: Model backend unavailable: connection refused"
        ));
        assert!(output.contains("💡 Make sure Ollama is running with gemma:2b model installed"));
        assert!(!output.contains("✅"));
    }

    #[test]
    fn protocol_error_is_reported_not_propagated() {
        let (outcome, output) =
            run(FakeTextGenerator::protocol_error("model 'gemma:2b' not found", Some(404)));

        match outcome {
            SmokeOutcome::Failed { error } => assert!(!error.is_recoverable()),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(output.contains("Error generating message: Model backend error: model 'gemma:2b' not found"));
    }

    #[test]
    fn hint_names_the_configured_model() {
        let generator = Ok(MessageGenerator::new(FakeTextGenerator::unavailable("refused")));
        let mut out = Vec::new();
        execute(generator, &SessionSnapshot::default(), "phi3:mini", &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("running with phi3:mini model installed"));
    }

    #[test]
    fn generator_build_failure_is_reported_like_a_backend_failure() {
        let generator: Result<MessageGenerator<FakeTextGenerator>, AppError> =
            Err(AppError::InvalidConfig("temperature must be a finite, non-negative number".into()));
        let mut out = Vec::new();

        let outcome = execute(generator, &SessionSnapshot::default(), "gemma:2b", &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(matches!(outcome, SmokeOutcome::Failed { error: AppError::InvalidConfig(_) }));
        assert!(output.contains("Parameters: duration=25, minute=10, vibe='calm', cheat_count=1"));
        assert!(output.contains("❌ Error generating message: Invalid configuration: temperature"));
        assert!(output.contains("💡 Make sure Ollama is running with gemma:2b model installed"));
    }
}
