//! Error types for the koan runner.
//!
//! Two kinds exist with very different weights. An [`ExerciseFailure`] is the
//! ordinary currency of a run: one failed check, one failed outcome, and the
//! run moves on. A [`DiscoveryError`] means the exercise set itself is
//! malformed, and the run never starts.

use miette::Diagnostic;
use thiserror::Error;

/// A failed expectation inside an exercise.
///
/// Carries the operands of the failed comparison when they are known, so the
/// report can render them side by side.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ExerciseFailure {
    pub message: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

impl ExerciseFailure {
    /// A plain failure with only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// A comparison failure that keeps both operands for diff rendering.
    pub fn mismatch(
        message: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            expected: Some(expected.into()),
            actual: Some(actual.into()),
        }
    }
}

// Fallible date/time calls inside an exercise body can use `?` directly;
// the underlying error becomes the failure reason.

impl From<std::time::SystemTimeError> for ExerciseFailure {
    fn from(error: std::time::SystemTimeError) -> Self {
        Self::new(format!("system clock error: {}", error))
    }
}

impl From<jiff::Error> for ExerciseFailure {
    fn from(error: jiff::Error) -> Self {
        Self::new(format!("date/time operation failed: {}", error))
    }
}

/// A malformed exercise set.
///
/// Fatal: discovery aborts before any exercise executes, so a run that hits
/// this produces no outcomes at all.
#[derive(Debug, Error, Diagnostic)]
pub enum DiscoveryError {
    #[error("exercise at position {position} has an empty name")]
    #[diagnostic(
        code(koans::discovery::empty_name),
        help("every exercise needs a non-empty name so its outcome can be reported")
    )]
    EmptyName { position: usize },

    #[error("duplicate exercise name '{name}'")]
    #[diagnostic(
        code(koans::discovery::duplicate_name),
        help("exercise names identify outcomes in the report and must be unique within a set")
    )]
    DuplicateName { name: String },
}
