//! Sequential, failure-isolated exercise execution.
//!
//! Exercises run strictly one after another in discovery order. Every signal
//! an exercise can raise, whether a failed check returned as an error or a
//! panic from an `assert!` deep inside a date computation, is converted into
//! a [`Failed`](Outcome::Failed) outcome and the run continues. Nothing an
//! exercise does can abort the run.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Mutex;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::exercise::Exercise;

/// How a failure surfaced out of an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCause {
    /// The exercise returned a failed check.
    Check,
    /// The exercise panicked.
    Panic,
}

/// The result of running one exercise. Exactly one exists per exercise per
/// run, in run order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Passed {
        name: String,
    },
    Failed {
        name: String,
        reason: String,
        cause: FailureCause,
        #[serde(skip_serializing_if = "Option::is_none")]
        expected: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        actual: Option<String>,
    },
}

impl Outcome {
    pub fn name(&self) -> &str {
        match self {
            Outcome::Passed { name } | Outcome::Failed { name, .. } => name,
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed { .. })
    }
}

/// Ordered outcomes of a full run plus derived counts.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub outcomes: Vec<Outcome>,
    pub passed_count: usize,
    pub failed_count: usize,
    pub total: usize,
}

impl RunReport {
    pub fn from_outcomes(outcomes: Vec<Outcome>) -> Self {
        let passed_count = outcomes.iter().filter(|o| o.is_passed()).count();
        let total = outcomes.len();
        Self {
            failed_count: total - passed_count,
            passed_count,
            total,
            outcomes,
        }
    }
}

// The default panic hook writes to stderr the moment a panic fires, long
// before `catch_unwind` hands us the payload. Silence it while a run is in
// flight; the guard keeps concurrent runs (e.g. under `cargo test`) from
// trampling each other's hook swap.
static PANIC_HOOK_GUARD: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Executes the exercises in order and collects one outcome per exercise.
///
/// Single-threaded and strictly sequential. A failing exercise never
/// prevents later exercises from executing.
pub fn run(exercises: Vec<Exercise>) -> RunReport {
    let guard = PANIC_HOOK_GUARD
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let saved_hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));

    let mut outcomes = Vec::with_capacity(exercises.len());
    for exercise in &exercises {
        outcomes.push(run_one(exercise));
    }

    panic::set_hook(saved_hook);
    drop(guard);

    RunReport::from_outcomes(outcomes)
}

fn run_one(exercise: &Exercise) -> Outcome {
    match panic::catch_unwind(AssertUnwindSafe(|| (exercise.action)())) {
        Ok(Ok(())) => Outcome::Passed {
            name: exercise.name.clone(),
        },
        Ok(Err(failure)) => Outcome::Failed {
            name: exercise.name.clone(),
            reason: non_empty(failure.message),
            cause: FailureCause::Check,
            expected: failure.expected,
            actual: failure.actual,
        },
        Err(payload) => Outcome::Failed {
            name: exercise.name.clone(),
            reason: panic_message(payload),
            cause: FailureCause::Panic,
            expected: None,
            actual: None,
        },
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "exercise panicked".to_string()
    }
}

// A failed outcome always carries a reason, even when the check was raised
// with an empty message.
fn non_empty(message: String) -> String {
    if message.is_empty() {
        "exercise failed".to_string()
    } else {
        message
    }
}
