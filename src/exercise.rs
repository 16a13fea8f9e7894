//! Exercise registration and discovery.
//!
//! Discovery is explicit: a course builds an [`ExerciseSet`] by registering
//! `(name, action)` pairs, and [`discover`] validates the set and hands back
//! the exercises in registration order. There is no hidden global registry;
//! registration order is the one and only execution order.

use std::collections::HashSet;

use crate::errors::{DiscoveryError, ExerciseFailure};

/// The work performed by one exercise.
pub type Action = Box<dyn Fn() -> Result<(), ExerciseFailure>>;

/// A named unit of learner-facing work.
///
/// Constructed once during discovery and immutable afterwards. An exercise
/// must be independently runnable: it may not rely on state left behind by an
/// earlier exercise.
pub struct Exercise {
    pub name: String,
    pub action: Action,
}

impl std::fmt::Debug for Exercise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exercise")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// An ordered collection of registered exercises.
#[derive(Default)]
pub struct ExerciseSet {
    title: String,
    entries: Vec<Exercise>,
}

impl ExerciseSet {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Registers one exercise. Registration order is preserved.
    pub fn register(
        mut self,
        name: impl Into<String>,
        action: impl Fn() -> Result<(), ExerciseFailure> + 'static,
    ) -> Self {
        self.entries.push(Exercise {
            name: name.into(),
            action: Box::new(action),
        });
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Validates a set and returns its exercises in registration order.
///
/// Fails on an empty or duplicate name. On failure no exercise has run and
/// none will: the caller gets the error instead of a report.
pub fn discover(set: ExerciseSet) -> Result<Vec<Exercise>, DiscoveryError> {
    let mut seen = HashSet::new();
    for (position, exercise) in set.entries.iter().enumerate() {
        if exercise.name.is_empty() {
            return Err(DiscoveryError::EmptyName { position });
        }
        if !seen.insert(exercise.name.clone()) {
            return Err(DiscoveryError::DuplicateName {
                name: exercise.name.clone(),
            });
        }
    }
    Ok(set.entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discovery_preserves_registration_order() {
        let set = ExerciseSet::new("order")
            .register("first", || Ok(()))
            .register("second", || Ok(()))
            .register("third", || Ok(()));

        let exercises = discover(set).unwrap();
        let names: Vec<_> = exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let set = ExerciseSet::new("dup")
            .register("twice", || Ok(()))
            .register("twice", || Ok(()));

        let error = discover(set).unwrap_err();
        assert!(matches!(error, DiscoveryError::DuplicateName { ref name } if name == "twice"));
    }

    #[test]
    fn empty_names_are_rejected() {
        let set = ExerciseSet::new("unnamed").register("", || Ok(()));

        let error = discover(set).unwrap_err();
        assert!(matches!(error, DiscoveryError::EmptyName { position: 0 }));
    }
}
