// Core runner behavior: one outcome per exercise, discovery order preserved,
// failure isolation, and the discovery-time failure modes.

use koans::{
    check_eq, discover, run, DiscoveryError, ExerciseFailure, ExerciseSet, FailureCause, Outcome,
    RunReport,
};

fn names(report: &RunReport) -> Vec<&str> {
    report.outcomes.iter().map(|o| o.name()).collect()
}

#[test]
fn every_exercise_yields_exactly_one_outcome() {
    let set = ExerciseSet::new("counting")
        .register("a", || Ok(()))
        .register("b", || Err(ExerciseFailure::new("nope")))
        .register("c", || Ok(()));

    let exercises = discover(set).unwrap();
    let count = exercises.len();
    let report = run(exercises);

    assert_eq!(report.outcomes.len(), count);
    assert_eq!(report.total, count);
    assert_eq!(report.passed_count + report.failed_count, report.total);
}

#[test]
fn a_failing_exercise_never_stops_the_run() {
    let set = ExerciseSet::new("isolation")
        .register("a", || Err(ExerciseFailure::new("first failure")))
        .register("b", || Ok(()))
        .register("c", || Err(ExerciseFailure::new("second failure")));

    let report = run(discover(set).unwrap());

    assert_eq!(names(&report), ["a", "b", "c"]);
    assert!(matches!(report.outcomes[0], Outcome::Failed { .. }));
    assert!(matches!(report.outcomes[1], Outcome::Passed { .. }));
    assert!(matches!(report.outcomes[2], Outcome::Failed { .. }));
    assert_eq!(report.passed_count, 1);
    assert_eq!(report.failed_count, 2);
}

#[test]
fn panics_are_contained_with_a_reason() {
    let set = ExerciseSet::new("containment")
        .register("explodes", || -> Result<(), ExerciseFailure> {
            panic!("boom")
        })
        .register("still_runs", || Ok(()));

    let report = run(discover(set).unwrap());

    match &report.outcomes[0] {
        Outcome::Failed { reason, cause, .. } => {
            assert!(reason.contains("boom"));
            assert_eq!(*cause, FailureCause::Panic);
        }
        other => panic!("expected a failed outcome, got {:?}", other),
    }
    assert!(report.outcomes[1].is_passed());
}

#[test]
fn non_string_panic_payloads_still_produce_a_reason() {
    let set = ExerciseSet::new("opaque").register("odd", || -> Result<(), ExerciseFailure> {
        std::panic::panic_any(42)
    });

    let report = run(discover(set).unwrap());

    match &report.outcomes[0] {
        Outcome::Failed { reason, .. } => assert!(!reason.is_empty()),
        other => panic!("expected a failed outcome, got {:?}", other),
    }
}

#[test]
fn an_empty_set_yields_an_empty_report() {
    let report = run(discover(ExerciseSet::new("empty")).unwrap());

    assert_eq!(report.total, 0);
    assert_eq!(report.passed_count, 0);
    assert_eq!(report.failed_count, 0);
    assert!(report.outcomes.is_empty());
}

#[test]
fn a_malformed_set_aborts_before_anything_runs() {
    let set = ExerciseSet::new("malformed")
        .register("same", || Ok(()))
        .register("same", || panic!("must never execute"));

    let error = discover(set).unwrap_err();
    assert!(matches!(error, DiscoveryError::DuplicateName { ref name } if name == "same"));
}

#[test]
fn running_the_same_course_twice_is_idempotent() {
    let build = || {
        ExerciseSet::new("repeat")
            .register("pass", || Ok(()))
            .register("fail", || Err(ExerciseFailure::new("always")))
    };

    let first = run(discover(build()).unwrap());
    let second = run(discover(build()).unwrap());

    assert_eq!(first.outcomes, second.outcomes);
}

#[test]
fn arithmetic_worked_example() {
    let set = ExerciseSet::new("arithmetic")
        .register("check_add", || -> Result<(), ExerciseFailure> {
            check_eq!(1 + 1, 2);
            Ok(())
        })
        .register("check_sub", || -> Result<(), ExerciseFailure> {
            check_eq!(1 - 1, 5);
            Ok(())
        });

    let report = run(discover(set).unwrap());

    assert_eq!(report.total, 2);
    assert_eq!(report.passed_count, 1);
    assert_eq!(report.failed_count, 1);
    assert!(report.outcomes[0].is_passed());
    match &report.outcomes[1] {
        Outcome::Failed { name, reason, .. } => {
            assert_eq!(name, "check_sub");
            assert_eq!(reason, "expected 5 but got 0");
        }
        other => panic!("expected a failed outcome, got {:?}", other),
    }
}
