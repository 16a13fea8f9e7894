// The shipped date/time course is solved end to end.

use koans::koans::course;
use koans::{discover, run};

#[test]
fn course_discovers_cleanly() {
    let set = course();
    assert_eq!(set.title(), "about-date-and-time");
    assert!(!set.is_empty());

    discover(set).unwrap();
}

#[test]
fn course_is_fully_solved() {
    let exercises = discover(course()).unwrap();
    let total = exercises.len();
    let report = run(exercises);

    let unsolved: Vec<_> = report
        .outcomes
        .iter()
        .filter(|o| !o.is_passed())
        .collect();
    assert!(unsolved.is_empty(), "unsolved koans: {:?}", unsolved);
    assert_eq!(report.passed_count, total);
}

#[test]
fn course_opens_with_the_legacy_and_modern_pair() {
    let exercises = discover(course()).unwrap();
    let names: Vec<_> = exercises.iter().map(|e| e.name.as_str()).collect();

    assert_eq!(names[0], "legacy_clocks_shift_in_place");
    assert_eq!(names[1], "modern_datetimes_are_immutable");
    assert!(names
        .iter()
        .all(|n| n.starts_with("legacy_") || n.starts_with("modern_")));
}
