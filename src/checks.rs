//! Check macros used inside exercise bodies.
//!
//! A failed check converts the expectation mismatch into an
//! [`ExerciseFailure`](crate::ExerciseFailure) and returns it from the
//! enclosing exercise, so exercise bodies read as straight-line code. The
//! comparison macros keep both operands for diff rendering in the report.

/// Fails the exercise when the condition does not hold.
#[macro_export]
macro_rules! check {
    ($cond:expr, $($msg:tt)+) => {
        if !$cond {
            return Err($crate::ExerciseFailure::new(format!($($msg)+)));
        }
    };
}

/// Fails the exercise when the two values differ.
#[macro_export]
macro_rules! check_eq {
    ($actual:expr, $expected:expr) => {{
        let actual = &$actual;
        let expected = &$expected;
        if actual != expected {
            return Err($crate::ExerciseFailure::mismatch(
                format!("expected {:?} but got {:?}", expected, actual),
                format!("{:?}", expected),
                format!("{:?}", actual),
            ));
        }
    }};
}

/// Fails the exercise when the two values are equal.
#[macro_export]
macro_rules! check_ne {
    ($left:expr, $right:expr) => {{
        let left = &$left;
        let right = &$right;
        if left == right {
            return Err($crate::ExerciseFailure::new(format!(
                "expected two distinct values, both were {:?}",
                left
            )));
        }
    }};
}
