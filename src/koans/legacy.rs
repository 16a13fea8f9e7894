//! The legacy half of the course: `std::time`.
//!
//! `SystemTime` is an opaque point on the wall clock. It can be shifted and
//! compared, but it has no calendar: no year, no month, no day of the week.
//! Every koan here works around that poverty by hand; the modern half shows
//! the same task with a real date/time library.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::errors::ExerciseFailure;
use crate::{check, check_eq};

type Koan = Result<(), ExerciseFailure>;

/// A `SystemTime` is shifted in place with `+=`. The original reading is
/// overwritten; nothing remembers what the clock said before.
pub fn clocks_shift_in_place() -> Koan {
    let mut clock = UNIX_EPOCH;
    clock += Duration::from_secs(11 * 3600);
    clock += Duration::from_secs(2 * 3600);

    let elapsed = clock.duration_since(UNIX_EPOCH)?;
    check_eq!(elapsed.as_secs() / 3600, 13);
    Ok(())
}

/// Milliseconds since the epoch come from subtracting the epoch by hand.
pub fn time_in_milliseconds() -> Koan {
    let now = SystemTime::now();

    let since_epoch = now.duration_since(UNIX_EPOCH)?;
    check!(
        since_epoch.as_millis() > 0,
        "the clock claims we are before 1970"
    );
    Ok(())
}

/// "Now" exists, but it answers no calendar questions at all.
pub fn reading_the_clock() -> Koan {
    let now = SystemTime::now();

    check!(
        now > UNIX_EPOCH,
        "the clock should have advanced past the epoch"
    );
    Ok(())
}

/// A day in the future is whatever 86 400 seconds of arithmetic says it is.
pub fn times_in_the_future() -> Koan {
    let now = SystemTime::now();
    let tomorrow = now + Duration::from_secs(24 * 60 * 60);

    check!(tomorrow > now, "adding a day should land in the future");
    Ok(())
}
