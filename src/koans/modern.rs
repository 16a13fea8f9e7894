//! The modern half of the course: `jiff`.
//!
//! Immutable civil dates and datetimes, spans with calendar units, signed
//! durations, weekday adjusters, fixed offsets, and real time zones.

use jiff::civil::{self, Weekday};
use jiff::tz::{self, TimeZone};
use jiff::{SignedDuration, Timestamp, ToSpan, Zoned};

use crate::errors::ExerciseFailure;
use crate::{check, check_eq, check_ne};

type Koan = Result<(), ExerciseFailure>;

/// Arithmetic returns a new value; the original is untouched.
pub fn datetimes_are_immutable() -> Koan {
    let start = civil::date(2015, 11, 19).at(10, 30, 0, 0);
    let later = start.checked_add(SignedDuration::from_hours(1))?;

    check_ne!(later, start);
    check_eq!(start.hour(), 10);
    check_eq!(later.hour(), 11);
    Ok(())
}

/// A `Timestamp` knows its own distance from the epoch.
pub fn time_in_milliseconds() -> Koan {
    let now = Timestamp::now();

    check!(
        now.as_millisecond() > 0,
        "the clock claims we are before 1970"
    );
    Ok(())
}

/// Today's date, straight off the zone-aware clock.
pub fn reading_todays_date() -> Koan {
    let today = Zoned::now().date();

    check!(
        today > civil::date(2020, 1, 1),
        "today should be well past 2020, got {}",
        today
    );
    Ok(())
}

/// A month from now is a calendar question, and the calendar answers it.
pub fn dates_in_the_future() -> Koan {
    let today = Zoned::now().date();
    let next_month = today.checked_add(1.month())?;

    check!(
        next_month > today,
        "adding a month should land in the future"
    );
    Ok(())
}

pub fn building_a_specific_date() -> Koan {
    let date = civil::date(2000, 11, 23);

    check_eq!(date.year(), 2000);
    check_eq!(date.month(), 11); // one-based, not the zero-based months of old
    check_eq!(date.day(), 23);
    Ok(())
}

/// A date carries no hours or minutes; `at` extends it into a datetime.
pub fn extending_a_date_with_a_time() -> Koan {
    let appointment = civil::date(2000, 11, 23).at(14, 14, 0, 0);

    check_eq!(appointment.hour(), 14);
    check_eq!(appointment.minute(), 14);
    check_eq!(appointment.year(), 2000);
    check_eq!(appointment.month(), 11);
    check_eq!(appointment.day(), 23);
    Ok(())
}

/// Pinning the clock makes time-dependent code deterministic.
pub fn reading_a_fixed_clock() -> Koan {
    let epoch = Timestamp::UNIX_EPOCH.to_zoned(TimeZone::UTC);

    check_eq!(epoch.year(), 1970);
    check_eq!(epoch.month(), 1);
    check_eq!(epoch.day(), 1);
    check_eq!(epoch.hour(), 0);
    Ok(())
}

/// Spans describe differences in whole calendar units.
pub fn spans_count_whole_days() -> Koan {
    let today = civil::date(2015, 11, 19);
    let tomorrow = today.tomorrow()?;

    let span = today.until(tomorrow)?;
    check_eq!(span.get_days(), 1);
    Ok(())
}

/// Signed durations measure elapsed time exactly.
pub fn durations_are_precise() -> Koan {
    let start = civil::date(2015, 11, 19).at(10, 0, 0, 0);
    let end = start.checked_add(SignedDuration::from_mins(1))?;

    let duration = end.duration_since(start);
    check_eq!(duration.as_secs(), 60);
    Ok(())
}

/// A duration of 24 hours and a span of one civil day agree, as long as no
/// time zone is in play.
pub fn durations_can_shift_datetimes() -> Koan {
    let start = civil::date(2015, 11, 19).at(10, 0, 0, 0);

    let shifted = start.checked_add(SignedDuration::from_hours(24))?;
    check_eq!(shifted, start.checked_add(1.day())?);
    Ok(())
}

/// "The next Saturday" is a single call, not a loop over weekdays.
pub fn finding_the_next_weekday() -> Koan {
    let thursday = civil::date(2015, 11, 19);
    check_eq!(thursday.weekday(), Weekday::Thursday);

    let saturday = thursday.nth_weekday(1, Weekday::Saturday)?;
    check_eq!(saturday, civil::date(2015, 11, 21));
    Ok(())
}

pub fn fixed_offsets_for_time_zones() -> Koan {
    let offset = tz::offset(8);
    check_eq!(offset.seconds(), 28_800);

    let meeting = civil::date(2000, 11, 23)
        .at(14, 14, 14, 0)
        .to_zoned(TimeZone::fixed(offset))?;
    check_eq!(meeting.offset(), offset);
    Ok(())
}

/// One instant, two walls: zone-aware datetimes agree on the timestamp and
/// disagree on the local hour.
pub fn zone_aware_datetimes() -> Koan {
    let instant = Timestamp::UNIX_EPOCH.checked_add(SignedDuration::from_hours(12))?;

    let berlin = instant.to_zoned(TimeZone::get("Europe/Berlin")?);
    let vancouver = instant.to_zoned(TimeZone::get("America/Vancouver")?);

    check_eq!(berlin.timestamp(), vancouver.timestamp());
    check_eq!(berlin.hour(), 13); // CET, one hour ahead of UTC
    check_eq!(vancouver.hour(), 4); // PST, eight hours behind
    Ok(())
}
