//! The shipped course: legacy versus modern date and time handling.
//!
//! Side-by-side renditions of the same everyday tasks, first against the
//! bare `std::time` clock and then against `jiff`. Every koan here is in its
//! solved form; run `koan_runner run` to watch them pass.

pub mod legacy;
pub mod modern;

use crate::exercise::ExerciseSet;

/// Builds the full course in teaching order.
pub fn course() -> ExerciseSet {
    ExerciseSet::new("about-date-and-time")
        .register("legacy_clocks_shift_in_place", legacy::clocks_shift_in_place)
        .register(
            "modern_datetimes_are_immutable",
            modern::datetimes_are_immutable,
        )
        .register("legacy_time_in_milliseconds", legacy::time_in_milliseconds)
        .register("modern_time_in_milliseconds", modern::time_in_milliseconds)
        .register("legacy_reading_the_clock", legacy::reading_the_clock)
        .register("modern_reading_todays_date", modern::reading_todays_date)
        .register("legacy_times_in_the_future", legacy::times_in_the_future)
        .register("modern_dates_in_the_future", modern::dates_in_the_future)
        .register(
            "modern_building_a_specific_date",
            modern::building_a_specific_date,
        )
        .register(
            "modern_extending_a_date_with_a_time",
            modern::extending_a_date_with_a_time,
        )
        .register("modern_reading_a_fixed_clock", modern::reading_a_fixed_clock)
        .register(
            "modern_spans_count_whole_days",
            modern::spans_count_whole_days,
        )
        .register("modern_durations_are_precise", modern::durations_are_precise)
        .register(
            "modern_durations_can_shift_datetimes",
            modern::durations_can_shift_datetimes,
        )
        .register(
            "modern_finding_the_next_weekday",
            modern::finding_the_next_weekday,
        )
        .register(
            "modern_fixed_offsets_for_time_zones",
            modern::fixed_offsets_for_time_zones,
        )
        .register("modern_zone_aware_datetimes", modern::zone_aware_datetimes)
}
