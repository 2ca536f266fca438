//! Duration calculator: real elapsed minutes for a span of ship-local clock time.

use crate::error::{ReckonError, Result};
use crate::model::{ClockChange, ClockDirection, DayRecord, DutyInterval};

/// Elapsed minutes between `interval.start` and `interval.end` on `day`.
///
/// The naive clock delta is corrected when a timezone adjustment's pivot lies
/// strictly inside the interval: clocks going back add the repeated minutes,
/// clocks going forward remove the skipped ones. Date line crossings change
/// the date, not the clock, so their delta is already the elapsed time.
///
/// Fails with [`ReckonError::InvalidInterval`] if `start >= end`, if `end`
/// lies past the end of the day, or if either bound falls inside minutes a
/// forward adjustment skipped.
pub fn elapsed_minutes(interval: &DutyInterval, day: &DayRecord) -> Result<u32> {
    let DutyInterval { start, end, .. } = *interval;
    let invalid = || ReckonError::InvalidInterval {
        start,
        end,
        day_length: day.length_minutes,
    };

    if start >= end || end > day.length_minutes {
        return Err(invalid());
    }
    let clock_delta = end - start;

    let Some(pivot) = day.event_offset_minutes else {
        return Ok(clock_delta);
    };

    match day.change {
        Some(ClockChange::TimezoneAdjustment {
            direction: ClockDirection::Forward,
            magnitude_minutes,
        }) => {
            let skipped = pivot + 1..pivot + magnitude_minutes;
            if skipped.contains(&start) || skipped.contains(&end) {
                return Err(invalid());
            }
            if start < pivot && pivot < end {
                Ok(clock_delta - magnitude_minutes)
            } else {
                Ok(clock_delta)
            }
        }
        Some(ClockChange::TimezoneAdjustment {
            direction: ClockDirection::Back,
            magnitude_minutes,
        }) if start < pivot && pivot < end => Ok(clock_delta + magnitude_minutes),
        Some(ClockChange::TimezoneAdjustment { .. } | ClockChange::IdlCrossing { .. }) | None => {
            Ok(clock_delta)
        }
    }
}
