//! Day segmenter: day length, date label, and pivot for one nominal ship day.

use jiff::civil::Date;

use crate::error::{ReckonError, Result};
use crate::model::{
    ClockChange, ClockChangeEvent, ClockDirection, ClockTime, DateLabel, DayRecord,
    STANDARD_DAY_MINUTES, TravelDirection,
};

/// Reckons the ship day that starts on `nominal_date`, carrying at most one
/// clock change.
///
/// - No event: a 24-hour day under its own date.
/// - Timezone adjustment: shorter (`Forward`) or longer (`Back`) by the
///   magnitude. The date never changes.
/// - Date line crossing: always 24 hours, labelled with the date before the
///   pivot and the date after it (`WestToEast` repeats yesterday,
///   `EastToWest` skips to tomorrow). A pivot of `00:00` or `24:00` leaves a
///   single date: the one after or before the crossing respectively.
///
/// Fails with [`ReckonError::AmbiguousEventPlacement`] when the event is dated
/// for some other day.
pub fn segment_day(nominal_date: Date, event: Option<&ClockChangeEvent>) -> Result<DayRecord> {
    let Some(event) = event else {
        return Ok(DayRecord::standard(nominal_date));
    };

    if event.date != nominal_date {
        return Err(ReckonError::AmbiguousEventPlacement {
            event_date: event.date,
            day: nominal_date,
        });
    }
    event.change.validate()?;

    let pivot = event.pivot_minutes();
    let record = match event.change {
        ClockChange::TimezoneAdjustment {
            direction,
            magnitude_minutes,
        } => {
            let length_minutes = match direction {
                ClockDirection::Forward => STANDARD_DAY_MINUTES - magnitude_minutes,
                ClockDirection::Back => STANDARD_DAY_MINUTES + magnitude_minutes,
            };
            DayRecord {
                nominal_date,
                length_minutes,
                label: DateLabel::Single(nominal_date),
                event_offset_minutes: Some(pivot),
                change: Some(event.change),
            }
        }
        ClockChange::IdlCrossing { travel, .. } => {
            let after = match travel {
                TravelDirection::WestToEast => nominal_date.yesterday()?,
                TravelDirection::EastToWest => nominal_date.tomorrow()?,
            };
            let (label, event_offset_minutes) = match event.at {
                ClockTime::MIDNIGHT => (DateLabel::Single(after), None),
                ClockTime::END_OF_DAY => (DateLabel::Single(nominal_date), None),
                _ => (
                    DateLabel::Spanning {
                        before: nominal_date,
                        after,
                    },
                    Some(pivot),
                ),
            };
            DayRecord {
                nominal_date,
                length_minutes: STANDARD_DAY_MINUTES,
                label,
                event_offset_minutes,
                change: Some(event.change),
            }
        }
    };

    if let Some(ClockChange::TimezoneAdjustment { .. }) = record.change {
        debug_assert_eq!(
            record.label,
            DateLabel::Single(nominal_date),
            "timezone adjustments never change the date"
        );
    }

    tracing::debug!(
        date = %nominal_date,
        length = record.length_minutes,
        label = %record.label,
        "segmented ship day"
    );
    Ok(record)
}
