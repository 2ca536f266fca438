//! Errors raised by the reckoning engine.
//!
//! Every failure is local and synchronous. The engine rejects bad input
//! rather than clamping or guessing, so callers can surface these as
//! validation messages.

use jiff::civil::Date;

/// Errors that can occur while reckoning ship time.
#[derive(Debug, thiserror::Error)]
pub enum ReckonError {
    #[error("invalid UTC offset '{0}': expected [+-]H[:MM] between -12:00 and +14:00")]
    InvalidOffsetFormat(String),

    #[error("offset of {0} minutes is outside -12:00..+14:00")]
    OffsetOutOfRange(i32),

    #[error("invalid clock time '{0}': expected HH:MM between 00:00 and 24:00")]
    InvalidClockTime(String),

    #[error("invalid clock-change magnitude of {0} minutes")]
    InvalidMagnitude(u32),

    #[error("interval {start}..{end} does not fit a day of {day_length} minutes")]
    InvalidInterval {
        start: u32,
        end: u32,
        day_length: u32,
    },

    #[error("work intervals overlap at minute {at}")]
    OverlappingIntervals { at: u32 },

    #[error("{work} minutes of work do not fit a day of {day_length} minutes")]
    WorkExceedsDay { work: u32, day_length: u32 },

    #[error("clock change dated {event_date} cannot be placed on ship day {day}")]
    AmbiguousEventPlacement { event_date: Date, day: Date },

    #[error("ship day {day} is {length} minutes long but spans {utc_minutes} minutes of UTC")]
    Discontinuity {
        day: Date,
        length: u32,
        utc_minutes: i64,
    },

    #[error("calendar error: {0}")]
    Calendar(#[from] jiff::Error),
}

pub type Result<T> = core::result::Result<T, ReckonError>;
