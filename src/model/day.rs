//! Day records: the reckoning outcome for one nominal ship day.

use std::fmt;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::{ClockChange, TravelDirection};

/// Minutes in an undisturbed ship day.
pub const STANDARD_DAY_MINUTES: u32 = 24 * 60;

/// How one ship day reckons out. Derived, never authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    /// The date the day started on.
    pub nominal_date: Date,

    /// Ship-local minutes attributed to the day.
    pub length_minutes: u32,

    /// The calendar date (or pair of dates) the day is shown under.
    pub label: DateLabel,

    /// Minutes from day start to the clock change, when one splits the day.
    pub event_offset_minutes: Option<u32>,

    /// The change that shaped this day, if any.
    pub change: Option<ClockChange>,
}

impl DayRecord {
    /// An undisturbed 24-hour day.
    pub fn standard(nominal_date: Date) -> Self {
        Self {
            nominal_date,
            length_minutes: STANDARD_DAY_MINUTES,
            label: DateLabel::Single(nominal_date),
            event_offset_minutes: None,
            change: None,
        }
    }

    /// The nominal date of the ship day that follows this one.
    ///
    /// A `WestToEast` crossing starts the same date over; an `EastToWest`
    /// crossing consumes the skipped date. This holds even when a crossing
    /// on the day boundary collapses the label to a single date.
    pub fn next_nominal_date(&self) -> Result<Date> {
        let next = match self.change {
            Some(ClockChange::IdlCrossing {
                travel: TravelDirection::WestToEast,
                ..
            }) => self.nominal_date,
            Some(ClockChange::IdlCrossing {
                travel: TravelDirection::EastToWest,
                ..
            }) => self.nominal_date.tomorrow()?.tomorrow()?,
            Some(ClockChange::TimezoneAdjustment { .. }) | None => self.nominal_date.tomorrow()?,
        };
        Ok(next)
    }
}

/// The date label of a ship day.
///
/// A date line crossing splits the day around the pivot: minutes before it
/// fall on `before`, minutes after it on `after`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateLabel {
    Single(Date),
    Spanning { before: Date, after: Date },
}

impl DateLabel {
    /// The date the day opens on.
    pub fn first(&self) -> Date {
        match *self {
            Self::Single(date) => date,
            Self::Spanning { before, .. } => before,
        }
    }

    /// The date the day closes on.
    pub fn last(&self) -> Date {
        match *self {
            Self::Single(date) => date,
            Self::Spanning { after, .. } => after,
        }
    }

    pub fn is_spanning(&self) -> bool {
        matches!(self, Self::Spanning { .. })
    }
}

impl fmt::Display for DateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Single(date) => write!(f, "{}", short_date(date)),
            Self::Spanning { before, after } => {
                write!(f, "{} → {}", short_date(before), short_date(after))
            }
        }
    }
}

/// `Wed 26 Nov`.
pub fn short_date(date: Date) -> String {
    date.strftime("%a %-d %b").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    #[test]
    fn standard_day_is_single_and_full_length() {
        let day = DayRecord::standard(date(2025, 11, 25));
        assert_eq!(day.length_minutes, 1440);
        assert_eq!(day.label, DateLabel::Single(date(2025, 11, 25)));
        assert!(!day.label.is_spanning());
        assert_eq!(day.event_offset_minutes, None);
    }

    #[test]
    fn next_nominal_date_follows_the_crossing() {
        let wednesday = date(2025, 11, 26);
        assert_eq!(
            DayRecord::standard(wednesday).next_nominal_date().unwrap(),
            date(2025, 11, 27)
        );

        let mut repeat = DayRecord::standard(wednesday);
        repeat.change = Some(ClockChange::IdlCrossing {
            travel: TravelDirection::WestToEast,
            magnitude_minutes: 1440,
        });
        assert_eq!(repeat.next_nominal_date().unwrap(), wednesday);

        let mut skip = DayRecord::standard(wednesday);
        skip.change = Some(ClockChange::IdlCrossing {
            travel: TravelDirection::EastToWest,
            magnitude_minutes: 1440,
        });
        assert_eq!(skip.next_nominal_date().unwrap(), date(2025, 11, 28));
    }

    #[test]
    fn labels_read_like_the_log() {
        let single = DateLabel::Single(date(2025, 11, 25));
        assert_eq!(single.to_string(), "Tue 25 Nov");

        let repeat = DateLabel::Spanning {
            before: date(2025, 11, 26),
            after: date(2025, 11, 25),
        };
        assert_eq!(repeat.to_string(), "Wed 26 Nov → Tue 25 Nov");
        assert_eq!(repeat.first(), date(2025, 11, 26));
        assert_eq!(repeat.last(), date(2025, 11, 25));
    }
}
