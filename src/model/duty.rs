//! Duty intervals: worked or rested spans inside one ship day.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ReckonError, Result};

use super::clock::{format_clock_minutes, parse_clock_minutes};

/// What a duty interval was spent on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DutyKind {
    #[default]
    Work,

    /// Safety drills. Counted as work.
    Drill,

    Rest,
}

impl DutyKind {
    /// Whether minutes of this kind count against the work limit.
    pub fn is_work(self) -> bool {
        matches!(self, Self::Work | Self::Drill)
    }
}

/// One span inside a ship day, in ship-local clock minutes.
///
/// Intervals never cross a day boundary; callers split at day boundaries first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutyInterval {
    pub kind: DutyKind,
    pub start: u32,
    pub end: u32,
}

impl DutyInterval {
    pub fn work(start: u32, end: u32) -> Self {
        Self {
            kind: DutyKind::Work,
            start,
            end,
        }
    }

    /// The same span with a different kind.
    #[must_use]
    pub fn with_kind(self, kind: DutyKind) -> Self {
        Self { kind, ..self }
    }

    /// Naive clock delta, before any clock-change adjustment.
    pub fn clock_minutes(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }
}

impl fmt::Display for DutyInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            format_clock_minutes(self.start),
            format_clock_minutes(self.end)
        )
    }
}

/// Parses `HH:MM-HH:MM` as a work interval.
impl FromStr for DutyInterval {
    type Err = ReckonError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ReckonError::InvalidClockTime(s.to_string());
        let (start, end) = s.split_once('-').ok_or_else(invalid)?;
        let start = parse_clock_minutes(start.trim()).ok_or_else(invalid)?;
        let end = parse_clock_minutes(end.trim()).ok_or_else(invalid)?;
        Ok(Self::work(start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_interval_text() {
        let interval: DutyInterval = "08:00-12:00".parse().unwrap();
        assert_eq!(interval, DutyInterval::work(480, 720));
        assert_eq!(interval.clock_minutes(), 240);
        assert_eq!(interval.to_string(), "08:00-12:00");
    }

    #[test]
    fn parses_ends_past_midnight_on_long_days() {
        let interval: DutyInterval = "22:00-24:30".parse().unwrap();
        assert_eq!(interval.end, 1470);
    }

    #[test]
    fn rejects_malformed_interval_text() {
        assert!("08:00".parse::<DutyInterval>().is_err());
        assert!("8-12".parse::<DutyInterval>().is_err());
        assert!("08:00-12:75".parse::<DutyInterval>().is_err());
    }

    #[test]
    fn drills_count_as_work() {
        assert!(DutyKind::Work.is_work());
        assert!(DutyKind::Drill.is_work());
        assert!(!DutyKind::Rest.is_work());
    }
}
