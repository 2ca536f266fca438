//! Ship-local clock times.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ReckonError, Result};
use crate::offset::parse_digits;

/// A ship-local wall-clock time, `00:00` through `24:00` inclusive.
///
/// `24:00` is the end-of-day instant, distinct from the next day's `00:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u32);

impl ClockTime {
    pub const MIDNIGHT: Self = Self(0);
    pub const END_OF_DAY: Self = Self(24 * 60);

    pub fn from_minutes(minutes: u32) -> Result<Self> {
        if minutes <= Self::END_OF_DAY.0 {
            Ok(Self(minutes))
        } else {
            Err(ReckonError::InvalidClockTime(format_clock_minutes(minutes)))
        }
    }

    pub fn from_hm(hours: u32, minutes: u32) -> Result<Self> {
        if minutes >= 60 {
            return Err(ReckonError::InvalidClockTime(format!("{hours:02}:{minutes:02}")));
        }
        Self::from_minutes(hours * 60 + minutes)
    }

    /// Minutes since local midnight.
    pub fn minutes(self) -> u32 {
        self.0
    }

    /// True for `00:00` and `24:00`, the two instants that sit on a day boundary.
    pub fn is_day_boundary(self) -> bool {
        self == Self::MIDNIGHT || self == Self::END_OF_DAY
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_clock_minutes(self.0))
    }
}

impl FromStr for ClockTime {
    type Err = ReckonError;

    fn from_str(s: &str) -> Result<Self> {
        parse_clock_minutes(s)
            .filter(|m| *m <= Self::END_OF_DAY.0)
            .map(Self)
            .ok_or_else(|| ReckonError::InvalidClockTime(s.to_string()))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ReckonError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

/// Parses `H:MM` or `HH:MM` into minutes without an upper bound on hours.
///
/// Long days (24.5h, 25h) put interval ends past `24:00`; bounds are the
/// caller's concern.
pub(crate) fn parse_clock_minutes(text: &str) -> Option<u32> {
    let (hours, minutes) = text.split_once(':')?;
    let hours = parse_digits(hours, 1..=2)?;
    let minutes = parse_digits(minutes, 2..=2)?;
    if minutes >= 60 {
        return None;
    }
    u32::try_from(hours * 60 + minutes).ok()
}

pub(crate) fn format_clock_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
