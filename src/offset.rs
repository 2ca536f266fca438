//! Offset arithmetic: signed UTC offsets in minutes.
//!
//! Offsets live in the legal band -12:00..=+14:00 and are written `±H:MM`
//! (`+9:00`, `-3:30`, `+0:00`). Wraparound is only ever applied for date line
//! crossings; see [`normalize`].

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ReckonError, Result};

/// Lowest legal offset, -12:00.
pub const MIN_MINUTES: i32 = -12 * 60;

/// Highest legal offset, +14:00.
pub const MAX_MINUTES: i32 = 14 * 60;

/// Width of one full wrap around the date line.
pub const WRAP_MINUTES: i32 = 24 * 60;

/// A signed offset from UTC, always within -12:00..=+14:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UtcOffset(i32);

impl UtcOffset {
    pub const UTC: Self = Self(0);

    /// Builds an offset from minutes, rejecting anything outside the legal band.
    pub fn from_minutes(minutes: i32) -> Result<Self> {
        if (MIN_MINUTES..=MAX_MINUTES).contains(&minutes) {
            Ok(Self(minutes))
        } else {
            Err(ReckonError::OffsetOutOfRange(minutes))
        }
    }

    pub fn minutes(self) -> i32 {
        self.0
    }

    /// The same offset as a `jiff` offset, for instant arithmetic.
    pub fn to_jiff(self) -> Result<jiff::tz::Offset> {
        Ok(jiff::tz::Offset::from_seconds(self.0 * 60)?)
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_offset(self.0))
    }
}

impl FromStr for UtcOffset {
    type Err = ReckonError;

    fn from_str(s: &str) -> Result<Self> {
        parse_offset(s).map(Self)
    }
}

impl TryFrom<String> for UtcOffset {
    type Error = ReckonError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<UtcOffset> for String {
    fn from(offset: UtcOffset) -> Self {
        offset.to_string()
    }
}

/// Parses `[+-]?H(:MM)?` into signed minutes.
///
/// Fails with [`ReckonError::InvalidOffsetFormat`] on malformed text and on
/// well-formed text that lands outside the legal band.
pub fn parse_offset(text: &str) -> Result<i32> {
    let invalid = || ReckonError::InvalidOffsetFormat(text.to_string());

    let (sign, rest) = if let Some(rest) = text.strip_prefix('+') {
        (1, rest)
    } else if let Some(rest) = text.strip_prefix('-') {
        (-1, rest)
    } else {
        (1, text)
    };

    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h, Some(m)),
        None => (rest, None),
    };

    let hours = parse_digits(hours, 1..=2).ok_or_else(invalid)?;
    let minutes = match minutes {
        Some(m) => parse_digits(m, 2..=2).ok_or_else(invalid)?,
        None => 0,
    };
    if minutes >= 60 {
        return Err(invalid());
    }

    let total = sign * (hours * 60 + minutes);
    if !(MIN_MINUTES..=MAX_MINUTES).contains(&total) {
        return Err(invalid());
    }
    Ok(total)
}

/// Formats signed minutes as `±H:MM`. The sign is always explicit.
pub fn format_offset(minutes: i32) -> String {
    let sign = if minutes >= 0 { '+' } else { '-' };
    let abs = minutes.unsigned_abs();
    format!("{sign}{}:{:02}", abs / 60, abs % 60)
}

/// Wraps a post-crossing offset back into the legal band.
///
/// One full day is added below -12:00 or removed above +14:00. Only date line
/// crossings may call this; a timezone adjustment that leaves the band is a
/// data error and must be reported by the caller instead.
pub fn normalize(minutes: i32) -> Result<i32> {
    let wrapped = if minutes < MIN_MINUTES {
        minutes + WRAP_MINUTES
    } else if minutes > MAX_MINUTES {
        minutes - WRAP_MINUTES
    } else {
        minutes
    };
    UtcOffset::from_minutes(wrapped).map(UtcOffset::minutes)
}

/// Every selectable offset from +14:00 down to -12:00 in half-hour steps.
pub fn legal_offsets() -> impl Iterator<Item = UtcOffset> {
    (MIN_MINUTES..=MAX_MINUTES)
        .rev()
        .step_by(30)
        .map(UtcOffset)
}

/// Parses an all-digit field whose length falls in `len`.
pub(crate) fn parse_digits(field: &str, len: RangeInclusive<usize>) -> Option<i32> {
    if !len.contains(&field.len()) || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_forms() {
        assert_eq!(parse_offset("+9:00").unwrap(), 540);
        assert_eq!(parse_offset("9").unwrap(), 540);
        assert_eq!(parse_offset("-3:30").unwrap(), -210);
        assert_eq!(parse_offset("+05:30").unwrap(), 330);
        assert_eq!(parse_offset("-12:00").unwrap(), MIN_MINUTES);
        assert_eq!(parse_offset("+14").unwrap(), MAX_MINUTES);
        assert_eq!(parse_offset("-0:30").unwrap(), -30);
    }

    #[test]
    fn rejects_malformed_offsets() {
        for text in ["", "+", "+9:0", "+9:60", "+123", "UTC+9", "+9:00:00", "9h", "+-9"] {
            let err = parse_offset(text).unwrap_err();
            assert!(
                matches!(err, ReckonError::InvalidOffsetFormat(_)),
                "{text:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn rejects_offsets_outside_band() {
        assert!(matches!(
            parse_offset("+14:30"),
            Err(ReckonError::InvalidOffsetFormat(_))
        ));
        assert!(matches!(
            parse_offset("-12:30"),
            Err(ReckonError::InvalidOffsetFormat(_))
        ));
    }

    #[test]
    fn formats_with_explicit_sign() {
        assert_eq!(format_offset(540), "+9:00");
        assert_eq!(format_offset(0), "+0:00");
        assert_eq!(format_offset(-210), "-3:30");
        assert_eq!(format_offset(-30), "-0:30");
        assert_eq!(format_offset(MAX_MINUTES), "+14:00");
    }

    #[test]
    fn format_then_parse_is_identity_across_band() {
        for m in MIN_MINUTES..=MAX_MINUTES {
            assert_eq!(parse_offset(&format_offset(m)).unwrap(), m);
        }
    }

    #[test]
    fn normalize_wraps_once_per_side() {
        assert_eq!(normalize(-1440 + 780).unwrap(), -660);
        assert_eq!(normalize(-720).unwrap(), -720);
        assert_eq!(normalize(-780).unwrap(), 660);
        assert_eq!(normalize(900).unwrap(), -540);
        assert!(matches!(
            normalize(-2220),
            Err(ReckonError::OffsetOutOfRange(-780))
        ));
    }

    #[test]
    fn offset_serializes_as_text() {
        let offset: UtcOffset = "+9:30".parse().unwrap();
        let json = serde_json::to_string(&offset).unwrap();
        assert_eq!(json, "\"+9:30\"");
        let back: UtcOffset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, offset);
        assert!(serde_json::from_str::<UtcOffset>("\"+15:00\"").is_err());
    }

    #[test]
    fn legal_offsets_cover_band_in_half_hours() {
        let offsets: Vec<_> = legal_offsets().collect();
        assert_eq!(offsets.len(), 53);
        assert_eq!(offsets[0].to_string(), "+14:00");
        assert_eq!(offsets[1].to_string(), "+13:30");
        assert_eq!(offsets.last().unwrap().to_string(), "-12:00");
    }
}
