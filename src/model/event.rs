//! Clock-change events: immutable records of one reckoning change.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ReckonError, Result};

use super::ClockTime;

/// Standard magnitude of a date line crossing: one full day.
pub const IDL_MAGNITUDE_MINUTES: u32 = 24 * 60;

/// Magnitude of a crossing between the -11:00 and +14:00 zones.
pub const IDL_EXTREME_MAGNITUDE_MINUTES: u32 = 25 * 60;

/// Clock changes come in half-hour granularity.
const GRANULARITY_MINUTES: u32 = 30;

/// One instantaneous change to the ship's reckoning, bound to a nominal ship day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockChangeEvent {
    /// Unique identifier, referenced when the event is voided.
    pub id: Uuid,

    /// The nominal ship day the change belongs to.
    pub date: Date,

    /// Which ship day carrying `date` the change belongs to. `1` except on the
    /// second day of a date repeated by a west-to-east crossing.
    #[serde(default = "first_occurrence")]
    pub occurrence: u32,

    /// Ship-local clock time at which the change takes effect.
    pub at: ClockTime,

    /// What changed.
    pub change: ClockChange,
}

fn first_occurrence() -> u32 {
    1
}

impl ClockChangeEvent {
    /// A timezone adjustment of `magnitude_minutes` on `date` at `at`.
    pub fn timezone(
        date: Date,
        at: ClockTime,
        direction: ClockDirection,
        magnitude_minutes: u32,
    ) -> Result<Self> {
        Self::new(
            date,
            at,
            ClockChange::TimezoneAdjustment {
                direction,
                magnitude_minutes,
            },
        )
    }

    /// A date line crossing of the standard 24-hour magnitude.
    pub fn idl(date: Date, at: ClockTime, travel: TravelDirection) -> Result<Self> {
        Self::new(
            date,
            at,
            ClockChange::IdlCrossing {
                travel,
                magnitude_minutes: IDL_MAGNITUDE_MINUTES,
            },
        )
    }

    /// Builds an event with a fresh id after checking the change is well-formed.
    pub fn new(date: Date, at: ClockTime, change: ClockChange) -> Result<Self> {
        change.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            date,
            occurrence: first_occurrence(),
            at,
            change,
        })
    }

    /// The same change placed on the `occurrence`th ship day carrying its date.
    #[must_use]
    pub fn on_occurrence(self, occurrence: u32) -> Self {
        Self { occurrence, ..self }
    }

    /// Where the change falls in a voyage: nominal date, then occurrence of
    /// that date, then clock time. Replays sort by this, never by log position.
    pub fn effective_order(&self) -> (Date, u32, ClockTime) {
        (self.date, self.occurrence, self.at)
    }

    /// Minutes from the start of the ship day to the change.
    pub fn pivot_minutes(&self) -> u32 {
        self.at.minutes()
    }
}

/// The kind of reckoning change. Closed: every consumer matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ClockChange {
    /// Ship's clocks are advanced or retarded to a new zone.
    TimezoneAdjustment {
        direction: ClockDirection,
        magnitude_minutes: u32,
    },

    /// The ship crosses the International Date Line.
    IdlCrossing {
        travel: TravelDirection,
        magnitude_minutes: u32,
    },
}

impl ClockChange {
    pub fn magnitude_minutes(&self) -> u32 {
        match *self {
            Self::TimezoneAdjustment {
                magnitude_minutes, ..
            }
            | Self::IdlCrossing {
                magnitude_minutes, ..
            } => magnitude_minutes,
        }
    }

    /// Checks the magnitude: positive, half-hour granular, and for timezone
    /// adjustments shorter than a full day.
    pub fn validate(&self) -> Result<()> {
        let magnitude = self.magnitude_minutes();
        let day_sized = matches!(self, Self::TimezoneAdjustment { .. }) && magnitude >= 24 * 60;
        if magnitude == 0 || magnitude % GRANULARITY_MINUTES != 0 || day_sized {
            return Err(ReckonError::InvalidMagnitude(magnitude));
        }
        Ok(())
    }
}

/// Which way the ship's clocks move for a timezone adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClockDirection {
    /// Clocks advance: the day is shorter.
    Forward,

    /// Clocks retard: the day is longer.
    Back,
}

/// Which way the ship crosses the date line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TravelDirection {
    /// From the +side to the -side: the date repeats.
    WestToEast,

    /// From the -side to the +side: a date is skipped.
    EastToWest,
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    fn two_am() -> ClockTime {
        "02:00".parse().unwrap()
    }

    #[test]
    fn accepts_half_hour_magnitudes() {
        for magnitude in [30, 60, 90, 120, 180] {
            let event = ClockChangeEvent::timezone(
                date(2025, 11, 26),
                two_am(),
                ClockDirection::Forward,
                magnitude,
            )
            .unwrap();
            assert_eq!(event.change.magnitude_minutes(), magnitude);
        }
    }

    #[test]
    fn rejects_bad_magnitudes() {
        for magnitude in [0, 45, 1440] {
            let err = ClockChangeEvent::timezone(
                date(2025, 11, 26),
                two_am(),
                ClockDirection::Back,
                magnitude,
            )
            .unwrap_err();
            assert!(matches!(err, ReckonError::InvalidMagnitude(m) if m == magnitude));
        }
    }

    #[test]
    fn idl_magnitude_is_configurable() {
        let change = ClockChange::IdlCrossing {
            travel: TravelDirection::EastToWest,
            magnitude_minutes: IDL_EXTREME_MAGNITUDE_MINUTES,
        };
        assert!(change.validate().is_ok());

        let event = ClockChangeEvent::idl(
            date(2025, 11, 26),
            "12:00".parse().unwrap(),
            TravelDirection::WestToEast,
        )
        .unwrap();
        assert_eq!(event.change.magnitude_minutes(), IDL_MAGNITUDE_MINUTES);
        assert_eq!(event.pivot_minutes(), 720);
    }

    #[test]
    fn serializes_as_tagged_variant() {
        let event = ClockChangeEvent::timezone(
            date(2025, 11, 26),
            two_am(),
            ClockDirection::Forward,
            60,
        )
        .unwrap();
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(json["date"], "2025-11-26");
        assert_eq!(json["at"], "02:00");
        assert_eq!(json["change"]["kind"], "timezoneAdjustment");
        assert_eq!(json["change"]["direction"], "forward");
        assert_eq!(json["change"]["magnitudeMinutes"], 60);

        let back: ClockChangeEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn occurrence_defaults_to_first() {
        let event = ClockChangeEvent::timezone(
            date(2025, 11, 26),
            two_am(),
            ClockDirection::Forward,
            60,
        )
        .unwrap();
        let mut json = serde_json::to_value(event).unwrap();
        json.as_object_mut().unwrap().remove("occurrence");

        let back: ClockChangeEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back.occurrence, 1);
    }

    #[test]
    fn effective_order_puts_the_repeated_date_after_the_first() {
        let crossing = ClockChangeEvent::idl(
            date(2025, 11, 26),
            "12:00".parse().unwrap(),
            TravelDirection::WestToEast,
        )
        .unwrap();
        let repeat = ClockChangeEvent::timezone(
            date(2025, 11, 26),
            two_am(),
            ClockDirection::Forward,
            60,
        )
        .unwrap()
        .on_occurrence(2);

        assert!(crossing.effective_order() < repeat.effective_order());
    }
}
