//! Core data model for ship-time reckoning.
//!
//! Clock-change events are authored and logged; day records, duty intervals,
//! and compliance summaries are values derived from them on demand.

mod clock;
mod compliance;
mod day;
mod duty;
mod event;
mod voyage;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use clock::ClockTime;
pub use compliance::{ComplianceSummary, Thresholds, Violation};
pub use day::{DateLabel, DayRecord, STANDARD_DAY_MINUTES, short_date};
pub use duty::{DutyInterval, DutyKind};
pub use event::{
    ClockChange, ClockChangeEvent, ClockDirection, IDL_EXTREME_MAGNITUDE_MINUTES,
    IDL_MAGNITUDE_MINUTES, TravelDirection,
};
pub use voyage::Voyage;

/// A single entry in a voyage's event log, serialized as one line of JSONL.
///
/// The log is append-only: events are never edited in place. A correction
/// is a `Voided` entry for the old event followed by a new `Recorded` one.
/// Recorder identity is kept per entry, since whether clock changes are set
/// centrally or by each seafarer is left to the vessel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "entry", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum LogEntry {
    /// A clock change was observed and recorded.
    Recorded {
        event: ClockChangeEvent,
        recorded_by: String,
        recorded_at: Timestamp,
    },

    /// An earlier recording was withdrawn.
    Voided {
        event_id: Uuid,
        reason: Option<String>,
        recorded_by: String,
        recorded_at: Timestamp,
    },
}
