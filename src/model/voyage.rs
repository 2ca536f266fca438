//! Voyage types: the span of ship days a clock-change log belongs to.

use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::offset::UtcOffset;

/// A passage whose ship days are reckoned from one departure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voyage {
    pub id: Uuid,
    pub name: String,

    /// The first ship day.
    pub departs: Date,

    /// Ship's clock offset at the start of the first ship day.
    pub departure_offset: UtcOffset,

    pub created_at: Timestamp,
}
