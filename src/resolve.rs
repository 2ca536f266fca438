//! Offset resolver: the offset in force after one clock change.

use crate::error::{ReckonError, Result};
use crate::model::{ClockChange, ClockChangeEvent, ClockDirection, TravelDirection};
use crate::offset::{self, UtcOffset};

/// Applies `event` to `current`, returning the resulting offset.
///
/// Timezone adjustments never wrap: leaving -12:00..+14:00 is reported as
/// [`ReckonError::OffsetOutOfRange`]. Date line crossings shift by their
/// magnitude and wrap back into the band once if needed.
pub fn resolve_offset(current: UtcOffset, event: &ClockChangeEvent) -> Result<UtcOffset> {
    apply_change(current, &event.change)
}

/// [`resolve_offset`] for a change not yet bound to a day.
pub fn apply_change(current: UtcOffset, change: &ClockChange) -> Result<UtcOffset> {
    change.validate()?;
    let magnitude = signed(change.magnitude_minutes())?;

    let resulting = match *change {
        ClockChange::TimezoneAdjustment { direction, .. } => match direction {
            ClockDirection::Forward => current.minutes() + magnitude,
            ClockDirection::Back => current.minutes() - magnitude,
        },
        ClockChange::IdlCrossing { travel, .. } => match travel {
            TravelDirection::WestToEast => offset::normalize(current.minutes() - magnitude)?,
            TravelDirection::EastToWest => offset::normalize(current.minutes() + magnitude)?,
        },
    };

    UtcOffset::from_minutes(resulting)
}

fn signed(magnitude: u32) -> Result<i32> {
    i32::try_from(magnitude).map_err(|_| ReckonError::InvalidMagnitude(magnitude))
}
