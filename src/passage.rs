//! Voyage reckoner: consecutive ship days against a voyage's clock changes.
//!
//! Each ship day is segmented, the offset carried forward, and the day pinned
//! to UTC: it starts at local midnight of its nominal date under the offset
//! in force, and ends where the next ship day starts. A day whose UTC span
//! disagrees with its length is a [`ReckonError::Discontinuity`].

use jiff::Timestamp;
use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

use crate::error::{ReckonError, Result};
use crate::model::{ClockChangeEvent, DayRecord, Voyage};
use crate::offset::UtcOffset;
use crate::resolve::resolve_offset;
use crate::segment::segment_day;

/// One ship day pinned to UTC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReckonedDay {
    pub record: DayRecord,

    /// The clock change applied on this day, if any.
    pub event: Option<ClockChangeEvent>,

    pub offset_at_start: UtcOffset,
    pub offset_at_end: UtcOffset,
    pub utc_start: Timestamp,
    pub utc_end: Timestamp,
}

impl ReckonedDay {
    /// Minutes of UTC the day covers. Equal to `record.length_minutes`.
    pub fn utc_minutes(&self) -> i64 {
        (self.utc_end.as_second() - self.utc_start.as_second()) / 60
    }
}

/// Reckons `day_count` ship days of `voyage`.
pub fn reckon_voyage(
    voyage: &Voyage,
    events: &[ClockChangeEvent],
    day_count: usize,
) -> Result<Vec<ReckonedDay>> {
    reckon_days(voyage.departs, voyage.departure_offset, events, day_count)
}

/// Reckons `day_count` ship days starting on `departs` at `departure_offset`.
///
/// `events` may come in any order; they are replayed by
/// [`ClockChangeEvent::effective_order`], so a correction recorded late
/// lands on its own day. An event applies to the ship day carrying its
/// nominal date and occurrence: after a `WestToEast` crossing the same date
/// comes round twice, and the second day is occurrence `2`. An event whose
/// day has already gone by (a second change on one day, a change on a
/// skipped date, or an occurrence that never comes) is
/// [`ReckonError::AmbiguousEventPlacement`]. Days come back in UTC order.
pub fn reckon_days(
    departs: Date,
    departure_offset: UtcOffset,
    events: &[ClockChangeEvent],
    day_count: usize,
) -> Result<Vec<ReckonedDay>> {
    let mut ordered = events.to_vec();
    ordered.sort_by_key(ClockChangeEvent::effective_order);
    let mut pending = ordered.iter().peekable();
    let mut days = Vec::with_capacity(day_count);

    let mut date = departs;
    let mut occurrence = 1;
    let mut offset = departure_offset;
    let mut utc_start = local_midnight(date, offset)?;

    for _ in 0..day_count {
        let event = match pending.peek() {
            Some(e) if (e.date, e.occurrence) == (date, occurrence) => pending.next(),
            Some(e) if (e.date, e.occurrence) < (date, occurrence) => {
                return Err(ReckonError::AmbiguousEventPlacement {
                    event_date: e.date,
                    day: date,
                });
            }
            _ => None,
        };

        let record = segment_day(date, event)?;
        let offset_at_end = match event {
            Some(e) => resolve_offset(offset, e)?,
            None => offset,
        };
        let next_date = record.next_nominal_date()?;
        let utc_end = local_midnight(next_date, offset_at_end)?;

        let day = ReckonedDay {
            record,
            event: event.copied(),
            offset_at_start: offset,
            offset_at_end,
            utc_start,
            utc_end,
        };
        if day.utc_minutes() != i64::from(day.record.length_minutes) {
            return Err(ReckonError::Discontinuity {
                day: date,
                length: day.record.length_minutes,
                utc_minutes: day.utc_minutes(),
            });
        }

        tracing::debug!(
            date = %date,
            label = %day.record.label,
            length = day.record.length_minutes,
            from = %offset,
            to = %offset_at_end,
            "reckoned ship day"
        );

        days.push(day);
        occurrence = if next_date == date { occurrence + 1 } else { 1 };
        date = next_date;
        offset = offset_at_end;
        utc_start = utc_end;
    }

    if let Some(e) = pending.peek()
        && (e.date, e.occurrence) < (date, occurrence)
    {
        return Err(ReckonError::AmbiguousEventPlacement {
            event_date: e.date,
            day: date,
        });
    }

    Ok(days)
}

/// Ship days that started on `date`, in UTC order. Two after a date repeat.
pub fn days_on(days: &[ReckonedDay], date: Date) -> impl Iterator<Item = &ReckonedDay> {
    days.iter().filter(move |d| d.record.nominal_date == date)
}

/// The UTC instant of local midnight at the start of `date` under `offset`.
fn local_midnight(date: Date, offset: UtcOffset) -> Result<Timestamp> {
    Ok(offset
        .to_jiff()?
        .to_timestamp(date.to_datetime(Time::midnight()))?)
}
