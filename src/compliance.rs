//! Compliance evaluator: per-day work/rest totals against configured limits.

use std::collections::BTreeSet;

use crate::duration::elapsed_minutes;
use crate::error::{ReckonError, Result};
use crate::model::{ComplianceSummary, DayRecord, DutyInterval, Thresholds, Violation};

/// Totals the work on `day` and checks it against `thresholds`.
///
/// Work and drill intervals are summed using elapsed minutes. Rest is the
/// rest of the day, whatever its length, so work and rest always add up to
/// the day length exactly. Rest intervals are validated but not summed.
///
/// Fails if any interval is invalid for the day, if work intervals overlap,
/// or if the adjusted work is longer than the day itself.
pub fn evaluate(
    day: &DayRecord,
    intervals: &[DutyInterval],
    thresholds: &Thresholds,
) -> Result<ComplianceSummary> {
    let (mut work, rest): (Vec<&DutyInterval>, Vec<&DutyInterval>) =
        intervals.iter().partition(|i| i.kind.is_work());
    work.sort_by_key(|i| i.start);

    for interval in rest {
        elapsed_minutes(interval, day)?;
    }

    let mut total_work_minutes = 0;
    let mut previous_end = None;
    for interval in work {
        if let Some(end) = previous_end
            && interval.start < end
        {
            return Err(ReckonError::OverlappingIntervals { at: interval.start });
        }
        total_work_minutes += elapsed_minutes(interval, day)?;
        previous_end = Some(interval.end);
    }

    let total_rest_minutes = day
        .length_minutes
        .checked_sub(total_work_minutes)
        .ok_or(ReckonError::WorkExceedsDay {
            work: total_work_minutes,
            day_length: day.length_minutes,
        })?;

    let mut violations = BTreeSet::new();
    if total_work_minutes > thresholds.max_work_minutes {
        violations.insert(Violation::ExcessiveWork);
    }
    if total_rest_minutes < thresholds.min_rest_minutes {
        violations.insert(Violation::InsufficientRest);
    }

    if !violations.is_empty() {
        tracing::debug!(date = %day.nominal_date, ?violations, "non-compliant ship day");
    }

    Ok(ComplianceSummary {
        total_work_minutes,
        total_rest_minutes,
        day_length_minutes: day.length_minutes,
        violations,
    })
}
