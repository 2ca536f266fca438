//! Ship day commands: days, check.

use jiff::civil::Date;
use serde::Serialize;

use reckon::compliance::evaluate;
use reckon::model::{ClockChangeEvent, ComplianceSummary, DutyInterval, DutyKind, Voyage};
use reckon::passage::{ReckonedDay, days_on, reckon_voyage};

use crate::config::Config;
use crate::storage::Storage;

use super::format::{format_day_row, format_summary};

/// What `check --json` prints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckReport<'a> {
    day: &'a ReckonedDay,
    summary: &'a ComplianceSummary,
}

/// Reckons enough ship days to pass `date` and every event in `events`.
///
/// Each west-to-east crossing can add one repeated day, so the count allows
/// one extra day per event.
pub(super) fn reckon_through(
    voyage: &Voyage,
    events: &[ClockChangeEvent],
    date: Date,
) -> Result<Vec<ReckonedDay>, String> {
    let last = events.iter().map(|e| e.date).fold(date, Ord::max);
    let span = voyage
        .departs
        .until(last)
        .map_err(|e| e.to_string())?
        .get_days();
    let count = usize::try_from(span).unwrap_or(0) + 1 + events.len();
    reckon_voyage(voyage, events, count).map_err(|e| e.to_string())
}

/// Tags the intervals from `--work`, `--drill`, and `--rest` with their kind.
pub(super) fn collect_intervals(
    work: Vec<DutyInterval>,
    drill: Vec<DutyInterval>,
    rest: Vec<DutyInterval>,
) -> Vec<DutyInterval> {
    let drill = drill.into_iter().map(|i| i.with_kind(DutyKind::Drill));
    let rest = rest.into_iter().map(|i| i.with_kind(DutyKind::Rest));
    work.into_iter().chain(drill).chain(rest).collect()
}

pub(super) fn cmd_days(
    storage: &Storage,
    voyage: &Voyage,
    count: usize,
    json: bool,
) -> Result<(), String> {
    let events = storage
        .load_active_events(voyage.id)
        .map_err(|e| format!("failed to load clock changes: {e}"))?;
    let days = reckon_voyage(voyage, &events, count).map_err(|e| e.to_string())?;

    if json {
        let json = serde_json::to_string_pretty(&days)
            .map_err(|e| format!("failed to serialize days: {e}"))?;
        println!("{json}");
        return Ok(());
    }

    for day in &days {
        println!("{}", format_day_row(day));
    }
    Ok(())
}

pub(super) fn cmd_check(
    config: &Config,
    storage: &Storage,
    voyage: &Voyage,
    date: Date,
    occurrence: usize,
    intervals: &[DutyInterval],
    json: bool,
) -> Result<(), String> {
    let index = occurrence
        .checked_sub(1)
        .ok_or("--occurrence counts from 1")?;

    let events = storage
        .load_active_events(voyage.id)
        .map_err(|e| format!("failed to load clock changes: {e}"))?;
    let days = reckon_through(voyage, &events, date)?;

    let day = days_on(&days, date).nth(index).ok_or_else(|| {
        if index == 0 {
            format!("no ship day starts on {date}")
        } else {
            format!("{date} does not occur {occurrence} times")
        }
    })?;

    let thresholds = config.thresholds();
    let summary = evaluate(&day.record, intervals, &thresholds).map_err(|e| e.to_string())?;

    if json {
        let report = CheckReport {
            day,
            summary: &summary,
        };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("failed to serialize report: {e}"))?;
        println!("{json}");
    } else {
        println!("{}", format_day_row(day));
        for line in format_summary(&summary, &thresholds) {
            println!("  {line}");
        }
    }
    Ok(())
}
