//! Output formatting for CLI display.

use reckon::model::{
    ClockChange, ClockDirection, ComplianceSummary, IDL_MAGNITUDE_MINUTES, Thresholds,
    TravelDirection, Violation,
};
use reckon::passage::ReckonedDay;

/// Decimal hours, trimmed: `8h`, `7.5h`, `23h`.
fn format_hours(minutes: u32) -> String {
    let hundredths = (minutes * 100 + 30) / 60;
    let whole = hundredths / 100;
    match hundredths % 100 {
        0 => format!("{whole}h"),
        frac if frac % 10 == 0 => format!("{whole}.{}h", frac / 10),
        frac => format!("{whole}.{frac:02}h"),
    }
}

/// Clock form: `07h 30m`.
fn format_clock_duration(minutes: u32) -> String {
    format!("{:02}h {:02}m", minutes / 60, minutes % 60)
}

/// Compact span for clock changes: `1h`, `30m`, `1h 30m`.
fn format_span(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// `clocks forward 1h`, `date line west to east`.
pub(super) fn describe_change(change: &ClockChange) -> String {
    match *change {
        ClockChange::TimezoneAdjustment {
            direction,
            magnitude_minutes,
        } => {
            let way = match direction {
                ClockDirection::Forward => "forward",
                ClockDirection::Back => "back",
            };
            format!("clocks {way} {}", format_span(magnitude_minutes))
        }
        ClockChange::IdlCrossing {
            travel,
            magnitude_minutes,
        } => {
            let way = match travel {
                TravelDirection::WestToEast => "west to east",
                TravelDirection::EastToWest => "east to west",
            };
            if magnitude_minutes == IDL_MAGNITUDE_MINUTES {
                format!("date line {way}")
            } else {
                format!("date line {way} ({})", format_span(magnitude_minutes))
            }
        }
    }
}

/// One line of the days table: label, length, offsets, and the change if any.
pub(super) fn format_day_row(day: &ReckonedDay) -> String {
    let label = day.record.label.to_string();
    let length = format_hours(day.record.length_minutes);
    let offsets = if day.offset_at_start == day.offset_at_end {
        day.offset_at_start.to_string()
    } else {
        format!("{} → {}", day.offset_at_start, day.offset_at_end)
    };

    let row = format!("{label:<24} {length:>5}  {offsets:<18}");
    match &day.event {
        Some(event) => format!("{row}{} at {}", describe_change(&event.change), event.at),
        None => row.trim_end().to_string(),
    }
}

/// Totals and violations, one line each.
pub(super) fn format_summary(summary: &ComplianceSummary, thresholds: &Thresholds) -> Vec<String> {
    let mut lines = vec![
        format!(
            "work  {} ({})",
            format_hours(summary.total_work_minutes),
            format_clock_duration(summary.total_work_minutes)
        ),
        format!(
            "rest  {} ({})",
            format_hours(summary.total_rest_minutes),
            format_clock_duration(summary.total_rest_minutes)
        ),
    ];

    if summary.is_compliant() {
        lines.push("compliant".to_string());
    }
    for violation in &summary.violations {
        lines.push(format_violation(*violation, summary, thresholds));
    }
    lines
}

fn format_violation(
    violation: Violation,
    summary: &ComplianceSummary,
    thresholds: &Thresholds,
) -> String {
    match violation {
        Violation::ExcessiveWork => format!(
            "excessive work: {} exceeds {} limit",
            format_hours(summary.total_work_minutes),
            format_hours(thresholds.max_work_minutes)
        ),
        Violation::InsufficientRest => format!(
            "insufficient rest: {} below {} minimum",
            format_hours(summary.total_rest_minutes),
            format_hours(thresholds.min_rest_minutes)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::BTreeSet;

    #[test]
    fn hours_are_trimmed_decimals() {
        assert_eq!(format_hours(480), "8h");
        assert_eq!(format_hours(450), "7.5h");
        assert_eq!(format_hours(1380), "23h");
        assert_eq!(format_hours(470), "7.83h");
        assert_eq!(format_hours(0), "0h");
    }

    #[test]
    fn clock_durations_are_zero_padded() {
        assert_eq!(format_clock_duration(480), "08h 00m");
        assert_eq!(format_clock_duration(450), "07h 30m");
        assert_eq!(format_clock_duration(1500), "25h 00m");
    }

    #[test]
    fn describe_change_kinds() {
        let cases = [
            (
                ClockChange::TimezoneAdjustment {
                    direction: ClockDirection::Forward,
                    magnitude_minutes: 60,
                },
                "clocks forward 1h",
            ),
            (
                ClockChange::TimezoneAdjustment {
                    direction: ClockDirection::Back,
                    magnitude_minutes: 90,
                },
                "clocks back 1h 30m",
            ),
            (
                ClockChange::IdlCrossing {
                    travel: TravelDirection::WestToEast,
                    magnitude_minutes: 1440,
                },
                "date line west to east",
            ),
            (
                ClockChange::IdlCrossing {
                    travel: TravelDirection::EastToWest,
                    magnitude_minutes: 1500,
                },
                "date line east to west (25h)",
            ),
        ];
        for (change, expected) in cases {
            assert_eq!(describe_change(&change), expected);
        }
    }

    #[test]
    fn summary_lists_each_violation() {
        let summary = ComplianceSummary {
            total_work_minutes: 870,
            total_rest_minutes: 570,
            day_length_minutes: 1440,
            violations: BTreeSet::from([Violation::ExcessiveWork, Violation::InsufficientRest]),
        };
        let lines = format_summary(&summary, &Thresholds::default());
        assert_eq!(
            lines,
            [
                "work  14.5h (14h 30m)",
                "rest  9.5h (09h 30m)",
                "excessive work: 14.5h exceeds 14h limit",
                "insufficient rest: 9.5h below 10h minimum",
            ]
        );
    }

    #[test]
    fn compliant_summary_says_so() {
        let summary = ComplianceSummary {
            total_work_minutes: 480,
            total_rest_minutes: 900,
            day_length_minutes: 1380,
            violations: BTreeSet::new(),
        };
        let lines = format_summary(&summary, &Thresholds::default());
        assert_eq!(lines.last().map(String::as_str), Some("compliant"));
    }
}
