//! Clock-change commands: record, void, list.

use clap::{Subcommand, ValueEnum};
use jiff::{Timestamp, civil::Date};
use uuid::Uuid;

use reckon::model::{
    ClockChange, ClockChangeEvent, ClockDirection, ClockTime, LogEntry, TravelDirection, Voyage,
    short_date,
};

use crate::config::Config;
use crate::identity::resolve_identity;
use crate::storage::{Storage, voided_events};

use super::days::reckon_through;
use super::format::describe_change;
use super::{resolve_prefix, short_id};

#[derive(Debug, Subcommand)]
pub enum EventCommand {
    /// Record a timezone adjustment. Prints the event ID.
    Timezone {
        /// Nominal date of the ship day the change happens on.
        #[arg(long)]
        date: Date,

        /// Ship-local clock time of the change (e.g. `02:00`).
        #[arg(long)]
        at: ClockTime,

        /// Which ship day carrying `--date`, when a date line crossing repeats it.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=2))]
        occurrence: u32,

        /// Which way the clocks move.
        #[arg(long, value_enum)]
        direction: DirectionArg,

        /// Size of the change in minutes, a multiple of 30.
        magnitude: u32,
    },

    /// Record a date line crossing. Prints the event ID.
    Idl {
        /// Nominal date of the ship day the crossing happens on.
        #[arg(long)]
        date: Date,

        /// Ship-local clock time of the crossing (e.g. `12:00`).
        #[arg(long)]
        at: ClockTime,

        /// Which ship day carrying `--date`, when a date line crossing repeats it.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=2))]
        occurrence: u32,

        /// Which way the ship is heading.
        #[arg(long, value_enum)]
        travel: TravelArg,

        /// Size of the crossing in minutes. Defaults to `idl-magnitude-minutes`
        /// from the config (1440 unless set).
        #[arg(long)]
        magnitude: Option<u32>,
    },

    /// Withdraw a recorded clock change. The log keeps both entries.
    Void {
        /// Event ID: full UUID or unambiguous prefix.
        event: String,

        /// Why the recording is withdrawn.
        #[arg(long)]
        reason: Option<String>,
    },

    /// List the voyage's clock changes in recording order.
    List,
}

/// CLI-facing clock direction, mapped to the domain `ClockDirection`.
#[derive(Debug, Clone, ValueEnum)]
pub enum DirectionArg {
    /// Clocks advance; the ship day is shorter.
    Forward,
    /// Clocks retard; the ship day is longer.
    Back,
}

impl DirectionArg {
    fn to_domain(&self) -> ClockDirection {
        match self {
            Self::Forward => ClockDirection::Forward,
            Self::Back => ClockDirection::Back,
        }
    }
}

/// CLI-facing travel direction, mapped to the domain `TravelDirection`.
#[derive(Debug, Clone, ValueEnum)]
pub enum TravelArg {
    /// Eastbound: the date repeats.
    WestToEast,
    /// Westbound: a date is skipped.
    EastToWest,
}

impl TravelArg {
    fn to_domain(&self) -> TravelDirection {
        match self {
            Self::WestToEast => TravelDirection::WestToEast,
            Self::EastToWest => TravelDirection::EastToWest,
        }
    }
}

pub(super) fn run(
    config: &Config,
    storage: &Storage,
    voyage: &Voyage,
    identity: Option<&str>,
    command: EventCommand,
) -> Result<(), String> {
    match command {
        EventCommand::Timezone {
            date,
            at,
            occurrence,
            direction,
            magnitude,
        } => {
            let event = ClockChangeEvent::timezone(date, at, direction.to_domain(), magnitude)
                .map_err(|e| e.to_string())?
                .on_occurrence(occurrence);
            cmd_record(config, storage, voyage, identity, event)
        }
        EventCommand::Idl {
            date,
            at,
            occurrence,
            travel,
            magnitude,
        } => {
            let change = ClockChange::IdlCrossing {
                travel: travel.to_domain(),
                magnitude_minutes: magnitude.unwrap_or(config.idl_magnitude_minutes),
            };
            let event = ClockChangeEvent::new(date, at, change)
                .map_err(|e| e.to_string())?
                .on_occurrence(occurrence);
            cmd_record(config, storage, voyage, identity, event)
        }
        EventCommand::Void { event, reason } => {
            cmd_void(config, storage, voyage, identity, &event, reason)
        }
        EventCommand::List => cmd_list(storage, voyage),
    }
}

/// Appends `event` after checking the voyage still reckons with it.
fn cmd_record(
    config: &Config,
    storage: &Storage,
    voyage: &Voyage,
    identity: Option<&str>,
    event: ClockChangeEvent,
) -> Result<(), String> {
    let recorded_by = resolve_identity(identity, config)?;

    let mut events = storage
        .load_active_events(voyage.id)
        .map_err(|e| format!("failed to load clock changes: {e}"))?;
    events.push(event);
    reckon_through(voyage, &events, event.date)
        .map_err(|e| format!("clock change rejected: {e}"))?;

    storage
        .append_entry(
            voyage.id,
            &LogEntry::Recorded {
                event,
                recorded_by,
                recorded_at: Timestamp::now(),
            },
        )
        .map_err(|e| format!("failed to record clock change: {e}"))?;

    println!("{}", event.id);
    eprintln!(
        "Recorded {} on {} at {}",
        describe_change(&event.change),
        short_date(event.date),
        event.at
    );
    Ok(())
}

fn cmd_void(
    config: &Config,
    storage: &Storage,
    voyage: &Voyage,
    identity: Option<&str>,
    reference: &str,
    reason: Option<String>,
) -> Result<(), String> {
    let recorded_by = resolve_identity(identity, config)?;

    let events = storage
        .load_active_events(voyage.id)
        .map_err(|e| format!("failed to load clock changes: {e}"))?;
    let ids: Vec<Uuid> = events.iter().map(|e| e.id).collect();
    let id = resolve_prefix(&ids, reference, "active clock change")?;

    // Later changes may depend on the offset this one produced.
    let remaining: Vec<ClockChangeEvent> = events.into_iter().filter(|e| e.id != id).collect();
    if let Some(last) = remaining.iter().map(|e| e.date).max() {
        reckon_through(voyage, &remaining, last)
            .map_err(|e| format!("cannot void {}: {e}", short_id(id)))?;
    }

    storage
        .void_event(voyage.id, id, reason, &recorded_by)
        .map_err(|e| format!("failed to void clock change: {e}"))?;

    eprintln!("Voided {}", short_id(id));
    Ok(())
}

fn cmd_list(storage: &Storage, voyage: &Voyage) -> Result<(), String> {
    let entries = storage
        .load_log(voyage.id)
        .map_err(|e| format!("failed to load clock changes: {e}"))?;

    let voided = voided_events(&entries);

    let mut any = false;
    for entry in &entries {
        let LogEntry::Recorded {
            event, recorded_by, ..
        } = entry
        else {
            continue;
        };
        any = true;
        let marker = if voided.contains(&event.id) {
            "  [voided]"
        } else {
            ""
        };
        let repeat = if event.occurrence > 1 { " (repeat)" } else { "" };
        println!(
            "{}  {}{repeat} {}  {}  by {recorded_by}{marker}",
            short_id(event.id),
            short_date(event.date),
            event.at,
            describe_change(&event.change),
        );
    }

    if !any {
        println!("No clock changes");
    }
    Ok(())
}
