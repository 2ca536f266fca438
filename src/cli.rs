//! CLI interface for Reckon.
//!
//! Each subcommand is non-interactive: arguments in, text or JSON out.
//!
//! Commands split into two groups:
//!
//! - `reckon voyage new|list` and `reckon offset shift|list` need no voyage.
//! - `reckon --voyage <id> event|days|check` operate within a voyage.
//!
//! The `--voyage` flag takes a full UUID or unambiguous prefix.

mod days;
mod event;
mod format;
mod offset;
mod voyage;

use clap::{Parser, Subcommand};
use jiff::civil::Date;
use uuid::Uuid;

use reckon::model::{DutyInterval, Voyage};

use crate::config::Config;
use crate::storage::Storage;

use event::EventCommand;
use offset::OffsetCommand;
use voyage::VoyageCommand;

/// Reckon: ship days, clock changes, and work/rest hours at sea.
#[derive(Debug, Parser)]
#[command(name = "reckon", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    /// Voyage ID: full UUID or unambiguous prefix (e.g. `a3b`).
    /// Required for event, days, and check.
    #[arg(long, global = true)]
    voyage: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r"Workflow: a Pacific passage
  1. reckon voyage new --departs 2025-11-24 --offset +9:00 'Yokohama to Honolulu'
     → prints a voyage ID (e.g. a3b0fc12)
  2. reckon --voyage a3b event timezone --date 2025-11-25 --at 02:00 --direction forward 60
  3. reckon --voyage a3b event idl --date 2025-11-27 --at 12:00 --travel west-to-east
  4. reckon --voyage a3b days
  5. reckon --voyage a3b check 2025-11-25 --work 08:00-12:00 --work 13:00-16:30 --drill 17:00-17:30

Identity for recording: --as <name>, RECKON_IDENTITY, or `identity` in ~/.reckon/config.toml.
Logging: RECKON_LOG=debug";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage voyages: create new ones, list existing.
    Voyage {
        #[command(subcommand)]
        command: VoyageCommand,
    },

    /// Record, void, and list clock changes. Requires `--voyage`.
    Event {
        /// Who is recording (overrides RECKON_IDENTITY and config).
        #[arg(long = "as", global = true)]
        identity: Option<String>,

        #[command(subcommand)]
        command: EventCommand,
    },

    /// Show reckoned ship days: labels, lengths, and offsets. Requires `--voyage`.
    Days {
        /// Number of ship days from departure.
        #[arg(long, default_value_t = 7)]
        count: usize,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Check work/rest hours for one ship day. Requires `--voyage`.
    ///
    /// Intervals are ship-local clock times on that day, e.g. `08:00-12:00`.
    /// On a 25-hour day the clock runs to `25:00`.
    Check {
        /// Nominal date of the ship day.
        date: Date,

        /// Which ship day, when a date line crossing repeats the date.
        #[arg(long, default_value_t = 1)]
        occurrence: usize,

        /// Work interval. Can be specified multiple times.
        #[arg(long)]
        work: Vec<DutyInterval>,

        /// Drill interval, counted as work. Can be specified multiple times.
        #[arg(long)]
        drill: Vec<DutyInterval>,

        /// Rest interval. Checked for validity only. Can be specified multiple times.
        #[arg(long)]
        rest: Vec<DutyInterval>,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Offset arithmetic without a voyage.
    Offset {
        #[command(subcommand)]
        command: OffsetCommand,
    },
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config, storage: &Storage) -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Command::Voyage { command } => match command {
            VoyageCommand::New {
                departs,
                offset,
                name,
            } => voyage::cmd_new(storage, departs, offset, &name),
            VoyageCommand::List => voyage::cmd_list(storage),
        },
        Command::Event { identity, command } => {
            let voyage = require_voyage(storage, cli.voyage.as_deref())?;
            event::run(config, storage, &voyage, identity.as_deref(), command)
        }
        Command::Days { count, json } => {
            let voyage = require_voyage(storage, cli.voyage.as_deref())?;
            days::cmd_days(storage, &voyage, count, json)
        }
        Command::Check {
            date,
            occurrence,
            work,
            drill,
            rest,
            json,
        } => {
            let voyage = require_voyage(storage, cli.voyage.as_deref())?;
            let intervals = days::collect_intervals(work, drill, rest);
            days::cmd_check(
                config,
                storage,
                &voyage,
                date,
                occurrence,
                &intervals,
                json,
            )
        }
        Command::Offset { command } => offset::run(config, command),
    }
}

/// Require that `--voyage` was provided and resolve it.
fn require_voyage(storage: &Storage, voyage_ref: Option<&str>) -> Result<Voyage, String> {
    let voyage_ref = voyage_ref.ok_or("this command requires --voyage <id>")?;
    resolve_voyage(storage, voyage_ref)
}

/// Resolve a voyage reference (full UUID or unambiguous prefix) to a voyage.
fn resolve_voyage(storage: &Storage, reference: &str) -> Result<Voyage, String> {
    // Try full UUID first.
    if let Ok(id) = reference.parse::<Uuid>() {
        return storage
            .load_voyage(id)
            .map_err(|e| format!("voyage not found: {e}"));
    }

    let voyages = storage
        .list_voyages()
        .map_err(|e| format!("failed to list voyages: {e}"))?;

    let ids: Vec<Uuid> = voyages.iter().map(|v| v.id).collect();
    let id = resolve_prefix(&ids, reference, "voyage")?;
    voyages
        .into_iter()
        .find(|v| v.id == id)
        .ok_or_else(|| format!("no voyage matching '{reference}'"))
}

/// Match a UUID prefix against `candidates`. `what` names the kind in errors.
fn resolve_prefix(candidates: &[Uuid], reference: &str, what: &str) -> Result<Uuid, String> {
    let matches: Vec<Uuid> = candidates
        .iter()
        .copied()
        .filter(|id| id.to_string().starts_with(reference))
        .collect();

    match matches.as_slice() {
        [] => Err(format!("no {what} matching '{reference}'")),
        [id] => Ok(*id),
        _ => {
            let ids: Vec<String> = matches.iter().map(|id| short_id(*id)).collect();
            Err(format!(
                "'{reference}' is ambiguous: matches {} {what}s: {}",
                matches.len(),
                ids.join(", ")
            ))
        }
    }
}

/// First eight hex digits of a UUID, as shown in listings.
fn short_id(id: Uuid) -> String {
    id.to_string()[..8].to_string()
}
