//! Voyage lifecycle commands: new, list.

use clap::Subcommand;
use jiff::{Timestamp, civil::Date};
use uuid::Uuid;

use reckon::model::{Voyage, short_date};
use reckon::offset::UtcOffset;

use crate::storage::Storage;

use super::short_id;

#[derive(Debug, Subcommand)]
pub enum VoyageCommand {
    /// Create a new voyage. Prints the voyage ID.
    New {
        /// Nominal date of the first ship day (e.g. `2025-11-24`).
        #[arg(long)]
        departs: Date,

        /// Ship's clock offset at departure (e.g. `+9:00`, `-10:00`).
        #[arg(long, allow_hyphen_values = true)]
        offset: UtcOffset,

        /// What to call the passage.
        name: String,
    },

    /// List voyages.
    List,
}

pub(super) fn cmd_new(
    storage: &Storage,
    departs: Date,
    offset: UtcOffset,
    name: &str,
) -> Result<(), String> {
    let voyage = Voyage {
        id: Uuid::new_v4(),
        name: name.to_string(),
        departs,
        departure_offset: offset,
        created_at: Timestamp::now(),
    };

    storage
        .create_voyage(&voyage)
        .map_err(|e| format!("failed to create voyage: {e}"))?;

    println!("{}", voyage.id);
    Ok(())
}

pub(super) fn cmd_list(storage: &Storage) -> Result<(), String> {
    let voyages = storage
        .list_voyages()
        .map_err(|e| format!("failed to list voyages: {e}"))?;

    if voyages.is_empty() {
        println!("No voyages");
        return Ok(());
    }

    for v in &voyages {
        println!(
            "{}  departs {} [{}]  {}",
            short_id(v.id),
            short_date(v.departs),
            v.departure_offset,
            v.name
        );
    }

    Ok(())
}
