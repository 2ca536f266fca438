//! Offset commands: shift, list.

use clap::{Subcommand, ValueEnum};

use reckon::model::{ClockChange, ClockDirection, TravelDirection};
use reckon::offset::{UtcOffset, legal_offsets};
use reckon::resolve::apply_change;

use crate::config::Config;

use super::format::describe_change;

#[derive(Debug, Subcommand)]
pub enum OffsetCommand {
    /// Print the offset in force after one clock change.
    Shift {
        /// Offset before the change (e.g. `+12:00`, `-9:30`).
        #[arg(allow_hyphen_values = true)]
        from: UtcOffset,

        /// What kind of change.
        #[arg(long, value_enum)]
        change: ChangeArg,

        /// Size of the change in minutes. Date line crossings default to
        /// `idl-magnitude-minutes` from the config; timezone adjustments
        /// require it.
        magnitude: Option<u32>,
    },

    /// List the selectable offsets, east to west.
    List,
}

/// CLI-facing change kind, mapped to the domain `ClockChange`.
#[derive(Debug, Clone, ValueEnum)]
pub enum ChangeArg {
    Forward,
    Back,
    WestToEast,
    EastToWest,
}

impl ChangeArg {
    fn to_domain(&self, magnitude_minutes: u32) -> ClockChange {
        match self {
            Self::Forward => ClockChange::TimezoneAdjustment {
                direction: ClockDirection::Forward,
                magnitude_minutes,
            },
            Self::Back => ClockChange::TimezoneAdjustment {
                direction: ClockDirection::Back,
                magnitude_minutes,
            },
            Self::WestToEast => ClockChange::IdlCrossing {
                travel: TravelDirection::WestToEast,
                magnitude_minutes,
            },
            Self::EastToWest => ClockChange::IdlCrossing {
                travel: TravelDirection::EastToWest,
                magnitude_minutes,
            },
        }
    }

    fn is_date_line(&self) -> bool {
        matches!(self, Self::WestToEast | Self::EastToWest)
    }
}

pub(super) fn run(config: &Config, command: OffsetCommand) -> Result<(), String> {
    match command {
        OffsetCommand::Shift {
            from,
            change,
            magnitude,
        } => {
            let change = shift_change(config, &change, magnitude)?;
            let to = apply_change(from, &change).map_err(|e| e.to_string())?;
            println!("{to}");
            eprintln!("{from} {} → {to}", describe_change(&change));
            Ok(())
        }
        OffsetCommand::List => {
            for offset in legal_offsets() {
                println!("{offset}");
            }
            Ok(())
        }
    }
}

fn shift_change(
    config: &Config,
    change: &ChangeArg,
    magnitude: Option<u32>,
) -> Result<ClockChange, String> {
    let magnitude = match magnitude {
        Some(m) => m,
        None if change.is_date_line() => config.idl_magnitude_minutes,
        None => return Err("timezone adjustments need a magnitude in minutes".to_string()),
    };
    Ok(change.to_domain(magnitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_line_defaults_to_configured_magnitude() {
        let config = Config {
            idl_magnitude_minutes: 1500,
            ..Config::default()
        };
        let change = shift_change(&config, &ChangeArg::WestToEast, None).unwrap();
        assert_eq!(change.magnitude_minutes(), 1500);
    }

    #[test]
    fn timezone_shift_needs_magnitude() {
        let config = Config::default();
        assert!(shift_change(&config, &ChangeArg::Forward, None).is_err());

        let change = shift_change(&config, &ChangeArg::Back, Some(90)).unwrap();
        let to = apply_change("+9:00".parse().unwrap(), &change).unwrap();
        assert_eq!(to.to_string(), "+7:30");
    }
}
