//! Reckon configuration.
//!
//! Loaded from `~/.reckon/config.toml`. Defaults apply when the file is missing.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use reckon::model::{IDL_MAGNITUDE_MINUTES, Thresholds};

/// Reckon configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Who records clock changes when `--as` and `RECKON_IDENTITY` are absent.
    pub identity: Option<String>,

    /// Work limit per ship day, in hours.
    pub max_work_hours: f64,

    /// Rest minimum per ship day, in hours.
    pub min_rest_hours: f64,

    /// Default magnitude for `offset shift` and `event idl`. Ship days are
    /// always 24 hours across a crossing, so a voyage only accepts crossings
    /// whose real UTC shift is a full day; anything else is a discontinuity.
    pub idl_magnitude_minutes: u32,
}

impl Default for Config {
    fn default() -> Self {
        let thresholds = Thresholds::default();
        Self {
            identity: None,
            max_work_hours: f64::from(thresholds.max_work_minutes) / 60.0,
            min_rest_hours: f64::from(thresholds.min_rest_minutes) / 60.0,
            idl_magnitude_minutes: IDL_MAGNITUDE_MINUTES,
        }
    }
}

impl Config {
    /// Load config from `~/.reckon/config.toml`.
    /// A missing file yields defaults; an unreadable or invalid one is an error.
    pub fn load() -> Result<Self, String> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        let contents = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
        };

        Self::parse(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self, String> {
        let config: Self = toml::from_str(contents).map_err(|e| e.to_string())?;

        if !(config.max_work_hours >= 0.0 && config.min_rest_hours >= 0.0) {
            return Err("max-work-hours and min-rest-hours must not be negative".to_string());
        }
        Ok(config)
    }

    /// Work/rest limits in whole minutes.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            max_work_minutes: (self.max_work_hours * 60.0).round() as u32,
            min_rest_minutes: (self.min_rest_hours * 60.0).round() as u32,
        }
    }

    /// The config file path: `~/.reckon/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".reckon").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.identity, None);
        assert_eq!(config.thresholds(), Thresholds::default());
        assert_eq!(config.idl_magnitude_minutes, 1440);
    }

    #[test]
    fn reads_kebab_case_keys() {
        let config = Config::parse(
            "identity = \"oow\"\n\
             max-work-hours = 12.5\n\
             min-rest-hours = 11\n\
             idl-magnitude-minutes = 1500\n",
        )
        .unwrap();
        assert_eq!(config.identity.as_deref(), Some("oow"));
        assert_eq!(
            config.thresholds(),
            Thresholds {
                max_work_minutes: 750,
                min_rest_minutes: 660,
            }
        );
        assert_eq!(config.idl_magnitude_minutes, 1500);
    }

    #[test]
    fn rejects_negative_limits() {
        assert!(Config::parse("min-rest-hours = -1.0").is_err());
    }
}
