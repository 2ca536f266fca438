//! Recorder identity for clock-change log entries.
//!
//! Whether clock changes are entered centrally (officer of the watch, master)
//! or by each seafarer is the vessel's call, so every log entry names who
//! recorded it. Identity is resolved through a chain:
//!
//! 1. `--as <identity>`: explicit per-command override
//! 2. `RECKON_IDENTITY` env var: per session
//! 3. `identity` in `~/.reckon/config.toml`: default for the machine

use std::env;

use crate::config::Config;

/// Error message shown when identity cannot be resolved.
pub const IDENTITY_REQUIRED: &str = "identity required: pass --as <identity>, \
    set RECKON_IDENTITY, or add `identity = \"...\"` to ~/.reckon/config.toml";

/// Resolve the recording identity from the tiered resolution chain.
///
/// Returns an error with [`IDENTITY_REQUIRED`] when none of the sources
/// yield a value.
pub fn resolve_identity(explicit: Option<&str>, config: &Config) -> Result<String, String> {
    // 1. Explicit --as flag.
    if let Some(id) = explicit.filter(|s| !s.is_empty()) {
        return Ok(id.to_string());
    }

    // 2. RECKON_IDENTITY environment variable.
    if let Ok(id) = env::var("RECKON_IDENTITY")
        && !id.is_empty()
    {
        return Ok(id);
    }

    // 3. ~/.reckon/config.toml.
    if let Some(id) = config.identity.as_deref().filter(|s| !s.is_empty()) {
        return Ok(id.to_string());
    }

    Err(IDENTITY_REQUIRED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_wins() {
        // Returned before the env or config are consulted.
        let config = Config {
            identity: Some("master".into()),
            ..Config::default()
        };
        let result = resolve_identity(Some("oow"), &config);
        assert_eq!(result.unwrap(), "oow");
    }
}
