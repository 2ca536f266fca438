//! Event log storage: append and load clock-change log entries.
//!
//! The log is append-only and keeps recording order. Entries are never sorted
//! or rewritten; the reckoner orders events by their own date and occurrence.

use std::collections::HashSet;
use std::{fs, io};

// Traits must be in scope for `.lines()` on BufReader and `.write_all()` on File.
use io::{BufRead, Write};

use jiff::Timestamp;
use uuid::Uuid;

use reckon::model::{ClockChangeEvent, LogEntry};

use super::{Result, Storage, StorageError};

impl Storage {
    /// Appends an entry to a voyage's event log.
    pub fn append_entry(&self, voyage_id: Uuid, entry: &LogEntry) -> Result<()> {
        let dir = self.voyage_dir(voyage_id);
        if !dir.exists() {
            return Err(StorageError::VoyageNotFound(voyage_id));
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("events.jsonl"))?;
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');
        file.write_all(line.as_bytes())?;
        tracing::debug!(voyage = %voyage_id, "appended log entry");
        Ok(())
    }

    /// Loads all log entries for a voyage, in recording order.
    pub fn load_log(&self, voyage_id: Uuid) -> Result<Vec<LogEntry>> {
        let path = self.voyage_dir(voyage_id).join("events.jsonl");
        if !path.exists() {
            let dir = self.voyage_dir(voyage_id);
            if !dir.exists() {
                return Err(StorageError::VoyageNotFound(voyage_id));
            }
            return Ok(Vec::new());
        }
        let file = fs::File::open(path)?;
        let reader = io::BufReader::new(file);
        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if !line.is_empty() {
                entries.push(serde_json::from_str(&line)?);
            }
        }
        Ok(entries)
    }

    /// The voyage's clock changes that have not been voided, in recording order.
    pub fn load_active_events(&self, voyage_id: Uuid) -> Result<Vec<ClockChangeEvent>> {
        Ok(active_events(&self.load_log(voyage_id)?))
    }

    /// Withdraws an active clock change by appending a `Voided` entry.
    pub fn void_event(
        &self,
        voyage_id: Uuid,
        event_id: Uuid,
        reason: Option<String>,
        recorded_by: &str,
    ) -> Result<()> {
        let active = self.load_active_events(voyage_id)?;
        if !active.iter().any(|e| e.id == event_id) {
            return Err(StorageError::EventNotFound(event_id));
        }
        self.append_entry(
            voyage_id,
            &LogEntry::Voided {
                event_id,
                reason,
                recorded_by: recorded_by.to_string(),
                recorded_at: Timestamp::now(),
            },
        )
    }
}

/// Ids of every event the log has voided.
pub fn voided_events(entries: &[LogEntry]) -> HashSet<Uuid> {
    entries
        .iter()
        .filter_map(|entry| match entry {
            LogEntry::Voided { event_id, .. } => Some(*event_id),
            LogEntry::Recorded { .. } => None,
        })
        .collect()
}

/// Replays a log: recorded events minus voided ones, in recording order.
fn active_events(entries: &[LogEntry]) -> Vec<ClockChangeEvent> {
    let voided = voided_events(entries);
    entries
        .iter()
        .filter_map(|entry| match entry {
            LogEntry::Recorded { event, .. } if !voided.contains(&event.id) => Some(*event),
            _ => None,
        })
        .collect()
}
