//! Record sinks: where progression records go.
//!
//! The kernel emits records and never reads them back. Storage is the
//! sink's business.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use termina_types::{BadgeAward, ChallengeProgress, CommandRecord, UserProfile};
use tracing::debug;

/// One emitted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Command(CommandRecord),
    Progress(ChallengeProgress),
    Profile(UserProfile),
    Badge(BadgeAward),
}

/// Receives records as the session produces them.
pub trait RecordSink: Send + Sync {
    fn emit(&self, record: Record);
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RecordSink for NullSink {
    fn emit(&self, _record: Record) {}
}

/// Logs each record as a `debug!` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl RecordSink for TracingSink {
    fn emit(&self, record: Record) {
        match serde_json::to_string(&record) {
            Ok(json) => debug!(target: "termina::records", record = %json),
            Err(e) => debug!(target: "termina::records", error = %e, "unserializable record"),
        }
    }
}

/// Keeps records in memory, for tests and embedders.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Record>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything emitted so far.
    pub fn records(&self) -> Vec<Record> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl RecordSink for MemorySink {
    fn emit(&self, record: Record) {
        match self.records.lock() {
            Ok(mut records) => records.push(record),
            Err(poisoned) => poisoned.into_inner().push(record),
        }
    }
}
