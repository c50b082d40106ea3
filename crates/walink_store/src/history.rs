use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;
use walink_core::Record;

/// The original kept its history under a single storage key of this name;
/// here the key becomes the file stem.
pub const HISTORY_FILENAME: &str = "whatsAppLinkHistory.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write history file: {0}")]
    Io(#[from] io::Error),
}

/// On-disk record layout: a JSON array of these objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedRecord {
    id: u64,
    original: String,
    link: String,
    timestamp: i64,
}

impl From<&Record> for PersistedRecord {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id,
            original: record.original.clone(),
            link: record.link.clone(),
            timestamp: record.timestamp_ms,
        }
    }
}

impl From<PersistedRecord> for Record {
    fn from(persisted: PersistedRecord) -> Self {
        Self {
            id: persisted.id,
            original: persisted.original,
            link: persisted.link,
            timestamp_ms: persisted.timestamp,
        }
    }
}

/// Decode a serialized history value. Malformed content yields an empty
/// collection; the caller persists back and the corruption is gone.
pub fn decode_history(content: &str) -> Vec<Record> {
    match serde_json::from_str::<Vec<PersistedRecord>>(content) {
        Ok(persisted) => persisted.into_iter().map(Record::from).collect(),
        Err(err) => {
            warn!("Discarding malformed history: {}", err);
            Vec::new()
        }
    }
}

/// Serialize a collection to the on-disk JSON layout.
pub fn encode_history(records: &[Record]) -> Result<String, StoreError> {
    let persisted: Vec<PersistedRecord> = records.iter().map(PersistedRecord::from).collect();
    Ok(serde_json::to_string_pretty(&persisted)?)
}

/// Read the history file. Absent, unreadable, or malformed storage all
/// yield an empty collection; nothing here is fatal.
pub fn load_history(data_dir: &Path) -> Vec<Record> {
    let path = data_dir.join(HISTORY_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Vec::new();
        }
        Err(err) => {
            warn!("Failed to read history from {:?}: {}", path, err);
            return Vec::new();
        }
    };

    let records = decode_history(&content);
    info!("Loaded {} persisted records from {:?}", records.len(), path);
    records
}

/// Serialize the collection and replace the history file in one step.
///
/// The JSON goes to a temp file in the data directory first and is renamed
/// over the target, so a crash mid-write leaves the previous history intact
/// rather than a truncated array the next load would discard.
pub fn persist_history(data_dir: &Path, records: &[Record]) -> Result<PathBuf, StoreError> {
    let json = encode_history(records)?;

    fs::create_dir_all(data_dir)?;
    let mut staged = NamedTempFile::new_in(data_dir)?;
    staged.write_all(json.as_bytes())?;
    staged.as_file_mut().sync_all()?;

    let target = data_dir.join(HISTORY_FILENAME);
    staged
        .persist(&target)
        .map_err(|err| StoreError::Io(err.error))?;
    Ok(target)
}

/// Mirror the in-memory collection to disk. Failures are logged and
/// swallowed; the in-memory state stays authoritative for this session.
pub fn save_history(data_dir: &Path, records: &[Record]) {
    if let Err(err) = persist_history(data_dir, records) {
        error!("Failed to write history to {:?}: {}", data_dir, err);
    }
}
