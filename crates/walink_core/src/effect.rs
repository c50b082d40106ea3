use crate::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Mirror the full in-memory collection to persistent storage.
    PersistHistory { records: Vec<Record> },
    /// Place one link on the system clipboard.
    CopyToClipboard { link: String },
}
