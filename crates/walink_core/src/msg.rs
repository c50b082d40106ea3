use crate::{Record, RecordId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the number input box.
    InputChanged(String),
    /// User submitted the current input for conversion.
    LinksSubmitted { now_ms: i64 },
    /// Persisted history decoded at startup; `now_ms` drives expiry.
    HistoryLoaded { records: Vec<Record>, now_ms: i64 },
    /// User asked to copy the link of one record.
    CopyRequested { id: RecordId },
    /// Outcome of a clipboard write attempt.
    CopyFinished { ok: bool },
    /// Fallback for placeholder wiring.
    NoOp,
}
