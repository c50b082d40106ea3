pub type RecordId = u64;

/// Maximum age before a record is purged on the next load, in milliseconds.
pub const TTL_MS: i64 = 86_400_000;

/// Fixed URI prefix every derived link starts with.
pub const LINK_PREFIX: &str = "https://wa.me/";

/// One original-input-to-link mapping with metadata.
///
/// `timestamp_ms` is set once at creation and never mutated; `link` is
/// derived from `original` at creation time and never re-derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: RecordId,
    pub original: String,
    pub link: String,
    pub timestamp_ms: i64,
}

/// Reduce a raw input line to ASCII digits and plus signs.
///
/// Intentionally keeps a `+` wherever it appears, not just leading, to match
/// the historical behavior. Idempotent.
pub fn sanitize_number(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Build the deep-link for an already-sanitized number.
///
/// A number that sanitized to the empty string yields the bare prefix.
pub fn derive_link(sanitized: &str) -> String {
    format!("{LINK_PREFIX}{sanitized}")
}

/// Drop every record whose age at `now_ms` has reached the TTL, preserving
/// the relative order of the survivors.
pub fn reconcile(records: Vec<Record>, now_ms: i64) -> Vec<Record> {
    records
        .into_iter()
        .filter(|record| now_ms - record.timestamp_ms < TTL_MS)
        .collect()
}
