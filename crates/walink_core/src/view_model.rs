use crate::state::CopyNotice;
use crate::RecordId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub records: Vec<RecordRowView>,
    pub record_count: usize,
    pub last_submit_count: Option<usize>,
    pub copy_notice: Option<CopyNotice>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRowView {
    pub id: RecordId,
    pub original: String,
    pub link: String,
    pub timestamp_ms: i64,
}
