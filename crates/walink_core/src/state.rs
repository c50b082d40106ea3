use crate::record::{derive_link, reconcile, sanitize_number, Record, RecordId};
use crate::view_model::{AppViewModel, RecordRowView};

/// Whether the persisted history has been restored yet. Restoration happens
/// at most once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Unloaded,
    Loaded,
}

/// Outcome of the most recent clipboard attempt, shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyNotice {
    Copied,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    input: String,
    records: Vec<Record>,
    next_id: RecordId,
    load_state: LoadState,
    last_submit_count: Option<usize>,
    copy_notice: Option<CopyNotice>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            input: String::new(),
            records: Vec::new(),
            next_id: 1,
            load_state: LoadState::Unloaded,
            last_submit_count: None,
            copy_notice: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            input: self.input.clone(),
            records: self
                .records
                .iter()
                .map(|record| RecordRowView {
                    id: record.id,
                    original: record.original.clone(),
                    link: record.link.clone(),
                    timestamp_ms: record.timestamp_ms,
                })
                .collect(),
            record_count: self.records.len(),
            last_submit_count: self.last_submit_count,
            copy_notice: self.copy_notice,
            dirty: self.dirty,
        }
    }

    /// Returns the dirty flag and clears it. The shell uses this to decide
    /// whether a re-render is due.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.dirty = true;
        }
    }

    pub(crate) fn link_for(&self, id: RecordId) -> Option<&str> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .map(|record| record.link.as_str())
    }

    pub(crate) fn set_copy_notice(&mut self, notice: CopyNotice) {
        self.copy_notice = Some(notice);
        self.dirty = true;
    }

    /// Install the restored collection after expiring stale entries and seed
    /// the id counter past everything already taken.
    pub(crate) fn restore_history(&mut self, records: Vec<Record>, now_ms: i64) {
        self.records = reconcile(records, now_ms);
        // Saturating: a hostile history file may carry id u64::MAX, which
        // must not panic the load path.
        self.next_id = self
            .records
            .iter()
            .map(|record| record.id.saturating_add(1))
            .max()
            .unwrap_or(1)
            .max(self.next_id);
        self.load_state = LoadState::Loaded;
        self.dirty = true;
    }

    /// Convert the current input into records, newest first. Returns how many
    /// records were created; zero means blank input and no state change.
    pub(crate) fn submit_input(&mut self, now_ms: i64) -> usize {
        let lines: Vec<&str> = self
            .input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return 0;
        }

        // The whole batch shares one creation timestamp.
        let batch: Vec<Record> = lines
            .into_iter()
            .map(|line| {
                let id = self.next_id;
                self.next_id = self.next_id.saturating_add(1);
                Record {
                    id,
                    original: line.to_owned(),
                    link: derive_link(&sanitize_number(line)),
                    timestamp_ms: now_ms,
                }
            })
            .collect();

        let created = batch.len();
        let mut combined = batch;
        combined.append(&mut self.records);
        self.records = combined;

        self.last_submit_count = Some(created);
        self.copy_notice = None;
        self.input.clear();
        self.dirty = true;
        created
    }
}
