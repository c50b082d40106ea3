//! Walink core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod record;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use record::{derive_link, reconcile, sanitize_number, Record, RecordId, LINK_PREFIX, TTL_MS};
pub use state::{AppState, CopyNotice, LoadState};
pub use update::update;
pub use view_model::{AppViewModel, RecordRowView};
