//! Walink store: fail-soft history persistence for the link records.
mod history;

pub use history::{
    decode_history, encode_history, load_history, persist_history, save_history, StoreError,
    HISTORY_FILENAME,
};
