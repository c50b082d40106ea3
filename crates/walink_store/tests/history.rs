use std::fs;
use std::sync::Once;

use tempfile::TempDir;
use walink_core::{derive_link, sanitize_number, Record};
use walink_store::{
    decode_history, encode_history, load_history, persist_history, save_history, HISTORY_FILENAME,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

fn record(id: u64, original: &str, timestamp_ms: i64) -> Record {
    Record {
        id,
        original: original.to_string(),
        link: derive_link(&sanitize_number(original)),
        timestamp_ms,
    }
}

#[test]
fn missing_file_loads_as_empty() {
    init_logging();
    let temp = TempDir::new().unwrap();
    assert!(load_history(temp.path()).is_empty());
}

#[test]
fn malformed_storage_decodes_to_empty() {
    init_logging();
    assert!(decode_history("{not json").is_empty());
    assert!(decode_history("").is_empty());
    assert!(decode_history("{\"id\": 1}").is_empty());
}

#[test]
fn malformed_file_loads_as_empty_and_can_be_overwritten() {
    init_logging();
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(HISTORY_FILENAME), "{not json").unwrap();

    assert!(load_history(temp.path()).is_empty());

    // The reconcile pass persists the empty collection back.
    save_history(temp.path(), &[]);
    let content = fs::read_to_string(temp.path().join(HISTORY_FILENAME)).unwrap();
    assert_eq!(content.trim(), "[]");
    assert!(load_history(temp.path()).is_empty());
}

#[test]
fn saved_history_loads_back_in_order() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let records = vec![
        record(2, "+1 (415) 555-2671", 2_000),
        record(1, "6281234567890", 1_000),
    ];

    save_history(temp.path(), &records);
    let loaded = load_history(temp.path());

    assert_eq!(loaded, records);
}

#[test]
fn persist_creates_missing_data_dir() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("nested").join("data");
    assert!(!data_dir.exists());

    let target = persist_history(&data_dir, &[record(1, "0815", 1_000)]).unwrap();

    assert_eq!(target, data_dir.join(HISTORY_FILENAME));
    assert_eq!(load_history(&data_dir).len(), 1);
}

#[test]
fn persist_replaces_previous_history_file() {
    init_logging();
    let temp = TempDir::new().unwrap();

    persist_history(temp.path(), &[record(1, "111", 1_000), record(2, "222", 1_000)]).unwrap();
    persist_history(temp.path(), &[record(3, "333", 2_000)]).unwrap();

    let loaded = load_history(temp.path());
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].original, "333");
}

#[test]
fn persist_failure_leaves_previous_history_intact() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let bogus_dir = temp.path().join("actually_a_file");
    fs::write(&bogus_dir, "x").unwrap();

    assert!(persist_history(&bogus_dir, &[record(1, "111", 1_000)]).is_err());
    // The logging wrapper swallows the same failure.
    save_history(&bogus_dir, &[record(1, "111", 1_000)]);

    assert!(fs::metadata(&bogus_dir).unwrap().is_file());
    assert!(!temp.path().join(HISTORY_FILENAME).exists());
}

#[test]
fn wire_layout_uses_timestamp_field() {
    let encoded = encode_history(&[record(1, "0815", 1_000)]).unwrap();
    assert!(encoded.contains("\"timestamp\": 1000"));
    assert!(!encoded.contains("timestamp_ms"));
    assert!(encoded.contains("\"link\": \"https://wa.me/0815\""));
}
