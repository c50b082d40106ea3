use std::path::PathBuf;

use log::{info, warn};
use walink_core::{Effect, Msg};
use walink_store::save_history;

/// Executes the effects the core requests and turns their outcomes back
/// into messages. Runs synchronously on the event loop; nothing here may
/// touch core state directly.
pub struct EffectRunner {
    data_dir: PathBuf,
}

impl EffectRunner {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn run(&self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut feedback = Vec::new();
        for effect in effects {
            match effect {
                Effect::PersistHistory { records } => {
                    info!("Persisting {} records", records.len());
                    save_history(&self.data_dir, &records);
                }
                Effect::CopyToClipboard { link } => {
                    feedback.push(Msg::CopyFinished {
                        ok: copy_to_clipboard(&link),
                    });
                }
            }
        }
        feedback
    }
}

fn copy_to_clipboard(link: &str) -> bool {
    let attempt = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(link));
    match attempt {
        Ok(()) => {
            info!("Copied link to clipboard: {}", link);
            true
        }
        Err(err) => {
            warn!("Clipboard write failed: {}", err);
            false
        }
    }
}
