use crate::{AppState, CopyNotice, Effect, LoadState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::LinksSubmitted { now_ms } => {
            let created = state.submit_input(now_ms);
            if created == 0 {
                // Blank submission is a no-op, not an error.
                return (state, Vec::new());
            }
            vec![Effect::PersistHistory {
                records: state.records().to_vec(),
            }]
        }
        Msg::HistoryLoaded { records, now_ms } => {
            if state.load_state() == LoadState::Loaded {
                return (state, Vec::new());
            }
            state.restore_history(records, now_ms);
            // Always write back, so expired entries and corrupt storage
            // never resurface.
            vec![Effect::PersistHistory {
                records: state.records().to_vec(),
            }]
        }
        Msg::CopyRequested { id } => match state.link_for(id) {
            Some(link) => vec![Effect::CopyToClipboard {
                link: link.to_owned(),
            }],
            None => Vec::new(),
        },
        Msg::CopyFinished { ok } => {
            state.set_copy_notice(if ok {
                CopyNotice::Copied
            } else {
                CopyNotice::Failed
            });
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
