use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use log::info;
use walink_core::{update, AppState, AppViewModel, CopyNotice, Msg};
use walink_store::load_history;

use super::effects::EffectRunner;

/// Runs the interactive loop: restore and reconcile history, then accept
/// number batches and copy commands until the user quits.
pub fn run_app(data_dir: PathBuf) -> anyhow::Result<()> {
    let runner = EffectRunner::new(data_dir.clone());
    let mut state = AppState::new();

    let records = load_history(&data_dir);
    state = dispatch(
        state,
        Msg::HistoryLoaded {
            records,
            now_ms: now_ms(),
        },
        &runner,
    );
    render_if_dirty(&mut state);

    println!("Enter phone numbers (one per line); a blank line converts them.");
    println!("Commands: :copy <id>, :quit");

    let stdin = io::stdin();
    let mut draft = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim_end_matches(['\r', '\n']);

        match parse_command(trimmed) {
            Command::Quit => break,
            Command::Copy(id) => {
                state = dispatch(state, Msg::CopyRequested { id }, &runner);
            }
            Command::Line(text) => {
                if text.trim().is_empty() && !draft.is_empty() {
                    state = dispatch(state, Msg::InputChanged(draft.clone()), &runner);
                    state = dispatch(state, Msg::LinksSubmitted { now_ms: now_ms() }, &runner);
                    draft.clear();
                } else if !text.trim().is_empty() {
                    draft.push_str(&text);
                    draft.push('\n');
                }
            }
        }
        render_if_dirty(&mut state);
    }

    info!("Session finished with {} records", state.records().len());
    Ok(())
}

enum Command {
    Line(String),
    Copy(walink_core::RecordId),
    Quit,
}

fn parse_command(line: &str) -> Command {
    if line == ":quit" || line == ":q" {
        return Command::Quit;
    }
    if let Some(rest) = line.strip_prefix(":copy ") {
        if let Ok(id) = rest.trim().parse() {
            return Command::Copy(id);
        }
    }
    Command::Line(line.to_owned())
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (mut state, effects) = update(state, msg);
    for feedback in runner.run(effects) {
        let (next, more) = update(state, feedback);
        state = next;
        // Feedback messages carry outcomes only; they request nothing new.
        debug_assert!(more.is_empty());
    }
    state
}

fn render_if_dirty(state: &mut AppState) {
    if !state.consume_dirty() {
        return;
    }
    render(&state.view());
}

fn render(view: &AppViewModel) {
    if let Some(count) = view.last_submit_count {
        println!("Converted {} number(s).", count);
    }
    match view.copy_notice {
        Some(CopyNotice::Copied) => println!("Link copied to clipboard."),
        Some(CopyNotice::Failed) => println!("Could not access the clipboard."),
        None => {}
    }
    if view.records.is_empty() {
        println!("No links in the last 24 hours.");
        return;
    }
    for row in &view.records {
        let when = DateTime::<Utc>::from_timestamp_millis(row.timestamp_ms)
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| row.timestamp_ms.to_string());
        println!("[{}] {} -> {} ({})", row.id, row.original, row.link, when);
    }
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
