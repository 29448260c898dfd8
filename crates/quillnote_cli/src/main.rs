//! Minimal note CLI over the core session.
//!
//! # Responsibility
//! - Open a file-backed session and run one command against it.
//! - Stay a thin consumer: all invariants live in `quillnote_core`.
//!
//! Usage:
//!   quillnote <data-dir> list [title-query]
//!   quillnote <data-dir> add <title> [markdown]

use quillnote_core::{init_logging, JsonFileStore, NoteDraft, NoteFilter, NoteSession};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((data_dir, command)) = args.split_first() else {
        eprintln!("usage: quillnote <data-dir> list [title-query] | add <title> [markdown]");
        return ExitCode::FAILURE;
    };

    // Logging failure is not fatal for a one-shot command.
    let log_dir = std::path::Path::new(data_dir).join("logs");
    if let Err(err) = init_logging("info", &log_dir) {
        eprintln!("warning: {err}");
    }

    match run(data_dir, command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(data_dir: &str, command: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let store = JsonFileStore::open(data_dir)?;
    let mut session = NoteSession::open(store)?;

    match command {
        [cmd, rest @ ..] if cmd == "list" => {
            let query = rest.first().cloned().unwrap_or_default();
            for note in session.filter_notes(&NoteFilter::by_title(query)) {
                let labels: Vec<&str> = note.tags.iter().map(|tag| tag.label.as_str()).collect();
                println!("{}  {}  [{}]", note.id, note.title, labels.join(", "));
            }
            Ok(())
        }
        [cmd, title, rest @ ..] if cmd == "add" => {
            let markdown = rest.first().cloned().unwrap_or_default();
            let id = session.create_note(NoteDraft::new(title.as_str(), markdown, Vec::new()))?;
            println!("{id}");
            Ok(())
        }
        _ => Err("expected `list [title-query]` or `add <title> [markdown]`".into()),
    }
}
