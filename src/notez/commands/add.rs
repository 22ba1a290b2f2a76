use crate::clock::format_timestamp;
use crate::commands::{headline, CmdMessage, CmdResult};
use crate::model::{Note, Notebook};
use chrono::{DateTime, Local};
use log::debug;

/// Prepends a new note holding the trimmed `text`. Blank text is a no-op.
pub fn run(book: &mut Notebook, text: &str, now: &DateTime<Local>, date_format: &str) -> CmdResult {
    let text = text.trim();
    if text.is_empty() {
        return CmdResult::default();
    }

    let note = Note::new(
        book.next_id(now.timestamp_millis()),
        text,
        format_timestamp(now, date_format),
    );
    book.notes.insert(0, note.clone());
    book.input.clear();
    debug!("added note id={} total={}", note.id, book.len());

    CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Note added: {}",
            headline(&note.text)
        )))
        .with_affected_notes(vec![note])
        .mark_dirty()
}

/// Adds whatever is in the pending input buffer.
pub fn from_input(book: &mut Notebook, now: &DateTime<Local>, date_format: &str) -> CmdResult {
    let text = book.input.clone();
    run(book, &text, now, date_format)
}
