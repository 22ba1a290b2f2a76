use crate::commands::{add, edit, CmdResult};
use crate::model::Notebook;
use chrono::{DateTime, Local};

/// The single "submit" intent: saves the draft while editing, otherwise adds
/// the pending input.
pub fn run(book: &mut Notebook, now: &DateTime<Local>, date_format: &str) -> CmdResult {
    if book.session.is_active() {
        edit::save(book, now, date_format)
    } else {
        add::from_input(book, now, date_format)
    }
}
