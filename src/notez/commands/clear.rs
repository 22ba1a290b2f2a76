use crate::commands::{CmdMessage, CmdResult};
use crate::model::{EditSession, Notebook};
use log::debug;

/// Empties the list, but only when the caller obtained confirmation.
pub fn run(book: &mut Notebook, confirmed: bool) -> CmdResult {
    if !confirmed {
        return CmdResult::default();
    }

    let removed = std::mem::take(&mut book.notes);
    book.session = EditSession::Idle;
    debug!("cleared {} notes", removed.len());

    let noun = if removed.len() == 1 { "note" } else { "notes" };
    CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Deleted {} {}",
            removed.len(),
            noun
        )))
        .with_affected_notes(removed)
        .mark_dirty()
}
