//! The edit session state machine.
//!
//! ```text
//! Idle --start(id)--> Editing(id, text of id)
//! Editing --save (non-blank draft)--> Idle     note text/date updated
//! Editing --save (blank draft)-->     Editing  nothing changes
//! Editing --cancel--> Idle
//! Editing --delete(same id)--> Idle            (see delete.rs)
//! ```

use crate::clock::format_timestamp;
use crate::commands::{headline, CmdMessage, CmdResult};
use crate::model::{EditSession, NoteId, Notebook};
use chrono::{DateTime, Local};
use log::debug;

/// Opens an edit session on `id`, seeding the draft with the note's text.
/// Unknown ids are a no-op.
pub fn start(book: &mut Notebook, id: NoteId) -> CmdResult {
    let Some(note) = book.get(id).cloned() else {
        return CmdResult::default();
    };

    book.session = EditSession::Editing {
        id,
        draft: note.text.clone(),
    };
    debug!("editing note id={}", id);
    CmdResult::default().with_affected_notes(vec![note])
}

/// Replaces the draft text of the open session, if any.
pub fn set_draft(book: &mut Notebook, text: &str) {
    if let EditSession::Editing { draft, .. } = &mut book.session {
        *draft = text.to_string();
    }
}

/// Writes the draft into the note under edit and closes the session.
///
/// A blank draft keeps the session open and changes nothing.
pub fn save(book: &mut Notebook, now: &DateTime<Local>, date_format: &str) -> CmdResult {
    let (id, text) = match &book.session {
        EditSession::Editing { id, draft } if !draft.trim().is_empty() => {
            (*id, draft.trim().to_string())
        }
        _ => return CmdResult::default(),
    };

    let Some(pos) = book.position(id) else {
        // The note vanished underneath the session; the session is void.
        book.session = EditSession::Idle;
        return CmdResult::default();
    };

    let note = &mut book.notes[pos];
    note.text = text;
    note.date = format_timestamp(now, date_format);
    let note = note.clone();
    book.session = EditSession::Idle;
    debug!("saved note id={}", id);

    CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Note updated: {}",
            headline(&note.text)
        )))
        .with_affected_notes(vec![note])
        .mark_dirty()
}

/// Leaves the edit session without touching the note list.
pub fn cancel(book: &mut Notebook) -> CmdResult {
    if let Some(id) = book.session.editing_id() {
        debug!("cancelled edit of note id={}", id);
    }
    book.session = EditSession::Idle;
    CmdResult::default()
}
