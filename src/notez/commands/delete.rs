use crate::commands::{headline, CmdMessage, CmdResult};
use crate::model::{EditSession, NoteId, Notebook};
use log::debug;

/// Removes the note with `id`. Unknown ids are a no-op.
///
/// Deleting the note under edit also ends the edit session.
pub fn run(book: &mut Notebook, id: NoteId) -> CmdResult {
    if book.session.is_editing(id) {
        book.session = EditSession::Idle;
    }

    let Some(pos) = book.position(id) else {
        return CmdResult::default();
    };

    let note = book.notes.remove(pos);
    debug!("deleted note id={} remaining={}", note.id, book.len());

    CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Note deleted: {}",
            headline(&note.text)
        )))
        .with_affected_notes(vec![note])
        .mark_dirty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Note;

    fn book() -> Notebook {
        Notebook::new(vec![
            Note::new(NoteId(3), "Call Bob", "d3"),
            Note::new(NoteId(2), "Buy milk", "d2"),
            Note::new(NoteId(1), "Water plants", "d1"),
        ])
    }

    #[test]
    fn removes_only_the_target_and_keeps_order() {
        let mut book = book();
        let result = run(&mut book, NoteId(2));

        assert!(result.dirty);
        assert_eq!(result.affected_notes[0].text, "Buy milk");
        let texts: Vec<_> = book.notes.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["Call Bob", "Water plants"]);
    }

    #[test]
    fn second_delete_is_a_no_op() {
        let mut book = book();
        run(&mut book, NoteId(2));
        let snapshot = book.clone();

        let result = run(&mut book, NoteId(2));
        assert!(!result.dirty);
        assert!(result.affected_notes.is_empty());
        assert_eq!(book, snapshot);
    }

    #[test]
    fn deleting_edited_note_ends_session() {
        let mut book = book();
        book.session = EditSession::Editing {
            id: NoteId(3),
            draft: "half typed".into(),
        };
        run(&mut book, NoteId(3));
        assert_eq!(book.session, EditSession::Idle);
    }

    #[test]
    fn deleting_other_note_keeps_session() {
        let mut book = book();
        book.session = EditSession::Editing {
            id: NoteId(3),
            draft: "half typed".into(),
        };
        run(&mut book, NoteId(1));
        assert!(book.session.is_editing(NoteId(3)));
        assert_eq!(book.session.draft(), Some("half typed"));
    }
}
