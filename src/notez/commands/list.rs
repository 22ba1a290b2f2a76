use crate::commands::CmdResult;
use crate::index::index_notes;
use crate::model::Notebook;

pub fn run(book: &Notebook) -> CmdResult {
    CmdResult::default().with_listed_notes(index_notes(&book.notes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::model::{Note, NoteId};

    #[test]
    fn lists_newest_first_with_indexes() {
        let book = Notebook::new(vec![
            Note::new(NoteId(2), "Call Bob", "d"),
            Note::new(NoteId(1), "Buy milk", "d"),
        ]);
        let result = run(&book);

        assert!(!result.dirty);
        assert_eq!(result.listed_notes.len(), 2);
        assert_eq!(result.listed_notes[0].index, DisplayIndex(1));
        assert_eq!(result.listed_notes[0].note.text, "Call Bob");
        assert_eq!(result.listed_notes[1].index, DisplayIndex(2));
    }

    #[test]
    fn empty_book_lists_nothing() {
        assert!(run(&Notebook::default()).listed_notes.is_empty());
    }
}
