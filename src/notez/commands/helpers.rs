use crate::error::{NotezError, Result};
use crate::index::{DisplayIndex, NoteSelector};
use crate::model::{NoteId, Notebook};
use std::collections::HashSet;

/// Maps selectors onto note ids, in order, without repeats.
///
/// Display indexes and ranges must lie inside the current list; a range is
/// bounds-checked before it is expanded. Raw ids pass through untouched:
/// whether they exist is for the command to decide.
pub fn resolve_selectors(book: &Notebook, selectors: &[NoteSelector]) -> Result<Vec<NoteId>> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    let mut push = |id: NoteId| {
        if seen.insert(id) {
            ids.push(id);
        }
    };

    for selector in selectors {
        match *selector {
            NoteSelector::Id(id) => push(id),
            NoteSelector::Index(idx) => push(note_at(book, idx)?),
            NoteSelector::Range(start, end) => {
                // Checking the end first keeps huge ranges from being walked.
                note_at(book, end)?;
                for pos in start.0..=end.0 {
                    push(note_at(book, DisplayIndex(pos))?);
                }
            }
        }
    }
    Ok(ids)
}

fn note_at(book: &Notebook, idx: DisplayIndex) -> Result<NoteId> {
    idx.0
        .checked_sub(1)
        .and_then(|pos| book.notes.get(pos))
        .map(|note| note.id)
        .ok_or_else(|| NotezError::Api(format!("No note at index {}", idx)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Note;

    fn book() -> Notebook {
        Notebook::new(vec![
            Note::new(NoteId(30), "newest", "d"),
            Note::new(NoteId(20), "middle", "d"),
            Note::new(NoteId(10), "oldest", "d"),
        ])
    }

    #[test]
    fn resolves_indexes_and_ids() {
        let ids = resolve_selectors(
            &book(),
            &[
                NoteSelector::Index(DisplayIndex(3)),
                NoteSelector::Index(DisplayIndex(1)),
                NoteSelector::Id(NoteId(77)),
            ],
        )
        .unwrap();
        assert_eq!(ids, vec![NoteId(10), NoteId(30), NoteId(77)]);
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let err = resolve_selectors(&book(), &[NoteSelector::Index(DisplayIndex(4))]).unwrap_err();
        assert_eq!(err.to_string(), "No note at index 4");
    }

    #[test]
    fn ranges_expand_and_overlaps_dedup() {
        let ids = resolve_selectors(
            &book(),
            &[
                NoteSelector::Range(DisplayIndex(1), DisplayIndex(2)),
                NoteSelector::Range(DisplayIndex(2), DisplayIndex(3)),
                NoteSelector::Id(NoteId(20)),
            ],
        )
        .unwrap();
        assert_eq!(ids, vec![NoteId(30), NoteId(20), NoteId(10)]);
    }

    #[test]
    fn huge_range_is_rejected_without_expanding() {
        let err = resolve_selectors(
            &book(),
            &[NoteSelector::Range(DisplayIndex(1), DisplayIndex(99_999_999_999))],
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "No note at index 99999999999");
    }
}
