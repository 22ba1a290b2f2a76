use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Identity of a note: milliseconds since the Unix epoch at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub i64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub text: String,
    // Human readable, rewritten on every successful edit
    pub date: String,
}

impl Note {
    pub fn new(id: NoteId, text: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            date: date.into(),
        }
    }
}

/// Which note, if any, is being edited, plus the draft typed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing {
        id: NoteId,
        draft: String,
    },
}

impl EditSession {
    pub fn is_active(&self) -> bool {
        matches!(self, EditSession::Editing { .. })
    }

    pub fn editing_id(&self) -> Option<NoteId> {
        match self {
            EditSession::Editing { id, .. } => Some(*id),
            EditSession::Idle => None,
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            EditSession::Editing { draft, .. } => Some(draft),
            EditSession::Idle => None,
        }
    }

    pub fn is_editing(&self, id: NoteId) -> bool {
        self.editing_id() == Some(id)
    }
}

/// The complete in-memory state behind the note list: notes (newest first),
/// the edit session, and the pending input buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notebook {
    pub notes: Vec<Note>,
    pub session: EditSession,
    pub input: String,
}

impl Notebook {
    pub fn new(notes: Vec<Note>) -> Self {
        Self {
            notes,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }

    /// Next free id for a note created at `now_millis`.
    ///
    /// Never smaller than the clock reading and always above every id
    /// already in the list, so ids stay unique even within one millisecond.
    /// If the largest id is `i64::MAX` there is nothing above it; the first
    /// unused id from `now_millis` upwards (wrapping) is taken instead.
    pub fn next_id(&self, now_millis: i64) -> NoteId {
        let Some(max) = self.notes.iter().map(|n| n.id.0).max() else {
            return NoteId(now_millis);
        };
        if let Some(above) = max.checked_add(1) {
            return NoteId(now_millis.max(above));
        }

        let taken: HashSet<i64> = self.notes.iter().map(|n| n.id.0).collect();
        let mut id = now_millis;
        while taken.contains(&id) {
            id = id.wrapping_add(1);
        }
        NoteId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_follows_clock_when_ahead() {
        let book = Notebook::new(vec![Note::new(NoteId(100), "a", "d")]);
        assert_eq!(book.next_id(500), NoteId(500));
    }

    #[test]
    fn next_id_bumps_past_existing_ids() {
        let book = Notebook::new(vec![
            Note::new(NoteId(500), "b", "d"),
            Note::new(NoteId(400), "a", "d"),
        ]);
        assert_eq!(book.next_id(500), NoteId(501));
        assert_eq!(book.next_id(10), NoteId(501));
    }

    #[test]
    fn next_id_never_reuses_max_id() {
        let book = Notebook::new(vec![Note::new(NoteId(i64::MAX), "end", "d")]);
        assert_eq!(book.next_id(500), NoteId(500));

        let book = Notebook::new(vec![
            Note::new(NoteId(i64::MAX), "end", "d"),
            Note::new(NoteId(500), "b", "d"),
            Note::new(NoteId(501), "a", "d"),
        ]);
        assert_eq!(book.next_id(500), NoteId(502));

        let book = Notebook::new(vec![Note::new(NoteId(i64::MAX), "end", "d")]);
        assert_eq!(book.next_id(i64::MAX), NoteId(i64::MIN));
    }

    #[test]
    fn session_accessors() {
        let session = EditSession::Editing {
            id: NoteId(7),
            draft: "draft".into(),
        };
        assert!(session.is_active());
        assert!(session.is_editing(NoteId(7)));
        assert!(!session.is_editing(NoteId(8)));
        assert_eq!(session.draft(), Some("draft"));
        assert_eq!(EditSession::Idle.editing_id(), None);
    }

    #[test]
    fn note_serializes_with_flat_numeric_id() {
        let note = Note::new(NoteId(1700000000000), "Buy milk", "14.11.2023, 22:13:20");
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(
            json,
            r#"{"id":1700000000000,"text":"Buy milk","date":"14.11.2023, 22:13:20"}"#
        );
    }
}
