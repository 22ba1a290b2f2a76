use super::{DataStore, DEFAULT_STORAGE_KEY};
use crate::error::{NotezError, Result};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
pub struct InMemoryStore {
    entries: HashMap<String, String>,
    key: String,
    saves: usize,
    simulate_read_error: bool,
    simulate_write_error: bool,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            key: DEFAULT_STORAGE_KEY.to_string(),
            saves: 0,
            simulate_read_error: false,
            simulate_write_error: false,
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the entry, as if a previous session had saved `blob`.
    pub fn with_entry(mut self, blob: &str) -> Self {
        self.entries.insert(self.key.clone(), blob.to_string());
        self
    }

    /// The currently stored blob under `key`.
    pub fn entry(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// Make `load` fail while an entry is present, as an unreadable file would.
    pub fn set_simulate_read_error(&mut self, simulate: bool) {
        self.simulate_read_error = simulate;
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Option<String>> {
        match self.entries.get(&self.key) {
            Some(_) if self.simulate_read_error => {
                Err(NotezError::Store("Simulated read error".to_string()))
            }
            entry => Ok(entry.cloned()),
        }
    }

    fn save(&mut self, blob: &str) -> Result<()> {
        if self.simulate_write_error {
            return Err(NotezError::Store("Simulated write error".to_string()));
        }
        self.entries.insert(self.key.clone(), blob.to_string());
        self.saves += 1;
        Ok(())
    }

    fn quarantine(&mut self) -> Result<()> {
        if let Some(blob) = self.entries.remove(&self.key) {
            self.entries.insert(format!("{}.corrupt", self.key), blob);
        }
        Ok(())
    }

    fn location(&self) -> String {
        format!("memory://{}", self.key)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Note, NoteId};
    use crate::store::encode_notes;

    pub struct StoreFixture {
        notes: Vec<Note>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self { notes: Vec::new() }
        }

        /// Adds `count` notes, newest first, with ids counting down from `first_id`.
        pub fn with_notes(mut self, count: usize, first_id: i64) -> Self {
            for i in 0..count {
                self.notes.push(Note::new(
                    NoteId(first_id - i as i64),
                    format!("Note {}", i + 1),
                    "01.01.2024, 00:00:00",
                ));
            }
            self
        }

        pub fn with_note(mut self, id: i64, text: &str) -> Self {
            self.notes
                .push(Note::new(NoteId(id), text, "01.01.2024, 00:00:00"));
            self
        }

        pub fn build(self) -> InMemoryStore {
            let blob = encode_notes(&self.notes).unwrap_or_else(|_| "[]".to_string());
            InMemoryStore::new().with_entry(&blob)
        }
    }
}
