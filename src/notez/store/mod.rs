//! # Storage Layer
//!
//! The note list is persisted as a single key-value entry: one serialized
//! blob under a fixed key. [`DataStore`] is the boundary the rest of the
//! crate talks to; it knows nothing about notes, only about the blob.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - The entry lives in `<root>/<key>.json`
//!   - Writes go to a temporary file first and are renamed into place
//!   - An unusable entry is renamed to `<root>/<key>.corrupt.json`
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate failing writes
//!
//! ## Storage Format
//!
//! A JSON array of note records, no schema version:
//! ```text
//! [{"id":1700000000000,"text":"Buy milk","date":"14.11.2023, 22:13:20"}]
//! ```

use crate::error::Result;
use crate::model::Note;

pub mod fs;
pub mod memory;

pub const DEFAULT_STORAGE_KEY: &str = "notes";

/// Abstract interface for the persisted note entry.
pub trait DataStore {
    /// Read the stored blob, `None` if nothing has been stored yet.
    fn load(&self) -> Result<Option<String>>;

    /// Replace the stored blob.
    fn save(&mut self, blob: &str) -> Result<()>;

    /// Move the stored entry out of the way, untouched, so the next `save`
    /// cannot overwrite it. Called when the entry could not be read or decoded.
    fn quarantine(&mut self) -> Result<()> {
        Ok(())
    }

    /// Where the entry lives, for display.
    fn location(&self) -> String;
}

pub fn encode_notes(notes: &[Note]) -> Result<String> {
    Ok(serde_json::to_string(notes)?)
}

pub fn decode_notes(blob: &str) -> Result<Vec<Note>> {
    Ok(serde_json::from_str(blob)?)
}
