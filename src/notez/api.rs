//! # API Facade
//!
//! [`NotezApi`] is the note store: it owns the in-memory [`Notebook`], the
//! persistence adapter and the clock, and it is the only legal way to change
//! any of them. Every UI (the CLI, the interactive shell, tests) goes through
//! it.
//!
//! ## Role and Responsibilities
//!
//! - **Loads** the note list once, at construction
//! - **Dispatches** each user intent to the matching command
//! - **Persists** the whole list after every command that changed it
//!
//! Reads and writes are synchronous. A mutating call returns only after the
//! write went through (or failed); the store never retries.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O to the user**: No stdout, stderr or prompts. Confirmation for
//!   [`NotezApi::clear_all`] is a plain `bool` obtained by the caller.
//!
//! ## Failure model
//!
//! Blank text and unknown ids are silently ignored (`Ok` with a clean
//! result). The only `Err` a mutating call can return is a failed write; the
//! in-memory change is kept and goes out with the next successful write.

use crate::clock::{Clock, SystemClock};
use crate::commands::{self, helpers::resolve_selectors};
use crate::config::NotezConfig;
use crate::error::{NotezError, Result};
use crate::index::parse_selectors;
use crate::model::{EditSession, Note, NoteId, Notebook};
use crate::store::{decode_notes, encode_notes, DataStore};
use log::{debug, warn};

/// The note store, generic over its persistence adapter and clock.
pub struct NotezApi<S: DataStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
    book: Notebook,
    config: NotezConfig,
    paths: commands::NotezPaths,
    startup_messages: Vec<CmdMessage>,
}

impl<S: DataStore> NotezApi<S, SystemClock> {
    /// Loads the stored list (or starts empty) using the system clock.
    pub fn initialize(store: S, config: NotezConfig, paths: commands::NotezPaths) -> Self {
        Self::with_clock(store, SystemClock, config, paths)
    }
}

impl<S: DataStore, C: Clock> NotezApi<S, C> {
    pub fn with_clock(
        mut store: S,
        clock: C,
        config: NotezConfig,
        paths: commands::NotezPaths,
    ) -> Self {
        let mut startup_messages = Vec::new();
        let notes = load_notes(&mut store, &mut startup_messages);
        debug!("loaded {} notes from {}", notes.len(), store.location());

        Self {
            store,
            clock,
            book: Notebook::new(notes),
            config,
            paths,
            startup_messages,
        }
    }

    // --- State for rendering ---

    pub fn notes(&self) -> &[Note] {
        &self.book.notes
    }

    pub fn session(&self) -> &EditSession {
        &self.book.session
    }

    pub fn input(&self) -> &str {
        &self.book.input
    }

    pub fn count(&self) -> usize {
        self.book.len()
    }

    pub fn notebook(&self) -> &Notebook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn paths(&self) -> &commands::NotezPaths {
        &self.paths
    }

    pub fn config(&self) -> &NotezConfig {
        &self.config
    }

    /// Problems found while loading, e.g. an unreadable stored list.
    pub fn startup_messages(&self) -> &[CmdMessage] {
        &self.startup_messages
    }

    pub fn list(&self) -> CmdResult {
        commands::list::run(&self.book)
    }

    // --- Buffers (no persistence) ---

    pub fn set_input(&mut self, text: &str) {
        self.book.input = text.to_string();
    }

    pub fn set_draft(&mut self, text: &str) {
        commands::edit::set_draft(&mut self.book, text);
    }

    // --- Transitions ---

    pub fn add(&mut self, text: &str) -> Result<CmdResult> {
        let now = self.clock.now();
        let result = commands::add::run(&mut self.book, text, &now, &self.config.date_format);
        self.commit(result)
    }

    pub fn add_input(&mut self) -> Result<CmdResult> {
        let now = self.clock.now();
        let result = commands::add::from_input(&mut self.book, &now, &self.config.date_format);
        self.commit(result)
    }

    pub fn delete(&mut self, id: NoteId) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.book, id);
        self.commit(result)
    }

    /// Deletes every selected note; all selectors are resolved before the first delete.
    pub fn delete_selected<I: AsRef<str>>(&mut self, inputs: &[I]) -> Result<CmdResult> {
        let ids = self.resolve(inputs)?;
        let mut result = CmdResult::default();
        for id in ids {
            result.merge(commands::delete::run(&mut self.book, id));
        }
        self.commit(result)
    }

    pub fn start_edit(&mut self, id: NoteId) -> Result<CmdResult> {
        Ok(commands::edit::start(&mut self.book, id))
    }

    pub fn save_edit(&mut self) -> Result<CmdResult> {
        let now = self.clock.now();
        let result = commands::edit::save(&mut self.book, &now, &self.config.date_format);
        self.commit(result)
    }

    pub fn cancel_edit(&mut self) -> Result<CmdResult> {
        Ok(commands::edit::cancel(&mut self.book))
    }

    /// Start, draft and save in one go, for callers without an interactive session.
    ///
    /// With blank `text` the session stays open, exactly as a blank save would.
    pub fn edit_note(&mut self, selector: &str, text: &str) -> Result<CmdResult> {
        let id = self.resolve_one(selector)?;
        self.start_edit(id)?;
        if !self.book.session.is_editing(id) {
            return Ok(CmdResult::default());
        }
        self.set_draft(text);
        self.save_edit()
    }

    pub fn clear_all(&mut self, confirmed: bool) -> Result<CmdResult> {
        let result = commands::clear::run(&mut self.book, confirmed);
        self.commit(result)
    }

    /// The submit intent: save while editing, add otherwise.
    pub fn submit(&mut self) -> Result<CmdResult> {
        let now = self.clock.now();
        let result = commands::submit::run(&mut self.book, &now, &self.config.date_format);
        self.commit(result)
    }

    pub fn configure(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    // --- Selectors ---

    /// Resolves CLI selector strings (`1`, `2-4`, `@<id>`) to note ids.
    pub fn resolve<I: AsRef<str>>(&self, inputs: &[I]) -> Result<Vec<NoteId>> {
        let selectors = parse_selectors(inputs).map_err(NotezError::Api)?;
        resolve_selectors(&self.book, &selectors)
    }

    pub fn resolve_one(&self, input: &str) -> Result<NoteId> {
        let ids = self.resolve(&[input])?;
        match ids.as_slice() {
            [id] => Ok(*id),
            _ => Err(NotezError::Api(format!(
                "Expected a single note, got '{}'",
                input
            ))),
        }
    }

    fn commit(&mut self, result: CmdResult) -> Result<CmdResult> {
        if result.dirty {
            let blob = encode_notes(&self.book.notes)?;
            self.store.save(&blob)?;
            debug!("persisted {} notes to {}", self.book.len(), self.store.location());
        }
        Ok(result)
    }
}

/// Reads the stored list. A missing entry yields an empty list. An entry that
/// cannot be read or decoded also yields an empty list, but is quarantined
/// first so the next write cannot destroy it.
fn load_notes<S: DataStore>(store: &mut S, messages: &mut Vec<CmdMessage>) -> Vec<Note> {
    let problem = match store.load() {
        Ok(None) => return Vec::new(),
        Ok(Some(blob)) => match decode_notes(&blob) {
            Ok(notes) => return notes,
            Err(e) => e,
        },
        Err(e) => e,
    };

    warn!("stored notes at {} are unusable: {}", store.location(), problem);
    let kept = match store.quarantine() {
        Ok(()) => "a copy was kept".to_string(),
        Err(err) => {
            warn!("could not keep a copy of unusable notes: {}", err);
            "no copy could be kept".to_string()
        }
    };
    messages.push(CmdMessage::warning(format!(
        "Saved notes were unreadable and have been reset ({})",
        kept
    )));
    Vec::new()
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, NotezPaths};
