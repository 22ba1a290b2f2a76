//! # Command Layer
//!
//! One module per state transition of the note list. Commands operate on a
//! borrowed [`Notebook`](crate::model::Notebook) and return a [`CmdResult`];
//! they never touch storage, the clock, or the terminal. The API facade
//! supplies the current time and writes the list back when a result is
//! [`dirty`](CmdResult::dirty).
//!
//! Invalid input (blank text, unknown ids) is absorbed: the command returns a
//! clean, empty result and the notebook is left as it was.

use crate::config::NotezConfig;
use crate::index::DisplayNote;
use crate::model::Note;
use std::path::{Path, PathBuf};

pub mod add;
pub mod clear;
pub mod config;
pub mod delete;
pub mod edit;
pub mod helpers;
pub mod list;
pub mod submit;

#[derive(Debug, Clone)]
pub struct NotezPaths {
    pub data_dir: PathBuf,
}

impl NotezPaths {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn config_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<Note>,
    pub listed_notes: Vec<DisplayNote>,
    pub config: Option<NotezConfig>,
    pub messages: Vec<CmdMessage>,
    /// The note list changed and must be written back.
    pub dirty: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<Note>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_config(mut self, config: NotezConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn mark_dirty(mut self) -> Self {
        self.dirty = true;
        self
    }

    /// Folds another result into this one (used when a CLI call fans out).
    pub fn merge(&mut self, other: CmdResult) {
        self.affected_notes.extend(other.affected_notes);
        self.listed_notes.extend(other.listed_notes);
        self.messages.extend(other.messages);
        if other.config.is_some() {
            self.config = other.config;
        }
        self.dirty |= other.dirty;
    }
}

/// Shortens note text to its first line for one-line messages.
pub(crate) fn headline(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}
