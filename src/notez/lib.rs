//! # Notez Architecture
//!
//! Notez keeps a single list of short text notes, newest first, and writes the
//! whole list to durable key-value storage after every change. The library is
//! UI-agnostic; the `notez` binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, prints, interactive shell     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - The note store: owns notes, edit session, input buffer   │
//! │  - Resolves selectors (1, 2-4, @id) to note ids             │
//! │  - Writes the list back after every change                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One pure transition per module                           │
//! │  - No I/O, no clock: time is passed in                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: load/save one blob under a fixed key    │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The edit session
//!
//! At most one note is edited at a time. The session lives next to the list
//! in [`model::Notebook`], never inside a note, and it is void as soon as its
//! note is gone. See `commands/edit.rs` for the transitions.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tests of every transition against a bare `Notebook`.
//! 2. **API**: persistence and routing against `InMemoryStore` and a
//!    `ManualClock`.
//! 3. **CLI**: end-to-end runs of the binary in `tests/`, isolated with
//!    `NOTEZ_HOME`.
//!
//! ## Module Overview
//!
//! - [`api`]: The note store facade, entry point for all operations
//! - [`commands`]: One module per transition
//! - [`store`]: Persistence adapter trait, codec and implementations
//! - [`model`]: `Note`, `NoteId`, `EditSession`, `Notebook`
//! - [`index`]: Display indexes and selector parsing
//! - [`clock`]: Time source and date rendering
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
