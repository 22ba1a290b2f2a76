mod commands;
mod print;
mod prompt;
mod setup;
mod shell;

pub use commands::run;
