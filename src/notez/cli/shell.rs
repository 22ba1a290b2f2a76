//! Line-oriented interactive session.
//!
//! A plain line is typed into the input buffer (or into the draft while a note
//! is being edited) and submitted when Enter is pressed. A line ending in `\`
//! is continued on the next line, which is how a note gets more than one line.
//! Lines starting with `:` are commands; `::` types a literal leading `:`.

use super::print::{write_messages, write_notes};
use super::prompt::prompt_yesno;
use colored::Colorize;
use notez::api::{CmdMessage, CmdResult, NotezApi};
use notez::clock::Clock;
use notez::error::Result;
use notez::store::DataStore;
use std::io::{BufRead, Write};

const HELP: &str = "\
Type a note and press Enter to add it. End a line with \\ to keep typing on the next line.
  :e N       edit note N (the next line you submit replaces its text)
  :c         cancel the current edit
  :d N...    delete notes (e.g. :d 2, :d 1-3)
  :clear     delete all notes (asks first)
  :l         list notes
  :h         show this help
  :q         quit
Start a line with :: to type a note that begins with a colon.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ShellCommand {
    Edit(String),
    Cancel,
    Delete(Vec<String>),
    Clear,
    List,
    Help,
    Quit,
    Unknown(String),
}

/// Parses a `:`-prefixed line.
pub(super) fn parse_command(line: &str) -> ShellCommand {
    let mut parts = line.trim().trim_start_matches(':').split_whitespace();
    let name = parts.next().unwrap_or_default();
    let args: Vec<String> = parts.map(str::to_string).collect();

    match name {
        "e" | "edit" if args.len() == 1 => ShellCommand::Edit(args[0].clone()),
        "c" | "cancel" => ShellCommand::Cancel,
        "d" | "delete" | "rm" if !args.is_empty() => ShellCommand::Delete(args),
        "clear" => ShellCommand::Clear,
        "l" | "ls" | "list" => ShellCommand::List,
        "h" | "help" | "?" => ShellCommand::Help,
        "q" | "quit" | "exit" => ShellCommand::Quit,
        _ => ShellCommand::Unknown(line.trim().to_string()),
    }
}

pub(super) fn run_shell<S, C, R, W>(api: &mut NotezApi<S, C>, input: &mut R, out: &mut W) -> Result<()>
where
    S: DataStore,
    C: Clock,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", "notez shell, :h for help, :q to quit".dimmed())?;
    write_notes(out, &api.list().listed_notes, api.session())?;

    let mut pending = String::new();
    loop {
        write_prompt(api, out, !pending.is_empty())?;

        let mut buf = String::new();
        if input.read_line(&mut buf)? == 0 {
            writeln!(out)?;
            // Input ended in the middle of a continued note; keep what was typed.
            if !pending.is_empty() {
                let text = std::mem::take(&mut pending);
                submit(api, text.trim_end_matches('\n'), out)?;
            }
            break;
        }
        let mut line = buf.trim_end_matches(['\n', '\r']);

        if pending.is_empty() {
            let head = line.trim_start();
            if head.starts_with("::") {
                line = &head[1..];
            } else if head.starts_with(':') {
                match parse_command(head) {
                    ShellCommand::Quit => break,
                    command => run_command(api, command, input, out)?,
                }
                continue;
            }
        }

        if let Some(head) = line.strip_suffix('\\') {
            pending.push_str(head);
            pending.push('\n');
            continue;
        }

        pending.push_str(line);
        let text = std::mem::take(&mut pending);
        submit(api, &text, out)?;
    }
    Ok(())
}

fn write_prompt<S: DataStore, C: Clock, W: Write>(
    api: &NotezApi<S, C>,
    out: &mut W,
    continuing: bool,
) -> Result<()> {
    let prompt = if continuing {
        "... ".to_string()
    } else {
        match api.session().editing_id() {
            Some(id) => match api.notes().iter().position(|n| n.id == id) {
                Some(pos) => format!("edit {}> ", pos + 1),
                None => "edit> ".to_string(),
            },
            None => "> ".to_string(),
        }
    };
    write!(out, "{}", prompt.cyan())?;
    out.flush()?;
    Ok(())
}

fn submit<S: DataStore, C: Clock, W: Write>(
    api: &mut NotezApi<S, C>,
    text: &str,
    out: &mut W,
) -> Result<()> {
    let editing = api.session().is_active();
    if editing {
        api.set_draft(text);
    } else {
        api.set_input(text);
    }

    let Some(result) = report(api.submit(), out)? else {
        return Ok(());
    };
    if result.dirty {
        write_notes(out, &api.list().listed_notes, api.session())?;
    } else if editing {
        write_messages(
            out,
            &[CmdMessage::info(
                "The new text is empty. Type it, or :c to cancel.",
            )],
        )?;
    }
    Ok(())
}

fn run_command<S, C, R, W>(
    api: &mut NotezApi<S, C>,
    command: ShellCommand,
    input: &mut R,
    out: &mut W,
) -> Result<()>
where
    S: DataStore,
    C: Clock,
    R: BufRead,
    W: Write,
{
    match command {
        ShellCommand::Edit(selector) => {
            let id = match api.resolve_one(&selector) {
                Ok(id) => id,
                Err(e) => return write_error(out, &e.to_string()),
            };
            report(api.start_edit(id), out)?;
            match api.session().draft() {
                Some(draft) if api.session().is_editing(id) => {
                    writeln!(out, "{}", format!("Editing {}:", selector).bold())?;
                    writeln!(out, "{}", draft)?;
                    write_messages(
                        out,
                        &[CmdMessage::info("Type the new text, or :c to cancel.")],
                    )?;
                }
                _ => write_error(out, &format!("No note {}", selector))?,
            }
        }
        ShellCommand::Cancel => {
            let was_editing = api.session().is_active();
            report(api.cancel_edit(), out)?;
            if was_editing {
                write_messages(out, &[CmdMessage::info("Edit cancelled.")])?;
            }
        }
        ShellCommand::Delete(selectors) => {
            if let Some(result) = report(api.delete_selected(&selectors), out)? {
                if result.dirty {
                    write_notes(out, &api.list().listed_notes, api.session())?;
                }
            }
        }
        ShellCommand::Clear => {
            if api.count() == 0 {
                write_messages(out, &[CmdMessage::info("No notes to clear.")])?;
                return Ok(());
            }
            let confirmed = prompt_yesno(input, out, "Delete all notes?")?;
            if let Some(result) = report(api.clear_all(confirmed), out)? {
                if !result.dirty {
                    write_messages(out, &[CmdMessage::info("Cancelled.")])?;
                }
            }
        }
        ShellCommand::List => write_notes(out, &api.list().listed_notes, api.session())?,
        ShellCommand::Help => writeln!(out, "{}", HELP)?,
        ShellCommand::Quit => {}
        ShellCommand::Unknown(line) => {
            write_error(out, &format!("Unknown command {} (try :h)", line))?
        }
    }
    Ok(())
}

/// Prints the messages of a result, or the error. Errors do not end the session.
fn report<W: Write>(result: Result<CmdResult>, out: &mut W) -> Result<Option<CmdResult>> {
    match result {
        Ok(result) => {
            write_messages(out, &result.messages)?;
            Ok(Some(result))
        }
        Err(e) => {
            write_error(out, &e.to_string())?;
            Ok(None)
        }
    }
}

fn write_error<W: Write>(out: &mut W, message: &str) -> Result<()> {
    write_messages(out, &[CmdMessage::error(message)])?;
    Ok(())
}
