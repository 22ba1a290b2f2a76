use colored::Colorize;
use notez::api::{CmdMessage, MessageLevel};
use notez::config::NotezConfig;
use notez::index::DisplayNote;
use notez::model::EditSession;
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const INDEX_WIDTH: usize = 6;
const EDIT_MARKER: &str = "✎";

pub(super) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// Count readout followed by one block per note.
///
/// The first line of a note shares its row with the date; further lines are
/// indented under it.
pub(super) fn write_notes<W: Write>(
    out: &mut W,
    notes: &[DisplayNote],
    session: &EditSession,
) -> io::Result<()> {
    if notes.is_empty() {
        writeln!(out, "{}", "No notes yet.".dimmed())?;
        return Ok(());
    }

    let noun = if notes.len() == 1 { "note" } else { "notes" };
    writeln!(out, "{}", format!("{} {}", notes.len(), noun).bold())?;

    for dn in notes {
        let marker = if session.is_editing(dn.note.id) {
            EDIT_MARKER
        } else {
            " "
        };
        let idx_str = format!("{}{:>width$}. ", marker, dn.index.0, width = INDEX_WIDTH - 3);
        let date_width = dn.note.date.width();

        let mut lines = dn.note.text.lines();
        let first = lines.next().unwrap_or_default();
        let available = LINE_WIDTH.saturating_sub(INDEX_WIDTH + date_width + 2);
        let first = truncate_to_width(first, available);
        let padding = available.saturating_sub(first.width()) + 2;

        writeln!(
            out,
            "{}{}{}{}",
            idx_str.yellow(),
            first,
            " ".repeat(padding),
            dn.note.date.dimmed()
        )?;
        for line in lines {
            writeln!(out, "{}{}", " ".repeat(INDEX_WIDTH), line)?;
        }
    }
    Ok(())
}

pub(super) fn write_config<W: Write>(out: &mut W, config: &NotezConfig) -> io::Result<()> {
    writeln!(out, "storage-key = {}", config.storage_key)?;
    writeln!(out, "date-format = {}", config.date_format)?;
    Ok(())
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        result.push(c);
        width += w;
    }
    result.push('…');
    result
}
