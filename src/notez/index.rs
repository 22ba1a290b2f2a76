//! # Display indexes
//!
//! Note ids are millisecond timestamps, which nobody wants to type. The CLI
//! therefore addresses notes by their 1-based position in the list as shown
//! (`1` is the newest note). Positions are only stable until the next add or
//! delete, so they are resolved to [`NoteId`]s before any command runs.
//!
//! A raw id can still be given with an `@` prefix (`@1700000000000`).

use crate::model::{Note, NoteId};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A user-facing, 1-based position in the note list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(pub usize);

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<usize>() {
            Ok(0) => Err("Indexes start at 1".to_string()),
            Ok(n) => Ok(DisplayIndex(n)),
            Err(_) => Err(format!("Invalid index format: {}", s)),
        }
    }
}

/// A user input selecting notes: one position, an inclusive range of
/// positions (kept unexpanded until resolution), or a raw id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteSelector {
    Index(DisplayIndex),
    Range(DisplayIndex, DisplayIndex),
    Id(NoteId),
}

impl fmt::Display for NoteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteSelector::Index(idx) => write!(f, "{}", idx),
            NoteSelector::Range(start, end) => write!(f, "{}-{}", start, end),
            NoteSelector::Id(id) => write!(f, "@{}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNote {
    pub index: DisplayIndex,
    pub note: Note,
}

/// Pairs each note with its display index, preserving list order.
pub fn index_notes(notes: &[Note]) -> Vec<DisplayNote> {
    notes
        .iter()
        .enumerate()
        .map(|(i, note)| DisplayNote {
            index: DisplayIndex(i + 1),
            note: note.clone(),
        })
        .collect()
}

/// Parses one selector argument: `3`, a range `2-4`, or a raw id `@1700000000000`.
///
/// Range rules:
/// - Start must be <= end (`3-3` is valid, `3-2` is an error)
/// - Whether the positions exist is checked later, during resolution
pub fn parse_selector(s: &str) -> Result<NoteSelector, String> {
    let s = s.trim();
    if let Some(raw) = s.strip_prefix('@') {
        return raw
            .parse::<i64>()
            .map(|id| NoteSelector::Id(NoteId(id)))
            .map_err(|_| format!("Invalid note id: {}", s));
    }

    if let Some((start, end)) = s.split_once('-') {
        if start.is_empty() {
            return Err(format!("Invalid index format: {}", s));
        }
        let start = DisplayIndex::from_str(start)?;
        let end = DisplayIndex::from_str(end)?;
        if start > end {
            return Err(format!(
                "Invalid range: start ({}) must be <= end ({})",
                start, end
            ));
        }
        if start == end {
            return Ok(NoteSelector::Index(start));
        }
        return Ok(NoteSelector::Range(start, end));
    }

    DisplayIndex::from_str(s).map(NoteSelector::Index)
}

/// Parses every argument, dropping repeated selectors. Overlapping ranges are
/// left to resolution, which dedups ids.
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<NoteSelector>, String> {
    let mut seen = HashSet::new();
    let mut selectors = Vec::new();
    for input in inputs {
        let selector = parse_selector(input.as_ref())?;
        if seen.insert(selector) {
            selectors.push(selector);
        }
    }
    Ok(selectors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_follow_list_order() {
        let notes = vec![
            Note::new(NoteId(3), "newest", "d"),
            Note::new(NoteId(2), "middle", "d"),
            Note::new(NoteId(1), "oldest", "d"),
        ];
        let indexed = index_notes(&notes);
        assert_eq!(indexed.len(), 3);
        assert_eq!(indexed[0].index, DisplayIndex(1));
        assert_eq!(indexed[0].note.text, "newest");
        assert_eq!(indexed[2].index, DisplayIndex(3));
        assert_eq!(indexed[2].note.text, "oldest");
    }

    #[test]
    fn test_parsing() {
        assert_eq!(DisplayIndex::from_str("1"), Ok(DisplayIndex(1)));
        assert_eq!(DisplayIndex::from_str("42"), Ok(DisplayIndex(42)));
        assert!(DisplayIndex::from_str("0").is_err());
        assert!(DisplayIndex::from_str("").is_err());
        assert!(DisplayIndex::from_str("abc").is_err());
        assert!(DisplayIndex::from_str("12a").is_err());
    }

    #[test]
    fn test_parse_raw_id() {
        assert_eq!(
            parse_selector("@1700000000000"),
            Ok(NoteSelector::Id(NoteId(1700000000000)))
        );
        assert!(parse_selector("@").is_err());
        assert!(parse_selector("@abc").is_err());
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(
            parse_selector("2-4"),
            Ok(NoteSelector::Range(DisplayIndex(2), DisplayIndex(4)))
        );
        assert_eq!(
            parse_selector("3-3"),
            Ok(NoteSelector::Index(DisplayIndex(3)))
        );
    }

    #[test]
    fn test_huge_range_is_not_expanded() {
        assert_eq!(
            parse_selectors(&["1-99999999999"]),
            Ok(vec![NoteSelector::Range(
                DisplayIndex(1),
                DisplayIndex(99999999999)
            )])
        );
    }

    #[test]
    fn test_parse_range_invalid() {
        let result = parse_selector("5-3");
        assert!(result.unwrap_err().contains("must be <= end"));
        assert!(parse_selector("-5").is_err());
        assert!(parse_selector("3-").is_err());
        assert!(parse_selector("a-3").is_err());
    }

    #[test]
    fn test_parse_selectors_dedups() {
        let selectors = parse_selectors(&["1", "1-2", "1", "@9", "1-2"]).unwrap();
        assert_eq!(
            selectors,
            vec![
                NoteSelector::Index(DisplayIndex(1)),
                NoteSelector::Range(DisplayIndex(1), DisplayIndex(2)),
                NoteSelector::Id(NoteId(9)),
            ]
        );
    }
}
