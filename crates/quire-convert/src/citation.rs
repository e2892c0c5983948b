//! Note citation numbering.

use std::collections::HashMap;

use quire_styles::{Property, Style};
use tracing::warn;

/// When a citation sequence starts over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Restart {
    #[default]
    Never,
    Book,
    Chapter,
}

impl Restart {
    /// Parse `never`, `book` or `chapter`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "never" => Some(Self::Never),
            "book" => Some(Self::Book),
            "chapter" => Some(Self::Chapter),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Entry {
    sequence: Vec<String>,
    restart: Restart,
    pointer: usize,
}

/// Hands out citation symbols per note wrapper marker.
///
/// A marker with an empty sequence counts `1`, `2`, `3`, … without end.
/// Otherwise symbols come from the sequence and wrap past its end.
///
/// # Example
///
/// ```
/// use quire_convert::{CitationSequencer, Restart};
///
/// let mut citations = CitationSequencer::new();
/// citations.register_sequence("x", "a b", Restart::Chapter);
/// assert_eq!(citations.next("x"), "a");
/// assert_eq!(citations.next("x"), "b");
/// assert_eq!(citations.next("x"), "a");
/// citations.restart(Restart::Chapter);
/// assert_eq!(citations.next("x"), "a");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CitationSequencer {
    entries: HashMap<String, Entry>,
}

impl CitationSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a wrapper style from its numbering properties.
    ///
    /// A marker that is already registered keeps its state.
    pub fn register(&mut self, style: &Style) {
        if self.entries.contains_key(&style.marker) {
            return;
        }
        let sequence: String = style.parameter(Property::NoteNumberingSequence);
        let restart: String = style.parameter(Property::NoteNumberingRestart);
        let restart = if restart.is_empty() {
            Restart::Never
        } else {
            Restart::parse(&restart).unwrap_or_else(|| {
                warn!(marker = %style.marker, restart = %restart, "Unknown note numbering restart");
                Restart::Never
            })
        };
        self.register_sequence(&style.marker, &sequence, restart);
    }

    /// Register `marker` with a space-separated symbol sequence.
    pub fn register_sequence(&mut self, marker: &str, sequence: &str, restart: Restart) {
        self.entries.insert(
            marker.to_owned(),
            Entry {
                sequence: sequence.split_whitespace().map(str::to_owned).collect(),
                restart,
                pointer: 0,
            },
        );
    }

    /// Next citation for `marker`. Unregistered markers count from 1.
    pub fn next(&mut self, marker: &str) -> String {
        let entry = self.entries.entry(marker.to_owned()).or_default();
        if entry.sequence.is_empty() {
            entry.pointer += 1;
            return entry.pointer.to_string();
        }
        let citation = entry.sequence[entry.pointer].clone();
        entry.pointer = (entry.pointer + 1) % entry.sequence.len();
        citation
    }

    /// Reset every sequence whose restart trigger is `moment`.
    pub fn restart(&mut self, moment: Restart) {
        for entry in self.entries.values_mut() {
            if entry.restart == moment {
                entry.pointer = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quire_styles::{Category, StyleType, lookup};

    use super::*;

    fn take(citations: &mut CitationSequencer, marker: &str, count: usize) -> Vec<String> {
        (0..count).map(|_| citations.next(marker)).collect()
    }

    #[test]
    fn test_unconfigured_style_counts_without_limit() {
        let mut citations = CitationSequencer::new();
        let style = Style::new("f", StyleType::FootnoteWrapper, "Footnote", Category::Footnotes);
        citations.register(&style);

        let expected: Vec<String> = (1..=12).map(|n| n.to_string()).collect();
        assert_eq!(take(&mut citations, "f", 12), expected);

        citations.restart(Restart::Book);
        citations.restart(Restart::Chapter);
        assert_eq!(citations.next("f"), "13");
    }

    #[test]
    fn test_custom_sequence_wraps() {
        let mut citations = CitationSequencer::new();
        citations.register_sequence("f", "* † ‡", Restart::Never);

        assert_eq!(take(&mut citations, "f", 7), ["*", "†", "‡", "*", "†", "‡", "*"]);
    }

    #[test]
    fn test_restart_at_chapter() {
        let mut citations = CitationSequencer::new();
        citations.register(lookup("standard", "x").unwrap());
        citations.register(lookup("standard", "fe").unwrap());

        assert_eq!(take(&mut citations, "x", 3), ["a", "b", "c"]);
        assert_eq!(take(&mut citations, "fe", 2), ["1", "2"]);

        citations.restart(Restart::Chapter);

        assert_eq!(citations.next("x"), "a");
        assert_eq!(citations.next("fe"), "3");
    }

    #[test]
    fn test_register_keeps_existing_state() {
        let mut citations = CitationSequencer::new();
        let style = lookup("standard", "f").unwrap();
        citations.register(style);
        citations.next("f");
        citations.register(style);

        assert_eq!(citations.next("f"), "2");
    }

    #[test]
    fn test_restart_parse() {
        assert_eq!(Restart::parse("book"), Some(Restart::Book));
        assert_eq!(Restart::parse("weekly"), None);
    }
}
