//! Plain text and headings accumulated per verse.
//!
//! Keys are verse numbers, so the maps are only meaningful for a single
//! chapter of input.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerseTexts {
    text: BTreeMap<i32, String>,
    headings: BTreeMap<i32, String>,
    paragraphs: Vec<BTreeMap<i32, String>>,
    current_paragraph: BTreeMap<i32, String>,
    paragraph_markers: Vec<String>,
    note_positions: BTreeMap<i32, Vec<usize>>,
}

impl VerseTexts {
    /// Plain text per verse, trimmed.
    #[must_use]
    pub fn text(&self) -> BTreeMap<i32, String> {
        trimmed(&self.text)
    }

    /// Heading text per verse, trimmed. Headings before verse 1 sit at 0.
    #[must_use]
    pub fn headings(&self) -> BTreeMap<i32, String> {
        trimmed(&self.headings)
    }

    /// Verse text split by the paragraphs it appeared in.
    #[must_use]
    pub fn paragraphs(&self) -> &[BTreeMap<i32, String>] {
        &self.paragraphs
    }

    /// Marker of every normal paragraph that started, in order.
    #[must_use]
    pub fn paragraph_markers(&self) -> &[String] {
        &self.paragraph_markers
    }

    /// Byte offsets into each verse's text at which notes were placed.
    #[must_use]
    pub fn note_positions(&self) -> &BTreeMap<i32, Vec<usize>> {
        &self.note_positions
    }

    pub(crate) fn start_paragraph(&mut self, verse: i32, marker: &str) {
        if let Some(text) = self.text.get_mut(&verse)
            && !text.is_empty()
        {
            text.push(' ');
        }
        self.paragraph_markers.push(marker.to_owned());
        self.store_paragraph();
    }

    /// Append a text run. The first run of a verse starts with the verse
    /// spacer, which becomes a plain space before left-trimming.
    pub(crate) fn add_text(&mut self, verse: i32, text: &str, spacer: &str) {
        match self.text.get_mut(&verse) {
            Some(existing) if !existing.is_empty() => {
                existing.push_str(text);
                self.current_paragraph.entry(verse).or_default().push_str(text);
            }
            _ => {
                let first = text.replace(spacer, " ").trim_start().to_owned();
                self.current_paragraph.insert(verse, first.clone());
                self.text.insert(verse, first);
            }
        }
    }

    pub(crate) fn add_heading(&mut self, verse: i32, text: &str) {
        self.headings.entry(verse).or_default().push_str(text);
    }

    pub(crate) fn mark_note(&mut self, verse: i32) {
        let offset = self.text.get(&verse).map_or(0, String::len);
        self.note_positions.entry(verse).or_default().push(offset);
    }

    pub(crate) fn finish(&mut self) {
        self.store_paragraph();
    }

    fn store_paragraph(&mut self) {
        if !self.current_paragraph.is_empty() {
            self.paragraphs.push(std::mem::take(&mut self.current_paragraph));
        }
    }
}

fn trimmed(map: &BTreeMap<i32, String>) -> BTreeMap<i32, String> {
    map.iter()
        .map(|(verse, text)| (*verse, text.trim().to_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_first_run_replaces_spacer() {
        let mut verses = VerseTexts::default();
        verses.add_text(1, "\u{2002}He said:", "\u{2002}");
        verses.start_paragraph(1, "p");
        verses.add_text(1, "I will sing.", "\u{2002}");

        assert_eq!(verses.text()[&1], "He said: I will sing.");
        assert_eq!(verses.paragraph_markers(), ["p"]);
    }

    #[test]
    fn test_paragraphs_split_verse_text() {
        let mut verses = VerseTexts::default();
        verses.add_text(1, " One", " ");
        verses.start_paragraph(1, "q1");
        verses.add_text(1, "Two", " ");
        verses.add_text(2, " Three", " ");
        verses.finish();

        let expected = vec![
            BTreeMap::from([(1, "One".to_owned())]),
            BTreeMap::from([(1, "Two".to_owned()), (2, "Three".to_owned())]),
        ];
        assert_eq!(verses.paragraphs(), expected.as_slice());
    }

    #[test]
    fn test_note_positions() {
        let mut verses = VerseTexts::default();
        verses.mark_note(1);
        verses.add_text(1, " In", " ");
        verses.mark_note(1);

        assert_eq!(verses.note_positions()[&1], vec![0, 2]);
    }
}
