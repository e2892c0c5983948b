//! Book-level metadata harvested before rendering.

use std::collections::{BTreeMap, BTreeSet};

/// A marker value captured at a passage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassageValue {
    pub book: i32,
    pub chapter: i32,
    pub verse: String,
    pub marker: String,
    pub value: String,
}

/// Everything the first pass collects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub running_headers: Vec<PassageValue>,
    pub long_tocs: Vec<PassageValue>,
    pub short_tocs: Vec<PassageValue>,
    pub book_abbreviations: Vec<PassageValue>,
    /// A label recorded at chapter 0 applies to the whole book.
    pub chapter_labels: Vec<PassageValue>,
    pub published_chapter_markers: Vec<PassageValue>,
    pub alternate_chapter_numbers: Vec<PassageValue>,
    pub published_verse_markers: Vec<PassageValue>,
    /// Books with at least one `\cl`; their chapter numbers are never deferred.
    pub books_with_chapter_label: BTreeSet<i32>,
    /// Highest chapter number seen per book.
    pub chapters_per_book: BTreeMap<i32, i32>,
}

impl Metadata {
    /// Last running header recorded for `book`.
    #[must_use]
    pub fn running_header(&self, book: i32) -> Option<&str> {
        last_value(&self.running_headers, |item| item.book == book)
    }

    #[must_use]
    pub fn published_chapter_marker(&self, book: i32, chapter: i32) -> Option<&str> {
        last_value(&self.published_chapter_markers, |item| {
            item.book == book && item.chapter == chapter
        })
    }

    #[must_use]
    pub fn alternate_chapter_number(&self, book: i32, chapter: i32) -> Option<&str> {
        last_value(&self.alternate_chapter_numbers, |item| {
            item.book == book && item.chapter == chapter
        })
    }

    /// Book-wide label and the label of `chapter` itself.
    #[must_use]
    pub fn chapter_labels(&self, book: i32, chapter: i32) -> (Option<&str>, Option<&str>) {
        let book_wide = last_value(&self.chapter_labels, |item| item.book == book && item.chapter == 0);
        let this_chapter = last_value(&self.chapter_labels, |item| {
            item.book == book && item.chapter == chapter && chapter != 0
        });
        (book_wide, this_chapter)
    }

    #[must_use]
    pub fn published_verse_marker(&self, book: i32, chapter: i32, verse: &str) -> Option<&str> {
        last_value(&self.published_verse_markers, |item| {
            item.book == book && item.chapter == chapter && item.verse == verse
        })
    }

    #[must_use]
    pub fn has_chapter_label(&self, book: i32) -> bool {
        self.books_with_chapter_label.contains(&book)
    }
}

fn last_value(items: &[PassageValue], matches: impl Fn(&PassageValue) -> bool) -> Option<&str> {
    items
        .iter()
        .rev()
        .find(|item| matches(item))
        .map(|item| item.value.trim())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn value(book: i32, chapter: i32, verse: &str, marker: &str, value: &str) -> PassageValue {
        PassageValue {
            book,
            chapter,
            verse: verse.to_owned(),
            marker: marker.to_owned(),
            value: value.to_owned(),
        }
    }

    #[test]
    fn test_last_running_header_wins() {
        let metadata = Metadata {
            running_headers: vec![value(1, 0, "0", "h1", "Gen"), value(1, 0, "0", "h", "Genesis\n")],
            ..Metadata::default()
        };

        assert_eq!(metadata.running_header(1), Some("Genesis"));
        assert_eq!(metadata.running_header(2), None);
    }

    #[test]
    fn test_chapter_labels() {
        let metadata = Metadata {
            chapter_labels: vec![value(19, 0, "0", "cl", "Psalm"), value(19, 2, "0", "cl", "Second Psalm")],
            ..Metadata::default()
        };

        assert_eq!(metadata.chapter_labels(19, 1), (Some("Psalm"), None));
        assert_eq!(metadata.chapter_labels(19, 2), (Some("Psalm"), Some("Second Psalm")));
    }

    #[test]
    fn test_published_verse_marker_matches_passage() {
        let metadata = Metadata {
            published_verse_markers: vec![value(1, 1, "2", "vp", "2a")],
            ..Metadata::default()
        };

        assert_eq!(metadata.published_verse_marker(1, 1, "2"), Some("2a"));
        assert_eq!(metadata.published_verse_marker(1, 2, "2"), None);
    }
}
