//! Result of one conversion run.

use std::collections::BTreeMap;

use quire_usfm::english_name;

use crate::metadata::{Metadata, PassageValue};
use crate::sink::{HtmlSink, Sink};
use crate::verses::VerseTexts;

/// Word-level attributes stripped from the visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedAttributes {
    /// Passage display, e.g. `Genesis 1:1`.
    pub passage: String,
    pub marker: String,
    pub text: String,
    pub attributes: Vec<(String, String)>,
}

/// Everything a run produces besides the sink output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    /// Informational diagnostics, prefixed with their passage.
    pub info: Vec<String>,
    /// Markup that could not be fully processed, prefixed with its passage.
    pub fallout: Vec<String>,
    /// Word list entries per marker, e.g. `w` or `ndx`.
    pub word_lists: BTreeMap<String, Vec<String>>,
    pub verses: VerseTexts,
    /// Plain text of each note with the verse it belongs to.
    pub notes_plain_text: Vec<(String, String)>,
    pub metadata: Metadata,
    /// File names referenced by figures.
    pub image_sources: Vec<String>,
    pub word_attributes: Vec<CapturedAttributes>,
}

const WORD_LIST_SECTIONS: [(&str, &str); 4] = [
    ("w", "Word list, glossary, dictionary entries"),
    ("wh", "Hebrew word list entries"),
    ("wg", "Greek word list entries"),
    ("ndx", "Subject index entries"),
];

impl Conversion {
    #[must_use]
    pub fn chapters_per_book(&self) -> &BTreeMap<i32, i32> {
        &self.metadata.chapters_per_book
    }

    /// HTML report of the harvested metadata, word lists and info entries.
    #[must_use]
    pub fn info_document(&self) -> String {
        let mut html = HtmlSink::new("Information");

        html.new_heading("Number of chapters per book", false);
        for (book, chapters) in &self.metadata.chapters_per_book {
            paragraph(&mut html, &format!("{} => {chapters}", english_name(*book)));
        }

        let metadata = &self.metadata;
        for (heading, items) in [
            ("Running headers", &metadata.running_headers),
            ("Long table of contents entries", &metadata.long_tocs),
            ("Short table of contents entries", &metadata.short_tocs),
            ("Book abbreviations", &metadata.book_abbreviations),
            ("Publishing chapter labels", &metadata.chapter_labels),
            ("Publishing alternate chapter numbers", &metadata.published_chapter_markers),
        ] {
            html.new_heading(heading, false);
            for item in items {
                paragraph(&mut html, &passage_value_line(item));
            }
        }

        for (marker, heading) in WORD_LIST_SECTIONS {
            html.new_heading(heading, false);
            for entry in self.word_lists.get(marker).into_iter().flatten() {
                paragraph(&mut html, entry);
            }
        }

        html.new_heading("Other information", false);
        for entry in &self.info {
            paragraph(&mut html, entry);
        }

        html.to_html()
    }

    /// HTML report of the fallout entries.
    #[must_use]
    pub fn fallout_document(&self) -> String {
        let mut html = HtmlSink::new("Fallout");
        html.new_heading("Fallout", false);
        for entry in &self.fallout {
            paragraph(&mut html, entry);
        }
        html.to_html()
    }
}

fn paragraph(html: &mut HtmlSink, text: &str) {
    html.new_paragraph("");
    html.add_text(text);
}

fn passage_value_line(item: &PassageValue) -> String {
    format!(
        "{} (USFM {}) => {}",
        english_name(item.book),
        item.marker,
        item.value.trim()
    )
}
