//! First pass: metadata harvesting and note registration.

use quire_styles::{Property, Style, StyleType};
use quire_usfm::{Marker, Token, book_id_from_usfm, parse_chapter_number, peek_verse_number};

use super::Run;
use crate::cursor::Chunk;
use crate::metadata::PassageValue;

impl Run<'_, '_, '_> {
    pub(super) fn preprocess(&mut self, chunks: &[Chunk]) {
        for chunk in chunks {
            let tokens = chunk.tokens();
            for (index, token) in tokens.iter().enumerate() {
                let Some(marker) = token.as_marker() else {
                    continue;
                };
                if !marker.is_opening() {
                    continue;
                }
                let stylesheet = self.stylesheet;
                let Some(style) = stylesheet.get(marker.name()) else {
                    continue;
                };
                let following = tokens
                    .get(index + 1)
                    .and_then(Token::as_text)
                    .unwrap_or_default();
                self.harvest(marker, style, following);
            }
        }
    }

    fn harvest(&mut self, marker: &Marker, style: &Style, following: &str) {
        if style.has_property(Property::Deprecated) {
            self.add_info(&format!("Deprecated marker \\{}", marker.name()));
        }

        match style.style_type {
            StyleType::BookId => {
                self.book = book_from_id_line(following);
                self.chapter = 0;
                "0".clone_into(&mut self.verse);
                self.conversion
                    .metadata
                    .chapters_per_book
                    .entry(self.book)
                    .or_insert(0);
            }
            StyleType::Chapter => {
                self.chapter = parse_chapter_number(following);
                "0".clone_into(&mut self.verse);
                let count = self
                    .conversion
                    .metadata
                    .chapters_per_book
                    .entry(self.book)
                    .or_insert(0);
                *count = (*count).max(self.chapter);
            }
            StyleType::Verse => {
                let number = peek_verse_number(following.trim_start());
                if !number.is_empty() {
                    number.clone_into(&mut self.verse);
                }
            }
            StyleType::RunningHeader => {
                let value = self.passage_value(marker, following);
                self.conversion.metadata.running_headers.push(value);
            }
            StyleType::LongTocText => {
                let value = self.passage_value(marker, following);
                self.conversion.metadata.long_tocs.push(value);
            }
            StyleType::ShortTocText => {
                let value = self.passage_value(marker, following);
                self.conversion.metadata.short_tocs.push(value);
            }
            StyleType::BookAbbrev => {
                let value = self.passage_value(marker, following);
                self.conversion.metadata.book_abbreviations.push(value);
            }
            StyleType::ChapterLabel => {
                let value = self.passage_value(marker, following);
                let metadata = &mut self.conversion.metadata;
                metadata.chapter_labels.push(value);
                metadata.books_with_chapter_label.insert(self.book);
            }
            StyleType::PublishedChapterMarker => {
                let value = self.passage_value(marker, following);
                self.conversion.metadata.published_chapter_markers.push(value);
            }
            StyleType::AlternateChapterNumber => {
                let value = self.passage_value(marker, following);
                self.conversion.metadata.alternate_chapter_numbers.push(value);
            }
            StyleType::PublishedVerseMarker => {
                let value = self.passage_value(marker, following);
                self.conversion.metadata.published_verse_markers.push(value);
            }
            StyleType::FootnoteWrapper
            | StyleType::EndnoteWrapper
            | StyleType::CrossreferenceWrapper => self.citations.register(style),
            _ => {}
        }
    }

    fn passage_value(&self, marker: &Marker, value: &str) -> PassageValue {
        PassageValue {
            book: self.book,
            chapter: self.chapter,
            verse: self.verse.clone(),
            marker: marker.name().to_owned(),
            value: value.to_owned(),
        }
    }
}

/// Book number from the text after `\id`, e.g. `GEN Genesis`.
///
/// Soft hyphens are ignored. Returns 0 for an unknown code.
pub(super) fn book_from_id_line(text: &str) -> i32 {
    let code: String = text
        .trim_start()
        .chars()
        .filter(|c| *c != '\u{ad}')
        .take(3)
        .collect();
    book_id_from_usfm(&code)
}
