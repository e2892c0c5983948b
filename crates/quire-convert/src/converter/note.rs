//! Footnote, endnote and cross-reference bodies.
//!
//! The note loop advances the same chunk cursor as the main loop and hands
//! it back positioned after the closing wrapper marker.

use quire_styles::{Style, StyleType};
use quire_usfm::{Marker, Token};

use super::{Run, join_lines, marker_text};
use crate::cursor::Chunk;

impl Run<'_, '_, '_> {
    pub(super) fn process_note(&mut self, chunk: &mut Chunk, wrapper: &Style) {
        let markers = self.markers;
        let content = if wrapper.style_type == StyleType::CrossreferenceWrapper {
            &markers.crossreference_content
        } else {
            &markers.footnote_content
        };
        self.ensure_note_style(content);

        let citation = match chunk.take_citation().as_deref() {
            Some("+") => self.citations.next(&wrapper.marker),
            Some("-") | None => String::new(),
            Some(custom) => custom.to_owned(),
        };
        let endnote = wrapper.style_type == StyleType::EndnoteWrapper;
        self.sinks
            .each(|sink| sink.add_note(&citation, content, endnote));
        let verse = self.verse_number();
        self.conversion.verses.mark_note(verse);

        let mut plain = String::new();
        while let Some(token) = chunk.next_token() {
            let finished = match token {
                Token::Text(text) => {
                    self.note_text(&text, &mut plain);
                    false
                }
                Token::Marker(marker) => self.note_marker(chunk, &marker),
            };
            if finished {
                break;
            }
        }

        self.sinks.each(|sink| sink.close_current_note());
        let plain = plain.trim();
        if !plain.is_empty() {
            let entry = (self.verse.clone(), plain.to_owned());
            self.conversion.notes_plain_text.push(entry);
        }
    }

    /// Handle a marker inside a note. Returns whether the note has ended.
    fn note_marker(&mut self, chunk: &mut Chunk, marker: &Marker) -> bool {
        let stylesheet = self.stylesheet;
        let Some(style) = stylesheet.get(marker.name()) else {
            if marker.milestone().is_some() {
                self.milestone(chunk, marker);
                return false;
            }
            let following = chunk.take_text_following();
            self.add_fallout(
                format!("Unknown marker {} {}", marker_text(marker), following.trim()).trim_end(),
            );
            return false;
        };
        let opening = marker.is_opening();
        if opening {
            self.capture_word_attributes(chunk, marker, style);
        }

        match style.style_type {
            StyleType::FootnoteWrapper
            | StyleType::EndnoteWrapper
            | StyleType::CrossreferenceWrapper
                if !opening =>
            {
                return true;
            }
            StyleType::Verse => {
                self.add_fallout(
                    "The note did not close at the end of the verse. The text is not correct.",
                );
                chunk.unread(Token::Marker(marker.clone()));
                return true;
            }
            StyleType::NoteStandardContent | StyleType::CrossreferenceStandardContent => {
                self.sinks.close_text_style(true, false);
            }
            StyleType::NoteContent
            | StyleType::NoteContentWithEndmarker
            | StyleType::CrossreferenceContent
            | StyleType::CrossreferenceContentWithEndmarker
            | StyleType::CharacterStyle => {
                if opening {
                    self.sinks
                        .each(|sink| sink.open_text_style(style, true, marker.is_embedded()));
                } else {
                    self.sinks.close_text_style(true, marker.is_embedded());
                }
            }
            StyleType::NoteParagraph => self.sinks.close_text_style(true, false),
            StyleType::Milestone => self.milestone(chunk, marker),
            StyleType::WordList => {
                if opening {
                    self.add_word_list_entry(chunk, marker);
                }
            }
            _ => {
                self.add_fallout(&format!("Marker not suitable in note context {}", marker_text(marker)));
            }
        }
        false
    }

    fn note_text(&mut self, text: &str, plain: &mut String) {
        let text = join_lines(text);
        if text.is_empty() {
            return;
        }
        let text = self.transliterate(text);
        self.sinks.each(|sink| sink.add_note_text(&text));
        plain.push_str(&text);
    }
}
