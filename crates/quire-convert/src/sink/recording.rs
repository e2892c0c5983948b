//! Sink that records events as strings, for asserting event order in tests.

use quire_styles::Style;
use quire_usfm::Figure;

use super::{ParagraphStyle, Sink};

#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    events: Vec<String>,
    paragraph_style: String,
    paragraph_content: String,
}

impl RecordingSink {
    pub(crate) fn events(&self) -> &[String] {
        &self.events
    }

    fn record(&mut self, event: String) {
        self.events.push(event);
    }
}

impl Sink for RecordingSink {
    fn open_text_style(&mut self, style: &Style, note: bool, embed: bool) {
        self.record(format!("open {} note={note} embed={embed}", style.marker));
    }

    fn close_text_style(&mut self, note: bool, embed: bool) {
        self.record(format!("close note={note} embed={embed}"));
    }

    fn add_text(&mut self, text: &str) {
        self.paragraph_content.push_str(text);
        self.record(format!("text {text}"));
    }

    fn add_note_text(&mut self, text: &str) {
        self.record(format!("note-text {text}"));
    }

    fn new_paragraph(&mut self, style: &str) {
        style.clone_into(&mut self.paragraph_style);
        self.paragraph_content.clear();
        self.record(format!("paragraph {style}"));
    }

    fn create_paragraph_style(&mut self, style: &ParagraphStyle) {
        self.record(format!(
            "style {} keep={} dropcaps={}",
            style.name, style.keep_with_next, style.drop_caps
        ));
    }

    fn new_heading(&mut self, text: &str, hidden: bool) {
        self.record(format!("heading {text} hidden={hidden}"));
    }

    fn new_page_break(&mut self) {
        self.paragraph_content.clear();
        self.record("page-break".to_owned());
    }

    fn add_image(&mut self, figure: &Figure) {
        self.record(format!("image {}", figure.src));
    }

    fn add_note(&mut self, citation: &str, style: &str, endnote: bool) {
        self.record(format!("note {citation} {style} endnote={endnote}"));
    }

    fn close_current_note(&mut self) {
        self.record("close-note".to_owned());
    }

    fn place_text_in_frame(&mut self, text: &str, style: &str, _font_size: f32, _italic: bool, _bold: bool) {
        self.paragraph_content.push_str(text);
        self.record(format!("frame {text} {style}"));
    }

    fn update_current_paragraph_style(&mut self, style: &str) {
        style.clone_into(&mut self.paragraph_style);
        self.record(format!("restyle {style}"));
    }

    fn paragraph_has_content(&self) -> bool {
        !self.paragraph_content.is_empty()
    }

    fn current_paragraph_style(&self) -> &str {
        &self.paragraph_style
    }
}
