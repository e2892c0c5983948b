//! Plain text sink.

use quire_styles::Style;
use quire_usfm::Figure;

use super::{ParagraphStyle, Sink};

const DROP_CAPS_STYLE: &str = "dropcaps";

/// Collects the body as one line per paragraph and the notes as one line
/// per note, each prefixed with its citation.
#[derive(Debug, Default)]
pub struct TextSink {
    lines: Vec<String>,
    line: String,
    paragraph_style: String,
    notes: Vec<String>,
    note: Option<String>,
    in_drop_caps: bool,
}

impl TextSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Body text, paragraphs separated by newlines.
    #[must_use]
    pub fn text(&self) -> String {
        let mut lines: Vec<&str> = self.lines.iter().map(String::as_str).collect();
        if !self.line.is_empty() {
            lines.push(&self.line);
        }
        lines.join("\n")
    }

    /// Note text, one note per line.
    #[must_use]
    pub fn notes(&self) -> String {
        let mut notes: Vec<&str> = self.notes.iter().map(String::as_str).collect();
        if let Some(note) = &self.note {
            notes.push(note.trim_end());
        }
        notes.join("\n")
    }

    fn flush_line(&mut self) {
        if !self.line.is_empty() {
            self.lines.push(std::mem::take(&mut self.line));
        }
    }
}

impl Sink for TextSink {
    fn open_text_style(&mut self, style: &Style, note: bool, _embed: bool) {
        if !note && style.marker == DROP_CAPS_STYLE {
            self.in_drop_caps = true;
        }
    }

    fn close_text_style(&mut self, note: bool, _embed: bool) {
        // A drop-caps chapter number runs straight into the verse text otherwise.
        if !note && self.in_drop_caps {
            self.in_drop_caps = false;
            self.line.push(' ');
        }
    }

    fn add_text(&mut self, text: &str) {
        self.line.push_str(text);
    }

    fn add_note_text(&mut self, text: &str) {
        self.note.get_or_insert_with(String::new).push_str(text);
    }

    fn new_paragraph(&mut self, style: &str) {
        self.flush_line();
        style.clone_into(&mut self.paragraph_style);
    }

    fn create_paragraph_style(&mut self, _style: &ParagraphStyle) {}

    fn new_heading(&mut self, text: &str, hidden: bool) {
        if hidden {
            return;
        }
        self.flush_line();
        self.lines.push(text.to_owned());
        self.paragraph_style.clear();
    }

    fn new_page_break(&mut self) {
        self.flush_line();
        self.paragraph_style.clear();
    }

    fn add_image(&mut self, figure: &Figure) {
        self.flush_line();
        if !figure.caption.is_empty() {
            self.lines.push(figure.caption.clone());
        }
    }

    fn add_note(&mut self, citation: &str, _style: &str, _endnote: bool) {
        self.close_current_note();
        self.note = Some(format!("{citation} "));
    }

    fn close_current_note(&mut self) {
        if let Some(note) = self.note.take() {
            let note = note.trim_end();
            if !note.is_empty() {
                self.notes.push(note.to_owned());
            }
        }
    }

    fn place_text_in_frame(&mut self, text: &str, _style: &str, _font_size: f32, _italic: bool, _bold: bool) {
        self.line.push_str(text);
        self.line.push(' ');
    }

    fn update_current_paragraph_style(&mut self, style: &str) {
        style.clone_into(&mut self.paragraph_style);
    }

    fn paragraph_has_content(&self) -> bool {
        !self.line.is_empty()
    }

    fn current_paragraph_style(&self) -> &str {
        &self.paragraph_style
    }
}
