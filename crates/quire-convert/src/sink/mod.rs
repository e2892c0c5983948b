//! Output sinks.
//!
//! The converter never talks to a concrete renderer. It emits semantic
//! events through [`Sink`], and every event is broadcast to each active sink
//! in turn. Sinks are independent: one sink's state never influences another
//! or the conversion itself.

mod html;
#[cfg(test)]
pub(crate) mod recording;
mod text;

pub use html::HtmlSink;
pub use text::TextSink;

use quire_styles::{Paragraph, Style};
use quire_usfm::Figure;

/// A paragraph style to materialize in a sink before first use.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphStyle {
    /// Style name, usually the marker (`p`, `q1`) or a drop-caps variant (`p_c1`).
    pub name: String,
    pub font: String,
    pub paragraph: Paragraph,
    pub keep_with_next: bool,
    /// Number of characters rendered in drop caps; 0 disables drop caps.
    pub drop_caps: usize,
}

/// Receiver of conversion events.
///
/// `note` selects the note text-style stack instead of the body stack.
/// `embed` marks a style nested inside another character style.
pub trait Sink {
    fn open_text_style(&mut self, style: &Style, note: bool, embed: bool);

    fn close_text_style(&mut self, note: bool, embed: bool);

    fn add_text(&mut self, text: &str);

    fn add_note_text(&mut self, text: &str);

    /// Start a paragraph with the named style.
    fn new_paragraph(&mut self, style: &str);

    fn create_paragraph_style(&mut self, style: &ParagraphStyle);

    /// Emit a heading. Hidden headings feed running headers only.
    fn new_heading(&mut self, text: &str, hidden: bool);

    fn new_page_break(&mut self);

    fn add_image(&mut self, figure: &Figure);

    /// Place a note citation in the body and open the note body.
    fn add_note(&mut self, citation: &str, style: &str, endnote: bool);

    /// Close the open note so stray note text cannot extend it.
    fn close_current_note(&mut self);

    fn place_text_in_frame(&mut self, text: &str, style: &str, font_size: f32, italic: bool, bold: bool);

    /// Restyle the current paragraph, used for drop-caps chapter numbers.
    fn update_current_paragraph_style(&mut self, style: &str);

    fn paragraph_has_content(&self) -> bool;

    fn current_paragraph_style(&self) -> &str;
}

/// The active sinks of one conversion run.
pub(crate) struct Broadcast<'a, 's> {
    sinks: &'a mut [&'s mut dyn Sink],
}

impl<'a, 's> Broadcast<'a, 's> {
    pub(crate) fn new(sinks: &'a mut [&'s mut dyn Sink]) -> Self {
        Self { sinks }
    }

    /// Deliver one event to every sink.
    pub(crate) fn each(&mut self, mut event: impl FnMut(&mut (dyn Sink + 's))) {
        for sink in self.sinks.iter_mut() {
            event(&mut **sink);
        }
    }

    pub(crate) fn close_text_style(&mut self, note: bool, embed: bool) {
        self.each(|sink| sink.close_text_style(note, embed));
    }

    pub(crate) fn add_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.each(|sink| sink.add_text(text));
    }

    /// Start a fresh paragraph with the current style in every sink that
    /// already has content in its paragraph.
    pub(crate) fn restart_paragraph(&mut self) {
        for sink in self.sinks.iter_mut() {
            if sink.paragraph_has_content() {
                let style = sink.current_paragraph_style().to_owned();
                sink.new_paragraph(&style);
            }
        }
    }

    /// Separate a new verse from preceding text in the same paragraph.
    pub(crate) fn space_if_content(&mut self) {
        for sink in self.sinks.iter_mut() {
            if sink.paragraph_has_content() {
                sink.add_text(" ");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::recording::RecordingSink;
    use super::*;

    #[test]
    fn test_broadcast_reaches_every_sink() {
        let mut first = RecordingSink::default();
        let mut second = RecordingSink::default();
        {
            let mut sinks: [&mut dyn Sink; 2] = [&mut first, &mut second];
            let mut broadcast = Broadcast::new(&mut sinks);
            broadcast.add_text("In the beginning");
            broadcast.add_text("");
        }

        assert_eq!(first.events(), ["text In the beginning"]);
        assert_eq!(second.events(), ["text In the beginning"]);
    }

    #[test]
    fn test_restart_paragraph_only_with_content() {
        let mut filled = RecordingSink::default();
        let mut empty = RecordingSink::default();
        filled.new_paragraph("q1");
        filled.add_text("The Lord");
        empty.new_paragraph("p");
        {
            let mut sinks: [&mut dyn Sink; 2] = [&mut filled, &mut empty];
            Broadcast::new(&mut sinks).restart_paragraph();
        }

        assert_eq!(filled.events(), ["paragraph q1", "text The Lord", "paragraph q1"]);
        assert_eq!(empty.events(), ["paragraph p"]);
    }
}
