//! Web markup sink.
//!
//! Paragraphs become `<p class="marker">` elements holding `<span>` runs
//! whose class lists the open text styles. Notes are linked both ways
//! between the citation in the body and the note body in a trailing
//! `<div>`, which is left out when the document has no notes.

use std::fmt::Write;

use quire_styles::Style;
use quire_usfm::Figure;

use super::{ParagraphStyle, Sink};

/// Renders conversion events to an HTML5 document.
///
/// # Example
///
/// ```
/// use quire_convert::{HtmlSink, Sink};
///
/// let mut html = HtmlSink::new("Genesis");
/// html.new_paragraph("p");
/// html.add_text("In the beginning");
/// assert_eq!(html.inner_html(), r#"<p class="p"><span>In the beginning</span></p>"#);
/// ```
#[derive(Debug, Default)]
pub struct HtmlSink {
    title: String,
    body: String,
    paragraph: Option<Block>,
    paragraph_style: String,
    paragraph_content: String,
    text_style: Vec<String>,
    note_text_style: Vec<String>,
    notes: Vec<Block>,
    note_open: bool,
    note_count: usize,
}

#[derive(Debug, Default)]
struct Block {
    class: String,
    html: String,
}

impl Block {
    fn render(&self, out: &mut String) {
        if self.class.is_empty() {
            let _ = write!(out, "<p>{}</p>", self.html);
        } else {
            let _ = write!(out, r#"<p class="{}">{}</p>"#, escape_html(&self.class), self.html);
        }
    }
}

impl HtmlSink {
    /// Create an empty document with the given `<title>`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Full HTML5 document.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html><head>");
        let _ = write!(html, "<title>{}</title>", escape_html(&self.title));
        html.push_str(r#"<meta http-equiv="content-type" content="text/html; charset=UTF-8">"#);
        html.push_str(r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#);
        html.push_str(r#"<link rel="stylesheet" type="text/css" href="stylesheet.css">"#);
        html.push_str("</head><body>");
        html.push_str(&self.inner_html());
        html.push_str("</body></html>\n");
        html
    }

    /// Content of `<body>` only.
    #[must_use]
    pub fn inner_html(&self) -> String {
        let mut html = self.body.clone();
        if let Some(paragraph) = &self.paragraph {
            paragraph.render(&mut html);
        }
        if self.note_count > 0 {
            html.push_str("<div>");
            for note in &self.notes {
                note.render(&mut html);
            }
            html.push_str("</div>");
        }
        html
    }

    fn flush_paragraph(&mut self) {
        if let Some(paragraph) = self.paragraph.take() {
            paragraph.render(&mut self.body);
        }
    }

    fn reset_paragraph(&mut self) {
        self.flush_paragraph();
        self.paragraph_style.clear();
        self.paragraph_content.clear();
    }

    fn paragraph_html(&mut self) -> &mut String {
        if self.paragraph.is_none() {
            self.new_paragraph("");
        }
        &mut self.paragraph.get_or_insert_with(Block::default).html
    }
}

fn push_span(out: &mut String, classes: &[String], text: &str) {
    if classes.is_empty() {
        let _ = write!(out, "<span>{}</span>", escape_html(text));
    } else {
        let _ = write!(
            out,
            r#"<span class="{}">{}</span>"#,
            escape_html(&classes.join(" ")),
            escape_html(text)
        );
    }
}

fn push_link(out: &mut String, href: &str, id: &str, class: &str, text: &str) {
    let _ = write!(out, r##"<a href="#{href}" id="{id}""##);
    if !class.is_empty() {
        let _ = write!(out, r#" class="{class}""#);
    }
    let _ = write!(out, ">{}</a>", escape_html(text));
}

fn open_style(stack: &mut Vec<String>, marker: &str, embed: bool) {
    if !embed {
        stack.clear();
    }
    stack.push(marker.to_owned());
}

fn close_style(stack: &mut Vec<String>, embed: bool) {
    stack.pop();
    if !embed {
        stack.clear();
    }
}

impl Sink for HtmlSink {
    fn open_text_style(&mut self, style: &Style, note: bool, embed: bool) {
        if note {
            open_style(&mut self.note_text_style, &style.marker, embed);
        } else {
            open_style(&mut self.text_style, &style.marker, embed);
        }
    }

    fn close_text_style(&mut self, note: bool, embed: bool) {
        if note {
            close_style(&mut self.note_text_style, embed);
        } else {
            close_style(&mut self.text_style, embed);
        }
    }

    fn add_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let classes = self.text_style.clone();
        push_span(self.paragraph_html(), &classes, text);
        self.paragraph_content.push_str(text);
    }

    fn add_note_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if !self.note_open {
            self.add_note("?", "", false);
        }
        if let Some(note) = self.notes.last_mut() {
            push_span(&mut note.html, &self.note_text_style, text);
        }
    }

    fn new_paragraph(&mut self, style: &str) {
        self.flush_paragraph();
        self.paragraph = Some(Block {
            class: style.to_owned(),
            html: String::new(),
        });
        style.clone_into(&mut self.paragraph_style);
        self.paragraph_content.clear();
    }

    fn create_paragraph_style(&mut self, _style: &ParagraphStyle) {}

    fn new_heading(&mut self, text: &str, hidden: bool) {
        if hidden {
            return;
        }
        self.reset_paragraph();
        let _ = write!(self.body, "<h1>{}</h1>", escape_html(text));
    }

    fn new_page_break(&mut self) {
        self.new_paragraph("break");
        self.reset_paragraph();
    }

    fn add_image(&mut self, figure: &Figure) {
        self.reset_paragraph();
        let _ = write!(
            self.body,
            r#"<figure><img src="{}" alt="{}">"#,
            escape_html(&figure.src),
            escape_html(&figure.alt)
        );
        if !figure.caption.is_empty() {
            let _ = write!(self.body, "<figcaption>{}</figcaption>", escape_html(&figure.caption));
        }
        self.body.push_str("</figure>");
    }

    fn add_note(&mut self, citation: &str, style: &str, _endnote: bool) {
        self.note_count += 1;
        let count = self.note_count;
        push_link(
            self.paragraph_html(),
            &format!("note{count}"),
            &format!("citation{count}"),
            "superscript",
            citation,
        );

        let mut note = Block {
            class: style.to_owned(),
            html: String::new(),
        };
        push_link(&mut note.html, &format!("citation{count}"), &format!("note{count}"), "", citation);
        self.notes.push(note);
        self.note_open = true;

        self.close_text_style(true, false);
        self.add_note_text(" ");
    }

    fn close_current_note(&mut self) {
        self.close_text_style(true, false);
        self.note_open = false;
    }

    fn place_text_in_frame(&mut self, text: &str, _style: &str, _font_size: f32, _italic: bool, _bold: bool) {
        push_span(self.paragraph_html(), &["dropcaps".to_owned()], text);
        self.paragraph_content.push_str(text);
    }

    fn update_current_paragraph_style(&mut self, _style: &str) {}

    fn paragraph_has_content(&self) -> bool {
        !self.paragraph_content.is_empty()
    }

    fn current_paragraph_style(&self) -> &str {
        &self.paragraph_style
    }
}

/// Escape text for element content and attribute values.
fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quire_styles::lookup;

    use super::*;

    fn style(marker: &str) -> &'static Style {
        lookup("standard", marker).unwrap()
    }

    #[test]
    fn test_text_without_paragraph_opens_one() {
        let mut html = HtmlSink::new("Test");
        html.add_text("a < b");

        assert_eq!(html.inner_html(), "<p><span>a &lt; b</span></p>");
    }

    #[test]
    fn test_embedded_styles_nest_and_close_together() {
        let mut html = HtmlSink::new("Test");
        html.new_paragraph("p");
        html.open_text_style(style("add"), false, false);
        html.add_text("to the ");
        html.open_text_style(style("nd"), false, true);
        html.add_text("Lord");
        html.close_text_style(false, false);
        html.add_text(".");

        assert_eq!(
            html.inner_html(),
            r#"<p class="p"><span class="add">to the </span><span class="add nd">Lord</span><span>.</span></p>"#
        );
    }

    #[test]
    fn test_notes_are_linked_both_ways() {
        let mut html = HtmlSink::new("Test");
        html.new_paragraph("p");
        html.add_text("Text");
        html.add_note("1", "ft", false);
        html.add_note_text("Note.");
        html.close_current_note();

        assert_eq!(
            html.inner_html(),
            concat!(
                r##"<p class="p"><span>Text</span><a href="#note1" id="citation1" class="superscript">1</a></p>"##,
                r##"<div><p class="ft"><a href="#citation1" id="note1">1</a><span> </span><span>Note.</span></p></div>"##,
            )
        );
    }

    #[test]
    fn test_page_break_closes_paragraph() {
        let mut html = HtmlSink::new("Test");
        html.new_paragraph("p");
        html.add_text("One");
        html.new_page_break();

        assert!(!html.paragraph_has_content());
        assert_eq!(html.current_paragraph_style(), "");
        assert_eq!(
            html.inner_html(),
            r#"<p class="p"><span>One</span></p><p class="break"></p>"#
        );
    }

    #[test]
    fn test_hidden_heading_is_skipped() {
        let mut html = HtmlSink::new("Test");
        html.new_heading("Genesis", true);
        html.new_heading("Fallout", false);

        assert_eq!(html.inner_html(), "<h1>Fallout</h1>");
    }

    #[test]
    fn test_image_with_caption() {
        let mut html = HtmlSink::new("Test");
        html.add_image(&Figure::parse(r#"The ark|src="ark.jpg""#));

        assert_eq!(
            html.inner_html(),
            r#"<figure><img src="ark.jpg" alt=""><figcaption>The ark</figcaption></figure>"#
        );
    }

    #[test]
    fn test_full_document() {
        let html = HtmlSink::new("Genesis").to_html();

        assert!(html.starts_with("<!DOCTYPE html>\n<html><head><title>Genesis</title>"));
        assert!(html.contains(r#"href="stylesheet.css""#));
        assert!(html.ends_with("<body></body></html>\n"));
    }
}
