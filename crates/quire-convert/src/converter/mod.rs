//! Two-pass USFM conversion.
//!
//! The first pass walks every chapter chunk to harvest metadata and register
//! note numbering. The second pass walks the chunks again, broadcasting
//! rendering events to the sinks while collecting verse text and
//! diagnostics into a [`Conversion`].

mod note;
mod preprocess;

use std::collections::HashSet;

use quire_styles::{Category, Paragraph, Property, Style, StyleRegistry, StyleType, Stylesheet};
use quire_usfm::{
    Figure, Marker, Token, english_name, normalize, parse_chapter_number, parse_word_attributes,
    passage_display, peek_verse_number, tokenize, verse_number_to_int,
};
use tracing::{debug, warn};

use crate::citation::{CitationSequencer, Restart};
use crate::conversion::{CapturedAttributes, Conversion};
use crate::cursor::Chunk;
use crate::error::ConvertError;
use crate::sink::{Broadcast, ParagraphStyle, Sink};

/// Paragraph styles whose verse numbers may hang in the left margin.
const POETRY_STYLES: [&str; 5] = ["q", "q1", "q2", "q3", "q4"];

/// Character style wrapping a drop-caps chapter number.
const DROPCAPS_STYLE: &str = "dropcaps";

/// Rendering switches of a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Stylesheet identifier in the registry.
    pub stylesheet: String,
    /// Inserted between a verse number and the verse text.
    pub space_after_verse: String,
    /// Place a deferred chapter number in a frame rather than a drop-caps paragraph style.
    pub chapter_drop_caps_frames: bool,
    /// Use a tab after the verse number in poetry paragraphs.
    pub verse_numbers_left_aligned: bool,
    pub font: String,
    /// Accumulate plain text and headings per verse.
    pub verse_text: bool,
    /// Count text before the first normal paragraph as verse text.
    pub text_starts_immediately: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            stylesheet: quire_styles::STANDARD_STYLESHEET.to_owned(),
            space_after_verse: " ".to_owned(),
            chapter_drop_caps_frames: false,
            verse_numbers_left_aligned: false,
            font: "Cardo".to_owned(),
            verse_text: true,
            text_starts_immediately: true,
        }
    }
}

/// Markers the converter needs by role rather than by name.
#[derive(Debug, Clone)]
struct Markers {
    chapter: String,
    footnote_content: String,
    crossreference_content: String,
}

impl Markers {
    fn resolve(stylesheet: &Stylesheet) -> Self {
        let marker_of = |style_type, fallback: &str| {
            stylesheet
                .first_of_type(style_type)
                .map_or_else(|| fallback.to_owned(), |style| style.marker.clone())
        };
        Self {
            chapter: marker_of(StyleType::Chapter, "c"),
            footnote_content: marker_of(StyleType::NoteStandardContent, "ft"),
            crossreference_content: marker_of(StyleType::CrossreferenceStandardContent, "xt"),
        }
    }
}

/// Converts USFM documents against one stylesheet.
///
/// A converter holds no per-document state; every call to
/// [`Converter::convert`] starts fresh, so one converter may serve many
/// documents. Parallel conversions each need their own sinks.
///
/// # Example
///
/// ```
/// use quire_convert::{ConvertOptions, Converter, TextSink};
/// use quire_styles::StyleRegistry;
///
/// let converter = Converter::new(StyleRegistry::standard(), ConvertOptions::default()).unwrap();
/// let mut text = TextSink::new();
/// let conversion = converter.convert_str("\\id GEN\n\\c 1\n\\p\n\\v 1 In the beginning", &mut [&mut text]);
///
/// assert_eq!(text.text(), "1 In the beginning");
/// assert_eq!(conversion.verses.text()[&1], "In the beginning");
/// ```
#[derive(Debug, Clone)]
pub struct Converter<'r> {
    stylesheet: &'r Stylesheet,
    options: ConvertOptions,
    markers: Markers,
}

impl<'r> Converter<'r> {
    /// Create a converter for the stylesheet named in `options`.
    pub fn new(registry: &'r StyleRegistry, options: ConvertOptions) -> Result<Self, ConvertError> {
        let stylesheet = registry
            .stylesheet(&options.stylesheet)
            .ok_or_else(|| ConvertError::UnknownStylesheet(options.stylesheet.clone()))?;
        Ok(Self {
            stylesheet,
            markers: Markers::resolve(stylesheet),
            options,
        })
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert raw bytes, broadcasting events to every sink in `sinks`.
    ///
    /// Never fails: invalid UTF-8 is decoded lossily and markup problems are
    /// reported in the returned [`Conversion`].
    pub fn convert(&self, input: &[u8], sinks: &mut [&mut dyn Sink]) -> Conversion {
        let normalized = normalize(input);
        let tokens = tokenize(&normalized.text);
        let token_count = tokens.len();
        let chunks = Chunk::split(tokens, &self.markers.chapter);

        let mut run = Run::new(self, Broadcast::new(sinks));
        if normalized.invalid_utf8 {
            warn!("Input is not valid UTF-8, invalid bytes were replaced");
            run.add_fallout("Input is not valid UTF-8, invalid bytes were replaced");
        }

        debug!(tokens = token_count, chunks = chunks.len(), "Collecting metadata");
        run.preprocess(&chunks);
        debug!(tokens = token_count, chunks = chunks.len(), "Rendering");
        run.process(chunks);
        run.finish()
    }

    pub fn convert_str(&self, usfm: &str, sinks: &mut [&mut dyn Sink]) -> Conversion {
        self.convert(usfm.as_bytes(), sinks)
    }
}

/// State of one conversion run.
struct Run<'c, 'a, 's> {
    stylesheet: &'c Stylesheet,
    options: &'c ConvertOptions,
    markers: &'c Markers,
    sinks: Broadcast<'a, 's>,
    conversion: Conversion,
    citations: CitationSequencer,
    book: i32,
    chapter: i32,
    verse: String,
    /// Chapter number waiting to be rendered at the next verse.
    pending_chapter: Option<String>,
    created_styles: HashSet<String>,
    paragraph_style: String,
    processed_books: usize,
    heading_started: bool,
    text_started: bool,
    inside_figure: bool,
    dropcaps: Style,
}

impl<'c, 'a, 's> Run<'c, 'a, 's> {
    fn new(converter: &'c Converter<'_>, sinks: Broadcast<'a, 's>) -> Self {
        Self {
            stylesheet: converter.stylesheet,
            options: &converter.options,
            markers: &converter.markers,
            sinks,
            conversion: Conversion::default(),
            citations: CitationSequencer::new(),
            book: 0,
            chapter: 0,
            verse: "0".to_owned(),
            pending_chapter: None,
            created_styles: HashSet::new(),
            paragraph_style: String::new(),
            processed_books: 0,
            heading_started: false,
            text_started: converter.options.text_starts_immediately,
            inside_figure: false,
            dropcaps: Style::new(
                DROPCAPS_STYLE,
                StyleType::CharacterStyle,
                "Drop caps",
                Category::SpecialFeatures,
            ),
        }
    }

    fn finish(mut self) -> Conversion {
        self.conversion.verses.finish();
        self.conversion
    }

    fn passage(&self) -> String {
        passage_display(self.book, self.chapter, &self.verse)
    }

    fn add_info(&mut self, message: &str) {
        let entry = format!("{} {message}", self.passage());
        self.conversion.info.push(entry);
    }

    fn add_fallout(&mut self, message: &str) {
        let entry = format!("{} {message}", self.passage());
        self.conversion.fallout.push(entry);
    }

    fn verse_number(&self) -> i32 {
        verse_number_to_int(&self.verse)
    }

    fn reset_position(&mut self) {
        self.book = 0;
        self.chapter = 0;
        "0".clone_into(&mut self.verse);
    }

    fn running_header(&self) -> String {
        self.conversion
            .metadata
            .running_header(self.book)
            .map_or_else(|| english_name(self.book).to_owned(), str::to_owned)
    }

    fn process(&mut self, chunks: Vec<Chunk>) {
        self.reset_position();
        for mut chunk in chunks {
            while let Some(token) = chunk.next_token() {
                match token {
                    Token::Marker(marker) => self.process_marker(&mut chunk, &marker),
                    Token::Text(text) => self.process_text(&text),
                }
            }
        }
    }

    fn process_marker(&mut self, chunk: &mut Chunk, marker: &Marker) {
        let stylesheet = self.stylesheet;
        let Some(style) = stylesheet.get(marker.name()) else {
            self.unknown_marker(chunk, marker);
            return;
        };
        let opening = marker.is_opening();
        if opening {
            self.capture_word_attributes(chunk, marker, style);
        }

        match style.style_type {
            StyleType::BookId => {
                if opening {
                    self.book_id(chunk, style);
                }
            }
            StyleType::UsfmVersion => self.info_with_text(chunk, "USFM version:", marker),
            StyleType::FileEncoding => self.info_with_text(chunk, "Text encoding:", marker),
            StyleType::Remark => self.info_with_text(chunk, "Comment:", marker),
            StyleType::RunningHeader
            | StyleType::LongTocText
            | StyleType::ShortTocText
            | StyleType::BookAbbrev
            | StyleType::ChapterLabel
            | StyleType::PublishedChapterMarker
            | StyleType::AlternateChapterNumber => {
                // Harvested in the first pass, not rendered in place.
                if opening {
                    chunk.take_text_following();
                }
            }
            StyleType::PublishedVerseMarker => {
                if opening {
                    chunk.take_text_following();
                } else {
                    chunk.strip_leading_space();
                }
            }
            StyleType::IntroductionEnd => {}
            StyleType::Title | StyleType::Heading => {
                self.sinks.close_text_style(false, false);
                self.new_paragraph(style, true);
                self.heading_started = true;
                self.text_started = false;
            }
            StyleType::Paragraph => {
                self.sinks.close_text_style(false, false);
                self.new_paragraph(style, false);
                self.heading_started = false;
                self.text_started = true;
                if self.options.verse_text {
                    let verse = self.verse_number();
                    self.conversion.verses.start_paragraph(verse, &style.marker);
                }
            }
            StyleType::Chapter => {
                if opening {
                    self.chapter(chunk, style);
                }
            }
            StyleType::Verse => {
                if opening {
                    self.verse(chunk, style);
                }
            }
            StyleType::TableRow => {
                self.sinks.close_text_style(false, false);
                self.add_fallout("Table elements not implemented");
            }
            StyleType::TableHeading | StyleType::TableCell => {
                self.sinks.close_text_style(false, false);
                self.new_paragraph(style, false);
            }
            StyleType::FootnoteWrapper
            | StyleType::EndnoteWrapper
            | StyleType::CrossreferenceWrapper => {
                if opening {
                    self.process_note(chunk, style);
                } else {
                    self.add_fallout(&format!("Note closed without being opened {}", marker_text(marker)));
                }
            }
            StyleType::NoteStandardContent
            | StyleType::NoteContent
            | StyleType::NoteContentWithEndmarker
            | StyleType::NoteParagraph
            | StyleType::CrossreferenceStandardContent
            | StyleType::CrossreferenceContent
            | StyleType::CrossreferenceContentWithEndmarker => {
                self.add_fallout(&format!("Marker not suitable outside a note {}", marker_text(marker)));
            }
            StyleType::CharacterStyle => {
                if opening {
                    self.sinks
                        .each(|sink| sink.open_text_style(style, false, marker.is_embedded()));
                } else {
                    self.sinks.close_text_style(false, marker.is_embedded());
                }
            }
            StyleType::PageBreak => {
                self.sinks.close_text_style(false, false);
                self.sinks.each(|sink| sink.new_page_break());
            }
            StyleType::Figure => {
                if opening {
                    self.sinks.close_text_style(false, false);
                    self.inside_figure = true;
                    self.create_style(
                        &style.marker,
                        style.paragraph.clone().unwrap_or_default(),
                        false,
                        0,
                    );
                } else {
                    self.inside_figure = false;
                }
            }
            StyleType::WordList => {
                if opening {
                    self.add_word_list_entry(chunk, marker);
                }
            }
            StyleType::Milestone => self.milestone(chunk, marker),
            StyleType::Peripheral => {
                self.sinks.close_text_style(false, false);
                let following = chunk.take_text_following();
                self.add_fallout(
                    format!("Unknown peripheral marker {} {}", marker_text(marker), following.trim())
                        .trim_end(),
                );
            }
        }
    }

    fn unknown_marker(&mut self, chunk: &mut Chunk, marker: &Marker) {
        if marker.milestone().is_some() {
            self.milestone(chunk, marker);
            return;
        }
        let shown = marker_text(marker);
        debug!(marker = shown, passage = %self.passage(), "Unknown marker");
        let following = chunk.take_text_following();
        self.add_fallout(
            format!("Unknown marker {}, formatting error: {}", marker_text(marker), following.trim())
                .trim_end(),
        );
    }

    /// Strip `|key="value"` attributes from the text after a character-level marker.
    fn capture_word_attributes(&mut self, chunk: &mut Chunk, marker: &Marker, style: &Style) {
        if !carries_word_attributes(style.style_type) {
            return;
        }
        let Some(word) =
            parse_word_attributes(chunk.peek_text_following(), style.default_attribute.as_deref())
        else {
            return;
        };
        chunk.set_text_following(word.text.clone());
        let captured = CapturedAttributes {
            passage: self.passage(),
            marker: marker.name().to_owned(),
            text: word.text,
            attributes: word.attributes,
        };
        self.conversion.word_attributes.push(captured);
    }

    fn info_with_text(&mut self, chunk: &mut Chunk, label: &str, marker: &Marker) {
        let following = chunk.take_text_following();
        self.add_info(format!("{label} {} {}", marker_text(marker), following.trim()).trim_end());
    }

    fn book_id(&mut self, chunk: &mut Chunk, style: &Style) {
        self.sinks.close_text_style(false, false);
        let line = chunk.take_text_following();
        self.book = preprocess::book_from_id_line(&line);
        self.chapter = 0;
        "0".clone_into(&mut self.verse);
        if self.book == 0 {
            self.add_fallout(&format!("Unknown book identifier \\{} {}", style.marker, line.trim()));
        }

        if style.parameter::<bool>(Property::StartsNewPage) && self.processed_books > 0 {
            self.sinks.each(|sink| sink.new_page_break());
        }
        self.processed_books += 1;
        self.citations.restart(Restart::Book);

        let header = self.running_header();
        self.sinks.each(|sink| sink.new_heading(&header, true));
    }

    fn chapter(&mut self, chunk: &mut Chunk, style: &Style) {
        self.sinks.close_text_style(false, false);
        let text = chunk.take_text_following();
        self.chapter = parse_chapter_number(&text);
        "0".clone_into(&mut self.verse);

        let metadata = &self.conversion.metadata;
        let mut number = metadata
            .published_chapter_marker(self.book, self.chapter)
            .unwrap_or(text.trim())
            .to_owned();
        if let Some(alternate) = metadata.alternate_chapter_number(self.book, self.chapter) {
            number = format!("{number} ({alternate})");
        }
        let deferred =
            style.parameter::<bool>(Property::AtFirstVerse) && !metadata.has_chapter_label(self.book);
        let label = match metadata.chapter_labels(self.book, self.chapter) {
            (_, Some(chapter_label)) => chapter_label.to_owned(),
            (Some(book_label), None) => format!("{book_label} {number}"),
            (None, None) => number.clone(),
        };

        let header = format!("{} {number}", self.running_header());
        self.sinks.each(|sink| sink.new_heading(&header, true));

        if deferred {
            self.pending_chapter = Some(number);
        } else {
            self.new_paragraph(style, true);
            self.sinks.add_text(&label);
        }

        let markers = self.markers;
        self.ensure_note_style(&markers.footnote_content);
        self.citations.restart(Restart::Chapter);
    }

    fn verse(&mut self, chunk: &mut Chunk, style: &Style) {
        self.sinks.close_text_style(false, false);
        if style.parameter::<bool>(Property::RestartParagraph) {
            self.sinks.restart_paragraph();
        }

        let pending = self.pending_chapter.take();
        if let Some(chapter) = &pending {
            self.render_pending_chapter(chapter);
        }

        let following = chunk.take_text_following();
        let trimmed = following.trim_start();
        let number = peek_verse_number(trimmed);
        if number.is_empty() {
            self.add_fallout(&format!("Malformed verse number \\{} {}", style.marker, trimmed.trim()));
            if !trimmed.is_empty() {
                if pending.is_none() {
                    self.sinks.space_if_content();
                }
                chunk.unread(Token::Text(trimmed.to_owned()));
            }
            return;
        }
        number.clone_into(&mut self.verse);

        if pending.is_none() {
            let shown = self
                .conversion
                .metadata
                .published_verse_marker(self.book, self.chapter, &self.verse)
                .unwrap_or(number)
                .to_owned();
            self.sinks.space_if_content();
            self.sinks.each(|sink| sink.open_text_style(style, false, false));
            self.sinks.add_text(&shown);
            self.sinks.close_text_style(false, false);
        }

        if !following.is_empty() {
            let rest = trimmed[number.len()..].trim_start();
            let text = if pending.is_some() {
                rest.to_owned()
            } else {
                format!("{}{rest}", self.verse_spacer())
            };
            chunk.unread(Token::Text(text));
        }
    }

    fn verse_spacer(&self) -> &str {
        if self.options.verse_numbers_left_aligned
            && POETRY_STYLES.contains(&self.paragraph_style.as_str())
        {
            "\t"
        } else {
            &self.options.space_after_verse
        }
    }

    fn render_pending_chapter(&mut self, number: &str) {
        let markers = self.markers;
        if self.options.chapter_drop_caps_frames {
            let paragraph = self
                .stylesheet
                .get(&markers.chapter)
                .and_then(|style| style.paragraph.clone())
                .unwrap_or_default();
            self.sinks.each(|sink| {
                sink.place_text_in_frame(
                    number,
                    &markers.chapter,
                    paragraph.font_size,
                    paragraph.italic.is_on(),
                    paragraph.bold.is_on(),
                );
            });
            return;
        }

        let length = number.chars().count();
        let name = format!("{}_{}{length}", self.paragraph_style, markers.chapter);
        let paragraph = self
            .stylesheet
            .get(&self.paragraph_style)
            .and_then(|style| style.paragraph.clone())
            .unwrap_or_default();
        self.create_style(
            &name,
            Paragraph {
                first_line_indent: 0.0,
                ..paragraph
            },
            false,
            length,
        );
        self.sinks
            .each(|sink| sink.update_current_paragraph_style(&name));

        let dropcaps = &self.dropcaps;
        self.sinks
            .each(|sink| sink.open_text_style(dropcaps, false, false));
        self.sinks.add_text(number);
        self.sinks.close_text_style(false, false);
    }

    fn add_word_list_entry(&mut self, chunk: &Chunk, marker: &Marker) {
        let entry = format!("{} ({})", chunk.peek_text_following().trim(), self.passage());
        self.conversion
            .word_lists
            .entry(marker.name().to_owned())
            .or_default()
            .push(entry);
    }

    fn milestone(&mut self, chunk: &mut Chunk, marker: &Marker) {
        let attributes = chunk.take_text_following();
        chunk.take_milestone_end();
        self.add_info(format!("Milestone {} {}", marker_text(marker), attributes.trim()).trim_end());
    }

    fn process_text(&mut self, text: &str) {
        let text = join_lines(text);
        if text.is_empty() {
            return;
        }
        if self.inside_figure {
            self.add_figure(&text);
            return;
        }

        let text = self.transliterate(text);
        self.sinks.add_text(&text);
        if self.options.verse_text {
            let verse = self.verse_number();
            if self.heading_started {
                self.conversion.verses.add_heading(verse, &text);
            }
            if self.text_started {
                self.conversion
                    .verses
                    .add_text(verse, &text, &self.options.space_after_verse);
            }
        }
    }

    fn add_figure(&mut self, text: &str) {
        let figure = Figure::parse(text);
        if !figure.src.is_empty() {
            self.conversion.image_sources.push(figure.src.clone());
        }
        self.sinks.each(|sink| sink.add_image(&figure));
    }

    /// Replace `~` with a no-break space and `//` with a soft hyphen.
    ///
    /// Every text run that changes is reported as info.
    fn transliterate(&mut self, mut text: String) -> String {
        if text.contains('~') {
            text = text.replace('~', "\u{a0}");
            self.add_info("Converted tilde to non-breaking space");
        }
        if text.contains("//") {
            text = text.replace("//", "\u{ad}");
            self.add_info("Converted double slash to soft hyphen");
        }
        text
    }

    fn new_paragraph(&mut self, style: &Style, keep_with_next: bool) {
        self.create_style(
            &style.marker,
            style.paragraph.clone().unwrap_or_default(),
            keep_with_next,
            0,
        );
        self.sinks.each(|sink| sink.new_paragraph(&style.marker));
        style.marker.clone_into(&mut self.paragraph_style);
    }

    /// Materialize the paragraph style of a note body.
    fn ensure_note_style(&mut self, marker: &str) {
        let paragraph = self
            .stylesheet
            .get(marker)
            .and_then(|style| style.paragraph.clone())
            .unwrap_or_default();
        self.create_style(marker, paragraph, false, 0);
    }

    fn create_style(&mut self, name: &str, paragraph: Paragraph, keep_with_next: bool, drop_caps: usize) {
        if self.created_styles.contains(name) {
            return;
        }
        let style = ParagraphStyle {
            name: name.to_owned(),
            font: self.options.font.clone(),
            paragraph,
            keep_with_next,
            drop_caps,
        };
        self.sinks.each(|sink| sink.create_paragraph_style(&style));
        self.created_styles.insert(name.to_owned());
    }
}

/// Types whose following text may carry `|key="value"` attributes.
fn carries_word_attributes(style_type: StyleType) -> bool {
    matches!(
        style_type,
        StyleType::CharacterStyle
            | StyleType::WordList
            | StyleType::NoteStandardContent
            | StyleType::NoteContent
            | StyleType::NoteContentWithEndmarker
            | StyleType::CrossreferenceStandardContent
            | StyleType::CrossreferenceContent
            | StyleType::CrossreferenceContentWithEndmarker
    )
}

/// Marker as written, without the trailing space, e.g. `\+nd*`.
fn marker_text(marker: &Marker) -> &str {
    marker.raw().trim_end()
}

/// Drop the line break that ends a text run and turn the others into spaces.
fn join_lines(text: &str) -> String {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let text = text.strip_suffix('\r').unwrap_or(text);
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}
