//! Style data model.
//!
//! A [`Style`] describes what a marker means: its semantic [`StyleType`],
//! optional paragraph and character formatting, and a bag of named
//! [`Property`] values that drive category-specific behavior.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Semantic category of a marker.
///
/// The converter dispatches on this value. Every marker in a stylesheet has
/// exactly one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleType {
    BookId,
    UsfmVersion,
    FileEncoding,
    Remark,
    RunningHeader,
    LongTocText,
    ShortTocText,
    BookAbbrev,
    IntroductionEnd,
    Title,
    Heading,
    Paragraph,
    Chapter,
    ChapterLabel,
    PublishedChapterMarker,
    AlternateChapterNumber,
    Verse,
    PublishedVerseMarker,
    TableRow,
    TableHeading,
    TableCell,
    FootnoteWrapper,
    EndnoteWrapper,
    NoteStandardContent,
    NoteContent,
    NoteContentWithEndmarker,
    NoteParagraph,
    CrossreferenceWrapper,
    CrossreferenceStandardContent,
    CrossreferenceContent,
    CrossreferenceContentWithEndmarker,
    CharacterStyle,
    PageBreak,
    Figure,
    WordList,
    Milestone,
    Peripheral,
}

impl StyleType {
    /// Snake-case identifier, as used in listings and config files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BookId => "book_id",
            Self::UsfmVersion => "usfm_version",
            Self::FileEncoding => "file_encoding",
            Self::Remark => "remark",
            Self::RunningHeader => "running_header",
            Self::LongTocText => "long_toc_text",
            Self::ShortTocText => "short_toc_text",
            Self::BookAbbrev => "book_abbrev",
            Self::IntroductionEnd => "introduction_end",
            Self::Title => "title",
            Self::Heading => "heading",
            Self::Paragraph => "paragraph",
            Self::Chapter => "chapter",
            Self::ChapterLabel => "chapter_label",
            Self::PublishedChapterMarker => "published_chapter_marker",
            Self::AlternateChapterNumber => "alternate_chapter_number",
            Self::Verse => "verse",
            Self::PublishedVerseMarker => "published_verse_marker",
            Self::TableRow => "table_row",
            Self::TableHeading => "table_heading",
            Self::TableCell => "table_cell",
            Self::FootnoteWrapper => "footnote_wrapper",
            Self::EndnoteWrapper => "endnote_wrapper",
            Self::NoteStandardContent => "note_standard_content",
            Self::NoteContent => "note_content",
            Self::NoteContentWithEndmarker => "note_content_with_endmarker",
            Self::NoteParagraph => "note_paragraph",
            Self::CrossreferenceWrapper => "crossreference_wrapper",
            Self::CrossreferenceStandardContent => "crossreference_standard_content",
            Self::CrossreferenceContent => "crossreference_content",
            Self::CrossreferenceContentWithEndmarker => "crossreference_content_with_endmarker",
            Self::CharacterStyle => "character_style",
            Self::PageBreak => "page_break",
            Self::Figure => "figure",
            Self::WordList => "word_list",
            Self::Milestone => "milestone",
            Self::Peripheral => "peripheral",
        }
    }

    /// Whether this type opens a footnote, endnote or cross-reference body.
    #[must_use]
    pub fn is_note_wrapper(self) -> bool {
        matches!(
            self,
            Self::FootnoteWrapper | Self::EndnoteWrapper | Self::CrossreferenceWrapper
        )
    }
}

/// Named behavior switches attached to a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    StartsNewPage,
    Deprecated,
    OnLeftPage,
    OnRightPage,
    HasEndmarker,
    AtFirstVerse,
    RestartParagraph,
    NoteNumberingSequence,
    NoteNumberingRestart,
    NotesDump,
    NumericalTest,
}

/// Value of a [`Property`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Parameter {
    Bool(bool),
    Int(i64),
    Text(String),
    /// Presence-only property, such as `deprecated`.
    None,
}

impl From<bool> for Parameter {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Parameter {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Parameter {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Typed extraction of a [`Parameter`].
///
/// Returns `None` when the parameter holds a different kind of value.
pub trait FromParameter: Sized {
    fn from_parameter(parameter: &Parameter) -> Option<Self>;
}

impl FromParameter for bool {
    fn from_parameter(parameter: &Parameter) -> Option<Self> {
        match parameter {
            Parameter::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl FromParameter for i64 {
    fn from_parameter(parameter: &Parameter) -> Option<Self> {
        match parameter {
            Parameter::Int(value) => Some(*value),
            _ => None,
        }
    }
}

impl FromParameter for String {
    fn from_parameter(parameter: &Parameter) -> Option<Self> {
        match parameter {
            Parameter::Text(value) => Some(value.clone()),
            _ => None,
        }
    }
}

/// On/off switch for paragraph formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwoState {
    #[default]
    Off,
    On,
}

impl TwoState {
    #[must_use]
    pub fn is_on(self) -> bool {
        self == Self::On
    }
}

impl From<bool> for TwoState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

/// Character formatting switch, which can also defer to or flip the
/// surrounding formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FourState {
    Off,
    On,
    #[default]
    Inherit,
    Toggle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlignment {
    #[default]
    Start,
    Center,
    End,
    Justify,
}

/// Paragraph formatting. Lengths are in millimeters, font size in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paragraph {
    pub font_size: f32,
    pub italic: TwoState,
    pub bold: TwoState,
    pub underline: TwoState,
    pub smallcaps: TwoState,
    pub alignment: TextAlignment,
    pub space_before: f32,
    pub space_after: f32,
    pub left_margin: f32,
    pub right_margin: f32,
    pub first_line_indent: f32,
}

impl Default for Paragraph {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            italic: TwoState::Off,
            bold: TwoState::Off,
            underline: TwoState::Off,
            smallcaps: TwoState::Off,
            alignment: TextAlignment::Start,
            space_before: 0.0,
            space_after: 0.0,
            left_margin: 0.0,
            right_margin: 0.0,
            first_line_indent: 0.0,
        }
    }
}

/// Character formatting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    pub italic: FourState,
    pub bold: FourState,
    pub underline: FourState,
    pub smallcaps: FourState,
    pub superscript: TwoState,
    pub foreground_color: Option<String>,
    pub background_color: Option<String>,
}

/// Grouping used when listing a stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Identification,
    Introductions,
    Titles,
    ChaptersAndVerses,
    Paragraphs,
    Poetry,
    Lists,
    Tables,
    Footnotes,
    Crossreferences,
    WordsCharacters,
    SpecialFeatures,
    Breaks,
    Milestones,
    Peripherals,
}

/// Semantic description of one marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub marker: String,
    #[serde(rename = "type")]
    pub style_type: StyleType,
    pub name: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<Paragraph>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<Character>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<Property, Parameter>,
    /// Attribute name assumed for an unnamed word-level attribute value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_attribute: Option<String>,
}

impl Style {
    /// Create a style without formatting or properties.
    pub fn new(
        marker: impl Into<String>,
        style_type: StyleType,
        name: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            marker: marker.into(),
            style_type,
            name: name.into(),
            category,
            paragraph: None,
            character: None,
            properties: BTreeMap::new(),
            default_attribute: None,
        }
    }

    #[must_use]
    pub fn with_paragraph(mut self, paragraph: Paragraph) -> Self {
        self.paragraph = Some(paragraph);
        self
    }

    #[must_use]
    pub fn with_character(mut self, character: Character) -> Self {
        self.character = Some(character);
        self
    }

    #[must_use]
    pub fn with_property(mut self, property: Property, parameter: impl Into<Parameter>) -> Self {
        self.properties.insert(property, parameter.into());
        self
    }

    #[must_use]
    pub fn deprecated(mut self) -> Self {
        self.properties.insert(Property::Deprecated, Parameter::None);
        self
    }

    #[must_use]
    pub fn with_default_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.default_attribute = Some(attribute.into());
        self
    }

    /// Whether the style carries `property`, whatever its value.
    pub fn has_property(&self, property: Property) -> bool {
        self.properties.contains_key(&property)
    }

    /// Typed value of `property`, or `T::default()` when absent or of another kind.
    pub fn parameter<T: FromParameter + Default>(&self, property: Property) -> T {
        self.properties
            .get(&property)
            .and_then(T::from_parameter)
            .unwrap_or_default()
    }
}

/// Whether `style` carries `property`.
pub fn has_property(style: &Style, property: Property) -> bool {
    style.has_property(property)
}

/// Typed value of `property` on `style`.
///
/// Absent properties yield the type's default: `false`, `0` or an empty string.
pub fn get_parameter<T: FromParameter + Default>(style: &Style, property: Property) -> T {
    style.parameter(property)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn footnote() -> Style {
        Style::new("f", StyleType::FootnoteWrapper, "Footnote", Category::Footnotes)
            .with_property(Property::NoteNumberingSequence, "1 2 3")
            .with_property(Property::NoteNumberingRestart, "chapter")
    }

    #[test]
    fn test_has_property() {
        let style = footnote();
        assert!(has_property(&style, Property::NoteNumberingSequence));
        assert!(!has_property(&style, Property::Deprecated));
    }

    #[test]
    fn test_get_parameter_typed() {
        let style = footnote();
        let sequence: String = get_parameter(&style, Property::NoteNumberingSequence);
        assert_eq!(sequence, "1 2 3");
    }

    #[test]
    fn test_get_parameter_defaults_when_absent() {
        let style = footnote();
        let dump: String = get_parameter(&style, Property::NotesDump);
        let page: bool = get_parameter(&style, Property::StartsNewPage);
        let number: i64 = get_parameter(&style, Property::NumericalTest);
        assert_eq!(dump, "");
        assert!(!page);
        assert_eq!(number, 0);
    }

    #[test]
    fn test_get_parameter_defaults_on_kind_mismatch() {
        let style = footnote();
        let restart: bool = get_parameter(&style, Property::NoteNumberingRestart);
        assert!(!restart);
    }

    #[test]
    fn test_deprecated_is_presence_only() {
        let style = Style::new("h1", StyleType::RunningHeader, "Running header", Category::Identification)
            .deprecated();
        assert!(style.has_property(Property::Deprecated));
        assert_eq!(style.properties[&Property::Deprecated], Parameter::None);
    }

    #[test]
    fn test_style_type_as_str_matches_serde() {
        let json = serde_json::to_string(&StyleType::CrossreferenceContentWithEndmarker).unwrap();
        assert_eq!(json, format!("\"{}\"", StyleType::CrossreferenceContentWithEndmarker.as_str()));
    }
}
