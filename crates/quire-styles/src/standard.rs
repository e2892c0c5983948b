//! The built-in `standard` stylesheet.

use crate::style::{
    Category, Character, FourState, Paragraph, Property, Style, StyleType, TextAlignment,
    TwoState,
};

/// Identifier of the built-in stylesheet.
pub const STANDARD_STYLESHEET: &str = "standard";

const SEQUENCE_NUMERIC: &str = "1 2 3 4 5 6 7 8 9";
const SEQUENCE_ALPHABETIC: &str = "a b c d e f g h i j k l m n o p q r s t u v w x y z";

#[derive(Clone, Copy)]
enum Emphasis {
    Plain,
    Bold,
    Italic,
}

/// Centered paragraph used by titles and headings.
fn centered(font_size: f32, emphasis: Emphasis, space_before: f32, space_after: f32) -> Paragraph {
    Paragraph {
        font_size,
        bold: TwoState::from(matches!(emphasis, Emphasis::Bold)),
        italic: TwoState::from(matches!(emphasis, Emphasis::Italic)),
        alignment: TextAlignment::Center,
        space_before,
        space_after,
        ..Paragraph::default()
    }
}

/// Body paragraph with margins and first line indent.
fn block(font_size: f32, left_margin: f32, right_margin: f32, first_line_indent: f32) -> Paragraph {
    Paragraph {
        font_size,
        left_margin,
        right_margin,
        first_line_indent,
        ..Paragraph::default()
    }
}

fn aligned(font_size: f32, alignment: TextAlignment) -> Paragraph {
    Paragraph {
        font_size,
        alignment,
        ..Paragraph::default()
    }
}

fn italic_block(left_margin: f32, right_margin: f32, first_line_indent: f32) -> Paragraph {
    Paragraph {
        italic: TwoState::On,
        ..block(12.0, left_margin, right_margin, first_line_indent)
    }
}

fn character(italic: bool, bold: bool) -> Character {
    let state = |on: bool| if on { FourState::On } else { FourState::Inherit };
    Character {
        italic: state(italic),
        bold: state(bold),
        ..Character::default()
    }
}

fn superscript() -> Character {
    Character {
        superscript: TwoState::On,
        ..Character::default()
    }
}

fn smallcaps() -> Character {
    Character {
        smallcaps: FourState::On,
        ..Character::default()
    }
}

fn underlined_bold() -> Character {
    Character {
        bold: FourState::On,
        underline: FourState::On,
        ..Character::default()
    }
}

/// Build every style of the standard stylesheet.
pub(crate) fn standard_styles() -> Vec<Style> {
    let mut styles = Vec::new();
    styles.extend(identification());
    styles.extend(introductions());
    styles.extend(titles_and_headings());
    styles.extend(chapters_and_verses());
    styles.extend(paragraphs());
    styles.extend(poetry_and_lists());
    styles.extend(tables());
    styles.extend(footnotes());
    styles.extend(crossreferences());
    styles.extend(characters());
    styles.extend(specials());
    styles
}

fn identification() -> Vec<Style> {
    use StyleType as T;
    let id = |marker: &str, style_type, name: &str| {
        Style::new(marker, style_type, name, Category::Identification)
    };
    vec![
        id("id", T::BookId, "Identification").with_property(Property::StartsNewPage, true),
        id("usfm", T::UsfmVersion, "USFM version"),
        id("ide", T::FileEncoding, "Encoding"),
        id("sts", T::Remark, "Status"),
        id("rem", T::Remark, "Remark"),
        id("h", T::RunningHeader, "Running header")
            .with_property(Property::OnLeftPage, true)
            .with_property(Property::OnRightPage, true),
        id("h1", T::RunningHeader, "Running header")
            .with_property(Property::OnLeftPage, true)
            .with_property(Property::OnRightPage, true)
            .deprecated(),
        id("h2", T::RunningHeader, "Running header left page")
            .with_property(Property::OnLeftPage, true)
            .with_property(Property::OnRightPage, false)
            .deprecated(),
        id("h3", T::RunningHeader, "Running header right page")
            .with_property(Property::OnLeftPage, false)
            .with_property(Property::OnRightPage, true)
            .deprecated(),
        id("toc1", T::LongTocText, "Long table of contents text"),
        id("toc2", T::ShortTocText, "Short table of contents text"),
        id("toc3", T::BookAbbrev, "Book abbreviation"),
    ]
}

fn introductions() -> Vec<Style> {
    use Emphasis::{Bold, Italic};
    use StyleType as T;
    let intro = |marker: &str, style_type, name: &str| {
        Style::new(marker, style_type, name, Category::Introductions)
    };
    vec![
        intro("imt", T::Title, "Introduction major title").with_paragraph(centered(14.0, Bold, 8.0, 4.0)),
        intro("imt1", T::Title, "Introduction major title 1").with_paragraph(centered(14.0, Bold, 8.0, 4.0)),
        intro("imt2", T::Title, "Introduction major title 2").with_paragraph(centered(13.0, Italic, 6.0, 3.0)),
        intro("imt3", T::Title, "Introduction major title 3").with_paragraph(centered(12.0, Bold, 2.0, 2.0)),
        intro("imt4", T::Title, "Introduction major title 4").with_paragraph(centered(12.0, Italic, 2.0, 2.0)),
        intro("is", T::Heading, "Introduction section heading").with_paragraph(centered(14.0, Bold, 8.0, 4.0)),
        intro("is1", T::Heading, "Introduction section heading 1").with_paragraph(centered(14.0, Bold, 8.0, 4.0)),
        intro("is2", T::Heading, "Introduction section heading 2").with_paragraph(centered(12.0, Bold, 8.0, 4.0)),
        intro("ip", T::Paragraph, "Introduction paragraph").with_paragraph(block(12.0, 0.0, 0.0, 3.2)),
        intro("ipi", T::Paragraph, "Indented introduction paragraph").with_paragraph(block(12.0, 6.4, 6.4, 3.2)),
        intro("im", T::Paragraph, "Introduction flush left paragraph").with_paragraph(block(12.0, 0.0, 0.0, 0.0)),
        intro("imi", T::Paragraph, "Indented introduction flush left paragraph").with_paragraph(block(12.0, 6.4, 6.4, 0.0)),
        intro("ipq", T::Paragraph, "Introduction quote from text").with_paragraph(italic_block(6.4, 6.4, 3.2)),
        intro("imq", T::Paragraph, "Introduction flush left quote from text").with_paragraph(italic_block(6.4, 6.4, 0.0)),
        intro("ipr", T::Paragraph, "Introduction right-aligned paragraph").with_paragraph(Paragraph {
            alignment: TextAlignment::End,
            ..italic_block(6.4, 6.4, 0.0)
        }),
        intro("iq", T::Paragraph, "Introduction poetic line").with_paragraph(italic_block(25.4, 0.0, -19.1)),
        intro("iq1", T::Paragraph, "Introduction poetic line 1").with_paragraph(italic_block(25.4, 0.0, -19.1)),
        intro("iq2", T::Paragraph, "Introduction poetic line 2").with_paragraph(italic_block(25.4, 0.0, -12.7)),
        intro("iq3", T::Paragraph, "Introduction poetic line 3").with_paragraph(italic_block(25.4, 0.0, -6.4)),
        intro("ib", T::Paragraph, "Introduction blank line").with_paragraph(block(10.0, 0.0, 0.0, 0.0)),
        intro("ili", T::Paragraph, "Introduction list item").with_paragraph(block(12.0, 12.7, 0.0, -9.5)),
        intro("ili1", T::Paragraph, "Introduction list item 1").with_paragraph(block(12.0, 12.7, 0.0, -9.5)),
        intro("ili2", T::Paragraph, "Introduction list item 2").with_paragraph(block(12.0, 19.1, 0.0, -9.5)),
        intro("iot", T::Title, "Introduction outline title").with_paragraph(centered(12.0, Bold, 8.0, 4.0)),
        intro("io", T::Heading, "Introduction outline entry").with_paragraph(block(12.0, 12.7, 0.0, 0.0)),
        intro("io1", T::Heading, "Introduction outline entry 1").with_paragraph(block(12.0, 12.7, 0.0, 0.0)),
        intro("io2", T::Heading, "Introduction outline entry 2").with_paragraph(block(12.0, 19.1, 0.0, 0.0)),
        intro("io3", T::Heading, "Introduction outline entry 3").with_paragraph(block(12.0, 25.4, 0.0, 0.0)),
        intro("io4", T::Heading, "Introduction outline entry 4").with_paragraph(block(12.0, 31.8, 0.0, 0.0)),
        intro("ior", T::CharacterStyle, "Introduction outline reference range").with_character(Character::default()),
        intro("iqt", T::CharacterStyle, "Introduction quoted text").with_character(character(true, false)),
        intro("iex", T::Paragraph, "Introduction explanatory text").with_paragraph(Paragraph {
            space_before: 4.0,
            space_after: 4.0,
            ..block(12.0, 0.0, 0.0, 3.2)
        }),
        intro("imte", T::Title, "Introduction major title ending").with_paragraph(centered(20.0, Bold, 8.0, 4.0)),
        intro("imte1", T::Title, "Introduction major title ending 1").with_paragraph(centered(20.0, Bold, 8.0, 4.0)),
        intro("imte2", T::Title, "Introduction major title ending 2").with_paragraph(centered(16.0, Bold, 0.0, 2.0)),
        intro("ie", T::IntroductionEnd, "Introduction end"),
    ]
}

fn titles_and_headings() -> Vec<Style> {
    use Emphasis::{Bold, Italic, Plain};
    use StyleType as T;
    let title = |marker: &str, style_type, name: &str| {
        Style::new(marker, style_type, name, Category::Titles)
    };
    vec![
        title("mt", T::Title, "Major title").with_paragraph(centered(20.0, Bold, 8.0, 4.0)),
        title("mt1", T::Title, "Major title 1").with_paragraph(centered(20.0, Bold, 8.0, 4.0)),
        title("mt2", T::Title, "Major title 2").with_paragraph(centered(16.0, Italic, 0.0, 2.0)),
        title("mt3", T::Title, "Major title 3").with_paragraph(centered(16.0, Bold, 2.0, 2.0)),
        title("mt4", T::Title, "Major title 4").with_paragraph(centered(12.0, Plain, 2.0, 2.0)),
        title("mte", T::Title, "Major title ending").with_paragraph(centered(20.0, Bold, 8.0, 4.0)),
        title("mte1", T::Title, "Major title ending 1").with_paragraph(centered(20.0, Bold, 8.0, 4.0)),
        title("mte2", T::Title, "Major title ending 2").with_paragraph(centered(16.0, Italic, 0.0, 2.0)),
        title("ms", T::Title, "Major section heading").with_paragraph(centered(14.0, Bold, 16.0, 4.0)),
        title("ms1", T::Title, "Major section heading 1").with_paragraph(centered(14.0, Bold, 16.0, 4.0)),
        title("ms2", T::Title, "Major section heading 2").with_paragraph(centered(14.0, Bold, 16.0, 4.0)),
        title("mr", T::Title, "Major section reference range").with_paragraph(centered(12.0, Italic, 0.0, 4.0)),
        title("s", T::Heading, "Section heading").with_paragraph(centered(12.0, Bold, 8.0, 4.0)),
        title("s1", T::Heading, "Section heading 1").with_paragraph(centered(12.0, Bold, 8.0, 4.0)),
        title("s2", T::Heading, "Section heading 2").with_paragraph(centered(12.0, Italic, 8.0, 4.0)),
        title("s3", T::Heading, "Section heading 3").with_paragraph(centered(12.0, Italic, 6.0, 3.0)),
        title("s4", T::Heading, "Section heading 4").with_paragraph(centered(12.0, Italic, 6.0, 3.0)),
        title("sr", T::Heading, "Section reference range").with_paragraph(centered(12.0, Bold, 0.0, 4.0)),
        title("r", T::Heading, "Parallel passage references").with_paragraph(centered(12.0, Italic, 0.0, 4.0)),
        title("rq", T::Paragraph, "Inline quotation references")
            .with_paragraph(Paragraph {
                font_size: 10.0,
                italic: TwoState::On,
                alignment: TextAlignment::End,
                space_after: 4.0,
                ..Paragraph::default()
            })
            .with_property(Property::HasEndmarker, true),
        title("d", T::Title, "Descriptive title").with_paragraph(centered(12.0, Italic, 4.0, 4.0)),
        title("sp", T::Heading, "Speaker identification").with_paragraph(Paragraph {
            italic: TwoState::On,
            space_before: 8.0,
            space_after: 4.0,
            ..Paragraph::default()
        }),
        title("sd", T::Paragraph, "Semantic division").with_paragraph(Paragraph {
            font_size: 20.0,
            space_before: 24.0,
            space_after: 24.0,
            ..Paragraph::default()
        }),
    ]
}

fn chapters_and_verses() -> Vec<Style> {
    use StyleType as T;
    let cv = |marker: &str, style_type, name: &str| {
        Style::new(marker, style_type, name, Category::ChaptersAndVerses)
    };
    vec![
        cv("c", T::Chapter, "Chapter number")
            .with_paragraph(Paragraph {
                font_size: 18.0,
                bold: TwoState::On,
                space_before: 8.0,
                space_after: 4.0,
                ..Paragraph::default()
            })
            .with_property(Property::AtFirstVerse, true)
            .with_property(Property::OnLeftPage, true)
            .with_property(Property::OnRightPage, true),
        cv("ca", T::AlternateChapterNumber, "Alternate chapter number"),
        cv("cl", T::ChapterLabel, "Chapter label"),
        cv("cp", T::PublishedChapterMarker, "Published chapter character"),
        cv("cd", T::Paragraph, "Chapter description").with_paragraph(Paragraph {
            font_size: 11.0,
            space_before: 8.0,
            space_after: 4.0,
            ..Paragraph::default()
        }),
        cv("v", T::Verse, "Verse number")
            .with_character(superscript())
            .with_property(Property::RestartParagraph, false),
        cv("vp", T::PublishedVerseMarker, "Published verse character"),
    ]
}

fn paragraphs() -> Vec<Style> {
    use StyleType as T;
    let para = |marker: &str, name: &str, paragraph: Paragraph| {
        Style::new(marker, T::Paragraph, name, Category::Paragraphs).with_paragraph(paragraph)
    };
    vec![
        para("p", "Normal paragraph", block(12.0, 0.0, 0.0, 3.2)),
        para("m", "Continuation paragraph", block(12.0, 0.0, 0.0, 0.0)),
        para("po", "Paragraph opening an epistle", Paragraph {
            space_before: 4.0,
            space_after: 4.0,
            ..block(12.0, 0.0, 0.0, 3.2)
        }),
        para("pr", "Right-aligned paragraph", aligned(12.0, TextAlignment::End)),
        para("cls", "Closure of an epistle", aligned(12.0, TextAlignment::End)),
        para("pmo", "Embedded text opening", block(12.0, 6.4, 6.4, 0.0)),
        para("pm", "Embedded text paragraph", block(12.0, 6.4, 6.4, 3.2)),
        para("pmc", "Embedded text closing", block(12.0, 6.4, 6.4, 0.0)),
        para("pmr", "Embedded text refrain", Paragraph {
            alignment: TextAlignment::End,
            ..block(12.0, 6.4, 6.4, 0.0)
        }),
        para("pi", "Indented paragraph", block(12.0, 6.4, 6.4, 3.2)),
        para("pi1", "Indented paragraph 1", block(12.0, 6.4, 6.4, 3.2)),
        para("pi2", "Indented paragraph 2", block(12.0, 12.7, 6.4, 3.2)),
        para("pi3", "Indented paragraph 3", block(12.0, 19.1, 6.4, 3.2)),
        para("mi", "Indented flush left paragraph", block(12.0, 6.4, 6.4, 0.0)),
        para("nb", "No break with previous paragraph", block(12.0, 0.0, 0.0, 0.0)),
        para("pc", "Centered paragraph", aligned(12.0, TextAlignment::Center)),
        para("ph", "Indented paragraph with hanging indent", block(12.0, 12.7, 0.0, -9.5)).deprecated(),
        para("ph1", "Indented paragraph with hanging indent 1", block(12.0, 12.7, 0.0, -9.5)).deprecated(),
        para("ph2", "Indented paragraph with hanging indent 2", block(12.0, 19.1, 0.0, -9.5)).deprecated(),
        para("ph3", "Indented paragraph with hanging indent 3", block(12.0, 25.4, 0.0, -9.5)).deprecated(),
        para("b", "Blank line", block(10.0, 0.0, 0.0, 0.0)),
        para("lit", "Liturgical note", Paragraph {
            bold: TwoState::On,
            ..Paragraph::default()
        }),
    ]
}

fn poetry_and_lists() -> Vec<Style> {
    use StyleType as T;
    let poetry = |marker: &str, name: &str, paragraph: Paragraph| {
        Style::new(marker, T::Paragraph, name, Category::Poetry).with_paragraph(paragraph)
    };
    let list = |marker: &str, name: &str, paragraph: Paragraph| {
        Style::new(marker, T::Paragraph, name, Category::Lists).with_paragraph(paragraph)
    };
    vec![
        poetry("q", "Poetic line", block(12.0, 31.8, 0.0, -25.4)),
        poetry("q1", "Poetic line 1", block(12.0, 31.8, 0.0, -25.4)),
        poetry("q2", "Poetic line 2", block(12.0, 31.8, 0.0, -19.1)),
        poetry("q3", "Poetic line 3", block(12.0, 31.8, 0.0, -12.7)),
        poetry("qr", "Right-aligned poetic line", aligned(12.0, TextAlignment::End)),
        poetry("qc", "Centered poetic line", aligned(12.0, TextAlignment::Center)),
        poetry("qa", "Acrostic heading", Paragraph {
            italic: TwoState::On,
            ..Paragraph::default()
        }),
        poetry("qm", "Embedded text poetic line", block(12.0, 25.4, 0.0, -19.1)),
        poetry("qm1", "Embedded text poetic line 1", block(12.0, 25.4, 0.0, -19.1)),
        poetry("qm2", "Embedded text poetic line 2", block(12.0, 25.4, 0.0, -12.7)),
        poetry("qm3", "Embedded text poetic line 3", block(12.0, 25.4, 0.0, -6.4)),
        poetry("qd", "Hebrew note", block(12.0, 6.4, 0.0, 0.0)),
        Style::new("qs", T::CharacterStyle, "Selah", Category::Poetry).with_character(character(true, false)),
        Style::new("qac", T::CharacterStyle, "Acrostic letter", Category::Poetry)
            .with_character(character(true, false)),
        list("lh", "List header", block(12.0, 0.0, 0.0, 3.2)),
        list("li", "List entry", block(12.0, 12.7, 0.0, -9.5)),
        list("li1", "List entry 1", block(12.0, 12.7, 0.0, -9.5)),
        list("li2", "List entry 2", block(12.0, 19.1, 0.0, -9.5)),
        list("li3", "List entry 3", block(12.0, 25.4, 0.0, -9.5)),
        list("li4", "List entry 4", block(12.0, 31.8, 0.0, -9.5)),
        list("lf", "List footer", block(12.0, 10.0, 0.0, 0.0)),
        list("lim", "Embedded list entry", block(12.0, 19.1, 6.4, -9.5)),
        list("lim1", "Embedded list entry 1", block(12.0, 19.1, 6.4, -9.5)),
        list("lim2", "Embedded list entry 2", block(12.0, 25.4, 0.0, -9.5)),
        Style::new("litl", T::CharacterStyle, "List entry total", Category::Lists)
            .with_character(Character::default()),
        Style::new("lik", T::CharacterStyle, "List entry key", Category::Lists)
            .with_character(Character::default()),
        Style::new("liv", T::CharacterStyle, "List entry value", Category::Lists)
            .with_character(Character::default()),
    ]
}

fn tables() -> Vec<Style> {
    let mut styles = vec![Style::new("tr", StyleType::TableRow, "Table row", Category::Tables)];
    for column in 1..=4 {
        styles.push(
            Style::new(format!("th{column}"), StyleType::TableHeading, format!("Table column {column} heading"), Category::Tables)
                .with_paragraph(block(12.0, 0.0, 0.0, 0.0)),
        );
        styles.push(
            Style::new(format!("thr{column}"), StyleType::TableHeading, format!("Right-aligned table column {column} heading"), Category::Tables)
                .with_paragraph(aligned(12.0, TextAlignment::End)),
        );
        styles.push(
            Style::new(format!("tc{column}"), StyleType::TableCell, format!("Table column {column} cell"), Category::Tables)
                .with_paragraph(block(12.0, 0.0, 0.0, 0.0)),
        );
        styles.push(
            Style::new(format!("tcr{column}"), StyleType::TableCell, format!("Right-aligned table column {column} cell"), Category::Tables)
                .with_paragraph(aligned(12.0, TextAlignment::End)),
        );
    }
    styles
}

fn footnotes() -> Vec<Style> {
    use StyleType as T;
    let note = |marker: &str, style_type, name: &str| {
        Style::new(marker, style_type, name, Category::Footnotes)
    };
    vec![
        note("f", T::FootnoteWrapper, "Footnote")
            .with_character(Character::default())
            .with_property(Property::NoteNumberingSequence, SEQUENCE_NUMERIC)
            .with_property(Property::NoteNumberingRestart, "chapter"),
        note("fe", T::EndnoteWrapper, "Endnote")
            .with_character(Character::default())
            .with_property(Property::NoteNumberingSequence, SEQUENCE_NUMERIC)
            .with_property(Property::NotesDump, "book"),
        note("ef", T::FootnoteWrapper, "Extended footnote")
            .with_character(Character::default())
            .with_property(Property::NoteNumberingSequence, SEQUENCE_NUMERIC)
            .with_property(Property::NoteNumberingRestart, "chapter"),
        note("fr", T::NoteContent, "Footnote origin reference").with_character(character(false, true)),
        note("fq", T::NoteContent, "Footnote translation quotation").with_character(character(true, false)),
        note("fqa", T::NoteContent, "Footnote alternate translation").with_character(character(true, false)),
        note("fk", T::NoteContent, "Footnote keyword").with_character(character(true, true)),
        note("fl", T::NoteContent, "Footnote label text").with_character(character(true, true)),
        note("fw", T::NoteContent, "Footnote witness list").with_character(Character::default()),
        note("fp", T::NoteParagraph, "Footnote paragraph").with_paragraph(block(12.0, 3.0, 0.0, 3.0)),
        note("fv", T::NoteContentWithEndmarker, "Footnote verse number").with_character(superscript()),
        note("ft", T::NoteStandardContent, "Footnote text").with_character(Character::default()),
        note("fdc", T::NoteContentWithEndmarker, "Footnote deuterocanonical content")
            .with_character(Character::default())
            .deprecated(),
        note("fm", T::NoteContentWithEndmarker, "Footnote reference mark").with_character(superscript()),
    ]
}

fn crossreferences() -> Vec<Style> {
    use StyleType as T;
    let xref = |marker: &str, style_type, name: &str| {
        Style::new(marker, style_type, name, Category::Crossreferences)
    };
    vec![
        xref("x", T::CrossreferenceWrapper, "Cross reference")
            .with_character(Character::default())
            .with_property(Property::NoteNumberingSequence, SEQUENCE_ALPHABETIC)
            .with_property(Property::NoteNumberingRestart, "chapter"),
        xref("ex", T::CrossreferenceWrapper, "Extended cross reference")
            .with_character(Character::default())
            .with_property(Property::NoteNumberingSequence, SEQUENCE_ALPHABETIC)
            .with_property(Property::NoteNumberingRestart, "chapter"),
        xref("xo", T::CrossreferenceContent, "Cross reference origin reference").with_character(character(false, true)),
        xref("xk", T::CrossreferenceContent, "Cross reference keyword").with_character(character(true, false)),
        xref("xq", T::CrossreferenceContent, "Cross reference quotation").with_character(character(true, false)),
        xref("xt", T::CrossreferenceStandardContent, "Cross reference target references")
            .with_character(Character::default())
            .with_default_attribute("link-href"),
        xref("xta", T::CrossreferenceContent, "Cross reference target references added text")
            .with_character(Character::default()),
        xref("xop", T::CrossreferenceContentWithEndmarker, "Published cross reference origin text")
            .with_character(Character::default()),
        xref("xot", T::CrossreferenceContentWithEndmarker, "Old Testament cross reference")
            .with_character(Character::default()),
        xref("xnt", T::CrossreferenceContentWithEndmarker, "New Testament cross reference")
            .with_character(Character::default()),
        xref("xdc", T::CrossreferenceContentWithEndmarker, "Deuterocanonical cross reference")
            .with_character(Character::default())
            .deprecated(),
    ]
}

fn characters() -> Vec<Style> {
    let chr = |marker: &str, name: &str, character: Character| {
        Style::new(marker, StyleType::CharacterStyle, name, Category::WordsCharacters)
            .with_character(character)
    };
    vec![
        chr("add", "Translator's addition", character(true, false)),
        chr("bk", "Quoted book title", character(true, false)),
        chr("dc", "Deuterocanonical addition", character(true, false)),
        chr("k", "Keyword", character(true, true)),
        chr("nd", "Name of God", smallcaps()),
        chr("ord", "Ordinal number ending", superscript()),
        chr("pn", "Proper name", underlined_bold()),
        chr("png", "Geographic proper name", underlined_bold()),
        chr("addpn", "Proper name within added text", character(true, false)).deprecated(),
        chr("qt", "Quoted text", character(true, false)),
        chr("sig", "Signature of the author", character(true, false)),
        chr("sls", "Secondary language source", character(true, false)),
        chr("tl", "Transliterated word", character(true, false)),
        chr("wj", "Words of Jesus", Character {
            foreground_color: Some("#FF0000".to_owned()),
            ..Character::default()
        }),
        chr("em", "Emphasis", character(true, false)),
        chr("bd", "Bold", character(false, true)),
        chr("it", "Italic", character(true, false)),
        chr("bdit", "Bold and italic", character(true, true)),
        chr("no", "Normal text", Character::default()),
        chr("sc", "Small caps", smallcaps()),
        chr("sup", "Superscript", superscript()),
        chr("pro", "Pronunciation", character(true, false)).deprecated(),
        chr("rb", "Ruby glossing", Character::default()).with_default_attribute("gloss"),
    ]
}

fn specials() -> Vec<Style> {
    use StyleType as T;
    let mut styles = vec![
        Style::new("pb", T::PageBreak, "Page break", Category::Breaks),
        Style::new("fig", T::Figure, "Figure", Category::SpecialFeatures)
            .with_paragraph(aligned(12.0, TextAlignment::Center)),
        Style::new("w", T::WordList, "Wordlist or glossary entry", Category::SpecialFeatures)
            .with_default_attribute("lemma"),
        Style::new("wg", T::WordList, "Greek word list entry", Category::SpecialFeatures),
        Style::new("wh", T::WordList, "Hebrew word list entry", Category::SpecialFeatures),
        Style::new("ndx", T::WordList, "Subject index entry", Category::SpecialFeatures),
        Style::new("periph", T::Peripheral, "Peripheral division", Category::Peripherals),
    ];
    for (base, name) in [
        ("qt", "Quotation speaker"),
        ("qt1", "Quotation speaker level 1"),
        ("qt2", "Quotation speaker level 2"),
        ("ts", "Translator's section"),
    ] {
        styles.push(Style::new(format!("{base}-s"), T::Milestone, format!("{name} start"), Category::Milestones));
        styles.push(Style::new(format!("{base}-e"), T::Milestone, format!("{name} end"), Category::Milestones));
    }
    styles
}
