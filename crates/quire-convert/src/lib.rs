//! USFM conversion engine.
//!
//! [`Converter`] reads a USFM document in two passes. The first pass
//! harvests metadata such as running headers, chapter labels and published
//! verse markers, and registers note numbering. The second pass renders the
//! document by broadcasting events to one or more [`Sink`]s, while filling a
//! [`Conversion`] with per-verse text, word lists and diagnostics.
//!
//! Conversion never fails on bad input. Anything the converter cannot
//! handle becomes an entry in [`Conversion::info`] or
//! [`Conversion::fallout`].
//!
//! # Example
//!
//! ```
//! use quire_convert::{ConvertOptions, Converter, HtmlSink};
//! use quire_styles::StyleRegistry;
//!
//! let converter = Converter::new(StyleRegistry::standard(), ConvertOptions::default()).unwrap();
//! let mut html = HtmlSink::new("Genesis");
//! let conversion = converter.convert_str("\\id GEN\n\\p\n\\v 1 In the beginning\\xxx", &mut [&mut html]);
//!
//! assert!(html.inner_html().contains("In the beginning"));
//! assert_eq!(conversion.fallout.len(), 1);
//! ```

mod citation;
mod conversion;
mod converter;
mod cursor;
mod error;
mod metadata;
mod sink;
mod verses;

pub use citation::{CitationSequencer, Restart};
pub use conversion::{CapturedAttributes, Conversion};
pub use converter::{ConvertOptions, Converter};
pub use error::ConvertError;
pub use metadata::{Metadata, PassageValue};
pub use sink::{HtmlSink, ParagraphStyle, Sink, TextSink};
pub use verses::VerseTexts;
