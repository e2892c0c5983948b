//! Marker style registry for USFM conversion.
//!
//! Every backslash marker in a USFM document resolves to a [`Style`] that
//! tells the converter what the marker means and how its text is formatted.
//! Styles live in a [`Stylesheet`]; a [`StyleRegistry`] holds the built-in
//! `standard` stylesheet plus any variants derived from it.
//!
//! # Example
//!
//! ```
//! use quire_styles::{Property, StyleType, lookup};
//!
//! let chapter = lookup("standard", "c").unwrap();
//! assert_eq!(chapter.style_type, StyleType::Chapter);
//! assert!(chapter.parameter::<bool>(Property::AtFirstVerse));
//! ```

mod registry;
mod standard;
mod style;

pub use registry::{StyleError, StyleOverride, StyleRegistry, Stylesheet, lookup};
pub use standard::STANDARD_STYLESHEET;
pub use style::{
    Category, Character, FourState, FromParameter, Paragraph, Parameter, Property, Style,
    StyleType, TextAlignment, TwoState, get_parameter, has_property,
};
