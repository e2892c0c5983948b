//! Stylesheets and the registry that holds them.
//!
//! A [`Stylesheet`] maps marker strings to [`Style`]s. The registry keys
//! stylesheets by identifier so a conversion can pick its variant. Both are
//! immutable once built and safe to share across threads.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use serde::Deserialize;

use crate::standard::{STANDARD_STYLESHEET, standard_styles};
use crate::style::{Parameter, Property, Style, StyleType, TextAlignment, TwoState};

static STANDARD_REGISTRY: LazyLock<StyleRegistry> = LazyLock::new(StyleRegistry::new);

/// Error building a stylesheet or registry.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// Base stylesheet of a derived stylesheet does not exist.
    #[error("Unknown base stylesheet: {0}")]
    UnknownBase(String),
    /// Override targets a marker the base stylesheet does not define.
    #[error("Stylesheet {stylesheet}: unknown marker \\{marker}")]
    UnknownMarker {
        /// Stylesheet being derived.
        stylesheet: String,
        /// Marker named by the override.
        marker: String,
    },
    /// A stylesheet with this identifier is already registered.
    #[error("Duplicate stylesheet: {0}")]
    Duplicate(String),
}

/// One variant of the marker table.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    id: String,
    styles: HashMap<String, Style>,
}

impl Stylesheet {
    /// Create a stylesheet from a list of styles.
    ///
    /// A later style with the same marker replaces an earlier one.
    pub fn new(id: impl Into<String>, styles: impl IntoIterator<Item = Style>) -> Self {
        let styles = styles
            .into_iter()
            .map(|style| (style.marker.clone(), style))
            .collect();
        Self {
            id: id.into(),
            styles,
        }
    }

    /// The built-in stylesheet.
    pub fn standard() -> Self {
        Self::new(STANDARD_STYLESHEET, standard_styles())
    }

    /// Copy `self` under a new identifier, applying per-marker overrides.
    pub fn derive(
        &self,
        id: impl Into<String>,
        overrides: &BTreeMap<String, StyleOverride>,
    ) -> Result<Self, StyleError> {
        let id = id.into();
        let mut styles = self.styles.clone();
        for (marker, change) in overrides {
            let style = styles.get_mut(marker).ok_or_else(|| StyleError::UnknownMarker {
                stylesheet: id.clone(),
                marker: marker.clone(),
            })?;
            change.apply(style);
        }
        Ok(Self { id, styles })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Look up the style for a marker, without backslash, `+` or `*`.
    pub fn get(&self, marker: &str) -> Option<&Style> {
        self.styles.get(marker)
    }

    /// First style of the given type, by marker order.
    ///
    /// Used to find the standard content marker of notes (`ft`, `xt`).
    pub fn first_of_type(&self, style_type: StyleType) -> Option<&Style> {
        self.styles
            .values()
            .filter(|style| style.style_type == style_type)
            .min_by(|a, b| a.marker.cmp(&b.marker))
    }

    /// All styles sorted by marker.
    pub fn styles(&self) -> Vec<&Style> {
        let mut styles: Vec<&Style> = self.styles.values().collect();
        styles.sort_by(|a, b| a.marker.cmp(&b.marker));
        styles
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// Registry of stylesheets keyed by identifier.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    stylesheets: HashMap<String, Stylesheet>,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleRegistry {
    /// Create a registry holding the standard stylesheet.
    pub fn new() -> Self {
        let standard = Stylesheet::standard();
        Self {
            stylesheets: HashMap::from([(standard.id.clone(), standard)]),
        }
    }

    /// The process-wide registry with only the standard stylesheet.
    pub fn standard() -> &'static Self {
        &STANDARD_REGISTRY
    }

    /// Register an additional stylesheet.
    pub fn insert(&mut self, stylesheet: Stylesheet) -> Result<(), StyleError> {
        if self.stylesheets.contains_key(&stylesheet.id) {
            return Err(StyleError::Duplicate(stylesheet.id));
        }
        self.stylesheets.insert(stylesheet.id.clone(), stylesheet);
        Ok(())
    }

    /// Derive a stylesheet from a registered base and register it.
    pub fn derive(
        &mut self,
        id: &str,
        base: &str,
        overrides: &BTreeMap<String, StyleOverride>,
    ) -> Result<(), StyleError> {
        let base = self
            .stylesheets
            .get(base)
            .ok_or_else(|| StyleError::UnknownBase(base.to_owned()))?;
        let derived = base.derive(id, overrides)?;
        self.insert(derived)
    }

    pub fn stylesheet(&self, id: &str) -> Option<&Stylesheet> {
        self.stylesheets.get(id)
    }

    /// Look up a marker in a stylesheet.
    ///
    /// Returns `None` for an unknown stylesheet or an unknown marker.
    pub fn lookup(&self, stylesheet: &str, marker: &str) -> Option<&Style> {
        self.stylesheets.get(stylesheet)?.get(marker)
    }

    /// Registered stylesheet identifiers, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.stylesheets.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

/// Partial change to a style, as read from configuration.
///
/// Unset fields leave the base style untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOverride {
    pub name: Option<String>,
    pub font_size: Option<f32>,
    pub italic: Option<bool>,
    pub bold: Option<bool>,
    pub underline: Option<bool>,
    pub smallcaps: Option<bool>,
    pub alignment: Option<TextAlignment>,
    pub space_before: Option<f32>,
    pub space_after: Option<f32>,
    pub left_margin: Option<f32>,
    pub right_margin: Option<f32>,
    pub first_line_indent: Option<f32>,
    pub note_numbering_sequence: Option<String>,
    pub note_numbering_restart: Option<String>,
    pub starts_new_page: Option<bool>,
    pub at_first_verse: Option<bool>,
    pub restart_paragraph: Option<bool>,
}

impl StyleOverride {
    fn touches_paragraph(&self) -> bool {
        self.font_size.is_some()
            || self.italic.is_some()
            || self.bold.is_some()
            || self.underline.is_some()
            || self.smallcaps.is_some()
            || self.alignment.is_some()
            || self.space_before.is_some()
            || self.space_after.is_some()
            || self.left_margin.is_some()
            || self.right_margin.is_some()
            || self.first_line_indent.is_some()
    }

    fn apply(&self, style: &mut Style) {
        if let Some(name) = &self.name {
            style.name.clone_from(name);
        }

        if self.touches_paragraph() {
            let paragraph = style.paragraph.get_or_insert_with(Default::default);
            let set = |target: &mut TwoState, value: Option<bool>| {
                if let Some(value) = value {
                    *target = TwoState::from(value);
                }
            };
            set(&mut paragraph.italic, self.italic);
            set(&mut paragraph.bold, self.bold);
            set(&mut paragraph.underline, self.underline);
            set(&mut paragraph.smallcaps, self.smallcaps);
            if let Some(alignment) = self.alignment {
                paragraph.alignment = alignment;
            }
            for (target, value) in [
                (&mut paragraph.font_size, self.font_size),
                (&mut paragraph.space_before, self.space_before),
                (&mut paragraph.space_after, self.space_after),
                (&mut paragraph.left_margin, self.left_margin),
                (&mut paragraph.right_margin, self.right_margin),
                (&mut paragraph.first_line_indent, self.first_line_indent),
            ] {
                if let Some(value) = value {
                    *target = value;
                }
            }
        }

        if let Some(sequence) = &self.note_numbering_sequence {
            style.properties.insert(
                Property::NoteNumberingSequence,
                Parameter::Text(sequence.clone()),
            );
        }
        if let Some(restart) = &self.note_numbering_restart {
            if !matches!(restart.as_str(), "never" | "book" | "chapter") {
                tracing::warn!(marker = %style.marker, restart = %restart, "Unrecognized note restart value");
            }
            style.properties.insert(
                Property::NoteNumberingRestart,
                Parameter::Text(restart.clone()),
            );
        }
        for (property, value) in [
            (Property::StartsNewPage, self.starts_new_page),
            (Property::AtFirstVerse, self.at_first_verse),
            (Property::RestartParagraph, self.restart_paragraph),
        ] {
            if let Some(value) = value {
                style.properties.insert(property, Parameter::Bool(value));
            }
        }
    }
}

/// Look up a marker in the process-wide standard registry.
pub fn lookup(stylesheet: &str, marker: &str) -> Option<&'static Style> {
    StyleRegistry::standard().lookup(stylesheet, marker)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_lookup_known_marker() {
        let style = lookup(STANDARD_STYLESHEET, "p").unwrap();
        assert_eq!(style.style_type, StyleType::Paragraph);
        assert_eq!(style.name, "Normal paragraph");
    }

    #[test]
    fn test_lookup_unknown_marker() {
        assert!(lookup(STANDARD_STYLESHEET, "xxx").is_none());
    }

    #[test]
    fn test_lookup_unknown_stylesheet() {
        assert!(lookup("missing", "p").is_none());
    }

    #[test]
    fn test_first_of_type_finds_standard_content() {
        let sheet = Stylesheet::standard();
        let footnote = sheet.first_of_type(StyleType::NoteStandardContent).unwrap();
        let xref = sheet.first_of_type(StyleType::CrossreferenceStandardContent).unwrap();
        assert_eq!(footnote.marker, "ft");
        assert_eq!(xref.marker, "xt");
    }

    #[test]
    fn test_derive_applies_overrides() {
        let mut registry = StyleRegistry::new();
        let overrides = BTreeMap::from([
            (
                "p".to_owned(),
                StyleOverride {
                    font_size: Some(11.0),
                    bold: Some(true),
                    ..StyleOverride::default()
                },
            ),
            (
                "f".to_owned(),
                StyleOverride {
                    note_numbering_sequence: Some("* † ‡".to_owned()),
                    note_numbering_restart: Some("book".to_owned()),
                    ..StyleOverride::default()
                },
            ),
        ]);
        registry.derive("print", STANDARD_STYLESHEET, &overrides).unwrap();

        let p = registry.lookup("print", "p").unwrap();
        let paragraph = p.paragraph.as_ref().unwrap();
        assert_eq!(paragraph.font_size, 11.0);
        assert_eq!(paragraph.bold, TwoState::On);
        assert_eq!(paragraph.first_line_indent, 3.2);

        let f = registry.lookup("print", "f").unwrap();
        assert_eq!(f.parameter::<String>(Property::NoteNumberingSequence), "* † ‡");
        assert_eq!(f.parameter::<String>(Property::NoteNumberingRestart), "book");

        // The base stays untouched.
        let standard = registry.lookup(STANDARD_STYLESHEET, "p").unwrap();
        assert_eq!(standard.paragraph.as_ref().unwrap().font_size, 12.0);
    }

    #[test]
    fn test_derive_unknown_marker() {
        let mut registry = StyleRegistry::new();
        let overrides = BTreeMap::from([("zz".to_owned(), StyleOverride::default())]);
        let err = registry
            .derive("print", STANDARD_STYLESHEET, &overrides)
            .unwrap_err();
        assert!(matches!(err, StyleError::UnknownMarker { .. }));
    }

    #[test]
    fn test_derive_unknown_base() {
        let mut registry = StyleRegistry::new();
        let err = registry.derive("print", "nope", &BTreeMap::new()).unwrap_err();
        assert!(matches!(err, StyleError::UnknownBase(base) if base == "nope"));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut registry = StyleRegistry::new();
        let err = registry.insert(Stylesheet::standard()).unwrap_err();
        assert!(matches!(err, StyleError::Duplicate(_)));
    }

    #[test]
    fn test_ids_sorted() {
        let mut registry = StyleRegistry::new();
        registry
            .insert(Stylesheet::new("archive", Vec::new()))
            .unwrap();
        assert_eq!(registry.ids(), vec!["archive", "standard"]);
    }
}
