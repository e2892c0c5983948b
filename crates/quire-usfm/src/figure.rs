//! Figure (`\fig ...\fig*`) field parsing.

use crate::attributes::parse_word_attributes;

/// Fields of a figure, from either the positional or the attributed form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Figure {
    pub caption: String,
    pub alt: String,
    /// Image file name, resolved against the asset store by the caller.
    pub src: String,
    pub size: String,
    pub loc: String,
    pub copyright: String,
    pub reference: String,
}

impl Figure {
    /// Parse the text between `\fig` and `\fig*`.
    ///
    /// Supports `desc|file|size|loc|copy|cap|ref` as well as
    /// `caption|src="file" size="col" ref="1.1"`.
    ///
    /// # Example
    ///
    /// ```
    /// use quire_usfm::Figure;
    ///
    /// let fig = Figure::parse(r#"The ark|src="ark.jpg" size="col" ref="6:14""#);
    /// assert_eq!(fig.caption, "The ark");
    /// assert_eq!(fig.src, "ark.jpg");
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let attributed = text
            .split_once('|')
            .is_some_and(|(_, attrs)| attrs.contains('='));

        if attributed {
            Self::parse_attributed(text)
        } else {
            Self::parse_positional(text)
        }
    }

    fn parse_attributed(text: &str) -> Self {
        let Some(word) = parse_word_attributes(text, Some("src")) else {
            return Self::default();
        };
        let mut figure = Self {
            caption: word.text.trim().to_owned(),
            ..Self::default()
        };
        for (key, value) in word.attributes {
            match key.as_str() {
                "alt" => figure.alt = value,
                "src" | "file" => figure.src = value,
                "size" => figure.size = value,
                "loc" => figure.loc = value,
                "copy" => figure.copyright = value,
                "ref" => figure.reference = value,
                _ => {}
            }
        }
        figure
    }

    fn parse_positional(text: &str) -> Self {
        let mut fields = text.split('|').map(|field| field.trim().to_owned());
        let mut next = || fields.next().unwrap_or_default();
        let alt = next();
        let src = next();
        let size = next();
        let loc = next();
        let copyright = next();
        let caption = next();
        let reference = next();
        Self {
            caption,
            alt,
            src,
            size,
            loc,
            copyright,
            reference,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_positional_form() {
        let fig = Figure::parse("Noah's ark|ark.jpg|span|GEN 6|(c) 2001|The ark|6:14");

        assert_eq!(
            fig,
            Figure {
                caption: "The ark".to_owned(),
                alt: "Noah's ark".to_owned(),
                src: "ark.jpg".to_owned(),
                size: "span".to_owned(),
                loc: "GEN 6".to_owned(),
                copyright: "(c) 2001".to_owned(),
                reference: "6:14".to_owned(),
            }
        );
    }

    #[test]
    fn test_positional_form_missing_fields() {
        let fig = Figure::parse("desc|map.png");

        assert_eq!(fig.alt, "desc");
        assert_eq!(fig.src, "map.png");
        assert_eq!(fig.caption, "");
    }

    #[test]
    fn test_attributed_form() {
        let fig = Figure::parse(
            r#"At once they left their nets.|src="avnt016.tif" size="span" ref="1.18" alt="Fishermen""#,
        );

        assert_eq!(fig.caption, "At once they left their nets.");
        assert_eq!(fig.src, "avnt016.tif");
        assert_eq!(fig.size, "span");
        assert_eq!(fig.reference, "1.18");
        assert_eq!(fig.alt, "Fishermen");
    }
}
