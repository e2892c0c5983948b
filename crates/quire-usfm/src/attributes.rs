//! Word-level attribute parsing.
//!
//! Handles the `text|key="value"` syntax of `\w`, `\rb`, `\xt` and similar
//! character markers.

/// Visible text of a character span plus its attributes.
///
/// # Example
///
/// ```
/// use quire_usfm::parse_word_attributes;
///
/// let word = parse_word_attributes(r#"gracious|lemma="grace" strong="H1234""#, None).unwrap();
/// assert_eq!(word.text, "gracious");
/// assert_eq!(word.get("strong"), Some("H1234"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordAttributes {
    pub text: String,
    /// Attributes in source order.
    pub attributes: Vec<(String, String)>,
}

impl WordAttributes {
    /// Value of the first attribute named `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Split `text` at its attribute bar.
///
/// Returns `None` when `text` carries no `|`. A bare value without `key=`
/// is stored under `default_attribute`, or under `default` when the style
/// declares none.
#[must_use]
pub fn parse_word_attributes(
    text: &str,
    default_attribute: Option<&str>,
) -> Option<WordAttributes> {
    let (visible, attrs) = text.split_once('|')?;
    let mut word = WordAttributes {
        text: visible.to_owned(),
        attributes: Vec::new(),
    };

    let attrs = attrs.trim();
    if attrs.is_empty() {
        return Some(word);
    }

    if !attrs.contains('=') {
        let key = default_attribute.unwrap_or("default");
        word.attributes.push((key.to_owned(), unquote(attrs).to_owned()));
        return Some(word);
    }

    let mut remaining = attrs;
    while !remaining.is_empty() {
        remaining = remaining.trim_start();
        if let Some((key, value, rest)) = parse_key_value(remaining) {
            word.attributes.push((key.to_owned(), value.to_owned()));
            remaining = rest;
        } else {
            // Skip a character that cannot start a pair.
            let skip = remaining.chars().next().map_or(0, char::len_utf8);
            remaining = &remaining[skip..];
        }
    }

    Some(word)
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Parse one pair: `key="value"`, `key='value'` or `key=value`.
fn parse_key_value(s: &str) -> Option<(&str, &str, &str)> {
    let eq_pos = s.find('=')?;
    let key = s[..eq_pos].trim();

    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }

    let after_eq = &s[eq_pos + 1..];

    for quote in ['"', '\''] {
        if let Some(stripped) = after_eq.strip_prefix(quote) {
            let end_quote = stripped.find(quote)?;
            return Some((key, &stripped[..end_quote], &stripped[end_quote + 1..]));
        }
    }

    let end = after_eq.find(char::is_whitespace).unwrap_or(after_eq.len());
    Some((key, &after_eq[..end], &after_eq[end..]))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn pairs(word: &WordAttributes) -> Vec<(&str, &str)> {
        word.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn test_no_attributes() {
        assert_eq!(parse_word_attributes("gracious", Some("lemma")), None);
    }

    #[test]
    fn test_named_attributes_in_order() {
        let word =
            parse_word_attributes(r#"gracious|lemma="grace" x-morph='Adj' strong=H1234"#, None)
                .unwrap();

        assert_eq!(word.text, "gracious");
        assert_eq!(
            pairs(&word),
            vec![("lemma", "grace"), ("x-morph", "Adj"), ("strong", "H1234")]
        );
    }

    #[test]
    fn test_default_attribute() {
        let word = parse_word_attributes("gracious|grace", Some("lemma")).unwrap();

        assert_eq!(word.text, "gracious");
        assert_eq!(word.get("lemma"), Some("grace"));
    }

    #[test]
    fn test_default_attribute_without_declaration() {
        let word = parse_word_attributes(r#"Jesus|"Iesous""#, None).unwrap();

        assert_eq!(pairs(&word), vec![("default", "Iesous")]);
    }

    #[test]
    fn test_empty_attribute_list() {
        let word = parse_word_attributes("word| ", Some("lemma")).unwrap();

        assert_eq!(word.text, "word");
        assert!(word.attributes.is_empty());
    }

    #[test]
    fn test_unterminated_quote_is_skipped() {
        let word = parse_word_attributes(r#"word|lemma="open"#, None).unwrap();

        assert!(word.get("lemma").is_none());
    }
}
