//! Splits USFM source into an alternating stream of markers and text runs.

use crate::token::{Marker, Token};

/// Source text after decoding and sentinel normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    /// Set when the input was not valid UTF-8 and had to be decoded lossily.
    pub invalid_utf8: bool,
}

/// Decode raw bytes, trim surrounding whitespace and append the newline sentinel.
pub fn normalize(bytes: &[u8]) -> Normalized {
    let (text, invalid_utf8) = match std::str::from_utf8(bytes) {
        Ok(text) => (text.to_owned(), false),
        Err(_) => (String::from_utf8_lossy(bytes).into_owned(), true),
    };
    Normalized {
        text: with_sentinel(&text),
        invalid_utf8,
    }
}

fn with_sentinel(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len() + 1);
    normalized.push_str(text.trim());
    normalized.push('\n');
    normalized
}

/// Split `raw` into tokens.
///
/// The input is trimmed and terminated with a newline first. A marker runs
/// from its backslash up to whitespace or `*` (both kept with the marker),
/// or up to the next backslash. Everything between markers is a text run.
/// Concatenating [`Token::as_str`] over the result reproduces the
/// normalized input.
pub fn tokenize(raw: &str) -> Vec<Token> {
    let text = with_sentinel(raw);
    let mut tokens = Vec::new();
    let mut rest = text.as_str();

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix('\\') {
            let len = 1 + marker_len(after);
            tokens.push(Token::Marker(Marker::from_raw(&rest[..len])));
            rest = &rest[len..];
        } else {
            let len = rest.find('\\').unwrap_or(rest.len());
            tokens.push(Token::Text(rest[..len].to_owned()));
            rest = &rest[len..];
        }
    }

    tokens
}

/// Length of a marker body following its backslash.
fn marker_len(after: &str) -> usize {
    for (idx, c) in after.char_indices() {
        if c == '\\' {
            return idx;
        }
        if c == '*' || c.is_whitespace() {
            return idx + c.len_utf8();
        }
    }
    after.len()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn raw_tokens(input: &str) -> Vec<String> {
        tokenize(input)
            .iter()
            .map(|token| token.as_str().to_owned())
            .collect()
    }

    #[test]
    fn test_tokenize_splits_markers_and_text() {
        let tokens = raw_tokens("\\id GEN\n\\c 1\n\\p\n\\v 1 In the beginning");

        assert_eq!(
            tokens,
            vec![
                "\\id ",
                "GEN\n",
                "\\c ",
                "1\n",
                "\\p\n",
                "\\v ",
                "1 In the beginning\n",
            ]
        );
    }

    #[test]
    fn test_tokenize_closing_and_embedded_markers() {
        let tokens = tokenize("\\add to the \\+nd Lord\\+nd*\\add*");
        let names: Vec<(&str, bool, bool)> = tokens
            .iter()
            .filter_map(Token::as_marker)
            .map(|m| (m.name(), m.is_closing(), m.is_embedded()))
            .collect();

        assert_eq!(
            names,
            vec![
                ("add", false, false),
                ("nd", false, true),
                ("nd", true, true),
                ("add", true, false),
            ]
        );
    }

    #[test]
    fn test_tokenize_marker_ends_at_backslash() {
        let tokens = raw_tokens("\\p\\v 1 text");

        assert_eq!(tokens, vec!["\\p", "\\v ", "1 text\n"]);
    }

    #[test]
    fn test_tokenize_milestone() {
        let tokens = raw_tokens("\\qt-s |who=\"Pilate\"\\*text\\qt-e\\*");

        assert_eq!(
            tokens,
            vec!["\\qt-s ", "|who=\"Pilate\"", "\\*", "text", "\\qt-e", "\\*", "\n"]
        );
    }

    #[test]
    fn test_tokenize_round_trip() {
        let input = "  \\id MAT\n\\c 1\n\\p\n\\v 1 Jesus\\f + \\fr 1:1 \\ft Note.\\f* went~up.\n\\v 2-3 More  text.  \n";
        let joined: String = tokenize(input).iter().map(Token::as_str).collect();

        assert_eq!(joined, format!("{}\n", input.trim()));
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert_eq!(raw_tokens("   "), vec!["\n"]);
    }

    #[test]
    fn test_normalize_valid_utf8() {
        let normalized = normalize("  \\p Grüß Gott \n\n".as_bytes());

        assert_eq!(normalized.text, "\\p Grüß Gott\n");
        assert!(!normalized.invalid_utf8);
    }

    #[test]
    fn test_normalize_invalid_utf8() {
        let normalized = normalize(b"\\p caf\xe9");

        assert_eq!(normalized.text, "\\p caf\u{fffd}\n");
        assert!(normalized.invalid_utf8);
    }
}
