//! Chapter and verse number parsing.

/// Read the verse number at the start of `text`.
///
/// Accepts digits with comma or hyphen continuations, and a single
/// lowercase letter directly after a digit (`2b,3`, `2a-3b`). Stops at
/// the first character that cannot belong to the number, so the caller can
/// slice the remainder with `&text[number.len()..]`.
pub fn peek_verse_number(text: &str) -> &str {
    let mut end = 0;
    let mut previous: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        let accepted = match c {
            '0'..='9' | ',' | '-' => true,
            'a'..='z' => {
                previous.is_some_and(|p| p.is_ascii_digit())
                    && !chars.peek().is_some_and(|&(_, next)| next.is_alphabetic())
            }
            _ => false,
        };
        if !accepted {
            break;
        }
        end = idx + c.len_utf8();
        previous = Some(c);
    }

    &text[..end]
}

/// Leading integer of `text`, ignoring leading whitespace; 0 when absent.
pub fn parse_chapter_number(text: &str) -> i32 {
    leading_int(text.trim_start())
}

/// Numeric value of a verse number such as `2-3` or `4a`; 0 when absent.
pub fn verse_number_to_int(verse: &str) -> i32 {
    leading_int(verse.trim_start())
}

fn leading_int(text: &str) -> i32 {
    let digits = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text[..digits].parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_peek_verse_number_plain() {
        assert_eq!(peek_verse_number("1"), "1");
        assert_eq!(peek_verse_number("12 In the beginning"), "12");
    }

    #[test]
    fn test_peek_verse_number_ranges_and_letters() {
        assert_eq!(peek_verse_number("1a"), "1a");
        assert_eq!(peek_verse_number("2-3"), "2-3");
        assert_eq!(peek_verse_number("2b,3"), "2b,3");
        assert_eq!(peek_verse_number("2b,3, 4"), "2b,3,");
        assert_eq!(peek_verse_number("2a-3b And he said"), "2a-3b");
    }

    #[test]
    fn test_peek_verse_number_without_space() {
        assert_eq!(peek_verse_number("1-2\u{201c}Moi"), "1-2");
        assert_eq!(peek_verse_number("3and"), "3");
    }

    #[test]
    fn test_peek_verse_number_missing() {
        assert_eq!(peek_verse_number("a text"), "");
        assert_eq!(peek_verse_number(""), "");
    }

    #[test]
    fn test_parse_chapter_number() {
        assert_eq!(parse_chapter_number("1\n"), 1);
        assert_eq!(parse_chapter_number(" 150 "), 150);
        assert_eq!(parse_chapter_number("x"), 0);
    }

    #[test]
    fn test_verse_number_to_int() {
        assert_eq!(verse_number_to_int("2-3"), 2);
        assert_eq!(verse_number_to_int("4a"), 4);
        assert_eq!(verse_number_to_int(""), 0);
    }
}
