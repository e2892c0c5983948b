//! Token cursor over one chapter chunk.
//!
//! The main loop and the note loop advance the same cursor, so a note
//! consumes its tokens for the caller too.

use std::mem;

use quire_usfm::{Marker, Token};

/// All tokens from one chapter marker up to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Chunk {
    items: Vec<Token>,
    pos: usize,
}

impl Chunk {
    /// Split a token stream before every opening `chapter_marker`.
    pub(crate) fn split(tokens: Vec<Token>, chapter_marker: &str) -> Vec<Self> {
        let mut chunks = Vec::new();
        let mut items = Vec::new();
        for token in tokens {
            let starts_chapter = token
                .as_marker()
                .is_some_and(|m| m.is_opening() && m.name() == chapter_marker);
            if starts_chapter && !items.is_empty() {
                chunks.push(Self::new(mem::take(&mut items)));
            }
            items.push(token);
        }
        if !items.is_empty() {
            chunks.push(Self::new(items));
        }
        chunks
    }

    fn new(items: Vec<Token>) -> Self {
        Self { items, pos: 0 }
    }

    pub(crate) fn tokens(&self) -> &[Token] {
        &self.items
    }

    /// Take the next token, leaving an empty text run in its place.
    pub(crate) fn next_token(&mut self) -> Option<Token> {
        let item = self.items.get_mut(self.pos)?;
        self.pos += 1;
        Some(mem::replace(item, Token::Text(String::new())))
    }

    /// Put a token back so the next call to [`Chunk::next_token`] returns it.
    pub(crate) fn unread(&mut self, token: Token) {
        if self.pos == 0 {
            self.items.insert(0, token);
        } else {
            self.pos -= 1;
            self.items[self.pos] = token;
        }
    }

    /// Text run right after the current marker, if any, without consuming it.
    pub(crate) fn peek_text_following(&self) -> &str {
        self.items
            .get(self.pos)
            .and_then(Token::as_text)
            .unwrap_or_default()
    }

    /// Consume and return the text run right after the current marker.
    pub(crate) fn take_text_following(&mut self) -> String {
        match self.items.get_mut(self.pos) {
            Some(Token::Text(text)) => {
                let text = mem::take(text);
                self.pos += 1;
                text
            }
            _ => String::new(),
        }
    }

    /// Replace the text run right after the current marker.
    pub(crate) fn set_text_following(&mut self, replacement: String) {
        if let Some(Token::Text(text)) = self.items.get_mut(self.pos) {
            *text = replacement;
        }
    }

    /// Drop a single space at the start of the text run after the current marker.
    pub(crate) fn strip_leading_space(&mut self) {
        if let Some(rest) = self.peek_text_following().strip_prefix(' ') {
            let rest = rest.to_owned();
            self.set_text_following(rest);
        }
    }

    /// Consume a bare `\*` if it comes next.
    pub(crate) fn take_milestone_end(&mut self) -> bool {
        let is_end = self
            .items
            .get(self.pos)
            .and_then(Token::as_marker)
            .is_some_and(Marker::is_milestone_end);
        if is_end {
            self.pos += 1;
        }
        is_end
    }

    /// Take the citation character at the start of the next text run.
    ///
    /// The rest of the run is left-trimmed in place. Returns `None` at the
    /// end of the chunk or when a marker follows.
    pub(crate) fn take_citation(&mut self) -> Option<String> {
        let text = self.peek_text_following();
        let mut chars = text.chars();
        let citation = chars.next()?.to_string();
        let rest = chars.as_str().trim_start().to_owned();
        self.set_text_following(rest);
        Some(citation.trim().to_owned())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quire_usfm::tokenize;

    use super::*;

    fn chunk(usfm: &str) -> Chunk {
        Chunk::new(tokenize(usfm))
    }

    #[test]
    fn test_split_at_chapter_markers() {
        let chunks = Chunk::split(tokenize("\\id GEN\n\\c 1\n\\v 1 A\n\\c 2\n\\v 1 B"), "c");
        let firsts: Vec<&str> = chunks.iter().map(|c| c.tokens()[0].as_str()).collect();

        assert_eq!(firsts, ["\\id ", "\\c ", "\\c "]);
    }

    #[test]
    fn test_take_text_following() {
        let mut chunk = chunk("\\v 1 In\\p");
        chunk.next_token();

        assert_eq!(chunk.peek_text_following(), "1 In");
        assert_eq!(chunk.take_text_following(), "1 In");
        assert_eq!(chunk.take_text_following(), "");
        assert_eq!(chunk.next_token().unwrap().as_marker().map(Marker::name), Some("p"));
    }

    #[test]
    fn test_unread_replaces_consumed_token() {
        let mut chunk = chunk("\\v 1 In the beginning");
        chunk.next_token();
        chunk.take_text_following();
        chunk.unread(Token::Text(" In the beginning\n".to_owned()));

        assert_eq!(chunk.next_token(), Some(Token::Text(" In the beginning\n".to_owned())));
        assert_eq!(chunk.next_token(), None);
    }

    #[test]
    fn test_take_citation() {
        let mut chunk = chunk("\\f + \\fr 1:1");
        chunk.next_token();

        assert_eq!(chunk.take_citation().as_deref(), Some("+"));
        assert_eq!(chunk.peek_text_following(), "");
    }

    #[test]
    fn test_take_citation_trims_rest() {
        let mut chunk = chunk("\\x a  Gen 1:1\\x*");
        chunk.next_token();

        assert_eq!(chunk.take_citation().as_deref(), Some("a"));
        assert_eq!(chunk.peek_text_following(), "Gen 1:1");
    }

    #[test]
    fn test_strip_leading_space_once() {
        let mut chunk = chunk("\\vp*  In");
        chunk.next_token();
        chunk.strip_leading_space();

        assert_eq!(chunk.peek_text_following(), " In\n");
    }

    #[test]
    fn test_take_milestone_end() {
        let mut chunk = chunk("\\qt-e\\*text");
        chunk.next_token();

        assert!(chunk.take_milestone_end());
        assert!(!chunk.take_milestone_end());
        assert_eq!(chunk.take_text_following(), "text\n");
    }
}
