//! Tokens produced by the tokenizer.

/// Edge of a milestone pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneEdge {
    Start,
    End,
}

/// A backslash marker as it appears in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    raw: String,
    name: String,
    closing: bool,
    embedded: bool,
}

impl Marker {
    /// Classify a raw marker such as `\v `, `\+nd*` or `\*`.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let body = raw.strip_prefix('\\').unwrap_or(&raw);
        let (embedded, body) = match body.strip_prefix('+') {
            Some(rest) => (true, rest),
            None => (false, body),
        };
        let end = body
            .find(|c: char| c.is_whitespace() || c == '*' || c == '\\')
            .unwrap_or(body.len());
        let name = body[..end].to_owned();
        let closing = body[end..].starts_with('*');
        Self {
            raw,
            name,
            closing,
            embedded,
        }
    }

    /// Verbatim source text, including any trailing space consumed with it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Marker name without backslash, `+` or `*`, e.g. `nd`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_opening(&self) -> bool {
        !self.closing
    }

    pub fn is_closing(&self) -> bool {
        self.closing
    }

    /// Whether the marker nests inside another character style (`\+nd`).
    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// Split a milestone name such as `qt-s` into its base and edge.
    pub fn milestone(&self) -> Option<(&str, MilestoneEdge)> {
        if let Some(base) = self.name.strip_suffix("-s") {
            Some((base, MilestoneEdge::Start))
        } else {
            self.name
                .strip_suffix("-e")
                .map(|base| (base, MilestoneEdge::End))
        }
    }

    /// Whether this is the bare `\*` that closes a milestone.
    pub fn is_milestone_end(&self) -> bool {
        self.closing && self.name.is_empty()
    }
}

/// One element of the token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Marker(Marker),
    Text(String),
}

impl Token {
    /// Verbatim content of the token.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Marker(marker) => marker.raw(),
            Self::Text(text) => text,
        }
    }

    pub fn as_marker(&self) -> Option<&Marker> {
        match self {
            Self::Marker(marker) => Some(marker),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Marker(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_opening_marker() {
        let marker = Marker::from_raw("\\v ");
        assert_eq!(marker.name(), "v");
        assert!(marker.is_opening());
        assert!(!marker.is_embedded());
    }

    #[test]
    fn test_closing_embedded_marker() {
        let marker = Marker::from_raw("\\+nd*");
        assert_eq!(marker.name(), "nd");
        assert!(marker.is_closing());
        assert!(marker.is_embedded());
    }

    #[test]
    fn test_milestone_names() {
        let start = Marker::from_raw("\\qt-s ");
        let end = Marker::from_raw("\\qt-e");
        assert_eq!(start.milestone(), Some(("qt", MilestoneEdge::Start)));
        assert_eq!(end.milestone(), Some(("qt", MilestoneEdge::End)));
        assert_eq!(Marker::from_raw("\\q1 ").milestone(), None);
    }

    #[test]
    fn test_bare_star_closes_milestone() {
        let marker = Marker::from_raw("\\*");
        assert!(marker.is_milestone_end());
        assert_eq!(marker.name(), "");
    }

    #[test]
    fn test_token_as_str() {
        let marker = Token::Marker(Marker::from_raw("\\p\n"));
        let text = Token::Text("In the beginning".to_owned());
        assert_eq!(marker.as_str(), "\\p\n");
        assert_eq!(text.as_str(), "In the beginning");
        assert_eq!(text.as_text(), Some("In the beginning"));
        assert!(text.as_marker().is_none());
    }
}
