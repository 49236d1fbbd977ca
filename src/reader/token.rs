//! Token types produced by the tokenizer.

/// The class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    Identifier,
    Keyword,
    Equal,
    LeftParen,
    RightParen,
    Operator,
    Comma,
    /// Reserved for printing; spaces are consumed without producing a token.
    Whitespace,
    Value,
    Unclassified,
}

impl TokenKind {
    /// The printable name of the kind, as used in `KIND,TEXT` output.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Equal => "EQUAL",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Comma => "COMMA",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Value => "VALUE",
            TokenKind::Unclassified => "NA",
        }
    }

    /// Whether tokens of this kind come from an accumulated run
    /// rather than a single boundary character.
    pub fn is_run(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::Keyword | TokenKind::Value
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified piece of an input line.
///
/// Tokens are immutable once built; equality and printing depend only on
/// the kind and text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact text matched in the input.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.kind, self.text)
    }
}
