//! Predicates for classifying runs of text.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use super::scan::Tokenizer;
use super::token::Token;

/// Reserved words of the command language.
pub const DEFAULT_KEYWORDS: &[&str] = &["num", "run", "rdn", "tim"];

/// Characters that form single-character operator tokens.
/// `=` is listed, but is always classified as Equal.
pub const DEFAULT_OPERATORS: &str = "%^=-+*\\/<>";

/// The vocabulary the tokenizer classifies against:
/// a set of keywords and a set of operator characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    keywords: BTreeSet<String>,
    operators: BTreeSet<char>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon {
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            operators: DEFAULT_OPERATORS.chars().collect(),
        }
    }
}

impl Lexicon {
    /// A lexicon with no keywords and no operators.
    pub fn empty() -> Self {
        Lexicon {
            keywords: BTreeSet::new(),
            operators: BTreeSet::new(),
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.insert(keyword.into());
        self
    }

    pub fn with_operator(mut self, operator: char) -> Self {
        self.operators.insert(operator);
        self
    }

    /// True iff `text` is exactly one of the keywords.
    pub fn is_keyword(&self, text: &str) -> bool {
        self.keywords.contains(text)
    }

    pub fn is_operator(&self, ch: char) -> bool {
        self.operators.contains(&ch)
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> + '_ {
        self.keywords.iter().map(String::as_str)
    }

    /// Lazily tokenize one line against this lexicon.
    pub fn tokenizer<'a>(&'a self, line: &'a str) -> Tokenizer<'a> {
        Tokenizer::new(self, line)
    }

    /// Tokenize one line against this lexicon.
    pub fn tokenize(&self, line: &str) -> Vec<Token> {
        self.tokenizer(line).collect()
    }
}

/// The lexicon with the built-in keywords and operators.
pub fn default_lexicon() -> &'static Lexicon {
    static LEXICON: OnceLock<Lexicon> = OnceLock::new();
    LEXICON.get_or_init(Lexicon::default)
}

/// True iff `text` is one of the built-in keywords.
pub fn is_keyword(text: &str) -> bool {
    default_lexicon().is_keyword(text)
}

/// True iff `text` is non-empty, does not start with a digit,
/// and consists only of letters, digits and underscores.
///
/// Keyword-ness is not considered; `num` is a valid identifier.
pub fn is_valid_identifier(text: &str) -> bool {
    regex::identifier().is_match(text)
}

/// True iff `text` is a well-formed number:
/// an optional sign, optional digits, an optional fraction with at least one
/// digit, and an optional `e` exponent with at least one digit.
/// At least one digit is required, and a sign may not lead straight into `e`.
///
/// The tokenizer does not use this; Value tokens are runs without letters.
pub fn is_numeric_literal(text: &str) -> bool {
    regex::numeric().is_match(text)
}

mod regex {
    use regex::Regex;
    use std::sync::OnceLock;

    pub(super) fn identifier() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            Regex::new(r"\A[A-Za-z_][A-Za-z0-9_]*\z")
                .expect("could not compile regex for identifier")
        })
    }

    pub(super) fn numeric() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            // Either a signed mantissa (digits with an optional fraction, or a bare
            // fraction) with an optional exponent, or an unsigned bare exponent.
            // A sign must not be followed directly by the exponent marker.
            Regex::new(
                r"\A(?:[+-]?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)(?:e[+-]?[0-9]+)?|e[+-]?[0-9]+)\z",
            )
            .expect("could not compile regex for numeric literal")
        })
    }
}
