//! The tokenizer: a character-by-character scanner over one line.
//!
//! Letters and digits accumulate into a run on a byte [`Stack`].
//! Any other character is a boundary: the pending run is flushed into a
//! Keyword, Value or Identifier token, and then the boundary character is
//! classified on its own. A run is Value only if no letter was seen in it,
//! so `3x` is a single Identifier. Spaces end a run but produce no token,
//! and the end of the line ends the scan.

use std::str::Chars;

use tracing::{trace, warn};

use super::classify::{default_lexicon, Lexicon};
use super::token::{Token, TokenKind};
use crate::data::{Stack, Tag};

/// Split one line into tokens, using the built-in keywords and operators.
pub fn tokenize(line: &str) -> Vec<Token> {
    default_lexicon().tokenize(line)
}

/// An iterator over the tokens of one line.
///
/// All state lives in the tokenizer itself, so separate lines never share
/// an accumulator.
pub struct Tokenizer<'a> {
    lexicon: &'a Lexicon,
    input: Chars<'a>,

    /// Letters and digits of the current run.
    run: Stack<u8>,
    /// Set if a push onto `run` failed; the run is discarded at its boundary.
    run_failed: bool,
    /// No letter has been seen in the current run.
    value_eligible: bool,

    /// Tokens produced at the last boundary, next-to-yield on top.
    pending: Stack<Token>,
    done: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(lexicon: &'a Lexicon, line: &'a str) -> Self {
        Tokenizer {
            lexicon,
            input: line.chars(),
            run: Stack::new(),
            run_failed: false,
            value_eligible: true,
            pending: Stack::new(),
            done: false,
        }
    }

    /// Bound the number of characters a single run may hold.
    /// Longer runs are dropped without producing a token.
    pub fn with_run_limit(mut self, limit: usize) -> Self {
        self.run = Stack::with_limit(limit);
        self
    }

    /// Consume one character, or the end of the line.
    fn advance(&mut self) {
        let next = self.input.next();

        if let Some(ch) = next.filter(char::is_ascii_alphanumeric) {
            if ch.is_ascii_alphabetic() {
                self.value_eligible = false;
            }
            // ASCII, so the cast is exact.
            if let Err(err) = self.run.push(ch as u8) {
                if !self.run_failed {
                    warn!("could not extend run at {ch:?}: {err}");
                }
                self.run_failed = true;
            }
            return;
        }

        let run = self.flush();
        let boundary = next.and_then(|ch| self.classify_boundary(ch));
        // Pushed in reverse so the run token comes off first.
        for token in [boundary, run].into_iter().flatten() {
            trace!("token {token}");
            if let Err(err) = self.pending.push(token) {
                warn!("dropping token: {err}");
            }
        }

        if next.is_none() {
            self.done = true;
        }
    }

    /// Turn the accumulated run, if any, into a token.
    fn flush(&mut self) -> Option<Token> {
        let value_eligible = std::mem::replace(&mut self.value_eligible, true);
        if std::mem::take(&mut self.run_failed) {
            warn!("discarding run of {} characters", self.run.len());
            self.run.drain_all();
            return None;
        }
        if self.run.is_empty() {
            return None;
        }

        let text = match self.run.to_text() {
            Ok(text) => text,
            Err(err) => {
                warn!("could not flush run: {err}");
                self.run.drain_all();
                return None;
            }
        };
        let kind = if self.lexicon.is_keyword(&text) {
            TokenKind::Keyword
        } else if value_eligible {
            TokenKind::Value
        } else {
            TokenKind::Identifier
        };
        trace!("flushed run {text:?} as {kind}");
        Some(Token::new(kind, text))
    }

    /// Classify a single non-alphanumeric character.
    /// Spaces produce no token.
    fn classify_boundary(&self, ch: char) -> Option<Token> {
        let kind = match ch {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '=' => TokenKind::Equal,
            ',' => TokenKind::Comma,
            ' ' => return None,
            ch if self.lexicon.is_operator(ch) => TokenKind::Operator,
            _ => TokenKind::Unclassified,
        };
        Some(Token::new(kind, ch))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Ok(token) = self.pending.pop(Tag::Token) {
                return Some(token);
            }
            if self.done {
                return None;
            }
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(line: &str) -> Vec<String> {
        tokenize(line).iter().map(Token::to_string).collect()
    }

    #[test]
    fn empty_line() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("    ").is_empty());
    }

    #[test]
    fn assignment() {
        assert_eq!(rendered("x = 5"), ["IDENTIFIER,x", "EQUAL,=", "VALUE,5"]);
    }

    #[test]
    fn keyword_call() {
        assert_eq!(
            rendered("num(x,3)"),
            [
                "KEYWORD,num",
                "LEFT_PAREN,(",
                "IDENTIFIER,x",
                "COMMA,,",
                "VALUE,3",
                "RIGHT_PAREN,)",
            ]
        );
    }

    #[test]
    fn operators() {
        assert_eq!(
            rendered("a+b"),
            ["IDENTIFIER,a", "OPERATOR,+", "IDENTIFIER,b"]
        );
        assert_eq!(
            rendered("1%2^3-4*5\\6/7"),
            [
                "VALUE,1",
                "OPERATOR,%",
                "VALUE,2",
                "OPERATOR,^",
                "VALUE,3",
                "OPERATOR,-",
                "VALUE,4",
                "OPERATOR,*",
                "VALUE,5",
                "OPERATOR,\\",
                "VALUE,6",
                "OPERATOR,/",
                "VALUE,7",
            ]
        );
    }

    #[test]
    fn mixed_run_is_identifier() {
        assert_eq!(rendered("3x"), ["IDENTIFIER,3x"]);
        assert_eq!(rendered("x3"), ["IDENTIFIER,x3"]);
        assert_eq!(rendered("007"), ["VALUE,007"]);
    }

    #[test]
    fn value_eligibility_resets_per_run() {
        assert_eq!(
            rendered("ab 12 c3 45"),
            ["IDENTIFIER,ab", "VALUE,12", "IDENTIFIER,c3", "VALUE,45"]
        );
    }

    #[test]
    fn multi_character_operators_split() {
        assert_eq!(
            rendered("a<=b"),
            ["IDENTIFIER,a", "OPERATOR,<", "EQUAL,=", "IDENTIFIER,b"]
        );
        assert_eq!(rendered("=="), ["EQUAL,=", "EQUAL,="]);
    }

    #[test]
    fn unclassified_characters() {
        assert_eq!(
            rendered("a.b#\t!"),
            [
                "IDENTIFIER,a",
                "NA,.",
                "IDENTIFIER,b",
                "NA,#",
                "NA,\t",
                "NA,!",
            ]
        );
        assert_eq!(rendered("é"), ["NA,é"]);
    }

    #[test]
    fn malformed_numbers_stay_values() {
        // Value classification only looks for letters.
        assert_eq!(
            rendered("12.3.4"),
            ["VALUE,12", "NA,.", "VALUE,3", "NA,.", "VALUE,4"]
        );
        assert_eq!(rendered("1-2"), ["VALUE,1", "OPERATOR,-", "VALUE,2"]);
    }

    #[test]
    fn keywords_only_match_whole_runs() {
        assert_eq!(
            rendered("run runs tim2 rdn"),
            ["KEYWORD,run", "IDENTIFIER,runs", "IDENTIFIER,tim2", "KEYWORD,rdn"]
        );
    }

    #[test]
    fn custom_lexicon() {
        let lexicon = Lexicon::empty().with_keyword("let").with_operator('&');
        let got: Vec<String> = lexicon
            .tokenize("let num&1+")
            .iter()
            .map(Token::to_string)
            .collect();
        assert_eq!(
            got,
            [
                "KEYWORD,let",
                "IDENTIFIER,num",
                "OPERATOR,&",
                "VALUE,1",
                "NA,+"
            ]
        );
    }

    #[test]
    fn overlong_run_is_dropped() {
        let lexicon = Lexicon::default();
        let got: Vec<String> = Tokenizer::new(&lexicon, "abc abcdef+xy")
            .with_run_limit(4)
            .map(|t| t.to_string())
            .collect();
        assert_eq!(got, ["IDENTIFIER,abc", "OPERATOR,+", "IDENTIFIER,xy"]);
    }

    #[test]
    fn tokenizer_is_lazy() {
        let lexicon = Lexicon::default();
        let mut tokenizer = Tokenizer::new(&lexicon, "a(b");
        assert_eq!(tokenizer.next(), Some(Token::new(TokenKind::Identifier, "a")));
        assert_eq!(tokenizer.next(), Some(Token::new(TokenKind::LeftParen, "(")));
        assert_eq!(tokenizer.next(), Some(Token::new(TokenKind::Identifier, "b")));
        assert_eq!(tokenizer.next(), None);
        assert_eq!(tokenizer.next(), None);
    }

    #[test]
    fn flushes_are_traced() {
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl std::io::Write for Captured {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let tokens = tracing::subscriber::with_default(subscriber, || tokenize("3x+1"));
        assert_eq!(tokens.len(), 3);

        let log = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(log.contains("flushed run \"3x\" as IDENTIFIER"), "{log}");
        assert!(log.contains("flushed run \"1\" as VALUE"), "{log}");
    }

    #[test]
    fn lines_are_independent() {
        let first = tokenize("abc");
        let second = tokenize("12");
        assert_eq!(first, [Token::new(TokenKind::Identifier, "abc")]);
        assert_eq!(second, [Token::new(TokenKind::Value, "12")]);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn tokens_reconstruct_line(line in "[ -~]{0,80}") {
                let joined: String = tokenize(&line).iter().map(Token::text).collect();
                let expected: String = line.chars().filter(|c| *c != ' ').collect();
                prop_assert_eq!(joined, expected);
            }

            #[test]
            fn no_whitespace_tokens(line in "\\PC{0,40}") {
                for token in tokenize(&line) {
                    prop_assert_ne!(token.kind(), TokenKind::Whitespace);
                    if !token.kind().is_run() {
                        prop_assert_eq!(token.text().chars().count(), 1);
                    }
                }
            }

            #[test]
            fn run_tokens_are_alphanumeric(line in "[a-z0-9 +(),=]{0,60}") {
                for token in tokenize(&line) {
                    if token.kind().is_run() {
                        prop_assert!(token.text().bytes().all(|b| b.is_ascii_alphanumeric()));
                        let has_letter = token.text().bytes().any(|b| b.is_ascii_alphabetic());
                        prop_assert_eq!(token.kind() == TokenKind::Value, !has_letter);
                    }
                }
            }
        }
    }
}
