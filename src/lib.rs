//! Lexical front end for the `andy` command language.
//!
//! A line such as `num(x, 3)` is split into classified [`Token`]s:
//! identifiers, keywords, values, operators and punctuation.
//! The [`repl`] function drives this interactively, one line at a time.

pub mod data;
pub mod reader;

mod repl;

pub use reader::{tokenize, Lexicon, Token, TokenKind, Tokenizer};
pub use repl::{repl, ReplConfig};
