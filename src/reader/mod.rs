//! Support for reading command lines into tokens.
//!
//! - [`token`]: the [`Token`] value and its [`TokenKind`].
//! - [`classify`]: keyword, identifier and numeric predicates, and the
//!   [`Lexicon`] the tokenizer classifies against.
//! - [`scan`]: the [`Tokenizer`] itself.

pub mod classify;
pub mod scan;
pub mod token;

pub use classify::{
    default_lexicon, is_keyword, is_numeric_literal, is_valid_identifier, Lexicon,
};
pub use scan::{tokenize, Tokenizer};
pub use token::{Token, TokenKind};
