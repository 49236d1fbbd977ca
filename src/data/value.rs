use super::Tag;
use crate::reader::Token;

/// A type that can be stored on a [`Stack`](super::Stack).
///
/// Cloning a payload must produce an independent copy;
/// [`Stack::peek`](super::Stack::peek) hands out clones so the stored value stays valid
/// after later pops.
pub trait Payload: Clone {
    fn tag(&self) -> Tag;

    /// The payload as a single byte, if it is one.
    fn as_byte(&self) -> Option<u8> {
        None
    }
}

impl Payload for u8 {
    fn tag(&self) -> Tag {
        Tag::Byte
    }

    fn as_byte(&self) -> Option<u8> {
        Some(*self)
    }
}

impl Payload for f64 {
    fn tag(&self) -> Tag {
        Tag::Double
    }
}

impl Payload for Token {
    fn tag(&self) -> Tag {
        Tag::Token
    }
}

/// A payload whose tag is only known at runtime.
///
/// A `Stack<Value>` may start out holding any variant,
/// but rejects pushes of a different variant than its current contents.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(u8),
    Token(Token),
    Double(f64),
}

impl Payload for Value {
    fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Token(_) => Tag::Token,
            Value::Double(_) => Tag::Double,
        }
    }

    fn as_byte(&self) -> Option<u8> {
        match self {
            Value::Byte(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Byte(value)
    }
}

impl From<Token> for Value {
    fn from(value: Token) -> Self {
        Value::Token(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}
