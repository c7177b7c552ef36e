use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Source symbol for each punctuator kind, used when rendering a kind in
    /// a diagnostic message.
    pub static ref SYMBOL_LOOKUP: HashMap<TokenKind, &'static str> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Plus, "+");
        map.insert(TokenKind::Dash, "-");
        map.insert(TokenKind::Star, "*");
        map.insert(TokenKind::Slash, "/");
        map.insert(TokenKind::OpenParen, "(");
        map.insert(TokenKind::CloseParen, ")");
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EndOfInput,
    Number,

    OpenParen,
    CloseParen,

    Plus,
    Dash,
    Star,
    Slash,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match SYMBOL_LOOKUP.get(self) {
            Some(symbol) => write!(f, "{}", symbol),
            None => write!(f, "{:?}", self),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    /// Byte offset in the source where this token begins.
    pub fn offset(&self) -> u32 {
        self.span.start.0
    }

    /// Length of the token in source characters. The `EndOfInput` sentinel
    /// always has length zero.
    pub fn len(&self) -> u32 {
        self.span.end.0 - self.span.start.0
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
