use std::fmt::Display;

use crate::Position;

/// Reserved words, matched exactly against a lexed identifier.
///
/// Small and fixed, so a linear scan beats hashing.
pub const RESERVED_LOOKUP: [(&str, TokenKind); 6] = [
    ("if", TokenKind::If),
    ("comp", TokenKind::Comp),
    ("fn", TokenKind::Fn),
    ("and", TokenKind::And),
    ("or", TokenKind::Or),
    ("not", TokenKind::Not),
];

pub fn lookup_keyword(lexeme: &[u8]) -> Option<TokenKind> {
    RESERVED_LOOKUP
        .iter()
        .find(|(keyword, _)| keyword.as_bytes() == lexeme)
        .map(|(_, kind)| *kind)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Literals
    Int,
    Hex,
    Oct,
    Bin,
    Float,
    Imaginary,
    String,
    Identifier,
    Special, // _

    // Reserved
    If,
    Comp,
    Fn,
    And,
    Or,
    Not,

    Plus,
    Minus,
    Times,
    Divide,
    Modulo,
    Exponent, // ^

    LeftShift,  // <<
    RightShift, // >>
    BitAnd,     // .&
    BitOr,      // .|
    BitXor,     // .^
    BitNot,     // ~

    Dot,
    Pipe,      // |>
    Propagate, // ?

    Equal, // =
    GreaterEquals,
    Greater,
    LessEquals,
    Less,

    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,

    Comma,
    Bar,        // |
    Backslash,  // qualified identifiers
    Apostrophe, // type definitions
    Colon,
    Arrow,      // ->
    Binding,    // @
    Positional, // $

    NewLine,
    Comment,
    EOF,
    Invalid,
}

impl TokenKind {
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Int
                | TokenKind::Hex
                | TokenKind::Oct
                | TokenKind::Bin
                | TokenKind::Float
                | TokenKind::Imaginary
                | TokenKind::String
        )
    }

    /// The kind that closes an opening bracket, `None` for everything else.
    pub fn closing(&self) -> Option<TokenKind> {
        match self {
            TokenKind::OpenParen => Some(TokenKind::CloseParen),
            TokenKind::OpenBracket => Some(TokenKind::CloseBracket),
            TokenKind::OpenCurly => Some(TokenKind::CloseCurly),
            _ => None,
        }
    }

    pub fn is_closing(&self) -> bool {
        matches!(
            self,
            TokenKind::CloseParen | TokenKind::CloseBracket | TokenKind::CloseCurly
        )
    }

    /// Radix of an integer literal kind, `None` for everything else.
    pub fn radix(&self) -> Option<u32> {
        match self {
            TokenKind::Int => Some(10),
            TokenKind::Hex => Some(16),
            TokenKind::Oct => Some(8),
            TokenKind::Bin => Some(2),
            _ => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A lexed token borrowing its text from the source buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a [u8],
    pub start: Position,
    pub end: Position,
}

impl Token<'_> {
    /// Lossy UTF-8 view of the token text, used for diagnostics.
    pub fn lexeme(&self) -> String {
        if self.kind == TokenKind::EOF {
            return String::from("EOF");
        }

        String::from_utf8_lossy(self.text).into_owned()
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_one_of_many(&[TokenKind::Identifier, TokenKind::Invalid]) || self.kind.is_literal() {
            write!(f, "{} ({}) {}-{}", self.kind, self.lexeme(), self.start, self.end)
        } else {
            write!(f, "{} () {}-{}", self.kind, self.start, self.end)
        }
    }
}
