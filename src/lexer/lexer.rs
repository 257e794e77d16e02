use tracing::trace;

use crate::{Position, MK_TOKEN};

use super::tokens::{lookup_keyword, Token, TokenKind};

/// Pull-based scanner over a borrowed source buffer.
///
/// Keeps the byte just consumed (`current`) and peeks at the byte about to be
/// consumed, which is enough to resolve every two-character operator without
/// backtracking. Positions are zero based; consuming `\n` moves to the next
/// line.
#[derive(Clone)]
pub struct Lexer<'a> {
    source: &'a [u8],
    start_of_token: usize,
    cursor: usize,
    current: u8,
    start: Position,
    end: Position,
}

impl<'a> Lexer<'a> {
    pub fn new<S: AsRef<[u8]> + ?Sized>(source: &'a S) -> Lexer<'a> {
        Lexer {
            source: source.as_ref(),
            start_of_token: 0,
            cursor: 0,
            current: 0,
            start: Position::default(),
            end: Position::default(),
        }
    }

    /// Scans and returns the next token.
    ///
    /// Once the source is exhausted every call returns an empty `EOF` token
    /// positioned at the end of input.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_spaces();

        self.start_of_token = self.cursor;
        self.start = self.end;

        let Some(rune) = self.advance() else {
            return self.generate_token(TokenKind::EOF);
        };

        let token = match rune {
            b'\n' => self.generate_token(TokenKind::NewLine),
            b'a'..=b'z' | b'A'..=b'Z' => self.consume_identifier(),
            b'0'..=b'9' => self.consume_number(),
            b'"' => self.consume_string(),

            b'=' => self.generate_token(TokenKind::Equal),
            b'+' => self.generate_token(TokenKind::Plus),
            b'*' => self.generate_token(TokenKind::Times),
            b'%' => self.generate_token(TokenKind::Modulo),
            b'^' => self.generate_token(TokenKind::Exponent),
            b'~' => self.generate_token(TokenKind::BitNot),
            b'(' => self.generate_token(TokenKind::OpenParen),
            b')' => self.generate_token(TokenKind::CloseParen),
            b'[' => self.generate_token(TokenKind::OpenBracket),
            b']' => self.generate_token(TokenKind::CloseBracket),
            b'{' => self.generate_token(TokenKind::OpenCurly),
            b'}' => self.generate_token(TokenKind::CloseCurly),
            b',' => self.generate_token(TokenKind::Comma),
            b'\\' => self.generate_token(TokenKind::Backslash),
            b'\'' => self.generate_token(TokenKind::Apostrophe),
            b':' => self.generate_token(TokenKind::Colon),
            b'@' => self.generate_token(TokenKind::Binding),
            b'$' => self.generate_token(TokenKind::Positional),
            b'?' => self.generate_token(TokenKind::Propagate),
            b'_' => self.generate_token(TokenKind::Special),

            b'/' => {
                if self.advance_if(b'/') {
                    self.consume_comment()
                } else {
                    self.generate_token(TokenKind::Divide)
                }
            }
            b'-' => {
                if self.advance_if(b'>') {
                    self.generate_token(TokenKind::Arrow)
                } else {
                    self.generate_token(TokenKind::Minus)
                }
            }
            b'>' => {
                if self.advance_if(b'=') {
                    self.generate_token(TokenKind::GreaterEquals)
                } else if self.advance_if(b'>') {
                    self.generate_token(TokenKind::RightShift)
                } else {
                    self.generate_token(TokenKind::Greater)
                }
            }
            b'<' => {
                if self.advance_if(b'=') {
                    self.generate_token(TokenKind::LessEquals)
                } else if self.advance_if(b'<') {
                    self.generate_token(TokenKind::LeftShift)
                } else {
                    self.generate_token(TokenKind::Less)
                }
            }
            b'.' => {
                if self.advance_if(b'&') {
                    self.generate_token(TokenKind::BitAnd)
                } else if self.advance_if(b'|') {
                    self.generate_token(TokenKind::BitOr)
                } else if self.advance_if(b'^') {
                    self.generate_token(TokenKind::BitXor)
                } else {
                    self.generate_token(TokenKind::Dot)
                }
            }
            b'|' => {
                if self.advance_if(b'>') {
                    self.generate_token(TokenKind::Pipe)
                } else {
                    self.generate_token(TokenKind::Bar)
                }
            }

            // TODO: decode UTF-8 sequences instead of rejecting them wholesale
            0x80..=0xFF => {
                self.advance_while(|rune| rune >= 0x80);
                self.generate_token(TokenKind::Invalid)
            }
            _ => self.generate_token(TokenKind::Invalid),
        };

        trace!(kind = %token.kind, start = %token.start, "lexed token");
        token
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.source.get(self.cursor + offset).copied()
    }

    fn next_rune(&self) -> Option<u8> {
        self.peek(0)
    }

    fn advance(&mut self) -> Option<u8> {
        let rune = self.next_rune()?;
        self.cursor += 1;
        self.current = rune;

        if rune == b'\n' {
            self.end.line += 1;
            self.end.column = 0;
        } else {
            self.end.column += 1;
        }

        Some(rune)
    }

    fn advance_if(&mut self, expected: u8) -> bool {
        if self.next_rune() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes runes while `predicate` holds, returns how many were consumed.
    fn advance_while(&mut self, predicate: impl Fn(u8) -> bool) -> usize {
        let mut consumed = 0;
        while self.next_rune().is_some_and(&predicate) {
            self.advance();
            consumed += 1;
        }
        consumed
    }

    fn skip_spaces(&mut self) {
        self.advance_while(|rune| matches!(rune, b' ' | b'\t' | b'\r'));
    }

    fn generate_token(&self, kind: TokenKind) -> Token<'a> {
        MK_TOKEN!(
            kind,
            &self.source[self.start_of_token..self.cursor],
            self.start,
            self.end
        )
    }

    fn consume_identifier(&mut self) -> Token<'a> {
        self.advance_while(|rune| rune.is_ascii_alphanumeric());

        let lexeme = &self.source[self.start_of_token..self.cursor];
        self.generate_token(lookup_keyword(lexeme).unwrap_or(TokenKind::Identifier))
    }

    fn consume_comment(&mut self) -> Token<'a> {
        self.advance_while(|rune| rune != b'\n');
        self.generate_token(TokenKind::Comment)
    }

    fn consume_number(&mut self) -> Token<'a> {
        if self.current == b'0' {
            let prefixed = match self.next_rune() {
                Some(b'x') => Some((TokenKind::Hex, 16)),
                Some(b'o') => Some((TokenKind::Oct, 8)),
                Some(b'b') => Some((TokenKind::Bin, 2)),
                _ => None,
            };

            if let Some((kind, radix)) = prefixed {
                self.advance();

                let mut digits = 0;
                while let Some(rune) = self.next_rune() {
                    if (rune as char).is_digit(radix) {
                        digits += 1;
                    } else if rune != b'_' {
                        break;
                    }
                    self.advance();
                }

                return if digits > 0 {
                    self.generate_token(kind)
                } else {
                    self.generate_token(TokenKind::Invalid)
                };
            }

            // `00` has no meaning, swallow the whole run as one bad token
            if self.next_rune() == Some(b'0') {
                self.advance_while(is_decimal_rune);
                return self.generate_token(TokenKind::Invalid);
            }
        }

        self.advance_while(is_decimal_rune);
        let mut kind = TokenKind::Int;

        // A digit must follow the dot, otherwise `5.field` is an access.
        if self.next_rune() == Some(b'.') && self.peek(1).is_some_and(|rune| rune.is_ascii_digit()) {
            self.advance();
            self.advance_while(is_decimal_rune);
            kind = TokenKind::Float;
        }

        if matches!(self.next_rune(), Some(b'e' | b'E')) {
            let exponent_digit = match self.peek(1) {
                Some(b'+' | b'-') => self.peek(2),
                other => other,
            };

            if exponent_digit.is_some_and(|rune| rune.is_ascii_digit()) {
                self.advance();
                self.advance_if(b'+');
                self.advance_if(b'-');
                self.advance_while(is_decimal_rune);
                kind = TokenKind::Float;
            }
        }

        if self.next_rune() == Some(b'i') && !self.peek(1).is_some_and(|rune| rune.is_ascii_alphanumeric()) {
            self.advance();
            kind = TokenKind::Imaginary;
        }

        self.generate_token(kind)
    }

    fn consume_string(&mut self) -> Token<'a> {
        if self.advance_if(b'"') {
            if self.advance_if(b'"') {
                // Triple quoted strings stop at the end of the line, each
                // physical line of a long string is its own token.
                self.advance_while(|rune| rune != b'\n');
            }
            return self.generate_token(TokenKind::String);
        }

        loop {
            match self.next_rune() {
                None | Some(b'\n') => return self.generate_token(TokenKind::Invalid),
                Some(b'"') => {
                    self.advance();
                    return self.generate_token(TokenKind::String);
                }
                Some(b'\\') => {
                    self.advance();
                    if self.next_rune().is_some_and(|rune| rune != b'\n') {
                        self.advance();
                    }
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }
}

fn is_decimal_rune(rune: u8) -> bool {
    rune.is_ascii_digit() || rune == b'_'
}

/// Lexes the whole source, including comments and the trailing `EOF`.
pub fn tokenize<'a, S: AsRef<[u8]> + ?Sized>(source: &'a S) -> Vec<Token<'a>> {
    let mut lex = Lexer::new(source);
    let mut tokens = Vec::with_capacity(source.as_ref().len() / 4 + 1);

    loop {
        let token = lex.next_token();
        tokens.push(token);

        if token.kind == TokenKind::EOF {
            break;
        }
    }

    tokens
}
