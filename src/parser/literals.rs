//! Value resolution for literal tokens.
//!
//! The lexer only classifies literals; turning their text into values is done
//! here, when the parser builds the corresponding expression.

use crate::lexer::tokens::{Token, TokenKind};

/// Accumulates the digits of `text` in `radix`, skipping `_` separators.
///
/// Returns `None` when the value does not fit in a `u64` or a byte is not a
/// digit of `radix`.
pub fn int_from_bytes(text: &[u8], radix: u32) -> Option<u64> {
    let mut value: u64 = 0;

    for &byte in text {
        if byte == b'_' {
            continue;
        }

        let digit = (byte as char).to_digit(radix)?;
        value = value.checked_mul(radix as u64)?.checked_add(digit as u64)?;
    }

    Some(value)
}

/// Value of an `Int`, `Hex`, `Oct` or `Bin` token.
///
/// `None` for other kinds and for literals that overflow a `u64`.
pub fn int_from_token(token: &Token) -> Option<u64> {
    let radix = token.kind.radix()?;

    // 0x, 0o, 0b
    let digits = if radix == 10 {
        token.text
    } else {
        token.text.get(2..)?
    };

    int_from_bytes(digits, radix)
}

/// Value of a `Float` token, or the magnitude of an `Imaginary` one.
pub fn float_from_token(token: &Token) -> Option<f64> {
    let text = match token.kind {
        TokenKind::Float => token.text,
        TokenKind::Imaginary => token.text.strip_suffix(b"i")?,
        _ => return None,
    };

    let cleaned: String = text
        .iter()
        .filter(|byte| **byte != b'_')
        .map(|byte| *byte as char)
        .collect();

    cleaned.parse().ok()
}

/// Contents of a `String` token with escapes resolved.
///
/// Triple quoted tokens only carry their opening quotes, single line ones
/// are stripped of both quotes.
pub fn string_from_token(token: &Token) -> String {
    let text = token.text;
    let inner = if let Some(rest) = text.strip_prefix(b"\"\"\"") {
        rest
    } else {
        let rest = text.strip_prefix(b"\"").unwrap_or(text);
        rest.strip_suffix(b"\"").unwrap_or(rest)
    };

    unescape(&String::from_utf8_lossy(inner))
}

fn unescape(string_literal: &str) -> String {
    let mut result = String::with_capacity(string_literal.len());
    let mut chars = string_literal.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.peek() {
            Some('n') => {
                result.push('\n');
                chars.next();
            }
            Some('t') => {
                result.push('\t');
                chars.next();
            }
            Some('r') => {
                result.push('\r');
                chars.next();
            }
            Some('\\') => {
                result.push('\\');
                chars.next();
            }
            Some('"') => {
                result.push('"');
                chars.next();
            }
            Some('0') => {
                result.push('\0');
                chars.next();
            }
            Some('x') => {
                chars.next();
                let mut hex = String::new();

                for _ in 0..2 {
                    match chars.peek() {
                        Some(ch) if ch.is_ascii_hexdigit() => {
                            hex.push(*ch);
                            chars.next();
                        }
                        _ => break,
                    }
                }

                match u8::from_str_radix(&hex, 16) {
                    Ok(byte) => result.push(byte as char),
                    Err(_) => {
                        // Not a valid escape, keep it verbatim
                        result.push_str("\\x");
                        result.push_str(&hex);
                    }
                }
            }
            _ => result.push(ch), // Keep the backslash
        }
    }

    result
}
