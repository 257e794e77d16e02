//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_ERROR!` - Creates a SyntaxError at a token's start position

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The token's slice of the source
/// * `$start` - Position of the first byte
/// * `$end` - Position just past the last byte
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, &source[0..2], start, end);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $start:expr, $end:expr) => {
        Token {
            kind: $kind,
            text: $text,
            start: $start,
            end: $end,
        }
    };
}

/// Creates a SyntaxError located at the start of a token.
///
/// `$variant` is an `ErrorImpl` variant taking a `token` field; the token's
/// lexeme is stored as that field.
///
/// # Example
///
/// ```ignore
/// let error = MK_ERROR!(ExpectedExpression, parser.current_token());
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($variant:ident, $token:expr) => {
        SyntaxError::new(
            ErrorImpl::$variant {
                token: $token.lexeme(),
            },
            $token.start,
        )
    };
}
