use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A syntax error recorded while parsing. Parsing never stops on one.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct SyntaxError {
    internal_error: ErrorImpl,
    position: Position,
}

impl SyntaxError {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        SyntaxError {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Stable numeric code of the error kind.
    pub fn code(&self) -> u16 {
        match &self.internal_error {
            ErrorImpl::InvalidToken { .. } => 1,
            ErrorImpl::UnexpectedToken { .. } => 2,
            ErrorImpl::ExpectedExpression { .. } => 3,
            ErrorImpl::UnclosedDelimiter { .. } => 4,
            ErrorImpl::IntegerOverflow { .. } => 5,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidToken { .. } => "InvalidToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::UnclosedDelimiter { .. } => "UnclosedDelimiter",
            ErrorImpl::IntegerOverflow { .. } => "IntegerOverflow",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected `,` or a new line",
                token
            )),
            ErrorImpl::ExpectedExpression { token } => {
                ErrorTip::Suggestion(format!("Expected an expression, found `{}`", token))
            }
            ErrorImpl::UnclosedDelimiter { expected, token } => ErrorTip::Suggestion(format!(
                "Expected `{}` to close the group, found `{}`",
                closing_text(*expected),
                token
            )),
            ErrorImpl::IntegerOverflow { token } => ErrorTip::Suggestion(format!(
                "Integer literal `{}` does not fit in 64 bits",
                token
            )),
        }
    }
}

fn closing_text(kind: TokenKind) -> String {
    match kind {
        TokenKind::CloseParen => String::from(")"),
        TokenKind::CloseBracket => String::from("]"),
        TokenKind::CloseCurly => String::from("}"),
        other => other.to_string(),
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("invalid token: {token:?}")]
    InvalidToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("expected expression, found {token:?}")]
    ExpectedExpression { token: String },
    #[error("expected {expected}, found {token:?}")]
    UnclosedDelimiter { expected: TokenKind, token: String },
    #[error("integer literal {token:?} overflows u64")]
    IntegerOverflow { token: String },
}
