//! Unit tests for error handling.

use crate::errors::errors::{ErrorImpl, ErrorTip, SyntaxError};
use crate::lexer::tokens::TokenKind;
use crate::Position;

#[test]
fn test_error_creation() {
    let error = SyntaxError::new(
        ErrorImpl::InvalidToken {
            token: "00".to_string(),
        },
        Position::new(0, 10),
    );

    assert_eq!(error.get_error_name(), "InvalidToken");
    assert_eq!(error.code(), 1);
}

#[test]
fn test_error_position() {
    let error = SyntaxError::new(
        ErrorImpl::UnexpectedToken {
            token: "identifier".to_string(),
        },
        Position::new(3, 42),
    );

    assert_eq!(*error.get_position(), Position::new(3, 42));
}

#[test]
fn test_error_codes_are_distinct() {
    let errors = [
        ErrorImpl::InvalidToken { token: "x".to_string() },
        ErrorImpl::UnexpectedToken { token: "x".to_string() },
        ErrorImpl::ExpectedExpression { token: "x".to_string() },
        ErrorImpl::UnclosedDelimiter {
            expected: TokenKind::CloseParen,
            token: "x".to_string(),
        },
        ErrorImpl::IntegerOverflow { token: "x".to_string() },
    ];

    let codes: Vec<u16> = errors
        .into_iter()
        .map(|error| SyntaxError::new(error, Position::default()).code())
        .collect();

    assert_eq!(codes, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_error_display() {
    let error = SyntaxError::new(
        ErrorImpl::UnclosedDelimiter {
            expected: TokenKind::CloseParen,
            token: "EOF".to_string(),
        },
        Position::new(0, 4),
    );

    assert_eq!(error.to_string(), "expected CloseParen, found \"EOF\" at 1:5");
}

#[test]
fn test_error_tip_none() {
    let error = SyntaxError::new(
        ErrorImpl::InvalidToken {
            token: "\"abc".to_string(),
        },
        Position::default(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = SyntaxError::new(
        ErrorImpl::UnclosedDelimiter {
            expected: TokenKind::CloseParen,
            token: "]".to_string(),
        },
        Position::default(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Expected `)` to close the group, found `]`"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_integer_overflow_error() {
    let error = SyntaxError::new(
        ErrorImpl::IntegerOverflow {
            token: "0xffff_ffff_ffff_ffff_f".to_string(),
        },
        Position::default(),
    );

    assert_eq!(error.get_error_name(), "IntegerOverflow");
    assert_eq!(error.code(), 5);
}
