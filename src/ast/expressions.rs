use crate::lexer::tokens::TokenKind;

use super::ast::ExprIdx;

// LITERALS

/// Integer literal of any base, value already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntLiteral {
    pub value: u64,
    pub token: usize,
}

/// Float literal, also used for the magnitude of imaginary literals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatLiteral {
    pub value: f64,
    pub token: usize,
}

/// String literal with escapes already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub value: String,
    pub token: usize,
}

/// The `_` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Special {
    pub token: usize,
}

/// Reference to an identifier token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identifier {
    pub token: usize,
}

// COMPOUND

/// `name: value`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tagged {
    pub tag: Identifier,
    pub value: ExprIdx,
}

/// `base.field`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accessed {
    pub base: ExprIdx,
    pub field: Identifier,
}

/// `callee(args...)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub callee: ExprIdx,
    pub args: Vec<ExprIdx>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binary {
    pub op: TokenKind,
    pub lhs: ExprIdx,
    pub rhs: ExprIdx,
}

/// Prefix operator applied to one operand (`-x`, `not x`, `~x`, `+x`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unary {
    pub op: TokenKind,
    pub operand: ExprIdx,
}
