//! Parser state and the top level entry point.
//!
//! The parser lexes the whole source up front (comments dropped, `EOF`
//! kept), then walks the token list with a cursor. Expressions are appended
//! to an arena and referenced by index; syntax errors are accumulated and
//! never abort the parse.

use tracing::{debug, trace};

use crate::{
    ast::ast::{ExprIdx, Expression, ExpressionList},
    errors::errors::SyntaxError,
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
};

use super::expr::parse_expression_list;

/// The main parser structure that maintains parsing state.
pub struct Parser<'a> {
    /// Materialized tokens, always terminated by `EOF`
    tokens: Vec<Token<'a>>,
    /// Append-only expression arena
    expressions: Vec<Expression>,
    /// Syntax errors in the order they were found
    errors: Vec<SyntaxError>,
    /// Index of the current token
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Lexes `source` and prepares a parser over its tokens.
    pub fn new<S: AsRef<[u8]> + ?Sized>(source: &'a S) -> Self {
        let mut tokens = tokenize(source);
        tokens.retain(|token| token.kind != TokenKind::Comment);

        trace!(tokens = tokens.len(), "materialized token list");

        let capacity = tokens.len() / 2;
        Parser {
            tokens,
            expressions: Vec::with_capacity(capacity),
            errors: vec![],
            pos: 0,
        }
    }

    /// Parses the token stream as one top level expression list.
    pub fn parse(&mut self) -> ExpressionList {
        parse_expression_list(self, TokenKind::EOF)
    }

    /// Panics if `expr_idx` was not produced by this parser.
    pub fn get_expression(&self, expr_idx: ExprIdx) -> &Expression {
        &self.expressions[expr_idx]
    }

    pub fn get_expressions(&self) -> &[Expression] {
        &self.expressions
    }

    pub fn get_tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    pub fn get_token(&self, token_idx: usize) -> &Token<'a> {
        &self.tokens[token_idx]
    }

    pub fn get_errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Hands the token list, arena and errors over to the caller.
    pub fn into_parts(self) -> (Vec<Token<'a>>, Vec<Expression>, Vec<SyntaxError>) {
        (self.tokens, self.expressions, self.errors)
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token<'a> {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Index of the current token in the token list.
    pub fn current_index(&self) -> usize {
        self.pos
    }

    /// Kind of the token `offset` places ahead, `EOF` past the end.
    pub fn peek_kind(&self, offset: usize) -> TokenKind {
        self.tokens
            .get(self.pos + offset)
            .map_or(TokenKind::EOF, |token| token.kind)
    }

    /// Advances to the next token and returns the previous one.
    ///
    /// The cursor never moves past `EOF`.
    pub fn advance(&mut self) -> Token<'a> {
        let token = self.tokens[self.pos];
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    pub fn skip_newlines(&mut self) {
        while self.current_token_kind() == TokenKind::NewLine {
            self.advance();
        }
    }

    /// Skips the offending token and everything after it up to the next
    /// `,`, new line or `terminator` that is not nested in a bracket pair.
    ///
    /// Brackets opened while skipping are tracked by their expected closer.
    /// A closer matching an outer bracket closes everything opened after it,
    /// and reaching `terminator` while it closes none of them abandons them.
    pub fn skip_until_separator(&mut self, terminator: TokenKind) {
        let mut closers: Vec<TokenKind> = vec![];

        loop {
            let kind = self.current_token_kind();
            if kind == TokenKind::EOF {
                return;
            }

            if let Some(closer) = kind.closing() {
                closers.push(closer);
            } else if kind.is_closing() {
                if let Some(at) = closers.iter().rposition(|closer| *closer == kind) {
                    closers.truncate(at);
                }
            }
            self.advance();

            let kind = self.current_token_kind();
            if kind == TokenKind::EOF {
                return;
            }

            if closers.is_empty() {
                if matches!(kind, TokenKind::Comma | TokenKind::NewLine) || kind == terminator {
                    return;
                }
            } else if kind == terminator && !closers.contains(&kind) {
                return;
            }
        }
    }

    pub fn push_expression(&mut self, expression: Expression) -> ExprIdx {
        trace!(index = self.expressions.len(), ?expression, "pushing expression");
        self.expressions.push(expression);
        self.expressions.len() - 1
    }

    pub fn push_error(&mut self, error: SyntaxError) {
        debug!(code = error.code(), %error, "syntax error");
        self.errors.push(error);
    }
}

/// Parses `source` into an expression arena.
///
/// This is the main entry point for parsing.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance, owning tokens, expressions and errors
/// - The top level expression list
pub fn parse<'a, S: AsRef<[u8]> + ?Sized>(source: &'a S) -> (Parser<'a>, ExpressionList) {
    let mut parser = Parser::new(source);
    let list = parser.parse();

    (parser, list)
}
