use crate::{
    ast::{
        ast::{ExprIdx, Expression, ExpressionList},
        expressions::{
            Accessed, Binary, Call, FloatLiteral, Identifier, IntLiteral, Special, StringLiteral,
            Tagged, Unary,
        },
    },
    errors::errors::{ErrorImpl, SyntaxError},
    lexer::tokens::TokenKind,
    MK_ERROR,
};

use super::{
    literals::{float_from_token, int_from_token, string_from_token},
    lookups::{binary_operator, is_unary_operator, Associativity, BindingPower},
    parser::Parser,
    stack::ensure_sufficient_stack,
};

/// Parses `,` or new line separated complex expressions up to `terminator`.
///
/// The terminator itself is left for the caller. An empty list is returned
/// when the terminator comes first; a separator right before the terminator
/// is accepted.
pub fn parse_expression_list(parser: &mut Parser, terminator: TokenKind) -> ExpressionList {
    let mut list = vec![];

    parser.skip_newlines();
    if parser.current_token_kind() == terminator {
        return list;
    }

    loop {
        list.push(parse_complex_expr(parser));

        // After an expression only a separator or the terminator may follow.
        loop {
            let token = *parser.current_token();

            match token.kind {
                kind if kind == terminator => return list,
                TokenKind::Comma | TokenKind::NewLine => {
                    parser.advance();
                    parser.skip_newlines();

                    match parser.current_token_kind() {
                        kind if kind == terminator => return list,
                        TokenKind::EOF => {
                            push_unclosed(parser, terminator);
                            return list;
                        }
                        _ => break,
                    }
                }
                TokenKind::EOF => {
                    push_unclosed(parser, terminator);
                    return list;
                }
                _ => {
                    parser.push_error(MK_ERROR!(UnexpectedToken, token));
                    parser.skip_until_separator(terminator);
                }
            }
        }
    }
}

fn push_unclosed(parser: &mut Parser, expected: TokenKind) {
    let token = *parser.current_token();
    parser.push_error(SyntaxError::new(
        ErrorImpl::UnclosedDelimiter {
            expected,
            token: token.lexeme(),
        },
        token.start,
    ));
}

/// `identifier: expression` or a plain expression.
pub fn parse_complex_expr(parser: &mut Parser) -> ExprIdx {
    if parser.current_token_kind() == TokenKind::Identifier && parser.peek_kind(1) == TokenKind::Colon {
        let tag = Identifier {
            token: parser.current_index(),
        };
        parser.advance();
        parser.advance();

        let value = parse_expr(parser);
        return parser.push_expression(Expression::Tagged(Tagged { tag, value }));
    }

    parse_expr(parser)
}

pub fn parse_expr(parser: &mut Parser) -> ExprIdx {
    ensure_sufficient_stack(|| {
        let lhs = parse_primary_expr(parser);
        parse_extension(parser, BindingPower::Default, lhs)
    })
}

/// Precedence climbing over binary operators binding at least as tight as
/// `min_bp`.
///
/// Operators of equal binding power fold left to right, except right
/// associative ones which recurse at the same level.
pub fn parse_extension(parser: &mut Parser, min_bp: BindingPower, lhs: ExprIdx) -> ExprIdx {
    ensure_sufficient_stack(|| parse_extension_inner(parser, min_bp, lhs))
}

fn parse_extension_inner(parser: &mut Parser, min_bp: BindingPower, lhs: ExprIdx) -> ExprIdx {
    let mut lhs = lhs;

    while let Some((bp, _)) = binary_operator(parser.current_token_kind()) {
        if bp < min_bp {
            break;
        }

        let op = parser.advance().kind;
        parser.skip_newlines();

        let mut rhs = parse_primary_expr(parser);

        while let Some((next_bp, associativity)) = binary_operator(parser.current_token_kind()) {
            if next_bp > bp {
                rhs = parse_extension(parser, bp.tighter(), rhs);
            } else if next_bp == bp && associativity == Associativity::Right {
                rhs = parse_extension(parser, bp, rhs);
            } else {
                break;
            }
        }

        lhs = parser.push_expression(Expression::Binary(Binary { op, lhs, rhs }));
    }

    lhs
}

/// Literal, identifier, group or unary expression, with member access and
/// call suffixes folded on.
pub fn parse_primary_expr(parser: &mut Parser) -> ExprIdx {
    ensure_sufficient_stack(|| parse_primary_expr_inner(parser))
}

fn parse_primary_expr_inner(parser: &mut Parser) -> ExprIdx {
    let token = *parser.current_token();
    let index = parser.current_index();

    let primary = match token.kind {
        TokenKind::Int | TokenKind::Hex | TokenKind::Oct | TokenKind::Bin => {
            parser.advance();

            let value = match int_from_token(&token) {
                Some(value) => value,
                None => {
                    parser.push_error(MK_ERROR!(IntegerOverflow, token));
                    u64::MAX
                }
            };

            parser.push_expression(Expression::IntLiteral(IntLiteral { value, token: index }))
        }
        TokenKind::Float | TokenKind::Imaginary => {
            parser.advance();

            match float_from_token(&token) {
                Some(value) if token.kind == TokenKind::Float => {
                    parser.push_expression(Expression::FloatLiteral(FloatLiteral { value, token: index }))
                }
                Some(value) => parser
                    .push_expression(Expression::ImaginaryLiteral(FloatLiteral { value, token: index })),
                None => {
                    parser.push_error(MK_ERROR!(InvalidToken, token));
                    parser.push_expression(Expression::Invalid)
                }
            }
        }
        TokenKind::String => {
            parser.advance();
            parser.push_expression(Expression::StringLiteral(StringLiteral {
                value: string_from_token(&token),
                token: index,
            }))
        }
        TokenKind::Special => {
            parser.advance();
            parser.push_expression(Expression::Special(Special { token: index }))
        }
        TokenKind::Identifier => {
            parser.advance();
            parser.push_expression(Expression::Identifier(Identifier { token: index }))
        }
        TokenKind::OpenParen => parse_grouping_expr(parser),
        kind if is_unary_operator(kind) => return parse_unary_expr(parser),
        TokenKind::Invalid => {
            parser.advance();
            parser.push_error(MK_ERROR!(InvalidToken, token));
            parser.push_expression(Expression::Invalid)
        }
        // Left in place for the enclosing list to resynchronize on, brackets
        // included so the skip can balance them.
        TokenKind::Comma
        | TokenKind::NewLine
        | TokenKind::EOF
        | TokenKind::OpenBracket
        | TokenKind::OpenCurly
        | TokenKind::CloseParen
        | TokenKind::CloseBracket
        | TokenKind::CloseCurly => {
            parser.push_error(MK_ERROR!(ExpectedExpression, token));
            parser.push_expression(Expression::Invalid)
        }
        _ => {
            parser.advance();
            parser.push_error(MK_ERROR!(ExpectedExpression, token));
            parser.push_expression(Expression::Invalid)
        }
    };

    parse_postfix_expr(parser, primary)
}

/// Folds `.field` and `(args)` suffixes onto `base`, left to right.
pub fn parse_postfix_expr(parser: &mut Parser, base: ExprIdx) -> ExprIdx {
    let mut base = base;

    loop {
        match parser.current_token_kind() {
            TokenKind::Dot if parser.peek_kind(1) == TokenKind::Identifier => {
                parser.advance();
                let field = Identifier {
                    token: parser.current_index(),
                };
                parser.advance();

                base = parser.push_expression(Expression::Accessed(Accessed { base, field }));
            }
            TokenKind::OpenParen => base = parse_call_expr(parser, base),
            _ => return base,
        }
    }
}

pub fn parse_call_expr(parser: &mut Parser, callee: ExprIdx) -> ExprIdx {
    parser.advance();

    let args = parse_expression_list(parser, TokenKind::CloseParen);

    // Otherwise the list already reported the missing `)`.
    if parser.current_token_kind() == TokenKind::CloseParen {
        parser.advance();
    }

    parser.push_expression(Expression::Call(Call { callee, args }))
}

/// `( complex_expression )`, yielding the inner expression. `()` is `Nothing`.
pub fn parse_grouping_expr(parser: &mut Parser) -> ExprIdx {
    parser.advance();
    parser.skip_newlines();

    if parser.current_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return parser.push_expression(Expression::Nothing);
    }

    let inner = parse_complex_expr(parser);
    parser.skip_newlines();

    if parser.current_token_kind() == TokenKind::CloseParen {
        parser.advance();
    } else {
        push_unclosed(parser, TokenKind::CloseParen);
    }

    inner
}

/// Prefix `+`, `-`, `~` or `not`.
///
/// Binds tighter than every binary operator except `^`, so `-2 ^ 2` negates
/// the power.
pub fn parse_unary_expr(parser: &mut Parser) -> ExprIdx {
    let op = parser.advance().kind;

    let operand = parse_primary_expr(parser);
    let operand = parse_extension(parser, BindingPower::Exponent, operand);

    parser.push_expression(Expression::Unary(Unary { op, operand }))
}
