//! Integration tests for the front end.
//!
//! These tests drive the public API the way a consumer would: source text in,
//! token list, expression arena and rendered diagnostics out.

use ppl::{
    ast::ast::Expression,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse,
    render_error, Position,
};

#[test]
fn test_parse_program() {
    let source = "\
// configuration
width: 0x10
height: width * 2 ^ 3
area: width * height |> print
scale(factor: 1.5, offset: -2)
";
    let (parser, list) = parse(source);

    assert!(!parser.has_errors(), "errors: {:?}", parser.get_errors());
    assert_eq!(list.len(), 4);

    for idx in &list[..3] {
        assert!(matches!(parser.get_expression(*idx), Expression::Tagged(_)));
    }

    match parser.get_expression(list[3]) {
        Expression::Call(call) => {
            assert_eq!(call.args.len(), 2);
            assert!(matches!(parser.get_expression(call.callee), Expression::Identifier(_)));
        }
        other => panic!("expected a call, got {:?}", other),
    }
}

#[test]
fn test_tagged_value_structure() {
    let (parser, list) = parse("area: width * height |> print");

    let Expression::Tagged(tagged) = parser.get_expression(list[0]) else {
        panic!("expected a tagged expression");
    };
    assert_eq!(parser.get_token(tagged.tag.token).lexeme(), "area");

    let Expression::Binary(pipe) = parser.get_expression(tagged.value) else {
        panic!("expected a binary expression");
    };
    assert_eq!(pipe.op, TokenKind::Pipe);
    assert!(matches!(
        parser.get_expression(pipe.lhs),
        Expression::Binary(binary) if binary.op == TokenKind::Times
    ));
}

#[test]
fn test_positions_survive_parsing() {
    let source = "a\n  b.c";
    let (parser, list) = parse(source);

    let Expression::Accessed(accessed) = parser.get_expression(list[1]) else {
        panic!("expected member access");
    };

    let field = parser.get_token(accessed.field.token);
    assert_eq!(field.lexeme(), "c");
    assert_eq!(field.start, Position::new(1, 4));
}

#[test]
fn test_tokens_and_parser_agree() {
    let source = "f(x) // call\ng";
    let tokens = tokenize(source);
    let (parser, _) = parse(source);

    let without_comments: Vec<_> = tokens
        .into_iter()
        .filter(|token| token.kind != TokenKind::Comment)
        .collect();
    assert_eq!(parser.get_tokens(), without_comments.as_slice());
}

#[test]
fn test_render_errors() {
    let source = "total: 1 +\nf(1, 2";
    let (parser, _) = parse(source);

    // `f` continues the dangling `+`, the call is never closed.
    assert_eq!(parser.get_errors().len(), 1);

    let rendered = render_error(&parser.get_errors()[0], source.as_bytes(), "main.ppl");
    assert_eq!(
        rendered,
        "Error: UnclosedDelimiter (Expected `)` to close the group, found `EOF`)\n\
         -> main.ppl\n  \
         |\n\
         2 | f(1, 2\n  \
         | ------^"
    );
}

#[test]
fn test_recovery_keeps_later_expressions() {
    let source = "good: 1\nbad: 2 3 4\nworse: )\nfine: 5";
    let (parser, list) = parse(source);

    assert_eq!(list.len(), 4);
    // `3` is unexpected, `)` is both a missing value and a stray closer.
    assert_eq!(parser.get_errors().len(), 3);

    let Expression::Tagged(last) = parser.get_expression(list[3]) else {
        panic!("expected a tagged expression");
    };
    assert!(matches!(
        parser.get_expression(last.value),
        Expression::IntLiteral(literal) if literal.value == 5
    ));
}

#[test]
fn test_into_parts() {
    let (parser, list) = parse("1 + 2");
    let (tokens, expressions, errors) = parser.into_parts();

    assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));
    assert_eq!(expressions.len(), 3);
    assert!(errors.is_empty());
    assert_eq!(list, vec![2]);
}
