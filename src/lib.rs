#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{ErrorTip, SyntaxError};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// Zero based line and column in the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Returns the text of the zero based `line` of `source`, without its newline.
pub fn get_line_at_position(source: &[u8], line: usize) -> Option<String> {
    source
        .split(|byte| *byte == b'\n')
        .nth(line)
        .map(|text| String::from_utf8_lossy(text).trim_end_matches('\r').to_string())
}

/// Renders a syntax error against the source it was found in.
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: `)`, expected `,` or a new line)
/// -> main.ppl
///   |
/// 1 | 1 + 2 )
///   | ------^
/// ```
pub fn render_error(error: &SyntaxError, source: &[u8], file: &str) -> String {
    let position = error.get_position();
    let line_text = get_line_at_position(source, position.line).unwrap_or_default();

    let line_string = (position.line + 1).to_string();
    let padding = line_string.len() + 2;

    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    rendered.push_str(&format!("-> {}\n", file));
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = position.column.saturating_sub(removed_whitespace) + 1;

    rendered.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    rendered
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        errors::errors::{ErrorImpl, SyntaxError},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = b"Hello, world!\nsecond\r\n\nTesting { }\n";

        assert_eq!(super::get_line_at_position(source, 0).as_deref(), Some("Hello, world!"));
        assert_eq!(super::get_line_at_position(source, 1).as_deref(), Some("second"));
        assert_eq!(super::get_line_at_position(source, 2).as_deref(), Some(""));
        assert_eq!(super::get_line_at_position(source, 3).as_deref(), Some("Testing { }"));
        assert_eq!(super::get_line_at_position(source, 9), None);
    }

    #[test]
    fn test_position_display_is_one_based() {
        assert_eq!(Position::new(0, 0).to_string(), "1:1");
        assert_eq!(Position::new(4, 11).to_string(), "5:12");
    }

    #[test]
    fn test_render_error() {
        let error = SyntaxError::new(
            ErrorImpl::ExpectedExpression {
                token: String::from(")"),
            },
            Position::new(1, 6),
        );

        let rendered = super::render_error(&error, b"a, b\n  x + )\n", "main.ppl");

        assert_eq!(
            rendered,
            "Error: ExpectedExpression (Expected an expression, found `)`)\n\
             -> main.ppl\n  \
             |\n\
             2 | x + )\n  \
             | ----^"
        );
    }

    #[test]
    fn test_render_error_past_last_line() {
        let error = SyntaxError::new(
            ErrorImpl::UnclosedDelimiter {
                expected: crate::lexer::tokens::TokenKind::CloseParen,
                token: String::from("EOF"),
            },
            Position::new(3, 0),
        );

        let rendered = super::render_error(&error, b"f(", "main.ppl");

        assert!(rendered.starts_with("Error: UnclosedDelimiter"));
        assert!(rendered.ends_with("4 | \n  | ^"));
    }
}
