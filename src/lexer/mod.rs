//! Lexical analysis module.
//!
//! This module contains the lexer that converts source bytes into tokens
//! on demand. It handles:
//!
//! - Keywords, identifiers and the `_` placeholder
//! - Integer literals in four bases, floats and imaginary literals
//! - Single line and triple quoted strings
//! - One and two character operators
//! - Comments and significant new lines
//! - Line/column tracking for every token

pub mod lexer;
pub mod tokens;
