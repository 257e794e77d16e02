//! Error types for the front end.
//!
//! Syntax errors carry a position and a numeric code. The lexer never
//! fails (bad input becomes `Invalid` tokens), so every error in this module
//! is produced by the parser and accumulated rather than returned early.

pub mod errors;

#[cfg(test)]
mod tests;
