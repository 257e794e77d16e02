//! Parser module for building the expression arena.
//!
//! Expressions are parsed by recursive descent for structural forms
//! (lists, tagged expressions, groups, calls, member access) and by
//! precedence climbing for chains of binary operators:
//!
//! - `parser`: parser state, token cursor and the `parse` entry point
//! - `expr`: grammar functions
//! - `lookups`: binding powers and associativity of binary operators
//! - `literals`: value resolution for literal tokens
//! - `stack`: stack growth for deeply nested input

pub mod expr;
pub mod literals;
pub mod lookups;
pub mod parser;
pub mod stack;
