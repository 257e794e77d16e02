/// AST (Abstract Syntax Tree) module
///
/// Expressions live in an append-only arena owned by the parser and refer to
/// each other by index.
///
/// Submodules:
/// - ast: the `Expression` tagged union and index aliases
/// - expressions: payload structs for each expression form
pub mod ast;
pub mod expressions;
