/// Parser state and the expression loop.
///
/// Holds the current and lookahead tokens, the error list, the precedence
/// table and the precedence-climbing loop that drives prefix and infix
/// handlers.
pub mod core;

/// Statement parsing.
///
/// Parses whole programs, `let` and `return` statements, expression
/// statements and brace-delimited blocks.
pub mod statement;

/// Prefix handlers.
///
/// Parses every construct that can start an expression: literals,
/// identifiers, prefix operators, grouping, `if`, function and array
/// literals.
pub mod prefix;

/// Infix handlers.
///
/// Parses binary operators, call expressions and index expressions, each
/// combining an already parsed left operand with what follows.
pub mod infix;

/// Utility functions for the parser.
///
/// Comma-separated expression lists and parameter lists.
pub mod utils;
