//! # vabna
//!
//! vabna is a small scripting language with keywords in English, in
//! transliterated Bengali and in Bengali script. It has integers, strings,
//! arrays, first-class functions with closures, and a handful of builtins.
//!
//! ```
//! use vabna::interpreter::value::core::Value;
//!
//! let result = vabna::run("ধরি adder = কাজ(x) { kaj(y) { x + y } }; adder(2)(3)");
//!
//! assert_eq!(result.unwrap(), Some(Value::Integer(5)));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::{Error, ParseError},
    interpreter::{evaluator::core::Evaluator, parser::core::Parser, value::core::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent
/// the syntactic structure of source code as a tree. The AST is built by the
/// parser and walked by the evaluator; rendering it with `Display` yields
/// source text that parses back to the same tree.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Keeps the originating token of every node for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code, each carrying the line it was raised on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Formats them as user-facing messages.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations to provide a complete runtime for source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64` and `usize` without silent data loss.
pub mod util;

/// Parses source text into a program.
///
/// Never fails: syntax errors are returned alongside whatever could be
/// parsed. The program should only be evaluated when the error list is
/// empty.
///
/// # Examples
/// ```
/// let (program, errors) = vabna::parse("let x = 5; x");
/// assert!(errors.is_empty());
/// assert_eq!(program.statements.len(), 2);
///
/// let (_, errors) = vabna::parse("let = 5;");
/// assert_eq!(errors[0].to_string(),
///            "Error on line 1: expected next token to be IDENT, got = instead.");
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();
    (program, parser.into_errors())
}

/// Parses and evaluates source text in a fresh global environment.
///
/// # Returns
/// The value of the program: the value of a top-level `return`, or else the
/// value of the last statement. `None` when that statement is a `let`, or
/// when there are no statements.
///
/// # Errors
/// [`Error::Parse`] with every syntax error if the source does not parse,
/// in which case nothing is evaluated. [`Error::Runtime`] if evaluation
/// fails.
///
/// # Examples
/// ```
/// use vabna::{error::Error, interpreter::value::core::Value};
///
/// assert_eq!(vabna::run("len(\"abc\")").unwrap(), Some(Value::Integer(3)));
/// assert_eq!(vabna::run("let x = 1;").unwrap(), None);
///
/// assert!(matches!(vabna::run("1 +"), Err(Error::Parse(_))));
/// assert!(matches!(vabna::run("1 / 0"), Err(Error::Runtime(_))));
/// ```
pub fn run(source: &str) -> Result<Option<Value>, Error> {
    let (program, errors) = parse(source);
    if !errors.is_empty() {
        return Err(Error::Parse(errors));
    }

    let mut evaluator = Evaluator::new();
    let global = evaluator.global();
    Ok(evaluator.eval_program(&program, global)?)
}
