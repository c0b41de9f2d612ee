/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces tokens one at
/// a time, each corresponding to a meaningful language element such as a
/// number, string, identifier, operator, delimiter or keyword. Keywords have
/// several spellings, all resolved to the same token kind.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, text and
///   line.
/// - Accepts identifiers written in ASCII or in Bengali script.
/// - Marks characters it does not understand as illegal tokens instead of
///   failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of statements and
/// expressions, resolving operator precedence along the way.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Records every syntax error with its line, and keeps parsing after one.
pub mod parser;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, evaluates expressions and statements,
/// manages lexical scopes and closures, and produces results. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles bindings, function calls, early `return` and conditionals.
/// - Reports runtime errors such as division by zero or invalid operations.
pub mod evaluator;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values programs compute with (integers,
/// booleans, strings, arrays, null, closures and builtins) and the heap of
/// environment frames closures capture.
///
/// # Responsibilities
/// - Defines the `Value` enum, its truthiness, equality and rendering.
/// - Stores scopes in an arena that tolerates reference cycles.
pub mod value;
