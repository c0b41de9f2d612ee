/// Parsing errors.
///
/// Defines all error types that can occur while turning source text into a
/// [`Program`](crate::ast::Program). Parse errors are collected rather than
/// raised, so one input can report several of them.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include things like division by zero, type mismatches, unknown
/// identifiers and calls with the wrong number of arguments.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Everything that can go wrong while running a piece of source text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source did not parse. Every error found is reported.
    #[error("{}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n"))]
    Parse(Vec<ParseError>),
    /// Evaluation stopped with an error.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
