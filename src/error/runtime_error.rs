use crate::ast::{InfixOperator, PrefixOperator};

/// Represents all errors that can occur during evaluation.
///
/// Type names in messages are the ones reported by
/// [`Value::type_name`](crate::interpreter::value::core::Value::type_name).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// A name is bound neither in scope nor as a builtin.
    #[error("Error on line {line}: identifier not found: {name}")]
    UnknownIdentifier {
        /// The name that was looked up.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The operands of a binary operator have different types.
    #[error("Error on line {line}: type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        /// Type of the left operand.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Type of the right operand.
        right:    &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The operator is not defined for operands of this type.
    #[error("Error on line {line}: unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        /// Type of the left operand.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Type of the right operand.
        right:    &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The prefix operator is not defined for an operand of this type.
    #[error("Error on line {line}: unknown operator: {operator}{right}")]
    UnknownPrefixOperator {
        /// The operator.
        operator: PrefixOperator,
        /// Type of the operand.
        right:    &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: division by zero")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic left the 64-bit range.
    #[error("Error on line {line}: integer overflow")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to call something that is not a function.
    #[error("Error on line {line}: not a function: {kind}")]
    NotAFunction {
        /// Type of the value that was called.
        kind: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error on line {line}: wrong number of arguments: want={expected}, got={found}")]
    ArgumentCountMismatch {
        /// Number of parameters the function declares.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Indexing is only defined for an array and an integer.
    #[error("Error on line {line}: index operator not supported: {left}[{index}]")]
    IndexNotSupported {
        /// Type of the indexed value.
        left:  &'static str,
        /// Type of the index.
        index: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A builtin received an argument of a type it does not handle.
    #[error("Error on line {line}: argument to `{function}` not supported, got {kind}")]
    UnsupportedArgument {
        /// Name of the builtin.
        function: &'static str,
        /// Type of the rejected argument.
        kind:     &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
}
