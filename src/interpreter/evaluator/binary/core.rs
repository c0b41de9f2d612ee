use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::binary::{comparison, integer, string},
        value::core::Value,
    },
};

/// Evaluates a binary operation between two values.
///
/// Routes on the operand types: integers get arithmetic and ordering,
/// strings get concatenation, and any other pair of the same type only
/// supports `==` and `!=`. Operands of different types are a type mismatch
/// whatever the operator.
///
/// # Parameters
/// - `operator`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use vabna::{
///     ast::InfixOperator,
///     interpreter::{evaluator::binary::core::eval_infix, value::core::{TRUE, Value}},
/// };
///
/// let sum = eval_infix(InfixOperator::Add, &Value::Integer(3), &Value::Integer(4), 1);
/// assert_eq!(sum, Ok(Value::Integer(7)));
///
/// let mismatch = eval_infix(InfixOperator::Equal, &Value::Integer(1), &TRUE, 1);
/// assert_eq!(mismatch.unwrap_err().to_string(),
///            "Error on line 1: type mismatch: INTEGER == BOOLEAN");
/// ```
pub fn eval_infix(operator: InfixOperator,
                  left: &Value,
                  right: &Value,
                  line: usize)
                  -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => {
            integer::eval_integer_infix(operator, *l, *r, line)
        },
        (Value::String(l), Value::String(r)) => string::eval_string_infix(operator, l, r, line),
        _ if left.type_name() != right.type_name() => {
            Err(RuntimeError::TypeMismatch { left: left.type_name(),
                                             operator,
                                             right: right.type_name(),
                                             line })
        },
        _ => comparison::eval_equality(operator, left, right, line),
    }
}
