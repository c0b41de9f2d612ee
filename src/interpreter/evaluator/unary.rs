use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Evaluates a prefix operator applied to an already evaluated operand.
///
/// `!` negates truthiness and works on every value: only `false` and `null`
/// are falsy, so `!0` is `false`. `-` is defined for integers only, and
/// negating the smallest integer is an overflow.
///
/// # Example
/// ```
/// use vabna::{
///     ast::PrefixOperator,
///     interpreter::{evaluator::unary::eval_prefix, value::core::{FALSE, NULL, TRUE, Value}},
/// };
///
/// assert_eq!(eval_prefix(PrefixOperator::Not, &Value::Integer(5), 1), Ok(FALSE));
/// assert_eq!(eval_prefix(PrefixOperator::Not, &NULL, 1), Ok(TRUE));
/// assert_eq!(eval_prefix(PrefixOperator::Negate, &Value::Integer(5), 1), Ok(Value::Integer(-5)));
/// assert!(eval_prefix(PrefixOperator::Negate, &TRUE, 1).is_err());
/// ```
pub fn eval_prefix(operator: PrefixOperator,
                   right: &Value,
                   line: usize)
                   -> Result<Value, RuntimeError> {
    match (operator, right) {
        (PrefixOperator::Not, value) => Ok(Value::from(!value.is_truthy())),
        (PrefixOperator::Negate, Value::Integer(n)) => {
            n.checked_neg().map(Value::Integer).ok_or(RuntimeError::Overflow { line })
        },
        (PrefixOperator::Negate, value) => {
            Err(RuntimeError::UnknownPrefixOperator { operator,
                                                      right: value.type_name(),
                                                      line })
        },
    }
}
