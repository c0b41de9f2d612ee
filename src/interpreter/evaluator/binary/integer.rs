use crate::{ast::InfixOperator, error::RuntimeError, interpreter::value::core::Value};

/// Applies `operator` to two integers.
///
/// Arithmetic is checked: a result outside the 64-bit range is an
/// [`RuntimeError::Overflow`], and dividing by zero a
/// [`RuntimeError::DivisionByZero`]. Division truncates toward zero.
///
/// # Example
/// ```
/// use vabna::{
///     ast::InfixOperator,
///     interpreter::{evaluator::binary::integer::eval_integer_infix, value::core::Value},
/// };
///
/// assert_eq!(eval_integer_infix(InfixOperator::Div, -7, 2, 1), Ok(Value::Integer(-3)));
/// assert!(eval_integer_infix(InfixOperator::Div, 1, 0, 1).is_err());
/// assert!(eval_integer_infix(InfixOperator::Add, i64::MAX, 1, 1).is_err());
/// ```
pub fn eval_integer_infix(operator: InfixOperator,
                          left: i64,
                          right: i64,
                          line: usize)
                          -> Result<Value, RuntimeError> {
    let overflow = || RuntimeError::Overflow { line };

    let value = match operator {
        InfixOperator::Add => Value::Integer(left.checked_add(right).ok_or_else(overflow)?),
        InfixOperator::Sub => Value::Integer(left.checked_sub(right).ok_or_else(overflow)?),
        InfixOperator::Mul => Value::Integer(left.checked_mul(right).ok_or_else(overflow)?),
        InfixOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            Value::Integer(left.checked_div(right).ok_or_else(overflow)?)
        },
        InfixOperator::Less => Value::from(left < right),
        InfixOperator::Greater => Value::from(left > right),
        InfixOperator::Equal => Value::from(left == right),
        InfixOperator::NotEqual => Value::from(left != right),
    };

    Ok(value)
}
