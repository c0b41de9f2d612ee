use crate::{ast::InfixOperator, error::RuntimeError, interpreter::value::core::Value};

/// Evaluates `==` and `!=` on two values of the same type.
///
/// Booleans and null compare by value. Arrays, functions and builtins
/// compare by identity: two array literals with equal elements are still
/// different arrays.
///
/// # Example
/// ```
/// use vabna::{
///     ast::InfixOperator,
///     interpreter::{
///         evaluator::binary::comparison::eval_equality,
///         value::core::{FALSE, NULL, TRUE},
///     },
/// };
///
/// assert_eq!(eval_equality(InfixOperator::Equal, &TRUE, &TRUE, 1), Ok(TRUE));
/// assert_eq!(eval_equality(InfixOperator::NotEqual, &NULL, &NULL, 1), Ok(FALSE));
/// assert!(eval_equality(InfixOperator::Less, &TRUE, &FALSE, 1).is_err());
/// ```
pub fn eval_equality(operator: InfixOperator,
                     left: &Value,
                     right: &Value,
                     line: usize)
                     -> Result<Value, RuntimeError> {
    match operator {
        InfixOperator::Equal => Ok(Value::from(left.is_identical(right))),
        InfixOperator::NotEqual => Ok(Value::from(!left.is_identical(right))),
        _ => Err(RuntimeError::UnknownInfixOperator { left: left.type_name(),
                                                      operator,
                                                      right: right.type_name(),
                                                      line }),
    }
}
