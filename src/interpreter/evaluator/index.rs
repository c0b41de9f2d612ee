use crate::{
    error::RuntimeError,
    interpreter::value::core::{NULL, Value},
    util::num::checked_index,
};

/// Evaluates `left[index]`.
///
/// Only arrays indexed by integers are supported. An index outside the
/// array, negative ones included, yields `NULL` rather than an error.
///
/// # Example
/// ```
/// use vabna::interpreter::{evaluator::index::eval_index, value::core::{NULL, Value}};
///
/// let array = Value::from(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
///
/// assert_eq!(eval_index(&array, &Value::Integer(1), 1), Ok(Value::Integer(2)));
/// assert_eq!(eval_index(&array, &Value::Integer(3), 1), Ok(NULL));
/// assert_eq!(eval_index(&array, &Value::Integer(-1), 1), Ok(NULL));
/// assert!(eval_index(&Value::Integer(1), &Value::Integer(0), 1).is_err());
/// ```
pub fn eval_index(left: &Value, index: &Value, line: usize) -> Result<Value, RuntimeError> {
    match (left, index) {
        (Value::Array(elements), Value::Integer(index)) => {
            Ok(checked_index(*index, elements.len()).map_or(NULL, |i| elements[i].clone()))
        },
        _ => Err(RuntimeError::IndexNotSupported { left: left.type_name(),
                                                   index: index.type_name(),
                                                   line }),
    }
}
