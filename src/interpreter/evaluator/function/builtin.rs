use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::utils::exact_args,
        value::core::{NULL, Value},
    },
    util::num::usize_to_i64_checked,
};

/// Returns the length of a string, in characters, or of an array.
///
/// # Example
/// ```
/// use vabna::interpreter::{evaluator::function::builtin::len, value::core::Value};
///
/// assert_eq!(len(&[Value::from("সত্য")], 1), Ok(Value::Integer(4)));
/// assert_eq!(len(&[Value::from(vec![Value::Integer(1)])], 1), Ok(Value::Integer(1)));
/// assert_eq!(len(&[Value::Integer(1)], 1).unwrap_err().to_string(),
///            "Error on line 1: argument to `len` not supported, got INTEGER");
/// ```
pub fn len(args: &[Value], line: usize) -> Result<Value, RuntimeError> {
    let [value] = exact_args::<1>(args, line)?;

    let length = match value {
        Value::String(string) => string.chars().count(),
        Value::Array(elements) => elements.len(),
        other => return Err(unsupported("len", other, line)),
    };

    Ok(Value::Integer(usize_to_i64_checked(length, RuntimeError::Overflow { line })?))
}

/// Returns the first element of an array, or `NULL` if it is empty.
pub fn first(name: &'static str, args: &[Value], line: usize) -> Result<Value, RuntimeError> {
    let elements = array_argument(name, args, line)?;
    Ok(elements.first().cloned().unwrap_or(NULL))
}

/// Returns the last element of an array, or `NULL` if it is empty.
pub fn last(args: &[Value], line: usize) -> Result<Value, RuntimeError> {
    let elements = array_argument("last", args, line)?;
    Ok(elements.last().cloned().unwrap_or(NULL))
}

/// Returns a new array holding all but the first element.
///
/// The rest of an empty array is `NULL`.
///
/// # Example
/// ```
/// use vabna::interpreter::{evaluator::function::builtin::rest, value::core::{NULL, Value}};
///
/// let array = Value::from(vec![Value::Integer(1), Value::Integer(2)]);
///
/// assert_eq!(rest("rest", &[array], 1), Ok(Value::from(vec![Value::Integer(2)])));
/// assert_eq!(rest("rest", &[Value::from(Vec::new())], 1), Ok(NULL));
/// ```
pub fn rest(name: &'static str, args: &[Value], line: usize) -> Result<Value, RuntimeError> {
    let elements = array_argument(name, args, line)?;
    Ok(elements.split_first()
               .map_or(NULL, |(_, rest)| Value::from(rest.to_vec())))
}

/// Returns a new array with a value added at the end.
///
/// The array passed in is left unchanged.
pub fn push(name: &'static str, args: &[Value], line: usize) -> Result<Value, RuntimeError> {
    let [array, value] = exact_args::<2>(args, line)?;
    let Value::Array(elements) = array else {
        return Err(unsupported(name, array, line));
    };

    let mut pushed = Vec::with_capacity(elements.len() + 1);
    pushed.extend(elements.iter().cloned());
    pushed.push(value.clone());
    Ok(Value::from(pushed))
}

/// Extracts the single array argument of `name`.
fn array_argument<'a>(name: &'static str,
                      args: &'a [Value],
                      line: usize)
                      -> Result<&'a Rc<Vec<Value>>, RuntimeError> {
    let [value] = exact_args::<1>(args, line)?;
    match value {
        Value::Array(elements) => Ok(elements),
        other => Err(unsupported(name, other, line)),
    }
}

const fn unsupported(function: &'static str, value: &Value, line: usize) -> RuntimeError {
    RuntimeError::UnsupportedArgument { function,
                                        kind: value.type_name(),
                                        line }
}
