use crate::{
    error::RuntimeError,
    interpreter::value::core::{NULL, Value},
};

/// Prints each argument on its own line to standard output.
///
/// Accepts any number of arguments, formatted with their `Display`
/// implementation: strings appear without quotes.
///
/// # Returns
/// `NULL`, so that printing at the prompt does not echo the value a second
/// time.
///
/// # Example
/// ```
/// use vabna::interpreter::{evaluator::function::print::print, value::core::{NULL, Value}};
///
/// // The function prints the values to stdout, but the doctest
/// // only checks the returned result.
/// let result = print(&[Value::Integer(42), Value::from("hello")], 1);
///
/// assert_eq!(result, Ok(NULL));
/// ```
#[allow(clippy::unnecessary_wraps)]
pub fn print(args: &[Value], _line: usize) -> Result<Value, RuntimeError> {
    for arg in args {
        println!("{arg}");
    }
    Ok(NULL)
}
