use crate::{ast::InfixOperator, error::RuntimeError, interpreter::value::core::Value};

/// Applies `operator` to two strings.
///
/// Only `+` is defined, as concatenation. Strings are not compared, so even
/// `==` is an unknown operator here.
pub fn eval_string_infix(operator: InfixOperator,
                         left: &str,
                         right: &str,
                         line: usize)
                         -> Result<Value, RuntimeError> {
    match operator {
        InfixOperator::Add => {
            let mut joined = String::with_capacity(left.len() + right.len());
            joined.push_str(left);
            joined.push_str(right);
            Ok(Value::from(joined))
        },
        _ => Err(RuntimeError::UnknownInfixOperator { left: "STRING",
                                                      operator,
                                                      right: "STRING",
                                                      line }),
    }
}
