use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::{core::Value, environment::Env},
    },
};

impl Evaluator {
    /// Evaluates expressions left to right, stopping at the first signal.
    pub(in crate::interpreter::evaluator) fn eval_expressions(&mut self,
                                                              expressions: &[Expression],
                                                              env: Env)
                                                              -> EvalResult<Vec<Value>> {
        expressions.iter()
                   .map(|expression| self.eval_expression(expression, env))
                   .collect()
    }
}

/// Checks that exactly `N` arguments were supplied and returns them.
///
/// # Example
/// ```
/// use vabna::interpreter::{evaluator::utils::exact_args, value::core::Value};
///
/// let args = [Value::Integer(1), Value::Integer(2)];
///
/// let [a, b] = exact_args::<2>(&args, 1).unwrap();
/// assert_eq!((a, b), (&Value::Integer(1), &Value::Integer(2)));
/// assert!(exact_args::<1>(&args, 1).is_err());
/// ```
pub fn exact_args<const N: usize>(args: &[Value],
                                  line: usize)
                                  -> Result<&[Value; N], RuntimeError> {
    args.try_into()
        .map_err(|_| RuntimeError::ArgumentCountMismatch { expected: N,
                                                           found: args.len(),
                                                           line })
}
