use crate::{
    ast::{BlockStatement, Expression},
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::{
            core::{NULL, Value},
            environment::Env,
        },
    },
};

impl Evaluator {
    /// Evaluates the statements of a block in order, in `env` itself.
    ///
    /// A signal raised by any statement stops the block and is passed on as
    /// it is. In particular a `return` is not unwrapped here, so that it can
    /// leave every block between it and the enclosing function.
    ///
    /// # Returns
    /// The value of the last statement, or `None` if the block is empty or
    /// ends with a `let`.
    pub fn eval_block(&mut self, block: &BlockStatement, env: Env) -> EvalResult<Option<Value>> {
        let mut result = None;
        for statement in &block.statements {
            result = self.eval_statement(statement, env)?;
        }
        Ok(result)
    }

    /// Evaluates `if (condition) { ... } else { ... }`.
    ///
    /// The chosen branch runs in the current environment; no new scope is
    /// created. With no `else` and a falsy condition the result is `NULL`.
    pub(in crate::interpreter::evaluator) fn eval_if_expression(&mut self,
                                                                condition: &Expression,
                                                                consequence: &BlockStatement,
                                                                otherwise: Option<&BlockStatement>,
                                                                env: Env)
                                                                -> EvalResult<Value> {
        let condition = self.eval_expression(condition, env)?;

        let branch = if condition.is_truthy() {
            Some(consequence)
        } else {
            otherwise
        };

        match branch {
            Some(block) => Ok(self.eval_block(block, env)?.unwrap_or(NULL)),
            None => Ok(NULL),
        }
    }
}
