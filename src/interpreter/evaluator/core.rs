use std::{iter, rc::Rc};

use crate::{
    ast::{Expression, Identifier, Node, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary, function, index, unary},
        value::{
            core::{Function, Value},
            environment::{Env, Heap},
        },
    },
};

/// Reason an evaluation stopped before producing a value.
///
/// Both variants unwind through every enclosing block with `?`. A
/// `Return` is consumed at the nearest function-call boundary, or at the top
/// of a program. An `Error` is only ever consumed by the caller of the
/// evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// A `return` statement was executed with this value.
    Return(Value),
    /// Evaluation failed.
    Error(RuntimeError),
}

impl From<RuntimeError> for Signal {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or the
/// [`Signal`] that interrupted them.
pub type EvalResult<T> = Result<T, Signal>;

/// Turns an interrupted evaluation into the answer seen from the top level.
///
/// A pending `return` becomes the produced value; an error stays an error.
fn finish(result: EvalResult<Option<Value>>) -> Result<Option<Value>, RuntimeError> {
    match result {
        Ok(value) => Ok(value),
        Err(Signal::Return(value)) => Ok(Some(value)),
        Err(Signal::Error(error)) => Err(error),
    }
}

/// Stores the runtime evaluation state.
///
/// The evaluator owns the [`Heap`] holding every environment frame, and the
/// handle of the global environment programs are normally evaluated in.
/// Dropping the evaluator frees all frames, whatever cycles closures have
/// formed between them.
///
/// ## Usage
///
/// An `Evaluator` is created once and reused, so that bindings made by one
/// program stay visible to the next:
///
/// ```
/// use vabna::interpreter::{evaluator::core::Evaluator, value::core::Value};
///
/// let mut evaluator = Evaluator::new();
/// let global = evaluator.global();
///
/// let (first, _) = vabna::parse("let double = fn(x) { x * 2 };");
/// evaluator.eval_program(&first, global).unwrap();
///
/// let (second, _) = vabna::parse("double(21)");
/// let result = evaluator.eval_program(&second, global).unwrap();
///
/// assert_eq!(result, Some(Value::Integer(42)));
/// ```
#[derive(Debug)]
pub struct Evaluator {
    pub(in crate::interpreter::evaluator) heap:        Heap,
    /// Frames allocated by the calls in progress, oldest first.
    pub(in crate::interpreter::evaluator) call_frames: Vec<Env>,
    global:                                            Env,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator with an empty global environment.
    #[must_use]
    pub fn new() -> Self {
        let mut heap = Heap::new();
        let global = heap.allocate(None);
        Self { heap,
               call_frames: Vec::new(),
               global }
    }

    /// The global environment.
    #[must_use]
    pub const fn global(&self) -> Env {
        self.global
    }

    /// The frames owned by this evaluator.
    #[must_use]
    pub const fn heap(&self) -> &Heap {
        &self.heap
    }

    /// Creates a fresh top-level environment with no parent.
    pub fn new_environment(&mut self) -> Env {
        self.heap.allocate(None)
    }

    /// Creates an empty environment whose lookups fall back to `outer`.
    pub fn enclosed_environment(&mut self, outer: Env) -> Env {
        self.heap.allocate(Some(outer))
    }

    /// Looks a name up in `env` and its ancestors.
    #[must_use]
    pub fn lookup(&self, env: Env, name: &str) -> Option<Value> {
        self.heap.get(env, name)
    }

    /// Evaluates any node in `env`.
    ///
    /// A `return` reaching this level is unwrapped to its value, as it would
    /// be at the top of a program.
    ///
    /// # Returns
    /// `Ok(Some(value))` for nodes that produce a value, `Ok(None)` for
    /// nodes that do not (such as a `let` statement or an empty program).
    ///
    /// # Example
    /// ```
    /// use vabna::{
    ///     ast::Node,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let (program, _) = vabna::parse("if (1 < 2) { return 10; 20 }");
    /// let mut evaluator = Evaluator::new();
    /// let global = evaluator.global();
    ///
    /// let result = evaluator.evaluate(Node::Statement(&program.statements[0]), global);
    ///
    /// assert_eq!(result, Ok(Some(Value::Integer(10))));
    /// ```
    pub fn evaluate(&mut self, node: Node<'_>, env: Env) -> Result<Option<Value>, RuntimeError> {
        match node {
            Node::Program(program) => self.eval_program(program, env),
            Node::Statement(statement) => finish(self.eval_statement(statement, env)),
            Node::Block(block) => finish(self.eval_block(block, env)),
            Node::Expression(expression) => finish(self.eval_expression(expression, env).map(Some)),
        }
    }

    /// Evaluates a whole program.
    ///
    /// Statements run in order. A `return` anywhere outside a function ends
    /// the program with its value; an error ends it with that error.
    ///
    /// # Returns
    /// The value of the last statement, or `None` when that statement is a
    /// `let` or the program is empty.
    ///
    /// # Example
    /// ```
    /// use vabna::interpreter::{evaluator::core::Evaluator, value::core::Value};
    ///
    /// let (program, _) = vabna::parse("let x = 5; return x * 2; 99");
    /// let mut evaluator = Evaluator::new();
    /// let global = evaluator.global();
    ///
    /// assert_eq!(evaluator.eval_program(&program, global), Ok(Some(Value::Integer(10))));
    /// ```
    pub fn eval_program(&mut self,
                        program: &Program,
                        env: Env)
                        -> Result<Option<Value>, RuntimeError> {
        tracing::trace!(statements = program.statements.len(), "evaluating program");

        let mut result = None;
        for statement in &program.statements {
            match self.eval_statement(statement, env) {
                Ok(value) => result = value,
                Err(Signal::Return(value)) => {
                    result = Some(value);
                    break;
                },
                Err(Signal::Error(error)) => {
                    tracing::debug!(%error, "program failed");
                    return Err(error);
                },
            }
        }

        tracing::trace!(frames = self.heap.len(), "program finished");
        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// # Returns
    /// `Some(value)` for expression statements, `None` for `let`. A `return`
    /// statement never returns normally; it raises [`Signal::Return`].
    pub fn eval_statement(&mut self, statement: &Statement, env: Env) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Let { name, value, .. } => {
                let value = self.eval_expression(value, env)?;
                self.heap.set(env, name.name.as_str(), value);
                Ok(None)
            },
            Statement::Return { value, .. } => {
                let value = self.eval_expression(value, env)?;
                Err(Signal::Return(value))
            },
            Statement::Expression { expression, .. } => {
                self.eval_expression(expression, env).map(Some)
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands are
    /// always evaluated left to right, and the first signal raised by any of
    /// them is passed on without evaluating the rest.
    pub fn eval_expression(&mut self, expression: &Expression, env: Env) -> EvalResult<Value> {
        let line = expression.line_number();

        match expression {
            Expression::Identifier(identifier) => self.eval_identifier(identifier, env),
            Expression::Integer { value, .. } => Ok(Value::Integer(*value)),
            Expression::String { value, .. } => Ok(Value::from(value.as_str())),
            Expression::Boolean { value, .. } => Ok(Value::from(*value)),
            Expression::Prefix { operator, right, .. } => {
                let right = self.eval_expression(right, env)?;
                Ok(unary::eval_prefix(*operator, &right, line)?)
            },
            Expression::Infix { left,
                                operator,
                                right,
                                .. } => {
                let left = self.eval_expression(left, env)?;
                let right = self.eval_expression(right, env)?;
                Ok(binary::core::eval_infix(*operator, &left, &right, line)?)
            },
            Expression::If { condition,
                             consequence,
                             alternative,
                             .. } => {
                self.eval_if_expression(condition, consequence, alternative.as_ref(), env)
            },
            Expression::Function(literal) => {
                Ok(Value::Function(Rc::new(Function { literal: Rc::clone(literal),
                                                      env })))
            },
            Expression::Call { function,
                               arguments,
                               .. } => {
                let callee = self.eval_expression(function, env)?;
                let arguments = self.eval_expressions(arguments, env)?;
                self.apply_function(&callee, arguments, line)
            },
            Expression::Array { elements, .. } => {
                Ok(Value::from(self.eval_expressions(elements, env)?))
            },
            Expression::Index { left, index, .. } => {
                let left = self.eval_expression(left, env)?;
                let index = self.eval_expression(index, env)?;
                Ok(index::eval_index(&left, &index, line)?)
            },
        }
    }

    /// Resolves a name through the environment chain, then the builtins.
    ///
    /// A binding of the same name shadows a builtin.
    fn eval_identifier(&self, identifier: &Identifier, env: Env) -> EvalResult<Value> {
        if let Some(value) = self.heap.get(env, &identifier.name) {
            return Ok(value);
        }
        if let Some(builtin) = function::core::lookup(&identifier.name) {
            return Ok(Value::Builtin(builtin));
        }
        Err(RuntimeError::UnknownIdentifier { name: identifier.name.clone(),
                                              line: identifier.token.line, }.into())
    }

    /// Frees every frame unreachable from the global environment and `roots`.
    ///
    /// # Returns
    /// The number of frames freed.
    ///
    /// # Example
    /// ```
    /// use vabna::interpreter::evaluator::core::Evaluator;
    ///
    /// let mut evaluator = Evaluator::new();
    /// let global = evaluator.global();
    /// let (program, _) = vabna::parse("let add = fn(x) { fn(y) { x + y } }; add(1); add(2);");
    /// evaluator.eval_program(&program, global).unwrap();
    ///
    /// // Each call frame outlived its call inside the returned closure, which
    /// // was then discarded.
    /// assert_eq!(evaluator.collect_garbage([]), 2);
    /// assert_eq!(evaluator.heap().len(), 1);
    /// ```
    pub fn collect_garbage(&mut self, roots: impl IntoIterator<Item = Env>) -> usize {
        self.heap.collect(iter::once(self.global).chain(roots))
    }
}
