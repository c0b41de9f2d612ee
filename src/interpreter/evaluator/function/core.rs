use std::fmt;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator, Signal},
            function::{builtin, print},
        },
        value::core::{NULL, Value},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the line number.
/// It returns a value or the error describing why the arguments were rejected.
type BuiltinFn = fn(&[Value], usize) -> Result<Value, RuntimeError>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Variadic` means the builtin accepts any number of arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// Any number of arguments.
    Variadic,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns the expected count when it does not.
    const fn check(self, n: usize) -> Result<(), usize> {
        match self {
            Self::Exact(m) if m != n => Err(m),
            _ => Ok(()),
        }
    }
}

/// A native function available to every program.
pub struct Builtin {
    /// The name the builtin is looked up by.
    pub name:  &'static str,
    /// Accepted argument counts.
    pub arity: Arity,
    func:      BuiltinFn,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

impl Builtin {
    /// Checks the argument count, then runs the builtin.
    ///
    /// # Example
    /// ```
    /// use vabna::interpreter::{evaluator::function::core::lookup, value::core::Value};
    ///
    /// let len = lookup("len").unwrap();
    ///
    /// assert_eq!(len.call(&[Value::from("abc")], 1), Ok(Value::Integer(3)));
    /// assert!(len.call(&[], 1).is_err());
    /// ```
    pub fn call(&self, args: &[Value], line: usize) -> Result<Value, RuntimeError> {
        self.arity
            .check(args.len())
            .map_err(|expected| RuntimeError::ArgumentCountMismatch { expected,
                                                                       found: args.len(),
                                                                       line })?;
        (self.func)(args, line)
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of all builtins, aliases included.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "len"    => { arity: Arity::Exact(1), func: builtin::len },
    "first"  => { arity: Arity::Exact(1), func: |args, line| builtin::first("first", args, line) },
    "head"   => { arity: Arity::Exact(1), func: |args, line| builtin::first("head", args, line) },
    "last"   => { arity: Arity::Exact(1), func: builtin::last },
    "rest"   => { arity: Arity::Exact(1), func: |args, line| builtin::rest("rest", args, line) },
    "tail"   => { arity: Arity::Exact(1), func: |args, line| builtin::rest("tail", args, line) },
    "push"   => { arity: Arity::Exact(2), func: |args, line| builtin::push("push", args, line) },
    "append" => { arity: Arity::Exact(2), func: |args, line| builtin::push("append", args, line) },
    "print"  => { arity: Arity::Variadic, func: print::print },
    "puts"   => { arity: Arity::Variadic, func: print::print },
}

/// Finds a builtin by name.
///
/// # Example
/// ```
/// use vabna::interpreter::evaluator::function::core::{BUILTIN_FUNCTIONS, lookup};
///
/// assert!(BUILTIN_FUNCTIONS.iter().all(|name| lookup(name).is_some()));
/// assert!(lookup("map").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}

impl Evaluator {
    /// Applies a function value to evaluated arguments.
    ///
    /// A closure runs in a new frame nested in the environment it captured,
    /// not in the caller's, with its parameters bound positionally. A
    /// `return` inside the body ends the call and becomes its result; a body
    /// that ends without a value yields `NULL`. Builtins are called directly.
    ///
    /// # Errors
    /// - Calling anything other than a function or builtin.
    /// - Supplying a different number of arguments than there are
    ///   parameters.
    /// - Any error raised by the body or the builtin.
    pub fn apply_function(&mut self,
                          callee: &Value,
                          arguments: Vec<Value>,
                          line: usize)
                          -> EvalResult<Value> {
        match callee {
            Value::Function(function) => {
                let parameters = &function.literal.parameters;
                if parameters.len() != arguments.len() {
                    return Err(RuntimeError::ArgumentCountMismatch { expected: parameters.len(),
                                                                     found: arguments.len(),
                                                                     line }.into());
                }

                let mark = self.call_frames.len();
                let scope = self.enclosed_environment(function.env);
                self.call_frames.push(scope);
                for (parameter, argument) in parameters.iter().zip(arguments) {
                    self.heap.set(scope, parameter.name.as_str(), argument);
                }

                let result = match self.eval_block(&function.literal.body, scope) {
                    Ok(value) => Ok(value.unwrap_or(NULL)),
                    Err(Signal::Return(value)) => Ok(value),
                    Err(error) => Err(error),
                };
                self.release_call_frames(mark, result.as_ref().unwrap_or(&NULL));
                result
            },
            Value::Builtin(builtin) => Ok(builtin.call(&arguments, line)?),
            other => Err(RuntimeError::NotAFunction { kind: other.type_name(),
                                                      line }.into()),
        }
    }

    /// Frees the frames allocated since `mark` that `result` does not reach.
    ///
    /// A call only ever binds names in frames it allocated itself, so once it
    /// has returned its frames can be reached from outside through its result
    /// alone. Survivors stay on the stack for the enclosing call to examine;
    /// at the outermost call they are left to [`Evaluator::collect_garbage`].
    fn release_call_frames(&mut self, mark: usize, result: &Value) {
        let frames = self.call_frames.split_off(mark);
        let kept = self.heap.release(frames, result);
        if mark > 0 {
            self.call_frames.extend(kept);
        }
    }
}
