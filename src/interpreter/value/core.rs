use std::{fmt, rc::Rc};

use crate::{
    ast::FunctionLiteral,
    interpreter::{evaluator::function::core::Builtin, value::environment::Env},
};

/// Represents a runtime value in the interpreter.
///
/// Values are cheap to clone: strings, arrays and functions are shared behind
/// reference counts and are never mutated after creation.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// `true` or `false`. Use [`TRUE`] and [`FALSE`].
    Boolean(bool),
    /// An immutable string.
    String(Rc<str>),
    /// An ordered, immutable sequence of values.
    Array(Rc<Vec<Self>>),
    /// The absence of a value. Use [`NULL`].
    Null,
    /// A closure: a function literal plus the environment it was created in.
    Function(Rc<Function>),
    /// A native function from the builtin table.
    Builtin(&'static Builtin),
}

/// The shared `true` value.
pub const TRUE: Value = Value::Boolean(true);
/// The shared `false` value.
pub const FALSE: Value = Value::Boolean(false);
/// The shared null value.
pub const NULL: Value = Value::Null;

/// A user-defined function value.
///
/// The captured environment is shared, not copied: bindings added to it after
/// the closure was created are visible when the closure runs.
#[derive(Debug)]
pub struct Function {
    /// Parameters and body.
    pub literal: Rc<FunctionLiteral>,
    /// The environment active where the literal was evaluated.
    pub env:     Env,
}

impl Value {
    /// Returns the name of the value's type as used in error messages.
    ///
    /// # Example
    /// ```
    /// use vabna::interpreter::value::core::{NULL, Value};
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "INTEGER");
    /// assert_eq!(NULL.type_name(), "NULL");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::String(_) => "STRING",
            Self::Array(_) => "ARRAY",
            Self::Null => "NULL",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
        }
    }

    /// Tests whether the value counts as true in a condition.
    ///
    /// Only [`NULL`] and [`FALSE`] are falsy. Every other value, including
    /// the integer `0` and the empty string, is truthy.
    ///
    /// # Example
    /// ```
    /// use vabna::interpreter::value::core::{FALSE, NULL, Value};
    ///
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(!FALSE.is_truthy());
    /// assert!(!NULL.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Boolean(false))
    }

    /// Tests whether two values are the same object.
    ///
    /// Booleans and null compare by value, arrays, functions and builtins by
    /// identity. Values of different types are never identical.
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::String(a), Self::String(b)) => Rc::ptr_eq(a, b),
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

/// Structural equality, used by tests and embedders.
///
/// Arrays compare element-wise; functions and builtins compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            _ => self.is_identical(other),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        if v { TRUE } else { FALSE }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Null => write!(f, "null"),
            Self::Function(function) => write!(f, "{}", function.literal),
            Self::Builtin(builtin) => write!(f, "builtin function {}", builtin.name),
        }
    }
}
