/// Closure application and the builtin table.
///
/// Defines the builtin registry through the `builtin_functions!` macro and
/// applies both user functions and builtins to evaluated arguments.
pub mod core;

/// Built-in function implementations.
///
/// Array and string helpers available by default in the interpreter.
pub mod builtin;

/// The `print` function implementation.
///
/// Outputs its arguments to standard output.
pub mod print;
