/// Core evaluation logic and evaluator state.
///
/// Contains the evaluator, the signal type used to unwind on `return` and on
/// errors, and the dispatch over every statement and expression kind.
pub mod core;

/// Evaluation of blocks and conditionals.
///
/// Blocks run in the environment they are entered from and pass signals
/// outward untouched.
pub mod block;

/// Unary operator evaluation logic.
///
/// Implements logical NOT by truthiness and checked integer negation.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Handles integer arithmetic and comparison, string concatenation and
/// generic equality.
pub mod binary;

/// Evaluation of index expressions.
pub mod index;

/// Function evaluation.
///
/// Handles closure application, the builtin table and the builtins
/// themselves.
pub mod function;

/// Utility functions for evaluation.
///
/// Provides helpers shared by evaluation logic and the builtins.
pub mod utils;
