/// Dispatch of binary operators on operand types.
pub mod core;

/// Arithmetic and ordering on integers.
pub mod integer;

/// Concatenation of strings.
pub mod string;

/// Equality on values with no type-specific rule.
pub mod comparison;
