/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between the integer
/// types used by the interpreter (`i64` for program values, `usize` for
/// lengths and positions) without risking silent truncation or sign loss.
pub mod num;
