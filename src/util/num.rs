/// Safely converts a `usize` to `i64` if and only if it fits.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `i64::MAX`.
///
/// ## Parameters
/// - `value`: The length or count to convert.
/// - `error`: The error to return if the conversion would wrap.
///
/// ## Example
/// ```
/// use vabna::util::num::usize_to_i64_checked;
///
/// assert_eq!(usize_to_i64_checked(42, "too big!"), Ok(42));
/// assert_eq!(usize_to_i64_checked(usize::MAX, "too big!"), Err("too big!"));
/// ```
pub fn usize_to_i64_checked<E>(value: usize, error: E) -> Result<i64, E> {
    i64::try_from(value).map_err(|_| error)
}

/// Converts a program-level index into a position within a sequence of
/// length `len`.
///
/// ## Returns
/// `Some(position)` when `0 <= index < len`, `None` otherwise. Negative
/// indices do not count from the end.
///
/// ## Example
/// ```
/// use vabna::util::num::checked_index;
///
/// assert_eq!(checked_index(1, 3), Some(1));
/// assert_eq!(checked_index(3, 3), None);
/// assert_eq!(checked_index(-1, 3), None);
/// ```
#[must_use]
pub fn checked_index(index: i64, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&position| position < len)
}
