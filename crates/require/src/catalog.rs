//! The check catalog
//!
//! Free functions taking a candidate and a label. Each returns the candidate
//! itself when the precondition holds, so calls chain and nest:
//!
//! ```
//! # fn main() -> Result<(), require::InvalidArgument> {
//! let name = require::non_blank_max_length("Ada Lovelace", 64, "name")?;
//! let age = require::positive(require::non_null(Some(36), "age")?, "age")?;
//! assert_eq!((name, age), ("Ada Lovelace", 36));
//! # Ok(())
//! # }
//! ```
//!
//! Absence is modelled with `Option`. [`non_null`] is the root check and
//! [`nullable`] lifts any other catalog function over `Option` by running
//! `non_null` first:
//!
//! ```
//! use require::{Violation, nullable};
//!
//! let err = nullable(None::<&str>, "comment", require::non_blank).unwrap_err();
//! assert_eq!(err.violation(), Violation::Null);
//! ```

use crate::checks::{
    GreaterThanZero, LengthRange, LessThanZero, MinLength, Negative, NonBlank, NonEmpty, Pattern,
    Positive,
};
use crate::foundation::{Check, Cursor, Numeric, RequireResult, SizedContainer, Violation};

// ============================================================================
// EXISTENCE
// ============================================================================

/// Requires a present value.
///
/// Fails with [`Violation::Null`]; returns the unwrapped value otherwise.
pub fn non_null<T>(value: Option<T>, label: &str) -> RequireResult<T> {
    value.ok_or_else(|| Violation::Null.labeled(label))
}

/// Runs `check` on a present value, failing as null on `None`.
///
/// The absence test always comes first, so `None` never reports a more
/// specific violation. `check` is any catalog function with the
/// `(value, label)` shape; wrap the ones taking bounds in a closure.
///
/// ```
/// # fn main() -> Result<(), require::InvalidArgument> {
/// let code = require::nullable(Some("EU-1"), "code", |v, l| require::length(v, 1, 8, l))?;
/// assert_eq!(code, "EU-1");
/// # Ok(())
/// # }
/// ```
pub fn nullable<T, F>(value: Option<T>, label: &str, check: F) -> RequireResult<T>
where
    F: FnOnce(T, &str) -> RequireResult<T>,
{
    check(non_null(value, label)?, label)
}

/// Requires text that is not empty after trimming surrounding whitespace.
///
/// Only chars up to U+0020 are trimmed (controls, NUL, space), so
/// `"\u{a0}"` is not blank. Returns the original, untrimmed text.
pub fn non_blank<S: AsRef<str>>(value: S, label: &str) -> RequireResult<S> {
    NonBlank.require(value.as_ref(), label)?;
    Ok(value)
}

/// Requires text or a container with at least one element.
///
/// Text is not trimmed: `"   "` passes. Covers every [`SizedContainer`]
/// (strings, slices, arrays, vectors, sets, maps, and references to them).
pub fn non_empty<C: SizedContainer>(value: C, label: &str) -> RequireResult<C> {
    NonEmpty::<C>::new().require(&value, label)?;
    Ok(value)
}

/// Requires a cursor with a next element available.
///
/// No element is consumed; the cursor is handed back ready to iterate.
///
/// ```
/// # fn main() -> Result<(), require::InvalidArgument> {
/// let mut rows = require::non_empty_cursor(vec![1, 2].into_iter().peekable(), "rows")?;
/// assert_eq!(rows.next(), Some(1));
/// # Ok(())
/// # }
/// ```
pub fn non_empty_cursor<C: Cursor>(mut cursor: C, label: &str) -> RequireResult<C> {
    if cursor.has_next() {
        Ok(cursor)
    } else {
        Err(Violation::Empty.labeled(label))
    }
}

// ============================================================================
// LENGTH
// ============================================================================

/// Requires a text length within `min_length..=max_length` (in chars).
///
/// Both bounds are inclusive and reported on failure. Bounds are not checked
/// for consistency; with `min_length > max_length` every text fails.
pub fn length<S: AsRef<str>>(
    value: S,
    min_length: usize,
    max_length: usize,
    label: &str,
) -> RequireResult<S> {
    LengthRange::new(min_length, max_length).require(value.as_ref(), label)?;
    Ok(value)
}

/// Requires a text no longer than `max_length`; same as `length(value, 0, max_length, label)`.
pub fn max_length<S: AsRef<str>>(value: S, max_length: usize, label: &str) -> RequireResult<S> {
    length(value, 0, max_length, label)
}

/// Requires a text at least `min_length` long.
///
/// Only the minimum is reported on failure.
pub fn min_length<S: AsRef<str>>(value: S, min_length: usize, label: &str) -> RequireResult<S> {
    MinLength::new(min_length).require(value.as_ref(), label)?;
    Ok(value)
}

/// Requires non-blank text no longer than `max_length`.
///
/// Blankness is checked first, so whitespace-only text reports
/// [`Violation::Blank`] even when its length is within bounds.
pub fn non_blank_max_length<S: AsRef<str>>(
    value: S,
    max_length: usize,
    label: &str,
) -> RequireResult<S> {
    length(non_blank(value, label)?, 1, max_length, label)
}

// ============================================================================
// FORMAT
// ============================================================================

/// Requires text that fully matches `pattern`.
///
/// The message names only the label, never the pattern or the text.
pub fn format<S: AsRef<str>>(value: S, pattern: &Pattern, label: &str) -> RequireResult<S> {
    pattern.require(value.as_ref(), label)?;
    Ok(value)
}

// ============================================================================
// SIGN
// ============================================================================

/// Requires `value >= 0`.
pub fn positive<N: Numeric>(value: N, label: &str) -> RequireResult<N> {
    Positive::<N>::new().require(&value, label)?;
    Ok(value)
}

/// Requires `value <= 0`.
pub fn negative<N: Numeric>(value: N, label: &str) -> RequireResult<N> {
    Negative::<N>::new().require(&value, label)?;
    Ok(value)
}

/// Requires `value > 0`.
pub fn greater_than_zero<N: Numeric>(value: N, label: &str) -> RequireResult<N> {
    GreaterThanZero::<N>::new().require(&value, label)?;
    Ok(value)
}

/// Requires `value < 0`.
pub fn less_than_zero<N: Numeric>(value: N, label: &str) -> RequireResult<N> {
    LessThanZero::<N>::new().require(&value, label)?;
    Ok(value)
}

// ============================================================================
// TESTS
// ============================================================================
