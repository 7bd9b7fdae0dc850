//! Text length checks
//!
//! Length is measured in Unicode scalar values (chars) by default. The
//! `.bytes()` constructors count bytes instead, for inputs known to be ASCII.

use crate::checks::NonBlank;
use crate::combinators::And;
use crate::foundation::Violation;

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count text length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values (correct for all text).
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// LENGTH RANGE
// ============================================================================

crate::precondition! {
    /// Text length must lie in `min..=max`; both bounds inclusive.
    ///
    /// Bounds are taken as given. With `min > max` every input fails.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub LengthRange { min: usize, max: usize, mode: LengthMode } for str;
    rule(self, input) { (self.min..=self.max).contains(&self.mode.measure(input)) }
    violation(self) { Violation::LengthOutOfRange { min: self.min, max: self.max } }
    new(min: usize, max: usize) { Self { min, max, mode: LengthMode::Chars } }
}

impl LengthRange {
    /// Length range `0..=max`.
    #[must_use]
    pub const fn at_most(max: usize) -> Self {
        Self {
            min: 0,
            max,
            mode: LengthMode::Chars,
        }
    }

    /// Creates a length range check that counts bytes.
    #[must_use]
    pub const fn bytes(min: usize, max: usize) -> Self {
        Self {
            min,
            max,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::precondition! {
    /// Text must be at least `min` long.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) >= self.min }
    violation(self) { Violation::TooShort { min: self.min } }
    new(min: usize) { Self { min, mode: LengthMode::Chars } }
}

impl MinLength {
    /// Creates a minimum length check that counts bytes.
    #[must_use]
    pub const fn bytes(min: usize) -> Self {
        Self {
            min,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// NON BLANK + MAX LENGTH
// ============================================================================

/// Non-blank text no longer than a maximum: blankness first, then `1..=max`.
pub type NonBlankMaxLength = And<NonBlank, LengthRange>;

/// Builds the non-blank, bounded-length check.
///
/// The blank check runs first, so whitespace-only text within the bounds
/// reports [`Violation::Blank`] rather than a length violation.
#[must_use]
pub fn non_blank_with_max_length(max: usize) -> NonBlankMaxLength {
    And::new(NonBlank, LengthRange::new(1, max))
}

// ============================================================================
// TESTS
// ============================================================================
