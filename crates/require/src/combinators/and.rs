//! AND combinator - ordered conjunction of checks
//!
//! This module provides the [`And`] combinator which runs two checks in a
//! fixed order. Both must pass; the first violation is reported and the
//! second check is not evaluated.
//!
//! # Examples
//!
//! ```
//! use require::combinators::And;
//! use require::checks::{LengthRange, NonBlank};
//! use require::foundation::{Check, Violation};
//!
//! let check = And::new(NonBlank, LengthRange::new(1, 5));
//! assert!(check.check("hello").is_ok());
//! assert_eq!(check.check("  "), Err(Violation::Blank));
//! ```

use crate::foundation::{Check, Violation};

/// Combines two checks with logical AND.
///
/// `left` always runs first; its violation wins over any violation `right`
/// would have reported.
///
/// # Type Parameters
///
/// * `L` - The left (first) check type
/// * `R` - The right (second) check type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left check.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right check.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right checks.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Check for And<L, R>
where
    L: Check,
    R: Check<Input = L::Input>,
{
    type Input = L::Input;

    fn check(&self, input: &Self::Input) -> Result<(), Violation> {
        self.left.check(input)?;
        self.right.check(input)
    }
}

/// Creates an `And` combinator from two checks.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Check,
    R: Check<Input = L::Input>,
{
    And::new(left, right)
}

// ============================================================================
// TESTS
// ============================================================================
