//! Core traits for the check system
//!
//! This module defines the trait every reusable check implements and the
//! extension trait used to compose them.

use crate::foundation::{InvalidArgument, Violation};

// ============================================================================
// CORE CHECK TRAIT
// ============================================================================

/// A single precondition over an input type.
///
/// `check` answers which invariant (if any) the input breaks. `require` is the
/// boundary form: it attaches the caller's label and yields the
/// [`InvalidArgument`] fault.
///
/// # Type Parameters
///
/// * `Input` - The type being checked (can be `?Sized` for `str` and `[T]`)
///
/// # Examples
///
/// ```
/// use require::foundation::{Check, Violation};
///
/// struct Even;
///
/// impl Check for Even {
///     type Input = u32;
///
///     fn check(&self, input: &u32) -> Result<(), Violation> {
///         if input % 2 == 0 { Ok(()) } else { Err(Violation::InvalidFormat) }
///     }
/// }
///
/// assert!(Even.require(&4, "count").is_ok());
/// assert_eq!(
///     Even.require(&3, "count").unwrap_err().to_string(),
///     "The value of [count] has invalid format."
/// );
/// ```
pub trait Check {
    /// The type of input being checked.
    type Input: ?Sized;

    /// Checks the input.
    ///
    /// Returns the first broken invariant, in the check's documented order.
    fn check(&self, input: &Self::Input) -> Result<(), Violation>;

    /// Checks the input and labels any violation.
    fn require(&self, input: &Self::Input, label: &str) -> Result<(), InvalidArgument> {
        self.check(input).map_err(|violation| violation.labeled(label))
    }
}

impl<C: Check + ?Sized> Check for &C {
    type Input = C::Input;

    fn check(&self, input: &Self::Input) -> Result<(), Violation> {
        (**self).check(input)
    }
}

// ============================================================================
// CHECK EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for checks.
///
/// Automatically implemented for every [`Check`].
///
/// # Examples
///
/// ```
/// use require::prelude::*;
///
/// let check = NonBlank.and(LengthRange::new(1, 8));
/// assert!(check.check("alice").is_ok());
/// assert_eq!(check.check("   "), Err(Violation::Blank));
/// ```
pub trait CheckExt: Check + Sized {
    /// Combines two checks with logical AND.
    ///
    /// `self` runs first; the first violation is returned and `other` is not
    /// evaluated.
    fn and<C>(self, other: C) -> And<Self, C>
    where
        C: Check<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Lifts the check over `Option`, failing with [`Violation::Null`] on `None`.
    fn required(self) -> Required<Self> {
        Required::new(self)
    }
}

impl<T: Check> CheckExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::required::Required;

// ============================================================================
// TESTS
// ============================================================================
