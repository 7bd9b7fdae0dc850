//! Existence checks: blank text and empty containers
//!
//! Absence itself is handled by `Option` and the
//! [`Required`](crate::combinators::Required) combinator; the checks here
//! assume a present value.

use std::marker::PhantomData;

use crate::foundation::{Check, SizedContainer, Violation};

// ============================================================================
// NON BLANK
// ============================================================================

crate::precondition! {
    /// Text must contain something other than whitespace.
    ///
    /// Whitespace here is every char up to and including U+0020: ASCII
    /// controls, NUL and space. Wider Unicode spaces such as U+00A0 count as
    /// content. The text itself is never modified.
    pub NonBlank for str;
    rule(input) { !input.trim_matches(is_blank_char).is_empty() }
    violation { Violation::Blank }
}

fn is_blank_char(c: char) -> bool {
    c <= ' '
}

// ============================================================================
// NON EMPTY
// ============================================================================

/// The candidate must hold at least one element.
///
/// Works for anything with the [`SizedContainer`] capability: text (no
/// trimming, so `"   "` passes), slices, arrays, vectors, sets and maps.
///
/// # Examples
///
/// ```
/// use require::checks::NonEmpty;
/// use require::foundation::{Check, Violation};
///
/// assert!(NonEmpty::<str>::new().check("   ").is_ok());
/// assert_eq!(NonEmpty::<[u8]>::new().check(&[]), Err(Violation::Empty));
/// ```
pub struct NonEmpty<C: ?Sized> {
    _marker: PhantomData<fn(&C)>,
}

impl<C: SizedContainer + ?Sized> NonEmpty<C> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<C: SizedContainer + ?Sized> Default for NonEmpty<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> Clone for NonEmpty<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for NonEmpty<C> {}

impl<C: ?Sized> std::fmt::Debug for NonEmpty<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("NonEmpty")
    }
}

impl<C: SizedContainer + ?Sized> Check for NonEmpty<C> {
    type Input = C;

    fn check(&self, input: &Self::Input) -> Result<(), Violation> {
        if input.has_no_elements() {
            Err(Violation::Empty)
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
