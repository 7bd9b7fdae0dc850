//! REQUIRED combinator - absence check, then delegate
//!
//! # Examples
//!
//! ```
//! use require::checks::GreaterThanZero;
//! use require::combinators::Required;
//! use require::foundation::{Check, Violation};
//!
//! let check = Required::new(GreaterThanZero::<i32>::new());
//! assert!(check.check(&Some(5)).is_ok());
//! assert_eq!(check.check(&Some(0)), Err(Violation::NotGreaterThanZero));
//! assert_eq!(check.check(&None), Err(Violation::Null));
//! ```

use crate::foundation::{Check, Violation};

/// Lifts a check over `Option`.
///
/// `None` fails with [`Violation::Null`] and the inner check is never run.
/// `Some(value)` is handed to the inner check unchanged, so the nullable and
/// non-nullable forms of a check always agree on present values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Required<C> {
    pub(crate) inner: C,
}

impl<C> Required<C> {
    /// Creates a new `Required` combinator.
    pub const fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner check.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Extracts the inner check.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C, T> Check for Required<C>
where
    C: Check<Input = T>,
{
    type Input = Option<T>;

    fn check(&self, input: &Self::Input) -> Result<(), Violation> {
        match input {
            None => Err(Violation::Null),
            Some(value) => self.inner.check(value),
        }
    }
}

/// Creates a `Required` combinator around a check.
pub fn required<C>(check: C) -> Required<C> {
    Required::new(check)
}
