//! Combinators for composing checks
//!
//! - [`And`] - both checks must pass, left first, first violation wins
//! - [`Required`] - `None` fails as null, `Some` is delegated to the inner check
//!
//! A check reports the first broken invariant and stops, so there is no OR or
//! accumulating combinator.

pub mod and;
pub mod required;

pub use and::{And, and};
pub use required::{Required, required};
