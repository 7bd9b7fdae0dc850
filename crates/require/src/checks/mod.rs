//! Built-in checks
//!
//! Reusable check values, one per invariant of the catalog. The free
//! functions in the crate root are thin wrappers around these.
//!
//! # Categories
//!
//! - **Existence**: [`NonBlank`], [`NonEmpty`]
//! - **Length**: [`LengthRange`], [`MinLength`], [`NonBlankMaxLength`]
//! - **Format**: [`Pattern`], a full-match regular expression
//! - **Sign**: [`Positive`], [`Negative`], [`GreaterThanZero`], [`LessThanZero`]
//!
//! # Examples
//!
//! ```
//! use require::prelude::*;
//!
//! let quantity = GreaterThanZero::<u32>::new().required();
//! assert_eq!(quantity.check(&None), Err(Violation::Null));
//! assert_eq!(quantity.check(&Some(0)), Err(Violation::NotGreaterThanZero));
//! assert!(quantity.check(&Some(3)).is_ok());
//! ```

pub mod existence;
pub mod format;
pub mod length;
pub mod sign;

pub use existence::{NonBlank, NonEmpty};
pub use format::Pattern;
pub use length::{
    LengthMode, LengthRange, MinLength, NonBlankMaxLength, non_blank_with_max_length,
};
pub use sign::{GreaterThanZero, LessThanZero, Negative, Positive};
