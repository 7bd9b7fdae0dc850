//! Core check types and traits
//!
//! This module contains the building blocks every check is made of:
//!
//! - **Traits**: [`Check`], [`CheckExt`]
//! - **Errors**: [`Violation`], [`InvalidArgument`]
//! - **Capabilities**: [`Numeric`], [`SizedContainer`], [`Cursor`]
//!
//! # Architecture
//!
//! ## 1. One fault kind
//!
//! A check reports a [`Violation`]. At the boundary the violation is labeled
//! with the argument name and becomes an [`InvalidArgument`], whose message is
//! rendered from a fixed template:
//!
//! ```
//! use require::foundation::Violation;
//!
//! let err = Violation::LengthOutOfRange { min: 1, max: 10 }.labeled("name");
//! assert_eq!(err.to_string(), "The length of [name] must be between 1-10.");
//! ```
//!
//! ## 2. Written against capabilities
//!
//! Checks are generic over what a type *can do* (report a size, compare
//! against zero), not over concrete types, so one definition covers every
//! container kind and every numeric representation.
//!
//! ## 3. Composition
//!
//! Checks compose in a fixed order and stop at the first violation:
//!
//! ```
//! use require::prelude::*;
//!
//! let check = NonBlank.and(LengthRange::new(1, 3));
//! assert_eq!(check.check(" "), Err(Violation::Blank));
//! assert_eq!(
//!     check.check("abcd"),
//!     Err(Violation::LengthOutOfRange { min: 1, max: 3 })
//! );
//! ```

pub mod capability;
pub mod error;
pub mod traits;

pub use capability::{Cursor, Numeric, SizedContainer};
pub use error::{InvalidArgument, RequireResult, Violation};
pub use traits::{Check, CheckExt};
