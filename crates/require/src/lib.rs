//! # require
//!
//! Precondition checks for function arguments. Every check either hands the
//! argument back unchanged or fails with one fault kind, [`InvalidArgument`],
//! whose message names the offending argument by its label.
//!
//! ## Quick Start
//!
//! ```
//! use require::RequireResult;
//!
//! struct Account {
//!     owner: String,
//!     limit: i64,
//! }
//!
//! fn open(owner: Option<String>, limit: i64) -> RequireResult<Account> {
//!     let owner = require::nullable(owner, "owner", |v, l| require::non_blank_max_length(v, 32, l))?;
//!     let limit = require::greater_than_zero(limit, "limit")?;
//!     Ok(Account { owner, limit })
//! }
//!
//! assert!(open(Some("Ada".into()), 100).is_ok());
//! let err = open(None, 100).err().unwrap();
//! assert_eq!(err.to_string(), "The value of [owner] must not be null.");
//! ```
//!
//! ## Catalog
//!
//! - **Existence**: [`non_null`], [`nullable`], [`non_blank`], [`non_empty`],
//!   [`non_empty_cursor`]
//! - **Length**: [`length`], [`max_length`], [`min_length`],
//!   [`non_blank_max_length`]
//! - **Format**: [`format()`]
//! - **Sign**: [`positive`], [`negative`], [`greater_than_zero`],
//!   [`less_than_zero`]
//!
//! The same invariants exist as reusable values under [`checks`], composable
//! with [`CheckExt`](foundation::CheckExt). Use the [`precondition!`] macro to
//! declare new ones.

// InvalidArgument carries its rendered message; boxing it would allocate twice
// on every failing call.
#![allow(clippy::result_large_err)]

mod catalog;
pub mod checks;
pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;

pub use catalog::*;
pub use foundation::{InvalidArgument, RequireResult, Violation};
