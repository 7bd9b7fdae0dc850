//! Prelude module for convenient imports.
//!
//! `use require::prelude::*;` brings in the check traits, the fault types,
//! the built-in checks and combinators, and the catalog functions.
//!
//! # Examples
//!
//! ```
//! use require::prelude::*;
//!
//! let port = greater_than_zero(non_null(Some(8080_u16), "port")?, "port")?;
//! let name = NonBlank.and(LengthRange::new(1, 16));
//! name.require("gateway", "name")?;
//! # assert_eq!(port, 8080);
//! # Ok::<(), InvalidArgument>(())
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, capabilities
// ============================================================================

pub use crate::foundation::{
    Check, CheckExt, Cursor, InvalidArgument, Numeric, RequireResult, SizedContainer, Violation,
};

// ============================================================================
// CHECKS: All built-in checks
// ============================================================================

pub use crate::checks::{
    GreaterThanZero, LengthMode, LengthRange, LessThanZero, MinLength, Negative, NonBlank,
    NonBlankMaxLength, NonEmpty, Pattern, Positive, non_blank_with_max_length,
};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{And, Required, and, required};

// ============================================================================
// CATALOG: Free functions
// ============================================================================

pub use crate::catalog::{
    format, greater_than_zero, length, less_than_zero, max_length, min_length, negative,
    non_blank, non_blank_max_length, non_empty, non_empty_cursor, non_null, nullable, positive,
};
