//! Macros for declaring checks with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`precondition!`]: declare a complete check (struct + `Check` impl +
//!   constructor + optional factory fn)
//!
//! # Examples
//!
//! ```
//! use require::precondition;
//! use require::foundation::{Check, Violation};
//!
//! // Unit check (no fields)
//! precondition! {
//!     /// Accepts ASCII-only text.
//!     pub AsciiOnly for str;
//!     rule(input) { input.is_ascii() }
//!     violation { Violation::InvalidFormat }
//!     fn ascii_only();
//! }
//!
//! assert!(ascii_only().check("abc").is_ok());
//! assert_eq!(AsciiOnly.check("é"), Err(Violation::InvalidFormat));
//! ```

// ============================================================================
// PRECONDITION MACRO
// ============================================================================

/// Declares a check: struct definition, [`Check`](crate::foundation::Check)
/// implementation, constructor and optional factory function.
///
/// `rule` is the condition that must hold; `violation` is what is reported
/// when it does not.
///
/// # Variants
///
/// **Unit check** (zero-sized, no fields):
/// ```rust,ignore
/// precondition! {
///     pub NonBlank for str;
///     rule(input) { !input.trim_matches(|c: char| c <= ' ').is_empty() }
///     violation { Violation::Blank }
///     fn non_blank_check();
/// }
/// ```
///
/// **Struct with fields** (custom constructor required):
/// ```rust,ignore
/// precondition! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MinLength { min: usize, mode: LengthMode } for str;
///     rule(self, input) { self.mode.measure(input) >= self.min }
///     violation(self) { Violation::TooShort { min: self.min } }
///     new(min: usize) { Self { min, mode: LengthMode::Chars } }
/// }
/// ```
///
/// **Generic marker check** (one type parameter, no fields):
/// ```rust,ignore
/// precondition! {
///     pub Positive<T: Numeric> for T;
///     rule(input) { *input >= T::ZERO }
///     violation { Violation::NotPositive }
/// }
/// ```
#[macro_export]
macro_rules! precondition {
    // ── Variant 1a: Unit check + factory fn ──────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        violation $err:block
        fn $factory:ident();
    ) => {
        $crate::precondition! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            violation $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit check, no factory ───────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        violation $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Check for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn check(&self, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::Violation> {
                if $rule {
                    Ok(())
                } else {
                    Err($err)
                }
            }
        }
    };

    // ── Variant 2a: Struct with fields + custom new + factory fn ─────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        violation($self2:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::precondition! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            violation($self2) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + custom new, no factory ──────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        violation($self2:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Check for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn check(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::Violation> {
                if $rule {
                    Ok(())
                } else {
                    Err($err)
                }
            }
        }
    };

    // ── Variant 3: Generic marker check, no fields ───────────────────────
    //
    // Supports a single type parameter with one or more trait bounds.
    // Bounds must be simple identifiers (use imports for paths).
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*> for $input:ty;
        rule($inp:ident) $rule:block
        violation $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name<$gen> {
            _marker: ::std::marker::PhantomData<fn() -> $gen>,
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub const fn new() -> Self {
                Self { _marker: ::std::marker::PhantomData }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> ::std::default::Default for $name<$gen> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Check for $name<$gen> {
            type Input = $input;

            fn check(&self, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::Violation> {
                if $rule {
                    Ok(())
                } else {
                    Err($err)
                }
            }
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================
