//! Sign checks over any [`Numeric`] representation
//!
//! Each comparison is written once against `Numeric::ZERO` and applies to
//! every primitive integer and float type.
//!
//! | Check | Passes when |
//! |---|---|
//! | [`Positive`] | `n >= 0` |
//! | [`Negative`] | `n <= 0` |
//! | [`GreaterThanZero`] | `n > 0` |
//! | [`LessThanZero`] | `n < 0` |
//!
//! Negative zero equals zero, so `Positive` and `Negative` both accept `-0.0`
//! while both strict checks reject it. `NaN` is unordered and fails all four.

use crate::foundation::{Numeric, Violation};

crate::precondition! {
    /// The number must be zero or above.
    pub Positive<T: Numeric> for T;
    rule(input) { *input >= T::ZERO }
    violation { Violation::NotPositive }
}

crate::precondition! {
    /// The number must be zero or below.
    pub Negative<T: Numeric> for T;
    rule(input) { *input <= T::ZERO }
    violation { Violation::NotNegative }
}

crate::precondition! {
    /// The number must be strictly above zero.
    pub GreaterThanZero<T: Numeric> for T;
    rule(input) { *input > T::ZERO }
    violation { Violation::NotGreaterThanZero }
}

crate::precondition! {
    /// The number must be strictly below zero.
    pub LessThanZero<T: Numeric> for T;
    rule(input) { *input < T::ZERO }
    violation { Violation::NotLessThanZero }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Check;

    #[test]
    fn test_positive_is_inclusive() {
        assert!(Positive::<i32>::new().check(&0).is_ok());
        assert!(Positive::<i32>::new().check(&i32::MAX).is_ok());
        assert_eq!(Positive::<i32>::new().check(&-1), Err(Violation::NotPositive));
        assert_eq!(
            Positive::<i64>::new().check(&i64::MIN),
            Err(Violation::NotPositive)
        );
    }

    #[test]
    fn test_greater_than_zero_is_strict() {
        assert!(GreaterThanZero::<i64>::new().check(&1).is_ok());
        assert_eq!(
            GreaterThanZero::<i64>::new().check(&0),
            Err(Violation::NotGreaterThanZero)
        );
    }

    #[test]
    fn test_negative_is_inclusive() {
        assert!(Negative::<i32>::new().check(&0).is_ok());
        assert!(Negative::<i32>::new().check(&i32::MIN).is_ok());
        assert_eq!(Negative::<i32>::new().check(&1), Err(Violation::NotNegative));
    }

    #[test]
    fn test_less_than_zero_is_strict() {
        assert!(LessThanZero::<i64>::new().check(&-1).is_ok());
        assert_eq!(
            LessThanZero::<i64>::new().check(&0),
            Err(Violation::NotLessThanZero)
        );
    }

    #[test]
    fn test_negative_zero() {
        assert!(Positive::<f64>::new().check(&-0.0).is_ok());
        assert!(Negative::<f64>::new().check(&-0.0).is_ok());
        assert!(GreaterThanZero::<f32>::new().check(&-0.0).is_err());
        assert!(LessThanZero::<f32>::new().check(&-0.0).is_err());
    }

    #[test]
    fn test_float_extremes() {
        assert!(Positive::<f64>::new().check(&f64::MIN_POSITIVE).is_ok());
        assert!(GreaterThanZero::<f32>::new().check(&f32::MIN_POSITIVE).is_ok());
        assert!(LessThanZero::<f64>::new().check(&f64::NEG_INFINITY).is_ok());
        assert!(Positive::<f64>::new().check(&f64::INFINITY).is_ok());
    }

    #[test]
    fn test_nan_fails_everything() {
        assert!(Positive::<f64>::new().check(&f64::NAN).is_err());
        assert!(Negative::<f64>::new().check(&f64::NAN).is_err());
        assert!(GreaterThanZero::<f32>::new().check(&f32::NAN).is_err());
        assert!(LessThanZero::<f32>::new().check(&f32::NAN).is_err());
    }

    #[test]
    fn test_unsigned() {
        assert!(Positive::<u8>::new().check(&0).is_ok());
        assert!(Negative::<u64>::new().check(&0).is_ok());
        assert!(Negative::<u64>::new().check(&1).is_err());
        assert!(LessThanZero::<usize>::new().check(&0).is_err());
    }
}
