//! The single fault kind raised by every check.
//!
//! A check reports *which* invariant broke as a [`Violation`]. The caller-facing
//! fault is [`InvalidArgument`]: the violation, the label of the offending
//! argument and the message rendered from the violation's template.
//!
//! Messages never contain the candidate value, only the label and numeric
//! bounds, so faults are safe to log and to return to remote callers.

use std::fmt;

use smallvec::SmallVec;

// ============================================================================
// VIOLATION
// ============================================================================

/// Which precondition was broken, together with the parameters its message
/// template needs.
///
/// There is exactly one fault kind ([`InvalidArgument`]); this enum only
/// selects its message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "code", rename_all = "snake_case"))]
pub enum Violation {
    /// The value is absent.
    Null,
    /// The text is empty once surrounding whitespace is trimmed.
    Blank,
    /// The text or container has no elements.
    Empty,
    /// The text does not fully match the expected pattern.
    InvalidFormat,
    /// The text length is outside `min..=max`.
    LengthOutOfRange {
        /// Inclusive lower bound.
        min: usize,
        /// Inclusive upper bound.
        max: usize,
    },
    /// The text is shorter than `min`.
    TooShort {
        /// Inclusive lower bound.
        min: usize,
    },
    /// The number is below zero.
    NotPositive,
    /// The number is zero or below.
    NotGreaterThanZero,
    /// The number is above zero.
    NotNegative,
    /// The number is zero or above.
    NotLessThanZero,
}

impl Violation {
    /// Stable machine-readable code, suitable for metrics and API bodies.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Blank => "blank",
            Self::Empty => "empty",
            Self::InvalidFormat => "invalid_format",
            Self::LengthOutOfRange { .. } => "length_out_of_range",
            Self::TooShort { .. } => "too_short",
            Self::NotPositive => "not_positive",
            Self::NotGreaterThanZero => "not_greater_than_zero",
            Self::NotNegative => "not_negative",
            Self::NotLessThanZero => "not_less_than_zero",
        }
    }

    /// Numeric parameters substituted into the template, in template order.
    #[must_use]
    pub fn params(&self) -> SmallVec<[(&'static str, usize); 2]> {
        match *self {
            Self::LengthOutOfRange { min, max } => smallvec::smallvec![("min", min), ("max", max)],
            Self::TooShort { min } => smallvec::smallvec![("min", min)],
            _ => SmallVec::new(),
        }
    }

    /// Renders the message template for the given label.
    #[must_use]
    pub fn render(&self, label: &str) -> String {
        match *self {
            Self::Null => format!("The value of [{label}] must not be null."),
            Self::Blank => format!("The value of [{label}] must not be blank."),
            Self::Empty => format!("The value of [{label}] must not be empty."),
            Self::InvalidFormat => format!("The value of [{label}] has invalid format."),
            Self::LengthOutOfRange { min, max } => {
                format!("The length of [{label}] must be between {min}-{max}.")
            }
            Self::TooShort { min } => format!("The length of [{label}] must at least {min}."),
            Self::NotPositive => format!("The value of [{label}] must be positive or 0."),
            Self::NotGreaterThanZero => format!("The value of [{label}] must be greater than 0."),
            Self::NotNegative => format!("The value of [{label}] must be negative or 0."),
            Self::NotLessThanZero => format!("The value of [{label}] must be less than 0."),
        }
    }

    /// Attaches a label, producing the caller-facing fault.
    ///
    /// This is the only way a violation leaves the catalog, and the point where
    /// the `precondition violated` debug event is emitted.
    #[must_use]
    pub fn labeled(self, label: &str) -> InvalidArgument {
        tracing::debug!(label, code = self.code(), "precondition violated");
        InvalidArgument::new(self, label)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// INVALID ARGUMENT
// ============================================================================

/// The caller supplied an argument that breaks a stated precondition.
///
/// This is a programming error on the caller's side, never an environment
/// fault, and retrying with the same input fails the same way. The message is
/// rendered once, when the fault is created.
///
/// # Examples
///
/// ```
/// use require::{InvalidArgument, Violation};
///
/// let err: InvalidArgument = require::non_blank("  ", "username").unwrap_err();
/// assert_eq!(err.violation(), Violation::Blank);
/// assert_eq!(err.to_string(), "The value of [username] must not be blank.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{message}")]
pub struct InvalidArgument {
    violation: Violation,
    label: String,
    message: String,
}

impl InvalidArgument {
    fn new(violation: Violation, label: &str) -> Self {
        Self {
            violation,
            label: label.to_owned(),
            message: violation.render(label),
        }
    }

    /// Which precondition was broken.
    #[must_use]
    pub fn violation(&self) -> Violation {
        self.violation
    }

    /// Shorthand for `self.violation().code()`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.violation.code()
    }

    /// The label of the offending argument.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The fully rendered message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Converts the fault to a JSON object for error response bodies.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .violation
            .params()
            .into_iter()
            .map(|(k, v)| (k.to_owned(), json!(v)))
            .collect();

        json!({
            "code": self.code(),
            "label": self.label,
            "message": self.message,
            "params": params,
        })
    }
}

/// Result of a catalog call: the checked value or the fault.
pub type RequireResult<T> = Result<T, InvalidArgument>;

// ============================================================================
// TESTS
// ============================================================================
