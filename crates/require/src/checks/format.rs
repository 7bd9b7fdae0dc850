//! Text format checks
//!
//! A [`Pattern`] only ever matches a whole input. The check never reports the
//! pattern or the text, only that the format is invalid, so give the
//! candidate a descriptive label.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::foundation::{Check, Violation};

// ============================================================================
// PATTERN
// ============================================================================

/// A compiled regular expression that must match the entire input.
///
/// A pattern is itself a [`Check`] over `str`, failing with
/// [`Violation::InvalidFormat`].
///
/// `Pattern::new(r"\d+")` accepts `"123"` but not `"123 "` or `"a123"`. The
/// source is compiled as written first, so a source that only parses thanks
/// to the wrapping group (such as `a)|(b`) is rejected.
///
/// # Examples
///
/// ```
/// use require::checks::Pattern;
///
/// let digits = Pattern::new(r"\d+").unwrap();
/// assert!(digits.matches("123"));
/// assert!(!digits.matches("123 "));
///
/// // Alternation still has to cover the whole input
/// let ab = Pattern::new("a|ab").unwrap();
/// assert!(ab.matches("ab"));
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    source: Box<str>,
    anchored: Regex,
}

impl Pattern {
    /// Compiles `source` for full-input matching.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source)?;
        // Retry with a trailing newline so a `(?x)` comment on the last line
        // cannot swallow the closing anchor.
        let anchored = Regex::new(&format!(r"\A(?:{source})\z"))
            .or_else(|_| Regex::new(&format!("\\A(?:{source}\n)\\z")))?;
        Ok(Self {
            source: source.into(),
            anchored,
        })
    }

    /// The source as given to [`Pattern::new`].
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns `true` if the whole of `text` matches.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.anchored.is_match(text)
    }
}

impl FromStr for Pattern {
    type Err = regex::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&Regex> for Pattern {
    type Error = regex::Error;

    fn try_from(regex: &Regex) -> Result<Self, Self::Error> {
        Self::new(regex.as_str())
    }
}

impl TryFrom<Regex> for Pattern {
    type Error = regex::Error;

    fn try_from(regex: Regex) -> Result<Self, Self::Error> {
        Self::new(regex.as_str())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Check for Pattern {
    type Input = str;

    fn check(&self, input: &Self::Input) -> Result<(), Violation> {
        if self.matches(input) {
            Ok(())
        } else {
            Err(Violation::InvalidFormat)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
