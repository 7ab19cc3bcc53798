//! Error types
//!
//! Two failure shapes exist and they never mix:
//!
//! - [`ValidationError`] is the structured report for a value that does not
//!   satisfy a rule. It carries a stable `code` and its params for whoever
//!   renders messages; the English `message` is only a default.
//! - [`RuleError`] is a construction-time fault, e.g. a malformed pattern
//!   handed to a `Match` rule. Validation itself never produces one.
//!
//! String fields use `Cow<'static, str>` so static codes and messages do not
//! allocate.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Param storage; rules attach at most three.
pub type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 3]>;

/// Why a value did not satisfy a rule.
///
/// # Examples
///
/// ```
/// use sieve_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min", "Value must be at least 10")
///     .with_param("min", "10")
///     .with_param("actual", "9");
///
/// assert_eq!(error.param("actual"), Some("9"));
/// assert_eq!(error.to_string(), "min: Value must be at least 10 (min=10, actual=9)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Stable error code, e.g. `"min_size"` or `"email"`.
    pub code: Cow<'static, str>,

    /// Default human-readable message in English.
    pub message: Cow<'static, str>,

    /// Ordered key/value params describing the failure.
    pub params: Params,
}

impl ValidationError {
    /// Creates an error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Adds a param.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a param by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.params.is_empty() {
            f.write_str(" (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            f.write_str(")")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// RULE ERROR
// ============================================================================

/// A rule could not be constructed.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RuleError {
    /// The regular expression does not compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The offending pattern source.
        pattern: String,
        /// The compiler's diagnosis.
        #[source]
        source: regex::Error,
    },
}

// ============================================================================
// TESTS
// ============================================================================
