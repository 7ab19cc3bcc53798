//! Declarative validation rules.
//!
//! A [`ValidationRule`] is a pure data description of one constraint. It can
//! be deserialized from configuration and turned into a ready validator with
//! [`ValidationRule::build`]:
//!
//! ```
//! use sieve_validator::prelude::*;
//!
//! let rule: ValidationRule = serde_json::from_str(r#"{"rule": "range", "min": 10, "max": 100}"#)?;
//! let validator = rule.build()?;
//! assert!(validator.is_satisfied(&Value::Int(50)));
//! assert!(!validator.is_satisfied(&Value::Int(101)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::foundation::{RuleError, Validator};
use crate::validators::{Email, Length, Match, Max, MaxSize, Min, MinSize, Range, Required};

/// A declarative validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ValidationRule {
    /// Value must be present and non-zero.
    Required,

    /// Integer must be >= `value`.
    Min { value: i64 },

    /// Integer must be <= `value`.
    Max { value: i64 },

    /// Integer must lie in `min..=max`. An inverted range is accepted and
    /// never satisfied.
    Range { min: i64, max: i64 },

    /// Text or sequence must have at least `size` elements.
    MinSize { size: usize },

    /// Text or sequence must have at most `size` elements.
    MaxSize { size: usize },

    /// Text or sequence must have exactly `length` elements.
    Length { length: usize },

    /// Text must contain a match of `pattern`.
    Match { pattern: String },

    /// Text must be a well-formed e-mail address.
    Email,
}

impl ValidationRule {
    /// Require a minimum integer.
    #[must_use]
    pub const fn min(value: i64) -> Self {
        Self::Min { value }
    }

    /// Require a maximum integer.
    #[must_use]
    pub const fn max(value: i64) -> Self {
        Self::Max { value }
    }

    /// Require an integer within an inclusive range.
    #[must_use]
    pub const fn range(min: i64, max: i64) -> Self {
        Self::Range { min, max }
    }

    /// Require text to match a regex pattern.
    #[must_use]
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::Match {
            pattern: pattern.into(),
        }
    }

    /// The error code reported by the validator this rule builds.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Min { .. } => "min",
            Self::Max { .. } => "max",
            Self::Range { .. } => "range",
            Self::MinSize { .. } => "min_size",
            Self::MaxSize { .. } => "max_size",
            Self::Length { .. } => "length",
            Self::Match { .. } => "match",
            Self::Email => "email",
        }
    }

    /// Builds the validator described by this rule.
    ///
    /// Only `Match` can fail, when its pattern does not compile.
    pub fn build(&self) -> Result<Box<dyn Validator>, RuleError> {
        let validator: Box<dyn Validator> = match self {
            Self::Required => Box::new(Required),
            Self::Min { value } => Box::new(Min::new(*value)),
            Self::Max { value } => Box::new(Max::new(*value)),
            Self::Range { min, max } => Box::new(Range::new(*min, *max)),
            Self::MinSize { size } => Box::new(MinSize::new(*size)),
            Self::MaxSize { size } => Box::new(MaxSize::new(*size)),
            Self::Length { length } => Box::new(Length::new(*length)),
            Self::Match { pattern } => Box::new(Match::compile(pattern)?),
            Self::Email => Box::new(Email::new()),
        };

        tracing::debug!(rule = self.code(), "built validator");
        Ok(validator)
    }
}
