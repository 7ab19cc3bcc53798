//! Integer bound validators
//!
//! Bounds apply only to integers. Booleans, floats, numeric-looking text and
//! every other type are unsatisfied rather than coerced. Both bounds are
//! inclusive.

use crate::foundation::{ValidationError, Validator, Value};

/// Describes an input that is not an integer, or its value when it is.
fn actual(input: &Value) -> (&'static str, String) {
    match input.as_int() {
        Some(i) => ("actual", i.to_string()),
        None => ("kind", input.kind().to_string()),
    }
}

crate::validator! {
    /// Validates that an integer is at least a minimum.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Min { min: i64 };
    rule(self, input) { input.as_int().is_some_and(|i| i >= self.min) }
    error(self, input) {
        let (key, value) = actual(input);
        ValidationError::new("min", format!("Value must be an integer of at least {}", self.min))
            .with_param("min", self.min.to_string())
            .with_param(key, value)
    }
    fn valid_min(min: i64);
}

crate::validator! {
    /// Validates that an integer does not exceed a maximum.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Max { max: i64 };
    rule(self, input) { input.as_int().is_some_and(|i| i <= self.max) }
    error(self, input) {
        let (key, value) = actual(input);
        ValidationError::new("max", format!("Value must be an integer of at most {}", self.max))
            .with_param("max", self.max.to_string())
            .with_param(key, value)
    }
    fn valid_max(max: i64);
}

// ============================================================================
// RANGE
// ============================================================================

/// Validates that an integer satisfies both a [`Min`] and a [`Max`].
///
/// Construction never rejects `min > max`; such a range is simply
/// unsatisfiable, since no integer is both `>= min` and `<= max`.
///
/// # Examples
///
/// ```
/// use sieve_validator::prelude::*;
///
/// let validator = Range { min: Min { min: 10 }, max: Max { max: 100 } };
/// assert!(validator.is_satisfied_by(50));
/// assert!(!validator.is_satisfied_by(101));
///
/// let inverted = valid_range(100, 10);
/// assert!(!inverted.is_satisfied_by(50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    /// Lower bound (inclusive).
    pub min: Min,
    /// Upper bound (inclusive).
    pub max: Max,
}

impl Range {
    /// Creates a range validator from two inclusive bounds.
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        Self {
            min: Min::new(min),
            max: Max::new(max),
        }
    }
}

impl Validator for Range {
    fn is_satisfied(&self, value: &Value) -> bool {
        self.min.is_satisfied(value) && self.max.is_satisfied(value)
    }

    fn error(&self, value: &Value) -> ValidationError {
        let (key, actual) = actual(value);
        ValidationError::new(
            "range",
            format!(
                "Value must be an integer between {} and {}",
                self.min.min, self.max.max
            ),
        )
        .with_param("min", self.min.min.to_string())
        .with_param("max", self.max.max.to_string())
        .with_param(key, actual)
    }
}

/// Creates a [`Range`] validator.
#[must_use]
pub const fn valid_range(min: i64, max: i64) -> Range {
    Range::new(min, max)
}

// ============================================================================
// TESTS
// ============================================================================
