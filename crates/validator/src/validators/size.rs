//! Size validators
//!
//! These apply to sized values only: text, measured in characters (a
//! multi-byte character counts once), and sequences, measured in elements.
//! Every other value, including nil, numbers and maps, is unsatisfied.

use crate::foundation::{ValidationError, Value};

/// The measured size, or the kind of an unsized input.
fn measured(input: &Value) -> (&'static str, String) {
    match input.size() {
        Some(size) => ("actual", size.to_string()),
        None => ("kind", input.kind().to_string()),
    }
}

// ============================================================================
// MIN SIZE
// ============================================================================

crate::validator! {
    /// Validates that text or a sequence has at least a minimum size.
    ///
    /// # Examples
    ///
    /// ```
    /// use sieve_validator::prelude::*;
    ///
    /// let validator = valid_min_size(2);
    /// assert!(validator.is_satisfied_by("12"));
    /// assert!(validator.is_satisfied_by(vec![1, 2]));
    /// assert!(!validator.is_satisfied_by("手"));
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinSize { min: usize };
    rule(self, input) { input.size().is_some_and(|size| size >= self.min) }
    error(self, input) {
        let (key, value) = measured(input);
        ValidationError::new("min_size", format!("Size must be at least {}", self.min))
            .with_param("min", self.min.to_string())
            .with_param(key, value)
    }
    fn valid_min_size(min: usize);
}

// ============================================================================
// MAX SIZE
// ============================================================================

crate::validator! {
    /// Validates that text or a sequence has at most a maximum size.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxSize { max: usize };
    rule(self, input) { input.size().is_some_and(|size| size <= self.max) }
    error(self, input) {
        let (key, value) = measured(input);
        ValidationError::new("max_size", format!("Size must be at most {}", self.max))
            .with_param("max", self.max.to_string())
            .with_param(key, value)
    }
    fn valid_max_size(max: usize);
}

// ============================================================================
// LENGTH
// ============================================================================

crate::validator! {
    /// Validates that text or a sequence has an exact size.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Length { length: usize };
    rule(self, input) { input.size() == Some(self.length) }
    error(self, input) {
        let (key, value) = measured(input);
        ValidationError::new("length", format!("Size must be exactly {}", self.length))
            .with_param("length", self.length.to_string())
            .with_param(key, value)
    }
    fn valid_length(length: usize);
}

// ============================================================================
// TESTS
// ============================================================================
