//! Presence validator
//!
//! "Required" means meaningfully provided, not merely non-nil: the zero value
//! of a type (`""`, `false`, `0`, the zero timestamp, an empty sequence) is
//! treated like absence. Maps, even empty ones, count as provided.
//!
//! # Examples
//!
//! ```
//! use sieve_validator::prelude::*;
//!
//! let validator = valid_required();
//! assert!(validator.is_satisfied_by("Testing"));
//! assert!(validator.is_satisfied_by(-1));
//! assert!(!validator.is_satisfied_by(""));
//! assert!(!validator.is_satisfied_by(false));
//! assert!(!validator.is_satisfied(&Value::Nil));
//! ```

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a value is present and not its type's zero value.
    ///
    /// Opaque handles (closures, domain objects) always count as provided.
    pub Required;
    rule(input) { !input.is_zero() }
    error(input) {
        ValidationError::new("required", "A value is required")
            .with_param("kind", input.kind().as_str())
    }
    fn valid_required();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Validator, Value};

    #[test]
    fn test_required() {
        for required in [Required, valid_required()] {
            assert!(!required.is_satisfied(&Value::Nil));
            assert!(required.is_satisfied_by("Testing"));
            assert!(!required.is_satisfied_by(""));
            assert!(required.is_satisfied_by(true));
            assert!(!required.is_satisfied_by(false));
            assert!(required.is_satisfied_by(1));
            assert!(required.is_satisfied_by(-1));
            assert!(!required.is_satisfied_by(0));
            assert!(required.is_satisfied(&Value::opaque(|| {})));
            assert!(required.is_satisfied(&Value::Map(indexmap::IndexMap::new())));
            assert!(!required.is_satisfied_by(Vec::<i32>::new()));
        }
    }

    #[cfg(feature = "temporal")]
    #[test]
    fn test_required_time() {
        assert!(Required.is_satisfied_by(chrono::Utc::now()));
        assert!(!Required.is_satisfied_by(Value::ZERO_TIME));
        assert!(Required.is_satisfied_by(chrono::DateTime::<chrono::Utc>::UNIX_EPOCH));
    }

    #[test]
    fn test_required_error_reports_kind() {
        let err = Required.validate(&Value::from("")).unwrap_err();
        assert_eq!(err.code, "required");
        assert_eq!(err.param("kind"), Some("text"));
    }
}
