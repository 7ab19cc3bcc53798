//! The validator capability trait.

use std::fmt::Debug;
use std::sync::Arc;

use crate::foundation::{ValidationError, Value};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// A stateless rule over one dynamically typed value.
///
/// `is_satisfied` is total: every input, including [`Value::Nil`] and
/// values of a type the rule does not apply to, yields `true` or `false`.
/// A type the rule does not recognize is simply unsatisfied.
///
/// Implementations hold no mutable state, so one instance can be shared
/// across threads and reused for any number of calls.
///
/// # Examples
///
/// ```
/// use sieve_validator::foundation::{ValidationError, Validator, Value};
///
/// #[derive(Debug)]
/// struct Even;
///
/// impl Validator for Even {
///     fn is_satisfied(&self, value: &Value) -> bool {
///         value.as_int().is_some_and(|i| i % 2 == 0)
///     }
///
///     fn error(&self, _value: &Value) -> ValidationError {
///         ValidationError::new("even", "Value must be an even integer")
///     }
/// }
///
/// assert!(Even.is_satisfied_by(4));
/// assert!(!Even.is_satisfied_by("4"));
/// assert_eq!(Even.validate(&Value::Int(3)).unwrap_err().code, "even");
/// ```
pub trait Validator: Debug + Send + Sync {
    /// Whether `value` satisfies the rule.
    fn is_satisfied(&self, value: &Value) -> bool;

    /// Describes why `value` does not satisfy the rule.
    ///
    /// Only meaningful when `is_satisfied(value)` is `false`.
    fn error(&self, value: &Value) -> ValidationError;

    /// Checks `value`, reporting the failure as a structured error.
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        if self.is_satisfied(value) {
            return Ok(());
        }

        let error = self.error(value);
        tracing::trace!(code = %error.code, kind = %value.kind(), "value rejected");
        Err(error)
    }

    /// Converts `value` and checks it.
    fn is_satisfied_by<V>(&self, value: V) -> bool
    where
        Self: Sized,
        V: Into<Value>,
    {
        self.is_satisfied(&value.into())
    }
}

// ============================================================================
// FORWARDING IMPLS
// ============================================================================

impl<V: Validator + ?Sized> Validator for &V {
    #[inline]
    fn is_satisfied(&self, value: &Value) -> bool {
        (**self).is_satisfied(value)
    }

    fn error(&self, value: &Value) -> ValidationError {
        (**self).error(value)
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    #[inline]
    fn is_satisfied(&self, value: &Value) -> bool {
        (**self).is_satisfied(value)
    }

    fn error(&self, value: &Value) -> ValidationError {
        (**self).error(value)
    }
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    #[inline]
    fn is_satisfied(&self, value: &Value) -> bool {
        (**self).is_satisfied(value)
    }

    fn error(&self, value: &Value) -> ValidationError {
        (**self).error(value)
    }
}

// ============================================================================
// TESTS
// ============================================================================
