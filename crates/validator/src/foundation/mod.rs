//! Core validation types and traits
//!
//! This module contains the building blocks every rule is made of:
//!
//! - **Input**: [`Value`], the tagged union handed to validators
//! - **Type-Probe**: [`Kind`] and the typed accessors on `Value`
//! - **Trait**: [`Validator`]
//! - **Errors**: [`ValidationError`], [`RuleError`]
//!
//! # Architecture
//!
//! ## 1. Dynamic input, static rules
//!
//! Rules are ordinary structs configured once. The value under test is
//! dynamic, and each rule pattern-matches on it:
//!
//! ```
//! use sieve_validator::prelude::*;
//!
//! let rule = valid_min(10);
//! assert!(rule.is_satisfied(&Value::Int(11)));
//! assert!(!rule.is_satisfied(&Value::Bool(true)));
//! ```
//!
//! ## 2. Total checks
//!
//! `is_satisfied` never fails. Absence and wrong types are unsatisfied
//! results, not errors:
//!
//! ```
//! use sieve_validator::prelude::*;
//!
//! assert!(!valid_min_size(2).is_satisfied(&Value::Nil));
//! ```
//!
//! ## 3. Structured failure reports
//!
//! ```
//! use sieve_validator::prelude::*;
//!
//! let error = valid_max(10).validate(&Value::Int(11)).unwrap_err();
//! assert_eq!(error.code, "max");
//! assert_eq!(error.param("actual"), Some("11"));
//! ```

pub mod error;
pub mod probe;
pub mod traits;
pub mod value;

pub use error::{RuleError, ValidationError};
pub use probe::Kind;
pub use traits::Validator;
pub use value::{Opaque, Value};

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
