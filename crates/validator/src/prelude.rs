//! Prelude module for convenient imports.
//!
//! Provides a single `use sieve_validator::prelude::*;` import that brings
//! in the validator trait, the input type, errors, every built-in validator
//! and the declarative rule layer.
//!
//! # Examples
//!
//! ```
//! use sieve_validator::prelude::*;
//!
//! let username = valid_length(8);
//! let age = valid_range(18, 100);
//! assert!(username.is_satisfied_by("rustacea"));
//! assert!(age.is_satisfied_by(30));
//! ```

// ============================================================================
// FOUNDATION: Core trait, input, errors
// ============================================================================

pub use crate::foundation::{Kind, RuleError, ValidationError, ValidationResult, Validator, Value};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

pub use crate::validators::*;

// ============================================================================
// RULES: Declarative configuration
// ============================================================================

pub use crate::rule::ValidationRule;
