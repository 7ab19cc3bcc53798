//! # sieve-validator
//!
//! A small, composable value-validation engine: independent rules that each
//! answer "does this value satisfy me?" for dynamically typed input such as
//! form fields and API payload members.
//!
//! ## Quick Start
//!
//! ```
//! use sieve_validator::prelude::*;
//!
//! let age = valid_range(18, 130);
//! assert!(age.is_satisfied_by(42));
//! assert!(!age.is_satisfied_by("42")); // wrong type is unsatisfied, not an error
//!
//! let email = valid_email();
//! assert!(email.is_satisfied_by("t0.est+email123@1abc0-def.com"));
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators, or implement
//! [`Validator`](foundation::Validator) manually for composite rules.
//! Rules can also be described as data with [`ValidationRule`](rule::ValidationRule).
//!
//! ## Built-in Validators
//!
//! - **Presence**: [`Required`](validators::Required)
//! - **Integer**: [`Min`](validators::Min), [`Max`](validators::Max),
//!   [`Range`](validators::Range)
//! - **Size**: [`MinSize`](validators::MinSize), [`MaxSize`](validators::MaxSize),
//!   [`Length`](validators::Length)
//! - **Text**: [`Match`](validators::Match), [`Email`](validators::Email)

pub mod foundation;
mod macros;
pub mod prelude;
pub mod rule;
pub mod validators;
