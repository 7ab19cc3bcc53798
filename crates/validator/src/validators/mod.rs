//! Built-in validators
//!
//! Every validator is an immutable struct with public fields, so it can be
//! written as a literal or obtained from its `valid_*` factory. The two are
//! interchangeable.
//!
//! # Categories
//!
//! - **Presence**: [`Required`]
//! - **Integer bounds**: [`Min`], [`Max`], [`Range`]
//! - **Size**: [`MinSize`], [`MaxSize`], [`Length`]
//! - **Text content**: [`Match`], [`Email`]
//!
//! # Examples
//!
//! ```
//! use sieve_validator::prelude::*;
//!
//! assert!(Min { min: 10 }.is_satisfied_by(10));
//! assert!(valid_min(10).is_satisfied_by(10));
//!
//! let age = valid_range(18, 130);
//! assert!(!age.is_satisfied_by("42"));
//! ```

pub mod content;
pub mod range;
pub mod required;
pub mod size;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use content::{EMAIL_PATTERN, Email, Match, valid_email, valid_match};
pub use range::{Max, Min, Range, valid_max, valid_min, valid_range};
pub use required::{Required, valid_required};
pub use size::{Length, MaxSize, MinSize, valid_length, valid_max_size, valid_min_size};
