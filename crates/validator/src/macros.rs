//! Macros for declaring validators with minimal boilerplate.
//!
//! # Examples
//!
//! ```
//! use sieve_validator::validator;
//! use sieve_validator::foundation::{ValidationError, Validator, Value};
//!
//! // Unit validator (no fields)
//! validator! {
//!     pub NonEmptyText;
//!     rule(input) { input.as_text().is_some_and(|s| !s.is_empty()) }
//!     error(input) { ValidationError::new("non_empty_text", "Text must not be empty") }
//!     fn non_empty_text();
//! }
//!
//! // Struct with fields
//! validator! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub DivisibleBy { divisor: i64 };
//!     rule(self, input) { input.as_int().and_then(|i| i.checked_rem(self.divisor)) == Some(0) }
//!     error(self, input) { ValidationError::new("divisible_by", "Value is not divisible") }
//!     fn divisible_by(divisor: i64);
//! }
//!
//! assert!(non_empty_text().is_satisfied(&Value::from("x")));
//! assert!(divisible_by(3).is_satisfied(&Value::from(9)));
//! assert!(!DivisibleBy { divisor: 3 }.is_satisfied(&Value::Nil));
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Declares a validator: struct definition, [`Validator`] implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via
/// `#[derive(...)]`. Fields are public so a validator can also be built as a
/// struct literal.
///
/// The `rule` block must evaluate to `bool` for every [`Value`] without
/// panicking; the `error` block builds the report for a rejected value.
///
/// # Variants
///
/// **Unit validator** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub Required;
///     rule(input) { !input.is_zero() }
///     error(input) { ValidationError::new("required", "A value is required") }
///     fn valid_required();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub Min { min: i64 };
///     rule(self, input) { input.as_int().is_some_and(|i| i >= self.min) }
///     error(self, input) { ValidationError::new("min", "too small") }
///     fn valid_min(min: i64);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// validator! {
///     pub Email { matcher: Match };
///     rule(self, input) { self.matcher.is_satisfied(input) }
///     error(self, input) { ValidationError::new("email", "Invalid e-mail address") }
///     new() { Self { matcher: Match::new(EMAIL_PATTERN.clone()) } }
///     fn valid_email();
/// }
/// ```
///
/// [`Validator`]: crate::foundation::Validator
/// [`Value`]: crate::foundation::Value
#[macro_export]
macro_rules! validator {
    // ── Variant 1a: Unit validator (no fields) + factory fn ──────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit validator (no fields), no factory ───────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validator for $name {
            #[allow(unused_variables)]
            fn is_satisfied(&self, $inp: &$crate::foundation::Value) -> bool $rule

            #[allow(unused_variables)]
            fn error(&self, $einp: &$crate::foundation::Value) -> $crate::foundation::ValidationError $err
        }
    };

    // ── Variant 3a: Struct with fields + custom new + factory fn ─────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3b: Struct with fields + custom new, no factory ──────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validator for $name {
            #[allow(unused_variables)]
            fn is_satisfied(&$self_, $inp: &$crate::foundation::Value) -> bool $rule

            #[allow(unused_variables)]
            fn error(&$self2, $einp: &$crate::foundation::Value) -> $crate::foundation::ValidationError $err
        }
    };

    // ── Variant 2a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub const fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validator for $name {
            #[allow(unused_variables)]
            fn is_satisfied(&$self_, $inp: &$crate::foundation::Value) -> bool $rule

            #[allow(unused_variables)]
            fn error(&$self2, $einp: &$crate::foundation::Value) -> $crate::foundation::ValidationError $err
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================
