//! Text content validators
//!
//! [`Match`] runs a compiled regular expression against text. [`Email`] is a
//! `Match` pinned to [`EMAIL_PATTERN`], a whole-string address grammar that
//! is deliberately stricter than RFC 5322:
//!
//! - local part: groups of ASCII letters, digits and `!#$%^&*_+-`, joined by
//!   single dots (no leading, trailing or doubled dot);
//! - exactly one `@`;
//! - domain: two or more dot-separated labels of ASCII letters, digits and
//!   interior hyphens. A label never starts or ends with a hyphen.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{RuleError, ValidationError};

/// The process-wide e-mail pattern. Anchored at both ends.
pub static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%^&*_+-]+(?:\.[a-zA-Z0-9!#$%^&*_+-]+)*@(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?\.)+[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?$",
    )
    .expect("e-mail pattern is a valid regex")
});

// ============================================================================
// MATCH
// ============================================================================

crate::validator! {
    /// Validates that text contains a match of a regular expression.
    ///
    /// The search is unanchored: any match anywhere in the text satisfies the
    /// rule unless the pattern carries its own `^`/`$` anchors.
    ///
    /// # Examples
    ///
    /// ```
    /// use regex::Regex;
    /// use sieve_validator::prelude::*;
    ///
    /// let validator = valid_match(Regex::new(r"[abc]{3}\d*").unwrap());
    /// assert!(validator.is_satisfied_by("bca123"));
    /// assert!(validator.is_satisfied_by("xxbca"));
    /// assert!(!validator.is_satisfied_by("bc123"));
    /// assert!(!validator.is_satisfied_by(123));
    /// ```
    pub Match { pattern: Regex };
    rule(self, input) { input.as_text().is_some_and(|s| self.pattern.is_match(s)) }
    error(self, input) {
        ValidationError::new("match", "Value must match the required pattern")
            .with_param("pattern", self.pattern.as_str().to_owned())
            .with_param("kind", input.kind().as_str())
    }
    new(pattern: Regex) { Self { pattern } }
    fn valid_match(pattern: Regex);
}

impl Match {
    /// Compiles `pattern` and wraps it.
    ///
    /// A malformed pattern is reported here, at construction, so a `Match`
    /// that exists always holds a working expression.
    ///
    /// ```
    /// use sieve_validator::validators::Match;
    ///
    /// assert!(Match::compile(r"^\d+$").is_ok());
    /// assert!(Match::compile(r"(").is_err());
    /// ```
    pub fn compile(pattern: &str) -> Result<Self, RuleError> {
        Regex::new(pattern)
            .map(Self::new)
            .map_err(|source| RuleError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })
    }
}

// ============================================================================
// EMAIL
// ============================================================================

crate::validator! {
    /// Validates the strict e-mail address grammar of [`EMAIL_PATTERN`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sieve_validator::prelude::*;
    ///
    /// let validator = valid_email();
    /// assert!(validator.is_satisfied_by("t0.est+email123@1abc0-def.com"));
    /// assert!(!validator.is_satisfied_by("a@xcom"));
    /// assert!(!validator.is_satisfied_by("a@@x.com"));
    /// ```
    pub Email { matcher: Match };
    rule(self, input) { crate::foundation::Validator::is_satisfied(&self.matcher, input) }
    error(self, input) {
        ValidationError::new("email", "Value must be a valid e-mail address")
            .with_param("kind", input.kind().as_str())
    }
    new() { Self { matcher: Match::new(EMAIL_PATTERN.clone()) } }
    fn valid_email();
}

impl Default for Email {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Validator, Value};

    #[test]
    fn test_match() {
        let regex = Regex::new(r"[abc]{3}\d*").unwrap();
        for validator in [
            Match {
                pattern: regex.clone(),
            },
            valid_match(regex),
        ] {
            assert!(validator.is_satisfied_by("bca123"));
            assert!(!validator.is_satisfied_by("bc123"));
            assert!(!validator.is_satisfied_by(""));
        }
    }

    #[test]
    fn test_match_rejects_non_text() {
        let validator = Match::compile(".*").unwrap();
        assert!(validator.is_satisfied_by(""));
        assert!(!validator.is_satisfied(&Value::Nil));
        assert!(!validator.is_satisfied_by(vec!["abc"]));
        assert!(!validator.is_satisfied_by(1));
    }

    #[test]
    fn test_match_compile_error() {
        let err = Match::compile("[a-").unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { ref pattern, .. } if pattern == "[a-"));
    }

    #[test]
    fn test_email_guaranteed() {
        for email in [
            Email {
                matcher: Match {
                    pattern: EMAIL_PATTERN.clone(),
                },
            },
            valid_email(),
            Email::default(),
        ] {
            assert!(email.is_satisfied_by("t0.est+email123@1abc0-def.com"));
            assert!(!email.is_satisfied_by("a@xcom"));
            assert!(!email.is_satisfied_by("a@@x.com"));
        }
    }

    #[test]
    fn test_email_local_part_dots() {
        let email = valid_email();
        assert!(email.is_satisfied_by("first.last@example.org"));
        assert!(!email.is_satisfied_by(".first@example.org"));
        assert!(!email.is_satisfied_by("first.@example.org"));
        assert!(!email.is_satisfied_by("first..last@example.org"));
    }

    #[test]
    fn test_email_is_anchored() {
        let email = valid_email();
        assert!(!email.is_satisfied_by("junk a@b.com"));
        assert!(!email.is_satisfied_by("a@b.com junk"));
        assert!(!email.is_satisfied_by("<a@b.com>"));
    }

    #[test]
    fn test_email_error() {
        let err = valid_email().validate(&Value::Int(1)).unwrap_err();
        assert_eq!(err.code, "email");
        assert_eq!(err.param("kind"), Some("int"));
    }
}
