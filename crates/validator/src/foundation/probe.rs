//! Runtime type classification of [`Value`]s.
//!
//! Every numeric and size rule asks the probe first whether a value is
//! applicable at all. Anything the probe does not recognize for a rule is an
//! ordinary unsatisfied result, never a fault.

use std::fmt;

use crate::foundation::Value;

/// The coarse runtime type of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Absence.
    Nil,
    /// Boolean.
    Bool,
    /// Signed integer.
    Int,
    /// Text.
    Text,
    /// Ordered sequence.
    Seq,
    /// Timestamp.
    Time,
    /// Anything else (floats, maps, opaque handles).
    Other,
}

impl Kind {
    /// Snake-case name, used in error params and log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Text => "text",
            Self::Seq => "seq",
            Self::Time => "time",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Classifies the value.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Nil => Kind::Nil,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Text(_) => Kind::Text,
            Self::Seq(_) => Kind::Seq,
            #[cfg(feature = "temporal")]
            Self::Time(_) => Kind::Time,
            Self::Float(_) | Self::Map(_) | Self::Opaque(_) => Kind::Other,
        }
    }

    /// Returns the integer when the value is one. Never coerces.
    #[inline]
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the text when the value is text.
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Measurable size: characters for text, elements for sequences.
    ///
    /// ```
    /// use sieve_validator::foundation::Value;
    ///
    /// assert_eq!(Value::from("ルビー").size(), Some(3));
    /// assert_eq!(Value::from(vec![1, 2]).size(), Some(2));
    /// assert_eq!(Value::from(3).size(), None);
    /// ```
    #[must_use]
    pub fn size(&self) -> Option<usize> {
        match self {
            Self::Text(s) => Some(s.chars().count()),
            Self::Seq(items) => Some(items.len()),
            _ => None,
        }
    }

    /// Whether the value is the zero/empty value of its own type.
    ///
    /// Maps and opaque handles are never zero: holding one means something
    /// was provided.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Nil => true,
            Self::Bool(b) => !*b,
            Self::Int(i) => *i == 0,
            Self::Float(f) => *f == 0.0,
            Self::Text(s) => s.is_empty(),
            Self::Seq(items) => items.is_empty(),
            #[cfg(feature = "temporal")]
            Self::Time(t) => *t == Self::ZERO_TIME,
            Self::Map(_) | Self::Opaque(_) => false,
        }
    }
}
