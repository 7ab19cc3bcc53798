//! Dynamically typed validator input
//!
//! Validators never see a concrete Rust type. Callers convert whatever they
//! hold (a form field, a JSON payload member, a typed struct field) into a
//! [`Value`] and every rule dispatches on the variant it finds.
//!
//! # Examples
//!
//! ```
//! use sieve_validator::foundation::Value;
//!
//! assert_eq!(Value::from(42_i16), Value::Int(42));
//! assert_eq!(Value::from("hi"), Value::Text("hi".to_string()));
//! assert_eq!(Value::from(None::<i32>), Value::Nil);
//! assert_eq!(Value::from(vec![1, 2]), Value::Seq(vec![Value::Int(1), Value::Int(2)]));
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

// ============================================================================
// VALUE
// ============================================================================

/// A candidate value handed to a validator.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Absence of a value (`nil` / `null` / `None`).
    #[default]
    Nil,
    /// A boolean.
    Bool(bool),
    /// A signed integer of any width, widened to 64 bits.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// UTF-8 text.
    Text(String),
    /// An ordered sequence.
    Seq(Vec<Value>),
    /// A keyed record, insertion ordered.
    Map(IndexMap<String, Value>),
    /// A point in time.
    #[cfg(feature = "temporal")]
    Time(chrono::DateTime<chrono::Utc>),
    /// Anything else: closures, handles, domain objects.
    Opaque(Opaque),
}

impl Value {
    /// The zero timestamp: the canonical "unset" instant, 0001-01-01T00:00:00Z.
    ///
    /// The Unix epoch is a real instant and is not zero.
    #[cfg(feature = "temporal")]
    pub const ZERO_TIME: chrono::DateTime<chrono::Utc> =
        match chrono::NaiveDate::from_ymd_opt(1, 1, 1) {
            Some(date) => date.and_time(chrono::NaiveTime::MIN).and_utc(),
            None => chrono::DateTime::<chrono::Utc>::MIN_UTC,
        };

    /// Wraps an arbitrary value as [`Value::Opaque`].
    ///
    /// ```
    /// use sieve_validator::foundation::Value;
    ///
    /// let callback = Value::opaque(|| println!("hello"));
    /// assert!(matches!(callback, Value::Opaque(_)));
    /// ```
    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        Self::Opaque(Opaque(Arc::new(value)))
    }
}

// ============================================================================
// OPAQUE
// ============================================================================

/// A shared handle to a value the validators cannot look inside.
///
/// Two handles are equal only when they point at the same allocation.
#[derive(Clone)]
pub struct Opaque(Arc<dyn Any + Send + Sync>);

impl Opaque {
    /// Attempts to view the wrapped value as `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Opaque(..)")
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

// Lossless widenings into the single integer variant.
macro_rules! int_from {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )+
    };
}

int_from!(i8, i16, i32, i64, u8, u16, u32);

impl From<isize> for Value {
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: isize) -> Self {
        // isize is at most 64 bits on every supported target
        Self::Int(value as i64)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Value {
    #[inline]
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<std::borrow::Cow<'_, str>> for Value {
    #[inline]
    fn from(value: std::borrow::Cow<'_, str>) -> Self {
        Self::Text(value.into_owned())
    }
}

impl From<char> for Value {
    #[inline]
    fn from(value: char) -> Self {
        Self::Text(value.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::Seq(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(values: [T; N]) -> Self {
        Self::Seq(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(values: &[T]) -> Self {
        Self::Seq(values.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

impl<V: Into<Value>> From<IndexMap<String, V>> for Value {
    fn from(map: IndexMap<String, V>) -> Self {
        Self::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

#[cfg(feature = "temporal")]
impl From<chrono::DateTime<chrono::Utc>> for Value {
    #[inline]
    fn from(value: chrono::DateTime<chrono::Utc>) -> Self {
        Self::Time(value)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::Seq(iter.into_iter().collect())
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Nil,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                // u64 beyond i64::MAX and fractional numbers
                None => n.as_f64().map_or(Self::Nil, Self::Float),
            },
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => items.into_iter().map(Self::from).collect(),
            serde_json::Value::Object(fields) => {
                Self::Map(fields.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

#[cfg(feature = "json")]
impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        Self::from(value.clone())
    }
}

// ============================================================================
// TESTS
// ============================================================================
