//! Literal element values.
//!
//! These are the values a schema can state about an element without reading
//! a stream: defaults and numeric bounds.

use crate::error::Error;
use std::cmp::Ordering;
use std::fmt;

/// Literal value of an atomic element.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Unsigned integer.
    Unsigned(u64),
    /// Signed integer.
    Signed(i64),
    /// Floating point number.
    Float(f64),
    /// ASCII or UTF-8 string.
    String(String),
    /// Nanoseconds relative to 2001-01-01T00:00:00 UTC.
    Date(i64),
}

impl Value {
    /// Returns the numeric interpretation of the value, if any.
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Unsigned(v) => Some(Number::Unsigned(*v)),
            Self::Signed(v) | Self::Date(v) => Some(Number::Signed(*v)),
            Self::Float(v) => Some(Number::Float(*v)),
            Self::String(_) => None,
        }
    }

    /// Returns the string payload, if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsigned(v) => write!(f, "{v}"),
            Self::Signed(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Date(v) => write!(f, "date({v})"),
        }
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Unsigned(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Signed(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Unsigned(v) => Self::Unsigned(v),
            Number::Signed(v) => Self::Signed(v),
            Number::Float(v) => Self::Float(v),
        }
    }
}

impl TryFrom<&Value> for Number {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_number().ok_or_else(|| Error::NotNumeric {
            value: value.to_string(),
        })
    }
}

/// Numeric value used for bounds checks.
///
/// Equality and ordering are by numeric value, so `Unsigned(1)` equals
/// `Signed(1)` and `Float(1.0)`.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Unsigned integer.
    Unsigned(u64),
    /// Signed integer.
    Signed(i64),
    /// Floating point number.
    Float(f64),
}

impl Number {
    /// Returns true if this is a floating point number.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Widens the number to `f64`.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Unsigned(v) => v as f64,
            Self::Signed(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// Compares two numbers across representations.
    ///
    /// Integers compare exactly; a float on either side falls back to `f64`
    /// comparison and yields `None` for NaN.
    #[must_use]
    pub fn compare(&self, other: &Number) -> Option<Ordering> {
        match (*self, *other) {
            (Self::Unsigned(a), Self::Unsigned(b)) => Some(a.cmp(&b)),
            (Self::Signed(a), Self::Signed(b)) => Some(a.cmp(&b)),
            (Self::Unsigned(a), Self::Signed(b)) => Some(i128::from(a).cmp(&i128::from(b))),
            (Self::Signed(a), Self::Unsigned(b)) => Some(i128::from(a).cmp(&i128::from(b))),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsigned(v) => write!(f, "{v}"),
            Self::Signed(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_equality_matches_ordering() {
        let numbers = [
            Number::Unsigned(1),
            Number::Signed(1),
            Number::Float(1.0),
            Number::Signed(-1),
            Number::Unsigned(u64::MAX),
            Number::Float(f64::NAN),
        ];
        for a in numbers {
            for b in numbers {
                assert_eq!(a == b, a.partial_cmp(&b) == Some(Ordering::Equal), "{a} vs {b}");
            }
        }
        assert_eq!(Number::Unsigned(1), Number::Signed(1));
        assert_ne!(Number::Signed(-1), Number::Unsigned(u64::MAX));
        assert_ne!(Number::Float(f64::NAN), Number::Float(f64::NAN));
    }

    #[test]
    fn test_value_as_number() {
        assert_eq!(Value::Unsigned(7).as_number(), Some(Number::Unsigned(7)));
        assert_eq!(Value::Date(-3).as_number(), Some(Number::Signed(-3)));
        assert_eq!(Value::from("eng").as_number(), None);
        assert_eq!(Value::from("eng").as_str(), Some("eng"));
    }

    #[test]
    fn test_number_try_from_string_fails() {
        let err = Number::try_from(&Value::from("und")).unwrap_err();
        assert!(matches!(err, Error::NotNumeric { .. }));
    }

    #[test]
    fn test_number_compare_mixed() {
        assert!(Number::Signed(-1) < Number::Unsigned(0));
        assert!(Number::Unsigned(u64::MAX) > Number::Signed(i64::MAX));
        assert!(Number::Float(0.5) > Number::Unsigned(0));
        assert_eq!(
            Number::Float(f64::NAN).compare(&Number::Float(1.0)),
            None
        );
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Unsigned(1_000_000).to_string(), "1000000");
        assert_eq!(Value::from("matroska").to_string(), "\"matroska\"");
        assert_eq!(Value::Float(8000.0).to_string(), "8000");
    }
}
