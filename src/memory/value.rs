//! Reported value representation
//!
//! This module defines the [`Value`] enum, the tagged form in which demonstrated
//! values are stored in the zero-value table and printed in a report.
//!
//! # Value Types
//!
//! - [`Value::Int`]: signed integer (widened to 64 bits)
//! - [`Value::Float`]: 64-bit float
//! - [`Value::Text`]: owned string, printed quoted so the empty string stays visible
//! - [`Value::Reference`]: an address, or `None` for an absent reference

use std::fmt;

/// Values as they appear in a report
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    Reference(Option<Address>),
}

/// Machine address as reported (never dereferenced)
pub type Address = usize;

impl Value {
    /// Record the address behind an optional reference
    pub fn reference<T>(target: Option<&T>) -> Self {
        Value::Reference(target.map(|r| r as *const T as Address))
    }

    /// Check if this value is an absent reference
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Reference(None))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Text(s) => write!(f, "{:?}", s),
            Value::Reference(Some(addr)) => write!(f, "0x{:x}", addr),
            Value::Reference(None) => write!(f, "None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_empty_text_visible() {
        assert_eq!(Value::from("").to_string(), "\"\"");
        assert_eq!(Value::from(String::from("Bill")).to_string(), "\"Bill\"");
    }

    #[test]
    fn test_absent_reference() {
        let absent = Value::reference::<i64>(None);
        assert!(absent.is_absent());
        assert_eq!(absent.to_string(), "None");

        let x = 7_i64;
        let present = Value::reference(Some(&x));
        assert!(!present.is_absent());
        assert!(present.to_string().starts_with("0x"));
    }

    #[test]
    fn test_float_display_keeps_fraction() {
        assert_eq!(Value::from(10.0).to_string(), "10.0");
    }
}
