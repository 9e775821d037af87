//! Bound values and type coercion.

use std::fmt;
use std::num::IntErrorKind;

use serde::Serialize;

use crate::definition::ValueType;
use crate::error::InputError;

/// A coerced argument or option value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Values of a repeatable option, in the order they were given.
    List(Vec<Value>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Floats, and integers widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            Value::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "boolean",
            Value::List(_) => "list",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Coerces a raw token to `value_type`. `name` is the argument or option
/// being bound and only appears in errors.
pub fn coerce(name: &str, raw: &str, value_type: ValueType) -> Result<Value, InputError> {
    match value_type {
        ValueType::String => Ok(Value::String(raw.to_string())),
        ValueType::Number => parse_number(raw).ok_or_else(|| InputError::InvalidNumber {
            name: name.to_string(),
            value: raw.to_string(),
        }),
        ValueType::Boolean => parse_bool(raw).ok_or_else(|| InputError::InvalidBoolean {
            name: name.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// A literal with a decimal point is a float, anything else an integer.
/// Integers outside the `i64` range widen to a float.
fn parse_number(raw: &str) -> Option<Value> {
    if !raw.contains('.') {
        match raw.parse::<i64>() {
            Ok(n) => return Some(Value::Integer(n)),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {}
                _ => return None,
            },
        }
    }
    parse_float(raw)
}

fn parse_float(raw: &str) -> Option<Value> {
    raw.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(Value::Float)
}

fn parse_bool(raw: &str) -> Option<Value> {
    match raw {
        "true" | "1" => Some(Value::Bool(true)),
        "false" | "0" => Some(Value::Bool(false)),
        _ => None,
    }
}
