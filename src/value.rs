//! Leaf and register values.
//!
//! A value is text, an integer or a real, or the empty sentinel `Ø`.
//! Every store in the VM (leaves, register cells, stack slots) holds
//! `Value`s, and an unset slot is observably the same as one holding `Ø`.

use std::fmt;

/// The printed form of the empty sentinel.
pub const EMPTY: &str = "Ø";

/// A scalar stored at a leaf, in a register cell, or on the stack.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// The empty sentinel `Ø`.
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Real(f64),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    /// Coerce empty text to `Ø`. Applied to every leaf write.
    pub fn normalize(self) -> Self {
        match self {
            Value::Text(s) if s.is_empty() => Value::Empty,
            other => other,
        }
    }

    /// Interpret a literal typed at the shell.
    ///
    /// A token becomes an `Int` or `Real` only when the number prints back
    /// to exactly the same text, so `get` always echoes what `set` was given.
    /// `Ø` and the empty string are the empty sentinel; anything else is text.
    pub fn from_literal(token: &str) -> Self {
        if token.is_empty() || token == EMPTY {
            return Value::Empty;
        }
        if let Ok(i) = token.parse::<i64>() {
            if i.to_string() == token {
                return Value::Int(i);
            }
        }
        if let Ok(r) = token.parse::<f64>() {
            let value = Value::Real(r);
            if r.is_finite() && value.to_string() == token {
                return value;
            }
        }
        Value::Text(token.to_string())
    }

    /// Short type tag used in JSON dumps.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Empty => "empty",
            Value::Text(_) => "text",
            Value::Int(_) => "int",
            Value::Real(_) => "real",
        }
    }

    /// Serialize to a JSON value string.
    pub fn to_json_value(&self) -> String {
        match self {
            Value::Empty => format!("\"{}\"", EMPTY),
            Value::Text(s) => json_string(s),
            Value::Int(i) => i.to_string(),
            Value::Real(r) if r.is_finite() => format_real(*r),
            Value::Real(r) => json_string(&r.to_string()),
        }
    }
}

/// Reals keep a fractional zero (`1.0`, not `1`) so they never print as integers.
fn format_real(r: f64) -> String {
    if r.fract() == 0.0 && r.abs() < 1e16 {
        format!("{:.1}", r)
    } else {
        format!("{}", r)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Empty => f.write_str(EMPTY),
            Value::Text(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Real(r) => f.write_str(&format_real(*r)),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string()).normalize()
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s).normalize()
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(r: f64) -> Self {
        Value::Real(r)
    }
}

/// Quote and escape a string for JSON output.
pub fn json_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
