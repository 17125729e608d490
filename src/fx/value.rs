// SPDX-License-Identifier: MIT

//! Dynamically-typed values
//!
//! A [`Value`] is the datum every expression evaluates to. Its kind (numeric
//! or text) is only known at evaluation time, and comparison rules are
//! decided by that kind:
//! - `Number` and `Boolean` are numeric
//! - `Text`, `Absent` and `Failed` are text
//!
//! Booleans keep the canonical encoding the evaluator has always exposed:
//! `true` behaves as text `"true"` with number `1.0`, and `false` as text
//! `"false"` with number `0.0`.

use super::fault::Fault;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Comparison kind of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Numeric,
    Text,
}

/// A dynamically-typed value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum Value {
    Text(String),
    Number(f64),
    Boolean(bool),
    #[default]
    Absent,
    Failed(Fault),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    pub fn boolean(b: bool) -> Self {
        Value::Boolean(b)
    }

    pub fn truth() -> Self {
        Value::Boolean(true)
    }

    pub fn falsehood() -> Self {
        Value::Boolean(false)
    }

    pub fn absent() -> Self {
        Value::Absent
    }

    pub fn failed(fault: Fault) -> Self {
        Value::Failed(fault)
    }

    /// Build a value from a serialized token: a number if the token parses as
    /// a float, text otherwise.
    ///
    /// Out-of-range tokens such as `1e400` stay text. Infinities are numbers
    /// only when spelled out (`inf`, `-Infinity`), NaN only as unsigned `nan`.
    pub fn dual(s: &str) -> Self {
        match s.parse::<f64>() {
            Ok(n) if n.is_finite() || is_special_float(s) => Value::Number(n),
            _ => Value::Text(s.to_string()),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Number(_) | Value::Boolean(_) => Kind::Numeric,
            Value::Text(_) | Value::Absent | Value::Failed(_) => Kind::Text,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.kind() == Kind::Numeric
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub fn has_error(&self) -> bool {
        matches!(self, Value::Failed(_))
    }

    pub fn fault(&self) -> Option<&Fault> {
        match self {
            Value::Failed(fault) => Some(fault),
            _ => None,
        }
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Value::Boolean(true))
    }

    pub fn is_false(&self) -> bool {
        matches!(self, Value::Boolean(false))
    }

    pub fn is_boolean(&self) -> bool {
        self.is_true() || self.is_false()
    }

    /// Text content, if the value carries any. Numbers carry none.
    fn text_slot(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Boolean(true) => Some("true"),
            Value::Boolean(false) => Some("false"),
            Value::Number(_) | Value::Absent | Value::Failed(_) => None,
        }
    }

    /// Numeric content, if the value carries any.
    fn number_slot(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Boolean(true) => Some(1.0),
            Value::Boolean(false) => Some(0.0),
            Value::Text(_) | Value::Absent | Value::Failed(_) => None,
        }
    }

    /// Ordered comparison of two values of the same kind.
    ///
    /// A failed operand short-circuits with its fault wrapped under
    /// `"LH Error"` or `"RH Error"`; the left side wins when both failed.
    pub fn less_than(&self, other: &Value) -> Value {
        if let Some(fault) = self.fault() {
            return Value::Failed(fault.with("LH Error"));
        }
        if let Some(fault) = other.fault() {
            return Value::Failed(fault.with("RH Error"));
        }

        match (self.kind(), other.kind()) {
            (Kind::Numeric, Kind::Numeric) => match (self.number_slot(), other.number_slot()) {
                (Some(l), Some(r)) => Value::Boolean(l < r),
                _ => Value::Failed(Fault::new(
                    "NumberValueLess",
                    "operand number can't be absent",
                )),
            },
            (Kind::Text, Kind::Text) => match (self.text_slot(), other.text_slot()) {
                (Some(l), Some(r)) => Value::Boolean(l.cmp(r) == Ordering::Less),
                _ => Value::Failed(Fault::new("TextValueLess", "operand text can't be absent")),
            },
            _ => Value::Failed(Fault::new("ValueLess", "operands must be the same kind")),
        }
    }

    /// Structural equality: kinds match, and the effective text (absent as
    /// `""`) and effective number (absent as `0`) both coincide.
    ///
    /// Values of unrelated shape can compare equal when both normalise to
    /// empty text and zero, e.g. `Text("")` and `Absent`.
    pub fn equals(&self, other: &Value) -> Value {
        Value::Boolean(
            self.kind() == other.kind()
                && self.text_slot().unwrap_or("") == other.text_slot().unwrap_or("")
                && self.number_slot().unwrap_or(0.0) == other.number_slot().unwrap_or(0.0),
        )
    }

    pub fn logical_or(&self, other: &Value) -> Value {
        if !self.is_boolean() {
            return Value::Failed(Fault::new("Or", "lh is not bool"));
        }
        if !other.is_boolean() {
            return Value::Failed(Fault::new("Or", "rh is not bool"));
        }
        Value::Boolean(self.is_true() || other.is_true())
    }

    pub fn logical_and(&self, other: &Value) -> Value {
        if !self.is_boolean() {
            return Value::Failed(Fault::new("And", "lh is not bool"));
        }
        if !other.is_boolean() {
            return Value::Failed(Fault::new("And", "rh is not bool"));
        }
        Value::Boolean(self.is_true() && other.is_true())
    }

    pub fn logical_not(&self) -> Value {
        if !self.is_boolean() {
            return Value::Failed(Fault::new("Not", "operand is not bool"));
        }
        Value::Boolean(self.is_false())
    }

    /// Human-readable rendering. Numeric values (booleans included) render in
    /// fixed-point with six decimals.
    pub fn render(&self) -> String {
        match self {
            Value::Absent => "<absent>".to_string(),
            Value::Failed(fault) => format!("<error: {}>", fault),
            Value::Text(s) => s.clone(),
            Value::Number(_) | Value::Boolean(_) => {
                format!("{:.6}", self.number_slot().unwrap_or_default())
            }
        }
    }
}

/// Literal infinity or NaN token.
fn is_special_float(token: &str) -> bool {
    let unsigned = token.strip_prefix(&['+', '-'][..]).unwrap_or(token);
    unsigned.eq_ignore_ascii_case("inf")
        || unsigned.eq_ignore_ascii_case("infinity")
        || token.eq_ignore_ascii_case("nan")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Fault> for Value {
    fn from(fault: Fault) -> Self {
        Value::Failed(fault)
    }
}
