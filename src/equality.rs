//! Operand values and the safe equality used by assertions.
//!
//! Assertions compare loosely typed operands: a missing value, a boolean, a
//! number, a piece of text or an ordered list of those. [`Value`] models these
//! operands and most primitive Rust types convert into it, so assertions can be
//! called with plain values, `Option`s, slices and vectors.
//!
//! [`safe_equals`] decides equality in this order:
//! 1. exactly one operand is [`Value::Null`]: not equal
//! 2. both operands are [`Value::Null`]: equal
//! 3. the expected operand is a [`Value::List`]: equal iff every expected element
//!    is strictly equal to the actual element at the same position. Only the
//!    expected elements are walked, a missing actual element is unequal and
//!    extra actual elements are ignored. A non-list actual has no elements.
//! 4. both operands read as finite numbers: equal iff they differ by at most
//!    [`NUMERIC_EPSILON`]
//! 5. otherwise: strict equality

use std::fmt::{self, Display};

/// Absolute tolerance for numeric equality. Not scaled to operand magnitude.
pub const NUMERIC_EPSILON: f64 = 1e-10;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Read this value as a finite number.
    ///
    /// Numbers qualify when finite, text qualifies when its trimmed content
    /// parses as a finite number. Booleans, lists and null never do.
    pub fn as_finite_number(&self) -> Option<f64> {
        let number = match self {
            Value::Number(n) => *n,
            Value::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return None;
                }
                text.parse::<f64>().ok()?
            }
            Value::Null | Value::Bool(_) | Value::List(_) => return None,
        };
        number.is_finite().then_some(number)
    }

    /// Strict equality: same kind and same content, no numeric tolerance.
    ///
    /// `NaN` is never strictly equal to anything, lists compare element by element.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.strict_equals(b))
            }
            _ => false,
        }
    }
}

/// Null aware, list aware and tolerance based equality.
pub fn safe_equals(expected: &Value, actual: &Value) -> bool {
    match (expected.is_null(), actual.is_null()) {
        (true, true) => return true,
        (true, false) | (false, true) => return false,
        (false, false) => (),
    }

    if let Value::List(expected) = expected {
        let actual: &[Value] = match actual {
            Value::List(actual) => actual,
            _ => &[],
        };
        return expected
            .iter()
            .enumerate()
            .all(|(i, expected)| actual.get(i).is_some_and(|actual| expected.strict_equals(actual)));
    }

    if let (Some(a), Some(b)) = (expected.as_finite_number(), actual.as_finite_number()) {
        return (a - b).abs() <= NUMERIC_EPSILON;
    }

    expected.strict_equals(actual)
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(text) => f.write_str(text),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    // missing entries render empty inside a list
                    if !item.is_null() {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
        }
    }
}

macro_rules! impl_from_number {
    [$($ty:ty),* $(,)?] => {$(
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::Number(value as f64)
            }
        }
    )*};
}

impl_from_number![i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64];

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(value: &[T]) -> Self {
        Value::List(value.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(value: [T; N]) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}
