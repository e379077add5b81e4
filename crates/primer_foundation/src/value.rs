//! Dynamic value type for loosely typed lesson data.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::collections::Seq;
use crate::types::Type;

/// Largest integer an `f64` represents exactly (2^53).
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// A value whose type is only known at runtime.
///
/// Values are immutable and cheaply cloneable. Strings share their buffer
/// and sequences share structure.
#[derive(Clone)]
pub enum Value {
    /// Absence of a value.
    Nil,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point. `NaN` is the not-a-number sentinel.
    Float(f64),
    /// String value.
    String(Arc<str>),
    /// Ordered sequence.
    Vec(Seq<Value>),
    /// Instance of a data-less nominal type, identified by type name.
    Opaque(&'static str),
}

impl Value {
    /// The not-a-number sentinel.
    pub const NAN: Self = Self::Float(f64::NAN);

    /// Wraps a numeric result, preferring `Int` when nothing is lost.
    ///
    /// Finite integral values no larger than 2^53 in magnitude become
    /// [`Value::Int`]; everything else, including `NaN` and the
    /// infinities, stays a [`Value::Float`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn number(n: f64) -> Self {
        if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_EXACT_INT {
            Self::Int(n as i64)
        } else {
            Self::Float(n)
        }
    }

    /// Returns the type of this value.
    ///
    /// A sequence reports `vec<T>` when every element has type `T`, and
    /// `vec<any>` when it is empty or mixed.
    #[must_use]
    pub fn value_type(&self) -> Type {
        match self {
            Self::Nil => Type::Nil,
            Self::Bool(_) => Type::Bool,
            Self::Int(_) => Type::Int,
            Self::Float(_) => Type::Float,
            Self::String(_) => Type::String,
            Self::Vec(items) => {
                let mut types = items.iter().map(Value::value_type);
                let element = match types.next() {
                    Some(first) if types.all(|t| t == first) => first,
                    _ => Type::Any,
                };
                Type::vec(element)
            }
            Self::Opaque(name) => Type::Opaque(name),
        }
    }

    /// Returns true if this value is the not-a-number sentinel.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        matches!(self, Self::Float(n) if n.is_nan())
    }
}

// Bit equality on floats keeps Eq reflexive and consistent with Hash.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Vec(a), Self::Vec(b)) => a == b,
            (Self::Opaque(a), Self::Opaque(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Nil => {}
            Self::Bool(b) => b.hash(state),
            Self::Int(n) => n.hash(state),
            Self::Float(n) => n.to_bits().hash(state),
            Self::String(s) => s.hash(state),
            Self::Vec(v) => v.hash(state),
            Self::Opaque(name) => name.hash(state),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s:?}"),
            Self::Vec(v) => write!(f, "{v:?}"),
            other => fmt::Display::fmt(other, f),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => fmt_float(*n, f),
            Self::String(s) => write!(f, "{s}"),
            Self::Vec(v) => {
                write!(f, "[")?;
                for (i, item) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Opaque(name) => write!(f, "{name} {{}}"),
        }
    }
}

fn fmt_float(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        write!(f, "{}Infinity", if n < 0.0 { "-" } else { "" })
    } else {
        write!(f, "{n}")
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Option<i64>> for Value {
    /// `None` maps to the not-a-number sentinel, matching parse results.
    fn from(n: Option<i64>) -> Self {
        n.map_or(Self::NAN, Self::Int)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Vec(v.into_iter().map(Into::into).collect())
    }
}
