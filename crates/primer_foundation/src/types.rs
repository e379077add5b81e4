//! Type descriptors for annotated bindings.

use std::fmt;

use crate::value::Value;

/// Declared type of a binding or parameter.
///
/// Descriptors are documentation that can be checked: [`Type::admits`]
/// tells whether a runtime [`Value`] satisfies the declaration.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// The nil type (only value: nil).
    Nil,
    /// Boolean type.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// String type.
    String,
    /// Homogeneous sequence type.
    Vec(Box<Type>),
    /// Any type (accepts any value).
    Any,
    /// Fixed-shape record with named fields.
    Record(&'static str),
    /// Nominal type that carries no data.
    Opaque(&'static str),
}

impl Type {
    /// Creates a sequence type with the given element type.
    #[must_use]
    pub fn vec(element: Type) -> Self {
        Self::Vec(Box::new(element))
    }

    /// Returns true if this type is `Any`.
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Checks if a value type is accepted by this type.
    ///
    /// - `Any` accepts all types
    /// - `Float` accepts `Int`
    /// - records and opaque types match by name only
    #[must_use]
    pub fn accepts(&self, value_type: &Type) -> bool {
        if self.is_any() {
            return true;
        }

        match (self, value_type) {
            (Self::Nil, Self::Nil)
            | (Self::Bool, Self::Bool)
            | (Self::Int | Self::Float, Self::Int)
            | (Self::Float, Self::Float)
            | (Self::String, Self::String) => true,
            (Self::Vec(expected), Self::Vec(actual)) => expected.accepts(actual),
            (Self::Record(a), Self::Record(b)) | (Self::Opaque(a), Self::Opaque(b)) => a == b,
            _ => false,
        }
    }

    /// Checks a concrete value against this type.
    ///
    /// Unlike [`Type::accepts`], sequences are checked element by element,
    /// so `vec<int>` rejects `[1 "two"]` even though both are sequences.
    #[must_use]
    pub fn admits(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Any, _) => true,
            (Self::Vec(element), Value::Vec(items)) => items.iter().all(|v| element.admits(v)),
            _ => self.accepts(&value.value_type()),
        }
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::String => write!(f, "string"),
            Self::Vec(t) => write!(f, "vec<{t:?}>"),
            Self::Any => write!(f, "any"),
            Self::Record(name) => write!(f, "record {name}"),
            Self::Opaque(name) => write!(f, "{name}"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
