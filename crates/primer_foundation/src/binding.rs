//! Named values checked against their declared type.

use std::fmt;

use crate::Result;
use crate::error::{Error, ErrorContext};
use crate::types::Type;
use crate::value::Value;

/// A named value together with the type it was declared with.
///
/// A `Binding` can only be built if its value satisfies the declaration,
/// so holding one is proof the annotation was honored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    name: String,
    declared: Type,
    value: Value,
}

impl Binding {
    /// Declares `name: declared = value`.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch naming the binding if `declared` does not
    /// admit `value`.
    pub fn new(name: impl Into<String>, declared: Type, value: impl Into<Value>) -> Result<Self> {
        let name = name.into();
        let value = value.into();

        if !declared.admits(&value) {
            return Err(Error::type_mismatch(declared, value.value_type())
                .with_context(ErrorContext::new().with_source(name)));
        }

        Ok(Self {
            name,
            declared,
            value,
        })
    }

    /// The binding's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type.
    #[must_use]
    pub fn declared(&self) -> &Type {
        &self.declared
    }

    /// The bound value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} = {:?}", self.name, self.declared, self.value)
    }
}
