//! Core values, type descriptors, bindings, and errors for Primer.
//!
//! This crate provides:
//! - [`Value`] - Dynamic value for loosely typed lesson data
//! - [`Type`] - Type descriptors used as checkable annotations
//! - [`Binding`] - A named value proven to satisfy its declared type
//! - [`Error`] - Error types with optional context
//! - [`coerce`] - Leading-integer parsing and implicit numeric coercion
//! - [`Seq`] - Immutable sequence with structural sharing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod binding;
pub mod coerce;
pub mod collections;
pub mod error;
pub mod types;
pub mod value;

pub use binding::Binding;
pub use collections::Seq;
pub use error::{Error, ErrorContext, ErrorKind};
pub use types::Type;
pub use value::Value;

/// Result type for Primer operations.
pub type Result<T> = std::result::Result<T, Error>;
