//! Primer - lesson helpers for filtering, strings, and parsing
//!
//! This crate re-exports all layers of the Primer system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: primer_runtime     - Lesson script runner, CLI configuration
//! Layer 1: primer_lessons     - Lesson helpers, records, declared bindings
//! Layer 0: primer_foundation  - Core types (Value, Type, Binding, Error)
//! ```

pub use primer_foundation as foundation;
pub use primer_lessons as lessons;
pub use primer_runtime as runtime;
