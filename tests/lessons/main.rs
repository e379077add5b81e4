//! Integration tests for Layer 1: Lessons
//!
//! Tests for the lesson helpers, records, and declared bindings.

mod arithmetic;
mod records;
mod text;
