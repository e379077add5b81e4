//! Error types for Primer.
//!
//! Uses `thiserror` for ergonomic error definition with optional context.

use std::fmt;

use thiserror::Error;

use crate::types::Type;

/// The main error type for Primer operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// The message followed by its context, if any.
    ///
    /// A source is appended as `at <source>` and each stack frame goes on
    /// its own indented `in <frame>` line.
    #[must_use]
    pub fn report(&self) -> String {
        match &self.context {
            Some(context) if context.source.is_some() => format!("{self} {context}"),
            Some(context) => format!("{self}{context}"),
            None => self.to_string(),
        }
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates an empty input error for the named operation.
    #[must_use]
    pub fn empty_input(operation: &'static str) -> Self {
        Self::new(ErrorKind::EmptyInput { operation })
    }

    /// Creates a not-a-number error for the offending input.
    #[must_use]
    pub fn not_a_number(input: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotANumber {
            input: input.into(),
        })
    }

    /// Creates an arithmetic overflow error for the named operation.
    #[must_use]
    pub fn overflow(operation: &'static str) -> Self {
        Self::new(ErrorKind::Overflow { operation })
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A value did not satisfy its declared type.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The declared type.
        expected: Type,
        /// The type actually found.
        actual: Type,
    },

    /// An operation that needs at least one character got none.
    #[error("{operation}: empty input")]
    EmptyInput {
        /// Name of the operation.
        operation: &'static str,
    },

    /// Index out of bounds.
    #[error("index out of bounds: {index} (length {length})")]
    IndexOutOfBounds {
        /// The index that was accessed.
        index: usize,
        /// The actual length.
        length: usize,
    },

    /// Input has no leading integer.
    #[error("not a number: {input:?}")]
    NotANumber {
        /// The offending input.
        input: String,
    },

    /// Integer arithmetic left the representable range.
    #[error("{operation}: integer overflow")]
    Overflow {
        /// Name of the operation.
        operation: &'static str,
    },

    /// Bad command-line argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing to the output stream failed.
    #[error("i/o error: {0}")]
    Io(#[source] std::io::Error),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Binding, step, or argument the error relates to.
    pub source: Option<String>,
    /// Chain of operations that led to the error, outermost last.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        for frame in &self.stack {
            write!(f, "\n  in {frame}")?;
        }
        Ok(())
    }
}
