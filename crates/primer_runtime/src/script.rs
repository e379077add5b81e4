//! Ordered lesson scripts.
//!
//! A [`Script`] is a list of labelled steps that run once, in declaration
//! order, against a single output stream.

use std::io::Write;

use primer_foundation::{Error, Result};
use primer_lessons::bindings::{GREETING, WORD};
use primer_lessons::{add_ints_coerced, add_one, first_letter, nth_letter};

/// A step body. Writes its output to the stream it is given.
pub type Action = fn(&mut dyn Write) -> Result<()>;

/// A single labelled step.
#[derive(Clone, Copy)]
pub struct Step {
    label: &'static str,
    action: Action,
}

impl Step {
    /// The step's label, used in logs and error context.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }
}

impl std::fmt::Debug for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Step").field("label", &self.label).finish()
    }
}

/// An ordered list of steps.
#[derive(Clone, Debug, Default)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    /// Creates an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step.
    #[must_use]
    pub fn step(mut self, label: &'static str, action: Action) -> Self {
        self.steps.push(Step { label, action });
        self
    }

    /// The combined lesson script.
    ///
    /// Prints, one per line: the greeting, `add_one(3)`, the second letter
    /// of the word, the word, its first letter, and `"1"` plus `"2"` under
    /// numeric coercion.
    #[must_use]
    pub fn lesson() -> Self {
        Self::new()
            .step("greeting", |out| Ok(writeln!(out, "{GREETING}")?))
            .step("add_one", |out| Ok(writeln!(out, "{}", add_one(3))?))
            .step("nth_letter", |out| {
                Ok(writeln!(out, "{}", nth_letter(WORD, 1)?)?)
            })
            .step("word", |out| Ok(writeln!(out, "{WORD}")?))
            .step("first_letter", |out| {
                Ok(writeln!(out, "{}", first_letter(WORD)?)?)
            })
            .step("add_ints_coerced", |out| {
                Ok(writeln!(out, "{}", add_ints_coerced("1", "2"))?)
            })
    }

    /// The steps in execution order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Runs every step in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the failing step's error with the step label added to its
    /// context.
    pub fn run(&self, out: &mut dyn Write) -> Result<()> {
        for step in &self.steps {
            tracing::debug!(step = step.label, "running step");
            (step.action)(&mut *out).map_err(|err| in_step(err, step.label))?;
        }
        tracing::debug!(steps = self.steps.len(), "script finished");
        Ok(())
    }
}

fn in_step(mut err: Error, label: &str) -> Error {
    let context = err
        .context
        .take()
        .unwrap_or_default()
        .with_frame(format!("step {label}"));
    err.with_context(context)
}
