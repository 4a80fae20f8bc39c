//! # Trace Module
//!
//! Call tracing for the mutating and comparing Student operations.
//!
//! Every traced operation emits exactly one INFO event on
//! [`CALL_TARGET`] before doing any work. The event message is the full
//! trace line, so a subscriber that prints bare messages reproduces it
//! verbatim:
//!
//! ```text
//!                     -> Logging register_course(<Student 'John' #1>, 'Math')
//! ```
//!
//! The core never decides where the line goes. Without a subscriber the
//! event is dropped.

use crate::formats::{format_grade, quote_text};
use std::fmt;

/// Target used for every call-trace event.
pub const CALL_TARGET: &str = "gradebook::calls";

/// Indentation in front of the arrow on every trace line.
const TRACE_INDENT: &str = "                    ";

// =============================================================================
// OPERATION
// =============================================================================

/// The Student operations that are traced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    RegisterCourse,
    AddGrade,
    GreaterThan,
    LessThan,
    Equals,
}

impl Operation {
    /// Method name as it appears in the trace line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::RegisterCourse => "register_course",
            Self::AddGrade => "add_grade",
            Self::GreaterThan => "greater_than",
            Self::LessThan => "less_than",
            Self::Equals => "equals",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// ARGUMENTS
// =============================================================================

/// One positional argument of a traced call.
#[derive(Debug, Clone, PartialEq)]
pub enum CallArg {
    /// A Student record, identified by name and id.
    Student { name: String, student_id: i64 },
    /// A course name.
    Text(String),
    /// A grade.
    Number(f64),
    /// A value of some other type; only its type name is known.
    Opaque(&'static str),
}

impl fmt::Display for CallArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student { name, student_id } => {
                write!(f, "<Student {} #{}>", quote_text(name), student_id)
            }
            Self::Text(text) => f.write_str(&quote_text(text)),
            Self::Number(n) => f.write_str(&format_grade(*n)),
            Self::Opaque(type_name) => write!(f, "<{}>", type_name),
        }
    }
}

// =============================================================================
// TRACE LINE
// =============================================================================

/// A single traced call: operation plus its arguments, receiver first.
#[derive(Debug, Clone, PartialEq)]
pub struct CallTrace {
    pub operation: Operation,
    pub args: Vec<CallArg>,
}

impl CallTrace {
    #[must_use]
    pub fn new(operation: Operation, args: Vec<CallArg>) -> Self {
        Self { operation, args }
    }
}

impl fmt::Display for CallTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-> Logging {}(", TRACE_INDENT, self.operation)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", arg)?;
        }
        // A one-element argument tuple keeps its trailing comma.
        if self.args.len() == 1 {
            f.write_str(",")?;
        }
        f.write_str(")")
    }
}

/// Emit the trace event for `operation` called with `args`.
pub fn record_call(operation: Operation, args: Vec<CallArg>) {
    let trace = CallTrace::new(operation, args);
    tracing::info!(target: CALL_TARGET, "{}", trace);
}

// =============================================================================
// TESTS
// =============================================================================
