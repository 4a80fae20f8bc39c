//! # Error Module
//!
//! Failures surfaced by the Student record.
//!
//! Both kinds are immediate and synchronous: nothing is retried, logged
//! or swallowed inside the core. The caller decides what to do.

use thiserror::Error;

/// Errors produced by [`Student`](crate::Student) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudentError {
    /// A grade was offered but every registered course already has one.
    ///
    /// Register another course first, or treat the grade as rejected.
    #[error("all courses have grades assigned ({grades} of {courses})")]
    InvalidState {
        /// Registered course slots at the time of the call.
        courses: usize,
        /// Grades already recorded at the time of the call.
        grades: usize,
    },

    /// A comparison was attempted against something that is not a Student.
    ///
    /// This is a programming error at the call site.
    #[error("cannot compare {left} to {right}")]
    TypeCompare {
        /// Type name of the left-hand operand.
        left: &'static str,
        /// Type name of the right-hand operand.
        right: &'static str,
    },
}

impl StudentError {
    /// True for the "no ungraded course left" failure.
    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }

    /// True for the "operand is not a Student" failure.
    #[must_use]
    pub fn is_type_compare(&self) -> bool {
        matches!(self, Self::TypeCompare { .. })
    }
}

// =============================================================================
// TESTS
// =============================================================================
