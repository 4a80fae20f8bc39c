//! Serializable snapshot of a Student.

use serde::{Deserialize, Serialize};

/// Point-in-time view of a Student, GPA included.
///
/// The record itself is not serializable: its fields are only ever
/// changed through the registration and grading operations. A summary is
/// a detached copy and carries no such guarantee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    /// Student name.
    pub name: String,
    /// Student identifier.
    pub student_id: i64,
    /// Registered courses, in registration order.
    pub courses: Vec<String>,
    /// Recorded grades; `grades[i]` belongs to `courses[i]`.
    pub grades: Vec<f64>,
    /// Mean of `grades`, 0 when empty.
    pub gpa: f64,
}
