//! # Gradebook Core
//!
//! The Student record: course registration, positional grading, a derived
//! GPA and GPA-based comparison.
//!
//! ```
//! use gradebook_core::Student;
//!
//! let mut john = Student::new("John", 1);
//! john.register_course(["Math", "Physics"]);
//! john.add_grade(90.0)?;
//! john.add_grade(80.0)?;
//! assert_eq!(john.gpa(), 85.0);
//! assert!(john.add_grade(70.0).is_err());
//! # Ok::<(), gradebook_core::StudentError>(())
//! ```
//!
//! Registration, grading and the three comparisons emit a call-trace event
//! through `tracing` (see [`trace`]). The core itself never prints.

pub mod error;
pub mod formats;
pub mod student;
pub mod trace;

pub use error::StudentError;
pub use formats::StudentSummary;
pub use student::Student;
pub use trace::{CALL_TARGET, CallArg, CallTrace, Operation};
