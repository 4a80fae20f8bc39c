//! # Formats Module
//!
//! Output formats for the Student record.
//!
//! This module contains:
//! - Plain-text rendering primitives (quoting, grade and GPA forms, lists)
//! - The serializable summary snapshot used for JSON output
//!
//! Note: nothing here writes anywhere. Printing stays in the app layer
//! (apps/gradebook); this module only builds values and strings.

mod summary;
mod text;

pub use summary::StudentSummary;
pub use text::{format_gpa, format_grade, format_list, quote_text};
