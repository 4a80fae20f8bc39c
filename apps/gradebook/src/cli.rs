//! # CLI Module
//!
//! Command-line surface for the gradebook binary.
//!
//! Commands write to any `io::Write` so tests can capture their output.
//! Call-trace lines are not part of that output: they travel through
//! `tracing` and land wherever the installed subscriber sends them.

use clap::{Parser, Subcommand, ValueEnum};
use gradebook_core::{Student, StudentError, StudentSummary};
use serde::Serialize;
use std::io::{self, Write};
use thiserror::Error;

/// Courses every demo student registers, one registration call each.
const DEMO_COURSES: [&str; 2] = ["Math", "Physics"];

// =============================================================================
// ARGUMENTS
// =============================================================================

#[derive(Debug, Parser)]
#[command(name = "gradebook", version, about = "Track courses, grades and GPA for students")]
pub struct Cli {
    /// Suppress call-trace lines
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Call traces would interleave with JSON output, so JSON implies quiet.
    pub fn tracing_quiet(&self) -> bool {
        self.quiet || self.format == OutputFormat::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the three-student demonstration (default)
    Demo,
    /// Build one student from the arguments and print it
    Show {
        /// Student name
        #[arg(long)]
        name: String,
        /// Student identifier
        #[arg(long, allow_negative_numbers = true)]
        id: i64,
        /// Course to register (repeatable, kept in order)
        #[arg(long = "course")]
        courses: Vec<String>,
        /// Grade to add (repeatable, applied to courses in order)
        #[arg(long = "grade", allow_negative_numbers = true)]
        grades: Vec<f64>,
    },
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Student(#[from] StudentError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Dispatch the parsed command line.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<(), CliError> {
    match &cli.command {
        None | Some(Commands::Demo) => cmd_demo(out, cli.format),
        Some(Commands::Show {
            name,
            id,
            courses,
            grades,
        }) => cmd_show(out, name, *id, courses, grades, cli.format),
    }
}

/// One demo comparison and its outcome.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    pub expression: &'static str,
    pub result: bool,
}

/// JSON shape of the demo output.
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub students: Vec<StudentSummary>,
    pub comparisons: Vec<ComparisonResult>,
}

/// The demonstration: John and Sarah both average 85.0, Mike 47.5.
///
/// Text output is one `True`/`False` line per comparison, printed right
/// after the comparison runs.
pub fn cmd_demo<W: Write>(out: &mut W, format: OutputFormat) -> Result<(), CliError> {
    tracing::debug!("running demo");

    let john = demo_student("John", 1, [90.0, 80.0])?;
    let sarah = demo_student("Sarah", 2, [90.0, 80.0])?;
    let mike = demo_student("Mike", 3, [35.0, 60.0])?;

    match format {
        OutputFormat::Text => {
            writeln!(out, "{}", verdict(john == sarah))?;
            writeln!(out, "{}", verdict(john > sarah))?;
            writeln!(out, "{}", verdict(sarah < mike))?;
        }
        OutputFormat::Json => {
            let report = DemoReport {
                students: vec![john.summary(), sarah.summary(), mike.summary()],
                comparisons: vec![
                    ComparisonResult {
                        expression: "John == Sarah",
                        result: john == sarah,
                    },
                    ComparisonResult {
                        expression: "John > Sarah",
                        result: john > sarah,
                    },
                    ComparisonResult {
                        expression: "Sarah < Mike",
                        result: sarah < mike,
                    },
                ],
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }

    Ok(())
}

/// Build a single student and print its rendering or summary.
///
/// All courses go in with one registration call, then each grade in turn.
pub fn cmd_show<W: Write>(
    out: &mut W,
    name: &str,
    id: i64,
    courses: &[String],
    grades: &[f64],
    format: OutputFormat,
) -> Result<(), CliError> {
    tracing::debug!(
        name,
        id,
        courses = courses.len(),
        grades = grades.len(),
        "building student"
    );

    let mut student = Student::new(name, id);
    student.register_course(courses.iter().cloned());
    for grade in grades {
        student.add_grade(*grade)?;
    }

    match format {
        OutputFormat::Text => writeln!(out, "{}", student)?,
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&student.summary())?)?;
        }
    }
    Ok(())
}

fn demo_student(name: &str, id: i64, grades: [f64; 2]) -> Result<Student, StudentError> {
    let mut student = Student::new(name, id);
    for course in DEMO_COURSES {
        student.register_course([course]);
    }
    for grade in grades {
        student.add_grade(grade)?;
    }
    Ok(student)
}

/// Boolean as the demo prints it.
fn verdict(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}
