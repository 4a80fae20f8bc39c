//! # Student Module
//!
//! The Student record: registered courses, their grades and the derived GPA.
//!
//! Grades attach positionally: `grades[i]` belongs to `courses[i]`. A grade
//! can only be added while some course is still ungraded, so
//! `grades.len() <= courses.len()` holds at every observable point. Nothing
//! is ever removed, which means a record only moves towards fully graded.
//!
//! Ordering and equality look at GPA alone. Two different students with the
//! same GPA compare equal.

use crate::error::StudentError;
use crate::formats::{StudentSummary, format_gpa, format_grade, format_list, quote_text};
use crate::trace::{CallArg, Operation, record_call};
use std::any::{Any, type_name};
use std::cmp::Ordering;
use std::fmt;

/// Type name reported for the left-hand side of a failed comparison.
const STUDENT_TYPE: &str = "Student";

/// A student with registered courses and positional grades.
///
/// `name` and `student_id` are fixed at construction. The two sequences
/// only grow, through [`register_course`](Self::register_course) and
/// [`add_grade`](Self::add_grade).
#[derive(Debug, Clone)]
pub struct Student {
    name: String,
    student_id: i64,
    courses: Vec<String>,
    grades: Vec<f64>,
}

impl Student {
    /// Create a student with no courses and no grades.
    ///
    /// Any name and id are accepted, empty and negative included.
    #[must_use]
    pub fn new(name: impl Into<String>, student_id: i64) -> Self {
        Self {
            name: name.into(),
            student_id,
            courses: Vec::new(),
            grades: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn student_id(&self) -> i64 {
        self.student_id
    }

    /// Registered courses, in registration order.
    #[must_use]
    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    /// Recorded grades, in the order they were added.
    #[must_use]
    pub fn grades(&self) -> &[f64] {
        &self.grades
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Register zero or more courses, appended in the order given.
    ///
    /// Duplicates are kept. Registering nothing is a no-op apart from the
    /// trace line.
    pub fn register_course<I, S>(&mut self, courses: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let courses: Vec<String> = courses.into_iter().map(Into::into).collect();

        let mut args = Vec::with_capacity(courses.len() + 1);
        args.push(self.call_arg());
        args.extend(courses.iter().cloned().map(CallArg::Text));
        record_call(Operation::RegisterCourse, args);

        self.courses.extend(courses);
    }

    /// Grade the earliest ungraded course.
    ///
    /// # Errors
    ///
    /// Returns [`StudentError::InvalidState`] when every registered course
    /// already has a grade (including when no course is registered). The
    /// record is left untouched.
    pub fn add_grade(&mut self, grade: f64) -> Result<(), StudentError> {
        record_call(
            Operation::AddGrade,
            vec![self.call_arg(), CallArg::Number(grade)],
        );

        if self.grades.len() >= self.courses.len() {
            return Err(StudentError::InvalidState {
                courses: self.courses.len(),
                grades: self.grades.len(),
            });
        }
        self.grades.push(grade);
        Ok(())
    }

    // =========================================================================
    // DERIVED STATE
    // =========================================================================

    /// Arithmetic mean of the recorded grades, `0.0` when there are none.
    ///
    /// Recomputed on every call.
    #[must_use]
    #[allow(clippy::float_arithmetic)] // the one averaging site
    pub fn gpa(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.iter().sum::<f64>() / self.grades.len() as f64
    }

    /// Number of registered courses still waiting for a grade.
    #[must_use]
    pub fn ungraded_count(&self) -> usize {
        self.courses.len() - self.grades.len()
    }

    /// The course the next [`add_grade`](Self::add_grade) applies to.
    #[must_use]
    pub fn next_ungraded(&self) -> Option<&str> {
        self.courses.get(self.grades.len()).map(String::as_str)
    }

    /// True when no ungraded course remains.
    #[must_use]
    pub fn is_fully_graded(&self) -> bool {
        self.ungraded_count() == 0
    }

    /// Detached, serializable snapshot including the GPA.
    #[must_use]
    pub fn summary(&self) -> StudentSummary {
        StudentSummary {
            name: self.name.clone(),
            student_id: self.student_id,
            courses: self.courses.clone(),
            grades: self.grades.clone(),
            gpa: self.gpa(),
        }
    }

    // =========================================================================
    // COMPARISON
    // =========================================================================

    /// `self.gpa() > other.gpa()`.
    ///
    /// # Errors
    ///
    /// Returns [`StudentError::TypeCompare`] when `other` is not a Student.
    pub fn greater_than<T: Any>(&self, other: &T) -> Result<bool, StudentError> {
        let other = self.comparand(Operation::GreaterThan, other)?;
        Ok(self.gpa() > other.gpa())
    }

    /// `self.gpa() < other.gpa()`.
    ///
    /// # Errors
    ///
    /// Returns [`StudentError::TypeCompare`] when `other` is not a Student.
    pub fn less_than<T: Any>(&self, other: &T) -> Result<bool, StudentError> {
        let other = self.comparand(Operation::LessThan, other)?;
        Ok(self.gpa() < other.gpa())
    }

    /// `self.gpa() == other.gpa()`. Name and id play no part.
    ///
    /// # Errors
    ///
    /// Returns [`StudentError::TypeCompare`] when `other` is not a Student.
    pub fn equals<T: Any>(&self, other: &T) -> Result<bool, StudentError> {
        let other = self.comparand(Operation::Equals, other)?;
        Ok(self.gpa() == other.gpa())
    }

    /// Three-way GPA comparison. Not traced.
    ///
    /// `None` only when a GPA is NaN.
    #[must_use]
    pub fn compare_gpa(&self, other: &Student) -> Option<Ordering> {
        self.gpa().partial_cmp(&other.gpa())
    }

    /// Trace the comparison, then check that `other` is a Student.
    fn comparand<'a, T: Any>(
        &self,
        operation: Operation,
        other: &'a T,
    ) -> Result<&'a Student, StudentError> {
        let student = (other as &dyn Any).downcast_ref::<Student>();
        let arg = student.map_or(CallArg::Opaque(type_name::<T>()), Student::call_arg);
        record_call(operation, vec![self.call_arg(), arg]);

        student.ok_or(StudentError::TypeCompare {
            left: STUDENT_TYPE,
            right: type_name::<T>(),
        })
    }

    /// How this record appears as an argument in trace lines.
    fn call_arg(&self) -> CallArg {
        CallArg::Student {
            name: self.name.clone(),
            student_id: self.student_id,
        }
    }
}

// =============================================================================
// OPERATORS
// =============================================================================

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        record_call(Operation::Equals, vec![self.call_arg(), other.call_arg()]);
        self.gpa() == other.gpa()
    }
}

impl PartialOrd for Student {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_gpa(other)
    }

    fn gt(&self, other: &Self) -> bool {
        record_call(
            Operation::GreaterThan,
            vec![self.call_arg(), other.call_arg()],
        );
        self.gpa() > other.gpa()
    }

    fn lt(&self, other: &Self) -> bool {
        record_call(Operation::LessThan, vec![self.call_arg(), other.call_arg()]);
        self.gpa() < other.gpa()
    }
}

// =============================================================================
// RENDERING
// =============================================================================

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name : {}", self.name)?;
        writeln!(f, "ID : {}", self.student_id)?;
        writeln!(
            f,
            "Courses : {}",
            format_list(&self.courses, |c| quote_text(c))
        )?;
        writeln!(
            f,
            "Grades : {}",
            format_list(&self.grades, |g| format_grade(*g))
        )?;
        write!(
            f,
            "GPA : {}",
            format_gpa(self.gpa(), !self.grades.is_empty())
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_arithmetic)]

    use super::*;
    use proptest::prelude::*;

    fn graded(name: &str, id: i64, grades: &[f64]) -> Student {
        let mut student = Student::new(name, id);
        student.register_course(["Math", "Physics"]);
        for grade in grades {
            student.add_grade(*grade).unwrap();
        }
        student
    }

    #[test]
    fn new_student_is_empty() {
        let student = Student::new("John", 1);
        assert_eq!(student.name(), "John");
        assert_eq!(student.student_id(), 1);
        assert!(student.courses().is_empty());
        assert!(student.grades().is_empty());
        assert_eq!(student.gpa(), 0.0);
        assert!(student.is_fully_graded());
        assert_eq!(student.next_ungraded(), None);
    }

    #[test]
    fn construction_accepts_any_identity() {
        let student = Student::new("", -7);
        assert_eq!(student.name(), "");
        assert_eq!(student.student_id(), -7);
    }

    #[test]
    fn register_course_appends_in_order() {
        let mut student = Student::new("John", 1);
        student.register_course(["Math"]);
        student.register_course(vec![String::from("Physics"), String::from("Math")]);
        student.register_course(Vec::<String>::new());

        assert_eq!(student.courses(), ["Math", "Physics", "Math"]);
        assert_eq!(student.ungraded_count(), 3);
    }

    #[test]
    fn add_grade_fills_earliest_ungraded_course() {
        let mut student = Student::new("John", 1);
        student.register_course(["Math", "Physics"]);
        assert_eq!(student.next_ungraded(), Some("Math"));

        student.add_grade(90.0).unwrap();
        assert_eq!(student.next_ungraded(), Some("Physics"));
        assert_eq!(student.grades(), [90.0]);

        student.add_grade(80.0).unwrap();
        assert!(student.is_fully_graded());
        assert_eq!(student.next_ungraded(), None);
    }

    #[test]
    fn add_grade_without_courses_is_invalid_state() {
        let mut student = Student::new("Nobody", 0);
        let err = student.add_grade(75.0).unwrap_err();
        assert_eq!(
            err,
            StudentError::InvalidState {
                courses: 0,
                grades: 0
            }
        );
        assert!(student.grades().is_empty());
    }

    #[test]
    fn add_grade_after_all_graded_leaves_record_untouched() {
        let mut student = graded("John", 1, &[90.0, 80.0]);
        let err = student.add_grade(100.0).unwrap_err();
        assert!(err.is_invalid_state());
        assert_eq!(student.grades(), [90.0, 80.0]);

        // A fresh course reopens a slot.
        student.register_course(["Chemistry"]);
        student.add_grade(100.0).unwrap();
        assert_eq!(student.grades(), [90.0, 80.0, 100.0]);
    }

    #[test]
    fn gpa_is_mean_of_grades() {
        assert_eq!(graded("John", 1, &[90.0, 80.0]).gpa(), 85.0);
        assert_eq!(graded("Mike", 3, &[35.0, 60.0]).gpa(), 47.5);
        assert_eq!(graded("Half", 4, &[70.0]).gpa(), 70.0);
    }

    #[test]
    fn comparisons_use_gpa_only() {
        let john = graded("John", 1, &[90.0, 80.0]);
        let sarah = graded("Sarah", 2, &[90.0, 80.0]);
        let mike = graded("Mike", 3, &[35.0, 60.0]);

        assert!(john.equals(&sarah).unwrap());
        assert!(!john.greater_than(&sarah).unwrap());
        assert!(!sarah.less_than(&mike).unwrap());
        assert!(mike.less_than(&sarah).unwrap());
        assert!(sarah.greater_than(&mike).unwrap());
        assert!(!john.equals(&mike).unwrap());
    }

    #[test]
    fn operators_agree_with_named_comparisons() {
        let john = graded("John", 1, &[90.0, 80.0]);
        let sarah = graded("Sarah", 2, &[90.0, 80.0]);
        let mike = graded("Mike", 3, &[35.0, 60.0]);

        let john_above_sarah = john > sarah;
        let sarah_below_mike = sarah < mike;
        assert!(john == sarah);
        assert!(!john_above_sarah);
        assert!(!sarah_below_mike);
        assert!(mike < john);
        assert!(john >= sarah);
        assert_eq!(john.compare_gpa(&mike), Some(Ordering::Greater));
        assert_eq!(john.compare_gpa(&sarah), Some(Ordering::Equal));
    }

    #[test]
    fn comparing_with_non_student_is_type_compare() {
        let john = graded("John", 1, &[90.0, 80.0]);

        let err = john.greater_than(&85).unwrap_err();
        assert_eq!(
            err,
            StudentError::TypeCompare {
                left: "Student",
                right: "i32"
            }
        );
        assert!(john.less_than(&"Sarah").unwrap_err().is_type_compare());
        assert!(john.equals(&85.0_f64).unwrap_err().is_type_compare());
    }

    #[test]
    fn render_tracks_grades() {
        let mut john = Student::new("John", 1);
        john.register_course(["Math"]);
        john.register_course(["Physics"]);
        john.add_grade(90.0).unwrap();
        assert_eq!(
            john.to_string(),
            "Name : John\nID : 1\nCourses : ['Math', 'Physics']\nGrades : [90]\nGPA : 90.0"
        );

        john.add_grade(80.0).unwrap();
        assert_eq!(
            john.to_string(),
            "Name : John\nID : 1\nCourses : ['Math', 'Physics']\nGrades : [90, 80]\nGPA : 85.0"
        );
    }

    #[test]
    fn render_escapes_control_chars_in_course_names() {
        let mut student = Student::new("J", 1);
        student.register_course(["Writer's\nLab", "Stats\tII"]);
        let rendered = student.to_string();

        assert_eq!(rendered.lines().count(), 5);
        assert!(rendered.contains(r#"Courses : ["Writer's\nLab", 'Stats\tII']"#));
    }

    #[test]
    fn render_ungraded_student() {
        let student = Student::new("Sarah", 2);
        assert_eq!(
            student.to_string(),
            "Name : Sarah\nID : 2\nCourses : []\nGrades : []\nGPA : 0"
        );
    }

    #[test]
    fn summary_serializes_with_gpa() {
        let json = serde_json::to_value(graded("Mike", 3, &[35.0, 60.0]).summary()).unwrap();
        assert_eq!(json["name"], "Mike");
        assert_eq!(json["student_id"], 3);
        assert_eq!(json["courses"], serde_json::json!(["Math", "Physics"]));
        assert_eq!(json["gpa"], 47.5);
    }

    // =========================================================================
    // PROPERTIES
    // =========================================================================

    proptest! {
        #[test]
        fn registration_count_matches_calls(
            batches in prop::collection::vec(prop::collection::vec("[a-z]{1,8}", 0..4), 0..6)
        ) {
            let mut student = Student::new("P", 1);
            for batch in &batches {
                student.register_course(batch.clone());
            }
            let expected: Vec<String> = batches.into_iter().flatten().collect();
            prop_assert_eq!(student.courses(), expected.as_slice());
        }

        #[test]
        fn grades_never_outnumber_courses(
            steps in prop::collection::vec(prop::option::of(0u8..=100), 0..32)
        ) {
            // Some(g) adds a grade, None registers a course.
            let mut student = Student::new("P", 1);
            for step in steps {
                match step {
                    Some(grade) => {
                        let had_slot = student.grades().len() < student.courses().len();
                        let before = student.grades().len();
                        let result = student.add_grade(f64::from(grade));
                        prop_assert_eq!(result.is_ok(), had_slot);
                        let expected = if had_slot { before + 1 } else { before };
                        prop_assert_eq!(student.grades().len(), expected);
                    }
                    None => student.register_course(["Course"]),
                }
                prop_assert!(student.grades().len() <= student.courses().len());
            }
        }

        #[test]
        fn gpa_is_arithmetic_mean(grades in prop::collection::vec(0u8..=100, 0..16)) {
            let mut student = Student::new("P", 1);
            student.register_course(vec!["Course"; grades.len()]);
            for grade in &grades {
                student.add_grade(f64::from(*grade)).unwrap();
            }

            let expected = if grades.is_empty() {
                0.0
            } else {
                grades.iter().map(|g| f64::from(*g)).sum::<f64>() / grades.len() as f64
            };
            prop_assert_eq!(student.gpa(), expected);
        }

        #[test]
        fn comparisons_follow_gpa(a in 0u8..=100, b in 0u8..=100) {
            let mut left = Student::new("L", 1);
            left.register_course(["Course"]);
            left.add_grade(f64::from(a)).unwrap();
            let mut right = Student::new("R", 2);
            right.register_course(["Course"]);
            right.add_grade(f64::from(b)).unwrap();

            prop_assert_eq!(left.greater_than(&right).unwrap(), a > b);
            prop_assert_eq!(left.less_than(&right).unwrap(), a < b);
            prop_assert_eq!(left.equals(&right).unwrap(), a == b);
        }
    }
}
