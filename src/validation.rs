//! Input validation for timetabling runs.
//!
//! Checks structural integrity of the classroom roster and course set
//! before searching. Detects:
//! - Duplicate names
//! - Courses referencing rooms outside the roster
//! - Empty day sets (perpetually unschedulable)
//! - Courses whose constraints admit no feasible window
//!
//! Infeasibility is reported here, eagerly, so random initialization
//! never has to retry or degrade silently.

use crate::models::{Classroom, Course};
use std::collections::HashSet;
use std::sync::Arc;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same name.
    DuplicateId,
    /// A course references a room that is not in the roster.
    UnknownClassroom,
    /// A course allows no days and can never be scheduled.
    EmptyDaySet,
    /// No allowed (room, day) admits the course's duration.
    NoFeasibleWindow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a timetabling run.
///
/// Checks:
/// 1. No duplicate classroom names
/// 2. No duplicate course names
/// 3. Every room a course allows is in the roster (handle identity)
/// 4. Every course allows at least one day
/// 5. Every course fits some allowed room's window
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(classrooms: &[Arc<Classroom>], courses: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut room_names = HashSet::new();
    for room in classrooms {
        if !room_names.insert(room.name()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate classroom name: {}", room.name()),
            ));
        }
    }

    let mut course_names = HashSet::new();
    for course in courses {
        if !course_names.insert(course.name()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course name: {}", course.name()),
            ));
        }

        for room in course.possible_classrooms() {
            if !classrooms.iter().any(|r| Arc::ptr_eq(r, room)) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownClassroom,
                    format!(
                        "Course '{}' references classroom '{}' outside the roster",
                        course.name(),
                        room.name()
                    ),
                ));
            }
        }

        if course.possible_days().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyDaySet,
                format!("Course '{}' allows no days", course.name()),
            ));
        } else if !course.is_feasible() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoFeasibleWindow,
                format!(
                    "Course '{}' (duration {}) fits no allowed room's window",
                    course.name(),
                    course.duration()
                ),
            ));
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Day;

    fn sample_roster() -> Vec<Arc<Classroom>> {
        vec![
            Classroom::shared("7606", 8, 16).unwrap(),
            Classroom::shared("7602", 9, 12).unwrap(),
        ]
    }

    fn sample_course(rooms: &[Arc<Classroom>]) -> Course {
        Course::new("AI", 2, 7, 15, rooms.to_vec(), [Day::Tuesday]).unwrap()
    }

    #[test]
    fn test_valid_input() {
        let roster = sample_roster();
        let courses = vec![sample_course(&roster)];
        validate_input(&roster, &courses).unwrap();
    }

    #[test]
    fn test_duplicate_classroom_name() {
        let mut roster = sample_roster();
        roster.push(Classroom::shared("7606", 10, 14).unwrap());
        let courses = vec![sample_course(&roster[..2])];

        let errors = validate_input(&roster, &courses).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert!(errors[0].message.contains("7606"));
    }

    #[test]
    fn test_duplicate_course_name() {
        let roster = sample_roster();
        let courses = vec![sample_course(&roster), sample_course(&roster)];

        let errors = validate_input(&roster, &courses).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert!(errors[0].message.contains("AI"));
    }

    #[test]
    fn test_unknown_classroom_is_identity_not_name() {
        let roster = sample_roster();
        // Same name and window as a roster room, different allocation.
        let lookalike = Classroom::shared("7606", 8, 16).unwrap();
        let courses = vec![Course::new("AI", 2, 7, 15, vec![lookalike], [Day::Tuesday]).unwrap()];

        let errors = validate_input(&roster, &courses).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::UnknownClassroom);
    }

    #[test]
    fn test_empty_day_set() {
        let roster = sample_roster();
        let courses = vec![Course::new("AI", 2, 7, 15, roster.clone(), []).unwrap()];

        let errors = validate_input(&roster, &courses).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyDaySet);
    }

    #[test]
    fn test_no_feasible_window() {
        let roster = sample_roster();
        // Duration 9 exceeds both room windows.
        let courses = vec![Course::new("AI", 9, 0, 24, roster.clone(), [Day::Tuesday]).unwrap()];

        let errors = validate_input(&roster, &courses).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NoFeasibleWindow);
        assert!(errors[0].message.contains("duration 9"));
    }

    #[test]
    fn test_feasible_in_one_room_is_enough() {
        let roster = sample_roster();
        // Duration 5 fits 7606's [8, 16) but not 7602's [9, 12).
        let courses = vec![Course::new("AI", 5, 0, 24, roster.clone(), [Day::Tuesday]).unwrap()];
        validate_input(&roster, &courses).unwrap();
    }

    #[test]
    fn test_multiple_errors_accumulate() {
        let roster = sample_roster();
        let foreign = Classroom::shared("off-roster", 8, 16).unwrap();
        let courses = vec![
            sample_course(&roster),
            Course::new("AI", 2, 7, 15, vec![foreign], []).unwrap(),
        ];

        let errors = validate_input(&roster, &courses).unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| e.kind.clone()).collect();
        assert!(kinds.contains(&ValidationErrorKind::DuplicateId));
        assert!(kinds.contains(&ValidationErrorKind::UnknownClassroom));
        assert!(kinds.contains(&ValidationErrorKind::EmptyDaySet));
    }
}
