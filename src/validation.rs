//! Input validation for timetabling problems.
//!
//! Checks structural integrity of the catalog before a run. Detects:
//! - Empty teacher, room, slot, or class collections
//! - Duplicate teacher or room IDs
//! - Empty, inverted, or out-of-day time slots
//! - Classes with a blank subject
//!
//! Constraint violations that genetic search is expected to resolve
//! (unqualified teachers, undersized rooms) are not validation errors.

use crate::models::Catalog;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind:?}: {message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required collection has no entries.
    EmptyCatalog,
    /// Two entities share the same ID.
    DuplicateId,
    /// A time slot is empty, inverted, or extends past midnight.
    InvalidTimeSlot,
    /// A class has no subject.
    BlankSubject,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a catalog.
///
/// Checks:
/// 1. Teachers, rooms, time slots, and classes are all non-empty
/// 2. No duplicate teacher IDs
/// 3. No duplicate room IDs
/// 4. Every time slot is a non-empty window within one day
/// 5. Every class names a subject
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();

    for (name, len) in [
        ("teachers", catalog.teachers.len()),
        ("rooms", catalog.rooms.len()),
        ("time slots", catalog.time_slots.len()),
        ("classes", catalog.classes.len()),
    ] {
        if len == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCatalog,
                format!("Catalog has no {name}"),
            ));
        }
    }

    let mut teacher_ids = HashSet::new();
    for t in &catalog.teachers {
        if !teacher_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher ID: {}", t.id),
            ));
        }
    }

    let mut room_ids = HashSet::new();
    for r in &catalog.rooms {
        if !room_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }
    }

    for (idx, slot) in catalog.time_slots.iter().enumerate() {
        if !slot.window.is_well_formed() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeSlot,
                format!("Time slot #{idx} ({slot}) is not a valid interval"),
            ));
        }
    }

    for (idx, class) in catalog.classes.iter().enumerate() {
        if class.subject.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankSubject,
                format!("Class #{idx} has no subject"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Class, Room, Teacher, TimeSlot, TimeWindow, Weekday};

    fn sample_catalog() -> Catalog {
        Catalog::new()
            .with_teacher(
                Teacher::new("T1")
                    .with_subject("Mathematics")
                    .available_on(Weekday::Monday),
            )
            .with_teacher(Teacher::new("T2").with_subject("History"))
            .with_room(Room::new("R101", 30))
            .with_time_slot(TimeSlot::at(Weekday::Monday, (8, 0), (10, 0)))
            .with_class(Class::new("Mathematics").with_capacity(25))
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_catalog(&sample_catalog()).is_ok());
    }

    #[test]
    fn test_empty_collections() {
        let errors = validate_catalog(&Catalog::new()).unwrap_err();
        let empty = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::EmptyCatalog)
            .count();
        assert_eq!(empty, 4);
    }

    #[test]
    fn test_duplicate_teacher_id() {
        let catalog = sample_catalog().with_teacher(Teacher::new("T1"));
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("teacher")));
    }

    #[test]
    fn test_duplicate_room_id() {
        let catalog = sample_catalog().with_room(Room::new("R101", 10));
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("room")));
    }

    #[test]
    fn test_inverted_time_slot() {
        let catalog = sample_catalog()
            .with_time_slot(TimeSlot::new(Weekday::Tuesday, TimeWindow::from_hm((11, 0), (9, 0))));
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidTimeSlot));
    }

    #[test]
    fn test_blank_subject() {
        let catalog = sample_catalog().with_class(Class::new("  "));
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::BlankSubject));
    }

    #[test]
    fn test_multiple_errors() {
        let catalog = Catalog::new()
            .with_teacher(Teacher::new("T1"))
            .with_teacher(Teacher::new("T1"))
            .with_class(Class::new(""));

        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors.len() >= 4);
    }

    #[test]
    fn test_error_display() {
        let errors = validate_catalog(&Catalog::new()).unwrap_err();
        assert!(errors[0].to_string().starts_with("EmptyCatalog"));
    }
}
