//! Timetable (solution) model.
//!
//! A timetable is the resolved, caller-facing form of a chromosome:
//! every class bound to a concrete teacher, room, and slot, plus the
//! constraint violations the solution still carries. It holds plain
//! data only; rendering and persistence belong to the caller.

use serde::{Deserialize, Serialize};

use super::{TimeSlot, Weekday};

/// A resolved timetable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// Class placements, ordered by weekday then start time.
    pub entries: Vec<TimetableEntry>,
    /// Constraint violations detected in this timetable.
    pub violations: Vec<Violation>,
    /// Fitness score (0 = fully valid, negative otherwise).
    pub fitness: i64,
}

/// One class placed at a teacher, room, and slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableEntry {
    /// Position of the class in the catalog.
    pub class_index: usize,
    /// Subject taught.
    pub subject: String,
    /// Assigned teacher ID.
    pub teacher_id: String,
    /// Assigned teacher display name (denormalized for rendering).
    pub teacher_name: String,
    /// Assigned room ID.
    pub room_id: String,
    /// Assigned room capacity (denormalized for rendering).
    pub room_capacity: u32,
    /// Assigned slot.
    pub slot: TimeSlot,
}

/// A constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Gene positions involved (one for per-class defects, two for conflicts).
    pub class_indices: Vec<usize>,
    /// Human-readable description.
    pub message: String,
    /// Points this violation subtracts from fitness.
    pub penalty: i64,
}

/// Classification of timetable defects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationType {
    /// Same teacher in two overlapping slots.
    TeacherConflict,
    /// Same room in two overlapping slots.
    RoomConflict,
    /// Teacher not qualified for the class subject.
    UnqualifiedTeacher,
    /// Class needs more seats than the room has.
    CapacityExceeded,
    /// Teacher does not work on the slot's weekday.
    TeacherUnavailable,
}

impl Timetable {
    /// Whether the timetable carries no violations.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Entries scheduled on `day`, in start-time order.
    pub fn entries_on(&self, day: Weekday) -> impl Iterator<Item = &TimetableEntry> {
        self.entries.iter().filter(move |e| e.slot.day == day)
    }

    /// Entries taught by a teacher.
    pub fn entries_for_teacher<'a>(
        &'a self,
        teacher_id: &'a str,
    ) -> impl Iterator<Item = &'a TimetableEntry> {
        self.entries.iter().filter(move |e| e.teacher_id == teacher_id)
    }

    /// Number of violations of one type.
    pub fn violation_count(&self, violation_type: ViolationType) -> usize {
        self.violations
            .iter()
            .filter(|v| v.violation_type == violation_type)
            .count()
    }
}

impl Violation {
    /// Creates a violation.
    pub fn new(
        violation_type: ViolationType,
        class_indices: Vec<usize>,
        message: impl Into<String>,
        penalty: i64,
    ) -> Self {
        Self {
            violation_type,
            class_indices,
            message: message.into(),
            penalty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(class_index: usize, teacher: &str, slot: TimeSlot) -> TimetableEntry {
        TimetableEntry {
            class_index,
            subject: "Art".into(),
            teacher_id: teacher.into(),
            teacher_name: String::new(),
            room_id: "R1".into(),
            room_capacity: 30,
            slot,
        }
    }

    #[test]
    fn test_timetable_queries() {
        let tt = Timetable {
            entries: vec![
                entry(0, "T1", TimeSlot::at(Weekday::Monday, (8, 0), (9, 0))),
                entry(1, "T2", TimeSlot::at(Weekday::Monday, (9, 0), (10, 0))),
                entry(2, "T1", TimeSlot::at(Weekday::Tuesday, (8, 0), (9, 0))),
            ],
            violations: vec![Violation::new(
                ViolationType::CapacityExceeded,
                vec![1],
                "too small",
                1,
            )],
            fitness: -1,
        };

        assert!(!tt.is_valid());
        assert_eq!(tt.entries_on(Weekday::Monday).count(), 2);
        assert_eq!(tt.entries_on(Weekday::Friday).count(), 0);
        assert_eq!(tt.entries_for_teacher("T1").count(), 2);
        assert_eq!(tt.violation_count(ViolationType::CapacityExceeded), 1);
        assert_eq!(tt.violation_count(ViolationType::RoomConflict), 0);
    }
}
