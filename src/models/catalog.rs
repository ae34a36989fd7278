//! Domain catalog.
//!
//! The catalog owns every teacher, room, time slot, and class of a
//! timetabling problem. It is built once by the caller and is read-only
//! afterwards; chromosomes reference its entries by index, so an index
//! into the catalog is the identity of a teacher, room, or slot.

use serde::{Deserialize, Serialize};

use super::{Class, Room, Teacher, TimeSlot};
use crate::validation::{validate_catalog, ValidationResult};

/// Immutable input collections for a timetabling run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Teachers that may be assigned.
    pub teachers: Vec<Teacher>,
    /// Rooms that may be assigned.
    pub rooms: Vec<Room>,
    /// Weekly slots that may be assigned.
    pub time_slots: Vec<TimeSlot>,
    /// Classes to schedule, in gene order.
    pub classes: Vec<Class>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a teacher.
    pub fn with_teacher(mut self, teacher: Teacher) -> Self {
        self.teachers.push(teacher);
        self
    }

    /// Adds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Adds a time slot.
    pub fn with_time_slot(mut self, slot: TimeSlot) -> Self {
        self.time_slots.push(slot);
        self
    }

    /// Adds a class.
    pub fn with_class(mut self, class: Class) -> Self {
        self.classes.push(class);
        self
    }

    /// Number of classes (= chromosome length).
    #[inline]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Looks up a teacher by ID.
    pub fn teacher(&self, id: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == id)
    }

    /// Looks up a room by ID.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Runs structural integrity checks. See [`validate_catalog`].
    pub fn validate(&self) -> ValidationResult {
        validate_catalog(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    #[test]
    fn test_catalog_builder() {
        let catalog = Catalog::new()
            .with_teacher(Teacher::new("T1").with_subject("Art"))
            .with_room(Room::new("R1", 20))
            .with_time_slot(TimeSlot::at(Weekday::Monday, (8, 0), (9, 0)))
            .with_class(Class::new("Art").with_capacity(15))
            .with_class(Class::new("Art").with_capacity(10));

        assert_eq!(catalog.teachers.len(), 1);
        assert_eq!(catalog.rooms.len(), 1);
        assert_eq!(catalog.time_slots.len(), 1);
        assert_eq!(catalog.class_count(), 2);
        assert!(catalog.teacher("T1").is_some());
        assert!(catalog.teacher("T2").is_none());
        assert_eq!(catalog.room("R1").map(|r| r.capacity), Some(20));
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_empty_catalog_is_invalid() {
        assert!(Catalog::new().validate().is_err());
    }
}
