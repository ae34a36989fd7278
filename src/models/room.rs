//! Room and class models.
//!
//! A room is a fixed teaching space with a seating capacity. A class is
//! the template to be placed in the timetable: a subject and the number
//! of seats it needs. Neither carries an assignment; bindings live in
//! the GA genes.

use serde::{Deserialize, Serialize};

/// A room that can host classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Number of seats.
    pub capacity: u32,
}

impl Room {
    /// Creates a new room.
    pub fn new(id: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            capacity,
        }
    }

    /// Whether a class needing `required` seats fits.
    #[inline]
    pub fn fits(&self, required: u32) -> bool {
        required <= self.capacity
    }
}

/// A class to be scheduled: subject plus required seating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    /// Subject taught.
    pub subject: String,
    /// Seats required (0 = no requirement).
    pub capacity: u32,
}

impl Class {
    /// Creates a class with no seating requirement.
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            capacity: 0,
        }
    }

    /// Sets the required seating.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_fits() {
        let r = Room::new("R101", 30);
        assert!(r.fits(0));
        assert!(r.fits(30));
        assert!(!r.fits(31));
    }

    #[test]
    fn test_class_builder() {
        let c = Class::new("Mathematics").with_capacity(25);
        assert_eq!(c.subject, "Mathematics");
        assert_eq!(c.capacity, 25);
        assert_eq!(Class::new("Art").capacity, 0);
    }
}
