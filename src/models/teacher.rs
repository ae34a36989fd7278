//! Teacher model.
//!
//! Teachers are the human resource of a timetable. Each teacher is
//! qualified for a set of subjects and available on a set of weekdays.
//! Availability is day-coarse: a teacher either works on a weekday or
//! does not; there is no hour-level calendar.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Weekday;

/// A teacher who can be assigned to classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Subjects this teacher is qualified to teach.
    pub subjects: BTreeSet<String>,
    /// Weekdays this teacher is available.
    pub available: BTreeSet<Weekday>,
}

impl Teacher {
    /// Creates a teacher with no subjects and no available days.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            subjects: BTreeSet::new(),
            available: BTreeSet::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a qualified subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subjects.insert(subject.into());
        self
    }

    /// Adds several qualified subjects.
    pub fn with_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subjects.extend(subjects.into_iter().map(Into::into));
        self
    }

    /// Marks the teacher available on one weekday.
    pub fn available_on(mut self, day: Weekday) -> Self {
        self.available.insert(day);
        self
    }

    /// Marks the teacher available on several weekdays.
    pub fn available_on_days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.available.extend(days);
        self
    }

    /// Whether this teacher may teach `subject`.
    pub fn is_qualified_for(&self, subject: &str) -> bool {
        self.subjects.contains(subject)
    }

    /// Whether this teacher works on `day`.
    pub fn is_available_on(&self, day: Weekday) -> bool {
        self.available.contains(&day)
    }
}
