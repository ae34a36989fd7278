//! Timetabling domain models.
//!
//! Provides the input catalog (teachers, rooms, weekly slots, classes)
//! and the resolved solution types handed back to callers.
//!
//! # Domain Mappings
//!
//! | u-timetable | School | University | Training Center |
//! |-------------|--------|------------|-----------------|
//! | Teacher | Teacher | Lecturer | Instructor |
//! | Room | Classroom | Lecture Hall | Lab |
//! | TimeSlot | Period | Lecture Block | Session |
//! | Class | Lesson | Course Section | Workshop |

mod catalog;
mod room;
mod teacher;
mod time_slot;
mod timetable;

pub use catalog::Catalog;
pub use room::{Class, Room};
pub use teacher::Teacher;
pub use time_slot::{TimeSlot, TimeWindow, Weekday, MINUTES_PER_DAY};
pub use timetable::{Timetable, TimetableEntry, Violation, ViolationType};
