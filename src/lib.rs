//! Class timetabling for the U-Engine ecosystem.
//!
//! Assigns every class to a teacher, a room, and a weekly time slot,
//! searching for an assignment with no conflicts using a genetic
//! algorithm.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Teacher`, `Room`, `TimeSlot`, `Class`,
//!   `Catalog`, and the resolved `Timetable`
//! - **`ga`**: Chromosome encoding, penalty fitness, genetic operators,
//!   and the generational driver
//! - **`validation`**: Catalog integrity checks (empty collections,
//!   duplicate IDs, malformed slots)
//!
//! # Constraints
//!
//! A timetable is valid when no teacher or room is booked twice in
//! overlapping slots, every teacher is qualified for and available on
//! their classes, and every room seats its class. Search is heuristic:
//! a run may end with a best timetable that still has violations.
//!
//! # References
//!
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization, and Machine Learning"

pub mod error;
pub mod ga;
pub mod models;
pub mod validation;

pub use error::TimetableError;
