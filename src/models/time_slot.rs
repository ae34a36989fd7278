//! Weekly time slot model.
//!
//! A time slot is a weekday plus a time-of-day interval. Slots are
//! coarse-grained: the timetable repeats every week, so there is no
//! calendar date, only the day of the week.
//!
//! # Time Model
//! Times of day are minutes since midnight. Intervals are half-open
//! `[start, end)`, so back-to-back slots (10:30-11:30, 11:30-12:30)
//! do not overlap.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minutes in one day; upper bound for a time of day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Monday through Friday.
    pub const WORKDAYS: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}

/// A time-of-day interval [start, end).
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Interval start (minutes since midnight, inclusive).
    pub start_min: u32,
    /// Interval end (minutes since midnight, exclusive).
    pub end_min: u32,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start_min: u32, end_min: u32) -> Self {
        Self { start_min, end_min }
    }

    /// Creates a window from `(hour, minute)` pairs.
    pub fn from_hm(start: (u32, u32), end: (u32, u32)) -> Self {
        Self::new(start.0 * 60 + start.1, end.0 * 60 + end.1)
    }

    /// Duration of this window (minutes). Zero for empty or inverted windows.
    #[inline]
    pub fn duration_min(&self) -> u32 {
        self.end_min.saturating_sub(self.start_min)
    }

    /// Whether a time of day falls within this window.
    #[inline]
    pub fn contains(&self, minute: u32) -> bool {
        minute >= self.start_min && minute < self.end_min
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_min < other.end_min && other.start_min < self.end_min
    }

    /// Whether the window is non-empty and lies within one day.
    pub fn is_well_formed(&self) -> bool {
        self.start_min < self.end_min && self.end_min <= MINUTES_PER_DAY
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02} - {:02}:{:02}",
            self.start_min / 60,
            self.start_min % 60,
            self.end_min / 60,
            self.end_min % 60
        )
    }
}

/// A weekly teaching slot: a weekday and a time-of-day window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Day of the week.
    pub day: Weekday,
    /// Time of day.
    pub window: TimeWindow,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(day: Weekday, window: TimeWindow) -> Self {
        Self { day, window }
    }

    /// Creates a slot from `(hour, minute)` start and end pairs.
    pub fn at(day: Weekday, start: (u32, u32), end: (u32, u32)) -> Self {
        Self::new(day, TimeWindow::from_hm(start, end))
    }

    /// Two slots conflict iff they fall on the same weekday and their
    /// windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day && self.window.overlaps(&other.window)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_from_hm() {
        let w = TimeWindow::from_hm((8, 0), (10, 30));
        assert_eq!(w.start_min, 480);
        assert_eq!(w.end_min, 630);
        assert_eq!(w.duration_min(), 150);
        assert!(w.contains(480));
        assert!(!w.contains(630));
    }

    #[test]
    fn test_adjacent_windows_do_not_overlap() {
        let a = TimeWindow::from_hm((10, 30), (11, 30));
        let b = TimeWindow::from_hm((11, 30), (12, 30));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_partial_overlap() {
        let a = TimeWindow::from_hm((8, 0), (10, 0));
        let b = TimeWindow::from_hm((9, 0), (11, 0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_slot_overlap_requires_same_day() {
        let mon = TimeSlot::at(Weekday::Monday, (8, 0), (10, 0));
        let tue = TimeSlot::at(Weekday::Tuesday, (8, 0), (10, 0));
        let mon_late = TimeSlot::at(Weekday::Monday, (9, 30), (10, 30));

        assert!(mon.overlaps(&mon));
        assert!(!mon.overlaps(&tue));
        assert!(mon.overlaps(&mon_late));
    }

    #[test]
    fn test_well_formed() {
        assert!(TimeWindow::from_hm((8, 0), (9, 0)).is_well_formed());
        assert!(!TimeWindow::from_hm((9, 0), (9, 0)).is_well_formed());
        assert!(!TimeWindow::from_hm((10, 0), (9, 0)).is_well_formed());
        assert!(!TimeWindow::new(1400, 1500).is_well_formed());
    }

    #[test]
    fn test_display() {
        let slot = TimeSlot::at(Weekday::Friday, (14, 30), (15, 30));
        assert_eq!(slot.to_string(), "Friday 14:30 - 15:30");
    }
}
