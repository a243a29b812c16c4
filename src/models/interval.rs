//! Booked time interval model.
//!
//! # Time Model
//! All times are abstract integer ticks on a single shared timeline.
//! There is no wall-clock interpretation; the consumer decides what a tick means.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A time interval [start, end).
///
/// Half-open interval: includes start, excludes end. Adjacent intervals
/// such as `[9, 10)` and `[10, 11)` do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    /// Interval start (tick, inclusive).
    pub start: i64,
    /// Interval end (tick, exclusive).
    pub end: i64,
}

impl Interval {
    /// Creates a new interval.
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Length of this interval in ticks, saturating at `i64::MAX`.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end.saturating_sub(self.start)
    }

    /// Whether `start < end`.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    /// Whether two intervals overlap.
    ///
    /// `[s1, e1)` and `[s2, e2)` overlap iff `!(e1 <= s2 || s1 >= e2)`.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.end <= other.start || self.start >= other.end)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_basics() {
        let w = Interval::new(9, 12);
        assert_eq!(w.duration(), 3);
        assert!(w.is_well_formed());
        assert!(!Interval::new(5, 5).is_well_formed());
    }

    #[test]
    fn test_duration_saturates_on_full_range() {
        let full = Interval::new(i64::MIN, i64::MAX);
        assert!(full.is_well_formed());
        assert_eq!(full.duration(), i64::MAX);
        assert_eq!(Interval::new(-5, 5).duration(), 10);
    }

    #[test]
    fn test_adjacent_intervals_do_not_overlap() {
        let a = Interval::new(9, 10);
        let b = Interval::new(10, 11);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_overlap_cases() {
        let base = Interval::new(10, 20);
        assert!(base.overlaps(&Interval::new(15, 25)));
        assert!(base.overlaps(&Interval::new(5, 11)));
        assert!(base.overlaps(&Interval::new(12, 13))); // contained
        assert!(base.overlaps(&Interval::new(0, 30))); // containing
        assert!(base.overlaps(&base));
        assert!(!base.overlaps(&Interval::new(0, 10)));
        assert!(!base.overlaps(&Interval::new(20, 30)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::new(9, 10).to_string(), "[9-10]");
    }
}
