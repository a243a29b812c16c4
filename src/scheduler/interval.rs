//! Per-location interval booking.
//!
//! # Algorithm
//!
//! Each location keeps an insertion-ordered list of disjoint half-open
//! intervals. Availability is a linear overlap scan; booking checks
//! availability, then appends. Alternative search walks the location list
//! in its fixed order and returns the first free one.
//!
//! # Complexity
//! `is_available`, `book`, `cancel`: O(k) for k bookings at the location.
//! `find_alternative`: O(L * k) over L locations.

use std::collections::HashMap;

use crate::models::{Event, Interval};

use super::{LocationSchedule, ScheduleSlot};

/// Tracks booked intervals for a fixed, ordered set of locations.
///
/// # Example
///
/// ```
/// use campus_schedule::scheduler::IntervalScheduler;
///
/// let mut rooms = IntervalScheduler::new(["Library", "Lab"]);
/// assert!(rooms.book("Library", 9, 10));
/// assert!(!rooms.is_available("Library", 9, 10));
/// assert!(rooms.is_available("Library", 10, 11));
/// assert_eq!(rooms.find_alternative(9, 10), Some("Lab"));
/// ```
#[derive(Debug, Clone)]
pub struct IntervalScheduler {
    locations: Vec<String>,
    index: HashMap<String, usize>,
    bookings: Vec<Vec<Interval>>,
    booking_limit: Option<usize>,
}

impl IntervalScheduler {
    /// Creates a scheduler over `locations`, in scan order.
    ///
    /// Repeated names keep their first position.
    pub fn new<I, S>(locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names = Vec::new();
        let mut index = HashMap::new();
        for name in locations {
            let name = name.into();
            if !index.contains_key(&name) {
                index.insert(name.clone(), names.len());
                names.push(name);
            }
        }
        let bookings = vec![Vec::new(); names.len()];
        Self {
            locations: names,
            index,
            bookings,
            booking_limit: None,
        }
    }

    /// Caps the number of bookings each location can hold.
    ///
    /// A location at the cap is reported unavailable for any interval.
    pub fn with_booking_limit(mut self, limit: usize) -> Self {
        self.booking_limit = Some(limit);
        self
    }

    /// Per-location booking cap, if any.
    pub fn booking_limit(&self) -> Option<usize> {
        self.booking_limit
    }

    /// Location names in scan order.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Whether `location` is tracked.
    pub fn has_location(&self, location: &str) -> bool {
        self.index.contains_key(location)
    }

    /// Booked intervals at `location`, in booking order.
    ///
    /// Returns `None` for an unknown location.
    pub fn bookings(&self, location: &str) -> Option<&[Interval]> {
        self.index
            .get(location)
            .map(|&idx| self.bookings[idx].as_slice())
    }

    /// Total bookings across all locations.
    pub fn booking_count(&self) -> usize {
        self.bookings.iter().map(Vec::len).sum()
    }

    /// Whether `[start, end)` overlaps no booking at `location`.
    ///
    /// Unknown locations are never available.
    pub fn is_available(&self, location: &str, start: i64, end: i64) -> bool {
        match self.index.get(location) {
            Some(&idx) => self.is_free(idx, Interval::new(start, end)),
            None => false,
        }
    }

    /// Books `[start, end)` at `location` if it is available.
    ///
    /// Returns `false` without changes otherwise. Booking the same interval
    /// twice fails the second time.
    pub fn book(&mut self, location: &str, start: i64, end: i64) -> bool {
        let Some(&idx) = self.index.get(location) else {
            return false;
        };
        let interval = Interval::new(start, end);
        if !self.is_free(idx, interval) {
            return false;
        }
        self.bookings[idx].push(interval);
        true
    }

    /// Removes the first booking at `location` equal to `[start, end)`.
    ///
    /// Exact match only. Remaining bookings keep their relative order.
    pub fn cancel(&mut self, location: &str, start: i64, end: i64) -> bool {
        let Some(&idx) = self.index.get(location) else {
            return false;
        };
        let target = Interval::new(start, end);
        match self.bookings[idx].iter().position(|iv| *iv == target) {
            Some(pos) => {
                self.bookings[idx].remove(pos);
                true
            }
            None => false,
        }
    }

    /// First location, in scan order, where `[start, end)` is available.
    pub fn find_alternative(&self, start: i64, end: i64) -> Option<&str> {
        let interval = Interval::new(start, end);
        (0..self.locations.len())
            .find(|&idx| self.is_free(idx, interval))
            .map(|idx| self.locations[idx].as_str())
    }

    /// Display snapshot: each location's bookings joined to `events`.
    ///
    /// An event is attached to a slot when its location and interval match
    /// exactly. Several matching events are all reported.
    pub fn snapshot(&self, events: &[Event]) -> Vec<LocationSchedule> {
        self.locations
            .iter()
            .zip(&self.bookings)
            .map(|(location, intervals)| LocationSchedule {
                location: location.clone(),
                slots: intervals
                    .iter()
                    .map(|&interval| ScheduleSlot {
                        interval,
                        events: events
                            .iter()
                            .filter(|e| e.occupies(location, interval))
                            .cloned()
                            .collect(),
                    })
                    .collect(),
            })
            .collect()
    }

    fn is_free(&self, idx: usize, interval: Interval) -> bool {
        let booked = &self.bookings[idx];
        if self.booking_limit.is_some_and(|limit| booked.len() >= limit) {
            return false;
        }
        booked.iter().all(|b| !b.overlaps(&interval))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use proptest::prelude::*;

    const ROOMS: [&str; 6] = ["Mainhall", "Library", "Cafeteria", "Lab", "Hostel", "Guardroom"];

    fn rooms() -> IntervalScheduler {
        IntervalScheduler::new(ROOMS)
    }

    #[test]
    fn test_book_then_unavailable() {
        let mut s = rooms();
        assert!(s.is_available("Library", 9, 10));
        assert!(s.book("Library", 9, 10));
        assert!(!s.is_available("Library", 9, 10));
        assert!(s.is_available("Library", 10, 11));
        assert!(s.is_available("Library", 8, 9));
        assert!(!s.is_available("Library", 8, 10));
    }

    #[test]
    fn test_double_booking_fails() {
        let mut s = rooms();
        assert!(s.book("Lab", 1, 5));
        assert!(!s.book("Lab", 1, 5));
        assert!(!s.book("Lab", 4, 6));
        assert_eq!(s.bookings("Lab").unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_location() {
        let mut s = rooms();
        assert!(!s.is_available("Gym", 1, 2));
        assert!(!s.book("Gym", 1, 2));
        assert!(!s.cancel("Gym", 1, 2));
        assert!(s.bookings("Gym").is_none());
        assert!(!s.has_location("Gym"));
    }

    #[test]
    fn test_cancel_exact_match_only() {
        let mut s = rooms();
        s.book("Hostel", 1, 3);
        s.book("Hostel", 5, 7);
        s.book("Hostel", 9, 11);

        assert!(!s.cancel("Hostel", 1, 2));
        assert!(!s.cancel("Hostel", 0, 3));
        assert!(s.cancel("Hostel", 5, 7));
        assert!(!s.cancel("Hostel", 5, 7));
        assert_eq!(
            s.bookings("Hostel").unwrap(),
            &[Interval::new(1, 3), Interval::new(9, 11)]
        );
        assert!(s.is_available("Hostel", 5, 7));
    }

    #[test]
    fn test_find_alternative_scan_order() {
        let mut s = rooms();
        assert_eq!(s.find_alternative(9, 10), Some("Mainhall"));
        s.book("Mainhall", 9, 10);
        assert_eq!(s.find_alternative(9, 10), Some("Library"));
        s.book("Library", 8, 12);
        assert_eq!(s.find_alternative(9, 10), Some("Cafeteria"));
        // adjacent interval is still free at Mainhall
        assert_eq!(s.find_alternative(10, 11), Some("Mainhall"));
    }

    #[test]
    fn test_find_alternative_none_when_all_busy() {
        let mut s = rooms();
        for room in ROOMS {
            assert!(s.book(room, 0, 100));
        }
        assert_eq!(s.find_alternative(50, 60), None);
        assert_eq!(s.find_alternative(100, 101), Some("Mainhall"));
    }

    #[test]
    fn test_booking_limit() {
        let mut s = IntervalScheduler::new(["A", "B"]).with_booking_limit(2);
        assert!(s.book("A", 0, 1));
        assert!(s.book("A", 1, 2));
        assert!(!s.is_available("A", 5, 6));
        assert!(!s.book("A", 5, 6));
        assert_eq!(s.find_alternative(5, 6), Some("B"));
        assert!(s.cancel("A", 0, 1));
        assert!(s.book("A", 5, 6));
        assert_eq!(s.booking_count(), 2);
    }

    #[test]
    fn test_duplicate_location_names_collapse() {
        let s = IntervalScheduler::new(["A", "B", "A"]);
        assert_eq!(s.locations(), &["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_snapshot_joins_events() {
        let mut s = rooms();
        s.book("Library", 9, 10);
        s.book("Library", 12, 13);
        s.book("Lab", 9, 10);

        let events = vec![
            Event::new("E1", "Talk", "Library", 9, 10, Priority::High),
            Event::new("E2", "Talk", "Library", 9, 10, Priority::Optional),
            Event::new("E3", "Exam", "Lab", 9, 10, Priority::Mandatory),
        ];
        let snap = s.snapshot(&events);
        assert_eq!(snap.len(), ROOMS.len());
        assert_eq!(snap[0].location, "Mainhall");
        assert!(snap[0].slots.is_empty());

        let library = &snap[1];
        assert_eq!(library.slots.len(), 2);
        assert_eq!(library.slots[0].interval, Interval::new(9, 10));
        assert_eq!(library.slots[0].events.len(), 2);
        assert!(library.slots[1].events.is_empty());

        let lab = &snap[3];
        assert_eq!(lab.slots[0].events[0].id(), "E3");
    }

    fn interval_strategy() -> impl Strategy<Value = (i64, i64)> {
        (0i64..40, 1i64..8).prop_map(|(s, d)| (s, s + d))
    }

    proptest! {
        #[test]
        fn prop_availability_matches_brute_force(
            attempts in prop::collection::vec((0usize..3, interval_strategy()), 0..30),
            probe in (0usize..3, interval_strategy()),
        ) {
            let names = ["A", "B", "C"];
            let mut s = IntervalScheduler::new(names);
            for (room, (start, end)) in &attempts {
                s.book(names[*room], *start, *end);
            }

            // stored bookings stay pairwise disjoint
            for name in names {
                let booked = s.bookings(name).unwrap();
                for (i, a) in booked.iter().enumerate() {
                    for b in &booked[i + 1..] {
                        prop_assert!(!a.overlaps(b));
                    }
                }
            }

            let (room, (start, end)) = probe;
            let probe_iv = Interval::new(start, end);
            let expected = s
                .bookings(names[room])
                .unwrap()
                .iter()
                .all(|b| !b.overlaps(&probe_iv));
            prop_assert_eq!(s.is_available(names[room], start, end), expected);

            match s.find_alternative(start, end) {
                Some(alt) => prop_assert!(s.is_available(alt, start, end)),
                None => {
                    for name in names {
                        prop_assert!(!s.is_available(name, start, end));
                    }
                }
            }
        }

        #[test]
        fn prop_book_cancel_round_trip(
            existing in prop::collection::vec(interval_strategy(), 0..10),
            (start, end) in interval_strategy(),
        ) {
            let mut s = IntervalScheduler::new(["A"]);
            for (a, b) in &existing {
                s.book("A", *a, *b);
            }
            if s.book("A", start, end) {
                prop_assert!(!s.is_available("A", start, end));
                prop_assert!(s.cancel("A", start, end));
                prop_assert!(s.is_available("A", start, end));
            }
        }
    }
}
