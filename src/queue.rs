//! Priority-ordered event container.
//!
//! # Ordering
//!
//! Events are ordered by priority (descending). Among equal priorities the
//! event with the **later** start time surfaces first. This tie-break is
//! part of the observable contract.
//!
//! # Algorithm
//!
//! Array-backed binary max-heap. Insert appends and sifts up; extraction
//! moves the last element to the root and sifts down.
//!
//! # Complexity
//! `insert` and `extract_max` are O(log n). `rebuild_excluding` is O(n log n):
//! it snapshots, filters, and reinserts.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 6 (Heapsort)

use std::cmp::Ordering;

use crate::models::Event;

/// Compares two events under queue order.
///
/// Returns `Greater` when `a` should surface before `b`.
pub fn queue_order(a: &Event, b: &Event) -> Ordering {
    a.priority()
        .cmp(&b.priority())
        .then_with(|| a.start_time().cmp(&b.start_time()))
}

/// Binary max-heap of events.
///
/// Unbounded by default. A bounded queue silently drops insertions once
/// full (see [`EventQueue::insert`]).
///
/// # Example
///
/// ```
/// use campus_schedule::models::{Event, Priority};
/// use campus_schedule::queue::EventQueue;
///
/// let mut queue = EventQueue::new();
/// queue.insert(Event::new("A", "Talk", "Lab", 5, 6, Priority::Optional));
/// queue.insert(Event::new("B", "Exam", "Lab", 1, 2, Priority::Mandatory));
///
/// assert_eq!(queue.extract_max().unwrap().id(), "B");
/// assert_eq!(queue.extract_max().unwrap().id(), "A");
/// assert!(queue.extract_max().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    heap: Vec<Event>,
    capacity: Option<usize>,
}

impl EventQueue {
    /// Creates an empty, unbounded queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue holding at most `capacity` events.
    ///
    /// Storage grows on demand; the bound is only checked on insert.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            heap: Vec::new(),
            capacity: Some(capacity),
        }
    }

    /// Maximum number of events, if bounded.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Whether a bounded queue has reached its capacity.
    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|cap| self.heap.len() >= cap)
    }

    /// Number of events held.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue holds no events.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Inserts an event.
    ///
    /// Returns `false` and drops the event if the queue is full.
    pub fn insert(&mut self, event: Event) -> bool {
        if self.is_full() {
            return false;
        }
        self.heap.push(event);
        self.sift_up(self.heap.len() - 1);
        true
    }

    /// Returns the highest-ordered event without removing it.
    pub fn peek(&self) -> Option<&Event> {
        self.heap.first()
    }

    /// Removes and returns the highest-ordered event.
    ///
    /// Returns `None` on an empty queue.
    pub fn extract_max(&mut self) -> Option<Event> {
        if self.heap.is_empty() {
            return None;
        }
        let max = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(max)
    }

    /// Snapshot of all events in heap-storage order (not sorted).
    pub fn peek_all(&self) -> Vec<Event> {
        self.heap.clone()
    }

    /// Iterates events in heap-storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.heap.iter()
    }

    /// Whether any event carries `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.heap.iter().any(|e| e.id() == id)
    }

    /// Finds the last event with `id` in heap-storage order.
    pub fn find_last(&self, id: &str) -> Option<&Event> {
        self.heap.iter().rev().find(|e| e.id() == id)
    }

    /// Builds a new queue with every event whose id differs from `id`.
    ///
    /// All events sharing `id` are dropped, not just one. The capacity
    /// bound carries over.
    pub fn rebuild_excluding(&self, id: &str) -> EventQueue {
        let mut rebuilt = EventQueue {
            heap: Vec::with_capacity(self.heap.len()),
            capacity: self.capacity,
        };
        for event in self.heap.iter().filter(|e| e.id() != id) {
            rebuilt.insert(event.clone());
        }
        rebuilt
    }

    /// Drains the queue in extraction order.
    pub fn into_sorted_vec(mut self) -> Vec<Event> {
        let mut sorted = Vec::with_capacity(self.heap.len());
        while let Some(event) = self.extract_max() {
            sorted.push(event);
        }
        sorted
    }

    #[inline]
    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = Self::parent(i);
            if queue_order(&self.heap[i], &self.heap[p]) != Ordering::Greater {
                break;
            }
            self.heap.swap(i, p);
            i = p;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut largest = i;
            if left < n && queue_order(&self.heap[left], &self.heap[largest]) == Ordering::Greater
            {
                largest = left;
            }
            if right < n
                && queue_order(&self.heap[right], &self.heap[largest]) == Ordering::Greater
            {
                largest = right;
            }
            if largest == i {
                break;
            }
            self.heap.swap(i, largest);
            i = largest;
        }
    }
}

impl Extend<Event> for EventQueue {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, iter: I) {
        for event in iter {
            self.insert(event);
        }
    }
}

impl FromIterator<Event> for EventQueue {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        let mut queue = EventQueue::new();
        queue.extend(iter);
        queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use proptest::prelude::*;

    fn event(id: &str, priority: Priority, start: i64) -> Event {
        Event::new(id, "Test", "Lab", start, start + 1, priority)
    }

    fn multiset(queue: &EventQueue) -> Vec<Event> {
        let mut events = queue.peek_all();
        events.sort_by(|a, b| {
            (a.id(), a.start_time(), a.priority()).cmp(&(b.id(), b.start_time(), b.priority()))
        });
        events
    }

    #[test]
    fn test_extract_order_by_priority() {
        let mut q = EventQueue::new();
        q.insert(event("opt", Priority::Optional, 5));
        q.insert(event("man", Priority::Mandatory, 1));
        q.insert(event("high", Priority::High, 3));

        let order: Vec<_> = std::iter::from_fn(|| q.extract_max())
            .map(|e| e.id().to_string())
            .collect();
        assert_eq!(order, vec!["man", "high", "opt"]);
    }

    #[test]
    fn test_tie_break_later_start_first() {
        let mut q = EventQueue::new();
        q.insert(event("early", Priority::High, 1));
        q.insert(event("late", Priority::High, 9));
        q.insert(event("mid", Priority::High, 4));

        assert_eq!(q.extract_max().unwrap().id(), "late");
        assert_eq!(q.extract_max().unwrap().id(), "mid");
        assert_eq!(q.extract_max().unwrap().id(), "early");
    }

    #[test]
    fn test_empty_queue() {
        let mut q = EventQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert!(q.peek().is_none());
        assert!(q.extract_max().is_none());
        assert!(q.peek_all().is_empty());
    }

    #[test]
    fn test_peek_matches_extract() {
        let mut q: EventQueue = vec![
            event("a", Priority::High, 2),
            event("b", Priority::Mandatory, 0),
        ]
        .into_iter()
        .collect();
        let top = q.peek().cloned();
        assert_eq!(q.extract_max(), top);
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn test_peek_all_is_heap_order_snapshot() {
        let mut q = EventQueue::new();
        q.insert(event("a", Priority::Optional, 1));
        q.insert(event("b", Priority::Mandatory, 1));
        // sift-up swapped b above a
        let ids: Vec<_> = q.peek_all().iter().map(|e| e.id().to_string()).collect();
        assert_eq!(ids, vec!["b", "a"]);

        let snapshot = q.peek_all();
        q.insert(event("c", Priority::High, 1));
        assert_eq!(snapshot.len(), 2);
        assert_eq!(q.len(), 3);
    }

    #[test]
    fn test_bounded_drops_when_full() {
        let mut q = EventQueue::bounded(2);
        assert!(q.insert(event("a", Priority::Optional, 1)));
        assert!(q.insert(event("b", Priority::Optional, 2)));
        assert!(q.is_full());
        assert!(!q.insert(event("c", Priority::Mandatory, 3)));
        assert_eq!(q.len(), 2);
        assert!(!q.contains("c"));
        assert_eq!(q.capacity(), Some(2));
    }

    #[test]
    fn test_huge_bound_allocates_nothing_up_front() {
        let mut q = EventQueue::bounded(usize::MAX / 4);
        assert!(!q.is_full());
        assert!(q.insert(event("a", Priority::High, 1)));
        assert_eq!(q.len(), 1);
        let rebuilt = q.rebuild_excluding("a");
        assert_eq!(rebuilt.capacity(), Some(usize::MAX / 4));
    }

    #[test]
    fn test_rebuild_excluding_removes_all_duplicates() {
        let q: EventQueue = vec![
            event("dup", Priority::High, 1),
            event("keep", Priority::Optional, 2),
            event("dup", Priority::Mandatory, 3),
        ]
        .into_iter()
        .collect();

        let rebuilt = q.rebuild_excluding("dup");
        assert_eq!(rebuilt.len(), 1);
        assert!(!rebuilt.contains("dup"));
        assert!(rebuilt.contains("keep"));
        // source queue untouched
        assert_eq!(q.len(), 3);
    }

    #[test]
    fn test_rebuild_excluding_missing_id_is_identity() {
        let q: EventQueue = vec![
            event("a", Priority::High, 1),
            event("b", Priority::Optional, 2),
            event("c", Priority::Mandatory, 3),
        ]
        .into_iter()
        .collect();

        let rebuilt = q.rebuild_excluding("nope");
        assert!(!q.contains("nope"));
        assert_eq!(multiset(&rebuilt), multiset(&q));
    }

    #[test]
    fn test_rebuild_keeps_bound() {
        let mut q = EventQueue::bounded(3);
        q.insert(event("a", Priority::High, 1));
        let rebuilt = q.rebuild_excluding("a");
        assert_eq!(rebuilt.capacity(), Some(3));
        assert!(rebuilt.is_empty());
    }

    #[test]
    fn test_find_last_uses_scan_order() {
        let q: EventQueue = vec![
            event("dup", Priority::Mandatory, 1),
            event("dup", Priority::Optional, 2),
        ]
        .into_iter()
        .collect();
        // heap order: Mandatory at root, Optional after it
        let found = q.find_last("dup").unwrap();
        assert_eq!(found.priority(), Priority::Optional);
        assert!(q.find_last("other").is_none());
    }

    #[test]
    fn test_refill_after_drain_behaves_like_fresh() {
        let events = vec![
            event("x", Priority::High, 4),
            event("y", Priority::Optional, 8),
            event("z", Priority::Mandatory, 2),
        ];
        let mut reused: EventQueue = events.clone().into_iter().collect();
        while reused.extract_max().is_some() {}
        reused.extend(events.clone());

        let fresh: EventQueue = events.into_iter().collect();
        assert_eq!(reused.into_sorted_vec(), fresh.into_sorted_vec());
    }

    fn priority_strategy() -> impl Strategy<Value = Priority> {
        prop_oneof![
            Just(Priority::Optional),
            Just(Priority::High),
            Just(Priority::Mandatory),
        ]
    }

    proptest! {
        #[test]
        fn prop_extraction_is_non_increasing(
            items in prop::collection::vec((priority_strategy(), -50i64..50), 0..64)
        ) {
            let queue: EventQueue = items
                .iter()
                .enumerate()
                .map(|(i, (p, s))| event(&i.to_string(), *p, *s))
                .collect();
            let sorted = queue.into_sorted_vec();
            prop_assert_eq!(sorted.len(), items.len());
            for pair in sorted.windows(2) {
                prop_assert_ne!(queue_order(&pair[0], &pair[1]), Ordering::Less);
            }
        }

        #[test]
        fn prop_heap_root_is_maximum(
            items in prop::collection::vec((priority_strategy(), -50i64..50), 1..64)
        ) {
            let queue: EventQueue = items
                .iter()
                .enumerate()
                .map(|(i, (p, s))| event(&i.to_string(), *p, *s))
                .collect();
            let root = queue.peek().unwrap();
            for e in queue.iter() {
                prop_assert_ne!(queue_order(root, e), Ordering::Less);
            }
        }
    }
}
