//! Coordinating layer over the queue, the scheduler, and the graph.
//!
//! Add, update, and remove each touch two components: the
//! [`IntervalScheduler`] (occupancy) and the [`EventQueue`] (events). Each
//! operation either completes both steps or undoes the first, so every
//! queued event owns exactly one booking.
//!
//! Event ids are unique within a campus; adding a second event with a live
//! id is rejected.
//!
//! Not internally synchronized. Wrap a `Campus` in a lock to share it.

use tracing::{debug, info, warn};

use crate::config::CampusConfig;
use crate::error::{CampusError, Result};
use crate::graph::{LocationGraph, Route};
use crate::models::{Event, EventRequest};
use crate::queue::EventQueue;
use crate::scheduler::{IntervalScheduler, LocationSchedule};
use crate::validation::validate_request;

/// A campus: locations, walkways, bookings, and scheduled events.
///
/// # Example
///
/// ```
/// use campus_schedule::{Campus, CampusConfig};
/// use campus_schedule::models::{EventRequest, Priority};
///
/// let mut campus = Campus::new(CampusConfig::default()).unwrap();
/// let first = campus
///     .add(EventRequest::new("E1", "Library", 9, 10).with_priority(Priority::High))
///     .unwrap();
/// assert_eq!(first.location(), "Library");
///
/// // Library is busy, so the first free location in scan order is used.
/// let second = campus.add(EventRequest::new("E2", "Library", 9, 10)).unwrap();
/// assert_eq!(second.location(), "Mainhall");
/// ```
#[derive(Debug, Clone)]
pub struct Campus {
    graph: LocationGraph,
    scheduler: IntervalScheduler,
    queue: EventQueue,
}

impl Campus {
    /// Builds a campus from a validated configuration.
    pub fn new(config: CampusConfig) -> Result<Self> {
        config.validate()?;

        let graph = LocationGraph::from_config(&config)?;
        let mut scheduler = IntervalScheduler::new(config.locations.iter().cloned());
        if let Some(limit) = config.bookings_per_location {
            scheduler = scheduler.with_booking_limit(limit);
        }
        let queue = match config.queue_capacity {
            Some(capacity) => EventQueue::bounded(capacity),
            None => EventQueue::new(),
        };

        debug!(
            locations = graph.len(),
            edges = config.edges.len(),
            "campus initialized"
        );
        Ok(Self {
            graph,
            scheduler,
            queue,
        })
    }

    /// Schedules a new event.
    ///
    /// Books the requested location, or the first free alternative in scan
    /// order. The returned event carries the location actually assigned.
    ///
    /// # Errors
    /// - [`CampusError::Validation`] for an empty id, `start >= end`, or an unknown location.
    /// - [`CampusError::DuplicateEvent`] if the id is already scheduled.
    /// - [`CampusError::Unavailable`] if no location is free for the interval.
    /// - [`CampusError::CapacityExceeded`] if the queue is full; the booking is released.
    pub fn add(&mut self, request: EventRequest) -> Result<Event> {
        validate_request(&request, &self.graph)?;
        if self.queue.contains(&request.id) {
            warn!(event_id = %request.id, "rejected duplicate event id");
            return Err(CampusError::DuplicateEvent(request.id));
        }

        let interval = request.interval();
        let location = if self
            .scheduler
            .book(&request.location, interval.start, interval.end)
        {
            request.location.clone()
        } else {
            let alternative = self
                .scheduler
                .find_alternative(interval.start, interval.end)
                .map(str::to_string);
            match alternative {
                Some(alt) if self.scheduler.book(&alt, interval.start, interval.end) => {
                    info!(
                        event_id = %request.id,
                        requested = %request.location,
                        assigned = %alt,
                        "requested location busy, using alternative"
                    );
                    alt
                }
                _ => {
                    warn!(event_id = %request.id, %interval, "no location available");
                    return Err(self.unavailable(&request));
                }
            }
        };

        let event = request.to_event(location);
        if !self.queue.insert(event.clone()) {
            self.scheduler
                .cancel(event.location(), interval.start, interval.end);
            warn!(event_id = %event.id(), "event queue full, booking released");
            return Err(self.capacity_exceeded());
        }

        info!(event_id = %event.id(), location = %event.location(), "event scheduled");
        Ok(event)
    }

    /// Replaces a scheduled event with new fields.
    ///
    /// The new interval is booked at the requested location only; no
    /// alternative is substituted. On failure the old booking and event
    /// are left in place.
    ///
    /// # Errors
    /// - [`CampusError::Validation`] for a malformed request.
    /// - [`CampusError::EventNotFound`] if no event has `request.id`.
    /// - [`CampusError::Unavailable`] if the requested location is busy.
    pub fn update(&mut self, request: EventRequest) -> Result<Event> {
        validate_request(&request, &self.graph)?;
        let old = self
            .queue
            .find_last(&request.id)
            .cloned()
            .ok_or_else(|| CampusError::EventNotFound(request.id.clone()))?;

        let old_interval = old.interval();
        self.scheduler
            .cancel(old.location(), old_interval.start, old_interval.end);

        let interval = request.interval();
        if !self
            .scheduler
            .book(&request.location, interval.start, interval.end)
        {
            self.restore_booking(&old);
            warn!(
                event_id = %request.id,
                location = %request.location,
                %interval,
                "update rejected, location busy"
            );
            return Err(self.unavailable(&request));
        }

        let mut rebuilt = self.queue.rebuild_excluding(&request.id);
        let event = request.to_event(request.location.clone());
        if !rebuilt.insert(event.clone()) {
            self.scheduler
                .cancel(event.location(), interval.start, interval.end);
            self.restore_booking(&old);
            warn!(event_id = %event.id(), "event queue full, update rolled back");
            return Err(self.capacity_exceeded());
        }
        self.queue = rebuilt;

        info!(event_id = %event.id(), location = %event.location(), "event updated");
        Ok(event)
    }

    /// Removes the event with `id` and releases its booking.
    ///
    /// # Errors
    /// [`CampusError::EventNotFound`] if no event has `id`; nothing changes.
    pub fn remove(&mut self, id: &str) -> Result<Event> {
        let removed: Vec<Event> = self
            .queue
            .iter()
            .filter(|e| e.id() == id)
            .cloned()
            .collect();
        let Some(last) = removed.last().cloned() else {
            debug!(event_id = %id, "remove: event not found");
            return Err(CampusError::EventNotFound(id.to_string()));
        };

        for event in &removed {
            let interval = event.interval();
            self.scheduler
                .cancel(event.location(), interval.start, interval.end);
        }
        self.queue = self.queue.rebuild_excluding(id);

        info!(event_id = %id, location = %last.location(), "event removed");
        Ok(last)
    }

    /// Snapshot of all events in queue-storage order (not sorted).
    pub fn events(&self) -> Vec<Event> {
        self.queue.peek_all()
    }

    /// The event with `id`, if scheduled.
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.queue.find_last(id)
    }

    /// The highest-priority event (latest start among equals).
    pub fn peek_next(&self) -> Option<&Event> {
        self.queue.peek()
    }

    /// Per-location bookings with their events, in location scan order.
    pub fn schedule(&self) -> Vec<LocationSchedule> {
        self.scheduler.snapshot(&self.queue.peek_all())
    }

    /// Shortest walking route between two locations.
    pub fn route(&self, from: &str, to: &str) -> Result<Route> {
        self.graph.shortest_path(from, to)
    }

    /// Number of scheduled events.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no events are scheduled.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// The location graph.
    pub fn graph(&self) -> &LocationGraph {
        &self.graph
    }

    /// The booking tracker.
    pub fn scheduler(&self) -> &IntervalScheduler {
        &self.scheduler
    }

    /// The event queue.
    pub fn queue(&self) -> &EventQueue {
        &self.queue
    }

    fn restore_booking(&mut self, event: &Event) {
        let interval = event.interval();
        if !self
            .scheduler
            .book(event.location(), interval.start, interval.end)
        {
            warn!(event_id = %event.id(), "could not restore previous booking");
        }
    }

    fn unavailable(&self, request: &EventRequest) -> CampusError {
        CampusError::Unavailable {
            event_id: request.id.clone(),
            start: request.start_time,
            end: request.end_time,
        }
    }

    fn capacity_exceeded(&self) -> CampusError {
        CampusError::CapacityExceeded {
            capacity: self.queue.capacity().unwrap_or(self.queue.len()),
        }
    }
}
