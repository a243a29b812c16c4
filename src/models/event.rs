//! Event model.
//!
//! An event is an immutable reservation of one location over one interval,
//! tagged with a priority level. Events are created when their interval is
//! booked, replaced on update, and dropped on removal.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Interval;

/// Ordinal importance of an event.
///
/// Ordered `Optional < High < Mandatory`; the discriminant is the numeric
/// level used by callers (1, 2, 3).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Priority {
    /// Level 1.
    #[default]
    Optional = 1,
    /// Level 2.
    High = 2,
    /// Level 3.
    Mandatory = 3,
}

impl Priority {
    /// Numeric level (1 = Optional, 2 = High, 3 = Mandatory).
    #[inline]
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Parses a numeric level. Returns `None` outside `1..=3`.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Optional),
            2 => Some(Self::High),
            3 => Some(Self::Mandatory),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Optional => "Optional",
            Self::High => "High",
            Self::Mandatory => "Mandatory",
        };
        f.write_str(name)
    }
}

/// A scheduled event.
///
/// Fields are read-only after construction. The id is caller-supplied and
/// is not checked for uniqueness here; the coordinating [`Campus`](crate::Campus)
/// enforces that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    id: String,
    event_type: String,
    location: String,
    start_time: i64,
    end_time: i64,
    priority: Priority,
}

impl Event {
    /// Creates a new event.
    pub fn new(
        id: impl Into<String>,
        event_type: impl Into<String>,
        location: impl Into<String>,
        start_time: i64,
        end_time: i64,
        priority: Priority,
    ) -> Self {
        Self {
            id: id.into(),
            event_type: event_type.into(),
            location: location.into(),
            start_time,
            end_time,
            priority,
        }
    }

    /// Event identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Free-text event label (e.g. "Lecture", "Exam").
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Location name where the event is held.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Start tick (inclusive).
    #[inline]
    pub fn start_time(&self) -> i64 {
        self.start_time
    }

    /// End tick (exclusive).
    #[inline]
    pub fn end_time(&self) -> i64 {
        self.end_time
    }

    /// Priority level.
    #[inline]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// The booked interval `[start_time, end_time)`.
    #[inline]
    pub fn interval(&self) -> Interval {
        Interval::new(self.start_time, self.end_time)
    }

    /// Whether this event occupies exactly `interval` at `location`.
    pub fn occupies(&self, location: &str, interval: Interval) -> bool {
        self.location == location && self.interval() == interval
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event[{}: {} at {}, {}-{}, Priority: {}]",
            self.id,
            self.event_type,
            self.location,
            self.start_time,
            self.end_time,
            self.priority.level()
        )
    }
}

/// Caller-supplied fields for adding or updating an event.
///
/// The location is a request: the coordinator may substitute an
/// alternative when it is busy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRequest {
    /// Event identifier.
    pub id: String,
    /// Free-text event label.
    #[serde(default)]
    pub event_type: String,
    /// Requested location.
    pub location: String,
    /// Start tick (inclusive).
    pub start_time: i64,
    /// End tick (exclusive).
    pub end_time: i64,
    /// Priority level.
    #[serde(default)]
    pub priority: Priority,
}

impl EventRequest {
    /// Creates a request with an empty type and `Optional` priority.
    pub fn new(
        id: impl Into<String>,
        location: impl Into<String>,
        start_time: i64,
        end_time: i64,
    ) -> Self {
        Self {
            id: id.into(),
            event_type: String::new(),
            location: location.into(),
            start_time,
            end_time,
            priority: Priority::default(),
        }
    }

    /// Sets the event type label.
    pub fn with_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Requested interval.
    #[inline]
    pub fn interval(&self) -> Interval {
        Interval::new(self.start_time, self.end_time)
    }

    /// Builds the event as it will be stored, held at `location`.
    pub fn to_event(&self, location: impl Into<String>) -> Event {
        Event::new(
            self.id.clone(),
            self.event_type.clone(),
            location,
            self.start_time,
            self.end_time,
            self.priority,
        )
    }
}
