//! Location booking and schedule snapshots.
//!
//! `IntervalScheduler` is the single source of truth for which location is
//! occupied when. It knows nothing about events; the snapshot types join
//! bookings back to events for display.
//!
//! # Capacity
//!
//! Bookings per location are unbounded unless a booking limit is set, in
//! which case a full location is treated as unavailable.

mod interval;

use serde::{Deserialize, Serialize};

use crate::models::{Event, Interval};

pub use interval::IntervalScheduler;

/// Bookings at one location, in booking order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSchedule {
    /// Location name.
    pub location: String,
    /// Booked slots.
    pub slots: Vec<ScheduleSlot>,
}

/// One booked interval and the events that match it exactly.
///
/// `events` is empty when no event matches, and may hold more than one
/// when several events share the same location and interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    /// Booked interval.
    pub interval: Interval,
    /// Events held in this interval.
    pub events: Vec<Event>,
}

impl LocationSchedule {
    /// Whether nothing is booked here.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Total booked ticks at this location, saturating at `i64::MAX`.
    pub fn busy_time(&self) -> i64 {
        self.slots
            .iter()
            .fold(0i64, |acc, s| acc.saturating_add(s.interval.duration()))
    }
}
