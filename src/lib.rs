//! Campus event scheduling core.
//!
//! Schedules prioritized events onto a fixed set of campus locations and
//! answers walking-route queries between them. Presentation (menus,
//! parsing, printing) is left to the caller.
//!
//! # Modules
//!
//! - **`models`**: Value types — `Event`, `Priority`, `Interval`, `EventRequest`
//! - **`queue`**: `EventQueue`, a binary max-heap (priority, then latest start)
//! - **`scheduler`**: `IntervalScheduler`, per-location non-overlapping bookings
//! - **`graph`**: `LocationGraph`, Dijkstra shortest routes
//! - **`campus`**: `Campus`, keeps bookings and queued events in step
//! - **`config`** / **`validation`**: Campus setup and structural checks
//!
//! # Time Model
//!
//! All times are abstract integer ticks on one shared timeline.
//!
//! # Concurrency
//!
//! Single-threaded and synchronous. Nothing here is internally
//! synchronized; callers sharing a `Campus` must serialize mutations.

pub mod campus;
pub mod config;
pub mod error;
pub mod graph;
pub mod models;
pub mod queue;
pub mod scheduler;
pub mod validation;

pub use campus::Campus;
pub use config::CampusConfig;
pub use error::{CampusError, Result};
