//! Error type for campus operations.
//!
//! Expected conditions (busy rooms, unknown ids, unreachable places) are
//! reported as values; nothing here panics.

use crate::validation::ValidationError;

/// Result alias for campus operations.
pub type Result<T> = std::result::Result<T, CampusError>;

/// Failure of a campus operation.
#[derive(Debug, thiserror::Error)]
pub enum CampusError {
    /// No event carries the given id.
    #[error("event not found: {0}")]
    EventNotFound(String),

    /// The location name is not part of the campus.
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    /// Both locations exist but no path connects them.
    #[error("no route found from {from} to {to}")]
    NoRoute { from: String, to: String },

    /// The interval is busy at the requested location and no alternative is free.
    #[error("no available location for event {event_id} during [{start}-{end})")]
    Unavailable {
        event_id: String,
        start: i64,
        end: i64,
    },

    /// A bounded event queue is full.
    #[error("event queue is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// An event with this id is already scheduled.
    #[error("duplicate event id: {0}")]
    DuplicateEvent(String),

    /// Configuration or request failed structural checks.
    #[error("validation failed: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl CampusError {
    /// Whether this is one of the not-found conditions
    /// (unknown event, unknown location, unreachable destination).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::EventNotFound(_) | Self::UnknownLocation(_) | Self::NoRoute { .. }
        )
    }
}

impl From<Vec<ValidationError>> for CampusError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
