//! Campus configuration.
//!
//! Defines the location set, the weighted walkways between locations, and
//! optional capacity limits. Loaded from JSON at runtime, or taken from the
//! built-in reference campus.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validation::{validate_config, ValidationResult};

/// Reference location set, in scan order.
pub const REFERENCE_LOCATIONS: [&str; 6] = [
    "Mainhall",
    "Library",
    "Cafeteria",
    "Lab",
    "Hostel",
    "Guardroom",
];

/// Reference walkways `(from, to, weight)`.
pub const REFERENCE_EDGES: [(&str, &str, u64); 7] = [
    ("Mainhall", "Library", 2),
    ("Mainhall", "Cafeteria", 4),
    ("Library", "Lab", 3),
    ("Lab", "Hostel", 6),
    ("Hostel", "Guardroom", 2),
    ("Cafeteria", "Guardroom", 5),
    ("Library", "Cafeteria", 3),
];

/// Top-level campus configuration.
///
/// Location order matters: it is the order in which alternative locations
/// are tried, and the tie-break order for route finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampusConfig {
    /// Location names, in scan order.
    pub locations: Vec<String>,

    /// Undirected weighted edges.
    #[serde(default)]
    pub edges: Vec<EdgeConfig>,

    /// Maximum number of queued events. `None` = unbounded.
    #[serde(default)]
    pub queue_capacity: Option<usize>,

    /// Maximum bookings held per location. `None` = unbounded.
    #[serde(default)]
    pub bookings_per_location: Option<usize>,
}

/// An undirected edge between two locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeConfig {
    /// One endpoint.
    pub from: String,
    /// The other endpoint.
    pub to: String,
    /// Walking distance.
    pub weight: u64,
}

impl EdgeConfig {
    /// Creates an edge.
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: u64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

impl CampusConfig {
    /// Creates a configuration with the given locations and no edges.
    pub fn new<I, S>(locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            locations: locations.into_iter().map(Into::into).collect(),
            edges: Vec::new(),
            queue_capacity: None,
            bookings_per_location: None,
        }
    }

    /// Adds an undirected edge.
    pub fn with_edge(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        weight: u64,
    ) -> Self {
        self.edges.push(EdgeConfig::new(from, to, weight));
        self
    }

    /// Bounds the event queue.
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = Some(capacity);
        self
    }

    /// Bounds the number of bookings per location.
    pub fn with_bookings_per_location(mut self, limit: usize) -> Self {
        self.bookings_per_location = Some(limit);
        self
    }

    /// Parses a configuration from JSON.
    ///
    /// Only syntax is checked here; call [`validate`](Self::validate) for
    /// structural checks.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Runs structural validation.
    pub fn validate(&self) -> ValidationResult {
        validate_config(self)
    }
}

impl Default for CampusConfig {
    /// The six-location reference campus with its seven walkways.
    fn default() -> Self {
        REFERENCE_EDGES.iter().fold(
            Self::new(REFERENCE_LOCATIONS),
            |config, &(from, to, weight)| config.with_edge(from, to, weight),
        )
    }
}
