//! Input validation for campus configurations and event requests.
//!
//! Checks structural integrity before anything is built or booked.
//! Detects:
//! - Empty or duplicated location names
//! - Edges that reference unknown locations, loop back on themselves,
//!   or carry an oversized weight
//! - Zero capacities
//! - Empty event ids, inverted intervals, unknown requested locations
//!
//! All checks run; every problem found is reported, not just the first.

use crate::config::CampusConfig;
use crate::graph::{LocationGraph, MAX_EDGE_WEIGHT};
use crate::models::EventRequest;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two locations share the same name.
    DuplicateLocation,
    /// A name does not match any configured location.
    UnknownLocation,
    /// An edge connects a location to itself.
    SelfLoop,
    /// An edge weight exceeds the largest accepted weight.
    WeightTooLarge,
    /// The configuration has no locations.
    EmptyLocationSet,
    /// A capacity limit is zero.
    ZeroCapacity,
    /// An event id is empty.
    EmptyId,
    /// An interval does not satisfy `start < end`.
    InvalidInterval,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a campus configuration.
///
/// Checks:
/// 1. At least one location
/// 2. No duplicate location names
/// 3. Every edge endpoint is a configured location
/// 4. No self-loop edges
/// 5. Edge weights at most [`MAX_EDGE_WEIGHT`]
/// 6. Capacity limits, when set, are non-zero
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &CampusConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.locations.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyLocationSet,
            "Campus has no locations",
        ));
    }

    let mut names = HashSet::new();
    for name in &config.locations {
        if !names.insert(name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateLocation,
                format!("Duplicate location: {name}"),
            ));
        }
    }

    for edge in &config.edges {
        for endpoint in [&edge.from, &edge.to] {
            if !names.contains(endpoint.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownLocation,
                    format!(
                        "Edge {}-{} references unknown location '{}'",
                        edge.from, edge.to, endpoint
                    ),
                ));
            }
        }
        if edge.from == edge.to {
            errors.push(ValidationError::new(
                ValidationErrorKind::SelfLoop,
                format!("Edge loops back on '{}'", edge.from),
            ));
        }
        if edge.weight > MAX_EDGE_WEIGHT {
            errors.push(ValidationError::new(
                ValidationErrorKind::WeightTooLarge,
                format!(
                    "Edge {}-{} weight {} exceeds {}",
                    edge.from, edge.to, edge.weight, MAX_EDGE_WEIGHT
                ),
            ));
        }
    }

    if config.queue_capacity == Some(0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroCapacity,
            "Queue capacity is zero",
        ));
    }
    if config.bookings_per_location == Some(0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroCapacity,
            "Bookings per location is zero",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates an add/update request against the campus graph.
///
/// Checks:
/// 1. Non-empty event id
/// 2. `start_time < end_time`
/// 3. Requested location exists
pub fn validate_request(request: &EventRequest, graph: &LocationGraph) -> ValidationResult {
    let mut errors = Vec::new();

    if request.id.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyId,
            "Event id is empty",
        ));
    }

    if !request.interval().is_well_formed() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidInterval,
            format!(
                "Event '{}' starts at {} but ends at {}",
                request.id, request.start_time, request.end_time
            ),
        ));
    }

    if graph.index_of(&request.location).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::UnknownLocation,
            format!(
                "Event '{}' requests unknown location '{}'",
                request.id, request.location
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
