//! Error types for construction and configuration.

use core::fmt;

/// Errors that can occur while building or reconfiguring simulation objects.
///
/// Per-tick simulation never fails: numeric degeneracies are clamped inside
/// the update loops instead of being reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Weight must be positive and finite.
    InvalidWeight,
    /// Circle path radius must be positive and finite.
    InvalidRadius,
    /// A circle path needs at least 2 waypoints.
    InsufficientWaypoints { got: usize },
    /// Point or waypoint index is out of bounds.
    PointOutOfBounds { index: usize, count: usize },
    /// A bungee must have at least 1 segment.
    InsufficientSegments,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidWeight => write!(f, "weight must be positive and finite"),
            SimError::InvalidRadius => write!(f, "radius must be positive and finite"),
            SimError::InsufficientWaypoints { got } => {
                write!(f, "circle path needs at least 2 waypoints, got {}", got)
            }
            SimError::PointOutOfBounds { index, count } => {
                write!(f, "index {} out of bounds (count: {})", index, count)
            }
            SimError::InsufficientSegments => write!(f, "bungee needs at least 1 segment"),
        }
    }
}
