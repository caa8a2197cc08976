//! Error types for Trafficview.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Trafficview operations.
pub type Result<T> = std::result::Result<T, TrafficViewError>;

/// Errors that can occur in Trafficview.
#[derive(Debug, Error)]
pub enum TrafficViewError {
    /// A curve with this name is already registered in the plot.
    #[error("Curve already exists: {name}")]
    DuplicateCurve {
        /// Rejected curve name.
        name: String,
    },

    /// No curve with this name is registered in the plot.
    #[error("Curve not found: {name}")]
    UnknownCurve {
        /// Requested curve name.
        name: String,
    },

    /// A curve handle was issued by a different plot.
    #[error("Curve handle #{index} does not belong to this plot")]
    ForeignCurveId {
        /// Registration index carried by the handle.
        index: usize,
    },

    /// Rejected simulation or command line settings.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl TrafficViewError {
    /// Create a DuplicateCurve error.
    pub fn duplicate_curve(name: impl Into<String>) -> Self {
        Self::DuplicateCurve { name: name.into() }
    }

    /// Create an UnknownCurve error.
    pub fn unknown_curve(name: impl Into<String>) -> Self {
        Self::UnknownCurve { name: name.into() }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }
}
