//! Error types for physics setup.

use thiserror::Error;

/// Errors that can occur while building physics content.
#[derive(Error, Debug)]
pub enum PhysicsError {
    /// Convex hull could not be computed (too few or coplanar points).
    #[error("Failed to build convex hull for {name} from {points} points")]
    DegenerateHull {
        /// Shape name.
        name: String,
        /// Number of input points.
        points: usize,
    },

    /// No scene registered under this name.
    #[error("Unknown scene: {0}")]
    UnknownScene(String),
}
