//! Error types for controller configuration

/// Rejected controller configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A speed, sensitivity or damping value is NaN, infinite or negative
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidValue { field: &'static str, value: f32 },

    /// Air control is a fraction of ground authority
    #[error("air_control must be within [0, 1] (got {0})")]
    AirControlOutOfRange(f32),

    /// The threshold is compared against a dot product of unit vectors
    #[error("ground_threshold must be within [-1, 1] (got {0})")]
    GroundThresholdOutOfRange(f32),

    /// Camera offset has a NaN or infinite component
    #[error("camera_offset must be finite (got {0})")]
    NonFiniteCameraOffset(glam::Vec3),
}
