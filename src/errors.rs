//! Error types for sensor subscriptions

use thiserror::Error;

/// Errors surfaced by a [`SensorSource`](crate::SensorSource)
///
/// Subscription failure is not fatal to the app: the pipeline keeps the
/// last-known values and simply stops receiving updates.
#[derive(Error, Debug)]
pub enum SensorError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("sensor source unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Result alias for sensor operations
pub type SensorResult<T> = Result<T, SensorError>;
