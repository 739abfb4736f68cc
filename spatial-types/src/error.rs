//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error)]
pub enum SpatialTypesError {
    /// Input arguments do not satisfy construction preconditions.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
