//! Error types for grid mutation, placement, map codes and generation

use std::fmt;

use crate::spatial::tiles::Tile;

/// Main error type for all map operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// An argument was outside the domain the operation accepts
    InvalidArgument {
        /// Name of the offending argument
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Rejection sampling ran out of consecutive attempts
    ///
    /// Usually means the requested count, area and condition cannot all be
    /// satisfied on the current grid. The grid is left as it was before the call.
    PlacementExhausted {
        /// Tile that was being placed
        tile: Tile,
        /// Number of tiles requested
        requested: usize,
        /// Number placed before giving up (all of them reverted)
        placed: usize,
        /// Consecutive failures that triggered the abort
        failures: usize,
    },

    /// Map code text could not be parsed
    MalformedEncoding {
        /// Header field or body part that failed
        field: &'static str,
        /// Description of the problem
        reason: String,
    },

    /// Every generation attempt was rejected by the evaluator
    GenerationExhausted {
        /// Name of the generator
        generator: String,
        /// Attempts made before giving up
        attempts: usize,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid argument '{parameter}' = '{value}': {reason}")
            }
            Self::PlacementExhausted {
                tile,
                requested,
                placed,
                failures,
            } => {
                write!(
                    f,
                    "Placement of '{tile}' failed after {failures} consecutive misses \
                     ({placed} of {requested} placed, all reverted)"
                )
            }
            Self::MalformedEncoding { field, reason } => {
                write!(f, "Malformed map code in {field}: {reason}")
            }
            Self::GenerationExhausted {
                generator,
                attempts,
            } => {
                write!(
                    f,
                    "Generator '{generator}' produced no valid map in {attempts} attempts"
                )
            }
        }
    }
}

impl std::error::Error for MapError {}

/// Convenience type alias for map results
pub type Result<T> = std::result::Result<T, MapError>;

/// Create an invalid argument error
pub fn invalid_argument(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MapError {
    MapError::InvalidArgument {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed encoding error
pub fn malformed(field: &'static str, reason: &impl ToString) -> MapError {
    MapError::MalformedEncoding {
        field,
        reason: reason.to_string(),
    }
}
