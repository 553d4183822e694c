//! Seating error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::models::TableIndex;

/// Seating errors.
///
/// Serializable both ways so an error can be reported to another process
/// and rebuilt there. Every variant is an invalid-argument error: it is
/// raised before any state is written, so a failed call leaves the manager
/// and its tables untouched.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum SeatingError {
    /// Group size outside the supported range
    #[error("group size must be between 1 and 6, got {0}")]
    InvalidGroupSize(usize),

    /// Table size outside the supported range
    #[error("table size must be between 2 and 6, got {0}")]
    InvalidTableSize(usize),

    /// Fill request of zero seats or more than the table has free
    #[error("invalid number of seats to fill: requested {requested}, empty {empty}")]
    InvalidSeatsToFill { requested: usize, empty: usize },

    /// Release request of zero seats or more than the table has occupied
    #[error("invalid number of seats to release: requested {requested}, occupied {occupied}")]
    InvalidSeatsToRelease { requested: usize, occupied: usize },

    /// Manager constructed without any tables
    #[error("tables list must not be empty")]
    NoTables,

    /// Table handed to a manager with seats already taken
    #[error("table {index} already has occupied seats")]
    TableOccupied { index: TableIndex },

    /// Table index outside the manager's table sequence
    #[error("unknown table {index} (manager has {count} tables)")]
    UnknownTable { index: TableIndex, count: usize },

    /// Group is already seated or waiting
    #[error("group is already seated or waiting")]
    GroupAlreadyPresent,

    /// Floor plan could not be parsed
    #[error("invalid floor plan: {0}")]
    InvalidFloorPlan(String),
}

impl SeatingError {
    /// Whether the error is an invalid-argument error. Seating has a single
    /// failure kind, so every variant answers `true`.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            SeatingError::InvalidGroupSize(_)
            | SeatingError::InvalidTableSize(_)
            | SeatingError::InvalidSeatsToFill { .. }
            | SeatingError::InvalidSeatsToRelease { .. }
            | SeatingError::NoTables
            | SeatingError::TableOccupied { .. }
            | SeatingError::UnknownTable { .. }
            | SeatingError::GroupAlreadyPresent
            | SeatingError::InvalidFloorPlan(_) => true,
        }
    }
}

impl From<serde_json::Error> for SeatingError {
    fn from(value: serde_json::Error) -> Self {
        SeatingError::InvalidFloorPlan(value.to_string())
    }
}

/// Result type for seating operations
pub type SeatingResult<T> = Result<T, SeatingError>;
