//! Seating data models.

use serde::{Deserialize, Serialize};
use std::{
    fmt,
    hash::{Hash, Hasher},
};
use uuid::Uuid;

use super::errors::{SeatingError, SeatingResult};

/// Smallest party the restaurant seats.
pub const MIN_GROUP_SIZE: usize = 1;
/// Largest party the restaurant seats.
pub const MAX_GROUP_SIZE: usize = 6;
/// Smallest table on the floor.
pub const MIN_TABLE_SIZE: usize = 2;
/// Largest table on the floor.
pub const MAX_TABLE_SIZE: usize = 6;

/// Position of a table in the manager's table sequence.
pub type TableIndex = usize;

/// Opaque identity of one customer group.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct GroupId(Uuid);

impl GroupId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short form for logs
        let repr = self.0.simple().to_string();
        write!(f, "{}", &repr[..8])
    }
}

/// A party of people that wants to sit together.
///
/// Equality and hashing go through the group's [`GroupId`] only. Two groups
/// constructed with the same size are different parties; a clone refers to
/// the same party as the group it was cloned from.
#[derive(Clone, Debug, Serialize)]
pub struct CustomerGroup {
    id: GroupId,
    size: usize,
}

impl CustomerGroup {
    /// Create a new group of `size` people.
    ///
    /// # Errors
    ///
    /// Returns [`SeatingError::InvalidGroupSize`] unless `1 <= size <= 6`.
    pub fn new(size: usize) -> SeatingResult<Self> {
        if !(MIN_GROUP_SIZE..=MAX_GROUP_SIZE).contains(&size) {
            return Err(SeatingError::InvalidGroupSize(size));
        }
        Ok(Self {
            id: GroupId::generate(),
            size,
        })
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Number of people in the group
    pub fn size(&self) -> usize {
        self.size
    }
}

impl PartialEq for CustomerGroup {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CustomerGroup {}

impl Hash for CustomerGroup {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for CustomerGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group {} ({})", self.id, self.size)
    }
}

/// A table with a fixed number of chairs.
///
/// The empty-seat counter only moves through [`Table::fill_seats`] and
/// [`Table::release_seats`], both of which validate before writing.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Table {
    size: usize,
    empty_seats: usize,
}

impl Table {
    /// Create an empty table with `size` chairs.
    ///
    /// # Errors
    ///
    /// Returns [`SeatingError::InvalidTableSize`] unless `2 <= size <= 6`.
    pub fn new(size: usize) -> SeatingResult<Self> {
        if !(MIN_TABLE_SIZE..=MAX_TABLE_SIZE).contains(&size) {
            return Err(SeatingError::InvalidTableSize(size));
        }
        Ok(Self {
            size,
            empty_seats: size,
        })
    }

    /// Total number of chairs
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn empty_seats(&self) -> usize {
        self.empty_seats
    }

    pub fn occupied_seats(&self) -> usize {
        self.size - self.empty_seats
    }

    pub fn is_empty(&self) -> bool {
        self.empty_seats == self.size
    }

    pub fn is_full(&self) -> bool {
        self.empty_seats == 0
    }

    /// Whether a group of `seats` people fits in the free chairs.
    pub fn fits(&self, seats: usize) -> bool {
        self.empty_seats >= seats
    }

    /// Occupy `seats` chairs.
    ///
    /// # Errors
    ///
    /// Returns [`SeatingError::InvalidSeatsToFill`] if `seats` is zero or
    /// larger than the number of empty chairs.
    pub fn fill_seats(&mut self, seats: usize) -> SeatingResult<()> {
        if seats == 0 || seats > self.empty_seats {
            return Err(SeatingError::InvalidSeatsToFill {
                requested: seats,
                empty: self.empty_seats,
            });
        }
        self.empty_seats -= seats;
        Ok(())
    }

    /// Free `seats` chairs.
    ///
    /// # Errors
    ///
    /// Returns [`SeatingError::InvalidSeatsToRelease`] if `seats` is zero or
    /// larger than the number of occupied chairs.
    pub fn release_seats(&mut self, seats: usize) -> SeatingResult<()> {
        let occupied = self.occupied_seats();
        if seats == 0 || seats > occupied {
            return Err(SeatingError::InvalidSeatsToRelease {
                requested: seats,
                occupied,
            });
        }
        self.empty_seats += seats;
        Ok(())
    }
}
