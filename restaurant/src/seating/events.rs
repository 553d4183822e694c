//! Seating events.

use serde::Serialize;
use std::fmt;

use super::models::{CustomerGroup, TableIndex};

/// Events that occur while seating groups
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum SeatingEvent {
    Seated {
        group: CustomerGroup,
        table: TableIndex,
    },
    Waitlisted {
        group: CustomerGroup,
    },
    Left {
        group: CustomerGroup,
        table: TableIndex,
    },
    LeftWaitlist {
        group: CustomerGroup,
    },
}

impl SeatingEvent {
    /// The group the event is about.
    pub fn group(&self) -> &CustomerGroup {
        match self {
            Self::Seated { group, .. }
            | Self::Waitlisted { group }
            | Self::Left { group, .. }
            | Self::LeftWaitlist { group } => group,
        }
    }
}

impl fmt::Display for SeatingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Seated { group, table } => format!("{group} seated at table {table}"),
            Self::Waitlisted { group } => format!("{group} added to the waiting list"),
            Self::Left { group, table } => format!("{group} left table {table}"),
            Self::LeftWaitlist { group } => format!("{group} left the waiting list"),
        };
        write!(f, "{repr}")
    }
}
