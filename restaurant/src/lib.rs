//! # Restaurant
//!
//! Seats arriving customer groups at fixed-capacity tables and keeps a
//! waiting list for groups that do not fit anywhere yet.
//!
//! ## Seating rules
//!
//! - **Arrival**: a group takes the first table, in floor-plan order, with
//!   enough empty seats. Otherwise it joins the back of the waiting list.
//! - **Departure**: a seated group frees its seats and the waiting list is
//!   re-read in arrival order against that table, seating every group that
//!   still fits. A waiting group simply leaves the list.
//! - **Lookup**: the table a group sits at, or nothing.
//!
//! All state lives in a single [`SeatingManager`]. It is synchronous and
//! single-threaded; wrap it in a lock to share it.
//!
//! ## Core Modules
//!
//! - [`seating`]: tables, groups, floor plans and the seating manager
//!
//! ## Example
//!
//! ```
//! use restaurant::{CustomerGroup, SeatingManager, Table};
//!
//! let tables = vec![Table::new(2).unwrap(), Table::new(4).unwrap()];
//! let mut manager = SeatingManager::new(tables).unwrap();
//!
//! let family = CustomerGroup::new(4).unwrap();
//! assert_eq!(manager.arrives(&family).unwrap(), Some(1));
//! ```

/// Tables, customer groups and seating management.
pub mod seating;
pub use seating::{
    CustomerGroup, FloorPlan, SeatingError, SeatingEvent, SeatingManager, SeatingResult,
    SeatingView, Table, TableIndex,
};
