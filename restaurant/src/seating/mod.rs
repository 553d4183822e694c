//! Seating module: tables, customer groups and the manager that matches them.
//!
//! This module implements:
//! - Fixed-capacity tables with validated fill/release of seats
//! - Customer groups with identity semantics (equal sizes, different parties)
//! - First-fit seating of arriving groups, in table order
//! - A FIFO waiting list reconciled against a table whenever it frees up
//! - Floor plan configuration and serialisable views of seating state
//!
//! ## Example
//!
//! ```
//! use restaurant::seating::{CustomerGroup, FloorPlan, SeatingManager};
//!
//! let mut manager = SeatingManager::from_floor_plan(&FloorPlan::new("Bar", vec![2])).unwrap();
//!
//! let couple = CustomerGroup::new(2).unwrap();
//! let pair = CustomerGroup::new(2).unwrap();
//! manager.arrives(&couple).unwrap();
//! manager.arrives(&pair).unwrap();
//! assert!(manager.is_waiting(&pair));
//!
//! manager.leaves(&couple).unwrap();
//! assert_eq!(manager.table_index_of(&pair), Some(0));
//!
//! for event in manager.drain_events() {
//!     println!("{event}");
//! }
//! ```

pub mod config;
pub mod errors;
pub mod events;
pub mod manager;
pub mod models;

pub use config::FloorPlan;
pub use errors::{SeatingError, SeatingResult};
pub use events::SeatingEvent;
pub use manager::{GroupView, MAX_PENDING_EVENTS, SeatingManager, SeatingView, TableView};
pub use models::{
    CustomerGroup, GroupId, MAX_GROUP_SIZE, MAX_TABLE_SIZE, MIN_GROUP_SIZE, MIN_TABLE_SIZE, Table,
    TableIndex,
};
