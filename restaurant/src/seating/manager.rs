//! Seating manager: first-fit table assignment and waiting-list reconciliation.

use serde::Serialize;
use std::collections::{HashMap, HashSet, VecDeque};

use super::{
    config::FloorPlan,
    errors::{SeatingError, SeatingResult},
    events::SeatingEvent,
    models::{CustomerGroup, GroupId, Table, TableIndex},
};

/// Events kept for the caller before the oldest ones are dropped.
pub const MAX_PENDING_EVENTS: usize = 1024;

/// Snapshot of one seated or waiting group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupView {
    pub id: GroupId,
    pub size: usize,
}

impl From<&CustomerGroup> for GroupView {
    fn from(group: &CustomerGroup) -> Self {
        Self {
            id: group.id(),
            size: group.size(),
        }
    }
}

/// Snapshot of one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub index: TableIndex,
    pub size: usize,
    pub empty_seats: usize,
    /// Groups at the table, ordered by group id
    pub groups: Vec<GroupView>,
}

/// Serialisable snapshot of the whole room
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatingView {
    pub tables: Vec<TableView>,
    /// Waiting groups in arrival order
    pub waiting: Vec<GroupView>,
}

/// Seats customer groups at a fixed set of tables.
///
/// Tables are offered to arriving groups in construction order and the first
/// one with enough empty seats wins (first-fit, not best-fit). Groups that
/// fit nowhere join a FIFO waiting list. When a seated group leaves, the
/// waiting list is scanned once, in arrival order, against the table that was
/// just freed; every waiting group that still fits is seated there, including
/// groups behind a larger one that did not fit.
///
/// The manager owns all mutable state. Callers hold [`CustomerGroup`]
/// handles and read tables through [`SeatingManager::locate`] and
/// [`SeatingManager::tables`], but never mutate them directly.
///
/// Every seat, waitlist and departure is also queued as a [`SeatingEvent`].
/// Callers that want them should call [`SeatingManager::drain_events`]
/// regularly; past [`MAX_PENDING_EVENTS`] the oldest events are dropped.
///
/// ## Example
///
/// ```
/// use restaurant::seating::{CustomerGroup, SeatingManager, Table};
///
/// let tables = vec![Table::new(2).unwrap(), Table::new(4).unwrap()];
/// let mut manager = SeatingManager::new(tables).unwrap();
///
/// let party = CustomerGroup::new(3).unwrap();
/// assert_eq!(manager.arrives(&party).unwrap(), Some(1));
/// assert_eq!(manager.locate(&party).map(|t| t.size()), Some(4));
///
/// manager.leaves(&party).unwrap();
/// assert!(manager.locate(&party).is_none());
/// ```
#[derive(Debug)]
pub struct SeatingManager {
    /// Tables in seating-priority order. Never grows or shrinks.
    tables: Vec<Table>,

    /// Seated groups and the table each one occupies
    seated: HashMap<CustomerGroup, TableIndex>,

    /// Unseated groups in arrival order
    waitlist: VecDeque<CustomerGroup>,

    /// Ids of the groups in `waitlist`
    waiting_ids: HashSet<GroupId>,

    /// Events not yet drained by the caller, at most `MAX_PENDING_EVENTS`
    events: VecDeque<SeatingEvent>,

    /// Set once events were dropped since the last drain
    events_overflowed: bool,
}

impl SeatingManager {
    /// Create a new seating manager
    ///
    /// # Arguments
    ///
    /// * `tables` - Tables in the order they are offered to arriving groups
    ///
    /// # Returns
    ///
    /// * `SeatingResult<SeatingManager>` - New manager,
    ///   [`SeatingError::NoTables`] if `tables` is empty, or
    ///   [`SeatingError::TableOccupied`] if a table already has seats taken
    pub fn new(tables: Vec<Table>) -> SeatingResult<Self> {
        if tables.is_empty() {
            return Err(SeatingError::NoTables);
        }

        // Occupied seats must always belong to a seated group
        if let Some(index) = tables.iter().position(|table| !table.is_empty()) {
            return Err(SeatingError::TableOccupied { index });
        }

        log::info!(
            "Seating manager opened with {} tables ({} seats)",
            tables.len(),
            tables.iter().map(Table::size).sum::<usize>()
        );

        Ok(Self {
            seated: HashMap::new(),
            waitlist: VecDeque::new(),
            waiting_ids: HashSet::new(),
            events: VecDeque::new(),
            events_overflowed: false,
            tables,
        })
    }

    /// Create a seating manager with groups already at their tables
    ///
    /// # Arguments
    ///
    /// * `tables` - Tables in seating-priority order
    /// * `assignments` - Groups and the index of the table each one sits at
    ///
    /// # Returns
    ///
    /// * `SeatingResult<SeatingManager>` - New manager, or the first error hit
    ///   while placing the groups. No manager is returned on error.
    pub fn with_assignments<I>(tables: Vec<Table>, assignments: I) -> SeatingResult<Self>
    where
        I: IntoIterator<Item = (CustomerGroup, TableIndex)>,
    {
        let mut manager = Self::new(tables)?;
        for (group, index) in assignments {
            manager.place(group, index)?;
        }
        Ok(manager)
    }

    /// Create a seating manager for every table in a floor plan
    pub fn from_floor_plan(plan: &FloorPlan) -> SeatingResult<Self> {
        log::debug!("Building tables for floor plan '{}'", plan.name);
        Self::new(plan.build_tables()?)
    }

    fn place(&mut self, group: CustomerGroup, index: TableIndex) -> SeatingResult<()> {
        let count = self.tables.len();
        if self.contains(&group) {
            return Err(SeatingError::GroupAlreadyPresent);
        }
        let table = self
            .tables
            .get_mut(index)
            .ok_or(SeatingError::UnknownTable { index, count })?;

        table.fill_seats(group.size())?;
        log::debug!("{group} pre-seated at table {index}");
        self.seated.insert(group, index);
        Ok(())
    }

    /// A group arrives and wants to be seated
    ///
    /// The group is seated at the first table, in construction order, with at
    /// least `group.size()` empty seats. If there is none it joins the back
    /// of the waiting list.
    ///
    /// # Returns
    ///
    /// * `SeatingResult<Option<TableIndex>>` - The table the group was seated
    ///   at, `None` if it is waiting, or [`SeatingError::GroupAlreadyPresent`]
    ///   if the group is already seated or waiting
    pub fn arrives(&mut self, group: &CustomerGroup) -> SeatingResult<Option<TableIndex>> {
        if self.contains(group) {
            return Err(SeatingError::GroupAlreadyPresent);
        }

        let Some(index) = self.tables.iter().position(|table| table.fits(group.size())) else {
            log::debug!("No table fits {group}, adding to waiting list");
            self.waitlist.push_back(group.clone());
            self.waiting_ids.insert(group.id());
            self.record(SeatingEvent::Waitlisted {
                group: group.clone(),
            });
            return Ok(None);
        };

        self.tables[index].fill_seats(group.size())?;
        self.seated.insert(group.clone(), index);
        log::debug!("{group} seated at table {index}");
        self.record(SeatingEvent::Seated {
            group: group.clone(),
            table: index,
        });
        Ok(Some(index))
    }

    /// Whether seated or not, the group leaves the restaurant
    ///
    /// A seated group frees its seats, after which the waiting list is
    /// reconciled against that table. A waiting group is dropped from the
    /// waiting list. A group that is neither is ignored.
    pub fn leaves(&mut self, group: &CustomerGroup) -> SeatingResult<()> {
        if let Some(&index) = self.seated.get(group) {
            self.tables[index].release_seats(group.size())?;
            self.seated.remove(group);
            log::debug!("{group} left table {index}");
            self.record(SeatingEvent::Left {
                group: group.clone(),
                table: index,
            });
            self.seat_waiting_groups(index);
            return Ok(());
        }

        if self.waiting_ids.remove(&group.id())
            && let Some(position) = self.waiting_position(group)
        {
            self.waitlist.remove(position);
            log::debug!("{group} left the waiting list");
            self.record(SeatingEvent::LeftWaitlist {
                group: group.clone(),
            });
        }

        Ok(())
    }

    /// Return the table at which the group is seated, or `None` if it is not
    /// seated (waiting, already left, or never arrived).
    pub fn locate(&self, group: &CustomerGroup) -> Option<&Table> {
        self.table_index_of(group)
            .and_then(|index| self.tables.get(index))
    }

    /// Index of the table at which the group is seated
    pub fn table_index_of(&self, group: &CustomerGroup) -> Option<TableIndex> {
        self.seated.get(group).copied()
    }

    // Single pass in arrival order; later, smaller groups may still fit after
    // an earlier one was skipped. Only the freed table is considered.
    fn seat_waiting_groups(&mut self, index: TableIndex) {
        let table = &mut self.tables[index];
        let mut newly_seated = Vec::new();

        // Group sizes are at least 1, so `fill_seats` fails exactly when the
        // group does not fit.
        self.waitlist.retain(|group| {
            if table.fill_seats(group.size()).is_err() {
                return true;
            }
            newly_seated.push(group.clone());
            false
        });

        for group in newly_seated {
            log::debug!("Waiting {group} seated at freed table {index}");
            self.waiting_ids.remove(&group.id());
            self.seated.insert(group.clone(), index);
            self.record(SeatingEvent::Seated {
                group,
                table: index,
            });
        }
    }

    fn record(&mut self, event: SeatingEvent) {
        if self.events.len() == MAX_PENDING_EVENTS {
            if !self.events_overflowed {
                log::warn!(
                    "Seating event queue full ({MAX_PENDING_EVENTS}), dropping oldest events until drained"
                );
                self.events_overflowed = true;
            }
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Take all events queued since the last drain, oldest first
    pub fn drain_events(&mut self) -> VecDeque<SeatingEvent> {
        self.events_overflowed = false;
        std::mem::take(&mut self.events)
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn table(&self, index: TableIndex) -> Option<&Table> {
        self.tables.get(index)
    }

    /// Waiting groups in arrival order
    pub fn waiting_list(&self) -> impl Iterator<Item = &CustomerGroup> {
        self.waitlist.iter()
    }

    pub fn waiting_count(&self) -> usize {
        self.waitlist.len()
    }

    /// Zero-based place of the group in the waiting list
    pub fn waiting_position(&self, group: &CustomerGroup) -> Option<usize> {
        self.waitlist.iter().position(|waiting| waiting == group)
    }

    pub fn is_seated(&self, group: &CustomerGroup) -> bool {
        self.seated.contains_key(group)
    }

    pub fn is_waiting(&self, group: &CustomerGroup) -> bool {
        self.waiting_ids.contains(&group.id())
    }

    fn contains(&self, group: &CustomerGroup) -> bool {
        self.is_seated(group) || self.is_waiting(group)
    }

    pub fn seated_count(&self) -> usize {
        self.seated.len()
    }

    /// Groups seated at a table, ordered by group id
    pub fn groups_at(&self, index: TableIndex) -> Vec<&CustomerGroup> {
        let mut groups: Vec<&CustomerGroup> = self
            .seated
            .iter()
            .filter(|&(_, &at)| at == index)
            .map(|(group, _)| group)
            .collect();
        groups.sort_by_key(|group| group.id());
        groups
    }

    /// Seats across all tables
    pub fn total_capacity(&self) -> usize {
        self.tables.iter().map(Table::size).sum()
    }

    /// Empty seats across all tables
    pub fn empty_seats(&self) -> usize {
        self.tables.iter().map(Table::empty_seats).sum()
    }

    /// Snapshot of every table and the waiting list
    pub fn view(&self) -> SeatingView {
        let tables = self
            .tables
            .iter()
            .enumerate()
            .map(|(index, table)| TableView {
                index,
                size: table.size(),
                empty_seats: table.empty_seats(),
                groups: self
                    .groups_at(index)
                    .into_iter()
                    .map(GroupView::from)
                    .collect(),
            })
            .collect();

        SeatingView {
            tables,
            waiting: self.waitlist.iter().map(GroupView::from).collect(),
        }
    }
}
