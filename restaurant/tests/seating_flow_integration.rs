//! End-to-end seating scenarios: arrivals, departures and waiting-list
//! reconciliation across several tables.

use restaurant::seating::{
    CustomerGroup, FloorPlan, SeatingError, SeatingEvent, SeatingManager, Table,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn tables(sizes: &[usize]) -> Vec<Table> {
    sizes.iter().map(|&size| Table::new(size).unwrap()).collect()
}

fn group(size: usize) -> CustomerGroup {
    CustomerGroup::new(size).unwrap()
}

fn waiting(manager: &SeatingManager) -> Vec<CustomerGroup> {
    manager.waiting_list().cloned().collect()
}

/// Capacity and exclusivity hold for the whole room
fn assert_room_consistent(manager: &SeatingManager) {
    for (index, table) in manager.tables().iter().enumerate() {
        let seated: usize = manager.groups_at(index).iter().map(|g| g.size()).sum();
        assert_eq!(table.occupied_seats(), seated, "table {index} out of sync");
        assert!(table.empty_seats() <= table.size());
    }

    let queue = waiting(manager);
    for (position, group) in queue.iter().enumerate() {
        assert!(!manager.is_seated(group), "{group} both seated and waiting");
        assert_eq!(manager.waiting_position(group), Some(position), "{group} queued twice");
    }
}

#[test]
fn test_two_tables_three_groups() {
    init_logging();
    let mut manager = SeatingManager::new(tables(&[2, 4])).unwrap();
    let a = group(2);
    let b = group(4);
    let c = group(2);

    assert_eq!(manager.arrives(&a).unwrap(), Some(0));
    assert_eq!(manager.arrives(&b).unwrap(), Some(1));
    assert_eq!(manager.arrives(&c).unwrap(), None);
    assert_eq!(waiting(&manager), vec![c.clone()]);
    assert_room_consistent(&manager);

    manager.leaves(&b).unwrap();

    assert_eq!(manager.waiting_count(), 0);
    assert_eq!(manager.table_index_of(&c), Some(1));
    assert_eq!(manager.locate(&c).map(Table::size), Some(4));
    assert_eq!(manager.table(1).unwrap().empty_seats(), 2);
    assert!(manager.locate(&b).is_none());
    assert_room_consistent(&manager);
}

#[test]
fn test_first_fit_not_best_fit() {
    let mut manager = SeatingManager::new(tables(&[4, 2])).unwrap();
    let g = group(2);

    assert_eq!(manager.arrives(&g).unwrap(), Some(0));
    assert_eq!(manager.table(0).unwrap().empty_seats(), 2);
    assert!(manager.table(1).unwrap().is_empty());
}

#[test]
fn test_waiting_list_in_arrival_order_is_scanned_once() {
    // Sizes 3, 1, 2 queue up behind a full table of 4. Freeing three seats
    // seats the size-3 group first; the later groups no longer fit.
    let mut manager = SeatingManager::new(tables(&[4])).unwrap();
    let resident = group(1);
    let leaving = group(3);
    manager.arrives(&resident).unwrap();
    manager.arrives(&leaving).unwrap();

    let three = group(3);
    let one = group(1);
    let two = group(2);
    for g in [&three, &one, &two] {
        assert_eq!(manager.arrives(g).unwrap(), None);
    }

    manager.leaves(&leaving).unwrap();

    assert!(manager.is_seated(&three));
    assert_eq!(waiting(&manager), vec![one, two]);
    assert_room_consistent(&manager);
}

#[test]
fn test_smaller_groups_jump_a_group_that_does_not_fit() {
    // A size-4 group heads the queue but only 3 seats free up: the size-1
    // and size-2 groups behind it are seated, in that order.
    let mut manager = SeatingManager::new(tables(&[4])).unwrap();
    let resident = group(1);
    let leaving = group(3);
    manager.arrives(&resident).unwrap();
    manager.arrives(&leaving).unwrap();

    let four = group(4);
    let one = group(1);
    let two = group(2);
    for g in [&four, &one, &two] {
        manager.arrives(g).unwrap();
    }
    manager.drain_events();

    manager.leaves(&leaving).unwrap();

    assert_eq!(waiting(&manager), vec![four.clone()]);
    let seated_order: Vec<_> = manager
        .drain_events()
        .into_iter()
        .filter_map(|event| match event {
            SeatingEvent::Seated { group, .. } => Some(group),
            _ => None,
        })
        .collect();
    assert_eq!(seated_order, vec![one, two]);
    assert!(manager.table(0).unwrap().is_full());
    assert_room_consistent(&manager);

    // The head of the queue gets the table once everyone else is gone
    manager.leaves(&resident).unwrap();
    assert!(manager.is_waiting(&four));
    let remaining: Vec<_> = manager.groups_at(0).into_iter().cloned().collect();
    for g in remaining {
        manager.leaves(&g).unwrap();
    }
    assert_eq!(manager.table_index_of(&four), Some(0));
    assert_eq!(manager.waiting_count(), 0);
}

#[test]
fn test_round_trip_restores_table() {
    let mut manager = SeatingManager::new(tables(&[6, 3])).unwrap();
    let g = group(5);
    let before: Vec<_> = manager.tables().iter().map(Table::empty_seats).collect();

    manager.arrives(&g).unwrap();
    manager.leaves(&g).unwrap();

    assert!(manager.locate(&g).is_none());
    let after: Vec<_> = manager.tables().iter().map(Table::empty_seats).collect();
    assert_eq!(before, after);
}

#[test]
fn test_leaving_unknown_group_changes_nothing() {
    let mut manager = SeatingManager::new(tables(&[2])).unwrap();
    let seated = group(2);
    let queued = group(1);
    manager.arrives(&seated).unwrap();
    manager.arrives(&queued).unwrap();
    let before = manager.view();

    assert!(manager.leaves(&group(1)).is_ok());

    assert_eq!(manager.view(), before);
}

#[test]
fn test_equal_sized_groups_are_tracked_separately() {
    let mut manager = SeatingManager::new(tables(&[2, 2])).unwrap();
    let first = group(2);
    let second = group(2);
    manager.arrives(&first).unwrap();
    manager.arrives(&second).unwrap();

    manager.leaves(&first).unwrap();

    assert!(manager.locate(&first).is_none());
    assert_eq!(manager.table_index_of(&second), Some(1));
    assert!(manager.table(0).unwrap().is_empty());
}

#[test]
fn test_waiting_group_leaving_is_never_seated() {
    let mut manager = SeatingManager::new(tables(&[3])).unwrap();
    let seated = group(3);
    let impatient = group(2);
    let patient = group(3);
    manager.arrives(&seated).unwrap();
    manager.arrives(&impatient).unwrap();
    manager.arrives(&patient).unwrap();

    manager.leaves(&impatient).unwrap();
    manager.leaves(&seated).unwrap();

    assert!(manager.locate(&impatient).is_none());
    assert!(!manager.is_waiting(&impatient));
    assert_eq!(manager.table_index_of(&patient), Some(0));
}

#[test]
fn test_boundary_rejection() {
    assert_eq!(
        CustomerGroup::new(0).unwrap_err(),
        SeatingError::InvalidGroupSize(0)
    );
    assert_eq!(
        CustomerGroup::new(7).unwrap_err(),
        SeatingError::InvalidGroupSize(7)
    );
    assert_eq!(Table::new(1).unwrap_err(), SeatingError::InvalidTableSize(1));
    assert_eq!(Table::new(7).unwrap_err(), SeatingError::InvalidTableSize(7));

    let mut small = Table::new(2).unwrap();
    assert!(small.fill_seats(3).unwrap_err().is_invalid_argument());
    let mut empty = Table::new(4).unwrap();
    assert!(empty.release_seats(1).unwrap_err().is_invalid_argument());

    assert_eq!(
        SeatingManager::new(Vec::new()).unwrap_err(),
        SeatingError::NoTables
    );
}

#[test]
fn test_duplicate_arrival_rejected_without_mutation() {
    let mut manager = SeatingManager::new(tables(&[4])).unwrap();
    let g = group(2);
    manager.arrives(&g).unwrap();
    let before = manager.view();

    assert_eq!(
        manager.arrives(&g.clone()).unwrap_err(),
        SeatingError::GroupAlreadyPresent
    );
    assert_eq!(manager.view(), before);
}

#[test]
fn test_pre_seated_groups_feed_reconciliation() {
    let regular = group(4);
    let mut manager =
        SeatingManager::with_assignments(tables(&[2, 4]), [(regular.clone(), 1)]).unwrap();
    let walk_in = group(3);

    assert_eq!(manager.arrives(&walk_in).unwrap(), None);
    manager.leaves(&regular).unwrap();

    assert_eq!(manager.table_index_of(&walk_in), Some(1));
    assert_room_consistent(&manager);
}

#[test]
fn test_floor_plan_from_json() {
    init_logging();
    let plan = FloorPlan::from_json(r#"{"name": "Patio", "table_sizes": [2, 2, 6]}"#).unwrap();
    let mut manager = SeatingManager::from_floor_plan(&plan).unwrap();

    let party = group(6);
    assert_eq!(manager.arrives(&party).unwrap(), Some(2));
    assert_eq!(manager.empty_seats(), 4);
    assert_eq!(manager.total_capacity(), plan.total_seats());
}

#[test]
fn test_busy_evening() {
    init_logging();
    let mut manager = SeatingManager::from_floor_plan(&FloorPlan::default()).unwrap();
    let parties: Vec<_> = [2, 4, 6, 1, 3, 5, 2, 2, 4, 6, 1, 1]
        .into_iter()
        .map(group)
        .collect();

    for party in &parties {
        manager.arrives(party).unwrap();
        assert_room_consistent(&manager);
    }
    assert!(manager.waiting_count() > 0);

    for party in parties.iter().step_by(2) {
        manager.leaves(party).unwrap();
        assert_room_consistent(&manager);
    }
    for party in parties.iter().skip(1).step_by(2) {
        manager.leaves(party).unwrap();
        assert_room_consistent(&manager);
    }

    assert_eq!(manager.seated_count(), 0);
    assert_eq!(manager.waiting_count(), 0);
    assert_eq!(manager.empty_seats(), manager.total_capacity());
}
