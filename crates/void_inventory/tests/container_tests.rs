//! Container behaviour tests for void_inventory
//!
//! End-to-end pickup/insert flows driven through the public API

use std::sync::Arc;
use void_inventory::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn catalog() -> ItemCatalog {
    ItemCatalog::from_definitions([
        ItemDefinition::new("stone", 64),
        ItemDefinition::new("apple", 16),
        ItemDefinition::new("sword", 1),
        ItemDefinition::new("relic", 0),
    ])
    .unwrap()
}

/// Insertion picks the lowest-index slot that changes
#[test]
fn insert_prefers_lowest_index() {
    init_logging();
    let catalog = catalog();
    let mut container = ItemContainer::new(3);

    // [Full, Empty, Empty]
    container.try_merge_stack(0, catalog.stack("stone", 64).unwrap());

    let outcome = container.try_insert_stack(catalog.stack("stone", 10).unwrap());
    assert_eq!(outcome.index, Some(1));
    assert!(container.is_slot_empty(2));
}

/// Looping insert until the leftover is empty never parks a zero-unit stack
#[test]
fn insert_loop_until_empty_leaves_no_zero_slot() {
    init_logging();
    let catalog = catalog();
    let stone = Arc::clone(catalog.get("stone").unwrap());
    let mut container = ItemContainer::new(3);
    container.try_merge_stack(0, catalog.stack("stone", 10).unwrap());

    let mut incoming = catalog.stack("stone", 5).unwrap();
    let mut calls = 0;
    while !incoming.is_empty() {
        let outcome = container.try_insert_stack(incoming);
        calls += 1;
        let inserted = outcome.is_inserted();
        incoming = outcome.remainder;
        if !inserted {
            break;
        }
    }

    assert_eq!(calls, 1);
    assert!(container.is_slot_empty(1));
    let occupied: Vec<_> = container.items().map(|(i, s)| (i, s.quantity())).collect();
    assert_eq!(occupied, vec![(0, 15)]);
    assert!(container.try_pickup_stack(1).is_none());
    assert_eq!(container.count_of(&stone), 15);
}

/// A declined insert hands the stack back untouched
#[test]
fn declined_insert_returns_stack() {
    init_logging();
    let catalog = catalog();
    let mut container = ItemContainer::new(2);
    container.try_insert_stack(catalog.stack("sword", 1).unwrap());
    container.try_insert_stack(catalog.stack("sword", 1).unwrap());

    let sword = catalog.stack("sword", 1).unwrap();
    let outcome = container.try_insert_stack(sword);

    assert!(!outcome.is_inserted());
    assert_eq!(outcome.remainder.quantity(), 1);
    assert!(outcome.remainder.is_definition_equal(catalog.get("sword").unwrap()));
}

/// Callers loop the single-slot insert to spread a large pickup
#[test]
fn manual_insert_loop_matches_insert_all() {
    init_logging();
    let catalog = catalog();
    let apple = Arc::clone(catalog.get("apple").unwrap());

    let mut looped = ItemContainer::new(5);
    looped.try_insert_stack(catalog.stack("apple", 9).unwrap());
    looped.try_insert_stack(catalog.stack("stone", 3).unwrap());
    let mut spread = looped.clone();

    let mut incoming = catalog.stack("apple", 16).unwrap();
    let mut indices = Vec::new();
    loop {
        let outcome = looped.try_insert_stack(incoming);
        incoming = outcome.remainder;
        match outcome.index {
            Some(index) => indices.push(index),
            None => break,
        }
        if incoming.is_depleted() {
            break;
        }
    }

    let outcome = spread.try_insert_stack_all(catalog.stack("apple", 16).unwrap());

    assert_eq!(indices, vec![0, 2]);
    assert_eq!(outcome.indices, indices);
    assert_eq!(looped.count_of(&apple), 25);
    assert_eq!(spread.count_of(&apple), 25);
}

/// Moving a stack between slots through pickup and merge keeps every unit
#[test]
fn move_between_slots() {
    init_logging();
    let catalog = catalog();
    let stone = Arc::clone(catalog.get("stone").unwrap());
    let mut container = ItemContainer::new(3);
    container.try_merge_stack(0, catalog.stack("stone", 40).unwrap());
    container.try_merge_stack(2, catalog.stack("stone", 50).unwrap());

    let held = container.try_pickup_stack(0).unwrap();
    let outcome = container.try_merge_stack(2, held);

    assert!(outcome.changed);
    assert_eq!(container.stack(2).quantity(), 64);
    assert_eq!(outcome.remainder.quantity(), 26);

    // Put the leftover back where it came from
    assert!(container.try_merge_stack(0, outcome.remainder).changed);
    assert_eq!(container.count_of(&stone), 90);
}

/// Splitting and re-inserting restores the starting total
#[test]
fn split_then_reinsert() {
    init_logging();
    let catalog = catalog();
    let apple = Arc::clone(catalog.get("apple").unwrap());
    let mut container = ItemContainer::new(2);
    container.try_insert_stack(catalog.stack("apple", 15).unwrap());

    let half = container.try_split_stack(0).unwrap();
    assert_eq!(half.quantity(), 8);
    assert_eq!(container.stack(0).quantity(), 7);

    let outcome = container.try_insert_stack(half);
    assert_eq!(outcome.index, Some(0));
    assert!(outcome.remainder.is_depleted());
    assert_eq!(container.count_of(&apple), 15);
}

/// A component built from config behaves like its container
#[test]
fn component_from_config() {
    init_logging();
    let catalog = catalog();
    let config: ContainerConfig =
        serde_json::from_str(r#"{ "capacity": 2, "label": "pouch" }"#).unwrap();
    let mut pouch = ItemContainerComponent::new(config).unwrap();

    let outcome = pouch.insert_all(catalog.stack("stone", 64).unwrap());
    assert_eq!(outcome.indices, vec![0]);

    let outcome = pouch.insert(catalog.stack("sword", 1).unwrap());
    assert_eq!(outcome.index, Some(1));

    let outcome = pouch.insert(catalog.stack("apple", 1).unwrap());
    assert!(!outcome.is_inserted());
}
