//! Unit tests for node insertion and the two connection strategies.

use crate::common::{belts, gears, kovarex, smelting};
use recipegraph::{ConnectMode, Direction, GraphError, RecipeGraph};
use std::collections::HashSet;

#[test]
fn test_node_ids_are_unique_per_instance() {
    let mut graph = RecipeGraph::new();
    let ids: HashSet<_> = (0..100)
        .map(|_| graph.add_node(gears(), false, ConnectMode::None))
        .collect();

    assert_eq!(ids.len(), 100);
    assert_eq!(graph.nodes_for_recipe("iron-gear-wheel").len(), 100);
}

#[test]
fn test_same_recipe_twice_standard_and_custom() {
    let mut graph = RecipeGraph::new();
    let standard = graph.add_node(gears(), false, ConnectMode::None);
    let custom = graph.add_node(gears(), true, ConnectMode::None);

    assert!(!graph.get_node(standard).unwrap().is_custom);
    assert!(graph.get_node(custom).unwrap().is_custom);
    assert_eq!(graph.get_node(custom).unwrap().label(), "Iron gear wheel");
}

#[test]
fn test_bulk_connect_chain() {
    let mut graph = RecipeGraph::new();
    let plate = graph.add_node(smelting(), false, ConnectMode::None);
    let gear = graph.add_node(gears(), false, ConnectMode::None);
    let belt = graph.add_node(belts(), false, ConnectMode::None);

    assert_eq!(graph.bulk_connect(), 3);
    assert!(graph.has_edge(plate, gear));
    assert!(graph.has_edge(plate, belt));
    assert!(graph.has_edge(gear, belt));
    assert!(!graph.has_edge(belt, gear));
    assert_eq!(graph.edges(), vec![(plate, gear), (plate, belt), (gear, belt)]);
}

#[test]
fn test_multiple_shared_items_give_one_edge() {
    let mut graph = RecipeGraph::new();
    let both = graph.add_node(
        smelting().with_product("iron-gear-wheel", 1.0),
        false,
        ConnectMode::None,
    );
    let belt = graph.add_node(belts(), false, ConnectMode::Incremental);
    graph.bulk_connect();
    graph.bulk_connect();

    assert!(graph.has_edge(both, belt));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_two_producers_of_same_item() {
    let mut graph = RecipeGraph::new();
    let a = graph.add_node(smelting(), false, ConnectMode::None);
    let b = graph.add_node(smelting(), true, ConnectMode::None);
    let gear = graph.add_node(gears(), false, ConnectMode::None);
    graph.bulk_connect();

    assert_eq!(graph.neighbors(gear, Direction::Incoming).unwrap(), vec![a, b]);
}

#[test]
fn test_dangling_ingredient_never_matches() {
    let mut graph = RecipeGraph::new();
    graph.add_node(smelting(), false, ConnectMode::Incremental);
    graph.add_node(
        gears().with_ingredient("not-an-item", 1.0),
        false,
        ConnectMode::Incremental,
    );
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_self_loop_incremental_and_bulk() {
    let mut incremental = RecipeGraph::new();
    let a = incremental.add_node(kovarex(), false, ConnectMode::Incremental);
    assert!(incremental.has_edge(a, a));

    let mut bulk = RecipeGraph::new();
    let b = bulk.add_node(kovarex(), false, ConnectMode::None);
    bulk.bulk_connect();
    assert!(bulk.has_edge(b, b));
}

#[test]
fn test_neighbors_both_directions() {
    let mut graph = RecipeGraph::new();
    let plate = graph.add_node(smelting(), false, ConnectMode::Incremental);
    let gear = graph.add_node(gears(), false, ConnectMode::Incremental);
    let belt = graph.add_node(belts(), false, ConnectMode::Incremental);

    assert_eq!(graph.neighbors(gear, Direction::Both).unwrap(), vec![plate, belt]);
    assert_eq!(graph.neighbors(plate, Direction::Outgoing).unwrap(), vec![gear, belt]);
    assert!(graph.neighbors(plate, Direction::Incoming).unwrap().is_empty());
}

#[test]
fn test_neighbors_of_missing_node() {
    let graph = RecipeGraph::new();
    let result = graph.neighbors(uuid::Uuid::new_v4(), Direction::Both);
    assert!(matches!(result, Err(GraphError::NodeNotFound { .. })));
}

#[test]
fn test_clear_empties_graph() {
    let mut graph = RecipeGraph::new();
    let plate = graph.add_node(smelting(), false, ConnectMode::Incremental);
    graph.add_node(gears(), false, ConnectMode::Incremental);
    graph.clear();

    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.edges().is_empty());
    assert!(!graph.contains_node(plate));
}
