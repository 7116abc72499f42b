//! Populating a planner from the sample catalog.

use crate::common::sample_catalog;
use recipegraph::{ConnectMode, Planner, PlannerConfig, RecipeFilter};

fn has_recipe_edge(planner: &Planner, from: &str, to: &str) -> bool {
    let graph = planner.graph();
    graph.nodes_for_recipe(from).into_iter().any(|a| {
        graph
            .nodes_for_recipe(to)
            .into_iter()
            .any(|b| graph.has_edge(a, b))
    })
}

#[test]
fn test_default_population_excludes_recycling_and_barrels() {
    let mut planner = Planner::new(sample_catalog());
    let added = planner.populate_from_catalog();

    assert_eq!(added, 5);
    assert_eq!(planner.graph().node_count(), 5);

    let filter = RecipeFilter::default();
    for node in planner.graph().nodes() {
        assert!(filter.accepts(&node.recipe), "{} should be excluded", node.recipe.id);
        assert!(!node.is_custom);
    }
    for excluded in ["barrel", "crude-oil-barrel", "iron-plate-recycling", "scrap-processing"] {
        assert!(planner.graph().nodes_for_recipe(excluded).is_empty());
    }
}

#[test]
fn test_default_population_edges() {
    let mut planner = Planner::new(sample_catalog());
    planner.populate_from_catalog();

    assert_eq!(planner.graph().edge_count(), 4);
    assert!(has_recipe_edge(&planner, "iron-plate", "iron-gear-wheel"));
    assert!(has_recipe_edge(&planner, "iron-plate", "transport-belt"));
    assert!(has_recipe_edge(&planner, "iron-gear-wheel", "transport-belt"));
    assert!(has_recipe_edge(
        &planner,
        "kovarex-enrichment-process",
        "kovarex-enrichment-process"
    ));
}

#[test]
fn test_unfiltered_population() {
    let mut planner = Planner::with_config(sample_catalog(), PlannerConfig::unfiltered());
    assert_eq!(planner.populate_from_catalog(), 9);
    assert_eq!(planner.graph().edge_count(), 12);
    assert!(has_recipe_edge(&planner, "barrel", "crude-oil-barrel"));
    assert!(has_recipe_edge(&planner, "iron-plate-recycling", "iron-plate-recycling"));
}

#[test]
fn test_population_without_self_loops() {
    let config = PlannerConfig {
        allow_self_loops: false,
        ..Default::default()
    };
    let mut planner = Planner::with_config(sample_catalog(), config);
    planner.populate_from_catalog();

    assert_eq!(planner.graph().edge_count(), 3);
    assert!(planner.graph().find_production_loops().unwrap().is_empty());
}

#[test]
fn test_explicit_filter() {
    let mut planner = Planner::new(sample_catalog());
    let filter = RecipeFilter::new().category_contains("smelting");
    assert_eq!(planner.populate_with_filter(&filter), 8);
}

#[test]
fn test_incremental_edit_after_population() {
    let mut planner = Planner::new(sample_catalog());
    planner.populate_from_catalog();
    let before = planner.graph().edge_count();

    // A second plate smelter feeds both plate consumers.
    let extra = planner
        .add_catalog_node("iron-plate", ConnectMode::Incremental)
        .unwrap();
    assert_eq!(planner.graph().edge_count(), before + 2);
    assert_eq!(planner.graph().neighbors(extra, recipegraph::Direction::Outgoing).unwrap().len(), 2);

    assert!(planner.add_catalog_node("rocket-part", ConnectMode::Incremental).is_none());
}

#[test]
fn test_custom_entities_are_unique() {
    let mut planner = Planner::new(sample_catalog());

    let gear = planner.catalog().find_recipe("iron-gear-wheel").unwrap().clone();
    assert!(planner.add_custom_recipe(gear).is_err());

    let plate = planner.catalog().find_item("iron-plate").unwrap().clone();
    assert!(planner.add_custom_item(plate).is_err());

    let slag = recipegraph::Item::new("slag", "Slag", "custom");
    planner.add_custom_item(slag.clone()).unwrap();
    assert!(planner.add_custom_item(slag).is_err());
    assert_eq!(planner.resolve_item("slag").unwrap().name, "Slag");
    assert_eq!(planner.resolve_item("iron-ore").unwrap().name, "Iron ore");
}

#[test]
fn test_clear_resets_working_set() {
    let mut planner = Planner::new(sample_catalog());
    planner.populate_from_catalog();
    planner
        .add_custom_item(recipegraph::Item::new("slag", "Slag", "custom"))
        .unwrap();

    planner.clear();
    assert_eq!(planner.graph().node_count(), 0);
    assert_eq!(planner.graph().edge_count(), 0);
    assert!(planner.custom_items().is_empty());
    assert!(planner.custom_recipes().is_empty());
    assert_eq!(planner.catalog().recipes().len(), 9);
}
