//! Unit tests for the node query builder.

use crate::common::mixed_recipes;
use recipegraph::{ConnectMode, NodeQuery, RecipeGraph};

fn create_graph() -> RecipeGraph {
    let mut graph = RecipeGraph::new();
    for (i, recipe) in mixed_recipes().into_iter().enumerate() {
        // Every other recipe is marked custom so both kinds are present.
        graph.add_node(recipe, i % 2 == 1, ConnectMode::None);
    }
    graph.bulk_connect();
    graph
}

#[test]
fn test_query_by_item() {
    let graph = create_graph();

    let consumers = graph.query().consumes("iron-plate").execute();
    assert_eq!(consumers.len(), 2);

    let producers = graph.query().produces("iron-plate").execute();
    assert_eq!(producers, graph.nodes_for_recipe("iron-plate"));
}

#[test]
fn test_query_by_category_and_name() {
    let graph = create_graph();

    assert_eq!(graph.query().category("logistics").count(), 1);
    assert_eq!(graph.query().category("intermediate-products").count(), 2);
    assert_eq!(graph.query().name_contains("IRON").count(), 2);
    assert!(!graph.query().name_contains("rocket").exists());
}

#[test]
fn test_query_custom_flags() {
    let graph = create_graph();

    assert_eq!(graph.query().custom_only().count(), 2);
    assert_eq!(graph.query().catalog_only().count(), 3);
}

#[test]
fn test_query_combined_filters_and_limit() {
    let graph = create_graph();

    let results = NodeQuery::new(&graph)
        .catalog_only()
        .custom(|node| node.recipe.time < 1.0)
        .execute();
    assert_eq!(results.len(), 1);
    assert_eq!(graph.get_node(results[0]).unwrap().recipe.id, "transport-belt");

    assert_eq!(graph.query().limit(2).execute().len(), 2);
    assert_eq!(graph.query().limit(2).count(), 2);
}
