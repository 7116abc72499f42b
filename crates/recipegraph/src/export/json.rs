//! JSON format export for D3.js and web visualization tools.
//!
//! Generates JSON with "nodes" and "links" arrays compatible with D3.js force-directed layouts.

use crate::error::{GraphError, Result};
use crate::graph::{RecipeGraph, RecipeNode};
use serde_json::{json, Value};

/// Export graph to D3.js-compatible JSON format
pub fn export_json(graph: &RecipeGraph) -> Result<String> {
    let nodes: Vec<Value> = graph.nodes().map(node_to_json).collect();
    let links: Vec<Value> = graph
        .edges()
        .into_iter()
        .map(|(source, target)| {
            json!({
                "source": source.to_string(),
                "target": target.to_string(),
            })
        })
        .collect();

    let result = json!({
        "nodes": nodes,
        "links": links,
    });

    serde_json::to_string_pretty(&result)
        .map_err(|e| GraphError::serialization("Failed to serialize graph", Some(e)))
}

/// Convert node to JSON object
fn node_to_json(node: &RecipeNode) -> Value {
    json!({
        "id": node.id.to_string(),
        "label": node.label(),
        "recipeId": node.recipe.id,
        "category": node.recipe.category,
        "isCustom": node.is_custom,
    })
}
