//! Core graph types: node identifiers, nodes and traversal enums.

use crate::model::Recipe;
use uuid::Uuid;

/// Unique identifier for a node (random 128-bit UUID).
///
/// The same recipe can appear in the graph several times; each instance gets
/// its own identifier.
pub type NodeId = Uuid;

/// How a newly added node is wired into the existing graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConnectMode {
    /// Insert without edges (call [`RecipeGraph::bulk_connect`](super::RecipeGraph::bulk_connect) later)
    #[default]
    None,
    /// Scan every existing node and add edges in both directions
    Incremental,
}

/// Direction for neighbor queries and traversals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Follow outgoing edges (towards consumers)
    Outgoing,
    /// Follow incoming edges (towards producers)
    Incoming,
    /// Follow edges in both directions
    Both,
}

/// A node in the recipe graph.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeNode {
    /// Unique identifier (assigned by graph)
    pub id: NodeId,
    /// The recipe this node instantiates
    pub recipe: Recipe,
    /// Whether the recipe is user-authored rather than from the catalog
    pub is_custom: bool,
}

impl RecipeNode {
    /// Create a new node (ID will be assigned by graph).
    pub fn new(id: NodeId, recipe: Recipe, is_custom: bool) -> Self {
        Self {
            id,
            recipe,
            is_custom,
        }
    }

    /// Display label (the recipe's name).
    pub fn label(&self) -> &str {
        &self.recipe.name
    }
}
