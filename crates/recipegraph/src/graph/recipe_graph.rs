//! The working producer/consumer graph.

use super::types::{ConnectMode, Direction, NodeId, RecipeNode};
use crate::error::{GraphError, Result};
use crate::model::Recipe;
use log::{debug, trace};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Directed graph of recipe nodes.
///
/// An edge `a -> b` means the recipe of `b` consumes something the recipe of
/// `a` produces. Edges carry no payload and form a set: connecting the same
/// ordered pair twice leaves one edge. Self-loops are kept unless disabled
/// with [`RecipeGraph::set_allow_self_loops`].
///
/// Nodes are only ever removed all at once by [`RecipeGraph::clear`], so node
/// insertion order is stable and used for every listing this type returns.
#[derive(Debug, Clone)]
pub struct RecipeGraph {
    nodes: Vec<RecipeNode>,
    // Position of each node in `nodes`
    index: HashMap<NodeId, usize>,
    // Adjacency indexes for O(1) neighbor lookups
    adjacency_out: HashMap<NodeId, HashSet<NodeId>>,
    adjacency_in: HashMap<NodeId, HashSet<NodeId>>,
    edge_count: usize,
    allow_self_loops: bool,
}

impl Default for RecipeGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeGraph {
    /// Create an empty graph that keeps self-loops.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            adjacency_out: HashMap::new(),
            adjacency_in: HashMap::new(),
            edge_count: 0,
            allow_self_loops: true,
        }
    }

    /// Whether connection passes add `a -> a` edges for self-feeding recipes.
    pub fn allow_self_loops(&self) -> bool {
        self.allow_self_loops
    }

    /// Enable or disable self-loops for subsequent connection passes.
    ///
    /// Existing edges are left alone.
    pub fn set_allow_self_loops(&mut self, allow: bool) {
        self.allow_self_loops = allow;
    }

    /// Add a recipe node to the graph.
    ///
    /// # Parameters
    ///
    /// - `recipe`: The recipe to instantiate
    /// - `is_custom`: Whether the recipe is user-authored
    /// - `mode`: [`ConnectMode::Incremental`] wires the node against every
    ///   existing node right away. This costs O(node count) per call, so use
    ///   [`ConnectMode::None`] plus one [`RecipeGraph::bulk_connect`] when
    ///   adding many nodes.
    ///
    /// # Returns
    ///
    /// The freshly generated node ID.
    pub fn add_node(&mut self, recipe: Recipe, is_custom: bool, mode: ConnectMode) -> NodeId {
        let node_id = self.next_node_id();
        debug!("Adding node: id={node_id}, recipe={}, custom={is_custom}", recipe.id);

        self.index.insert(node_id, self.nodes.len());
        self.nodes.push(RecipeNode::new(node_id, recipe, is_custom));

        if mode == ConnectMode::Incremental {
            self.connect_incremental(node_id);
        }

        node_id
    }

    /// Rebuild producer/consumer edges for the entire node set.
    ///
    /// Builds an index from item id to the nodes producing it, then links every
    /// producer of each ingredient to the consuming node. Existing edges are
    /// not cleared first; since edges form a set, running this twice adds
    /// nothing the second time.
    ///
    /// # Returns
    ///
    /// The number of edges that did not exist before.
    pub fn bulk_connect(&mut self) -> usize {
        let mut producers: HashMap<&str, Vec<NodeId>> = HashMap::new();
        for node in &self.nodes {
            for item in node.recipe.products.keys() {
                producers.entry(item.as_str()).or_default().push(node.id);
            }
        }
        debug!("Producer index covers {} items", producers.len());

        let mut pending = Vec::new();
        for node in &self.nodes {
            for item in node.recipe.ingredients.keys() {
                let Some(sources) = producers.get(item.as_str()) else {
                    continue;
                };
                for &producer_id in sources {
                    if producer_id == node.id && !self.allow_self_loops {
                        continue;
                    }
                    pending.push((producer_id, node.id));
                }
            }
        }

        let added = pending
            .into_iter()
            .filter(|&(source, target)| self.insert_edge(source, target))
            .count();
        debug!("Bulk connect added {added} edges ({} total)", self.edge_count);
        added
    }

    /// Add an edge between two existing nodes.
    ///
    /// # Returns
    ///
    /// `true` if the edge is new, `false` if it was already present.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is missing.
    pub fn add_edge(&mut self, source_id: NodeId, target_id: NodeId) -> Result<bool> {
        self.get_node(source_id)?;
        self.get_node(target_id)?;
        Ok(self.insert_edge(source_id, target_id))
    }

    /// Get a node by ID.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn get_node(&self, id: NodeId) -> Result<&RecipeNode> {
        self.index
            .get(&id)
            .map(|&pos| &self.nodes[pos])
            .ok_or_else(|| GraphError::NodeNotFound {
                node_id: id.to_string(),
            })
    }

    /// Whether a node with this ID exists.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &RecipeNode> {
        self.nodes.iter()
    }

    /// All node IDs in insertion order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|n| n.id).collect()
    }

    /// IDs of every node instantiating the recipe `recipe_id`.
    pub fn nodes_for_recipe(&self, recipe_id: &str) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|n| n.recipe.id == recipe_id)
            .map(|n| n.id)
            .collect()
    }

    /// Whether the edge `source -> target` exists.
    pub fn has_edge(&self, source_id: NodeId, target_id: NodeId) -> bool {
        self.adjacency_out
            .get(&source_id)
            .is_some_and(|targets| targets.contains(&target_id))
    }

    /// All edges as `(source, target)` pairs, ordered by node insertion order.
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for node in &self.nodes {
            if let Some(targets) = self.adjacency_out.get(&node.id) {
                let mut targets: Vec<NodeId> = targets.iter().copied().collect();
                self.sort_by_insertion(&mut targets);
                edges.extend(targets.into_iter().map(|t| (node.id, t)));
            }
        }
        edges
    }

    /// Get all neighbor nodes connected by edges in the specified direction.
    ///
    /// Neighbors are returned once each, in node insertion order. A node with
    /// a self-loop is its own neighbor.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn neighbors(&self, node_id: NodeId, direction: Direction) -> Result<Vec<NodeId>> {
        self.get_node(node_id)?;

        let mut neighbors = HashSet::new();
        if matches!(direction, Direction::Outgoing | Direction::Both) {
            if let Some(out) = self.adjacency_out.get(&node_id) {
                neighbors.extend(out.iter().copied());
            }
        }
        if matches!(direction, Direction::Incoming | Direction::Both) {
            if let Some(incoming) = self.adjacency_in.get(&node_id) {
                neighbors.extend(incoming.iter().copied());
            }
        }

        let mut neighbors: Vec<NodeId> = neighbors.into_iter().collect();
        self.sort_by_insertion(&mut neighbors);
        Ok(neighbors)
    }

    /// Get the total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove every node and edge.
    ///
    /// The self-loop setting is kept.
    pub fn clear(&mut self) {
        debug!("Clearing graph ({} nodes, {} edges)", self.nodes.len(), self.edge_count);
        self.nodes.clear();
        self.index.clear();
        self.adjacency_out.clear();
        self.adjacency_in.clear();
        self.edge_count = 0;
    }

    /// Create a new query builder for this graph.
    pub fn query(&self) -> crate::query::NodeQuery<'_> {
        crate::query::NodeQuery::new(self)
    }

    // ===== Algorithm Methods =====

    /// Breadth-first traversal from `start`.
    ///
    /// See [`algorithms::bfs`](super::algorithms::bfs).
    pub fn bfs(&self, start: NodeId, direction: Direction, max_depth: Option<usize>) -> Result<Vec<NodeId>> {
        super::algorithms::bfs(self, start, direction, max_depth)
    }

    /// Groups of nodes that feed each other in a cycle.
    ///
    /// See [`algorithms::find_production_loops`](super::algorithms::find_production_loops).
    pub fn find_production_loops(&self) -> Result<Vec<Vec<NodeId>>> {
        super::algorithms::find_production_loops(self)
    }

    // ===== Export Methods =====

    /// Export graph to Graphviz DOT format for visualization.
    pub fn export_dot(&self) -> String {
        crate::export::export_dot(self)
    }

    /// Export graph to Graphviz DOT format with custom styling options.
    pub fn export_dot_styled(&self, options: &crate::export::DotOptions) -> String {
        crate::export::export_dot_styled(self, options)
    }

    /// Export graph to D3.js-compatible JSON format.
    pub fn export_json(&self) -> Result<String> {
        crate::export::export_json(self)
    }

    // Private helper methods

    fn next_node_id(&self) -> NodeId {
        loop {
            let id = Uuid::new_v4();
            if !self.index.contains_key(&id) {
                return id;
            }
        }
    }

    /// Wire `new_id` against every other node, in both directions.
    fn connect_incremental(&mut self, new_id: NodeId) {
        let Ok(new_node) = self.get_node(new_id) else {
            return;
        };
        let new_recipe = &new_node.recipe;

        let mut pending = Vec::new();
        for existing in &self.nodes {
            if existing.id == new_id {
                continue;
            }
            if existing.recipe.feeds(new_recipe) {
                pending.push((existing.id, new_id));
            }
            if new_recipe.feeds(&existing.recipe) {
                pending.push((new_id, existing.id));
            }
        }
        if self.allow_self_loops && new_recipe.feeds(new_recipe) {
            pending.push((new_id, new_id));
        }

        let added = pending
            .into_iter()
            .filter(|&(source, target)| self.insert_edge(source, target))
            .count();
        trace!("Incremental connect of {new_id} added {added} edges");
    }

    fn insert_edge(&mut self, source_id: NodeId, target_id: NodeId) -> bool {
        let inserted = self
            .adjacency_out
            .entry(source_id)
            .or_default()
            .insert(target_id);
        if inserted {
            self.adjacency_in
                .entry(target_id)
                .or_default()
                .insert(source_id);
            self.edge_count += 1;
            trace!("Edge {source_id} -> {target_id}");
        }
        inserted
    }

    fn sort_by_insertion(&self, ids: &mut [NodeId]) {
        ids.sort_by_key(|id| self.index.get(id).copied().unwrap_or(usize::MAX));
    }
}
