//! Graph traversal and analysis algorithms.
//!
//! Provides BFS over producer/consumer chains and production-loop detection
//! (Tarjan's SCC).

use super::recipe_graph::RecipeGraph;
use super::types::{Direction, NodeId};
use crate::error::Result;
use std::collections::{HashMap, HashSet, VecDeque};

/// Breadth-First Search traversal from a starting node.
///
/// With [`Direction::Incoming`] this walks the producer chain feeding `start`;
/// with [`Direction::Outgoing`] it walks everything `start` ultimately supplies.
///
/// # Parameters
/// - `graph`: The graph to traverse
/// - `start`: Starting node ID
/// - `direction`: Follow outgoing or incoming edges
/// - `max_depth`: Optional maximum depth (None for unlimited)
///
/// # Returns
/// Vec of reachable node IDs (excluding the start node)
///
/// # Errors
/// Returns [`GraphError::NodeNotFound`](crate::GraphError::NodeNotFound) if `start` is missing.
pub fn bfs(
    graph: &RecipeGraph,
    start: NodeId,
    direction: Direction,
    max_depth: Option<usize>,
) -> Result<Vec<NodeId>> {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    let mut result = Vec::new();

    visited.insert(start);
    queue.push_back((start, 0)); // (node_id, depth)

    while let Some((current, depth)) = queue.pop_front() {
        if max_depth.is_some_and(|max| depth >= max) {
            continue;
        }

        for neighbor_id in graph.neighbors(current, direction)? {
            if visited.insert(neighbor_id) {
                result.push(neighbor_id);
                queue.push_back((neighbor_id, depth + 1));
            }
        }
    }

    Ok(result)
}

/// Find production loops: groups of nodes that feed each other in a cycle.
///
/// Returns every strongly connected component with more than one node, plus
/// single nodes with a self-loop (recipes that consume their own product).
/// Components come back in discovery order; nodes inside a component are in
/// graph insertion order.
pub fn find_production_loops(graph: &RecipeGraph) -> Result<Vec<Vec<NodeId>>> {
    let mut tarjan = Tarjan::default();

    // Process all nodes to handle disconnected components
    for node_id in graph.node_ids() {
        if !tarjan.indices.contains_key(&node_id) {
            tarjan.strongconnect(graph, node_id)?;
        }
    }

    let order: HashMap<NodeId, usize> = graph
        .node_ids()
        .into_iter()
        .enumerate()
        .map(|(pos, id)| (id, pos))
        .collect();

    Ok(tarjan
        .sccs
        .into_iter()
        .filter(|scc| scc.len() > 1 || graph.has_edge(scc[0], scc[0]))
        .map(|mut scc| {
            scc.sort_by_key(|id| order.get(id).copied().unwrap_or(usize::MAX));
            scc
        })
        .collect())
}

#[derive(Default)]
struct Tarjan {
    index: usize,
    stack: Vec<NodeId>,
    indices: HashMap<NodeId, usize>,
    lowlinks: HashMap<NodeId, usize>,
    on_stack: HashSet<NodeId>,
    sccs: Vec<Vec<NodeId>>,
}

impl Tarjan {
    fn strongconnect(&mut self, graph: &RecipeGraph, v: NodeId) -> Result<()> {
        let v_index = self.index;
        self.indices.insert(v, v_index);
        self.lowlinks.insert(v, v_index);
        self.index += 1;
        self.stack.push(v);
        self.on_stack.insert(v);

        // Consider successors of v
        for w in graph.neighbors(v, Direction::Outgoing)? {
            if !self.indices.contains_key(&w) {
                self.strongconnect(graph, w)?;
                let w_low = self.lowlink(w);
                self.lower(v, w_low);
            } else if self.on_stack.contains(&w) {
                let w_index = self.indices.get(&w).copied().unwrap_or(usize::MAX);
                self.lower(v, w_index);
            }
        }

        // If v is a root node, pop the stack and generate an SCC
        if self.lowlink(v) == v_index {
            let mut scc = Vec::new();
            while let Some(w) = self.stack.pop() {
                self.on_stack.remove(&w);
                scc.push(w);
                if w == v {
                    break;
                }
            }
            self.sccs.push(scc);
        }

        Ok(())
    }

    fn lowlink(&self, v: NodeId) -> usize {
        self.lowlinks.get(&v).copied().unwrap_or(usize::MAX)
    }

    fn lower(&mut self, v: NodeId, candidate: usize) {
        if let Some(low) = self.lowlinks.get_mut(&v) {
            *low = (*low).min(candidate);
        }
    }
}
