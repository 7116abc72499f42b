//! Query builder for fluent node queries.
//!
//! Provides a fluent interface for finding nodes in a [`RecipeGraph`] by
//! recipe attributes and by the items they move.

use crate::graph::{NodeId, RecipeGraph, RecipeNode};

/// A filter predicate that can be applied to nodes.
type FilterFn = Box<dyn Fn(&RecipeNode) -> bool>;

/// Fluent query builder over graph nodes.
///
/// All filters must match. Results come back in node insertion order.
///
/// # Examples
///
/// ```
/// use recipegraph::{ConnectMode, NodeQuery, Recipe, RecipeGraph};
///
/// let mut graph = RecipeGraph::new();
/// graph.add_node(
///     Recipe::new("iron-gear-wheel", "Iron gear wheel", "intermediate-products")
///         .with_ingredient("iron-plate", 2.0)
///         .with_product("iron-gear-wheel", 1.0),
///     false,
///     ConnectMode::None,
/// );
///
/// let consumers = NodeQuery::new(&graph).consumes("iron-plate").execute();
/// assert_eq!(consumers.len(), 1);
/// ```
pub struct NodeQuery<'a> {
    graph: &'a RecipeGraph,
    filters: Vec<FilterFn>,
    limit_value: Option<usize>,
}

impl<'a> NodeQuery<'a> {
    /// Create a new query over the given graph.
    pub fn new(graph: &'a RecipeGraph) -> Self {
        Self {
            graph,
            filters: Vec::new(),
            limit_value: None,
        }
    }

    /// Filter nodes by exact recipe category.
    pub fn category(mut self, category: &str) -> Self {
        let category = category.to_string();
        self.filters
            .push(Box::new(move |node| node.recipe.category == category));
        self
    }

    /// Filter nodes by recipe name containing a substring (case-insensitive).
    pub fn name_contains(mut self, substring: &str) -> Self {
        let substring = substring.to_lowercase();
        self.filters.push(Box::new(move |node| {
            node.recipe.name.to_lowercase().contains(&substring)
        }));
        self
    }

    /// Filter nodes whose recipe produces `item`.
    pub fn produces(mut self, item: &str) -> Self {
        let item = item.to_string();
        self.filters
            .push(Box::new(move |node| node.recipe.produces(&item)));
        self
    }

    /// Filter nodes whose recipe consumes `item`.
    pub fn consumes(mut self, item: &str) -> Self {
        let item = item.to_string();
        self.filters
            .push(Box::new(move |node| node.recipe.consumes(&item)));
        self
    }

    /// Only nodes bound to custom recipes.
    pub fn custom_only(mut self) -> Self {
        self.filters.push(Box::new(|node| node.is_custom));
        self
    }

    /// Only nodes bound to catalog recipes.
    pub fn catalog_only(mut self) -> Self {
        self.filters.push(Box::new(|node| !node.is_custom));
        self
    }

    /// Filter nodes using a custom predicate function.
    pub fn custom<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&RecipeNode) -> bool + 'static,
    {
        self.filters.push(Box::new(predicate));
        self
    }

    /// Limit the number of results returned.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit_value = Some(n);
        self
    }

    /// Execute the query and return matching node IDs.
    pub fn execute(&self) -> Vec<NodeId> {
        let limit = self.limit_value.unwrap_or(usize::MAX);
        self.matching().take(limit).map(|node| node.id).collect()
    }

    /// Count the number of matching nodes without allocating a result vector.
    pub fn count(&self) -> usize {
        let limit = self.limit_value.unwrap_or(usize::MAX);
        self.matching().take(limit).count()
    }

    /// Check if any nodes match the query (short-circuits on first match).
    pub fn exists(&self) -> bool {
        self.matching().next().is_some()
    }

    fn matching(&self) -> impl Iterator<Item = &'a RecipeNode> + '_ {
        self.graph
            .nodes()
            .filter(move |node| self.filters.iter().all(|filter| filter(*node)))
    }
}
