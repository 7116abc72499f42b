//! The planning session: catalog, working graph and custom entities.

use crate::catalog::Catalog;
use crate::config::PlannerConfig;
use crate::error::{GraphError, Result};
use crate::filter::RecipeFilter;
use crate::graph::{ConnectMode, NodeId, RecipeGraph};
use crate::model::{Item, Recipe};
use log::{debug, info};

/// Owner of one working set.
///
/// The catalog is read-only. Everything else (the graph, custom items and
/// custom recipes) is the working set that sessions save and restore.
///
/// # Example
///
/// ```
/// use recipegraph::{Catalog, Planner, Recipe};
///
/// let catalog = Catalog::new(
///     vec![],
///     vec![],
///     vec![],
///     vec![
///         Recipe::new("iron-plate", "Iron plate", "smelting")
///             .with_ingredient("iron-ore", 1.0)
///             .with_product("iron-plate", 1.0),
///         Recipe::new("iron-gear-wheel", "Iron gear wheel", "intermediate-products")
///             .with_ingredient("iron-plate", 2.0)
///             .with_product("iron-gear-wheel", 1.0),
///     ],
/// );
///
/// let mut planner = Planner::new(catalog);
/// assert_eq!(planner.populate_from_catalog(), 2);
/// assert_eq!(planner.graph().edge_count(), 1);
/// ```
#[derive(Debug)]
pub struct Planner {
    catalog: Catalog,
    config: PlannerConfig,
    graph: RecipeGraph,
    custom_items: Vec<Item>,
    custom_recipes: Vec<Recipe>,
}

impl Planner {
    /// Create an empty working set over `catalog` with the default config.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, PlannerConfig::default())
    }

    /// Create an empty working set over `catalog`.
    pub fn with_config(catalog: Catalog, config: PlannerConfig) -> Self {
        let mut graph = RecipeGraph::new();
        graph.set_allow_self_loops(config.allow_self_loops);
        Self {
            catalog,
            config,
            graph,
            custom_items: Vec::new(),
            custom_recipes: Vec::new(),
        }
    }

    /// The reference catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// The working graph.
    pub fn graph(&self) -> &RecipeGraph {
        &self.graph
    }

    /// User-authored items.
    pub fn custom_items(&self) -> &[Item] {
        &self.custom_items
    }

    /// User-authored recipes.
    pub fn custom_recipes(&self) -> &[Recipe] {
        &self.custom_recipes
    }

    /// Add every catalog recipe the configured exclusions let through, then
    /// connect the whole graph in one bulk pass.
    ///
    /// # Returns
    ///
    /// The number of nodes added.
    pub fn populate_from_catalog(&mut self) -> usize {
        let filter = RecipeFilter::from_rules(&self.config.exclusions);
        self.populate_with_filter(&filter)
    }

    /// Like [`Planner::populate_from_catalog`] with an explicit filter.
    pub fn populate_with_filter(&mut self, filter: &RecipeFilter) -> usize {
        info!("Populating recipes...");
        let mut count = 0;
        for recipe in self.catalog.recipes() {
            if filter.excludes(recipe) {
                debug!("Excluding recipe {}", recipe.id);
                continue;
            }
            self.graph.add_node(recipe.clone(), false, ConnectMode::None);
            count += 1;
        }

        info!("Added {count} nodes. Connecting...");
        self.graph.bulk_connect();
        info!(
            "Graph has {} nodes and {} edges.",
            self.graph.node_count(),
            self.graph.edge_count()
        );
        count
    }

    /// Instantiate the catalog recipe `recipe_id` as a new node.
    ///
    /// The node's custom flag follows from which list the recipe came from.
    ///
    /// Returns `None` if the catalog has no such recipe.
    pub fn add_catalog_node(&mut self, recipe_id: &str, mode: ConnectMode) -> Option<NodeId> {
        let recipe = self.catalog.find_recipe(recipe_id)?.clone();
        Some(self.graph.add_node(recipe, false, mode))
    }

    /// Instantiate the custom recipe `recipe_id` as a new node.
    ///
    /// Returns `None` if there is no such custom recipe.
    pub fn add_custom_node(&mut self, recipe_id: &str, mode: ConnectMode) -> Option<NodeId> {
        let recipe = self.find_custom_recipe(recipe_id)?.clone();
        Some(self.graph.add_node(recipe, true, mode))
    }

    /// Register a user-authored item.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidOperation`] if the id is already used by
    /// a catalog or custom item.
    pub fn add_custom_item(&mut self, item: Item) -> Result<()> {
        if self.resolve_item(&item.id).is_some() {
            return Err(GraphError::InvalidOperation {
                message: format!("Item id '{}' already exists", item.id),
            });
        }
        debug!("Adding custom item {}", item.id);
        self.custom_items.push(item);
        Ok(())
    }

    /// Register a user-authored recipe.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidOperation`] if the id is already used by
    /// a catalog or custom recipe, if `time` is not a positive finite number,
    /// or if any ingredient or product quantity is not.
    pub fn add_custom_recipe(&mut self, recipe: Recipe) -> Result<()> {
        if self.catalog.find_recipe(&recipe.id).is_some() || self.find_custom_recipe(&recipe.id).is_some() {
            return Err(GraphError::InvalidOperation {
                message: format!("Recipe id '{}' already exists", recipe.id),
            });
        }
        check_amounts(&recipe)?;
        debug!("Adding custom recipe {}", recipe.id);
        self.custom_recipes.push(recipe);
        Ok(())
    }

    /// First custom recipe with the given identifier.
    pub fn find_custom_recipe(&self, id: &str) -> Option<&Recipe> {
        self.custom_recipes.iter().find(|r| r.id == id)
    }

    /// First custom item with the given identifier.
    pub fn find_custom_item(&self, id: &str) -> Option<&Item> {
        self.custom_items.iter().find(|i| i.id == id)
    }

    /// Look an item up among custom items, then in the catalog.
    pub fn resolve_item(&self, id: &str) -> Option<&Item> {
        self.find_custom_item(id).or_else(|| self.catalog.find_item(id))
    }

    /// Connect the whole graph in one pass.
    ///
    /// See [`RecipeGraph::bulk_connect`].
    pub fn bulk_connect(&mut self) -> usize {
        self.graph.bulk_connect()
    }

    /// Empty the graph, the node table and both custom lists.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.custom_items.clear();
        self.custom_recipes.clear();
    }

    pub(crate) fn restore_node(&mut self, recipe: Recipe, is_custom: bool) -> NodeId {
        self.graph.add_node(recipe, is_custom, ConnectMode::None)
    }

    pub(crate) fn replace_custom_entities(&mut self, items: Vec<Item>, recipes: Vec<Recipe>) {
        self.custom_items = items;
        self.custom_recipes = recipes;
    }
}

// Session documents carry plain JSON numbers, which cannot hold NaN or infinity.
fn check_amounts(recipe: &Recipe) -> Result<()> {
    let positive = |value: f64| value.is_finite() && value > 0.0;

    if !positive(recipe.time) {
        return Err(GraphError::InvalidOperation {
            message: format!("Recipe '{}' has invalid time {}", recipe.id, recipe.time),
        });
    }
    let quantities = recipe.ingredients.iter().chain(recipe.products.iter());
    for (item, &quantity) in quantities {
        if !positive(quantity) {
            return Err(GraphError::InvalidOperation {
                message: format!(
                    "Recipe '{}' has invalid quantity {} for '{}'",
                    recipe.id, quantity, item
                ),
            });
        }
    }
    Ok(())
}
