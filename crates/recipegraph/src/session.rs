//! Save and restore of a working set.
//!
//! A session document holds the custom items, the custom recipes and one
//! entry per graph node naming the recipe it instantiates. Catalog content is
//! referenced by id, never embedded. Edges are not stored; they are
//! recomputed with a bulk connection pass on import.
//!
//! ```json
//! {
//!   "customItems":   [{"id": "...", "name": "...", "category": "...", "stack": null, "row": 0, "iconId": null}],
//!   "customRecipes": [{"id": "...", "name": "...", "category": "...", "row": 0, "time": 1.0,
//!                      "ingredients": {}, "products": {}, "producers": []}],
//!   "nodes":         [{"id": "<uuid>", "recipeId": "...", "isCustom": false}]
//! }
//! ```

use crate::error::{GraphError, Result};
use crate::model::{Item, Quantities, Recipe};
use crate::planner::Planner;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};

/// Wire form of a working set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDocument {
    /// Every custom item
    #[serde(default)]
    pub custom_items: Vec<ItemRecord>,
    /// Every custom recipe
    #[serde(default)]
    pub custom_recipes: Vec<RecipeRecord>,
    /// One entry per graph node
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
}

/// Wire form of an [`Item`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    /// Item identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Category tag
    pub category: String,
    /// Stack size
    #[serde(default)]
    pub stack: Option<u32>,
    /// Display row
    #[serde(default)]
    pub row: u32,
    /// Icon reference
    #[serde(default)]
    pub icon_id: Option<String>,
}

/// Wire form of a [`Recipe`]. Every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    /// Recipe identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Category tag
    pub category: String,
    /// Display row
    pub row: u32,
    /// Processing time in seconds
    pub time: f64,
    /// Required items per craft
    pub ingredients: Quantities,
    /// Produced items per craft
    pub products: Quantities,
    /// Machines that can run the recipe
    pub producers: Vec<String>,
}

/// One graph node: which recipe it instantiates and where that recipe lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRecord {
    /// Node identifier at export time (informational, not reused)
    #[serde(default)]
    pub id: Option<String>,
    /// Identifier of the recipe
    pub recipe_id: String,
    /// Resolve against the custom recipes (`true`) or the catalog (`false`)
    pub is_custom: bool,
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            category: item.category.clone(),
            stack: item.stack,
            row: item.row,
            icon_id: item.icon_id.clone(),
        }
    }
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item {
            id: record.id,
            name: record.name,
            category: record.category,
            stack: record.stack,
            row: record.row,
            icon_id: record.icon_id,
        }
    }
}

impl From<&Recipe> for RecipeRecord {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            category: recipe.category.clone(),
            row: recipe.row,
            time: recipe.time,
            ingredients: recipe.ingredients.clone(),
            products: recipe.products.clone(),
            producers: recipe.producers.clone(),
        }
    }
}

impl From<RecipeRecord> for Recipe {
    fn from(record: RecipeRecord) -> Self {
        Recipe {
            id: record.id,
            name: record.name,
            category: record.category,
            row: record.row,
            time: record.time,
            ingredients: record.ingredients,
            products: record.products,
            producers: record.producers,
        }
    }
}

impl SessionDocument {
    /// Serialize to JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Serialization`] if encoding fails. Non-finite
    /// numbers do not fail here; they are written as `null` and rejected on
    /// the way back in, which is why [`Planner::add_custom_recipe`] refuses
    /// them.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| GraphError::serialization("Failed to serialize session", Some(e)))
    }

    /// Parse from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Serialization`] if the text is malformed or a
    /// required field is missing.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| GraphError::serialization("Failed to parse session document", Some(e)))
    }
}

/// Outcome of restoring a session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportSummary {
    /// Nodes re-created in the graph
    pub restored_nodes: usize,
    /// Custom items reconstructed
    pub custom_items: usize,
    /// Custom recipes reconstructed
    pub custom_recipes: usize,
    /// Recipe ids of node entries that could not be resolved
    pub skipped: Vec<String>,
    /// Edges after the reconnection pass
    pub edges: usize,
}

impl Planner {
    /// Capture the working set as a session document.
    pub fn export_session(&self) -> SessionDocument {
        SessionDocument {
            custom_items: self.custom_items().iter().map(ItemRecord::from).collect(),
            custom_recipes: self.custom_recipes().iter().map(RecipeRecord::from).collect(),
            nodes: self
                .graph()
                .nodes()
                .map(|node| NodeRecord {
                    id: Some(node.id.to_string()),
                    recipe_id: node.recipe.id.clone(),
                    is_custom: node.is_custom,
                })
                .collect(),
        }
    }

    /// Capture the working set as JSON text.
    ///
    /// # Errors
    ///
    /// See [`SessionDocument::to_json`].
    pub fn export_session_json(&self) -> Result<String> {
        self.export_session().to_json()
    }

    /// Replace the working set with the one described by `document`.
    ///
    /// The current working set is cleared first. Node entries whose recipe
    /// cannot be resolved (custom entries against the reconstructed custom
    /// recipes, the rest against the catalog) are skipped and reported. All
    /// edges are rebuilt with one bulk pass at the end.
    pub fn import_session(&mut self, document: SessionDocument) -> ImportSummary {
        self.clear();

        let items: Vec<Item> = document.custom_items.into_iter().map(Item::from).collect();
        let recipes: Vec<Recipe> = document.custom_recipes.into_iter().map(Recipe::from).collect();
        let mut summary = ImportSummary {
            custom_items: items.len(),
            custom_recipes: recipes.len(),
            ..Default::default()
        };
        self.replace_custom_entities(items, recipes);

        for entry in document.nodes {
            let recipe = if entry.is_custom {
                self.find_custom_recipe(&entry.recipe_id)
            } else {
                self.catalog().find_recipe(&entry.recipe_id)
            };

            match recipe.cloned() {
                Some(recipe) => {
                    self.restore_node(recipe, entry.is_custom);
                    summary.restored_nodes += 1;
                }
                None => {
                    warn!(
                        "Skipping node {}: {} recipe '{}' not found",
                        entry.id.as_deref().unwrap_or("<unnamed>"),
                        if entry.is_custom { "custom" } else { "catalog" },
                        entry.recipe_id
                    );
                    summary.skipped.push(entry.recipe_id);
                }
            }
        }

        self.bulk_connect();
        summary.edges = self.graph().edge_count();
        info!(
            "Imported {} nodes ({} skipped), {} custom items, {} custom recipes; {} edges",
            summary.restored_nodes,
            summary.skipped.len(),
            summary.custom_items,
            summary.custom_recipes,
            summary.edges
        );
        summary
    }

    /// Replace the working set with the one described by JSON `text`.
    ///
    /// The working set is cleared before parsing, so a malformed document
    /// leaves it empty rather than half restored.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Serialization`] if the document is malformed or
    /// misses a required field. The failure is also logged.
    pub fn import_session_json(&mut self, text: &str) -> Result<ImportSummary> {
        self.clear();
        match SessionDocument::from_json(text) {
            Ok(document) => Ok(self.import_session(document)),
            Err(e) => {
                error!("Error importing session: {e}");
                Err(e)
            }
        }
    }
}
