//! The immutable reference catalog of categories, icons, items and recipes.
//!
//! The catalog is parsed once from the game's data document and is read-only
//! afterwards. Lookups scan in source order and return the first match.

use crate::error::{GraphError, Result};
use crate::model::{Category, Icon, Item, Quantities, Recipe, DEFAULT_TIME};
use log::{debug, info};
use serde::Deserialize;
use std::path::Path;

/// Top-level shape of the data document. Every section is optional.
#[derive(Debug, Deserialize)]
struct CatalogData {
    #[serde(default)]
    version: serde_json::Value,
    #[serde(default)]
    categories: Vec<CategoryData>,
    #[serde(default)]
    icons: Vec<IconData>,
    #[serde(default)]
    items: Vec<ItemData>,
    #[serde(default)]
    recipes: Vec<RecipeData>,
}

#[derive(Debug, Deserialize)]
struct CategoryData {
    id: String,
    name: String,
    #[serde(default)]
    icon: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IconData {
    id: String,
    position: String,
    color: String,
}

#[derive(Debug, Deserialize)]
struct ItemData {
    id: String,
    name: String,
    category: String,
    #[serde(default)]
    stack: Option<u32>,
    #[serde(default)]
    row: u32,
    #[serde(default, alias = "iconId")]
    icon: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RecipeData {
    id: String,
    name: String,
    category: String,
    #[serde(default)]
    row: u32,
    #[serde(default = "default_time")]
    time: f64,
    #[serde(default, rename = "in")]
    ingredients: Quantities,
    #[serde(default, rename = "out")]
    products: Quantities,
    #[serde(default)]
    producers: Vec<String>,
}

fn default_time() -> f64 {
    DEFAULT_TIME
}

impl From<CategoryData> for Category {
    fn from(data: CategoryData) -> Self {
        Category {
            id: data.id,
            name: data.name,
            icon: data.icon,
        }
    }
}

impl From<IconData> for Icon {
    fn from(data: IconData) -> Self {
        Icon::new(data.id, data.position, data.color)
    }
}

impl From<ItemData> for Item {
    fn from(data: ItemData) -> Self {
        Item {
            id: data.id,
            name: data.name,
            category: data.category,
            stack: data.stack,
            row: data.row,
            icon_id: data.icon,
        }
    }
}

impl From<RecipeData> for Recipe {
    fn from(data: RecipeData) -> Self {
        Recipe {
            id: data.id,
            name: data.name,
            category: data.category,
            row: data.row,
            time: data.time,
            ingredients: data.ingredients,
            products: data.products,
            producers: data.producers,
        }
    }
}

/// Reference collections loaded from the game's data set.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    version: serde_json::Value,
    categories: Vec<Category>,
    icons: Vec<Icon>,
    items: Vec<Item>,
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Build a catalog from already-constructed collections.
    pub fn new(
        categories: Vec<Category>,
        icons: Vec<Icon>,
        items: Vec<Item>,
        recipes: Vec<Recipe>,
    ) -> Self {
        Self {
            version: serde_json::Value::Null,
            categories,
            icons,
            items,
            recipes,
        }
    }

    /// Load and parse the data document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Io`] if the file cannot be read,
    /// [`GraphError::Format`] if the document is malformed, and
    /// [`GraphError::InvalidIconPosition`] if any icon position is malformed.
    /// Nothing is loaded partially.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading catalog from {path:?}");
        let text = std::fs::read_to_string(path).map_err(|e| GraphError::io(path, e))?;
        Self::from_json_str(&text)
    }

    /// Parse a catalog from the text of a data document.
    ///
    /// # Errors
    ///
    /// Same as [`Catalog::load`], minus I/O.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let data: CatalogData = serde_json::from_str(text)
            .map_err(|e| GraphError::format("Malformed catalog document", Some(e)))?;

        let icons: Vec<Icon> = data.icons.into_iter().map(Icon::from).collect();
        for icon in &icons {
            icon.coordinates()?;
        }
        debug!("Validated {} icon positions", icons.len());

        let catalog = Self {
            version: data.version,
            categories: data.categories.into_iter().map(Category::from).collect(),
            icons,
            items: data.items.into_iter().map(Item::from).collect(),
            recipes: data.recipes.into_iter().map(Recipe::from).collect(),
        };

        info!(
            "Loaded {} items and {} recipes.",
            catalog.items.len(),
            catalog.recipes.len()
        );
        Ok(catalog)
    }

    /// Opaque version block of the source document (`Null` if absent).
    pub fn version(&self) -> &serde_json::Value {
        &self.version
    }

    /// All categories in source order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All icons in source order.
    pub fn icons(&self) -> &[Icon] {
        &self.icons
    }

    /// All items in source order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// All recipes in source order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// First recipe with the given identifier.
    pub fn find_recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// First item with the given identifier.
    pub fn find_item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// First category with the given identifier.
    pub fn find_category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// First icon with the given identifier.
    pub fn find_icon(&self, id: &str) -> Option<&Icon> {
        self.icons.iter().find(|i| i.id == id)
    }
}
