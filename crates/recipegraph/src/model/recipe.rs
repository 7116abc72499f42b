use std::collections::BTreeMap;

/// Item identifier to quantity.
pub type Quantities = BTreeMap<String, f64>;

/// Default processing time in seconds.
pub const DEFAULT_TIME: f64 = 1.0;

/// A transformation consuming ingredient items over a time cost and
/// producing product items.
///
/// Ingredient and product keys are item identifiers. They are not checked
/// against the catalog; a dangling key simply never matches anything when
/// the graph is connected.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Category tag
    pub category: String,
    /// Display row within the category
    pub row: u32,
    /// Processing time in seconds
    pub time: f64,
    /// Required items per craft
    pub ingredients: Quantities,
    /// Produced items per craft
    pub products: Quantities,
    /// Machines that can run the recipe (descriptive only)
    pub producers: Vec<String>,
}

impl Recipe {
    /// Create a recipe with no ingredients, products or producers.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            row: 0,
            time: DEFAULT_TIME,
            ingredients: Quantities::new(),
            products: Quantities::new(),
            producers: Vec::new(),
        }
    }

    /// Add an ingredient.
    pub fn with_ingredient(mut self, item: impl Into<String>, quantity: f64) -> Self {
        self.ingredients.insert(item.into(), quantity);
        self
    }

    /// Add a product.
    pub fn with_product(mut self, item: impl Into<String>, quantity: f64) -> Self {
        self.products.insert(item.into(), quantity);
        self
    }

    /// Set the processing time.
    pub fn with_time(mut self, time: f64) -> Self {
        self.time = time;
        self
    }

    /// Add a machine that can run this recipe.
    pub fn with_producer(mut self, producer: impl Into<String>) -> Self {
        self.producers.push(producer.into());
        self
    }

    /// Whether `item` is one of the ingredients.
    pub fn consumes(&self, item: &str) -> bool {
        self.ingredients.contains_key(item)
    }

    /// Whether `item` is one of the products.
    pub fn produces(&self, item: &str) -> bool {
        self.products.contains_key(item)
    }

    /// Whether any product of `self` is an ingredient of `other`.
    ///
    /// This is the producer/consumer relation the graph is built on.
    pub fn feeds(&self, other: &Recipe) -> bool {
        self.products.keys().any(|item| other.consumes(item))
    }

    /// Items per second of `item` consumed by one machine, if it is an ingredient.
    pub fn ingredient_rate(&self, item: &str) -> Option<f64> {
        self.ingredients.get(item).map(|qty| qty / self.time)
    }

    /// Items per second of `item` produced by one machine, if it is a product.
    pub fn product_rate(&self, item: &str) -> Option<f64> {
        self.products.get(item).map(|qty| qty / self.time)
    }
}
