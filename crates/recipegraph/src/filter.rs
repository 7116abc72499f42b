//! Exclusion predicates applied when populating the graph from the catalog.

use crate::config::ExclusionRules;
use crate::model::Recipe;

/// A predicate that, when true, keeps a recipe out of the graph.
type ExcludeFn = Box<dyn Fn(&Recipe) -> bool>;

/// Composable exclusion filter for catalog recipes.
///
/// A recipe is excluded if *any* rule matches. Substring rules are
/// case-insensitive.
///
/// ```
/// use recipegraph::{Recipe, RecipeFilter};
///
/// let filter = RecipeFilter::new()
///     .name_contains("barrel")
///     .custom(|recipe| recipe.products.is_empty());
///
/// let fill = Recipe::new("fill-water-barrel", "Fill Water Barrel", "barreling")
///     .with_product("water-barrel", 1.0);
/// assert!(filter.excludes(&fill));
/// ```
pub struct RecipeFilter {
    rules: Vec<ExcludeFn>,
}

impl Default for RecipeFilter {
    /// The standard exclusions: anything tagged or named "recycling" and
    /// anything named with "barrel".
    fn default() -> Self {
        Self::from_rules(&ExclusionRules::default())
    }
}

impl std::fmt::Debug for RecipeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeFilter")
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl RecipeFilter {
    /// A filter that excludes nothing.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Build a filter from configured substring rules.
    pub fn from_rules(rules: &ExclusionRules) -> Self {
        let filter = rules
            .category_contains
            .iter()
            .fold(Self::new(), |f, s| f.category_contains(s));
        rules
            .name_contains
            .iter()
            .fold(filter, |f, s| f.name_contains(s))
    }

    /// Exclude recipes whose category contains `substring`.
    pub fn category_contains(mut self, substring: &str) -> Self {
        let substring = substring.to_lowercase();
        self.rules
            .push(Box::new(move |recipe| recipe.category.to_lowercase().contains(&substring)));
        self
    }

    /// Exclude recipes whose name contains `substring`.
    pub fn name_contains(mut self, substring: &str) -> Self {
        let substring = substring.to_lowercase();
        self.rules
            .push(Box::new(move |recipe| recipe.name.to_lowercase().contains(&substring)));
        self
    }

    /// Exclude recipes matching a custom predicate.
    pub fn custom<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Recipe) -> bool + 'static,
    {
        self.rules.push(Box::new(predicate));
        self
    }

    /// Whether any rule matches `recipe`.
    pub fn excludes(&self, recipe: &Recipe) -> bool {
        self.rules.iter().any(|rule| rule(recipe))
    }

    /// Whether no rule matches `recipe`.
    pub fn accepts(&self, recipe: &Recipe) -> bool {
        !self.excludes(recipe)
    }
}
