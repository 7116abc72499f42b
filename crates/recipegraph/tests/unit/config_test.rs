//! Unit tests for planner configuration and recipe filters.

use recipegraph::{ExclusionRules, GraphError, PlannerConfig, Recipe, RecipeFilter};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"exclusions": {{"category_contains": ["fluid"], "name_contains": []}}}}"#
    )
    .unwrap();

    let config = PlannerConfig::load(file.path()).unwrap();
    assert_eq!(config.exclusions.category_contains, vec!["fluid"]);
    assert!(config.exclusions.name_contains.is_empty());
    assert!(config.allow_self_loops);
}

#[test]
fn test_bad_config_is_format_error() {
    let result = PlannerConfig::from_json_str(r#"{"allow_self_loops": "sometimes"}"#);
    assert!(matches!(result, Err(GraphError::Format { .. })));
}

#[test]
fn test_filter_from_rules() {
    let rules = ExclusionRules {
        category_contains: vec!["Fluid".to_string()],
        name_contains: vec!["pump".to_string()],
    };
    let filter = RecipeFilter::from_rules(&rules);

    assert!(filter.excludes(&Recipe::new("a", "Oil", "fluid-handling")));
    assert!(filter.excludes(&Recipe::new("b", "Offshore Pump", "production")));
    assert!(filter.accepts(&Recipe::new("c", "Oil barrel", "intermediate")));
}

#[test]
fn test_default_filter_matches_default_rules() {
    let recycling = Recipe::new("x", "Gear recycling", "recycling");
    let barrel = Recipe::new("y", "Empty Water Barrel", "barreling");
    let plain = Recipe::new("z", "Iron gear wheel", "intermediate-products");

    for filter in [RecipeFilter::default(), RecipeFilter::from_rules(&ExclusionRules::default())] {
        assert!(filter.excludes(&recycling));
        assert!(filter.excludes(&barrel));
        assert!(filter.accepts(&plain));
    }
}
