//! Unit tests for catalog loading and lookups.

use crate::common::{fixture_path, sample_catalog};
use recipegraph::{Catalog, GraphError};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_sample_catalog() {
    let catalog = sample_catalog();

    assert_eq!(catalog.categories().len(), 3);
    assert_eq!(catalog.icons().len(), 3);
    assert_eq!(catalog.items().len(), 9);
    assert_eq!(catalog.recipes().len(), 9);
    assert_eq!(catalog.version()["base"], "2.0.28");
}

#[test]
fn test_item_fields_and_defaults() {
    let catalog = sample_catalog();

    let plate = catalog.find_item("iron-plate").unwrap();
    assert_eq!(plate.stack, Some(100));
    assert_eq!(plate.row, 1);
    assert_eq!(plate.icon_id.as_deref(), Some("iron-plate"));

    let oil = catalog.find_item("crude-oil").unwrap();
    assert_eq!(oil.stack, None);
    assert_eq!(oil.row, 0);
    assert_eq!(oil.icon_id, None);
}

#[test]
fn test_recipe_fields() {
    let catalog = sample_catalog();

    let plate = catalog.find_recipe("iron-plate").unwrap();
    assert_eq!(plate.time, 3.2);
    assert_eq!(plate.ingredients.get("iron-ore"), Some(&1.0));
    assert_eq!(plate.products.get("iron-plate"), Some(&1.0));
    assert_eq!(plate.producers, vec!["stone-furnace", "steel-furnace"]);

    let belt = catalog.find_recipe("transport-belt").unwrap();
    assert_eq!(belt.ingredients.len(), 2);
    assert_eq!(belt.product_rate("transport-belt"), Some(4.0));
}

#[test]
fn test_lookup_miss_is_none() {
    let catalog = sample_catalog();
    assert!(catalog.find_recipe("rocket-part").is_none());
    assert!(catalog.find_item("rocket-part").is_none());
    assert!(catalog.find_category("space").is_none());
    assert!(catalog.find_icon("space").is_none());
}

#[test]
fn test_categories_and_icons() {
    let catalog = sample_catalog();

    let logistics = catalog.find_category("logistics").unwrap();
    assert_eq!(logistics.icon.as_deref(), Some("logistics"));
    assert_eq!(catalog.find_category("production").unwrap().icon, None);

    let icon = catalog.find_icon("iron-plate").unwrap();
    assert_eq!(icon.x().unwrap(), 32.0);
    assert_eq!(icon.y().unwrap(), 64.0);
}

#[test]
fn test_load_from_temp_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"items": [{{"id": "a", "name": "A", "category": "c"}}]}}"#
    )
    .unwrap();

    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog.items().len(), 1);
    assert!(catalog.recipes().is_empty());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Catalog::load(dir.path().join("missing.json"));
    assert!(matches!(result, Err(GraphError::Io { .. })));
}

#[test]
fn test_malformed_document_is_format_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{\"recipes\": [").unwrap();

    let result = Catalog::load(file.path());
    assert!(matches!(result, Err(GraphError::Format { .. })));
}

#[test]
fn test_malformed_icon_fails_load() {
    let text = std::fs::read_to_string(fixture_path())
        .unwrap()
        .replace("-32px -64px", "-32px");
    let result = Catalog::from_json_str(&text);
    assert!(matches!(
        result,
        Err(GraphError::InvalidIconPosition { ref icon_id, .. }) if icon_id == "iron-plate"
    ));
}
