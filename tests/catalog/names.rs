//! Integration tests for material names
//!
//! Tests resolution of ids and data values back to display names.

use std::sync::Arc;

use itemalias_catalog::{ANYTHING_NAME, AliasCatalog, CatalogConfig};
use itemalias_foundation::RecordingSink;
use itemalias_pattern::Variations;

use crate::host;

#[test]
fn first_alias_names_the_material() {
    let mut catalog = crate::catalog();
    catalog.register_aliases("log", "17", &Variations::new());
    catalog.register_aliases("wood log", "17", &Variations::new());
    assert_eq!(catalog.resolve_name(17, -1, -1), "log");
}

#[test]
fn zero_zero_is_default_unless_registered() {
    let mut catalog = crate::catalog();
    catalog.register_aliases("wool", "35", &Variations::new());
    assert_eq!(catalog.resolve_name(35, 0, 0), "wool");
    catalog.register_aliases("white wool", "35:0", &Variations::new());
    assert_eq!(catalog.resolve_name(35, 0, 0), "white wool");
}

#[test]
fn variant_before_default_keeps_placeholder_until_named() {
    let mut catalog = crate::catalog();
    catalog.register_aliases("red wool", "35:14", &Variations::new());
    assert_eq!(catalog.resolve_name(35, -1, -1), "35");
    catalog.register_aliases("wool", "35", &Variations::new());
    assert_eq!(catalog.resolve_name(35, -1, -1), "wool");
    assert_eq!(catalog.resolve_name_single(35, 14), "red wool");
}

#[test]
fn multi_entry_values_do_not_name() {
    let mut catalog = crate::catalog();
    catalog.register_aliases("log", "17, 162", &Variations::new());
    assert_eq!(catalog.resolve_name(17, -1, -1), "17");
}

#[test]
fn ranges_are_spelled_out() {
    let mut catalog = crate::catalog();
    catalog.register_aliases("wool", "35", &Variations::new());
    catalog.register_aliases("stick", "280", &Variations::new());
    assert_eq!(catalog.resolve_name(35, 2, 4), "wool:2-4");
    assert_eq!(catalog.resolve_name(35, -1, 9), "wool:0-9");
    assert_eq!(catalog.resolve_name(35, 3, -1), "wool:3-15");
    assert_eq!(catalog.resolve_name(280, 3, -1), "stick:3-32767");
    assert_eq!(catalog.resolve_name_single(35, 7), "wool:7");
}

#[test]
fn unknown_id_is_numeric() {
    assert_eq!(crate::catalog().resolve_name(999, -1, -1), "999");
}

#[test]
fn fill_missing_names_everything_else() {
    let sink = Arc::new(RecordingSink::new());
    let mut catalog = AliasCatalog::new(host()).with_sink(sink.clone());
    catalog.register_aliases("stone", "1", &Variations::new());
    catalog.register_aliases("wool", "35", &Variations::new());
    assert_eq!(catalog.fill_missing_material_names(), 7);
    assert_eq!(catalog.resolve_name(64, -1, -1), "wooden door");
    assert_eq!(catalog.resolve_name(162, -1, -1), "log 2");
    assert_eq!(catalog.resolve_name(-1, -1, -1), ANYTHING_NAME);
    assert_eq!(
        sink.warnings(),
        vec![
            "There are no aliases defined for the following ids: 5, 17, 64, 162, 280, 324, <any>"
                .to_string()
        ]
    );
}

#[test]
fn fill_missing_keeps_anything_alias() {
    let sink = Arc::new(RecordingSink::new());
    let mut catalog = AliasCatalog::new(host())
        .with_sink(sink.clone())
        .with_config(CatalogConfig::quiet());
    catalog.register_aliases("anything", "*", &Variations::new());
    catalog.fill_missing_material_names();
    assert_eq!(catalog.resolve_name(-1, -1, -1), "anything");
    assert!(sink.warnings().is_empty());
}
