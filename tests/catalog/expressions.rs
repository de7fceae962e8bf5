//! Integration tests for item type expressions
//!
//! Tests quantity prefixes, id and alias clauses, plural handling, and
//! script-local aliases.

use std::sync::Arc;

use itemalias_catalog::{AliasCatalog, AliasRegistry, CatalogConfig};
use itemalias_foundation::{
    DataRange, ErrorKind, ItemData, ItemType, RecordingSink, StaticCatalog,
};
use itemalias_pattern::{VariationSet, Variations};

use crate::host;

fn loaded() -> (AliasCatalog<StaticCatalog>, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let mut catalog = AliasCatalog::new(host()).with_sink(sink.clone());
    let colors = Variations::new().with(
        "color",
        VariationSet::new()
            .with("white ", ItemType::from_entries([ItemData::data(DataRange::exact(0))]))
            .with("red ", ItemType::from_entries([ItemData::data(DataRange::exact(14))])),
    );
    catalog.register_aliases("{color}wool", "35", &colors);
    catalog.register_aliases("log", "17, 162", &Variations::new());
    catalog.register_aliases("[oak ]plank", "5", &Variations::new());
    catalog.register_aliases("door", "64, 324", &Variations::new());
    catalog.register_aliases("stick", "280", &Variations::new());
    sink.clear();
    (catalog, sink)
}

// =============================================================================
// Quantities
// =============================================================================

#[test]
fn amount_of_every() {
    let (catalog, _) = loaded();
    let item = catalog.parse_expression("2 of every red wool").unwrap();
    assert_eq!(item.amount, 2);
    assert!(item.match_all);
    assert_eq!(item.entries(), catalog.alias("red wool").unwrap().entries());
}

#[test]
fn plain_amounts() {
    let (catalog, _) = loaded();
    assert_eq!(catalog.parse_expression("5 sticks").unwrap().amount, 5);
    assert_eq!(catalog.parse_expression("5 of sticks").unwrap().amount, 5);
    let item = catalog.parse_expression("an oak plank").unwrap();
    assert_eq!(item.amount, 1);
    assert!(!item.match_all);
}

#[test]
fn all_and_every() {
    let (catalog, _) = loaded();
    for s in ["all logs", "every log", "ALL LOGS"] {
        let item = catalog.parse_expression(s).unwrap();
        assert!(item.match_all, "{s}");
        assert_eq!(item.len(), 2, "{s}");
    }
}

#[test]
fn amount_overflow() {
    let (catalog, _) = loaded();
    let err = catalog.parse_expression("3000000000 logs").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidAmount(_)));
}

// =============================================================================
// Clauses
// =============================================================================

#[test]
fn numeric_id_with_data() {
    let (catalog, _) = loaded();
    let item = catalog.parse_expression("17:2").unwrap();
    assert_eq!(item.entries(), &[ItemData::new(17, DataRange::exact(2))]);
}

#[test]
fn alias_with_data_range() {
    let (catalog, _) = loaded();
    let item = catalog.parse_expression("log:1-2").unwrap();
    assert_eq!(
        item.entries(),
        &[
            ItemData::new(17, DataRange::new(1, 2)),
            ItemData::new(162, DataRange::new(1, 2)),
        ]
    );
}

#[test]
fn data_only_clause() {
    let (catalog, _) = loaded();
    let item = catalog.parse_alias_value(":3-").unwrap();
    assert_eq!(item.entries(), &[ItemData::data(DataRange::new(3, DataRange::OPEN))]);
}

#[test]
fn composite_expression_is_rejected() {
    let (catalog, _) = loaded();
    let err = catalog.parse_expression("log and stick").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::CompositeExpression(_)));
    assert!(catalog.parse_alias_value("17, 280").is_ok());
}

#[test]
fn unknown_alias() {
    let (catalog, _) = loaded();
    let err = catalog.parse_expression("2 unicorns").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnresolvedType(_)));
}

// =============================================================================
// Plurals and forms
// =============================================================================

#[test]
fn plural_mismatch_warns() {
    let (catalog, sink) = loaded();
    catalog.parse_expression("1 sticks").unwrap();
    assert_eq!(
        sink.warnings(),
        vec!["Possible invalid plural detected in 'sticks'".to_string()]
    );
    // Exact alias names are never checked.
    sink.clear();
    catalog.parse_expression("3 stick").unwrap();
    assert!(sink.warnings().is_empty());
}

#[test]
fn unprefixed_plurals_are_accepted_silently() {
    let (mut catalog, sink) = loaded();
    assert_eq!(catalog.parse_expression("sticks").unwrap().entries(), &[ItemData::material(280)]);
    assert!(sink.warnings().is_empty());

    assert_eq!(catalog.register_aliases("kindling", "sticks", &Variations::new()), 1);
    assert_eq!(catalog.alias("kindling").unwrap().entries(), &[ItemData::material(280)]);
    assert!(sink.warnings().is_empty());
}

#[test]
fn quiet_config_has_no_plural_warnings() {
    let (catalog, sink) = loaded();
    let catalog = catalog.with_config(CatalogConfig::quiet());
    catalog.parse_expression("1 sticks").unwrap();
    assert!(sink.warnings().is_empty());
}

#[test]
fn block_and_item_suffixes() {
    let (catalog, _) = loaded();
    assert_eq!(
        catalog.parse_expression("door block").unwrap().entries(),
        &[ItemData::material(64)]
    );
    assert_eq!(
        catalog.parse_expression("2 door items").unwrap().entries(),
        &[ItemData::material(324)]
    );
    assert!(catalog.parse_expression("stick block").is_err());
}

#[test]
fn linked_forms_travel_with_expressions() {
    let (mut catalog, _) = loaded();
    catalog.register_aliases("door block", "64", &Variations::new());
    let item = catalog.parse_expression("a door").unwrap();
    assert_eq!(
        item.block_form().map(ItemType::entries),
        Some(&[ItemData::material(64)][..])
    );
}

#[test]
fn local_aliases_come_first() {
    let (catalog, _) = loaded();
    let mut local = AliasRegistry::new();
    local
        .register("stick", ItemType::from_entries([ItemData::material(1)]))
        .unwrap();
    local
        .register("pebble", ItemType::from_entries([ItemData::material(1)]))
        .unwrap();
    let item = catalog.parse_expression_with(&local, "stick").unwrap();
    assert_eq!(item.entries(), &[ItemData::material(1)]);
    assert!(catalog.parse_expression_with(&local, "3 pebbles").is_ok());
    assert!(catalog.parse_expression("pebble").is_err());
}
