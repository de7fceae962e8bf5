//! Integration tests for pattern expansion
//!
//! Tests optional segments, alternation, variations, and error isolation.

use itemalias_foundation::{DataRange, ErrorKind, ItemData, ItemType};
use itemalias_pattern::{Expander, VariationSet, Variations, expand, parse_pattern};

fn wool() -> ItemType {
    ItemType::from_entries([ItemData::material(35)])
}

fn names(source: &str, variations: &Variations) -> Vec<String> {
    expand(&parse_pattern(source).unwrap(), &wool(), variations)
        .bindings
        .into_keys()
        .collect()
}

fn colors() -> Variations {
    Variations::new().with(
        "color",
        VariationSet::new()
            .with("{default}", ItemType::from_entries([ItemData::wildcard()]))
            .with("red ", ItemType::from_entries([ItemData::data(DataRange::exact(14))]))
            .with("blue ", ItemType::from_entries([ItemData::data(DataRange::exact(11))])),
    )
}

// =============================================================================
// Structure
// =============================================================================

#[test]
fn optional_and_alternation_combine() {
    assert_eq!(
        names("[light ](red|blue) wool", &Variations::new()),
        vec!["blue wool", "light blue wool", "light red wool", "red wool"]
    );
}

#[test]
fn empty_alternative_is_allowed() {
    assert_eq!(names("(big |)wool", &Variations::new()), vec!["big wool", "wool"]);
}

#[test]
fn malformed_alternative_discards_only_its_branch() {
    let e = expand(
        &parse_pattern("(oak|birch{) log").unwrap(),
        &wool(),
        &Variations::new(),
    );
    assert_eq!(e.bindings.keys().collect::<Vec<_>>(), vec!["oak log"]);
    assert_eq!(e.errors.len(), 1);
    assert!(matches!(e.errors[0].kind, ErrorKind::MalformedPattern { .. }));
}

#[test]
fn single_alternative_discards_only_its_branch() {
    let e = expand(
        &parse_pattern("wool[ (block)]").unwrap(),
        &wool(),
        &Variations::new(),
    );
    assert_eq!(e.bindings.keys().collect::<Vec<_>>(), vec!["wool"]);
    assert_eq!(e.errors.len(), 1);
    assert!(e.errors[0].to_string().contains("(block)"));
}

// =============================================================================
// Variations
// =============================================================================

#[test]
fn default_entry_replaces_implicit_default() {
    assert_eq!(
        names("{color}wool", &colors()),
        vec!["blue wool", "red wool", "wool"]
    );
}

#[test]
fn variation_values_narrow_the_binding() {
    let e = expand(&parse_pattern("{color}wool").unwrap(), &wool(), &colors());
    assert_eq!(
        e.bindings["blue wool"].entries(),
        &[ItemData::new(35, DataRange::exact(11))]
    );
    assert_eq!(e.bindings["wool"].entries(), &[ItemData::material(35)]);
}

#[test]
fn variation_keys_are_substituted_literally() {
    let plain = ItemType::from_entries([ItemData::wildcard()]);
    let trailing = Variations::new().with(
        "color",
        VariationSet::new()
            .with("{default}", plain.clone())
            .with("red", plain.clone()),
    );
    assert_eq!(names("wool{color}", &trailing), vec!["wool", "woolred"]);

    let leading = Variations::new().with(
        "color",
        VariationSet::new()
            .with("{default}", plain.clone())
            .with("red ", plain),
    );
    assert_eq!(names("{color}wool", &leading), vec!["red wool", "wool"]);
}

#[test]
fn variation_keys_are_patterns() {
    let vars = Variations::new().with(
        "color",
        VariationSet::new()
            .with("(light|pale) blue ", ItemType::from_entries([ItemData::data(DataRange::exact(3))]))
            .with("[dark ]gray ", ItemType::from_entries([ItemData::data(DataRange::exact(7))])),
    );
    let e = expand(&parse_pattern("{color}wool").unwrap(), &wool(), &vars);
    assert_eq!(
        e.bindings.keys().collect::<Vec<_>>(),
        vec!["dark gray wool", "gray wool", "light blue wool", "pale blue wool", "wool"]
    );
    assert_eq!(
        e.bindings["light blue wool"].entries(),
        &[ItemData::new(35, DataRange::exact(3))]
    );
    assert!(e.errors.is_empty());
}

#[test]
fn two_variations_expand_independently() {
    let vars = colors().with(
        "size",
        VariationSet::new().with(" slab", ItemType::from_entries([ItemData::wildcard()])),
    );
    let got = names("{color}wool{size}", &vars);
    assert_eq!(got.len(), 6);
    assert!(got.contains(&"red wool slab".to_string()));
    assert!(got.contains(&"wool".to_string()));
}

#[test]
fn unknown_variation_is_a_grammar_error() {
    let e = expand(
        &parse_pattern("[{missing}]wool").unwrap(),
        &wool(),
        &Variations::new(),
    );
    assert_eq!(e.bindings.keys().collect::<Vec<_>>(), vec!["wool"]);
    assert!(matches!(&e.errors[0].kind, ErrorKind::UnknownVariation(tag) if tag == "missing"));
}

#[test]
fn binding_limit_is_reported_once() {
    let e = Expander::new(&Variations::new())
        .with_max_bindings(2)
        .expand(&parse_pattern("[a][b][c][d]x").unwrap(), &wool());
    assert_eq!(e.len(), 2);
    assert_eq!(e.errors.len(), 1);
}
