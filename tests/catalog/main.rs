//! Integration tests for Layer 2: Catalog
//!
//! Tests for alias registration, item type expressions, and material names.

mod expressions;
mod names;

use itemalias_catalog::AliasCatalog;
use itemalias_foundation::StaticCatalog;

/// A small host with a few blocks and items.
pub fn host() -> StaticCatalog {
    StaticCatalog::new(255)
        .with_material(1, "STONE")
        .with_material(5, "WOOD")
        .with_material(17, "LOG")
        .with_material(35, "WOOL")
        .with_material(64, "WOODEN_DOOR")
        .with_material(162, "LOG_2")
        .with_material(280, "STICK")
        .with_material(324, "WOOD_DOOR")
}

/// An empty catalog over [`host`].
pub fn catalog() -> AliasCatalog<StaticCatalog> {
    AliasCatalog::new(host())
}
