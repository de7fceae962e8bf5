//! The host material catalog.
//!
//! Alias resolution needs to know which numeric ids exist, what the engine
//! calls them, and which of them are blocks. The game host provides that
//! through [`MaterialCatalog`].

use std::collections::BTreeMap;

use crate::item::ItemData;
use crate::plural::english_plural;

/// Read access to the host's material table.
pub trait MaterialCatalog {
    /// Returns every valid material id.
    fn material_ids(&self) -> Vec<i32>;

    /// Returns the engine's canonical name for an id (e.g. `WOOD_STAIRS`).
    fn canonical_name(&self, id: i32) -> Option<&str>;

    /// The highest id that denotes a placeable block.
    fn max_block_id(&self) -> i32;

    /// Returns true if the id names a material.
    fn is_valid(&self, id: i32) -> bool {
        self.canonical_name(id).is_some()
    }

    /// Returns true if the id is a concrete block id.
    fn is_block(&self, id: i32) -> bool {
        id != ItemData::WILDCARD_ID && id <= self.max_block_id()
    }

    /// Splits a name into its singular form and whether it was plural.
    fn plural(&self, name: &str) -> (String, bool) {
        english_plural(name)
    }
}

/// An in-memory material table.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    materials: BTreeMap<i32, String>,
    max_block_id: i32,
}

impl StaticCatalog {
    /// Creates an empty catalog with the given highest block id.
    #[must_use]
    pub fn new(max_block_id: i32) -> Self {
        Self {
            materials: BTreeMap::new(),
            max_block_id,
        }
    }

    /// Adds a material.
    #[must_use]
    pub fn with_material(mut self, id: i32, name: impl Into<String>) -> Self {
        self.insert(id, name);
        self
    }

    /// Adds or renames a material.
    pub fn insert(&mut self, id: i32, name: impl Into<String>) {
        self.materials.insert(id, name.into());
    }

    /// Returns the number of materials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Returns true if the catalog has no materials.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl MaterialCatalog for StaticCatalog {
    fn material_ids(&self) -> Vec<i32> {
        self.materials.keys().copied().collect()
    }

    fn canonical_name(&self, id: i32) -> Option<&str> {
        self.materials.get(&id).map(String::as_str)
    }

    fn max_block_id(&self) -> i32 {
        self.max_block_id
    }
}
