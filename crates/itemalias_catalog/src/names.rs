//! Material display names.
//!
//! The inverse of alias lookup: given a material id and a data range, find
//! the best human name for it. Names are learned from alias registration;
//! the first real name for an id becomes its default, and aliases bound to
//! an exact data range name that variant.

use std::collections::HashMap as StdHashMap;

use im::HashMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use itemalias_foundation::{DataRange, ItemData, MaterialCatalog};

/// Highest data value shown for an open range on a block id.
const BLOCK_DISPLAY_MAX: i16 = 15;

/// Default name used for the wildcard id.
pub const ANYTHING_NAME: &str = "anything";

/// Display names of one material.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaterialName {
    /// The material id.
    pub id: i32,
    /// Name used when no variant matches.
    default_name: String,
    /// Names of specific data ranges.
    variants: StdHashMap<DataRange, String>,
}

impl MaterialName {
    /// Creates a record with a default name.
    #[must_use]
    pub fn new(id: i32, default_name: impl Into<String>) -> Self {
        Self {
            id,
            default_name: default_name.into(),
            variants: StdHashMap::new(),
        }
    }

    /// Creates a record whose default name is the numeric id.
    #[must_use]
    pub fn placeholder(id: i32) -> Self {
        Self::new(id, id.to_string())
    }

    /// Returns true while the default name is still the numeric id.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.default_name == self.id.to_string()
    }

    /// The default name.
    #[must_use]
    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    /// The name registered for exactly this range.
    #[must_use]
    pub fn variant(&self, range: DataRange) -> Option<&str> {
        self.variants.get(&range).map(String::as_str)
    }

    /// Picks the best name for a data range.
    ///
    /// `max_block_id` decides how an open upper bound is displayed.
    #[must_use]
    pub fn resolve(&self, range: DataRange, max_block_id: i32) -> String {
        if let Some(name) = self.variants.get(&range) {
            return name.clone();
        }
        if range.is_wildcard() || range.is_zero() {
            return self.default_name.clone();
        }
        let low = if range.min == DataRange::OPEN {
            0
        } else {
            range.min
        };
        let high = match range.max {
            DataRange::OPEN if self.id <= max_block_id => BLOCK_DISPLAY_MAX,
            DataRange::OPEN => i16::MAX,
            max => max,
        };
        if low == high {
            format!("{}:{low}", self.default_name)
        } else {
            format!("{}:{low}-{high}", self.default_name)
        }
    }
}

/// Runtime storage for material display names.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaterialNameRegistry {
    /// Records by material id.
    names: HashMap<i32, MaterialName>,
}

impl MaterialNameRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record of a material.
    #[must_use]
    pub fn get(&self, id: i32) -> Option<&MaterialName> {
        self.names.get(&id)
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Records a name for the whole material.
    ///
    /// The first real name wins; a placeholder default is replaced.
    pub fn record_default(&mut self, id: i32, name: &str) {
        match self.names.get_mut(&id) {
            Some(record) if record.is_placeholder() => record.default_name = name.to_string(),
            Some(_) => {}
            None => {
                self.names.insert(id, MaterialName::new(id, name));
            }
        }
    }

    /// Records a name for one data range of a material.
    pub fn record_variant(&mut self, id: i32, range: DataRange, name: &str) {
        self.names
            .entry(id)
            .or_insert_with(|| MaterialName::placeholder(id))
            .variants
            .insert(range, name.to_string());
    }

    /// Records the name an alias gives to its type, if the type is a single
    /// item data.
    pub fn record_alias(&mut self, name: &str, data: &ItemData) {
        if data.range.is_wildcard() {
            self.record_default(data.material_id, name);
        } else {
            self.record_variant(data.material_id, data.range, name);
        }
    }

    /// Returns the best name for a material and data range.
    #[must_use]
    pub fn resolve(&self, id: i32, range: DataRange, max_block_id: i32) -> String {
        match self.names.get(&id) {
            Some(record) => record.resolve(range, max_block_id),
            None => id.to_string(),
        }
    }

    /// Returns the best name for a material with one data value.
    #[must_use]
    pub fn resolve_single(&self, id: i32, data: i16, max_block_id: i32) -> String {
        self.resolve(id, DataRange::exact(data), max_block_id)
    }

    /// Gives every host material without a record its engine name.
    ///
    /// Engine names are lowercased with underscores turned into spaces. The
    /// wildcard id gets [`ANYTHING_NAME`]. Returns the ids that were added.
    pub fn fill_missing<H: MaterialCatalog + ?Sized>(&mut self, host: &H) -> Vec<i32> {
        let mut added = Vec::new();
        for id in host.material_ids() {
            if self.names.contains_key(&id) {
                continue;
            }
            let name = host
                .canonical_name(id)
                .map_or_else(|| id.to_string(), |n| n.to_lowercase().replace('_', " "));
            self.names.insert(id, MaterialName::new(id, name));
            added.push(id);
        }
        if !self.names.contains_key(&ItemData::WILDCARD_ID) {
            self.names.insert(
                ItemData::WILDCARD_ID,
                MaterialName::new(ItemData::WILDCARD_ID, ANYTHING_NAME),
            );
            added.push(ItemData::WILDCARD_ID);
        }
        added
    }
}
