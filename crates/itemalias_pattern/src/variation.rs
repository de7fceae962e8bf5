//! Named variation sets referenced by `{tag}` in alias patterns.
//!
//! A variation set maps a word to the item type it narrows an alias to, e.g.
//! `{color}` → `red: :14`, `blue: :11`. The special key `{default}` names
//! the entry used when the tag is left out.

use std::collections::HashMap;

use itemalias_foundation::ItemType;

/// Key marking the default entry of a variation set.
pub const DEFAULT_KEY: &str = "{default}";

/// The entries of one variation set, in definition order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariationSet {
    entries: Vec<(String, ItemType)>,
}

impl VariationSet {
    /// Creates an empty variation set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: ItemType) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds an entry, replacing the value of an existing key in place.
    pub fn insert(&mut self, key: impl Into<String>, value: ItemType) {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Looks up an entry by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ItemType> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns true if the set has a `{default}` entry.
    #[must_use]
    pub fn has_default(&self) -> bool {
        self.entries.iter().any(|(k, _)| is_default_key(k))
    }

    /// Iterates entries in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ItemType)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All variation sets available to a pattern, by tag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Variations {
    sets: HashMap<String, VariationSet>,
}

impl Variations {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variation set.
    #[must_use]
    pub fn with(mut self, tag: impl Into<String>, set: VariationSet) -> Self {
        self.insert(tag, set);
        self
    }

    /// Adds or replaces a variation set.
    pub fn insert(&mut self, tag: impl Into<String>, set: VariationSet) {
        self.sets.insert(tag.into(), set);
    }

    /// Looks up a variation set by tag.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&VariationSet> {
        self.sets.get(tag)
    }

    /// Returns the number of sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns true if there are no sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

/// Returns true if the key marks the default entry (case-insensitive).
#[must_use]
pub fn is_default_key(key: &str) -> bool {
    key.eq_ignore_ascii_case(DEFAULT_KEY)
}
