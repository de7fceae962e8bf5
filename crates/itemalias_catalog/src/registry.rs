//! The alias registry.
//!
//! Maps normalized alias names (`oak log`, `red wool`) to the item types they
//! stand for. Lookups hand out copies; callers are free to modify what they
//! get back without affecting the registry.

use im::HashMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use itemalias_foundation::{Error, ErrorKind, ItemType, Result};

/// Substrings reserved for composite type expressions.
pub const RESERVED_SEQUENCES: &[&str] = &[",", " and ", " or "];

/// Runtime storage for all aliases.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AliasRegistry {
    /// Item types by normalized name.
    aliases: HashMap<String, ItemType>,
}

impl AliasRegistry {
    /// Creates a new empty alias registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an alias under its normalized name.
    ///
    /// Returns the normalized key.
    ///
    /// # Errors
    /// Returns an error if the normalized name is empty, starts with a digit,
    /// or contains a reserved sequence.
    pub fn register(&mut self, name: &str, value: ItemType) -> Result<String> {
        let display = normalize_display(name);
        validate_alias(&display)?;
        let key = display.to_lowercase();
        self.aliases.insert(key.clone(), value);
        Ok(key)
    }

    /// Stores a value under an already normalized key.
    pub(crate) fn insert(&mut self, key: String, value: ItemType) {
        self.aliases.insert(key, value);
    }

    /// Looks up an alias by name and returns a copy of its type.
    ///
    /// The name is normalized first, so case and spacing do not matter.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<ItemType> {
        self.get(&normalize(name))
    }

    /// Looks up an already normalized key and returns a copy of its type.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<ItemType> {
        self.aliases.get(key).cloned()
    }

    /// Mutable access for in-crate linking.
    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut ItemType> {
        self.aliases.get_mut(key)
    }

    /// Returns true if a normalized key is registered.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.aliases.contains_key(key)
    }

    /// Iterates the registered keys in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.aliases.keys()
    }

    /// Returns the number of aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Returns true if no alias is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// Trims a name and collapses runs of whitespace to single spaces.
#[must_use]
pub fn normalize_display(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalizes a name into a registry key.
#[must_use]
pub fn normalize(name: &str) -> String {
    normalize_display(name).to_lowercase()
}

/// Checks that a whitespace-normalized name may be used as an alias.
///
/// # Errors
/// Returns [`ErrorKind::EmptyAlias`], [`ErrorKind::AliasStartsWithNumber`] or
/// [`ErrorKind::AliasContainsSyntax`].
pub fn validate_alias(display: &str) -> Result<()> {
    if display.is_empty() {
        return Err(Error::new(ErrorKind::EmptyAlias));
    }
    if display.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(Error::new(ErrorKind::AliasStartsWithNumber(
            display.to_string(),
        )));
    }
    let lc = display.to_lowercase();
    if RESERVED_SEQUENCES.iter().any(|seq| lc.contains(seq)) {
        return Err(Error::new(ErrorKind::AliasContainsSyntax(
            display.to_string(),
        )));
    }
    Ok(())
}
