//! Item data and item types.
//!
//! An [`ItemData`] is one material id narrowed to a [`DataRange`]. An
//! [`ItemType`] is an ordered, duplicate-free set of them plus the flags a
//! script attaches (`2 of ...`, `every ...`) and the optional "as a block" /
//! "as an item" counterparts discovered while loading aliases.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::range::DataRange;

/// One material id with a data range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemData {
    /// Material id, or [`ItemData::WILDCARD_ID`] for any material.
    pub material_id: i32,
    /// Accepted data values.
    pub range: DataRange,
}

impl ItemData {
    /// Material id that stands for "anything".
    pub const WILDCARD_ID: i32 = -1;

    /// Creates item data for a material and range.
    #[must_use]
    pub const fn new(material_id: i32, range: DataRange) -> Self {
        Self { material_id, range }
    }

    /// Creates item data matching every data value of a material.
    #[must_use]
    pub const fn material(material_id: i32) -> Self {
        Self::new(material_id, DataRange::WILDCARD)
    }

    /// Creates item data matching any material within a range.
    #[must_use]
    pub const fn data(range: DataRange) -> Self {
        Self::new(Self::WILDCARD_ID, range)
    }

    /// Item data matching anything at all.
    #[must_use]
    pub const fn wildcard() -> Self {
        Self::material(Self::WILDCARD_ID)
    }

    /// Returns true if the material id is the wildcard.
    #[must_use]
    pub const fn is_any_material(&self) -> bool {
        self.material_id == Self::WILDCARD_ID
    }

    /// Returns the overlap of two item data, or `None` if the ids conflict or
    /// the ranges are disjoint.
    #[must_use]
    pub fn intersect(self, other: Self) -> Option<Self> {
        let material_id = match (self.material_id, other.material_id) {
            (Self::WILDCARD_ID, id) | (id, Self::WILDCARD_ID) => id,
            (a, b) if a == b => a,
            _ => return None,
        };
        let range = self.range.intersect(other.range)?;
        Some(Self { material_id, range })
    }
}

impl Default for ItemData {
    fn default() -> Self {
        Self::wildcard()
    }
}

impl fmt::Display for ItemData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_any_material() {
            write!(f, "*")?;
        } else {
            write!(f, "{}", self.material_id)?;
        }
        if !self.range.is_wildcard() {
            write!(f, ":{}", self.range)?;
        }
        Ok(())
    }
}

/// A set of item data with quantity flags and linked block/item forms.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemType {
    entries: Vec<ItemData>,
    /// How many items are meant; `-1` when unset.
    pub amount: i32,
    /// Whether every matching item is meant (`all`/`every`).
    pub match_all: bool,
    block_form: Option<Box<ItemType>>,
    item_form: Option<Box<ItemType>>,
}

impl ItemType {
    /// Creates an empty item type with the default amount of 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            amount: 1,
            match_all: false,
            block_form: None,
            item_form: None,
        }
    }

    /// Creates an item type from entries, dropping duplicates.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = ItemData>) -> Self {
        let mut t = Self::new();
        for data in entries {
            t.add(data);
        }
        t
    }

    /// The type that matches every item.
    #[must_use]
    pub fn everything() -> Self {
        let mut t = Self::from_entries([ItemData::wildcard()]);
        t.match_all = true;
        t
    }

    /// Adds an entry unless an equal one is already present.
    ///
    /// Returns true if the entry was added.
    pub fn add(&mut self, data: ItemData) -> bool {
        if self.entries.contains(&data) {
            return false;
        }
        self.entries.push(data);
        true
    }

    /// Keeps only the entries matching the predicate.
    pub fn retain(&mut self, pred: impl FnMut(&ItemData) -> bool) {
        self.entries.retain(pred);
    }

    /// Returns the entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[ItemData] {
        &self.entries
    }

    /// Returns an iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, ItemData> {
        self.entries.iter()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the only entry, if there is exactly one.
    #[must_use]
    pub fn single(&self) -> Option<&ItemData> {
        match self.entries.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// The "as a block" form of this type, if linked.
    #[must_use]
    pub fn block_form(&self) -> Option<&ItemType> {
        self.block_form.as_deref()
    }

    /// The "as an item" form of this type, if linked.
    #[must_use]
    pub fn item_form(&self) -> Option<&ItemType> {
        self.item_form.as_deref()
    }

    /// Links the block form. Only the first call has an effect.
    ///
    /// Returns true if the form was set by this call.
    pub fn set_block_form(&mut self, form: ItemType) -> bool {
        if self.block_form.is_some() {
            return false;
        }
        self.block_form = Some(Box::new(form));
        true
    }

    /// Links the item form. Only the first call has an effect.
    ///
    /// Returns true if the form was set by this call.
    pub fn set_item_form(&mut self, form: ItemType) -> bool {
        if self.item_form.is_some() {
            return false;
        }
        self.item_form = Some(Box::new(form));
        true
    }

    /// Intersects every entry of `self` with every entry of `other`.
    ///
    /// The result carries default flags and no linked forms. Returns `None`
    /// if no pair of entries overlaps.
    #[must_use]
    pub fn intersection(&self, other: &ItemType) -> Option<ItemType> {
        let mut result = ItemType::new();
        for a in &self.entries {
            for b in &other.entries {
                if let Some(d) = a.intersect(*b) {
                    result.add(d);
                }
            }
        }
        if result.is_empty() {
            None
        } else {
            Some(result)
        }
    }
}

impl Default for ItemType {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a ItemType {
    type Item = &'a ItemData;
    type IntoIter = std::slice::Iter<'a, ItemData>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.match_all {
            write!(f, "every ")?;
        } else if self.amount > 1 {
            write!(f, "{} of ", self.amount)?;
        }
        for (i, d) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{d}")?;
        }
        Ok(())
    }
}
