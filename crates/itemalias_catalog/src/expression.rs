//! Item type expressions.
//!
//! Two grammars share the same clause parser:
//!
//! - alias values (`17:1-3, 162`): comma separated clauses, no quantities
//! - script expressions (`2 of every red wool`): one clause behind an
//!   optional quantity prefix
//!
//! A clause is a type part, either a numeric id or an alias name, followed
//! by an optional `:data` range.

use itemalias_foundation::{
    DataRange, Error, ErrorKind, ItemData, ItemType, MaterialCatalog, Result,
};

use crate::config::CatalogConfig;
use crate::linking::{BLOCK_SUFFIX, ITEM_SUFFIX};
use crate::registry::{AliasRegistry, RESERVED_SEQUENCES};

/// Quantity prefix of an expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quantity {
    /// No prefix.
    Unspecified,
    /// `<n> <type>` or `<n> of <type>`.
    Amount(i32),
    /// `<n> of all <type>` or `<n> of every <type>`.
    AmountOfEvery(i32),
    /// `a <type>` or `an <type>`.
    Single,
    /// `all <type>` or `every <type>`.
    Every,
}

impl Quantity {
    /// Applies the quantity to a parsed type.
    pub fn apply(self, item: &mut ItemType) {
        match self {
            Self::Unspecified => {}
            Self::Amount(n) => item.amount = n,
            Self::AmountOfEvery(n) => {
                item.amount = n;
                item.match_all = true;
            }
            Self::Single => item.amount = 1,
            Self::Every => item.match_all = true,
        }
    }

    fn plural_check(self) -> PluralCheck {
        match self {
            Self::Amount(n) => PluralCheck::Expect { singular: n == 1 },
            Self::Single => PluralCheck::Expect { singular: true },
            Self::Unspecified | Self::AmountOfEvery(_) | Self::Every => PluralCheck::Skip,
        }
    }
}

/// Splits a quantity prefix off an expression.
///
/// Prefixes are matched case-insensitively, in this order: `<n> of all|every`,
/// `<n> [of]`, `a|an`, `all|every`.
///
/// # Errors
/// Returns [`ErrorKind::InvalidAmount`] if the number does not fit an `i32`.
pub fn split_quantity(s: &str) -> Result<(Quantity, &str)> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 {
        if let Some(rest) = s[digits..].strip_prefix(' ').filter(|r| !r.is_empty()) {
            let n = s[..digits]
                .parse::<i32>()
                .map_err(|_| Error::new(ErrorKind::InvalidAmount(s[..digits].to_string())))?;
            if let Some(after_of) = strip_word(rest, "of") {
                let every = strip_word(after_of, "all").or_else(|| strip_word(after_of, "every"));
                if let Some(rest) = every {
                    return Ok((Quantity::AmountOfEvery(n), rest));
                }
                return Ok((Quantity::Amount(n), after_of));
            }
            return Ok((Quantity::Amount(n), rest));
        }
    }
    if let Some(rest) = strip_word(s, "a").or_else(|| strip_word(s, "an")) {
        return Ok((Quantity::Single, rest));
    }
    if let Some(rest) = strip_word(s, "all").or_else(|| strip_word(s, "every")) {
        return Ok((Quantity::Every, rest));
    }
    Ok((Quantity::Unspecified, s))
}

/// Strips `word` followed by a space, ignoring case; the rest must not be
/// empty.
fn strip_word<'s>(s: &'s str, word: &str) -> Option<&'s str> {
    let head = s.get(..word.len())?;
    if !head.eq_ignore_ascii_case(word) {
        return None;
    }
    s[word.len()..].strip_prefix(' ').filter(|rest| !rest.is_empty())
}

/// Whether a name is expected to be singular.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PluralCheck {
    Expect { singular: bool },
    Skip,
}

/// Parses item type expressions against the alias registries.
///
/// Warnings are collected and can be taken with [`Self::take_warnings`];
/// errors are returned.
pub struct ExpressionParser<'a, H: MaterialCatalog + ?Sized> {
    aliases: &'a AliasRegistry,
    local: Option<&'a AliasRegistry>,
    host: &'a H,
    config: &'a CatalogConfig,
    warnings: Vec<String>,
}

impl<'a, H: MaterialCatalog + ?Sized> ExpressionParser<'a, H> {
    /// Creates a parser over the global aliases.
    #[must_use]
    pub fn new(aliases: &'a AliasRegistry, host: &'a H, config: &'a CatalogConfig) -> Self {
        Self {
            aliases,
            local: None,
            host,
            config,
            warnings: Vec::new(),
        }
    }

    /// Consults `local` before the global aliases.
    #[must_use]
    pub fn with_local(mut self, local: &'a AliasRegistry) -> Self {
        self.local = Some(local);
        self
    }

    /// Takes the warnings collected so far.
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    /// Consumes the parser, returning its warnings.
    #[must_use]
    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }

    /// Parses the value side of an alias definition.
    ///
    /// `*` is everything; otherwise comma separated clauses are unioned.
    ///
    /// # Errors
    /// Fails if the value is empty or any clause fails.
    pub fn parse_alias_value(&mut self, s: &str) -> Result<ItemType> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::new(ErrorKind::EmptyInput));
        }
        if s == "*" {
            return Ok(ItemType::everything());
        }
        let mut item = ItemType::new();
        for clause in s.split(',') {
            self.parse_type(clause.trim(), &mut item, PluralCheck::Skip)?;
        }
        Ok(item)
    }

    /// Parses a script expression such as `2 of every red wool`.
    ///
    /// # Errors
    /// Fails on empty or composite input, bad amounts, and unresolvable or
    /// invalid types.
    pub fn parse_expression(&mut self, s: &str) -> Result<ItemType> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::new(ErrorKind::EmptyInput));
        }
        let lc = s.to_lowercase();
        if RESERVED_SEQUENCES.iter().any(|seq| lc.contains(seq)) {
            return Err(Error::new(ErrorKind::CompositeExpression(s.to_string())));
        }

        let (quantity, rest) = split_quantity(s)?;
        let mut item = ItemType::new();
        self.parse_type(rest, &mut item, quantity.plural_check())?;
        if item.is_empty() {
            return Err(Error::new(ErrorKind::EmptyType(s.to_string())));
        }
        quantity.apply(&mut item);
        Ok(item)
    }

    /// Parses one clause and adds its entries to `target`.
    fn parse_type(&mut self, s: &str, target: &mut ItemType, check: PluralCheck) -> Result<()> {
        let (type_part, data) = match s.split_once(':') {
            Some((type_part, data)) => (type_part, Some(DataRange::parse(data)?)),
            None => (s, None),
        };

        if type_part.is_empty() {
            let Some(range) = data else {
                return Err(Error::new(ErrorKind::EmptyInput));
            };
            target.add(ItemData::data(range));
            return Ok(());
        }

        if type_part.bytes().all(|b| b.is_ascii_digit()) {
            let id = type_part
                .parse::<i32>()
                .map_err(|_| Error::unresolved_type(s))?;
            if !self.host.is_valid(id) {
                return Err(Error::new(ErrorKind::UnknownMaterial(id)));
            }
            let entry = self.narrow(ItemData::material(id), data)?;
            let entry = entry.ok_or_else(|| Error::new(ErrorKind::DataMismatch(s.to_string())))?;
            target.add(entry);
            return Ok(());
        }

        let Some(alias) = self.lookup(type_part, check) else {
            return Err(Error::unresolved_type(s));
        };
        if data.is_none() && target.is_empty() {
            if let Some(form) = alias.block_form() {
                target.set_block_form(form.clone());
            }
            if let Some(form) = alias.item_form() {
                target.set_item_form(form.clone());
            }
        }
        let mut matched = false;
        for entry in &alias {
            if let Some(narrowed) = self.narrow(*entry, data)? {
                target.add(narrowed);
                matched = true;
            }
        }
        if !matched {
            return Err(Error::new(ErrorKind::DataMismatch(s.to_string())));
        }
        Ok(())
    }

    /// Applies a data part to one entry.
    ///
    /// Blocks reject data above the configured limit; a disjoint range
    /// yields `None`.
    fn narrow(&self, entry: ItemData, data: Option<DataRange>) -> Result<Option<ItemData>> {
        let Some(range) = data else {
            return Ok(Some(entry));
        };
        let limit = self.config.block_data_max;
        if self.host.is_block(entry.material_id) && range.exceeds(limit) {
            return Err(Error::new(ErrorKind::BlockDataOutOfRange { limit }));
        }
        Ok(entry.intersect(ItemData::data(range)))
    }

    /// Direct lookup, local aliases first.
    fn get(&self, key: &str) -> Option<ItemType> {
        self.local
            .and_then(|local| local.get(key))
            .or_else(|| self.aliases.get(key))
    }

    /// Resolves an alias name, trying `any`, plural and block/item forms.
    fn lookup(&mut self, s: &str, check: PluralCheck) -> Option<ItemType> {
        let lc = s.to_lowercase();
        if let Some(item) = self.get(&lc) {
            return Some(item);
        }
        if let Some(rest) = strip_word(s, "any") {
            return self.lookup(rest, PluralCheck::Skip);
        }

        let (singular, was_plural) = self.host.plural(s);
        if let PluralCheck::Expect { singular: expect_singular } = check {
            if self.config.plural_warnings && was_plural == expect_singular {
                self.warnings
                    .push(format!("Possible invalid plural detected in '{s}'"));
            }
        }
        let lc = singular.to_lowercase();
        let inner = match check {
            PluralCheck::Expect { .. } => PluralCheck::Expect { singular: true },
            PluralCheck::Skip => PluralCheck::Skip,
        };

        if let Some(base) = lc.strip_suffix(BLOCK_SUFFIX) {
            if let Some(mut item) = self.lookup(base, inner) {
                let host = self.host;
                item.retain(|d| d.is_any_material() || host.is_block(d.material_id));
                return (!item.is_empty()).then_some(item);
            }
        } else if let Some(base) = lc.strip_suffix(ITEM_SUFFIX) {
            if let Some(mut item) = self.lookup(base, inner) {
                let host = self.host;
                item.retain(|d| !host.is_block(d.material_id));
                return (!item.is_empty()).then_some(item);
            }
        }
        self.get(&lc)
    }
}
