//! Linking of block and item forms.
//!
//! `stone`, `stone block` and `stone item` are separate aliases, but the base
//! alias should know about the other two so expressions like "place stone"
//! can pick the block form. Linking runs after a whole batch is registered,
//! so the three end up connected whatever order they were defined in.

use crate::registry::AliasRegistry;

/// Suffix naming the block form of an alias.
pub const BLOCK_SUFFIX: &str = " block";

/// Suffix naming the item form of an alias.
pub const ITEM_SUFFIX: &str = " item";

#[derive(Clone, Copy)]
enum Form {
    Block,
    Item,
}

/// Links block and item forms for the keys inserted by one batch.
///
/// Returns the number of forms that were set.
pub fn link_forms(registry: &mut AliasRegistry, batch: &[String]) -> usize {
    let mut linked = 0;
    for key in batch {
        if let Some(base) = key.strip_suffix(BLOCK_SUFFIX) {
            linked += usize::from(link(registry, base, key, Form::Block));
        } else if let Some(base) = key.strip_suffix(ITEM_SUFFIX) {
            linked += usize::from(link(registry, base, key, Form::Item));
        } else {
            let item = format!("{key}{ITEM_SUFFIX}");
            let block = format!("{key}{BLOCK_SUFFIX}");
            linked += usize::from(link(registry, key, &item, Form::Item));
            linked += usize::from(link(registry, key, &block, Form::Block));
        }
    }
    linked
}

/// Copies `form_key` into the matching form slot of `base`.
fn link(registry: &mut AliasRegistry, base: &str, form_key: &str, form: Form) -> bool {
    let Some(value) = registry.get(form_key) else {
        return false;
    };
    let Some(target) = registry.get_mut(base) else {
        return false;
    };
    match form {
        Form::Block => target.set_block_form(value),
        Form::Item => target.set_item_form(value),
    }
}
