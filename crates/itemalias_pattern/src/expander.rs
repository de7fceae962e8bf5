//! Alias pattern expansion.
//!
//! Turns a parsed [`Pattern`] and the item type it stands for into every
//! concrete name it describes.
//!
//! # Expansion Algorithm
//!
//! The top-level node sequence is rewritten one construct at a time, the
//! first construct found in this order:
//!
//! 1. Optional `[x]`: expand once without it and once with its content
//! 2. Alternation `(a|b)`: expand once per alternative
//! 3. Variation `{tag}`: expand once per entry of the set, narrowing the
//!    value to the entry, plus once without the tag if there is no
//!    `{default}` entry. Entry keys are patterns themselves.
//! 4. Only text left: emit the binding
//!
//! A branch holding a malformed node is dropped with an error before any
//! of the above. Later bindings for an already produced name replace the
//! earlier one.

use std::collections::BTreeMap;

use itemalias_foundation::{Error, ErrorKind, ItemType};
use tracing::trace;

use crate::ast::{Node, Pattern, render};
use crate::parser::parse_pattern;
use crate::variation::{Variations, is_default_key};

/// Default cap on the number of names one pattern may produce.
pub const DEFAULT_MAX_BINDINGS: usize = 10_000;

/// Deepest chain of rewrites allowed for one name.
pub const MAX_EXPANSION_DEPTH: usize = 256;

/// The outcome of expanding one pattern.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Expansion {
    /// Every produced name with its item type, in name order.
    pub bindings: BTreeMap<String, ItemType>,
    /// Grammar errors; each one dropped a sub-pattern.
    pub errors: Vec<Error>,
    /// Non-fatal problems, such as variations that match nothing.
    pub warnings: Vec<String>,
}

impl Expansion {
    /// Returns the number of produced names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if nothing was produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Expands patterns against a variation table.
pub struct Expander<'a> {
    /// Variation sets available to `{tag}` references.
    variations: &'a Variations,
    /// Maximum number of bindings to produce.
    max_bindings: usize,
    /// Whether the binding limit error was already recorded.
    limit_hit: bool,
    /// Whether the depth error was already recorded.
    depth_hit: bool,
    /// Output being built.
    out: Expansion,
}

impl<'a> Expander<'a> {
    /// Creates an expander with the default binding limit.
    #[must_use]
    pub fn new(variations: &'a Variations) -> Self {
        Self {
            variations,
            max_bindings: DEFAULT_MAX_BINDINGS,
            limit_hit: false,
            depth_hit: false,
            out: Expansion::default(),
        }
    }

    /// Sets the maximum number of names a pattern may produce.
    #[must_use]
    pub fn with_max_bindings(mut self, max_bindings: usize) -> Self {
        self.max_bindings = max_bindings;
        self
    }

    /// Expands a pattern standing for `value`.
    #[must_use]
    pub fn expand(mut self, pattern: &Pattern, value: &ItemType) -> Expansion {
        self.walk(pattern.nodes.clone(), value.clone(), 0);
        self.out
    }

    fn walk(&mut self, nodes: Vec<Node>, value: ItemType, depth: usize) {
        if depth > MAX_EXPANSION_DEPTH {
            if !self.depth_hit {
                self.depth_hit = true;
                self.out.errors.push(Error::new(ErrorKind::ExpansionTooDeep {
                    depth: MAX_EXPANSION_DEPTH,
                }));
            }
            return;
        }
        if self.out.bindings.len() >= self.max_bindings {
            if !self.limit_hit {
                self.limit_hit = true;
                self.out.errors.push(Error::new(ErrorKind::ExpansionLimit {
                    limit: self.max_bindings,
                }));
            }
            return;
        }

        if let Some(Node::Malformed { message, span, .. }) =
            nodes.iter().find(|n| n.is_malformed())
        {
            self.out
                .errors
                .push(Error::malformed_pattern(message.clone(), span.column));
            return;
        }

        let depth = depth + 1;
        if let Some(i) = nodes.iter().position(Node::is_optional) {
            let Node::Optional(inner, _) = &nodes[i] else {
                unreachable!("position matched an optional node")
            };
            let without = splice(&nodes, i, &[]);
            let with = splice(&nodes, i, inner);
            self.walk(without, value.clone(), depth);
            self.walk(with, value, depth);
            return;
        }

        if let Some(i) = nodes.iter().position(Node::is_alternation) {
            let Node::Alternation(alternatives, _) = &nodes[i] else {
                unreachable!("position matched an alternation node")
            };
            if alternatives.len() < 2 {
                self.out.errors.push(Error::new(ErrorKind::SingleAlternative(render(
                    &alternatives.concat(),
                ))));
                return;
            }
            for alternative in alternatives {
                self.walk(splice(&nodes, i, alternative), value.clone(), depth);
            }
            return;
        }

        if let Some(i) = nodes.iter().position(Node::is_variation) {
            let Node::Variation(tag, _) = &nodes[i] else {
                unreachable!("position matched a variation node")
            };
            self.expand_variation(&nodes, i, tag, &value, depth);
            return;
        }

        let name = render(&nodes);
        trace!(name = %name, "expanded alias");
        self.out.bindings.insert(name, value);
    }

    fn expand_variation(
        &mut self,
        nodes: &[Node],
        index: usize,
        tag: &str,
        value: &ItemType,
        depth: usize,
    ) {
        let variations = self.variations;
        let Some(set) = variations.get(tag) else {
            self.out.errors.push(Error::unknown_variation(tag));
            return;
        };

        for (key, entry) in set.iter() {
            let word = if is_default_key(key) {
                Vec::new()
            } else {
                match parse_pattern(key) {
                    Ok(pattern) => pattern.nodes,
                    Err(err) => {
                        self.out.errors.push(err);
                        continue;
                    }
                }
            };
            let next = splice(nodes, index, &word);
            match entry.intersection(value) {
                Some(narrowed) => self.walk(next, narrowed, depth),
                None => self.out.warnings.push(format!(
                    "'{}' results in an empty alias (i.e. it doesn't map to any id/data), it will thus be ignored",
                    render(&next)
                )),
            }
        }

        if !set.has_default() {
            self.walk(splice(nodes, index, &[]), value.clone(), depth);
        }
    }
}

/// Replaces `nodes[index]` with `replacement`.
fn splice(nodes: &[Node], index: usize, replacement: &[Node]) -> Vec<Node> {
    let mut out = Vec::with_capacity(nodes.len() + replacement.len());
    out.extend_from_slice(&nodes[..index]);
    out.extend_from_slice(replacement);
    out.extend_from_slice(&nodes[index + 1..]);
    out
}

/// Expands a pattern with the default binding limit.
#[must_use]
pub fn expand(pattern: &Pattern, value: &ItemType, variations: &Variations) -> Expansion {
    Expander::new(variations).expand(pattern, value)
}
