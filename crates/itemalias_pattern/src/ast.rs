//! Abstract syntax tree for alias patterns.
//!
//! A pattern is a sequence of nodes. Groups nest, so `[(dark|light) ]oak`
//! is an optional node whose content holds an alternation.

use std::fmt;

use crate::span::Span;

/// A pattern node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Literal text like `oak log`.
    Text(String, Span),
    /// Optional segment like `[red ]`.
    Optional(Vec<Node>, Span),
    /// Alternation like `(oak|birch)`; one node sequence per alternative.
    Alternation(Vec<Vec<Node>>, Span),
    /// Variation reference like `{color}`.
    Variation(String, Span),
    /// Text that failed to lex inside a group, kept so only its branch is
    /// dropped.
    Malformed {
        /// The offending source text.
        text: String,
        /// What is wrong with it.
        message: String,
        /// Where it sits in the pattern.
        span: Span,
    },
}

impl Node {
    /// Returns true if this is literal text.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_, _))
    }

    /// Returns true if this is an optional segment.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_, _))
    }

    /// Returns true if this is an alternation.
    #[must_use]
    pub const fn is_alternation(&self) -> bool {
        matches!(self, Self::Alternation(_, _))
    }

    /// Returns true if this is a variation reference.
    #[must_use]
    pub const fn is_variation(&self) -> bool {
        matches!(self, Self::Variation(_, _))
    }

    /// Returns true if this is malformed text.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text, _) => write!(f, "{text}"),
            Self::Optional(inner, _) => {
                write!(f, "[")?;
                write_sequence(f, inner)?;
                write!(f, "]")
            }
            Self::Alternation(alts, _) => {
                write!(f, "(")?;
                for (i, alt) in alts.iter().enumerate() {
                    if i > 0 {
                        write!(f, "|")?;
                    }
                    write_sequence(f, alt)?;
                }
                write!(f, ")")
            }
            Self::Variation(tag, _) => write!(f, "{{{tag}}}"),
            Self::Malformed { text, .. } => write!(f, "{text}"),
        }
    }
}

/// A parsed alias pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// Top-level node sequence.
    pub nodes: Vec<Node>,
}

impl Pattern {
    /// Creates a pattern from nodes.
    #[must_use]
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Returns true if the pattern holds no construct besides text.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        self.nodes.iter().all(Node::is_text)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sequence(f, &self.nodes)
    }
}

/// Renders a node sequence back to pattern syntax.
#[must_use]
pub fn render(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        out.push_str(&node.to_string());
    }
    out
}

fn write_sequence(f: &mut fmt::Formatter<'_>, nodes: &[Node]) -> fmt::Result {
    for node in nodes {
        write!(f, "{node}")?;
    }
    Ok(())
}
