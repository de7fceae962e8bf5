//! Alias pattern language for itemalias.
//!
//! A single alias definition line names many aliases at once:
//!
//! ```text
//! [dark ](oak|birch) log{facing} = 17
//! ```
//!
//! # Pipeline
//!
//! ```text
//! "[red ](wool|cloth)"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   LEXER         │  → [ '[', "red ", ']', '(', "wool", '|', "cloth", ')' ]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   PARSER        │  → [Optional["red "], Alternation[["wool"], ["cloth"]]]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   EXPANDER      │  → wool, cloth, red wool, red cloth
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`lexer`] / [`token`] / [`span`] - Tokenization with source positions
//! - [`ast`] / [`parser`] - Recursive descent into a pattern tree
//! - [`variation`] - Named variation sets for `{tag}` references
//! - [`expander`] - Expansion of a pattern into concrete names

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod ast;
pub mod expander;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod token;
pub mod variation;

pub use ast::{Node, Pattern};
pub use expander::{DEFAULT_MAX_BINDINGS, Expander, Expansion, MAX_EXPANSION_DEPTH, expand};
pub use lexer::Lexer;
pub use parser::{MAX_NESTING_DEPTH, Parser, parse_pattern};
pub use span::Span;
pub use token::{Token, TokenKind};
pub use variation::{DEFAULT_KEY, VariationSet, Variations};
