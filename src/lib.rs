//! itemalias - Alias names and item type expressions
//!
//! This crate re-exports all layers of the itemalias system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: itemalias_catalog    — Registries, linking, expressions, AliasCatalog
//! Layer 1: itemalias_pattern    — Alias pattern lexer, parser, expander
//! Layer 0: itemalias_foundation — Core types (DataRange, ItemType, Error)
//! ```

pub use itemalias_catalog as catalog;
pub use itemalias_foundation as foundation;
pub use itemalias_pattern as pattern;
