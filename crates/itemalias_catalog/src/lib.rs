//! Alias registries and item type expressions for itemalias.
//!
//! This crate turns alias definitions into a lookup table and parses the
//! item type expressions scripts write against it.
//!
//! # Example
//!
//! ```
//! use itemalias_catalog::AliasCatalog;
//! use itemalias_foundation::StaticCatalog;
//! use itemalias_pattern::Variations;
//!
//! let host = StaticCatalog::new(255).with_material(35, "WOOL");
//! let mut catalog = AliasCatalog::new(host);
//! catalog.register_aliases("wool", "35", &Variations::new());
//! catalog.register_aliases("red wool", "35:14", &Variations::new());
//!
//! let item = catalog.parse_expression("3 of red wool").unwrap();
//! assert_eq!(item.amount, 3);
//! assert_eq!(catalog.resolve_name_single(35, 14), "red wool");
//! assert_eq!(catalog.resolve_name_single(35, 0), "wool");
//! ```
//!
//! # Modules
//!
//! - [`registry`] - Normalized alias names to item types
//! - [`names`] - Material ids back to display names
//! - [`linking`] - Block and item forms of an alias
//! - [`expression`] - Alias values and script expressions
//! - [`config`] - Validation limits and reporting switches
//! - [`catalog`] - [`AliasCatalog`], tying it all to a host

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod config;
pub mod expression;
pub mod linking;
pub mod names;
pub mod registry;

pub use catalog::AliasCatalog;
pub use config::CatalogConfig;
pub use expression::{ExpressionParser, Quantity, split_quantity};
pub use linking::{BLOCK_SUFFIX, ITEM_SUFFIX, link_forms};
pub use names::{ANYTHING_NAME, MaterialName, MaterialNameRegistry};
pub use registry::{AliasRegistry, normalize, normalize_display, validate_alias};
