//! Core types for itemalias.
//!
//! This crate provides:
//! - [`DataRange`] - Inclusive data-value ranges with wildcard bounds
//! - [`ItemData`] / [`ItemType`] - Material references and sets of them
//! - [`MaterialCatalog`] - The host's material table
//! - [`DiagnosticSink`] / [`Diagnostics`] - Error and warning reporting
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod diagnostics;
pub mod error;
pub mod host;
pub mod item;
pub mod plural;
pub mod range;

pub use diagnostics::{
    Diagnostic, DiagnosticSink, Diagnostics, RecordingSink, Severity, TracingSink,
};
pub use error::{Error, ErrorClass, ErrorContext, ErrorKind, Result};
pub use host::{MaterialCatalog, StaticCatalog};
pub use item::{ItemData, ItemType};
pub use plural::english_plural;
pub use range::DataRange;
