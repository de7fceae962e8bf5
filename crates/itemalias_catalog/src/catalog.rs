//! The alias catalog.
//!
//! [`AliasCatalog`] ties the registries to a host material table, a
//! configuration and a diagnostic sink. Loading takes `&mut self`, queries
//! take `&self`, so a loaded catalog can be shared freely.

use std::collections::HashSet;
use std::sync::Arc;

use itemalias_foundation::{
    DataRange, DiagnosticSink, Diagnostics, ErrorContext, ItemData, ItemType, MaterialCatalog,
    Result, TracingSink,
};
use itemalias_pattern::{Expander, Variations, parse_pattern};
use tracing::debug;

use crate::config::CatalogConfig;
use crate::expression::ExpressionParser;
use crate::linking::link_forms;
use crate::names::MaterialNameRegistry;
use crate::registry::{AliasRegistry, normalize_display, validate_alias};

/// Aliases and material names for one host.
#[derive(Clone)]
pub struct AliasCatalog<H> {
    host: H,
    aliases: AliasRegistry,
    names: MaterialNameRegistry,
    config: CatalogConfig,
    sink: Arc<dyn DiagnosticSink>,
}

impl<H: MaterialCatalog> AliasCatalog<H> {
    /// Creates an empty catalog that reports through `tracing`.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self {
            host,
            aliases: AliasRegistry::new(),
            names: MaterialNameRegistry::new(),
            config: CatalogConfig::default(),
            sink: Arc::new(TracingSink),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: CatalogConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the diagnostic sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// The host material table.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// The alias registry.
    #[must_use]
    pub fn aliases(&self) -> &AliasRegistry {
        &self.aliases
    }

    /// The material name registry.
    #[must_use]
    pub fn material_names(&self) -> &MaterialNameRegistry {
        &self.names
    }

    /// Looks up an alias by name.
    #[must_use]
    pub fn alias(&self, name: &str) -> Option<ItemType> {
        self.aliases.lookup(name)
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

    /// Registers every alias a definition line describes.
    ///
    /// `name` is an alias pattern, `value` an alias value such as
    /// `17:1, 162`. Problems are reported to the sink; nothing fails.
    /// Returns the number of aliases that were accepted.
    pub fn register_aliases(&mut self, name: &str, value: &str, variations: &Variations) -> usize {
        let mut diags = Diagnostics::new();

        let mut parser = ExpressionParser::new(&self.aliases, &self.host, &self.config);
        let parsed = parser.parse_alias_value(value);
        for warning in parser.into_warnings() {
            diags.warning(warning);
        }
        let value_type = match parsed {
            Ok(value_type) => value_type,
            Err(err) => {
                diags.error(err);
                diags.flush(self.sink.as_ref(), Some(&format!("'{value}' is invalid")));
                return 0;
            }
        };

        let context = format!("'{name}'");
        let pattern = match parse_pattern(name) {
            Ok(pattern) => pattern,
            Err(err) => {
                diags.error(err.with_context(ErrorContext::new().with_source(name)));
                diags.flush(self.sink.as_ref(), Some(&context));
                return 0;
            }
        };

        let expansion = Expander::new(variations)
            .with_max_bindings(self.config.max_expansions)
            .expand(&pattern, &value_type);
        diags.extend(expansion.errors, expansion.warnings);

        let mut seen = HashSet::new();
        let mut batch = Vec::new();
        for (raw, item) in expansion.bindings {
            let display = normalize_display(&raw);
            if let Err(err) = validate_alias(&display) {
                diags.error(err);
                continue;
            }
            let key = display.to_lowercase();
            if let Some(data) = item.single() {
                self.names.record_alias(&display, data);
            }
            self.aliases.insert(key.clone(), item);
            if seen.insert(key.clone()) {
                batch.push(key);
            }
        }

        let linked = link_forms(&mut self.aliases, &batch);
        debug!(pattern = name, count = batch.len(), linked, "registered aliases");
        diags.flush(self.sink.as_ref(), Some(&context));
        batch.len()
    }

    /// Parses an alias value such as `17:1-3, 162` or `*`.
    ///
    /// # Errors
    /// Fails if the value is empty or any clause is invalid.
    pub fn parse_alias_value(&self, s: &str) -> Result<ItemType> {
        let mut parser = ExpressionParser::new(&self.aliases, &self.host, &self.config);
        let result = parser.parse_alias_value(s);
        self.report_warnings(parser.into_warnings());
        result
    }

    /// Parses a script expression such as `2 of every red wool`.
    ///
    /// # Errors
    /// Fails on empty or composite input, bad amounts, and unresolvable or
    /// invalid types.
    pub fn parse_expression(&self, s: &str) -> Result<ItemType> {
        let mut parser = ExpressionParser::new(&self.aliases, &self.host, &self.config);
        let result = parser.parse_expression(s);
        self.report_warnings(parser.into_warnings());
        result
    }

    /// Parses a script expression, consulting `local` aliases first.
    ///
    /// # Errors
    /// As [`Self::parse_expression`].
    pub fn parse_expression_with(&self, local: &AliasRegistry, s: &str) -> Result<ItemType> {
        let mut parser =
            ExpressionParser::new(&self.aliases, &self.host, &self.config).with_local(local);
        let result = parser.parse_expression(s);
        self.report_warnings(parser.into_warnings());
        result
    }

    /// Returns the best name for a material and data range.
    #[must_use]
    pub fn resolve_name(&self, id: i32, data_min: i16, data_max: i16) -> String {
        self.names
            .resolve(id, DataRange::new(data_min, data_max), self.host.max_block_id())
    }

    /// Returns the best name for a material with one data value.
    #[must_use]
    pub fn resolve_name_single(&self, id: i32, data: i16) -> String {
        self.resolve_name(id, data, data)
    }

    /// Names every host material that no alias named.
    ///
    /// Returns how many names were added.
    pub fn fill_missing_material_names(&mut self) -> usize {
        let added = self.names.fill_missing(&self.host);
        if !added.is_empty() && self.config.report_missing_names {
            let ids: Vec<String> = added
                .iter()
                .map(|&id| {
                    if id == ItemData::WILDCARD_ID {
                        "<any>".to_string()
                    } else {
                        id.to_string()
                    }
                })
                .collect();
            self.sink.report_warning(&format!(
                "There are no aliases defined for the following ids: {}",
                ids.join(", ")
            ));
        }
        debug!(count = added.len(), "filled missing material names");
        added.len()
    }

    /// Returns a copy of the catalog sharing unchanged structure.
    #[must_use]
    pub fn snapshot(&self) -> Self
    where
        H: Clone,
    {
        self.clone()
    }

    fn report_warnings(&self, warnings: Vec<String>) {
        for warning in &warnings {
            self.sink.report_warning(warning);
        }
    }
}
