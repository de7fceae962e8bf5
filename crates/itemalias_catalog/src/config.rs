//! Configuration for alias loading and item type parsing.

/// Configuration for an [`AliasCatalog`](crate::AliasCatalog).
///
/// Controls validation limits and which problems are reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Highest data value a block id accepts in a `:data` suffix.
    pub block_data_max: i16,

    /// Warn when a plural name is used where a singular is expected, or the
    /// other way around.
    pub plural_warnings: bool,

    /// Warn about ids left without an alias by `fill_missing_material_names`.
    pub report_missing_names: bool,

    /// Maximum number of names a single alias pattern may expand to.
    pub max_expansions: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            block_data_max: 15,
            plural_warnings: true,
            report_missing_names: true,
            max_expansions: itemalias_pattern::DEFAULT_MAX_BINDINGS,
        }
    }
}

impl CatalogConfig {
    /// Creates a configuration with every report enabled.
    #[must_use]
    pub fn strict() -> Self {
        Self::default()
    }

    /// Creates a configuration that only reports errors.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            plural_warnings: false,
            report_missing_names: false,
            ..Self::default()
        }
    }

    /// Builder method to set the block data limit.
    #[must_use]
    pub fn with_block_data_max(mut self, max: i16) -> Self {
        self.block_data_max = max;
        self
    }

    /// Builder method to enable/disable plural warnings.
    #[must_use]
    pub fn with_plural_warnings(mut self, enabled: bool) -> Self {
        self.plural_warnings = enabled;
        self
    }

    /// Builder method to enable/disable the missing-name report.
    #[must_use]
    pub fn with_report_missing_names(mut self, enabled: bool) -> Self {
        self.report_missing_names = enabled;
        self
    }

    /// Builder method to set the expansion limit.
    #[must_use]
    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = max;
        self
    }
}
