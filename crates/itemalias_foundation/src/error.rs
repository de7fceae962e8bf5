//! Error types for the itemalias system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for itemalias operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a malformed pattern error at the given column.
    #[must_use]
    pub fn malformed_pattern(message: impl Into<String>, column: usize) -> Self {
        Self::new(ErrorKind::MalformedPattern {
            message: message.into(),
            column,
        })
    }

    /// Creates an unknown variation error.
    #[must_use]
    pub fn unknown_variation(tag: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownVariation(tag.into()))
    }

    /// Creates an error for a data range that is not syntactically valid.
    #[must_use]
    pub fn invalid_data_range(text: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDataRange(text.into()))
    }

    /// Creates an unresolved type error ("neither an id nor an alias").
    #[must_use]
    pub fn unresolved_type(text: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnresolvedType(text.into()))
    }

    /// Returns the class this error belongs to.
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        self.kind.class()
    }
}

/// Categorized error kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Unbalanced or empty group in an alias pattern.
    #[error("malformed alias pattern at column {column}: {message}")]
    MalformedPattern {
        /// Description of what is wrong.
        message: String,
        /// 1-based column of the offending character.
        column: usize,
    },

    /// A parenthesised group with only one alternative.
    #[error("brackets have a special meaning in aliases and cannot be used as usual: ({0})")]
    SingleAlternative(String),

    /// A `{tag}` that names no known variation set.
    #[error("unknown variation {{{0}}}")]
    UnknownVariation(String),

    /// Expansion of a single pattern exceeded a configured limit.
    #[error("alias pattern expands to too many names (limit {limit})")]
    ExpansionLimit {
        /// The limit that was hit.
        limit: usize,
    },

    /// Variation keys kept rewriting a name past the depth limit.
    #[error("alias pattern nests variations deeper than {depth} levels")]
    ExpansionTooDeep {
        /// The depth that was exceeded.
        depth: usize,
    },

    /// Alias name is empty once whitespace is removed.
    #[error("aliases must not be empty")]
    EmptyAlias,

    /// Alias name begins with a digit.
    #[error("aliases must not start with a number: '{0}'")]
    AliasStartsWithNumber(String),

    /// Alias name contains composite-expression syntax.
    #[error("aliases must not contain syntax elements (comma, 'and', 'or'): '{0}'")]
    AliasContainsSyntax(String),

    /// Data part is not of the form `a`, `a-b`, `a-`, `-b` or empty.
    #[error("'{0}' is not a valid item data")]
    InvalidDataRange(String),

    /// Data range whose upper bound is below its lower bound.
    #[error("the first number of a data range must be smaller than the second ({min}-{max})")]
    ReversedDataRange {
        /// Lower bound as written.
        min: i16,
        /// Upper bound as written.
        max: i16,
    },

    /// Data range outside `0..=limit` applied to a block.
    #[error("blocks only have data values from 0 to {limit}")]
    BlockDataOutOfRange {
        /// The highest data value a block can carry.
        limit: i16,
    },

    /// Numeric id that the host catalog does not know.
    #[error("there doesn't exist a material with id {0}")]
    UnknownMaterial(i32),

    /// Type part that is neither an id nor a known alias.
    #[error("'{0}' is neither an id nor an alias")]
    UnresolvedType(String),

    /// Data part that excludes every entry of the referenced alias.
    #[error("'{0}' does not match any data value of the referenced type")]
    DataMismatch(String),

    /// Expression contains `,`, `and` or `or` at the top level.
    #[error("'{0}' is a list of types, not a single type")]
    CompositeExpression(String),

    /// Nothing to parse.
    #[error("empty item type")]
    EmptyInput,

    /// Expression resolved to no entries at all.
    #[error("'{0}' does not describe any item")]
    EmptyType(String),

    /// Quantity prefix does not fit an amount.
    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),
}

impl ErrorKind {
    /// Returns the class this error kind belongs to.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::MalformedPattern { .. }
            | Self::SingleAlternative(_)
            | Self::UnknownVariation(_)
            | Self::ExpansionLimit { .. }
            | Self::ExpansionTooDeep { .. } => ErrorClass::Grammar,
            _ => ErrorClass::Validation,
        }
    }

    /// Returns a stable code used to deduplicate reports of the same kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MalformedPattern { .. } => "malformed-pattern",
            Self::SingleAlternative(_) => "single-alternative",
            Self::UnknownVariation(_) => "unknown-variation",
            Self::ExpansionLimit { .. } => "expansion-limit",
            Self::ExpansionTooDeep { .. } => "expansion-too-deep",
            Self::EmptyAlias => "empty-alias",
            Self::AliasStartsWithNumber(_) => "alias-starts-with-number",
            Self::AliasContainsSyntax(_) => "alias-contains-syntax",
            Self::InvalidDataRange(_) => "invalid-data-range",
            Self::ReversedDataRange { .. } => "reversed-data-range",
            Self::BlockDataOutOfRange { .. } => "block-data-out-of-range",
            Self::UnknownMaterial(_) => "unknown-material",
            Self::UnresolvedType(_) => "unresolved-type",
            Self::DataMismatch(_) => "data-mismatch",
            Self::CompositeExpression(_) => "composite-expression",
            Self::EmptyInput => "empty-input",
            Self::EmptyType(_) => "empty-type",
            Self::InvalidAmount(_) => "invalid-amount",
        }
    }
}

/// Broad grouping of error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// Malformed alias pattern; only the affected sub-pattern is dropped.
    Grammar,
    /// Rejected alias name, data range, id or reference.
    Validation,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grammar => write!(f, "grammar"),
            Self::Validation => write!(f, "validation"),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// The input text the error was raised for.
    pub source: Option<String>,
    /// 1-based column in the source.
    pub column: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source text.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the column.
    #[must_use]
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in '{source}'")?;
            if let Some(col) = self.column {
                write!(f, " at column {col}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias using the itemalias error.
pub type Result<T> = std::result::Result<T, Error>;
