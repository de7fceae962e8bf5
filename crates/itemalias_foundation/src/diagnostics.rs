//! Error and warning reporting.
//!
//! Loading aliases never aborts: bad patterns and values are reported and
//! skipped. Reports go to a [`DiagnosticSink`]. A [`Diagnostics`] collector
//! gathers the reports of one top-level call, keeps a single error per
//! error kind, and flushes them with a context line.

use std::collections::HashSet;

use parking_lot::Mutex;
use tracing::{error, warn};

use crate::error::Error;

/// Receives errors and warnings produced while loading or parsing.
pub trait DiagnosticSink: Send + Sync {
    /// Reports an error.
    fn report_error(&self, message: &str);
    /// Reports a warning.
    fn report_warning(&self, message: &str);
}

/// Forwards reports to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report_error(&self, message: &str) {
        error!(target: "itemalias", "{message}");
    }

    fn report_warning(&self, message: &str) {
        warn!(target: "itemalias", "{message}");
    }
}

/// Severity of a recorded report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Something was rejected.
    Error,
    /// Something looks wrong but was accepted.
    Warning,
}

/// A single recorded report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// How serious the report is.
    pub severity: Severity,
    /// The message text.
    pub message: String,
}

/// Keeps every report in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all reports in order.
    #[must_use]
    pub fn records(&self) -> Vec<Diagnostic> {
        self.records.lock().clone()
    }

    /// Returns the error messages in order.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.messages(Severity::Error)
    }

    /// Returns the warning messages in order.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.messages(Severity::Warning)
    }

    /// Forgets every report.
    pub fn clear(&self) {
        self.records.lock().clear();
    }

    fn messages(&self, severity: Severity) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .filter(|d| d.severity == severity)
            .map(|d| d.message.clone())
            .collect()
    }

    fn push(&self, severity: Severity, message: &str) {
        self.records.lock().push(Diagnostic {
            severity,
            message: message.to_string(),
        });
    }
}

impl DiagnosticSink for RecordingSink {
    fn report_error(&self, message: &str) {
        self.push(Severity::Error, message);
    }

    fn report_warning(&self, message: &str) {
        self.push(Severity::Warning, message);
    }
}

/// Reports gathered during one top-level call.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<Error>,
    warnings: Vec<String>,
    seen: HashSet<&'static str>,
}

impl Diagnostics {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error unless one of the same kind was already recorded.
    ///
    /// Returns true if the error was kept.
    pub fn error(&mut self, err: Error) -> bool {
        if !self.seen.insert(err.kind.code()) {
            return false;
        }
        self.errors.push(err);
        true
    }

    /// Records a warning.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Records a batch of errors and warnings.
    pub fn extend(
        &mut self,
        errors: impl IntoIterator<Item = Error>,
        warnings: impl IntoIterator<Item = String>,
    ) {
        for err in errors {
            self.error(err);
        }
        self.warnings.extend(warnings);
    }

    /// The errors kept so far.
    #[must_use]
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// The warnings recorded so far.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Returns true if any error was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Sends everything to the sink.
    ///
    /// When `context` is given, every error message is prefixed with it.
    pub fn flush(self, sink: &dyn DiagnosticSink, context: Option<&str>) {
        for err in &self.errors {
            match context {
                Some(ctx) => sink.report_error(&format!("{ctx}: {err}")),
                None => sink.report_error(&err.to_string()),
            }
        }
        for warning in &self.warnings {
            sink.report_warning(warning);
        }
    }
}
