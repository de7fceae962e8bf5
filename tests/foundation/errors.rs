//! Integration tests for Error types
//!
//! Tests error display, classes, context, and diagnostic reporting.

use itemalias_foundation::{
    DiagnosticSink, Diagnostics, Error, ErrorClass, ErrorContext, ErrorKind, RecordingSink,
    Severity,
};

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn error_unknown_material() {
    let err = Error::new(ErrorKind::UnknownMaterial(4242));
    assert_eq!(err.to_string(), "there doesn't exist a material with id 4242");
    assert_eq!(err.class(), ErrorClass::Validation);
}

#[test]
fn error_block_data() {
    let err = Error::new(ErrorKind::BlockDataOutOfRange { limit: 15 });
    assert!(err.to_string().contains("0 to 15"));
}

#[test]
fn error_malformed_pattern() {
    let err = Error::malformed_pattern("unclosed '('", 4);
    assert_eq!(err.class(), ErrorClass::Grammar);
    assert!(err.to_string().contains("column 4"));
}

#[test]
fn error_class_display() {
    assert_eq!(ErrorClass::Grammar.to_string(), "grammar");
    assert_eq!(ErrorClass::Validation.to_string(), "validation");
}

#[test]
fn context_without_source_is_empty() {
    assert_eq!(ErrorContext::new().with_column(3).to_string(), "");
}

// =============================================================================
// Diagnostics
// =============================================================================

#[test]
fn diagnostics_flush_without_context() {
    let sink = RecordingSink::new();
    let mut diags = Diagnostics::new();
    diags.error(Error::new(ErrorKind::EmptyInput));
    diags.flush(&sink, None);
    assert_eq!(sink.errors(), vec!["empty item type".to_string()]);
}

#[test]
fn diagnostics_extend_keeps_one_per_kind() {
    let mut diags = Diagnostics::new();
    diags.extend(
        [
            Error::unknown_variation("a"),
            Error::unknown_variation("b"),
            Error::malformed_pattern("x", 1),
        ],
        vec!["w".to_string()],
    );
    assert!(diags.has_errors());
    assert_eq!(diags.errors().len(), 2);
    assert_eq!(diags.warnings(), &["w".to_string()]);
}

#[test]
fn recording_sink_keeps_order() {
    let sink = RecordingSink::new();
    sink.report_warning("first");
    sink.report_error("second");
    let records = sink.records();
    assert_eq!(records[0].severity, Severity::Warning);
    assert_eq!(records[1].message, "second");
    sink.clear();
    assert!(sink.records().is_empty());
}
