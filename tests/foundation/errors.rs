//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use parlance_foundation::{Error, ErrorContext, ErrorKind, MethodMismatch, Stage};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_missing_class_keyword() {
    let err = Error::missing_class_keyword();
    assert_eq!(err.stage, Stage::Declaration);
    assert!(matches!(err.kind, ErrorKind::MissingClassKeyword));
    assert_eq!(err.position(), None);
}

#[test]
fn error_malformed_property() {
    let err = Error::malformed_property(12, "`=` has no property name before it");
    assert!(matches!(err.kind, ErrorKind::MalformedPropertySentence { at: 12, .. }));
    let msg = format!("{err}");
    assert!(msg.contains("12"));
    assert!(msg.contains("no property name"));
}

#[test]
fn error_empty_method_list() {
    let err = Error::empty_method_list(20);
    assert_eq!(err.stage, Stage::Catalog);
    assert_eq!(err.position(), Some(20));
}

#[test]
fn error_unterminated_body() {
    let err = Error::unterminated_body("bark", 31);
    let msg = format!("{err}");
    assert!(msg.starts_with("method body:"));
    assert!(msg.contains("`bark`"));
    assert!(msg.contains("`, end`"));
}

#[test]
fn error_unknown_method_both_ways() {
    let undeclared = Error::unknown_method("fly", MethodMismatch::NotDeclared, 30);
    let undefined = Error::unknown_method("fly", MethodMismatch::NotDefined, 12);
    assert!(undeclared.to_string().contains("not declared"));
    assert!(undefined.to_string().contains("no definition"));
    assert_eq!(undeclared.stage, Stage::Assembly);
    assert_eq!(undeclared.position(), Some(30));
    assert_eq!(undefined.position(), Some(12));
}

#[test]
fn error_unrecognized_action() {
    let err = Error::unrecognized_action("bark", "he jumps high", 40);
    assert_eq!(err.stage, Stage::Action);
    let msg = format!("{err}");
    assert!(msg.contains("he jumps high"));
    assert!(msg.contains("bark"));
}

#[test]
fn error_unexpected_token_and_end() {
    let err = Error::unexpected_token(Stage::Catalog, "a modal such as `can`", "has", 14);
    assert_eq!(err.to_string(), "method catalog: expected a modal such as `can`, found `has` at token 14");

    let err = Error::unexpected_end(Stage::Catalog, "`.`");
    assert_eq!(err.to_string(), "method catalog: unexpected end of paragraph, expected `.`");
}

#[test]
fn error_segmentation_kinds() {
    let empty = Error::new(Stage::Segmentation, ErrorKind::EmptyInput);
    let many = Error::new(Stage::Segmentation, ErrorKind::MultipleParagraphs { count: 3 });
    assert_eq!(empty.to_string(), "segmentation: input is empty");
    assert!(many.to_string().contains("found 3"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_is_optional() {
    let err = Error::duplicate_body("run", 50);
    assert!(err.context.is_none());
}

#[test]
fn context_supplies_position_when_kind_has_none() {
    let err = Error::unexpected_end(Stage::MethodBody, "`, end`")
        .with_context(ErrorContext::new().with_token(88, "barf"));
    assert_eq!(err.position(), Some(88));
}

#[test]
fn kind_position_wins_over_context() {
    let err = Error::duplicate_body("run", 50).with_context(ErrorContext::new().with_token(3, "x"));
    assert_eq!(err.position(), Some(50));
}

#[test]
fn error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&Error::missing_class_keyword());
    let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(Error::empty_method_list(0));
    assert!(boxed.to_string().contains("no method names"));
}
