//! Parser integration tests.
//!
//! End-to-end tests of `ClassParser` from text to `ClassDecl`.

use parlance_debug::Tracer;
use parlance_foundation::{ErrorKind, MethodMismatch, Stage};
use parlance_language::{Action, ActionKind};
use parlance_parser::ClassParser;

const DOG: &str = include_str!("../../demos/dog.txt");

fn parse(text: &str) -> parlance_foundation::Result<parlance_language::ClassDecl> {
    ClassParser::new().parse(text, &mut Tracer::disabled())
}

#[test]
fn dog_declaration() {
    let class = parse(DOG).unwrap();
    assert_eq!(class.name(), "dog");
    let properties: Vec<_> = class
        .properties()
        .iter()
        .map(|p| (p.name.as_str(), p.default.as_str()))
        .collect();
    assert_eq!(
        properties,
        vec![("mood", "\"happy\""), ("energy", "100"), ("x", "0"), ("y", "0")]
    );
}

#[test]
fn dog_methods_in_catalog_order() {
    let class = parse(DOG).unwrap();
    let names: Vec<_> = class.methods().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["bark", "run", "moveleft", "moveright", "moveforward", "lay", "check"]
    );
}

#[test]
fn dog_parameters() {
    let class = parse(DOG).unwrap();
    for name in ["moveleft", "moveright", "moveforward"] {
        assert_eq!(class.method(name).unwrap().param.as_deref(), Some("steps"));
    }
    for name in ["bark", "run", "lay", "check"] {
        assert_eq!(class.method(name).unwrap().param, None);
    }
}

#[test]
fn dog_run_actions() {
    let class = parse(DOG).unwrap();
    let kinds: Vec<_> = class.method("run").unwrap().actions.iter().map(Action::kind).collect();
    assert_eq!(
        kinds,
        vec![ActionKind::Call, ActionKind::Decrease, ActionKind::Assign, ActionKind::Return]
    );
}

#[test]
fn paragraph_may_span_lines() {
    let text = "A bell is a class.\nIt has rung = 0.\nIt can ring.\nTo ring it prints \"ding\", end.\n";
    let class = parse(text).unwrap();
    assert_eq!(class.name(), "bell");
    assert_eq!(class.methods().len(), 1);
}

#[test]
fn surrounding_blank_lines_are_ignored() {
    let class = parse(&format!("\n\n\n{DOG}\n\n\n")).unwrap();
    assert_eq!(class.name(), "dog");
}

#[test]
fn body_order_does_not_matter() {
    let a = parse("A cat is a class. It has x = 0. It can eat and nap. To eat return 1, end. To nap return 2, end.")
        .unwrap();
    let b = parse("A cat is a class. It has x = 0. It can eat and nap. To nap return 2, end. To eat return 1, end.")
        .unwrap();
    assert_eq!(a, b);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn missing_end_fails_whole_paragraph() {
    let text = DOG.replace("\"barking\", end.", "\"barking\".");
    let err = parse(&text).unwrap_err();
    assert_eq!(err.stage, Stage::MethodBody);
    assert!(matches!(err.kind, ErrorKind::UnterminatedMethodBody { ref method, .. } if method == "bark"));
}

#[test]
fn catalog_method_without_body() {
    let text = DOG.replace("Lay and Check", "Lay, Sleep and Check");
    let err = parse(&text).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::UnknownMethodReference { ref method, reason: MethodMismatch::NotDefined, .. }
            if method == "sleep"
    ));
}

#[test]
fn body_without_catalog_entry() {
    let text = DOG.replace("MoveForward, Lay", "Lay");
    let err = parse(&text).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::UnknownMethodReference { ref method, reason: MethodMismatch::NotDeclared, .. }
            if method == "moveforward"
    ));
}

#[test]
fn unknown_action_names_method_and_span() {
    let text = DOG.replace("he prints \"relax\"", "he dances wildly");
    let err = parse(&text).unwrap_err();
    assert_eq!(err.stage, Stage::Action);
    assert!(matches!(
        err.kind,
        ErrorKind::UnrecognizedAction { ref method, ref span, .. }
            if method == "lay" && span == "he dances wildly"
    ));
    assert_eq!(err.context.unwrap().token.as_deref(), Some("he"));
}

#[test]
fn missing_class_keyword() {
    let err = parse("A dog is an animal. He has x = 1.").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingClassKeyword));
}

#[test]
fn two_paragraphs_rejected() {
    let err = parse(&format!("{DOG}\n\n{DOG}")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MultipleParagraphs { count: 2 }));
}
