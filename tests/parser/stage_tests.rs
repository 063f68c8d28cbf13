//! Stage parser tests.
//!
//! Drives the declaration, catalog and body stages directly over a cursor.

use parlance_debug::Tracer;
use parlance_foundation::ErrorKind;
use parlance_parser::body::parse_bodies;
use parlance_parser::catalog::parse_catalog;
use parlance_parser::declaration::parse_declaration;
use parlance_parser::{LexiconTagger, TaggedToken, Tagger, TokenCursor, WordTokenizer};

fn tagged(text: &str) -> Vec<TaggedToken> {
    LexiconTagger::standard().tag(&WordTokenizer::tokenize(text))
}

#[test]
fn stages_consume_the_paragraph_in_sequence() {
    let tokens = tagged(
        "A lamp is a class. It has lit = false. It can toggle. \
         To toggle self.lit now is not self.lit, end.",
    );
    let mut cursor = TokenCursor::new(&tokens);
    let mut tracer = Tracer::disabled();

    let declaration = parse_declaration(&mut cursor, &mut tracer).unwrap();
    assert_eq!(declaration.name, "lamp");
    assert_eq!(declaration.properties[0].default, "false");

    let catalog = parse_catalog(&mut cursor, &mut tracer).unwrap();
    let names: Vec<_> = catalog.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["toggle"]);
    assert_eq!(catalog[0].at, 14);

    let bodies = parse_bodies(&mut cursor, &mut tracer).unwrap();
    assert_eq!(bodies.len(), 1);
    assert!(cursor.is_at_end());
}

#[test]
fn property_defaults_keep_quotes() {
    let tokens = tagged("A cat is a class. It has name = \"Tom\", greeting = \"hi there\".");
    let mut cursor = TokenCursor::new(&tokens);
    let declaration = parse_declaration(&mut cursor, &mut Tracer::disabled()).unwrap();
    let defaults: Vec<_> = declaration.properties.iter().map(|p| p.default.as_str()).collect();
    assert_eq!(defaults, vec!["\"tom\"", "\"hi there\""]);
}

#[test]
fn property_sentence_may_follow_any_declaration_length() {
    let tokens = tagged("Every small furry cat is a class of animal. It has x = 1.");
    let mut cursor = TokenCursor::new(&tokens);
    let declaration = parse_declaration(&mut cursor, &mut Tracer::disabled()).unwrap();
    assert_eq!(declaration.name, "cat");
    assert_eq!(declaration.properties.len(), 1);
}

#[test]
fn catalog_requires_pronoun_then_modal() {
    let tokens = tagged("Can he bark.");
    let mut cursor = TokenCursor::new(&tokens);
    let err = parse_catalog(&mut cursor, &mut Tracer::disabled()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnexpectedToken { at: 0, .. }));
}

#[test]
fn body_param_requires_a_name() {
    let tokens = tagged("To walk he needs , end.");
    let mut cursor = TokenCursor::new(&tokens);
    let err = parse_bodies(&mut cursor, &mut Tracer::disabled()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnexpectedToken { at: 4, .. }));
}
