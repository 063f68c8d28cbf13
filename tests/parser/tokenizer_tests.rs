//! Tokenizer and tagger tests.
//!
//! Tests for converting a paragraph to a tagged token stream.

use parlance_parser::{LexiconTagger, Tag, Tagger, WordTokenizer};

#[test]
fn tokenize_lowercases() {
    assert_eq!(WordTokenizer::words("A Dog IS a CLASS."), vec!["a", "dog", "is", "a", "class", "."]);
}

#[test]
fn tokenize_method_catalog() {
    assert_eq!(
        WordTokenizer::words("He can Bark, Run, MoveLeft and Check."),
        vec!["he", "can", "bark", ",", "run", ",", "moveleft", "and", "check", "."]
    );
}

#[test]
fn tokenize_body_terminator() {
    let words = WordTokenizer::words("return self.energy, end.");
    assert_eq!(words, vec!["return", "self.energy", ",", "end", "."]);
}

#[test]
fn tokenize_concatenation_expression() {
    assert_eq!(
        WordTokenizer::words("he prints \"energy: \" + str(self.energy)"),
        vec!["he", "prints", "\"energy: \"", "+", "str(self.energy)"]
    );
}

#[test]
fn tokenize_method_call_argument() {
    assert_eq!(
        WordTokenizer::words("he uses self.moveforward(2), end."),
        vec!["he", "uses", "self.moveforward(2)", ",", "end", "."]
    );
}

#[test]
fn tokenize_keeps_newlines_as_whitespace() {
    assert_eq!(WordTokenizer::words("he can\nbark."), vec!["he", "can", "bark", "."]);
}

#[test]
fn tagger_pronoun_modal_pairs() {
    let tagger = LexiconTagger::standard();
    for pronoun in ["he", "she", "it", "they"] {
        assert_eq!(tagger.tag_word(pronoun), Tag::Pronoun, "{pronoun}");
    }
    for modal in ["can", "could", "will", "should", "must"] {
        assert_eq!(tagger.tag_word(modal), Tag::Modal, "{modal}");
    }
}

#[test]
fn tagger_penn_labels() {
    let tagger = LexiconTagger::standard();
    let tagged = tagger.tag(&WordTokenizer::tokenize("he can bark and run 2 \"x\" ="));
    let labels: Vec<_> = tagged.iter().map(|t| t.tag.penn()).collect();
    assert_eq!(labels, vec!["PRP", "MD", "NN", "CC", "NN", "CD", "LIT", "SYM"]);
}

#[test]
fn custom_tagger_through_trait() {
    struct EverythingIsANoun;

    impl Tagger for EverythingIsANoun {
        fn tag_word(&self, _word: &str) -> Tag {
            Tag::Noun
        }
    }

    let tagged = EverythingIsANoun.tag(&WordTokenizer::tokenize("he can bark"));
    assert!(tagged.iter().all(|t| t.tag == Tag::Noun));
}
