//! String literals through the whole pipeline.

use parlance::parser::{LexiconTagger, Tag, TaggedToken, Tagger, Token};
use parlance::{Transpiler, TranspilerConfig, transpile};

#[test]
fn spaces_kept_inside_bracketed_literals() {
    let code = transpile(
        "A robot is a class. It has x = 0. It can talk. \
         To talk he prints str(\"a b\") + \"c d\" and he uses self.say(\"hello world\"), end.",
    )
    .unwrap();
    assert!(code.contains("        print(str(\"a b\") + \"c d\")\n"));
    assert!(code.contains("        self.say(\"hello world\")\n"));
}

#[test]
fn bracketed_property_default_keeps_literal() {
    let code = transpile(
        "A robot is a class. It has greeting = str(\"hi there\"). It can nap. To nap return 0, end.",
    )
    .unwrap();
    assert!(code.contains("    greeting = str(\"hi there\")\n"));
}

/// Emits quoted literals as ``` ``text'' ```, the way some sentence
/// tokenizers do.
struct BacktickTagger(LexiconTagger);

impl Tagger for BacktickTagger {
    fn tag_word(&self, word: &str) -> Tag {
        self.0.tag_word(word)
    }

    fn tag(&self, tokens: &[Token]) -> Vec<TaggedToken> {
        tokens
            .iter()
            .map(|t| {
                let text = match t.text.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
                    Some(inner) => format!("``{inner}''"),
                    None => t.text.clone(),
                };
                let tag = self.tag_word(&text);
                TaggedToken::new(Token::new(text, t.index), tag)
            })
            .collect()
    }
}

#[test]
fn quote_artifact_defaults_render_as_strings() {
    let transpiler = Transpiler::with_tagger(
        BacktickTagger(LexiconTagger::standard()),
        TranspilerConfig::new(),
    );
    let code = transpiler
        .transpile("A dog is a class. He has mood = \"happy\", name = \"good boy\". He can nap. To nap return 0, end.")
        .unwrap();
    assert!(code.starts_with("class Dog:\n    mood = \"happy\"\n    name = \"good boy\"\n"));
}
