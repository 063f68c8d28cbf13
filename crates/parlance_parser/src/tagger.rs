//! Part-of-speech tagging.
//!
//! The parser only needs a handful of distinctions: nouns (for the class
//! name), pronouns and modals (for the `he can` lead-in), and the shapes
//! of punctuation and literals. [`Tagger`] is the seam; [`LexiconTagger`]
//! is the lexicon-backed implementation shipped with the crate.

use std::collections::HashMap;
use std::fmt;

use crate::lexicon;
use crate::tokenizer::Token;

/// A part-of-speech tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Common noun, or any unknown word.
    Noun,
    /// Personal pronoun.
    Pronoun,
    /// Possessive pronoun.
    Possessive,
    /// Determiner.
    Determiner,
    /// Verb.
    Verb,
    /// Modal auxiliary.
    Modal,
    /// Preposition.
    Preposition,
    /// The infinitive marker `to`.
    Infinitive,
    /// Coordinating conjunction.
    Conjunction,
    /// Adverb.
    Adverb,
    /// Cardinal number.
    Number,
    /// Quoted string literal.
    Literal,
    /// Sentence or clause punctuation.
    Punctuation,
    /// A symbol such as `=`.
    Symbol,
}

impl Tag {
    /// Returns the Penn Treebank label for this tag.
    #[must_use]
    pub const fn penn(self) -> &'static str {
        match self {
            Self::Noun => "NN",
            Self::Pronoun => "PRP",
            Self::Possessive => "PRP$",
            Self::Determiner => "DT",
            Self::Verb => "VBZ",
            Self::Modal => "MD",
            Self::Preposition => "IN",
            Self::Infinitive => "TO",
            Self::Conjunction => "CC",
            Self::Adverb => "RB",
            Self::Number => "CD",
            Self::Literal => "LIT",
            Self::Punctuation => ".",
            Self::Symbol => "SYM",
        }
    }

    /// Returns true for nouns.
    #[must_use]
    pub const fn is_noun(self) -> bool {
        matches!(self, Self::Noun)
    }

    /// Returns true for tags that can never name something.
    #[must_use]
    pub const fn is_separator(self) -> bool {
        matches!(self, Self::Punctuation | Self::Symbol | Self::Literal)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.penn())
    }
}

/// A token paired with its tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaggedToken {
    /// The token.
    pub token: Token,
    /// Its part-of-speech tag.
    pub tag: Tag,
}

impl TaggedToken {
    /// Creates a new tagged token.
    #[must_use]
    pub fn new(token: Token, tag: Tag) -> Self {
        Self { token, tag }
    }

    /// Returns the token text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.token.text
    }

    /// Returns the token's index in the paragraph.
    #[must_use]
    pub fn index(&self) -> usize {
        self.token.index
    }

    /// Returns true if this token is the given word.
    #[must_use]
    pub fn is(&self, word: &str) -> bool {
        self.token.is(word)
    }

    /// Returns true if this token can be used as a name.
    #[must_use]
    pub fn is_name(&self) -> bool {
        !self.tag.is_separator()
    }
}

/// Assigns part-of-speech tags to tokens.
///
/// Implementations must be pure: the same tokens always get the same tags.
pub trait Tagger: Send + Sync {
    /// Tags a single word.
    fn tag_word(&self, word: &str) -> Tag;

    /// Tags a token sequence.
    fn tag(&self, tokens: &[Token]) -> Vec<TaggedToken> {
        tokens
            .iter()
            .map(|t| TaggedToken::new(t.clone(), self.tag_word(&t.text)))
            .collect()
    }
}

/// A tagger backed by a word → tag registry.
#[derive(Clone, Debug, Default)]
pub struct LexiconTagger {
    words: HashMap<String, Tag>,
}

impl LexiconTagger {
    /// Creates a tagger with an empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tagger seeded with the standard English lexicon.
    #[must_use]
    pub fn standard() -> Self {
        let mut tagger = Self::new();
        tagger.register_all(lexicon::DETERMINERS, Tag::Determiner);
        tagger.register_all(lexicon::PRONOUNS, Tag::Pronoun);
        tagger.register_all(lexicon::POSSESSIVES, Tag::Possessive);
        tagger.register_all(lexicon::MODALS, Tag::Modal);
        tagger.register_all(lexicon::VERBS, Tag::Verb);
        tagger.register_all(lexicon::PREPOSITIONS, Tag::Preposition);
        tagger.register_all(lexicon::INFINITIVE, Tag::Infinitive);
        tagger.register_all(lexicon::CONJUNCTIONS, Tag::Conjunction);
        tagger.register_all(lexicon::ADVERBS, Tag::Adverb);
        tagger
    }

    /// Registers a word with a tag, replacing any earlier entry.
    pub fn register(&mut self, word: &str, tag: Tag) {
        self.words.insert(word.to_lowercase(), tag);
    }

    /// Registers several words with the same tag.
    pub fn register_all(&mut self, words: &[&str], tag: Tag) {
        for word in words {
            self.register(word, tag);
        }
    }

    /// Looks up a word in the lexicon.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<Tag> {
        self.words.get(word).copied()
    }

    /// Returns the number of registered words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no words are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Tagger for LexiconTagger {
    fn tag_word(&self, word: &str) -> Tag {
        self.lookup(word).unwrap_or_else(|| tag_by_shape(word))
    }
}

/// Tags a word that is not in any lexicon.
#[must_use]
pub fn tag_by_shape(word: &str) -> Tag {
    match word {
        "," | "." | ";" | ":" | "!" | "?" => Tag::Punctuation,
        "=" => Tag::Symbol,
        w if w.len() >= 2 && w.starts_with('"') && w.ends_with('"') => Tag::Literal,
        w if w.starts_with("``") => Tag::Literal,
        w if w.bytes().any(|b| b.is_ascii_digit()) && w.parse::<f64>().is_ok() => Tag::Number,
        _ => Tag::Noun,
    }
}
