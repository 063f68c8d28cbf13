//! Standard English lexicon.
//!
//! Word lists used to seed [`LexiconTagger::standard`](crate::tagger::LexiconTagger::standard).
//! Anything not listed here is tagged by its shape.

/// Articles and other determiners.
pub const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
];

/// Personal pronouns.
pub const PRONOUNS: &[&str] = &["he", "she", "it", "they", "we", "i", "you", "him", "them"];

/// Possessive pronouns.
pub const POSSESSIVES: &[&str] = &["his", "her", "its", "their", "our", "my", "your"];

/// Modal auxiliaries.
pub const MODALS: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would",
];

/// Verbs that appear in class descriptions.
///
/// Inflected forms only, so base forms such as `run` still work as names.
pub const VERBS: &[&str] = &[
    "is",
    "are",
    "was",
    "were",
    "be",
    "has",
    "have",
    "had",
    "needs",
    "needed",
    "prints",
    "printed",
    "uses",
    "used",
    "increases",
    "increased",
    "decreases",
    "decreased",
    "returns",
    "returned",
    "does",
];

/// Prepositions.
pub const PREPOSITIONS: &[&str] = &[
    "in", "by", "of", "with", "at", "on", "from", "into", "for", "about",
];

/// The infinitive marker.
pub const INFINITIVE: &[&str] = &["to"];

/// Coordinating conjunctions.
pub const CONJUNCTIONS: &[&str] = &["and", "or", "but"];

/// Adverbs.
pub const ADVERBS: &[&str] = &["then", "now", "also", "again", "just", "not"];
