//! Word tokenization.
//!
//! Converts a paragraph into a stream of lowercase word and punctuation
//! tokens.

use std::fmt;

/// A token from a paragraph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Lowercase word, punctuation mark, or quoted literal.
    pub text: String,
    /// Position in the token sequence.
    pub index: usize,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }

    /// Returns true if this token is a single punctuation mark.
    #[must_use]
    pub fn is_punctuation(&self) -> bool {
        matches!(self.text.as_str(), "," | "." | ";" | ":" | "!" | "?")
    }

    /// Returns true if this token is a quoted string literal.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        self.text.len() >= 2 && self.text.starts_with('"') && self.text.ends_with('"')
    }

    /// Returns true if this token is the given word.
    #[must_use]
    pub fn is(&self, word: &str) -> bool {
        self.text == word
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Tokenizes paragraphs.
///
/// - Converts text to lowercase
/// - `,` `;` `!` `?` and `=` are always tokens of their own
/// - `.` and `:` split only at the end of a word, so `self.energy` stays whole
/// - Quoted strings (straight or curly quotes) are one token, re-quoted with `"`
/// - Text inside balanced brackets stays in the current word, minus spaces
///   outside quoted literals
#[derive(Clone, Copy, Debug, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Tokenizes a paragraph into tokens.
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<Token> {
        let lower = input.to_lowercase();
        let mut texts: Vec<String> = Vec::new();
        let mut chars = lower.chars().peekable();
        let mut current = String::new();
        let mut depth = 0usize;
        let mut in_literal = false;

        while let Some(ch) = chars.next() {
            if in_literal {
                if matches!(ch, '"' | '“' | '”') {
                    in_literal = false;
                    current.push('"');
                } else {
                    current.push(ch);
                }
                continue;
            }

            if depth > 0 {
                match ch {
                    '"' | '“' | '”' => {
                        in_literal = true;
                        current.push('"');
                    }
                    '(' | '[' | '{' => {
                        depth += 1;
                        current.push(ch);
                    }
                    ')' | ']' | '}' => {
                        depth -= 1;
                        current.push(ch);
                    }
                    c if c.is_whitespace() => {}
                    c => current.push(c),
                }
                continue;
            }

            match ch {
                '"' | '“' | '”' => {
                    flush(&mut current, &mut texts);
                    let mut quoted = String::from('"');
                    for c in chars.by_ref() {
                        if matches!(c, '"' | '”' | '“') {
                            break;
                        }
                        quoted.push(c);
                    }
                    quoted.push('"');
                    texts.push(quoted);
                }
                '(' | '[' | '{' => {
                    depth += 1;
                    current.push(ch);
                }
                ',' | ';' | '!' | '?' | '=' => {
                    flush(&mut current, &mut texts);
                    texts.push(ch.to_string());
                }
                '.' | ':' => {
                    let ends_word = chars.peek().is_none_or(|c| c.is_whitespace());
                    if ends_word {
                        flush(&mut current, &mut texts);
                        texts.push(ch.to_string());
                    } else {
                        current.push(ch);
                    }
                }
                c if c.is_whitespace() => flush(&mut current, &mut texts),
                c => current.push(c),
            }
        }

        flush(&mut current, &mut texts);

        texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| Token::new(text, index))
            .collect()
    }

    /// Tokenizes and returns only the token texts.
    #[must_use]
    pub fn words(input: &str) -> Vec<String> {
        Self::tokenize(input).into_iter().map(|t| t.text).collect()
    }
}

fn flush(current: &mut String, texts: &mut Vec<String>) {
    if !current.is_empty() {
        texts.push(std::mem::take(current));
    }
}
