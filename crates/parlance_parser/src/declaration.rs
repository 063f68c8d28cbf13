//! Class declaration and property sentence.
//!
//! Reads the first two sentences of a paragraph:
//!
//! ```text
//! A dog is a class. He has mood = "happy", energy = 100.
//!   ^^^                   ^^^^^^^^^^^^^^^^  ^^^^^^^^^^^^
//!   class name            property          property
//! ```

use parlance_debug::Tracer;
use parlance_foundation::{Error, Result, Stage};
use parlance_language::PropertyDecl;

use crate::cursor::TokenCursor;

/// The class name and its properties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Class name as written.
    pub name: String,
    /// Properties in declaration order.
    pub properties: Vec<PropertyDecl>,
}

/// Parses the declaration and property sentences.
///
/// On success the cursor sits on the first token after the property
/// sentence.
///
/// # Errors
///
/// Returns `MissingClassKeyword` or `ClassNameNotFound` for a bad
/// declaration, and `MalformedPropertySentence` when a property has no
/// name, has an empty default, or the sentence never ends.
pub fn parse_declaration(cursor: &mut TokenCursor<'_>, tracer: &mut Tracer) -> Result<Declaration> {
    let k = cursor.find("class").ok_or_else(Error::missing_class_keyword)?;

    let name = cursor.tokens()[..k]
        .iter()
        .rev()
        .find(|t| t.tag.is_noun())
        .ok_or_else(|| Error::class_name_not_found(k))?
        .text()
        .to_string();
    tracer.class_found(&name, k);

    cursor.seek(k + 1);
    let Some(stop) = cursor.find(".") else {
        return Err(Error::unexpected_end(
            Stage::Declaration,
            "`.` ending the class declaration",
        ));
    };
    cursor.seek(stop + 1);

    let properties = parse_properties(cursor, tracer)?;
    Ok(Declaration { name, properties })
}

/// Parses `name = default` pairs up to the next `.`.
fn parse_properties(cursor: &mut TokenCursor<'_>, tracer: &mut Tracer) -> Result<Vec<PropertyDecl>> {
    let start = cursor.position();
    let mut properties = Vec::new();

    loop {
        let Some(token) = cursor.peek() else {
            return Err(Error::malformed_property(
                cursor.position(),
                "property sentence has no closing `.`",
            ));
        };

        if token.is(".") {
            cursor.advance();
            return Ok(properties);
        }

        if !token.is("=") {
            cursor.advance();
            continue;
        }

        let at = cursor.position();
        let name = at
            .checked_sub(1)
            .filter(|&prev| prev >= start)
            .and_then(|prev| cursor.get(prev))
            .filter(|t| t.is_name())
            .ok_or_else(|| Error::malformed_property(at, "`=` has no property name before it"))?
            .text()
            .to_string();
        cursor.advance();

        let mut default = String::new();
        loop {
            match cursor.peek() {
                Some(t) if t.is(",") || t.is(".") => break,
                Some(t) => {
                    default.push_str(t.text());
                    cursor.advance();
                }
                None => {
                    return Err(Error::malformed_property(
                        at,
                        format!("default for `{name}` is not followed by `,` or `.`"),
                    ));
                }
            }
        }

        if default.is_empty() {
            return Err(Error::malformed_property(
                at,
                format!("property `{name}` has no default value"),
            ));
        }

        let default = normalize_quote_artifact(&default);
        tracer.property_parsed(&name, &default);
        properties.push(PropertyDecl::new(name, default));
    }
}

/// Rewrites a ``` ``text'' ``` default as `"text"`.
///
/// Some tokenizers turn `"text"` into ``` `` ``` and `''`. The first and
/// last two characters are dropped and the rest re-quoted; anything else
/// is returned unchanged.
#[must_use]
pub fn normalize_quote_artifact(default: &str) -> String {
    if default.starts_with("``") && default.len() >= 4 {
        let mut chars = default.chars();
        chars.next();
        chars.next();
        chars.next_back();
        chars.next_back();
        format!("\"{}\"", chars.as_str())
    } else {
        default.to_string()
    }
}
