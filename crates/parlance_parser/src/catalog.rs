//! Method catalog sentence.
//!
//! `He can bark, run and lay.` declares the methods of the class. The order
//! of names here is the order of the generated method blocks.

use parlance_debug::Tracer;
use parlance_foundation::{Error, Result, Stage};

use crate::cursor::TokenCursor;
use crate::tagger::Tag;

/// A method name declared in the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Method name.
    pub name: String,
    /// Index of the name token.
    pub at: usize,
}

/// Parses the method catalog sentence and returns method names in order.
///
/// # Errors
///
/// Returns `UnexpectedToken` if the sentence does not open with a pronoun
/// and a modal, or if a name is repeated or is not a word.
/// Returns `UnexpectedEnd` if the sentence has no closing `.`, and
/// `EmptyMethodList` if it names no methods.
pub fn parse_catalog(
    cursor: &mut TokenCursor<'_>,
    tracer: &mut Tracer,
) -> Result<Vec<CatalogEntry>> {
    let at = cursor.position();
    cursor.expect_tag(Tag::Pronoun, "a pronoun such as `he`", Stage::Catalog)?;
    cursor.expect_tag(Tag::Modal, "a modal such as `can`", Stage::Catalog)?;

    let mut names: Vec<CatalogEntry> = Vec::new();
    loop {
        let Some(token) = cursor.advance() else {
            return Err(Error::unexpected_end(
                Stage::Catalog,
                "`.` closing the method list",
            ));
        };

        match token.text() {
            "." => break,
            "," | "and" => {}
            name if !token.is_name() || names.iter().any(|n| n.name == name) => {
                return Err(Error::unexpected_token(
                    Stage::Catalog,
                    "a new method name",
                    name,
                    token.index(),
                ));
            }
            name => {
                tracer.method_declared(name);
                names.push(CatalogEntry {
                    name: name.to_string(),
                    at: token.index(),
                });
            }
        }
    }

    if names.is_empty() {
        return Err(Error::empty_method_list(at));
    }
    Ok(names)
}
