//! Parser pipeline orchestration.
//!
//! [`ClassParser`] runs the stage parsers in order over one paragraph and
//! pairs the method catalog with the method bodies.

use std::collections::HashMap;

use parlance_debug::{TraceEvent, Tracer};
use parlance_foundation::{Error, ErrorContext, ErrorKind, MethodMismatch, Result, Stage};
use parlance_language::{ClassDecl, MethodDecl, PropertyDecl};

use crate::body::{MethodBody, parse_bodies};
use crate::catalog::{CatalogEntry, parse_catalog};
use crate::cursor::TokenCursor;
use crate::declaration::parse_declaration;
use crate::segment::non_blank_paragraphs;
use crate::tagger::{LexiconTagger, TaggedToken, Tagger};
use crate::tokenizer::WordTokenizer;

/// Tokens shown on each side of the failing token in error excerpts.
const EXCERPT_RADIUS: usize = 4;

/// Parses class paragraphs into [`ClassDecl`]s.
///
/// The tagger is supplied by the caller; [`ClassParser::new`] uses the
/// standard lexicon.
#[derive(Clone, Debug)]
pub struct ClassParser<T: Tagger = LexiconTagger> {
    tagger: T,
}

impl ClassParser<LexiconTagger> {
    /// Creates a parser with the standard lexicon tagger.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tagger(LexiconTagger::standard())
    }
}

impl Default for ClassParser<LexiconTagger> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Tagger> ClassParser<T> {
    /// Creates a parser with the given tagger.
    #[must_use]
    pub fn with_tagger(tagger: T) -> Self {
        Self { tagger }
    }

    /// Returns the tagger.
    #[must_use]
    pub fn tagger(&self) -> &T {
        &self.tagger
    }

    /// Parses a whole input text, which must hold exactly one paragraph.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` or `MultipleParagraphs` when the text does not
    /// hold exactly one non-blank paragraph, and any error from
    /// [`parse_paragraph`](Self::parse_paragraph).
    pub fn parse(&self, text: &str, tracer: &mut Tracer) -> Result<ClassDecl> {
        let paragraph = run_stage(tracer, Stage::Segmentation, |tracer| {
            let paragraphs = non_blank_paragraphs(text);
            let count = paragraphs.len();
            tracer.record(TraceEvent::ParagraphsSplit { count });

            let mut paragraphs = paragraphs.into_iter();
            match (paragraphs.next(), count) {
                (Some(paragraph), 1) => Ok(paragraph),
                (None, _) => Err(Error::new(Stage::Segmentation, ErrorKind::EmptyInput)),
                _ => Err(Error::new(
                    Stage::Segmentation,
                    ErrorKind::MultipleParagraphs { count },
                )),
            }
        })?;

        self.parse_paragraph(&paragraph, tracer)
    }

    /// Parses one class paragraph.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any stage. Errors that point at a
    /// token carry an [`ErrorContext`] with the token and nearby text.
    pub fn parse_paragraph(&self, paragraph: &str, tracer: &mut Tracer) -> Result<ClassDecl> {
        let tokens = run_stage(tracer, Stage::Tagging, |tracer| {
            let tokens = self.tagger.tag(&WordTokenizer::tokenize(paragraph));
            tracer.record(TraceEvent::TokensTagged {
                count: tokens.len(),
            });
            Ok(tokens)
        })?;

        parse_tokens(&tokens, tracer).map_err(|err| attach_context(err, &tokens))
    }
}

/// Runs the stage parsers over a tagged paragraph.
fn parse_tokens(tokens: &[TaggedToken], tracer: &mut Tracer) -> Result<ClassDecl> {
    let mut cursor = TokenCursor::new(tokens);

    let declaration = run_stage(tracer, Stage::Declaration, |tracer| {
        parse_declaration(&mut cursor, tracer)
    })?;
    let catalog = run_stage(tracer, Stage::Catalog, |tracer| {
        parse_catalog(&mut cursor, tracer)
    })?;
    let bodies = run_stage(tracer, Stage::MethodBody, |tracer| {
        parse_bodies(&mut cursor, tracer)
    })?;

    run_stage(tracer, Stage::Assembly, |_| {
        assemble(declaration.name, declaration.properties, &catalog, bodies)
    })
}

/// Pairs catalog names with bodies and builds the class.
///
/// Methods come out in catalog order, whatever order the bodies were
/// written in.
///
/// # Errors
///
/// Returns `UnknownMethodReference` if a body is not in the catalog or a
/// catalog name has no body, and `DuplicateMethodBody` if a method is
/// defined twice. The error points at the body's `to` token or at the
/// name in the catalog.
pub fn assemble(
    name: String,
    properties: Vec<PropertyDecl>,
    catalog: &[CatalogEntry],
    bodies: Vec<MethodBody>,
) -> Result<ClassDecl> {
    let mut by_name: HashMap<String, MethodBody> = HashMap::with_capacity(bodies.len());
    for body in bodies {
        if !catalog.iter().any(|entry| entry.name == body.name) {
            return Err(Error::unknown_method(
                body.name,
                MethodMismatch::NotDeclared,
                body.at,
            ));
        }
        if by_name.contains_key(&body.name) {
            return Err(Error::duplicate_body(body.name, body.at));
        }
        by_name.insert(body.name.clone(), body);
    }

    let methods = catalog
        .iter()
        .map(|entry| {
            by_name
                .remove(&entry.name)
                .map(|body| MethodDecl::new(body.name, body.param, body.actions))
                .ok_or_else(|| {
                    Error::unknown_method(&entry.name, MethodMismatch::NotDefined, entry.at)
                })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ClassDecl::new(name, properties, methods))
}

fn run_stage<R>(
    tracer: &mut Tracer,
    stage: Stage,
    f: impl FnOnce(&mut Tracer) -> Result<R>,
) -> Result<R> {
    tracer.stage_start(stage);
    match f(tracer) {
        Ok(value) => {
            tracer.stage_end(stage);
            Ok(value)
        }
        Err(err) => {
            if tracer.is_enabled() {
                tracer.stage_failed(stage, err.kind.to_string());
            }
            Err(err)
        }
    }
}

fn attach_context(err: Error, tokens: &[TaggedToken]) -> Error {
    if err.context.is_some() {
        return err;
    }
    let Some((at, token)) = err.position().and_then(|at| Some((at, tokens.get(at)?))) else {
        return err;
    };

    let from = at.saturating_sub(EXCERPT_RADIUS);
    let to = (at + EXCERPT_RADIUS + 1).min(tokens.len());
    let excerpt = tokens[from..to]
        .iter()
        .map(TaggedToken::text)
        .collect::<Vec<_>>()
        .join(" ");

    err.with_context(
        ErrorContext::new()
            .with_token(at, token.text())
            .with_excerpt(excerpt),
    )
}
