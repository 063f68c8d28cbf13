//! Method body sentences.
//!
//! Each body has the shape
//!
//! ```text
//! to <name> [<pronoun> needs <param>] <action> (, | and) <action> ... , end .
//! ```
//!
//! and bodies follow one another until the paragraph ends.

use parlance_debug::Tracer;
use parlance_foundation::{Error, Result, Stage};
use parlance_language::Action;

use crate::action::classify;
use crate::cursor::TokenCursor;
use crate::tagger::TaggedToken;

/// A parsed method body, before it is matched against the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodBody {
    /// Method name.
    pub name: String,
    /// Parameter name, if the body declares one.
    pub param: Option<String>,
    /// Actions in body order.
    pub actions: Vec<Action>,
    /// Index of the `to` token that opened the body.
    pub at: usize,
}

/// Parses every remaining body in the paragraph.
///
/// # Errors
///
/// Returns `UnexpectedToken` if a body does not open with `to <name>`,
/// `UnterminatedMethodBody` if a body reaches a `.` or the end of the
/// paragraph before `, end`, and `UnrecognizedAction` for any span the
/// classifier rejects.
pub fn parse_bodies(cursor: &mut TokenCursor<'_>, tracer: &mut Tracer) -> Result<Vec<MethodBody>> {
    let mut bodies = Vec::new();
    while !cursor.is_at_end() {
        bodies.push(parse_body(cursor, tracer)?);
    }
    Ok(bodies)
}

/// Parses one body starting at the cursor.
///
/// # Errors
///
/// See [`parse_bodies`].
pub fn parse_body(cursor: &mut TokenCursor<'_>, tracer: &mut Tracer) -> Result<MethodBody> {
    let at = cursor.position();
    cursor.expect("to", Stage::MethodBody)?;
    let name = cursor
        .expect_name("a method name after `to`", Stage::MethodBody)?
        .text()
        .to_string();

    let param = if cursor.peek_nth(1).is_some_and(|t| t.is("needs")) {
        cursor.advance();
        cursor.advance();
        let param = cursor.expect_name("a parameter name after `needs`", Stage::MethodBody)?;
        Some(param.text().to_string())
    } else {
        None
    };

    let mut actions = Vec::new();
    let mut span: Vec<&TaggedToken> = Vec::new();
    loop {
        let Some(token) = cursor.advance() else {
            return Err(Error::unterminated_body(&name, at));
        };

        match token.text() {
            "," if cursor.check("end") => {
                push_action(&name, &mut span, &mut actions, tracer)?;
                cursor.advance();
                if cursor.advance().is_some_and(|t| t.is(".")) {
                    break;
                }
                return Err(Error::unterminated_body(&name, at));
            }
            "," | "and" => push_action(&name, &mut span, &mut actions, tracer)?,
            "." => return Err(Error::unterminated_body(&name, at)),
            _ => span.push(token),
        }
    }

    tracer.method_body_parsed(&name, param.as_deref(), actions.len());
    Ok(MethodBody {
        name,
        param,
        actions,
        at,
    })
}

fn push_action(
    method: &str,
    span: &mut Vec<&TaggedToken>,
    actions: &mut Vec<Action>,
    tracer: &mut Tracer,
) -> Result<()> {
    if span.is_empty() {
        return Ok(());
    }
    let action = classify(method, span)?;
    tracer.action_classified(method, action.kind().name(), span[0].index());
    actions.push(action);
    span.clear();
    Ok(())
}
