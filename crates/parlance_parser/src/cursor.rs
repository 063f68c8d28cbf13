//! Cursor over a tagged token stream.
//!
//! Every stage parser walks the paragraph through a [`TokenCursor`]. Each
//! expectation point either yields the token it wanted or an error naming
//! what was expected and where.

use parlance_foundation::{Error, Result, Stage};

use crate::tagger::{Tag, TaggedToken};

/// A forward-only position in a tagged token slice.
#[derive(Clone, Debug)]
pub struct TokenCursor<'t> {
    tokens: &'t [TaggedToken],
    pos: usize,
}

impl<'t> TokenCursor<'t> {
    /// Creates a cursor at the start of `tokens`.
    #[must_use]
    pub fn new(tokens: &'t [TaggedToken]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Returns the current position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves to an absolute position, clamped to the end.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.tokens.len());
    }

    /// Returns true if no tokens remain.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Returns the whole token slice.
    #[must_use]
    pub fn tokens(&self) -> &'t [TaggedToken] {
        self.tokens
    }

    /// Returns the token at an absolute position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'t TaggedToken> {
        self.tokens.get(index)
    }

    /// Returns the current token without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'t TaggedToken> {
        self.tokens.get(self.pos)
    }

    /// Returns the token `n` places past the current one.
    #[must_use]
    pub fn peek_nth(&self, n: usize) -> Option<&'t TaggedToken> {
        self.tokens.get(self.pos + n)
    }

    /// Returns true if the current token is `word`.
    #[must_use]
    pub fn check(&self, word: &str) -> bool {
        self.peek().is_some_and(|t| t.is(word))
    }

    /// Consumes and returns the current token.
    pub fn advance(&mut self) -> Option<&'t TaggedToken> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Finds the first `word` at or after the current position.
    #[must_use]
    pub fn find(&self, word: &str) -> Option<usize> {
        self.tokens[self.pos..]
            .iter()
            .position(|t| t.is(word))
            .map(|offset| self.pos + offset)
    }

    /// Consumes `word` or fails.
    pub fn expect(&mut self, word: &str, stage: Stage) -> Result<&'t TaggedToken> {
        self.expect_where(stage, &format!("`{word}`"), |t| t.is(word))
    }

    /// Consumes a token with the given tag or fails.
    pub fn expect_tag(&mut self, tag: Tag, what: &str, stage: Stage) -> Result<&'t TaggedToken> {
        self.expect_where(stage, what, |t| t.tag == tag)
    }

    /// Consumes a token that can serve as a name or fails.
    pub fn expect_name(&mut self, what: &str, stage: Stage) -> Result<&'t TaggedToken> {
        self.expect_where(stage, what, TaggedToken::is_name)
    }

    fn expect_where(
        &mut self,
        stage: Stage,
        what: &str,
        accept: impl Fn(&TaggedToken) -> bool,
    ) -> Result<&'t TaggedToken> {
        match self.peek() {
            Some(token) if accept(token) => {
                self.pos += 1;
                Ok(token)
            }
            Some(token) => Err(Error::unexpected_token(
                stage,
                what,
                token.text(),
                token.index(),
            )),
            None => Err(Error::unexpected_end(stage, what)),
        }
    }
}
