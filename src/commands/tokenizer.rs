//! Token handling for command argument parsing.
//!
//! The grammar layer consumes an already split argument vector through
//! [`TokenStream`]. Splitting a raw command line is the caller's job.

use crate::error::ParseError;

/// Left-to-right cursor over an argument vector.
///
/// Tokens are never re-ordered and the cursor never moves backwards.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens: &'a [&'a str],
    pos: usize,
}

impl<'a> TokenStream<'a> {
    pub fn new(tokens: &'a [&'a str]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&self) -> Option<&'a str> {
        self.peek_nth(0)
    }

    /// Returns the token `n` places ahead of the cursor without consuming
    /// anything.
    pub fn peek_nth(&self, n: usize) -> Option<&'a str> {
        self.tokens.get(self.pos + n).copied()
    }

    /// Number of tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }

    /// Fails with the first leftover token, if any.
    pub fn expect_end(&mut self) -> Result<(), ParseError> {
        match self.next() {
            Some(extra) => Err(ParseError::TrailingTokens(extra.to_string())),
            None => Ok(()),
        }
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }
}
