//! Compressed stream tokens
//!
//! Every compressed byte is either a code referencing the table or the escape
//! marker followed by one literal byte.

use std::iter::FusedIterator;
use std::slice;

use crate::error::{Error, Result};
use crate::table::{DecoderTable, ESCAPE_CODE};

/// One unit of a compressed stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A code in `0..=254`, expanding to the table's symbol for it.
    Symbol(u8),
    /// An escaped literal, emitted verbatim.
    Escape(u8),
}

impl Token {
    /// Number of output bytes this token produces under `table`.
    ///
    /// `Symbol(255)` never comes out of [`tokens`] and produces nothing.
    #[inline]
    pub fn decoded_len(self, table: &DecoderTable) -> usize {
        match self {
            Token::Symbol(code) => table.symbol_len(code).unwrap_or(0),
            Token::Escape(_) => 1,
        }
    }
}

/// Iterator over the tokens of a compressed stream.
///
/// An escape marker in the final position has no literal to pair with; it is
/// dropped and iteration ends.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    bytes: slice::Iter<'a, u8>,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    #[inline]
    fn next(&mut self) -> Option<Token> {
        let code = *self.bytes.next()?;
        if code == ESCAPE_CODE {
            self.bytes.next().map(|&literal| Token::Escape(literal))
        } else {
            Some(Token::Symbol(code))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // A trailing unpaired escape yields nothing, so only pairs are certain
        let remaining = self.bytes.len();
        (remaining / 2, Some(remaining))
    }
}

impl FusedIterator for Tokens<'_> {}

/// Split a compressed stream into tokens.
pub fn tokens(input: &[u8]) -> Tokens<'_> {
    Tokens { bytes: input.iter() }
}

/// Strictly validate a compressed stream.
///
/// Any byte sequence is decodable, so the only malformation is an escape
/// marker with nothing after it.
///
/// # Errors
/// Returns [`Error::DanglingEscape`] with the offset of the unpaired escape.
pub fn check_stream(input: &[u8]) -> Result<()> {
    let mut pos = 0;
    while pos < input.len() {
        if input[pos] == ESCAPE_CODE {
            if pos + 1 == input.len() {
                return Err(Error::DanglingEscape { offset: pos });
            }
            pos += 2;
        } else {
            pos += 1;
        }
    }
    Ok(())
}
