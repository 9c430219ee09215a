//! Error types for scanning and token decoding.
//!
//! Scan-time errors abort the `next_token`/`read_all` call that raised them;
//! there is no recovery or resynchronization. Decode-time errors are local to
//! the decode call and never touch scanner state.

use thiserror::Error;

use crate::token::TokenKind;

/// Error raised while producing tokens.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ScanError {
    /// A character outside every recognized class.
    #[error("unexpected character {ch:?} at line {line}, column {column}")]
    UnexpectedCharacter {
        ch: char,
        /// Byte offset of the character.
        offset: u32,
        line: u32,
        column: u32,
    },

    /// End of input reached before the closing `"`.
    ///
    /// Position fields locate the opening quote.
    #[error("unterminated string literal starting at line {line}, column {column}")]
    UnterminatedString { offset: u32, line: u32, column: u32 },

    /// The accumulation buffer was full and not allowed to grow.
    #[error("accumulation buffer exhausted (capacity {capacity}, growth disabled)")]
    ResourceExhausted { capacity: usize },
}

impl ScanError {
    /// Byte offset the error points at, if it has one.
    pub fn offset(&self) -> Option<u32> {
        match self {
            ScanError::UnexpectedCharacter { offset, .. }
            | ScanError::UnterminatedString { offset, .. } => Some(*offset),
            ScanError::ResourceExhausted { .. } => None,
        }
    }
}

impl From<BufferError> for ScanError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::Exhausted { capacity } => ScanError::ResourceExhausted { capacity },
        }
    }
}

/// Error raised by [`AccumulationBuffer::push`](crate::AccumulationBuffer::push).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum BufferError {
    #[error("buffer is full ({capacity} characters) and growth is disabled")]
    Exhausted { capacity: usize },
}

/// Error raised when decoding a token's text as a value.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum DecodeError {
    /// The token is not an `Integer` token.
    #[error("token of kind {kind:?} cannot be decoded as an integer")]
    TypeMismatch { kind: TokenKind },

    /// The digits do not fit in a `u64`.
    #[error("integer literal `{text}` is out of range")]
    OutOfRange { text: String },
}

#[cfg(test)]
mod tests;
