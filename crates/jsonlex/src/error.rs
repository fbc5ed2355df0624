//! Errors produced while tokenizing.

use alloc::string::String;

use thiserror::Error;

/// An error encountered while tokenizing a chunk of JSON text.
///
/// All variants carry the byte `offset` (relative to the start of the whole
/// stream, not the current chunk) at which the error was detected, for
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TokenizerError {
    /// A byte was encountered that is not valid in the tokenizer's current
    /// state.
    #[error("unexpected byte {byte:#04x} at offset {offset}")]
    UnexpectedByte {
        /// The offending byte.
        byte: u8,
        /// Byte offset at which it occurred.
        offset: u64,
    },

    /// `end()` was called while a token was still in progress (e.g. inside a
    /// string literal, a partial keyword, or mid-escape).
    #[error("unexpected end of input at offset {offset}: {context}")]
    IncompleteInput {
        /// What the tokenizer was in the middle of parsing.
        context: String,
        /// Byte offset of the end of input.
        offset: u64,
    },

    /// A complete, grammar-valid number literal could not be converted by
    /// the configured [`NumberLiteral`](crate::NumberLiteral) implementation.
    #[error("invalid number literal {literal:?} at offset {offset}")]
    InvalidNumberLiteral {
        /// The raw literal text that failed to convert.
        literal: String,
        /// Byte offset at which the literal began.
        offset: u64,
    },

    /// A `\uXXXX` escape decoded to a UTF-16 surrogate with no matching
    /// other half, and [`SurrogatePolicy::Strict`](crate::options::SurrogatePolicy::Strict)
    /// is configured.
    #[error("lone surrogate \\u{unit:04x} at offset {offset}")]
    LoneSurrogate {
        /// The unpaired surrogate code unit.
        unit: u16,
        /// Byte offset of the `\u` that produced it.
        offset: u64,
    },
}

impl TokenizerError {
    /// The byte offset at which this error was detected.
    #[must_use]
    pub fn offset(&self) -> u64 {
        match self {
            TokenizerError::UnexpectedByte { offset, .. }
            | TokenizerError::IncompleteInput { offset, .. }
            | TokenizerError::InvalidNumberLiteral { offset, .. }
            | TokenizerError::LoneSurrogate { offset, .. } => *offset,
        }
    }
}
