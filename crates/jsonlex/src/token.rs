//! Token kinds and values emitted by the [`Tokenizer`](crate::Tokenizer).

use alloc::string::String;

/// Discriminant for a recognized JSON lexical token.
///
/// Kept separate from [`TokenValue`] so callers can dispatch on `kind`
/// without destructuring the (possibly generic) payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// A complete, decoded string literal.
    String,
    /// A complete number literal.
    Number,
}

/// The payload carried by a [`Token`].
///
/// `Num` is the embedder's chosen numeric representation, produced by a
/// [`NumberLiteral`] implementation (see [`crate::options::TokenizerOptions`]
/// and the crate-level docs for why this is generic rather than a hardcoded
/// `f64`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenValue<Num> {
    /// The literal single byte of a structural token (`{ } [ ] : ,`).
    Structural(u8),
    /// The boolean carried by `true`/`false`.
    Bool(bool),
    /// The `null` marker. Carries no data.
    Null,
    /// A fully decoded string literal.
    String(String),
    /// A parsed number literal.
    Number(Num),
}

/// A single JSON lexical token, with the byte offset at which it began.
///
/// `offset` is monotonically non-decreasing across the lifetime of one
/// [`Tokenizer`](crate::Tokenizer) and is reported for diagnostics, not for
/// slicing back into caller-owned buffers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token<Num> {
    /// Which kind of token this is.
    pub kind: TokenKind,
    /// The token's decoded payload.
    pub value: TokenValue<Num>,
    /// Byte offset into the total input stream at which this token began.
    pub offset: u64,
}

/// Converts a complete number literal (the ASCII bytes RFC 8259 permits in a
/// JSON number, as a `&str`) into the embedder's chosen numeric type.
///
/// The default hook, implemented for `f64`, matches a plain JSON decoder's
/// usual behavior and loses precision for integers outside `f64`'s safe
/// range. Embedders that need to preserve arbitrary-precision integer
/// literals can supply [`RawNumber`] instead, or their own implementation.
pub trait NumberLiteral: Sized {
    /// Parse `literal` (already validated against the JSON number grammar)
    /// into `Self`. Returns `None` if this representation cannot hold the
    /// value, which surfaces to the caller as
    /// [`TokenizerError::InvalidNumberLiteral`](crate::error::TokenizerError::InvalidNumberLiteral).
    fn parse_literal(literal: &str) -> Option<Self>;
}

impl NumberLiteral for f64 {
    fn parse_literal(literal: &str) -> Option<Self> {
        literal.parse().ok()
    }
}

/// A [`NumberLiteral`] that preserves the exact source digits instead of
/// parsing them, for embedders that need arbitrary-precision integers (e.g.
/// 64-bit IDs that would lose precision as `f64`).
///
/// This hook never fails: any grammar-valid number literal is representable
/// as a `String`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawNumber(
    /// The literal's source digits, byte-for-byte.
    pub String,
);

impl NumberLiteral for RawNumber {
    fn parse_literal(literal: &str) -> Option<Self> {
        Some(RawNumber(String::from(literal)))
    }
}
