//! A streaming, chunk-resumable tokenizer for the JSON lexical grammar
//! defined by [RFC 8259](https://www.rfc-editor.org/rfc/rfc8259).
//!
//! [`Tokenizer`] consumes arbitrarily-sized byte chunks (`write`) and
//! reports each structural character, literal keyword, string, or number it
//! recognizes to a [`TokenSink`] as soon as the token is complete — never
//! later than the chunk in which it ends. It tracks no object/array nesting
//! and performs no document-level validation; those concerns belong to a
//! layer built on top (an event-driven value builder, a SAX-style walker,
//! etc.), which is why the sink is generic rather than this crate owning a
//! `Value` type itself.
//!
//! Numbers are likewise generic over [`NumberLiteral`]: by default tokens
//! carry `f64`, but an embedder that needs to preserve 64-bit integer
//! precision (lost by `f64`) can supply [`RawNumber`] or its own
//! implementation.
//!
//! # Example
//!
//! ```rust
//! use jsonlex::{ClosureSink, Tokenizer, TokenizerOptions};
//!
//! let mut kinds = Vec::new();
//! let mut tokenizer = Tokenizer::with_sink(
//!     ClosureSink::<f64, _>::new(|tok| kinds.push(tok.kind)),
//!     TokenizerOptions::default(),
//! );
//! tokenizer.write(b"{\"a\":").unwrap();
//! tokenizer.write(b"[1,2.5]}").unwrap();
//! tokenizer.end().unwrap();
//! assert_eq!(kinds.len(), 9); // `{` `"a"` `:` `[` `1` `,` `2.5` `]` `}`
//! ```
#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod escape_buffer;
mod literal_store;
mod options;
mod sink;
mod state;
mod token;
mod tokenizer;

#[cfg(test)]
mod tests;

pub use error::TokenizerError;
pub use options::{SurrogatePolicy, TokenizerOptions};
pub use sink::{ClosureSink, NoopSink, TokenSink};
pub use token::{NumberLiteral, RawNumber, Token, TokenKind, TokenValue};
pub use tokenizer::Tokenizer;
