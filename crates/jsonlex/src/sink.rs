//! The token emission seam: [`TokenSink`] and its default/closure adapters.

use core::marker::PhantomData;

use crate::token::{NumberLiteral, Token};

/// Receives tokens from a [`Tokenizer`](crate::Tokenizer) as they are
/// recognized, in strict lexical order.
///
/// Implementations are called synchronously from `write`/`end`; there is no
/// suspension point beyond the call itself. The default sink, [`NoopSink`],
/// discards every token, which is the right choice for a `Tokenizer` used
/// standalone purely to validate input.
pub trait TokenSink {
    /// The numeric representation this sink's tokens carry. See
    /// [`NumberLiteral`].
    type Number: NumberLiteral;

    /// Called once per recognized token, in lexical order.
    fn accept(&mut self, token: Token<Self::Number>);
}

/// A [`TokenSink`] that discards every token. The `Tokenizer`'s default.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink<Num = f64> {
    _marker: PhantomData<fn() -> Num>,
}

impl<Num> NoopSink<Num> {
    /// Creates a new no-op sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<Num: NumberLiteral> TokenSink for NoopSink<Num> {
    type Number = Num;

    #[inline]
    fn accept(&mut self, _token: Token<Self::Number>) {}
}

/// Adapts an `FnMut(Token<Num>)` closure into a [`TokenSink`], for embedders
/// who would rather write a closure than a named type.
///
/// # Examples
///
/// ```
/// use jsonlex::{ClosureSink, Tokenizer, TokenizerOptions};
///
/// let mut tokens = Vec::new();
/// let sink = ClosureSink::<f64, _>::new(|tok| tokens.push(tok));
/// let mut tokenizer = Tokenizer::with_sink(sink, TokenizerOptions::default());
/// tokenizer.write(b"[1,2]").unwrap();
/// tokenizer.end().unwrap();
/// assert_eq!(tokens.len(), 5); // `[` `1` `,` `2` `]`
/// ```
pub struct ClosureSink<Num, F> {
    f: F,
    _marker: PhantomData<fn() -> Num>,
}

impl<Num, F> ClosureSink<Num, F>
where
    Num: NumberLiteral,
    F: FnMut(Token<Num>),
{
    /// Wraps `f` as a [`TokenSink`].
    pub fn new(f: F) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }
}

impl<Num, F> TokenSink for ClosureSink<Num, F>
where
    Num: NumberLiteral,
    F: FnMut(Token<Num>),
{
    type Number = Num;

    #[inline]
    fn accept(&mut self, token: Token<Self::Number>) {
        (self.f)(token);
    }
}
