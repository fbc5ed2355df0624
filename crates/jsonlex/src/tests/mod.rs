mod scenarios;

use alloc::vec::Vec;

use crate::{ClosureSink, Token, TokenKind, Tokenizer, TokenizerOptions};

/// Runs `chunks` through a fresh tokenizer back-to-back and returns every
/// token observed, or the first error.
pub(crate) fn tokenize_chunks(
    chunks: &[&[u8]],
    options: TokenizerOptions,
) -> Result<Vec<Token<f64>>, crate::TokenizerError> {
    let mut tokens = Vec::new();
    let mut tokenizer = Tokenizer::with_sink(ClosureSink::<f64, _>::new(|tok| tokens.push(tok)), options);
    for chunk in chunks {
        tokenizer.write(chunk)?;
    }
    tokenizer.end()?;
    Ok(tokens)
}

pub(crate) fn tokenize(input: &[u8], options: TokenizerOptions) -> Result<Vec<Token<f64>>, crate::TokenizerError> {
    tokenize_chunks(&[input], options)
}

pub(crate) fn kinds(tokens: &[Token<f64>]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}
