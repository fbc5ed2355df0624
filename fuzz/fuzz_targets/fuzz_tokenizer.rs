#![no_main]

use jsonlex::{ClosureSink, Token, Tokenizer, TokenizerOptions};
use libfuzzer_sys::fuzz_target;

/// Splits `input` at the byte offsets given by `cuts`, deliberately without
/// regard to UTF-8 character boundaries — this is the same non-char-safe
/// splitting strategy used by the `chunk_invariance` property test, since
/// that is exactly the case most likely to find a state-machine bug at a
/// chunk boundary.
fn split_at(input: &[u8], cuts: &[u8]) -> Vec<&[u8]> {
    if input.is_empty() {
        return vec![input];
    }
    let mut points: Vec<usize> = cuts.iter().map(|&b| (b as usize) % (input.len() + 1)).collect();
    points.sort_unstable();
    points.dedup();
    let mut pieces = Vec::new();
    let mut prev = 0;
    for point in points {
        pieces.push(&input[prev..point]);
        prev = point;
    }
    pieces.push(&input[prev..]);
    pieces
}

fn tokenize_all(chunks: &[&[u8]]) -> Result<Vec<Token<f64>>, jsonlex::TokenizerError> {
    let mut tokens = Vec::new();
    let mut tokenizer = Tokenizer::with_sink(ClosureSink::<f64, _>::new(|tok| tokens.push(tok)), TokenizerOptions::default());
    for chunk in chunks {
        tokenizer.write(chunk)?;
    }
    tokenizer.end()?;
    Ok(tokens)
}

fuzz_target!(|input: (Vec<u8>, Vec<u8>)| {
    let (data, cuts) = input;

    // A single write must never panic, whatever the bytes are.
    let whole = tokenize_all(&[&data]);

    // Splitting the same bytes across arbitrary chunk boundaries must reach
    // the same outcome: same error, or the same token stream.
    let pieces = split_at(&data, &cuts);
    let split = tokenize_all(&pieces);

    match (whole, split) {
        (Ok(a), Ok(b)) => assert_eq!(a, b, "chunk split changed the token stream"),
        (Err(_), Err(_)) => {}
        (a, b) => panic!("chunk split changed success/failure: whole={a:?} split={b:?}"),
    }
});
