use rstest::rstest;

use crate::{SurrogatePolicy, TokenKind, TokenValue, TokenizerError, TokenizerOptions};

use super::{kinds, tokenize, tokenize_chunks};

#[rstest]
#[case::empty_object(b"{}".as_slice(), &[TokenKind::LeftBrace, TokenKind::RightBrace])]
#[case::empty_array(b"[]".as_slice(), &[TokenKind::LeftBracket, TokenKind::RightBracket])]
#[case::flat_object(
    br#"{"a":1,"b":true}"#.as_slice(),
    &[
        TokenKind::LeftBrace,
        TokenKind::String,
        TokenKind::Colon,
        TokenKind::Number,
        TokenKind::Comma,
        TokenKind::String,
        TokenKind::Colon,
        TokenKind::True,
        TokenKind::RightBrace,
    ],
)]
#[case::nested_array(
    b"[1,[2,3],null]".as_slice(),
    &[
        TokenKind::LeftBracket,
        TokenKind::Number,
        TokenKind::Comma,
        TokenKind::LeftBracket,
        TokenKind::Number,
        TokenKind::Comma,
        TokenKind::Number,
        TokenKind::RightBracket,
        TokenKind::Comma,
        TokenKind::Null,
        TokenKind::RightBracket,
    ],
)]
#[case::surrounding_whitespace(
    b"  \t\n { } \r\n ".as_slice(),
    &[TokenKind::LeftBrace, TokenKind::RightBrace],
)]
#[case::booleans(b"[true,false]".as_slice(), &[
    TokenKind::LeftBracket, TokenKind::True, TokenKind::Comma, TokenKind::False, TokenKind::RightBracket,
])]
fn scenario_token_kinds(#[case] input: &[u8], #[case] expected: &[TokenKind]) {
    let tokens = tokenize(input, TokenizerOptions::default()).expect("scenario should tokenize");
    assert_eq!(kinds(&tokens), expected);
}

#[rstest]
fn string_with_common_escapes() {
    let tokens = tokenize(br#""a\tb\nc\"d\\e""#, TokenizerOptions::default()).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(
        tokens[0].value,
        TokenValue::String("a\tb\nc\"d\\e".into())
    );
}

#[rstest]
fn string_with_multibyte_utf8() {
    let tokens = tokenize("\"caf\u{e9} \u{1F600}\"".as_bytes(), TokenizerOptions::default()).unwrap();
    assert_eq!(tokens[0].value, TokenValue::String("caf\u{e9} \u{1F600}".into()));
}

#[rstest]
fn string_with_unicode_escape_surrogate_pair() {
    // "😀" is U+1F600 (grinning face), encoded as a surrogate pair.
    let tokens = tokenize(br#""😀""#, TokenizerOptions::default()).unwrap();
    assert_eq!(tokens[0].value, TokenValue::String("\u{1F600}".into()));
}

#[rstest]
fn lone_surrogate_replaced_by_default() {
    let tokens = tokenize(br#""\uD800""#, TokenizerOptions::default()).unwrap();
    assert_eq!(tokens[0].value, TokenValue::String("\u{FFFD}".into()));
}

#[rstest]
fn lone_surrogate_rejected_in_strict_mode() {
    let options = TokenizerOptions {
        surrogate_policy: SurrogatePolicy::Strict,
        ..Default::default()
    };
    let err = tokenize(br#""\uD800""#, options).unwrap_err();
    assert!(matches!(err, TokenizerError::LoneSurrogate { unit: 0xD800, .. }));
}

#[rstest]
fn consecutive_unpaired_high_surrogates_drop_the_second_unit() {
    // `\uD800` fails to pair with `\uD801` (also a high surrogate, not a
    // low one): `\uD800` resolves as lone and `\uD801` is dropped from the
    // pairing logic entirely, contributing neither a second replacement
    // character nor a fresh pairing attempt of its own. This produces
    // exactly one replacement character, not two.
    let tokens = tokenize(br#""\uD800\uD801""#, TokenizerOptions::default()).unwrap();
    assert_eq!(tokens[0].value, TokenValue::String("\u{FFFD}".into()));
}

#[rstest]
fn unpaired_high_surrogate_followed_by_non_surrogate_escape_drops_the_second_unit() {
    // `\uD800` fails to pair with `A` ('A'): the behavior under test
    // is that the second escape's unit (0x0041) is dropped from the
    // pairing logic entirely once `\uD800` resolves as lone, rather than
    // also being emitted as its own `'A'` character.
    let tokens = tokenize(br#""\uD800\u0041""#, TokenizerOptions::default()).unwrap();
    assert_eq!(tokens[0].value, TokenValue::String("\u{FFFD}".into()));
}

#[rstest]
#[case::integer(b"42".as_slice(), 42.0)]
#[case::negative(b"-17".as_slice(), -17.0)]
#[case::fraction(b"3.25".as_slice(), 3.25)]
#[case::exponent(b"1e3".as_slice(), 1000.0)]
#[case::signed_exponent(b"1.5e-2".as_slice(), 0.015)]
#[case::zero(b"0".as_slice(), 0.0)]
fn number_literals_parse(#[case] input: &[u8], #[case] expected: f64) {
    let tokens = tokenize(input, TokenizerOptions::default()).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].value, TokenValue::Number(expected));
}

#[rstest]
fn number_terminated_by_following_token_without_push_back_loss() {
    let tokens = tokenize(b"[1,2]", TokenizerOptions::default()).unwrap();
    assert_eq!(
        kinds(&tokens),
        &[
            TokenKind::LeftBracket,
            TokenKind::Number,
            TokenKind::Comma,
            TokenKind::Number,
            TokenKind::RightBracket,
        ]
    );
}

#[rstest]
fn chunk_split_inside_string() {
    let a = tokenize(br#""hello world""#, TokenizerOptions::default()).unwrap();
    let b = tokenize_chunks(&[b"\"hello", b" world\""], TokenizerOptions::default()).unwrap();
    assert_eq!(a, b);
}

#[rstest]
fn chunk_split_inside_multibyte_char() {
    let whole = "\"\u{1F600}\"".as_bytes();
    // Split after the lead byte of the 4-byte sequence.
    let split_at = 2;
    let a = tokenize(whole, TokenizerOptions::default()).unwrap();
    let b = tokenize_chunks(&[&whole[..split_at], &whole[split_at..]], TokenizerOptions::default()).unwrap();
    assert_eq!(a, b);
}

#[rstest]
fn chunk_split_inside_number() {
    let a = tokenize(b"123.456e-7", TokenizerOptions::default()).unwrap();
    let b = tokenize_chunks(&[b"123.4", b"56e-7"], TokenizerOptions::default()).unwrap();
    assert_eq!(a, b);
}

#[rstest]
fn chunk_split_inside_unicode_escape() {
    let a = tokenize(br#""😀""#, TokenizerOptions::default()).unwrap();
    let b = tokenize_chunks(&[br#""\uD83"#, br#"D\uDE00""#], TokenizerOptions::default()).unwrap();
    assert_eq!(a, b);
}

#[rstest]
fn rejects_invalid_lead_byte() {
    let err = tokenize(&[b'"', 0xFF, b'"'], TokenizerOptions::default()).unwrap_err();
    assert!(matches!(err, TokenizerError::UnexpectedByte { byte: 0xFF, .. }));
}

#[rstest]
fn rejects_bare_continuation_byte() {
    let err = tokenize(&[b'"', 0x80, b'"'], TokenizerOptions::default()).unwrap_err();
    assert!(matches!(err, TokenizerError::UnexpectedByte { byte: 0x80, .. }));
}

#[rstest]
fn leading_zero_followed_by_digit_is_two_adjacent_numbers() {
    // No leading zeros is a grammar rule about what one `NUMBER` token's
    // digits may look like, not a rule about what may follow a `0` at the
    // top level: `0` terminates as a complete number the instant the next
    // byte can't continue it, and that next byte starts a fresh value, the
    // same way `]` or `,` would.
    let tokens = tokenize(b"01", TokenizerOptions::default()).unwrap();
    assert_eq!(kinds(&tokens), &[TokenKind::Number, TokenKind::Number]);
    assert_eq!(tokens[0].value, TokenValue::Number(0.0));
    assert_eq!(tokens[1].value, TokenValue::Number(1.0));
    assert_eq!(tokens[0].offset, 0);
    assert_eq!(tokens[1].offset, 1);
}

#[rstest]
fn unterminated_string_is_incomplete_input() {
    let err = tokenize(b"\"abc", TokenizerOptions::default()).unwrap_err();
    assert!(matches!(err, TokenizerError::IncompleteInput { .. }));
}

#[rstest]
fn number_at_end_of_input_commits() {
    let tokens = tokenize(b"42", TokenizerOptions::default()).unwrap();
    assert_eq!(tokens[0].value, TokenValue::Number(42.0));
}

#[rstest]
fn list_of_numbers_with_whitespace_and_signed_exponents() {
    let tokens = tokenize(b"[6.02e23, 6.02e+23, 6.02e-23, 0e23]", TokenizerOptions::default()).unwrap();
    assert_eq!(
        kinds(&tokens),
        &[
            TokenKind::LeftBracket,
            TokenKind::Number,
            TokenKind::Comma,
            TokenKind::Number,
            TokenKind::Comma,
            TokenKind::Number,
            TokenKind::Comma,
            TokenKind::Number,
            TokenKind::RightBracket,
        ]
    );
}

#[rstest]
#[case::mid_number(b"2.".as_slice())]
#[case::mid_keyword(b"tru".as_slice())]
#[case::mid_string(br#""abc"#.as_slice())]
fn end_before_value_completes_is_incomplete_input(#[case] input: &[u8]) {
    let err = tokenize(input, TokenizerOptions::default()).unwrap_err();
    assert!(matches!(err, TokenizerError::IncompleteInput { .. }));
}

#[rstest]
fn lone_structural_token_is_lexically_complete() {
    // The tokenizer has no notion of object/array nesting (that's a layer
    // built on top, see examples/llm_tool_call.rs), so a single structural
    // byte is a complete token as far as `end()` is concerned even though it
    // would leave an enclosing value parser expecting a matching `}`.
    let tokens = tokenize(b"{", TokenizerOptions::default()).unwrap();
    assert_eq!(kinds(&tokens), &[TokenKind::LeftBrace]);
}

#[rstest]
fn unknown_word_after_structural_token_is_unexpected_byte() {
    let err = tokenize(b"[1, eer]", TokenizerOptions::default()).unwrap_err();
    assert!(matches!(err, TokenizerError::UnexpectedByte { byte: b'e', .. }));
}

#[rstest]
fn fixed_capacity_string_buffer_matches_unbounded() {
    let long = alloc::format!("\"{}\"", "ab".repeat(100));
    let unbounded = tokenize(long.as_bytes(), TokenizerOptions::default()).unwrap();
    let bounded = tokenize(
        long.as_bytes(),
        TokenizerOptions {
            string_buffer_size: Some(8),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(unbounded, bounded);
}
