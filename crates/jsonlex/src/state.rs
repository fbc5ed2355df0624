//! The tokenizer's states, named exactly after the lexical positions they
//! represent so a transition can be read directly off the state name.

/// Where the tokenizer is within the byte grammar.
///
/// Every variant corresponds to a named position in RFC 8259's grammar (or,
/// for the split-character states, to a position inside a UTF-8 sequence
/// that straddles a chunk boundary). `write`/`end` match on this
/// exhaustively; there is no fallthrough or table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    /// Expecting the first byte of a value, or a structural token, or
    /// whitespace, at the top level between tokens.
    Start,

    /// Matched `t`; expecting `r`.
    True1,
    /// Matched `tr`; expecting `u`.
    True2,
    /// Matched `tru`; expecting `e`.
    True3,

    /// Matched `f`; expecting `a`.
    False1,
    /// Matched `fa`; expecting `l`.
    False2,
    /// Matched `fal`; expecting `s`.
    False3,
    /// Matched `fals`; expecting `e`.
    False4,

    /// Matched `n`; expecting `u`.
    Null1,
    /// Matched `nu`; expecting `l`.
    Null2,
    /// Matched `nul`; expecting `l`.
    Null3,

    /// Inside a string literal, not immediately following a backslash or
    /// mid-escape: the common case.
    StringDefault,
    /// Inside a string literal, in the middle of a multi-byte UTF-8
    /// sequence that has not yet received all its continuation bytes.
    StringIncompleteChar,
    /// Just consumed the backslash of an escape sequence; expecting the
    /// escape's kind byte.
    StringAfterBackslash,
    /// Inside a `\uXXXX` escape, having consumed this many hex digits so
    /// far (1 through 4).
    StringUnicodeDigit1,
    /// See [`State::StringUnicodeDigit1`].
    StringUnicodeDigit2,
    /// See [`State::StringUnicodeDigit1`].
    StringUnicodeDigit3,
    /// See [`State::StringUnicodeDigit1`].
    StringUnicodeDigit4,

    /// Matched a leading `-`; expecting the first digit.
    NumberAfterInitialMinus,
    /// Matched a literal `0` as the integer part; only `.`, `e`/`E`, or a
    /// terminator may follow (no further digits: no leading zeros).
    NumberAfterZero,
    /// Matched a nonzero leading digit, or are consuming further digits of
    /// the integer part.
    NumberAfterNonZero,
    /// Matched the `.` of a fraction; expecting the first fractional digit.
    NumberAfterFullStop,
    /// Consuming fractional digits after at least one has been seen.
    NumberAfterDecimal,
    /// Matched `e`/`E`; expecting a sign or the first exponent digit.
    NumberAfterE,
    /// Matched `e`/`E` followed by `+`/`-`; expecting the first exponent
    /// digit.
    NumberAfterEAndSign,
    /// Consuming exponent digits after at least one has been seen.
    NumberAfterEAndDigit,
}
