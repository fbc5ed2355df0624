//! Configuration for a [`Tokenizer`](crate::Tokenizer).

/// How to handle a `\uXXXX` escape that decodes to a lone UTF-16 surrogate
/// (i.e. one not immediately paired with its matching half).
///
/// RFC 8259 permits surrogate pairs inside `\u` escapes but says nothing
/// about what to do with an unpaired half; this is left to the
/// implementation. A `String`'s bytes must always be valid UTF-8, so neither
/// policy can preserve a lone surrogate's raw code unit in the decoded
/// output; the choice is between substituting a placeholder and rejecting
/// the input outright.
///
/// # Default
///
/// [`SurrogatePolicy::ReplaceInvalid`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurrogatePolicy {
    /// Replace an unpaired surrogate with U+FFFD (REPLACEMENT CHARACTER).
    ///
    /// This matches how most JSON decoders (and `String::from_utf8_lossy`)
    /// treat invalid Unicode data, at the cost of losing the original code
    /// unit.
    #[default]
    ReplaceInvalid,

    /// Reject an unpaired surrogate with
    /// [`TokenizerError::LoneSurrogate`](crate::error::TokenizerError::LoneSurrogate)
    /// instead of substituting a placeholder.
    ///
    /// Choose this when silently losing data is unacceptable and the caller
    /// would rather fail the whole parse than guess.
    Strict,
}

/// Configuration options for a [`Tokenizer`](crate::Tokenizer).
///
/// # Examples
///
/// ```rust
/// use jsonlex::{SurrogatePolicy, TokenizerOptions};
///
/// let options = TokenizerOptions {
///     string_buffer_size: Some(256),
///     ..Default::default()
/// };
/// ```
///
/// # Default
///
/// Both buffer sizes default to `None` (unbounded growth); `surrogate_policy`
/// defaults to [`SurrogatePolicy::ReplaceInvalid`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenizerOptions {
    /// Caps the in-flight buffer used to accumulate a string literal's
    /// decoded bytes.
    ///
    /// When `None`, the buffer grows without bound for the lifetime of one
    /// string literal. When `Some(n)`, the tokenizer flushes decoded text out
    /// of the buffer (without emitting a token) once it reaches `n` bytes,
    /// bounding peak memory use for very long string literals at the cost of
    /// extra copies.
    ///
    /// # Default
    ///
    /// `None`
    pub string_buffer_size: Option<usize>,

    /// Caps the in-flight buffer used to accumulate a number literal's ASCII
    /// digits.
    ///
    /// Same tradeoff as `string_buffer_size`, applied to number literals.
    /// Numbers are bounded by RFC 8259 grammar in practice (no JSON number
    /// sensibly exceeds a few hundred digits), so this mainly protects
    /// against pathological or adversarial input.
    ///
    /// # Default
    ///
    /// `None`
    pub number_buffer_size: Option<usize>,

    /// How to handle a `\uXXXX` escape that decodes to an unpaired UTF-16
    /// surrogate. See [`SurrogatePolicy`].
    ///
    /// # Default
    ///
    /// [`SurrogatePolicy::ReplaceInvalid`]
    pub surrogate_policy: SurrogatePolicy,

    /// Panic on the first tokenizer error instead of returning it.
    ///
    /// Enabled only in test and fuzzing builds, to get a backtrace pointing
    /// at the offending byte instead of an opaque `Result`.
    ///
    /// # Default
    ///
    /// `false`
    #[cfg(any(test, feature = "fuzzing"))]
    pub panic_on_error: bool,
}
