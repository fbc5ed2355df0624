//! The core byte-at-a-time, chunk-resumable tokenizer.

use alloc::{format, string::ToString};

use crate::{
    error::TokenizerError,
    escape_buffer::UnicodeEscapeBuffer,
    literal_store::LiteralStore,
    options::{SurrogatePolicy, TokenizerOptions},
    sink::{NoopSink, TokenSink},
    state::State,
    token::{NumberLiteral, Token, TokenKind, TokenValue},
};

const fn is_json_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// How many continuation bytes follow a UTF-8 lead byte, or `None` if `byte`
/// cannot begin a multi-byte sequence (either it's ASCII, a bare
/// continuation byte, or an overlong/invalid lead byte).
///
/// Lead bytes `0x80..=0xC1` (continuation bytes and the two overlong-2-byte
/// lead bytes) and `0xF5..=0xFF` are rejected outright: they can never begin
/// a well-formed UTF-8 sequence.
const fn utf8_sequence_len(byte: u8) -> Option<u8> {
    match byte {
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// A streaming, chunk-resumable JSON tokenizer.
///
/// `Tokenizer` recognizes the lexical grammar of RFC 8259 one byte at a
/// time, emitting a [`Token`] to its [`TokenSink`] `S` for each complete
/// structural character, literal keyword, string, or number. It does not
/// track object/array nesting or validate that tokens form a well-formed
/// document; that is left to a layer above (see the crate-level docs).
///
/// Input may be split across any number of [`write`](Tokenizer::write)
/// calls at arbitrary byte boundaries, including in the middle of a
/// multi-byte UTF-8 sequence, a `\uXXXX` escape, or a number literal; the
/// tokenizer carries exactly the state needed to resume.
pub struct Tokenizer<S: TokenSink = NoopSink> {
    sink: S,
    options: TokenizerOptions,
    state: State,
    offset: u64,
    token_start: u64,
    string_store: LiteralStore,
    number_store: LiteralStore,
    escape: UnicodeEscapeBuffer,
    pending_high_surrogate: Option<(u16, u64)>,
    split_buf: [u8; 4],
    split_len: u8,
    split_total: u8,
}

impl<S: TokenSink + Default> Default for Tokenizer<S> {
    fn default() -> Self {
        Self::with_sink(S::default(), TokenizerOptions::default())
    }
}

impl Tokenizer<NoopSink> {
    /// Creates a tokenizer that discards every token, useful for validating
    /// input without building a value from it.
    #[must_use]
    pub fn new(options: TokenizerOptions) -> Self {
        Self::with_sink(NoopSink::new(), options)
    }
}

impl<S: TokenSink> Tokenizer<S> {
    /// Creates a tokenizer that reports recognized tokens to `sink`.
    #[must_use]
    pub fn with_sink(sink: S, options: TokenizerOptions) -> Self {
        Self {
            sink,
            string_store: LiteralStore::new(options.string_buffer_size),
            number_store: LiteralStore::new(options.number_buffer_size),
            options,
            state: State::Start,
            offset: 0,
            token_start: 0,
            escape: UnicodeEscapeBuffer::new(),
            pending_high_surrogate: None,
            split_buf: [0; 4],
            split_len: 0,
            split_total: 0,
        }
    }

    /// Consumes the tokenizer, returning the underlying sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Returns a reference to the underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns a mutable reference to the underlying sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// The total number of bytes consumed across all calls to `write`.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Feeds the next chunk of input. Chunks may split tokens, UTF-8
    /// sequences, or escapes at any byte boundary; call `write` again with
    /// the following chunk to resume.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError`] on the first byte that cannot validly
    /// continue the current state. The tokenizer's internal state after an
    /// error is unspecified; construct a new `Tokenizer` to recover.
    pub fn write(&mut self, chunk: &[u8]) -> Result<(), TokenizerError> {
        let mut i = 0;
        while i < chunk.len() {
            let byte = chunk[i];
            match self.process_byte(byte) {
                Ok(true) => {
                    i += 1;
                    self.offset += 1;
                }
                Ok(false) => {}
                Err(err) => return self.maybe_panic(err),
            }
        }
        Ok(())
    }

    /// In test/fuzzing builds with `panic_on_error` set, panics instead of
    /// returning `err`, so a failure surfaces with a backtrace pointing at
    /// the offending byte rather than as an opaque `Result`.
    #[allow(clippy::unnecessary_wraps)]
    fn maybe_panic(&self, err: TokenizerError) -> Result<(), TokenizerError> {
        #[cfg(any(test, feature = "fuzzing"))]
        if self.options.panic_on_error {
            panic!("{err}");
        }
        Err(err)
    }

    /// Signals end of input. Succeeds only if the tokenizer is not in the
    /// middle of a token that requires more bytes (e.g. inside a string, a
    /// partial keyword, or a number state that cannot legally end there).
    ///
    /// A number literal may legally end at end-of-input (RFC 8259 numbers
    /// have no closing delimiter), so this is where a number still
    /// in-flight at EOF is finally committed.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError::IncompleteInput`] if a token was left
    /// unterminated.
    pub fn end(&mut self) -> Result<(), TokenizerError> {
        let result = match self.state {
            State::Start => Ok(()),
            State::NumberAfterZero | State::NumberAfterNonZero | State::NumberAfterDecimal | State::NumberAfterEAndDigit => {
                self.commit_number()
            }
            other => Err(TokenizerError::IncompleteInput {
                context: describe_state(other).to_string(),
                offset: self.offset,
            }),
        };
        match result {
            Ok(()) => Ok(()),
            Err(err) => self.maybe_panic(err),
        }
    }

    fn emit(&mut self, kind: TokenKind, value: TokenValue<S::Number>, offset: u64) {
        self.sink.accept(Token { kind, value, offset });
    }

    fn unexpected(&self, byte: u8) -> TokenizerError {
        TokenizerError::UnexpectedByte {
            byte,
            offset: self.offset,
        }
    }

    /// Processes one input byte. Returns `Ok(true)` if the byte was
    /// consumed, `Ok(false)` if it must be re-presented to the (now
    /// different) state — the "push-back" used to terminate a number
    /// literal, which RFC 8259 gives no closing delimiter for.
    fn process_byte(&mut self, byte: u8) -> Result<bool, TokenizerError> {
        match self.state {
            State::Start => self.step_start(byte),
            State::True1 => self.step_literal(byte, b'r', State::True2),
            State::True2 => self.step_literal(byte, b'u', State::True3),
            State::True3 => self.step_literal_last(byte, b'e', TokenValue::Bool(true), TokenKind::True),
            State::False1 => self.step_literal(byte, b'a', State::False2),
            State::False2 => self.step_literal(byte, b'l', State::False3),
            State::False3 => self.step_literal(byte, b's', State::False4),
            State::False4 => self.step_literal_last(byte, b'e', TokenValue::Bool(false), TokenKind::False),
            State::Null1 => self.step_literal(byte, b'u', State::Null2),
            State::Null2 => self.step_literal(byte, b'l', State::Null3),
            State::Null3 => self.step_literal_last(byte, b'l', TokenValue::Null, TokenKind::Null),
            State::StringDefault => self.step_string_default(byte),
            State::StringIncompleteChar => self.step_string_incomplete_char(byte),
            State::StringAfterBackslash => self.step_string_after_backslash(byte),
            State::StringUnicodeDigit1 => self.step_string_unicode_digit(byte, State::StringUnicodeDigit2),
            State::StringUnicodeDigit2 => self.step_string_unicode_digit(byte, State::StringUnicodeDigit3),
            State::StringUnicodeDigit3 => self.step_string_unicode_digit(byte, State::StringUnicodeDigit4),
            State::StringUnicodeDigit4 => self.step_string_unicode_last_digit(byte),
            State::NumberAfterInitialMinus => self.step_number_after_initial_minus(byte),
            State::NumberAfterZero => self.step_number_after_zero_or_nonzero(byte),
            State::NumberAfterNonZero => self.step_number_after_zero_or_nonzero(byte),
            State::NumberAfterFullStop => self.step_number_after_full_stop(byte),
            State::NumberAfterDecimal => self.step_number_after_decimal(byte),
            State::NumberAfterE => self.step_number_after_e(byte),
            State::NumberAfterEAndSign => self.step_number_after_e_and_sign(byte),
            State::NumberAfterEAndDigit => self.step_number_after_e_and_digit(byte),
        }
    }

    // ---- Start -----------------------------------------------------

    fn step_start(&mut self, byte: u8) -> Result<bool, TokenizerError> {
        if is_json_whitespace(byte) {
            return Ok(true);
        }
        self.token_start = self.offset;
        match byte {
            b'{' => {
                self.emit(TokenKind::LeftBrace, TokenValue::Structural(byte), self.token_start);
                Ok(true)
            }
            b'}' => {
                self.emit(TokenKind::RightBrace, TokenValue::Structural(byte), self.token_start);
                Ok(true)
            }
            b'[' => {
                self.emit(TokenKind::LeftBracket, TokenValue::Structural(byte), self.token_start);
                Ok(true)
            }
            b']' => {
                self.emit(TokenKind::RightBracket, TokenValue::Structural(byte), self.token_start);
                Ok(true)
            }
            b':' => {
                self.emit(TokenKind::Colon, TokenValue::Structural(byte), self.token_start);
                Ok(true)
            }
            b',' => {
                self.emit(TokenKind::Comma, TokenValue::Structural(byte), self.token_start);
                Ok(true)
            }
            b'"' => {
                self.string_store.clear();
                self.pending_high_surrogate = None;
                self.state = State::StringDefault;
                Ok(true)
            }
            b't' => {
                self.state = State::True1;
                Ok(true)
            }
            b'f' => {
                self.state = State::False1;
                Ok(true)
            }
            b'n' => {
                self.state = State::Null1;
                Ok(true)
            }
            b'-' => {
                self.number_store.clear();
                self.number_store.push_bytes(b"-");
                self.state = State::NumberAfterInitialMinus;
                Ok(true)
            }
            b'0' => {
                self.number_store.clear();
                self.number_store.push_bytes(b"0");
                self.state = State::NumberAfterZero;
                Ok(true)
            }
            b'1'..=b'9' => {
                self.number_store.clear();
                self.number_store.push_bytes(&[byte]);
                self.state = State::NumberAfterNonZero;
                Ok(true)
            }
            _ => Err(self.unexpected(byte)),
        }
    }

    // ---- true / false / null literals -------------------------------

    fn step_literal(&mut self, byte: u8, expected: u8, next: State) -> Result<bool, TokenizerError> {
        if byte == expected {
            self.state = next;
            Ok(true)
        } else {
            Err(self.unexpected(byte))
        }
    }

    fn step_literal_last(
        &mut self,
        byte: u8,
        expected: u8,
        value: TokenValue<S::Number>,
        kind: TokenKind,
    ) -> Result<bool, TokenizerError> {
        if byte == expected {
            let start = self.token_start;
            self.emit(kind, value, start);
            self.state = State::Start;
            Ok(true)
        } else {
            Err(self.unexpected(byte))
        }
    }

    // ---- strings ----------------------------------------------------

    fn step_string_default(&mut self, byte: u8) -> Result<bool, TokenizerError> {
        match byte {
            b'"' => {
                self.flush_pending_surrogate()?;
                let text = self.string_store.take();
                let start = self.token_start;
                self.emit(TokenKind::String, TokenValue::String(text), start);
                self.state = State::Start;
                Ok(true)
            }
            b'\\' => {
                self.state = State::StringAfterBackslash;
                Ok(true)
            }
            0x00..=0x1F => Err(self.unexpected(byte)),
            0x20..=0x7F => {
                self.flush_pending_surrogate()?;
                self.string_store.push_bytes(&[byte]);
                Ok(true)
            }
            _ => {
                self.flush_pending_surrogate()?;
                match utf8_sequence_len(byte) {
                    Some(len) => {
                        self.split_buf[0] = byte;
                        self.split_len = 1;
                        self.split_total = len;
                        self.state = State::StringIncompleteChar;
                        Ok(true)
                    }
                    None => Err(self.unexpected(byte)),
                }
            }
        }
    }

    fn step_string_incomplete_char(&mut self, byte: u8) -> Result<bool, TokenizerError> {
        if !(0x80..=0xBF).contains(&byte) {
            return Err(self.unexpected(byte));
        }
        self.split_buf[self.split_len as usize] = byte;
        self.split_len += 1;
        if self.split_len < self.split_total {
            return Ok(true);
        }
        let seq = &self.split_buf[..self.split_total as usize];
        match core::str::from_utf8(seq) {
            Ok(_) => {
                self.string_store.push_bytes(seq);
                self.state = State::StringDefault;
                Ok(true)
            }
            Err(_) => Err(self.unexpected(byte)),
        }
    }

    fn step_string_after_backslash(&mut self, byte: u8) -> Result<bool, TokenizerError> {
        let literal = match byte {
            b'"' => Some('"'),
            b'\\' => Some('\\'),
            b'/' => Some('/'),
            b'b' => Some('\u{0008}'),
            b'f' => Some('\u{000C}'),
            b'n' => Some('\n'),
            b'r' => Some('\r'),
            b't' => Some('\t'),
            b'u' => None,
            _ => return Err(self.unexpected(byte)),
        };
        match literal {
            Some(ch) => {
                self.flush_pending_surrogate()?;
                self.string_store.push_char(ch);
                self.state = State::StringDefault;
                Ok(true)
            }
            None => {
                self.escape.reset();
                self.state = State::StringUnicodeDigit1;
                Ok(true)
            }
        }
    }

    fn step_string_unicode_digit(&mut self, byte: u8, next: State) -> Result<bool, TokenizerError> {
        if !byte.is_ascii_hexdigit() {
            return Err(self.unexpected(byte));
        }
        self.escape.feed(byte);
        self.state = next;
        Ok(true)
    }

    fn step_string_unicode_last_digit(&mut self, byte: u8) -> Result<bool, TokenizerError> {
        if !byte.is_ascii_hexdigit() {
            return Err(self.unexpected(byte));
        }
        let unit = self
            .escape
            .feed(byte)
            .expect("fourth hex digit always completes the escape");
        self.state = State::StringDefault;
        self.apply_unicode_escape(unit)?;
        Ok(true)
    }

    fn apply_unicode_escape(&mut self, unit: u16) -> Result<(), TokenizerError> {
        if let Some((high, high_offset)) = self.pending_high_surrogate.take() {
            if (0xDC00..=0xDFFF).contains(&unit) {
                let scalar = 0x10000
                    + (u32::from(high) - 0xD800) * 0x400
                    + (u32::from(unit) - 0xDC00);
                let ch = char::from_u32(scalar).expect("surrogate pair decodes to a valid scalar");
                self.string_store.push_char(ch);
                return Ok(());
            }
            // `high` failed to pair: resolve it as lone and drop `unit`
            // entirely from the pairing logic, rather than re-evaluating it
            // as if it were the only escape seen (it still took part in this
            // `\uXXXX`'s failed pairing attempt, so it contributes nothing).
            return self.emit_lone_surrogate(high, high_offset);
        }
        if (0xD800..=0xDBFF).contains(&unit) {
            self.pending_high_surrogate = Some((unit, self.offset));
            return Ok(());
        }
        if (0xDC00..=0xDFFF).contains(&unit) {
            return self.emit_lone_surrogate(unit, self.offset);
        }
        let ch = char::from_u32(u32::from(unit)).expect("non-surrogate u16 is always a valid scalar");
        self.string_store.push_char(ch);
        Ok(())
    }

    /// Resolves a high surrogate left pending from a previous `\uXXXX`
    /// escape once something other than a matching low-surrogate escape is
    /// seen, per the configured [`SurrogatePolicy`].
    fn flush_pending_surrogate(&mut self) -> Result<(), TokenizerError> {
        if let Some((unit, offset)) = self.pending_high_surrogate.take() {
            self.resolve_lone_surrogate(unit, offset)?;
        }
        Ok(())
    }

    fn emit_lone_surrogate(&mut self, unit: u16, offset: u64) -> Result<(), TokenizerError> {
        self.resolve_lone_surrogate(unit, offset)
    }

    fn resolve_lone_surrogate(&mut self, unit: u16, offset: u64) -> Result<(), TokenizerError> {
        match self.options.surrogate_policy {
            SurrogatePolicy::ReplaceInvalid => {
                self.string_store.push_char('\u{FFFD}');
                Ok(())
            }
            SurrogatePolicy::Strict => Err(TokenizerError::LoneSurrogate { unit, offset }),
        }
    }

    // ---- numbers ------------------------------------------------------

    fn step_number_after_initial_minus(&mut self, byte: u8) -> Result<bool, TokenizerError> {
        match byte {
            b'0' => {
                self.number_store.push_bytes(&[byte]);
                self.state = State::NumberAfterZero;
                Ok(true)
            }
            b'1'..=b'9' => {
                self.number_store.push_bytes(&[byte]);
                self.state = State::NumberAfterNonZero;
                Ok(true)
            }
            _ => Err(self.unexpected(byte)),
        }
    }

    fn step_number_after_zero_or_nonzero(&mut self, byte: u8) -> Result<bool, TokenizerError> {
        match byte {
            b'0'..=b'9' if self.state == State::NumberAfterNonZero => {
                self.number_store.push_bytes(&[byte]);
                Ok(true)
            }
            // A digit after a leading `0` is not a continuation of this
            // number (no leading zeros); it terminates the `0` and starts a
            // fresh number, same as any other non-number byte here.
            b'.' => {
                self.number_store.push_bytes(&[byte]);
                self.state = State::NumberAfterFullStop;
                Ok(true)
            }
            b'e' | b'E' => {
                self.number_store.push_bytes(&[byte]);
                self.state = State::NumberAfterE;
                Ok(true)
            }
            _ => {
                self.commit_number()?;
                Ok(false)
            }
        }
    }

    fn step_number_after_full_stop(&mut self, byte: u8) -> Result<bool, TokenizerError> {
        match byte {
            b'0'..=b'9' => {
                self.number_store.push_bytes(&[byte]);
                self.state = State::NumberAfterDecimal;
                Ok(true)
            }
            _ => Err(self.unexpected(byte)),
        }
    }

    fn step_number_after_decimal(&mut self, byte: u8) -> Result<bool, TokenizerError> {
        match byte {
            b'0'..=b'9' => {
                self.number_store.push_bytes(&[byte]);
                Ok(true)
            }
            b'e' | b'E' => {
                self.number_store.push_bytes(&[byte]);
                self.state = State::NumberAfterE;
                Ok(true)
            }
            _ => {
                self.commit_number()?;
                Ok(false)
            }
        }
    }

    fn step_number_after_e(&mut self, byte: u8) -> Result<bool, TokenizerError> {
        match byte {
            b'+' | b'-' => {
                self.number_store.push_bytes(&[byte]);
                self.state = State::NumberAfterEAndSign;
                Ok(true)
            }
            b'0'..=b'9' => {
                self.number_store.push_bytes(&[byte]);
                self.state = State::NumberAfterEAndDigit;
                Ok(true)
            }
            _ => Err(self.unexpected(byte)),
        }
    }

    fn step_number_after_e_and_sign(&mut self, byte: u8) -> Result<bool, TokenizerError> {
        match byte {
            b'0'..=b'9' => {
                self.number_store.push_bytes(&[byte]);
                self.state = State::NumberAfterEAndDigit;
                Ok(true)
            }
            _ => Err(self.unexpected(byte)),
        }
    }

    fn step_number_after_e_and_digit(&mut self, byte: u8) -> Result<bool, TokenizerError> {
        match byte {
            b'0'..=b'9' => {
                self.number_store.push_bytes(&[byte]);
                Ok(true)
            }
            _ => {
                self.commit_number()?;
                Ok(false)
            }
        }
    }

    fn commit_number(&mut self) -> Result<(), TokenizerError> {
        let literal = self.number_store.take();
        let start = self.token_start;
        let value = S::Number::parse_literal(&literal).ok_or_else(|| {
            TokenizerError::InvalidNumberLiteral {
                literal: literal.clone(),
                offset: start,
            }
        })?;
        self.emit(TokenKind::Number, TokenValue::Number(value), start);
        self.state = State::Start;
        Ok(())
    }
}

fn describe_state(state: State) -> alloc::string::String {
    match state {
        State::Start => "start".to_string(),
        State::True1 | State::True2 | State::True3 => "the literal `true`".to_string(),
        State::False1 | State::False2 | State::False3 | State::False4 => "the literal `false`".to_string(),
        State::Null1 | State::Null2 | State::Null3 => "the literal `null`".to_string(),
        State::StringDefault | State::StringIncompleteChar | State::StringAfterBackslash => {
            "a string literal".to_string()
        }
        State::StringUnicodeDigit1
        | State::StringUnicodeDigit2
        | State::StringUnicodeDigit3
        | State::StringUnicodeDigit4 => "a \\u escape".to_string(),
        State::NumberAfterInitialMinus => "a number (after `-`)".to_string(),
        State::NumberAfterFullStop => "a number (after `.`)".to_string(),
        State::NumberAfterE => "a number (after `e`/`E`)".to_string(),
        State::NumberAfterEAndSign => "a number (after exponent sign)".to_string(),
        State::NumberAfterZero | State::NumberAfterNonZero | State::NumberAfterDecimal | State::NumberAfterEAndDigit => {
            format!("{state:?}")
        }
    }
}
