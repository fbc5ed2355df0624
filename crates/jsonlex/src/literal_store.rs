//! The buffered-string store used to accumulate string and number literal
//! text across `write` calls.

use alloc::{string::String, vec::Vec};

/// Accumulates the decoded bytes of a string or number literal across
/// possibly many [`write`](crate::Tokenizer::write) calls.
///
/// Two modes, selected by whether a capacity was configured
/// (`TokenizerOptions::string_buffer_size` /
/// `TokenizerOptions::number_buffer_size`):
///
/// - Unbounded (`capacity: None`): bytes accumulate in a single `Vec<u8>`
///   until the literal completes, then are decoded once.
/// - Fixed-capacity (`capacity: Some(n)`): once the in-flight buffer reaches
///   `n` bytes, it is decoded and appended to a running `accumulated: String`,
///   then cleared, bounding peak memory for very long literals.
///
/// Bytes pushed into `buf` are always known-valid UTF-8 by construction: the
/// tokenizer only ever pushes bytes it has itself validated (ASCII literal
/// bytes, or continuation bytes it has already counted against a lead byte).
/// Decoding therefore uses `from_utf8_unchecked` rather than the fallible
/// `from_utf8`, matching the zero-copy decode idiom used elsewhere in this
/// crate family.
#[derive(Debug, Clone)]
pub(crate) struct LiteralStore {
    buf: Vec<u8>,
    capacity: Option<usize>,
    accumulated: String,
}

impl LiteralStore {
    /// Creates an empty store. `capacity` of `None` means unbounded growth.
    pub(crate) fn new(capacity: Option<usize>) -> Self {
        Self {
            buf: Vec::new(),
            capacity,
            accumulated: String::new(),
        }
    }

    /// Appends raw bytes (already validated by the caller as forming valid
    /// UTF-8 once decoded) to the in-flight buffer, flushing into
    /// `accumulated` if a configured capacity is reached.
    pub(crate) fn push_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
        if let Some(capacity) = self.capacity {
            if self.buf.len() >= capacity {
                self.flush();
            }
        }
    }

    /// Appends a single decoded `char` (e.g. the result of a `\uXXXX`
    /// escape, or a literal control-character escape like `\n`) to the
    /// in-flight buffer.
    pub(crate) fn push_char(&mut self, ch: char) {
        let mut tmp = [0u8; 4];
        let encoded = ch.encode_utf8(&mut tmp);
        self.push_bytes(encoded.as_bytes());
    }

    fn flush(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        debug_assert!(core::str::from_utf8(&self.buf).is_ok());
        let decoded = unsafe { core::str::from_utf8_unchecked(&self.buf) };
        self.accumulated.push_str(decoded);
        self.buf.clear();
    }

    /// Consumes the store, returning the fully decoded literal and resetting
    /// the store to empty (ready for reuse via [`LiteralStore::clear`]).
    pub(crate) fn take(&mut self) -> String {
        self.flush();
        core::mem::take(&mut self.accumulated)
    }

    /// Clears all accumulated state without returning it, for reuse between
    /// literals (e.g. after an error, or between tokens of the same kind).
    pub(crate) fn clear(&mut self) {
        self.buf.clear();
        self.accumulated.clear();
    }

    /// Returns `true` if no bytes have been accumulated since the last
    /// [`LiteralStore::take`] or [`LiteralStore::clear`].
    pub(crate) fn is_empty(&self) -> bool {
        self.buf.is_empty() && self.accumulated.is_empty()
    }
}
