//! # Text - a line-oriented read cursor
//!
//! [`Text`] owns an immutable buffer and a mutable byte position. Queries
//! look at the buffer around a position without moving it; the handful of
//! manipulators (`advance`, `bump`, `seek`, `goto_next_eol`) only ever
//! change the position.
//!
//! Every query comes in two forms: one that reads the cursor's current
//! position (`current_line()`) and one that takes an explicit position
//! (`line_at(pos)`).
//!
//! ```
//! use nginx_config_engine::Text;
//!
//! let mut text = Text::new("server {\n    listen 80;\n}\n");
//! assert_eq!(text.current_line(), "server {");
//!
//! text.goto_next_eol().bump();
//! assert_eq!(text.rest_of_line(), "    listen 80;");
//! assert_eq!(text.last_eol(), Some(8));
//! ```
//!
//! ## Line boundaries
//!
//! Only `\n` delimits lines for [`Text::last_eol_at`], [`Text::next_eol_at`]
//! and [`Text::line_at`]. [`Text::is_eol_at`] and [`Text::rest_of_line_at`]
//! also stop at `\r`, so a lone carriage return ends the "rest of line" but
//! never splits a line. [`Text::line_at`] still trims a `\r` sitting at the
//! end of the line, so a CRLF line never carries either break character.
//!
//! A position on a `\n` belongs to the line that `\n` terminates:
//! [`Text::last_eol_at`] looks strictly before the position.
//!
//! When no `\n` follows a position, [`Text::next_eol_at`] falls back to the
//! index of the last byte (`len - 1`), not to `len`. [`Text::line_at`] ends
//! at that index, so the final line of a buffer without a trailing newline
//! is returned without its last byte.

mod error;

use std::borrow::Cow;

pub use error::TextError;

/// Characters that count as blank when testing for an empty line.
const BLANK: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

/// A read cursor over an immutable text buffer.
///
/// Positions are raw byte offsets. A position equal to or past the buffer
/// length is end-of-file; manipulators never bounds-check, so such a
/// position only becomes an error when a query needs a real byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    data: String,
    position: usize,
}

impl Text {
    /// Creates a cursor at the start of `data`.
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            position: 0,
        }
    }

    /// Current byte position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The whole buffer.
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Returns the byte under the cursor.
    pub fn char(&self) -> Result<u8, TextError> {
        self.char_at(self.position)
    }

    /// Returns the byte at `pos`.
    ///
    /// Fails with [`TextError::OutOfRange`] at or beyond end-of-file.
    pub fn char_at(&self, pos: usize) -> Result<u8, TextError> {
        self.data.as_bytes().get(pos).copied().ok_or_else(|| {
            log::debug!("rejected position {pos} in buffer of {} bytes", self.len());
            TextError::OutOfRange {
                position: pos,
                len: self.len(),
            }
        })
    }

    /// Returns true if the cursor is at or beyond end-of-file.
    pub fn is_eof(&self) -> bool {
        self.is_eof_at(self.position)
    }

    /// Returns true if `pos` does not index a byte of the buffer.
    pub fn is_eof_at(&self, pos: usize) -> bool {
        pos >= self.len()
    }

    /// Returns true if the byte under the cursor is `\r` or `\n`.
    pub fn is_eol(&self) -> Result<bool, TextError> {
        self.is_eol_at(self.position)
    }

    /// Returns true if the byte at `pos` is `\r` or `\n`.
    ///
    /// Fails with [`TextError::OutOfRange`] at or beyond end-of-file.
    pub fn is_eol_at(&self, pos: usize) -> Result<bool, TextError> {
        let byte = self.char_at(pos)?;
        Ok(is_line_break(byte))
    }

    /// Text from the cursor up to the next `\r`, `\n` or end-of-file.
    pub fn rest_of_line(&self) -> Cow<'_, str> {
        self.rest_of_line_at(self.position)
    }

    /// Text from `pos` up to the next `\r`, `\n` or end-of-file.
    ///
    /// Empty when `pos` is itself on a line break or at end-of-file.
    pub fn rest_of_line_at(&self, pos: usize) -> Cow<'_, str> {
        if self.is_eof_at(pos) {
            return Cow::Borrowed("");
        }
        let end = self.data.as_bytes()[pos..]
            .iter()
            .position(|&b| is_line_break(b))
            .map_or(self.len(), |i| pos + i);
        self.slice(pos, end)
    }

    /// Returns true if the line under the cursor holds only blank characters.
    pub fn is_empty_line(&self) -> bool {
        self.is_empty_line_at(self.position)
    }

    /// Returns true if the line around `pos` holds only blank characters.
    pub fn is_empty_line_at(&self, pos: usize) -> bool {
        self.line_at(pos).trim_matches(BLANK).is_empty()
    }

    /// The line under the cursor, without its line break characters.
    pub fn current_line(&self) -> Cow<'_, str> {
        self.line_at(self.position)
    }

    /// The line around `pos`.
    ///
    /// Starts right after the last `\n` before `pos` (or at the start of the
    /// buffer) and ends at [`Text::next_eol_at`], exclusive. A `\r` right
    /// before that end is dropped, so CRLF lines come back without either
    /// break character.
    pub fn line_at(&self, pos: usize) -> Cow<'_, str> {
        let start = self.last_eol_at(pos).map_or(0, |eol| eol + 1);
        let mut end = self.next_eol_at(pos);
        if end < start {
            return Cow::Borrowed("");
        }
        if end > start && self.data.as_bytes()[end - 1] == b'\r' {
            end -= 1;
        }
        self.slice(start, end)
    }

    /// Offset of the last `\n` strictly before the cursor.
    pub fn last_eol(&self) -> Option<usize> {
        self.last_eol_at(self.position)
    }

    /// Offset of the last `\n` in `[0, pos)`, or `None` if the line at `pos`
    /// starts the buffer.
    pub fn last_eol_at(&self, pos: usize) -> Option<usize> {
        let end = pos.min(self.len());
        self.data.as_bytes()[..end]
            .iter()
            .rposition(|&b| b == b'\n')
    }

    /// Offset of the first `\n` at or after the cursor.
    pub fn next_eol(&self) -> usize {
        self.next_eol_at(self.position)
    }

    /// Offset of the first `\n` at or after `pos`.
    ///
    /// Falls back to `len - 1` (0 for an empty buffer) when there is none.
    pub fn next_eol_at(&self, pos: usize) -> usize {
        let start = pos.min(self.len());
        self.data.as_bytes()[start..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or_else(|| self.len().saturating_sub(1), |i| start + i)
    }

    /// Moves the cursor forward by `delta` bytes.
    ///
    /// No bounds check: moving past end-of-file is allowed.
    pub fn advance(&mut self, delta: usize) -> &mut Self {
        let from = self.position;
        self.position = self.position.saturating_add(delta);
        log::trace!("advance {from} -> {}", self.position);
        self
    }

    /// Moves the cursor forward by one byte.
    pub fn bump(&mut self) -> &mut Self {
        self.advance(1)
    }

    /// Moves the cursor to `pos`.
    pub fn seek(&mut self, pos: usize) -> &mut Self {
        log::trace!("seek {} -> {pos}", self.position);
        self.position = pos;
        self
    }

    /// Moves the cursor to the next `\n` at or after its position.
    pub fn goto_next_eol(&mut self) -> &mut Self {
        self.goto_next_eol_from(self.position)
    }

    /// Moves the cursor to the next `\n` at or after `pos`.
    pub fn goto_next_eol_from(&mut self, pos: usize) -> &mut Self {
        let target = self.next_eol_at(pos);
        log::trace!("goto_next_eol {pos} -> {target}");
        self.position = target;
        self
    }

    /// Byte range `[start, end)` as text, decoding lossily when the range
    /// cuts through a multi-byte character.
    fn slice(&self, start: usize, end: usize) -> Cow<'_, str> {
        let end = end.min(self.len());
        let start = start.min(end);
        match self.data.get(start..end) {
            Some(s) => Cow::Borrowed(s),
            None => String::from_utf8_lossy(&self.data.as_bytes()[start..end]),
        }
    }
}

impl From<String> for Text {
    fn from(data: String) -> Self {
        Self::new(data)
    }
}

impl From<&str> for Text {
    fn from(data: &str) -> Self {
        Self::new(data)
    }
}

fn is_line_break(byte: u8) -> bool {
    matches!(byte, b'\r' | b'\n')
}
