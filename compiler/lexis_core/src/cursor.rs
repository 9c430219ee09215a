//! Character cursor with line/column bookkeeping.
//!
//! The cursor walks a borrowed `&str` one `char` at a time. The offset is a
//! byte index and only ever moves forward. Line and column are counted in
//! characters and are updated by [`Cursor::consume`] according to the
//! configured [`LineTracking`] mode:
//!
//! - `Whitespace`: every consumed space, tab, or carriage return resets the
//!   column to 0 and increments the line.
//! - `LineBreak`: consumption only increments the column.
//!
//! In both modes the scanner calls [`Cursor::mark_line_break`] after a
//! line-break token, which sets the line to one past the token's line and the
//! column to 0.

use crate::config::LineTracking;

/// Returns `true` for the horizontal whitespace the scanner skips.
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r')
}

/// Position of a character in the source.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Position {
    /// Byte offset.
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

/// Forward-only cursor over source text.
///
/// The cursor is [`Copy`], so a scanner can snapshot it cheaply.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Byte offset of the next character.
    pos: u32,
    line: u32,
    column: u32,
    line_tracking: LineTracking,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at offset 0, line 0, column 0.
    ///
    /// Sources longer than `u32::MAX` bytes are truncated to that length.
    pub fn new(source: &'a str, line_tracking: LineTracking) -> Self {
        let source = match u32::try_from(source.len()) {
            Ok(_) => source,
            Err(_) => {
                tracing::warn!(
                    len = source.len(),
                    "source exceeds u32::MAX bytes, scanning a truncated prefix"
                );
                truncate_to_char_boundary(source, u32::MAX as usize)
            }
        };
        Self {
            source,
            pos: 0,
            line: 0,
            column: 0,
            line_tracking,
        }
    }

    /// The character at the cursor, or `None` at end of input.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character `n` characters past the cursor, or `None` if that is
    /// at or beyond end of input.
    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Consume and return the character at the cursor.
    ///
    /// The column is incremented before the character is read. In
    /// `Whitespace` mode a whitespace character then resets the column and
    /// advances the line. Returns `None` without moving at end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "len_utf8() is at most 4"
    )]
    pub fn consume(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.column += 1;
        self.pos += ch.len_utf8() as u32;
        if self.line_tracking == LineTracking::Whitespace && is_whitespace(ch) {
            self.column = 0;
            self.line += 1;
        }
        Some(ch)
    }

    /// Consume characters while `pred` holds, returning how many were eaten.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut eaten = 0;
        while self.peek().is_some_and(&pred) {
            self.consume();
            eaten += 1;
        }
        eaten
    }

    /// Reset counters after a line-break token that started on `line`.
    #[inline]
    pub fn mark_line_break(&mut self, line: u32) {
        self.line = line + 1;
        self.column = 0;
    }

    /// Extract `start..end` (byte offsets) from the source.
    ///
    /// # Contract
    ///
    /// Both offsets must come from this cursor, so they lie on character
    /// boundaries within the source.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.source[start as usize..end as usize]
    }

    /// Extract the source from `start` to the current offset.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Current byte offset.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Snapshot of offset, line and column.
    #[inline]
    pub fn position(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    #[inline]
    fn rest(&self) -> &'a str {
        &self.source[self.pos as usize..]
    }
}

fn truncate_to_char_boundary(source: &str, max: usize) -> &str {
    let mut end = max;
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    &source[..end]
}

#[cfg(test)]
mod tests;
