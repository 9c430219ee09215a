//! Single-pass scanner producing [`Token`] values.
//!
//! # Design
//!
//! [`Scanner::next_token`] skips horizontal whitespace, peeks one character
//! and dispatches on it. Each arm calls a focused method that consumes the
//! token's characters and builds the token from the position captured before
//! consumption.
//!
//! Identifier and string text is accumulated in a reusable
//! [`AccumulationBuffer`]; integer and punctuation text is sliced straight
//! from the source.

use std::iter::FusedIterator;

use crate::accum_buffer::AccumulationBuffer;
use crate::config::ScannerConfig;
use crate::cursor::{is_whitespace, Cursor, Position};
use crate::error::ScanError;
use crate::token::{Token, TokenKind};

#[inline]
fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

#[inline]
fn is_ident_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Maps a single-character operator, punctuation mark or bracket to its kind.
fn single_char_kind(ch: char) -> Option<TokenKind> {
    let kind = match ch {
        '-' => TokenKind::Minus,
        '+' => TokenKind::Plus,
        '*' => TokenKind::Mult,
        '/' => TokenKind::Div,
        ':' => TokenKind::Colon,
        ';' => TokenKind::SemiColon,
        '?' => TokenKind::Question,
        '!' => TokenKind::Exclamation,
        '<' => TokenKind::LessThan,
        '>' => TokenKind::GreaterThan,
        '(' => TokenKind::OpenBracket,
        ')' => TokenKind::CloseBracket,
        '[' => TokenKind::OpenSquare,
        ']' => TokenKind::CloseSquare,
        '{' => TokenKind::OpenCurly,
        '}' => TokenKind::CloseCurly,
        _ => return None,
    };
    Some(kind)
}

/// Scanner over a borrowed source text.
///
/// One instance per source; state is mutated token by token. The scanner
/// also iterates as `Result<Token, ScanError>`, yielding the EOF token last
/// (or the first error) and then stopping.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    buffer: AccumulationBuffer,
    ignore_line_breaks: bool,
    /// Set once the iterator has yielded EOF or an error.
    finished: bool,
}

impl<'a> Scanner<'a> {
    /// Create a scanner with the default configuration.
    ///
    /// Positions are `u32`; input past `u32::MAX` bytes is not scanned and a
    /// warning is logged.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, &ScannerConfig::default())
    }

    pub fn with_config(source: &'a str, config: &ScannerConfig) -> Self {
        Self {
            cursor: Cursor::new(source, config.line_tracking),
            buffer: AccumulationBuffer::new(config.buffer_capacity, config.allow_buffer_growth),
            ignore_line_breaks: config.ignore_line_breaks,
            finished: false,
        }
    }

    /// Produce the next token.
    ///
    /// Returns an `EndOfFile` token with empty text once the source is
    /// exhausted; subsequent calls keep returning it.
    pub fn next_token(&mut self) -> Result<Token, ScanError> {
        self.skip_whitespace();

        let start = self.cursor.position();
        let Some(ch) = self.cursor.peek() else {
            return Ok(Self::token(TokenKind::EndOfFile, "", start));
        };

        let token = match ch {
            '0'..='9' => self.integer(start),
            '"' => self.string(start)?,
            '\n' => self.line_break(start),
            c if is_ident_start(c) => self.identifier(start)?,
            c => match single_char_kind(c) {
                Some(kind) => self.single(start, kind),
                None => {
                    let err = ScanError::UnexpectedCharacter {
                        ch: c,
                        offset: start.offset,
                        line: start.line,
                        column: start.column,
                    };
                    tracing::debug!(%err, "scan aborted");
                    return Err(err);
                }
            },
        };

        tracing::trace!(
            kind = ?token.kind,
            line = token.line,
            column = token.column,
            "token"
        );
        Ok(token)
    }

    /// Drain the scanner into a vector ending with the `EndOfFile` token.
    ///
    /// With `ignore_line_breaks`, `LineBreak` tokens are dropped; the
    /// terminal `EndOfFile` never is.
    pub fn read_all(&mut self, ignore_line_breaks: bool) -> Result<Vec<Token>, ScanError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            if !(ignore_line_breaks && token.kind == TokenKind::LineBreak) {
                tokens.push(token);
            }
            if is_eof {
                break;
            }
        }
        tracing::debug!(count = tokens.len(), "scan complete");
        Ok(tokens)
    }

    /// [`read_all`](Self::read_all) using the configured line-break policy.
    pub fn drain(&mut self) -> Result<Vec<Token>, ScanError> {
        self.read_all(self.ignore_line_breaks)
    }

    /// Current position of the cursor.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    // ─── Whitespace ──────────────────────────────────────────────

    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(is_whitespace);
    }

    // ─── Literals & Identifiers ──────────────────────────────────

    fn integer(&mut self, start: Position) -> Token {
        self.cursor.eat_while(|c| c.is_ascii_digit());
        Self::token(
            TokenKind::Integer,
            self.cursor.slice_from(start.offset),
            start,
        )
    }

    fn identifier(&mut self, start: Position) -> Result<Token, ScanError> {
        self.buffer.reset();
        while let Some(ch) = self.cursor.peek().filter(|&c| is_ident_continue(c)) {
            self.cursor.consume();
            self.buffer.push(ch)?;
        }
        Ok(Self::token(
            TokenKind::Identifier,
            self.buffer.materialize(),
            start,
        ))
    }

    fn string(&mut self, start: Position) -> Result<Token, ScanError> {
        self.cursor.consume(); // opening '"'
        self.buffer.reset();
        loop {
            match self.cursor.consume() {
                Some('"') => break,
                Some(ch) => self.buffer.push(ch)?,
                None => {
                    let err = ScanError::UnterminatedString {
                        offset: start.offset,
                        line: start.line,
                        column: start.column,
                    };
                    tracing::debug!(%err, "scan aborted");
                    return Err(err);
                }
            }
        }
        Ok(Self::token(
            TokenKind::String,
            self.buffer.materialize(),
            start,
        ))
    }

    // ─── Line Breaks ─────────────────────────────────────────────

    /// `\n`, or `\n\r` as a single two-character token.
    fn line_break(&mut self, start: Position) -> Token {
        let pair = self.cursor.peek_nth(1) == Some('\r');
        self.cursor.consume(); // '\n'
        if pair {
            self.cursor.consume();
        }
        self.cursor.mark_line_break(start.line);
        Self::token(
            TokenKind::LineBreak,
            self.cursor.slice_from(start.offset),
            start,
        )
    }

    // ─── Punctuation ─────────────────────────────────────────────

    fn single(&mut self, start: Position, kind: TokenKind) -> Token {
        self.cursor.consume();
        Self::token(kind, self.cursor.slice_from(start.offset), start)
    }

    #[inline]
    fn token(kind: TokenKind, text: impl Into<String>, start: Position) -> Token {
        Token::new(kind, text, start.line, start.column, start.offset)
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        self.finished = match &result {
            Ok(token) => token.is_eof(),
            Err(_) => true,
        };
        Some(result)
    }
}

impl FusedIterator for Scanner<'_> {}
