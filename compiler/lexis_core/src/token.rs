//! Token kinds and token values.

use std::fmt;

use crate::error::DecodeError;

/// Token categories.
///
/// The set is closed: consumers switching on a kind must handle every
/// variant. `Float` is reserved and `Undefined` is a placeholder; the
/// scanner produces neither.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    Undefined,

    EndOfFile,
    LineBreak,

    Integer,
    Float,
    String,
    Identifier,

    Minus,
    Plus,
    Mult,
    Div,

    Colon,
    SemiColon,
    Dot,
    Comma,
    Question,
    Exclamation,
    LessThan,
    GreaterThan,

    OpenBracket,  // (
    CloseBracket, // )
    OpenCurly,    // {
    CloseCurly,   // }
    OpenSquare,   // [
    CloseSquare,  // ]
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 25] = [
        TokenKind::Undefined,
        TokenKind::EndOfFile,
        TokenKind::LineBreak,
        TokenKind::Integer,
        TokenKind::Float,
        TokenKind::String,
        TokenKind::Identifier,
        TokenKind::Minus,
        TokenKind::Plus,
        TokenKind::Mult,
        TokenKind::Div,
        TokenKind::Colon,
        TokenKind::SemiColon,
        TokenKind::Dot,
        TokenKind::Comma,
        TokenKind::Question,
        TokenKind::Exclamation,
        TokenKind::LessThan,
        TokenKind::GreaterThan,
        TokenKind::OpenBracket,
        TokenKind::CloseBracket,
        TokenKind::OpenCurly,
        TokenKind::CloseCurly,
        TokenKind::OpenSquare,
        TokenKind::CloseSquare,
    ];

    /// The fixed source text of a punctuation kind.
    ///
    /// Returns `None` for kinds whose text varies (literals, identifiers,
    /// line breaks) and for `EndOfFile`/`Undefined`.
    pub fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::Minus => Some("-"),
            TokenKind::Plus => Some("+"),
            TokenKind::Mult => Some("*"),
            TokenKind::Div => Some("/"),
            TokenKind::Colon => Some(":"),
            TokenKind::SemiColon => Some(";"),
            TokenKind::Dot => Some("."),
            TokenKind::Comma => Some(","),
            TokenKind::Question => Some("?"),
            TokenKind::Exclamation => Some("!"),
            TokenKind::LessThan => Some("<"),
            TokenKind::GreaterThan => Some(">"),
            TokenKind::OpenBracket => Some("("),
            TokenKind::CloseBracket => Some(")"),
            TokenKind::OpenCurly => Some("{"),
            TokenKind::CloseCurly => Some("}"),
            TokenKind::OpenSquare => Some("["),
            TokenKind::CloseSquare => Some("]"),
            TokenKind::Undefined
            | TokenKind::EndOfFile
            | TokenKind::LineBreak
            | TokenKind::Integer
            | TokenKind::Float
            | TokenKind::String
            | TokenKind::Identifier => None,
        }
    }

    /// Human-readable name for diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Undefined => "undefined token",
            TokenKind::EndOfFile => "end of file",
            TokenKind::LineBreak => "line break",
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::String => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::Minus => "'-'",
            TokenKind::Plus => "'+'",
            TokenKind::Mult => "'*'",
            TokenKind::Div => "'/'",
            TokenKind::Colon => "':'",
            TokenKind::SemiColon => "';'",
            TokenKind::Dot => "'.'",
            TokenKind::Comma => "','",
            TokenKind::Question => "'?'",
            TokenKind::Exclamation => "'!'",
            TokenKind::LessThan => "'<'",
            TokenKind::GreaterThan => "'>'",
            TokenKind::OpenBracket => "'('",
            TokenKind::CloseBracket => "')'",
            TokenKind::OpenCurly => "'{'",
            TokenKind::CloseCurly => "'}'",
            TokenKind::OpenSquare => "'['",
            TokenKind::CloseSquare => "']'",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified lexeme with the position of its first character.
///
/// `line` and `column` are 0-based and follow the scanner's line-tracking
/// mode; `offset` is the byte offset into the source.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    /// The lexeme. String tokens hold the text between the quotes.
    pub text: String,
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

impl Token {
    #[inline]
    pub fn new(
        kind: TokenKind,
        text: impl Into<String>,
        line: u32,
        column: u32,
        offset: u32,
    ) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
            column,
            offset,
        }
    }

    /// Decode an `Integer` token as a base-10 value.
    ///
    /// Any other kind is a [`DecodeError::TypeMismatch`]; there is no
    /// coercion to a default value.
    pub fn as_integer(&self) -> Result<u64, DecodeError> {
        if self.kind != TokenKind::Integer {
            return Err(DecodeError::TypeMismatch { kind: self.kind });
        }
        self.text.parse().map_err(|_| DecodeError::OutOfRange {
            text: self.text.clone(),
        })
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.kind, self.text)
    }
}
