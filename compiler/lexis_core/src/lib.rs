//! Single-pass lexical scanner.
//!
//! Converts source text that is already resident in memory into an ordered
//! sequence of classified [`Token`]s terminated by exactly one
//! `EndOfFile` token.
//!
//! ```
//! use lexis_core::{Scanner, TokenKind};
//!
//! let tokens = Scanner::new("x + 42").read_all(false)?;
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Identifier, TokenKind::Plus, TokenKind::Integer, TokenKind::EndOfFile]
//! );
//! assert_eq!(tokens[2].as_integer()?, 42);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Crate layout
//!
//! - [`accum_buffer`]: growable character accumulator for token text
//! - [`cursor`]: character cursor with line/column bookkeeping
//! - [`token`]: token kinds and values
//! - [`scanner`]: classification and dispatch
//! - [`config`]: scanner options
//! - [`error`]: scan and decode errors

pub mod accum_buffer;
pub mod config;
pub mod cursor;
pub mod error;
pub mod scanner;
pub mod token;

pub use accum_buffer::AccumulationBuffer;
pub use config::{LineTracking, ScannerConfig};
pub use cursor::{Cursor, Position};
pub use error::{BufferError, DecodeError, ScanError};
pub use scanner::Scanner;
pub use token::{Token, TokenKind};
