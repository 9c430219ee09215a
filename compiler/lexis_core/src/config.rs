//! Scanner configuration.

use crate::accum_buffer::DEFAULT_CAPACITY;

/// Which consumed characters advance the line counter.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineTracking {
    /// Consuming any whitespace character (space, tab, carriage return)
    /// resets the column and advances the line. Line-break tokens also
    /// reset explicitly.
    ///
    /// This is the historical behaviour and the default, kept for
    /// compatibility with existing consumers of token positions.
    #[default]
    Whitespace,
    /// Only line-break tokens advance the line; whitespace advances the
    /// column like any other character.
    LineBreak,
}

impl LineTracking {
    /// Parse a command-line spelling (`whitespace` or `line-break`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "whitespace" => Some(LineTracking::Whitespace),
            "line-break" | "linebreak" => Some(LineTracking::LineBreak),
            _ => None,
        }
    }
}

/// Construction-time options for a [`Scanner`](crate::Scanner).
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScannerConfig {
    pub line_tracking: LineTracking,
    /// Drop `LineBreak` tokens in [`Scanner::drain`](crate::Scanner::drain).
    pub ignore_line_breaks: bool,
    /// Initial accumulation buffer capacity, in characters.
    pub buffer_capacity: usize,
    /// If `false`, a token longer than `buffer_capacity` is a
    /// `ResourceExhausted` error.
    pub allow_buffer_growth: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            line_tracking: LineTracking::Whitespace,
            ignore_line_breaks: false,
            buffer_capacity: DEFAULT_CAPACITY,
            allow_buffer_growth: true,
        }
    }
}

impl ScannerConfig {
    #[must_use]
    pub fn with_line_tracking(mut self, line_tracking: LineTracking) -> Self {
        self.line_tracking = line_tracking;
        self
    }

    #[must_use]
    pub fn with_ignore_line_breaks(mut self, ignore: bool) -> Self {
        self.ignore_line_breaks = ignore;
        self
    }

    #[must_use]
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_buffer_growth(mut self, allow: bool) -> Self {
        self.allow_buffer_growth = allow;
        self
    }
}
