//! Growable character accumulator for multi-character token text.
//!
//! Identifiers and string bodies are built one character at a time. The
//! scanner keeps a single buffer for the whole scan and resets it before each
//! token, so steady-state scanning does not allocate for the accumulation
//! itself; only [`AccumulationBuffer::materialize`] produces a new `String`.
//!
//! # Growth
//!
//! When a push would exceed capacity the backing storage is replaced by one of
//! `max(2 * (count + 1), 2 * capacity)` characters. With growth disabled the
//! push fails with [`BufferError::Exhausted`] instead.

use crate::error::BufferError;

/// Default capacity in characters.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Growable character accumulator.
///
/// # Layout
///
/// ```text
/// [c0, c1, ..., c(count-1), stale..., stale...]
///  ^                        ^                  ^
///  0                      count            capacity
/// ```
///
/// Slots past `count` hold characters from earlier tokens; they are never
/// observed because every read is bounded by `count`.
#[derive(Clone, Debug)]
pub struct AccumulationBuffer {
    chars: Box<[char]>,
    count: usize,
    allow_growth: bool,
}

impl AccumulationBuffer {
    /// Create a buffer with room for `capacity` characters.
    pub fn new(capacity: usize, allow_growth: bool) -> Self {
        Self {
            chars: vec!['\0'; capacity].into_boxed_slice(),
            count: 0,
            allow_growth,
        }
    }

    /// Logically empty the buffer. Backing storage is kept.
    #[inline]
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Append one character, growing the storage if permitted.
    pub fn push(&mut self, ch: char) -> Result<(), BufferError> {
        if self.count == self.chars.len() {
            self.grow()?;
        }
        self.chars[self.count] = ch;
        self.count += 1;
        Ok(())
    }

    /// The accumulated characters as an owned `String`.
    ///
    /// The result is a copy: pushing afterwards does not change it.
    pub fn materialize(&self) -> String {
        self.chars[..self.count].iter().collect()
    }

    /// Number of accumulated characters.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` if nothing has been pushed since the last reset.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Current capacity in characters.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.chars.len()
    }

    /// Whether a full buffer reallocates instead of failing.
    #[inline]
    pub fn allows_growth(&self) -> bool {
        self.allow_growth
    }

    fn grow(&mut self) -> Result<(), BufferError> {
        let capacity = self.chars.len();
        if !self.allow_growth {
            return Err(BufferError::Exhausted { capacity });
        }

        let new_capacity = usize::max(2 * (self.count + 1), 2 * capacity);
        let mut chars = vec!['\0'; new_capacity].into_boxed_slice();
        chars[..self.count].copy_from_slice(&self.chars[..self.count]);
        tracing::trace!(from = capacity, to = new_capacity, "accumulation buffer grown");
        self.chars = chars;
        Ok(())
    }
}

impl Default for AccumulationBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, true)
    }
}
