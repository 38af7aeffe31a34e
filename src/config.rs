//! Parse and render settings, plus a process-wide default.
//!
//! A `ParseConfig` is a plain value: the parser reads it, never writes it.
//! The shared default exists for the convenience functions at the crate
//! root; it sits behind a lock and is only ever handed out as a snapshot, so
//! a parse in progress can't see a half-applied change.

use compact_str::CompactString;
use crossbeam_utils::sync::ShardedLock;
use once_cell::sync::Lazy;
use std::sync::PoisonError;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// Writing direction of the names being processed.
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Ltr
    }
}

/// Quote characters, locale and default output template.
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfig {
    /// Opening double quote; every known left double-quote glyph folds to it.
    pub double_left: char,
    /// Closing double quote.
    pub double_right: char,
    /// Opening single quote (also what apostrophes fold to).
    pub single_left: char,
    /// Closing single quote.
    pub single_right: char,
    pub language: CompactString,
    pub direction: Direction,
    /// Template used by `NameRecord::render_default`.
    pub format: CompactString,
}

impl Default for ParseConfig {
    fn default() -> Self {
        ParseConfig {
            double_left: '"',
            double_right: '"',
            single_left: '\'',
            single_right: '\'',
            language: CompactString::new("en"),
            direction: Direction::Ltr,
            format: CompactString::new("%f %m %l"),
        }
    }
}

impl ParseConfig {
    pub fn with_double_quotes(mut self, left: char, right: char) -> Self {
        self.double_left = left;
        self.double_right = right;
        self
    }

    pub fn with_single_quotes(mut self, left: char, right: char) -> Self {
        self.single_left = left;
        self.single_right = right;
        self
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = CompactString::new(language);
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_format(mut self, format: &str) -> Self {
        self.format = CompactString::new(format);
        self
    }

    /// The four configured quote characters, in left-double, right-double,
    /// left-single, right-single order.
    #[inline]
    pub fn quotes(&self) -> [char; 4] {
        [
            self.double_left,
            self.double_right,
            self.single_left,
            self.single_right,
        ]
    }
}

static SHARED: Lazy<ShardedLock<ParseConfig>> =
    Lazy::new(|| ShardedLock::new(ParseConfig::default()));

/// A copy of the shared default configuration as it is right now.
pub fn snapshot() -> ParseConfig {
    SHARED
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Modify the shared default configuration, returning the result.
///
/// ```
/// let config = nomen::config::configure(|c| c.format = "%f %l".into());
/// assert_eq!(config.format, "%f %l");
/// # nomen::config::reset();
/// ```
pub fn configure<F>(update: F) -> ParseConfig
where
    F: FnOnce(&mut ParseConfig),
{
    let mut shared = SHARED.write().unwrap_or_else(PoisonError::into_inner);
    update(&mut shared);
    shared.clone()
}

/// Restore the shared default configuration to `ParseConfig::default()`.
pub fn reset() -> ParseConfig {
    let mut shared = SHARED.write().unwrap_or_else(PoisonError::into_inner);
    *shared = ParseConfig::default();
    shared.clone()
}
