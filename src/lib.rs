//! A library for breaking free-form personal names into title, first,
//! middle, nickname, last and suffix.
//!
//! ```
//! use nomen::NameRecord;
//!
//! let name = NameRecord::parse("Dr. Joe \"Spud\" Van der Berg Jr.").unwrap();
//! assert_eq!(name.title, "Dr");
//! assert_eq!(name.first, "Joe");
//! assert_eq!(name.nick, "Spud");
//! assert_eq!(name.last, "Van der Berg");
//! assert_eq!(name.suffix, "Jr");
//! ```

mod case;
mod clean;
pub mod config;
mod error;
mod extract;
mod namecase;
mod normalize;
mod order;
mod parse;
mod render;
mod suffix;
mod surname;
mod title;

#[cfg(feature = "ffi")]
pub mod external;

#[cfg(feature = "serialization")]
mod serialization;

pub use config::{Direction, ParseConfig};
pub use error::{NameError, Result};
pub use extract::{extract_all, extract_nickname, Extraction, Matcher};
pub use namecase::{capitalize, capitalize_with, CaseRules};
pub use normalize::{normalize, normalize_lossy};
pub use order::{Order, OrderHint};
pub use parse::Parser;
pub use render::render;
pub use suffix::extract_suffix;
pub use title::extract_title;

use clean::squeeze;
use compact_str::CompactString;
use std::fmt;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// The parts of a personal name. A part that wasn't found is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct NameRecord {
    pub title: CompactString,
    pub first: CompactString,
    pub middle: CompactString,
    pub nick: CompactString,
    pub last: CompactString,
    pub suffix: CompactString,
    original: String,
}

impl NameRecord {
    /// A record for `raw` with every part still empty.
    pub fn unparsed(raw: &str) -> NameRecord {
        NameRecord {
            original: raw.to_string(),
            ..Default::default()
        }
    }

    /// Parse with the shared default configuration and default ordering.
    pub fn parse(raw: &str) -> Option<NameRecord> {
        parse(raw, OrderHint::default())
    }

    /// The text this record was made from.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Parse `original()` again, overwriting every part. On failure the
    /// record is left as it was.
    pub fn reparse(&mut self, parser: &Parser, hint: OrderHint) -> Result<()> {
        let parsed = parser.parse_strict(&self.original, hint)?;
        *self = parsed;
        Ok(())
    }

    pub fn surname(&self) -> &str {
        &self.last
    }

    pub fn family(&self) -> &str {
        &self.last
    }

    pub fn given(&self) -> &str {
        &self.first
    }

    /// First, middle and last names.
    pub fn full(&self) -> String {
        self.render("%f %m %l", &ParseConfig::default())
    }

    /// See the crate-level `render`.
    pub fn render(&self, template: &str, config: &ParseConfig) -> String {
        render::render(self, template, config)
    }

    /// Render with the configured default template.
    pub fn render_default(&self, config: &ParseConfig) -> String {
        self.render(&config.format, config)
    }

    /// The whole name, capitalized: title, first, nickname (quoted), middle,
    /// last and suffix. The nickname and suffix keep their case.
    ///
    /// ```
    /// let name = nomen::NameRecord::parse("joe 'spud' mcdonald III").unwrap();
    /// assert_eq!("Joe \"spud\" McDonald III", name.proper(&nomen::ParseConfig::default()));
    /// ```
    pub fn proper(&self, config: &ParseConfig) -> String {
        let mut parts: Vec<String> = vec![
            capitalize(&self.title),
            capitalize(&self.first),
        ];
        if !self.nick.is_empty() {
            parts.push(format!(
                "{}{}{}",
                config.double_left, self.nick, config.double_right
            ));
        }
        parts.push(capitalize(&self.middle));
        parts.push(capitalize(&self.last));
        parts.push(self.suffix.to_string());
        squeeze(&parts.join(" "))
    }

    /// Were no parts found at all?
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.first.is_empty()
            && self.middle.is_empty()
            && self.nick.is_empty()
            && self.last.is_empty()
            && self.suffix.is_empty()
    }
}

/// First and last name.
impl fmt::Display for NameRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render("%f %l", &ParseConfig::default()))
    }
}

/// Parse `raw` with a snapshot of the shared default configuration, or
/// `None` if it can't be decomposed.
pub fn parse(raw: &str, hint: OrderHint) -> Option<NameRecord> {
    Parser::new(config::snapshot()).parse(raw, hint)
}

/// Like `parse`, but reports why a name couldn't be decomposed.
///
/// ```
/// use nomen::{parse_strict, NameError, OrderHint};
///
/// let name = parse_strict("Snepscheut, Jan L. A. van de", OrderHint::default()).unwrap();
/// assert_eq!(name.last, "van de Snepscheut");
/// assert_eq!(name.first, "Jan L A");
///
/// assert_eq!(Err(NameError::InvalidInput), parse_strict("  ", OrderHint::default()));
/// ```
pub fn parse_strict(raw: &str, hint: OrderHint) -> Result<NameRecord> {
    Parser::new(config::snapshot()).parse_strict(raw, hint)
}
