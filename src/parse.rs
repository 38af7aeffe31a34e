use crate::clean::dustoff;
use crate::config::ParseConfig;
use crate::error::{NameError, Result};
use crate::extract::extract_nickname;
use crate::normalize::normalize;
use crate::order::{split_fields, OrderHint};
use crate::render;
use crate::suffix::extract_suffix;
use crate::title::extract_title;
use crate::NameRecord;
use compact_str::CompactString;
use tracing::{debug, trace};

/// Decomposes names using one fixed configuration.
///
/// A `Parser` never changes its configuration once built, so one can be
/// shared between threads and used for any number of parses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parser {
    config: ParseConfig,
}

impl Parser {
    pub fn new(config: ParseConfig) -> Parser {
        Parser { config }
    }

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Parse a name, or `None` if it can't be decomposed.
    ///
    /// ```
    /// use nomen::{OrderHint, Parser};
    ///
    /// let parser = Parser::default();
    /// let name = parser.parse("Cecil De La Hoya", OrderHint::default()).unwrap();
    /// assert_eq!(name.first, "Cecil");
    /// assert_eq!(name.last, "De La Hoya");
    ///
    /// assert!(parser.parse("A, B, C", OrderHint::default()).is_none());
    /// ```
    pub fn parse(&self, raw: &str, hint: OrderHint) -> Option<NameRecord> {
        match self.parse_strict(raw, hint) {
            Ok(record) => Some(record),
            Err(error) => {
                debug!(%error, raw, "discarding unparseable name");
                None
            }
        }
    }

    /// Parse a name, reporting why if it can't be decomposed.
    ///
    /// Fails with `NameError::InvalidInput` for empty or blank input and
    /// with `NameError::AmbiguousStructure` when more than one comma is
    /// left once titles, suffixes and nicknames are removed.
    pub fn parse_strict(&self, raw: &str, hint: OrderHint) -> Result<NameRecord> {
        if raw.trim().is_empty() {
            return Err(NameError::InvalidInput);
        }

        let mut record = NameRecord::unparsed(raw);
        let name = normalize(raw, &self.config);
        trace!(normalized = &*name);

        let nick = extract_nickname(&name, &self.config);
        trace!(nick = %nick.found, residue = %nick.residue);

        let suffix = extract_suffix(&nick.residue);
        trace!(suffix = %suffix.found, residue = %suffix.residue);

        let title = extract_title(&suffix.residue);
        trace!(title = %title.found, residue = %title.residue);

        let residue = dustoff(&title.residue);
        let fields = split_fields(&residue, hint, !title.found.is_empty())?;
        trace!(first = %fields.first, middle = %fields.middle, last = %fields.last);

        record.nick = CompactString::from(nick.found);
        record.suffix = CompactString::from(suffix.found);
        record.title = if title.found.is_empty() {
            CompactString::from(fields.title)
        } else {
            CompactString::from(title.found)
        };
        record.first = CompactString::from(fields.first);
        record.middle = CompactString::from(fields.middle);
        record.last = CompactString::from(fields.last);

        Ok(record)
    }

    /// Expand `template` against `record` using this parser's quotes.
    pub fn render(&self, record: &NameRecord, template: &str) -> String {
        render::render(record, template, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Order;

    fn parse(raw: &str) -> NameRecord {
        Parser::default()
            .parse_strict(raw, OrderHint::default())
            .unwrap()
    }

    #[test]
    fn everything() {
        let name = parse("Mr. Joe \"Spud\" Smith III");
        assert_eq!(name.title, "Mr");
        assert_eq!(name.first, "Joe");
        assert_eq!(name.middle, "");
        assert_eq!(name.nick, "Spud");
        assert_eq!(name.last, "Smith");
        assert_eq!(name.suffix, "III");
        assert_eq!("Mr. Joe \"Spud\" Smith III", name.original());
    }

    #[test]
    fn comma_order() {
        let name = parse("Snepscheut, Jan L. A. van de");
        assert_eq!(name.first, "Jan L A");
        assert_eq!(name.last, "van de Snepscheut");
    }

    #[test]
    fn suffix_before_comma() {
        let name = parse("Smith Jr., Joe");
        assert_eq!(name.first, "Joe");
        assert_eq!(name.last, "Smith");
        assert_eq!(name.suffix, "Jr");
    }

    #[test]
    fn curly_nickname() {
        let name = parse("Joe “Spud” Smith");
        assert_eq!(name.nick, "Spud");
        assert_eq!(name.first, "Joe");
        assert_eq!(name.last, "Smith");
    }

    #[test]
    fn middle_names() {
        let name = parse("Bertrand A. William Russell");
        assert_eq!(name.first, "Bertrand");
        assert_eq!(name.middle, "A William");
        assert_eq!(name.last, "Russell");
    }

    #[test]
    fn last_first_hint() {
        let name = Parser::default()
            .parse_strict("Smith Joe", OrderHint::new(Order::LastFirst))
            .unwrap();
        assert_eq!(name.first, "Joe");
        assert_eq!(name.last, "Smith");
    }

    #[test]
    fn mononym() {
        let name = parse("Cher");
        assert_eq!(name.last, "Cher");
        assert_eq!(name.first, "");
    }

    #[test]
    fn nothing_left_after_extraction() {
        let name = parse("Dr.");
        assert_eq!(name.title, "Dr");
        assert_eq!(name.first, "");
        assert_eq!(name.last, "");
    }

    #[test]
    fn invalid_input() {
        let parser = Parser::default();
        assert_eq!(
            Err(NameError::InvalidInput),
            parser.parse_strict("", OrderHint::default())
        );
        assert_eq!(
            Err(NameError::InvalidInput),
            parser.parse_strict(" \t ", OrderHint::default())
        );
        assert_eq!(None, parser.parse("", OrderHint::default()));
    }

    #[test]
    fn too_many_commas() {
        let parser = Parser::default();
        assert!(matches!(
            parser.parse_strict("A, B, C", OrderHint::default()),
            Err(NameError::AmbiguousStructure { commas: 2, .. })
        ));
        assert_eq!(None, parser.parse("A, B, C", OrderHint::default()));
    }

    #[test]
    fn configured_quotes() {
        let parser = Parser::new(ParseConfig::default().with_double_quotes('«', '»'));
        let name = parser
            .parse_strict("Joe \"Spud\" Smith", OrderHint::default())
            .unwrap();
        assert_eq!(name.nick, "Spud");
        assert_eq!("Joe «Spud» Smith", parser.render(&name, "%f %n %l"));
    }
}
