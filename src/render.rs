use crate::clean::squeeze;
use crate::config::ParseConfig;
use crate::NameRecord;

/// Expand a name template against `record`.
///
/// `%t` title, `%f` first, `%m` middle, `%n` nickname (wrapped in the
/// configured double quotes), `%l` last and `%s` suffix are replaced;
/// anything else, including unknown `%` sequences, is copied as is. Spaces
/// are squeezed afterwards, so empty fields leave no gaps.
///
/// ```
/// use nomen::{render, NameRecord, ParseConfig};
///
/// let name = NameRecord::parse("Mr. Joe \"Spud\" Smith III").unwrap();
/// let config = ParseConfig::default();
/// assert_eq!("Smith, Joe \"Spud\"", render(&name, "%l, %f %n", &config));
/// assert_eq!("Joe Smith %x", render(&name, "%f %m %l %x", &config));
/// ```
pub fn render(record: &NameRecord, template: &str, config: &ParseConfig) -> String {
    let mut result = String::with_capacity(template.len() + 32);
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            result.push(c);
            continue;
        }

        let field = match chars.peek().copied() {
            Some('t') => &record.title,
            Some('f') => &record.first,
            Some('m') => &record.middle,
            Some('l') => &record.last,
            Some('s') => &record.suffix,
            Some('n') => {
                chars.next();
                if !record.nick.is_empty() {
                    result.push(config.double_left);
                    result.push_str(&record.nick);
                    result.push(config.double_right);
                }
                continue;
            }
            _ => {
                result.push(c);
                continue;
            }
        };
        chars.next();
        result.push_str(field);
    }

    squeeze(&result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> NameRecord {
        let mut record = NameRecord::unparsed("");
        record.title = "Dr".into();
        record.first = "Jane".into();
        record.middle = "Q".into();
        record.nick = "JQ".into();
        record.last = "Public".into();
        record.suffix = "PhD".into();
        record
    }

    #[test]
    fn every_placeholder() {
        let config = ParseConfig::default();
        assert_eq!(
            "Dr Jane \"JQ\" Q Public PhD",
            render(&record(), "%t %f %n %m %l %s", &config)
        );
    }

    #[test]
    fn punctuation_in_template() {
        let config = ParseConfig::default();
        assert_eq!("Public, Jane Q", render(&record(), "%l, %f %m", &config));
    }

    #[test]
    fn empty_fields_leave_no_gaps() {
        let mut record = record();
        record.middle = "".into();
        record.nick = "".into();
        let config = ParseConfig::default();
        assert_eq!("Jane Public", render(&record, "  %f %n %m   %l ", &config));
    }

    #[test]
    fn unknown_placeholders_pass_through() {
        let config = ParseConfig::default();
        assert_eq!("Jane %x Public %", render(&record(), "%f %x %l %", &config));
        assert_eq!("100% Public", render(&record(), "100% %l", &config));
    }

    #[test]
    fn configured_quotes() {
        let config = ParseConfig::default().with_double_quotes('«', '»');
        assert_eq!("Jane «JQ» Public", render(&record(), "%f %n %l", &config));
    }
}
