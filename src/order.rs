//! Splitting what's left of a name, once titles, suffixes and nicknames are
//! gone, into last, first and middle.

use crate::clean::cleanup;
use crate::error::{NameError, Result};
use crate::surname::{find_first_last, find_last_first};
use crate::title::extract_title;
use smallvec::SmallVec;
use tracing::debug;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// Which way round the tokens of a name are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "snake_case"))]
pub enum Order {
    FirstLast,
    LastFirst,
    LastCommaFirst,
    /// "Last, first" if there is a comma, "first last" otherwise.
    Auto,
}

impl Default for Order {
    fn default() -> Self {
        Order::Auto
    }
}

/// What the caller knows about how a name is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct OrderHint {
    pub order: Order,
    /// How many of the tokens left after the surname go to `first`; the
    /// rest go to `middle`. Zero puts them all in `first`.
    pub space_limit: usize,
}

impl Default for OrderHint {
    fn default() -> Self {
        OrderHint {
            order: Order::Auto,
            space_limit: 1,
        }
    }
}

impl OrderHint {
    pub fn new(order: Order) -> Self {
        OrderHint {
            order,
            ..Default::default()
        }
    }

    pub fn with_space_limit(self, space_limit: usize) -> Self {
        OrderHint {
            space_limit,
            ..self
        }
    }
}

/// The name fields that come out of the residue. `title` is only set when
/// a title turned up inside the given names of a "last, first" name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fields {
    pub title: String,
    pub first: String,
    pub middle: String,
    pub last: String,
}

type Words<'a> = SmallVec<[&'a str; 8]>;

/// Split a residue into fields.
///
/// `have_title` says whether an earlier pass already found a title; if not,
/// the given-name half of a "last, first" name gets a second look.
pub fn split_fields(residue: &str, hint: OrderHint, have_title: bool) -> Result<Fields> {
    let commas = residue.matches(',').count();
    let mut fields = match commas {
        0 => split_without_comma(residue, hint),
        1 => split_at_comma(residue, have_title),
        _ => {
            return Err(NameError::AmbiguousStructure {
                commas,
                residue: residue.to_string(),
            })
        }
    };

    fields.last = cleanup(&fields.last);
    fields.first = cleanup(&fields.first);
    fields.middle = cleanup(&fields.middle);
    Ok(fields)
}

fn split_at_comma(residue: &str, have_title: bool) -> Fields {
    let (last, first) = match residue.split_once(',') {
        Some((last, first)) => (last.trim(), first.trim()),
        None => (residue.trim(), ""),
    };
    let mut fields = Fields {
        first: first.to_string(),
        last: last.to_string(),
        ..Default::default()
    };

    // "Snepscheut, Jan L. A. van de": part of the surname is on the far
    // side of the comma, so read the whole thing again as "first last"
    if first.contains(' ') {
        let joined = format!("{} {}", first, last);
        let words: Words = joined.split_whitespace().collect();
        if let Some(start) = find_first_last(&words) {
            let surname = words[start..].join(" ");
            if surname != last {
                debug!(%surname, "surname spans the comma");
                fields.first = words[..start].join(" ");
                fields.last = surname;
            }
        }
    }

    if !have_title {
        let titles = extract_title(&fields.first);
        if !titles.found.is_empty() {
            fields.title = titles.found;
            fields.first = titles.residue;
        }
    }

    fields
}

fn split_without_comma(residue: &str, hint: OrderHint) -> Fields {
    let words: Words = residue.split_whitespace().collect();
    match words.len() {
        0 => return Fields::default(),
        1 => {
            return Fields {
                last: words[0].to_string(),
                ..Default::default()
            }
        }
        _ => {}
    }

    let (surname, given) = match hint.order {
        Order::FirstLast | Order::Auto => {
            let start = find_first_last(&words).unwrap_or(words.len() - 1);
            (&words[start..], &words[..start])
        }
        Order::LastFirst | Order::LastCommaFirst => {
            let stem = find_last_first(&words).unwrap_or(0);
            (&words[..=stem], &words[stem + 1..])
        }
    };

    let (first, middle) = split_given(given, hint.space_limit);
    Fields {
        first,
        middle,
        last: surname.join(" "),
        ..Default::default()
    }
}

fn split_given(given: &[&str], space_limit: usize) -> (String, String) {
    if space_limit == 0 || given.len() <= space_limit {
        (given.join(" "), String::new())
    } else {
        let (first, middle) = given.split_at(space_limit);
        (first.join(" "), middle.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(residue: &str, hint: OrderHint) -> (String, String, String) {
        let fields = split_fields(residue, hint, false).unwrap();
        (fields.first, fields.middle, fields.last)
    }

    fn strings(first: &str, middle: &str, last: &str) -> (String, String, String) {
        (first.to_string(), middle.to_string(), last.to_string())
    }

    #[test]
    fn first_last() {
        let hint = OrderHint::default();
        assert_eq!(strings("Joe", "", "Smith"), split("Joe Smith", hint));
        assert_eq!(strings("Cecil", "", "De La Hoya"), split("Cecil De La Hoya", hint));
        assert_eq!(
            strings("Bertrand", "A William", "Russell"),
            split("Bertrand A William Russell", hint)
        );
    }

    #[test]
    fn space_limit() {
        let hint = OrderHint::default().with_space_limit(0);
        assert_eq!(
            strings("Bertrand A William", "", "Russell"),
            split("Bertrand A William Russell", hint)
        );

        let hint = OrderHint::default().with_space_limit(2);
        assert_eq!(
            strings("Bertrand A", "William", "Russell"),
            split("Bertrand A William Russell", hint)
        );
        assert_eq!(strings("Joe", "", "Smith"), split("Joe Smith", hint));
    }

    #[test]
    fn last_first() {
        let hint = OrderHint::new(Order::LastFirst);
        assert_eq!(strings("Joe", "Bob", "Smith"), split("Smith Joe Bob", hint));
        assert_eq!(strings("Cecil", "", "De La Hoya"), split("De La Hoya Cecil", hint));
    }

    #[test]
    fn last_comma_first_without_comma() {
        let hint = OrderHint::new(Order::LastCommaFirst);
        assert_eq!(strings("Joe", "", "Smith"), split("Smith Joe", hint));
    }

    #[test]
    fn surname_without_stem() {
        let hint = OrderHint::default();
        assert_eq!(strings("Joe", "", "A&B"), split("Joe A&B", hint));
    }

    #[test]
    fn comma() {
        let hint = OrderHint::default();
        assert_eq!(strings("Joe", "", "Smith"), split("Smith, Joe", hint));
        assert_eq!(strings("Joe Bob", "", "Smith"), split("Smith, Joe Bob", hint));
        assert_eq!(strings("", "", "Smith"), split("Smith,", hint));
    }

    #[test]
    fn surname_spans_comma() {
        let hint = OrderHint::default();
        assert_eq!(
            strings("Jan L A", "", "van de Snepscheut"),
            split("Snepscheut, Jan L A van de", hint)
        );
        assert_eq!(
            strings("Ludwig", "", "Mies van der Rohe"),
            split("Mies van der Rohe, Ludwig", hint)
        );
    }

    #[test]
    fn title_among_given_names() {
        let fields = split_fields("Smith, Joe Lt Col", OrderHint::default(), false).unwrap();
        assert_eq!("Lt Col", fields.title);
        assert_eq!("Joe", fields.first);
        assert_eq!("Smith", fields.last);

        let fields = split_fields("Smith, Joe Lt Col", OrderHint::default(), true).unwrap();
        assert_eq!("", fields.title);
    }

    #[test]
    fn mononym() {
        assert_eq!(strings("", "", "Cher"), split("Cher", OrderHint::default()));
        assert_eq!(strings("", "", ""), split("", OrderHint::default()));
    }

    #[test]
    fn too_many_commas() {
        assert_eq!(
            Err(NameError::AmbiguousStructure {
                commas: 2,
                residue: "A, B, C".to_string(),
            }),
            split_fields("A, B, C", OrderHint::default(), false)
        );
    }
}
