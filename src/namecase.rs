//! Capitalization for name fragments, with the usual surname special cases:
//! "MacDonald", "McKracken", "O'Reilly", and a lowercase Dutch "'t".

use crate::case::{capitalize_word, lowercase};
use once_cell::sync::Lazy;
use smallvec::SmallVec;
use std::collections::HashMap;

static MAC_EXCEPTIONS: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/mac_exceptions.rs"));

static FORCED_CASINGS: phf::Map<&'static str, &'static str> =
    include!(concat!(env!("OUT_DIR"), "/forced_casings.rs"));

static BUILTIN: Lazy<CaseRules> = Lazy::new(|| CaseRules {
    mac_exceptions: MAC_EXCEPTIONS.iter().map(|e| (*e).to_string()).collect(),
    forced: FORCED_CASINGS
        .entries()
        .map(|(word, casing)| ((*word).to_string(), (*casing).to_string()))
        .collect(),
});

// Endings after "Mac" that make it more likely an ordinary word ("Macon",
// "Mack", "Macias") than a patronymic
const NON_PATRONYMIC_ENDINGS: &[char] = &['a', 'c', 'i', 'o', 'z', 'j'];

/// The data the capitalizer works from.
///
/// `mac_exceptions` are lowercase beginnings of whatever follows "Mac" that
/// block the "MacX" casing ("machin" stays "Machin"). `forced` maps a whole
/// lowercase word to the exact casing it should get.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseRules {
    mac_exceptions: Vec<String>,
    forced: HashMap<String, String>,
}

impl CaseRules {
    /// The rules `capitalize` uses.
    pub fn builtin() -> CaseRules {
        BUILTIN.clone()
    }

    /// No exceptions and no forced casings; only the general rules apply.
    pub fn empty() -> CaseRules {
        CaseRules::default()
    }

    pub fn with_mac_exception(mut self, beginning: &str) -> CaseRules {
        let beginning = lowercase(beginning);
        if !self.mac_exceptions.contains(&beginning) {
            self.mac_exceptions.push(beginning);
        }
        self
    }

    pub fn with_forced(mut self, word: &str, casing: &str) -> CaseRules {
        self.forced.insert(lowercase(word), casing.to_string());
        self
    }

    fn forced_casing(&self, word: &str) -> Option<&str> {
        if self.forced.is_empty() {
            return None;
        }
        self.forced.get(&lowercase(word)).map(String::as_str)
    }

    fn is_mac_exception(&self, rest: &str) -> bool {
        let rest = lowercase(rest);
        self.mac_exceptions
            .iter()
            .any(|exception| rest.starts_with(exception.as_str()))
    }
}

/// Capitalize a name fragment with the built-in rules.
///
/// Each hyphen- or space-separated word is title-cased, then the "Mac",
/// "Mc" and apostrophe rules apply. Capitalizing twice changes nothing.
///
/// ```
/// assert_eq!("MacMurdo", nomen::capitalize("macmurdo"));
/// assert_eq!("Machin", nomen::capitalize("machin"));
/// assert_eq!("McKracken", nomen::capitalize("mckracken"));
/// assert_eq!("Van 't Hooft-Page", nomen::capitalize("van 't hooft-page"));
/// ```
pub fn capitalize(fragment: &str) -> String {
    capitalize_with(fragment, &BUILTIN)
}

/// Capitalize a name fragment with caller-supplied rules.
pub fn capitalize_with(fragment: &str, rules: &CaseRules) -> String {
    let mut result = String::with_capacity(fragment.len());
    for (i, segment) in fragment.split('-').enumerate() {
        if i > 0 {
            result.push('-');
        }
        for (j, word) in segment.split(' ').enumerate() {
            if j > 0 {
                result.push(' ');
            }
            result.push_str(&capitalize_name_word(word, rules));
        }
    }
    result
}

fn capitalize_name_word(word: &str, rules: &CaseRules) -> String {
    if word.is_empty() {
        return String::new();
    }
    if let Some(casing) = rules.forced_casing(word) {
        return casing.to_string();
    }

    let word = capitalize_word(word);
    let word = mac_rule(word, rules);
    let word = mc_rule(word);
    raise_after_apostrophes(&word)
}

// "Macdonald" becomes "MacDonald" when at least three letters follow "Mac"
// and the last of them doesn't look like an ordinary word ending
fn mac_rule(word: String, rules: &CaseRules) -> String {
    let rest = match word.strip_prefix("Mac") {
        Some(rest) => rest,
        None => return word,
    };

    let letters = rest.chars().count();
    let ends_well = rest
        .chars()
        .next_back()
        .map_or(false, |c| !NON_PATRONYMIC_ENDINGS.contains(&c));

    if letters >= 3
        && ends_well
        && rest.chars().all(char::is_alphabetic)
        && !rules.is_mac_exception(rest)
    {
        format!("Mac{}", capitalize_word(rest))
    } else {
        word
    }
}

// "Mcdonald" becomes "McDonald" when at least two letters follow "Mc"
fn mc_rule(word: String) -> String {
    let rest = match word.strip_prefix("Mc") {
        Some(rest) => rest,
        None => return word,
    };

    let letters_end = rest
        .char_indices()
        .find(|(_, c)| !c.is_alphabetic())
        .map_or(rest.len(), |(i, _)| i);
    if rest[..letters_end].chars().nth(1).is_none() {
        return word;
    }

    format!(
        "Mc{}{}",
        capitalize_word(&rest[..letters_end]),
        &rest[letters_end..]
    )
}

// "O'reilly" becomes "O'Reilly"; a letter after an apostrophe is raised only
// when another letter follows it, so "'t" stays lowercase
fn raise_after_apostrophes(word: &str) -> String {
    if !word.contains('\'') {
        return word.to_string();
    }

    let chars: SmallVec<[char; 24]> = word.chars().collect();
    let mut result = String::with_capacity(word.len());
    for (i, &c) in chars.iter().enumerate() {
        let raise = i > 0
            && chars[i - 1] == '\''
            && c.is_alphabetic()
            && chars.get(i + 1).map_or(false, |next| next.is_alphabetic());

        if raise {
            result.push_str(&capitalize_word(c.encode_utf8(&mut [0; 4])));
        } else {
            result.push(c);
        }
    }
    result
}
