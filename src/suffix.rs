use crate::clean::{cleanup, dustoff};
use crate::extract::{extract_all, Extraction, Matcher};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

// Post-nominals and generational suffixes. Case-sensitive: "PA" is a
// suffix, "Pa" is a name.
static SUFFIX_PATTERNS: &[&str] = &[
    r"AB",
    r"APC",
    r"Attorney[ \-]at[ \-]Law\.?",
    r"B[AS]c?",
    r"C\.?P\.?A\.?",
    r"CHB",
    r"DBE",
    r"D\.?[DMOPV]\.?[SMD]?\.?", // DMD, DO, DPM, DDM, DVM
    r"DSC",
    r"Esq(?:\.|uire\.?)?",
    r"FAC[PS]",
    r"fils",
    r"FRSL",
    ROMAN_NUMERAL,
    r"Jn?r\.?",
    r"Junior",
    r"LLB",
    r"M\.?[BDS]\.?(?:ed)?", // MB, MD, MS, MSed
    r"MPH",
    r"P\.? ?A\.?",
    r"PC",
    r"p[èe]re",
    r"Ph\.? ?D\.?",
    r"RN",
    r"SC",
    r"Sn?r\.?",
    r"Senior",
    r"V\.?M\.?D\.?",
];

// I through XXXIX, subtractive forms only
const ROMAN_NUMERAL: &str = r"X{0,3}(?:IX|IV|V?I{1,3}|V)|X{1,3}";

// The suffix itself is the named group; the rest is the character that has
// to follow it. Whatever precedes it is checked by the matcher.
static SUFFIXES: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"(?P<suffix>{})(?:[^\p{{Alphabetic}}\s]|\z)",
        SUFFIX_PATTERNS.join("|")
    );
    Regex::new(&pattern).expect("suffix patterns are valid")
});

#[inline]
fn is_roman_numeral(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| matches!(b, b'I' | b'V' | b'X'))
}

/// Matches a suffix that follows a non-letter and is followed by end of
/// text or by punctuation. A suffix followed by a space is left alone, so
/// an initial like the "I" in "John I Smith" stays in the name. A Roman
/// numeral followed by a period is rejected too.
pub struct SuffixMatcher;

impl Matcher for SuffixMatcher {
    fn find_at(&self, text: &str, from: usize) -> Option<Range<usize>> {
        let mut from = from;
        while from <= text.len() {
            let captures = SUFFIXES.captures_at(text, from)?;
            let suffix = captures.name("suffix")?;

            let after_boundary = text[..suffix.start()]
                .chars()
                .next_back()
                .map_or(false, |c| !c.is_alphabetic());
            let dotted_numeral =
                is_roman_numeral(suffix.as_str()) && text[suffix.end()..].starts_with('.');

            if after_boundary && !dotted_numeral {
                return Some(suffix.range());
            }

            from = suffix.start()
                + text[suffix.start()..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
        }
        None
    }
}

/// Pull every suffix out of `text`. Found suffixes lose their periods
/// ("Ph.D." becomes "Ph D").
pub fn extract_suffix(text: &str) -> Extraction {
    if text.is_empty() {
        return Extraction::default();
    }

    let Extraction { found, residue } = extract_all(text, &SuffixMatcher);
    Extraction {
        found: dustoff(&found),
        residue: cleanup(&residue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suffix(text: &str) -> (String, String) {
        let Extraction { found, residue } = extract_suffix(text);
        (found, dustoff(&residue))
    }

    #[test]
    fn generational() {
        assert_eq!(("III".to_string(), "Joe Smith".to_string()), suffix("Joe Smith III"));
        assert_eq!(("Jr".to_string(), "Joe Smith".to_string()), suffix("Joe Smith Jr."));
        assert_eq!(("Snr".to_string(), "Joe Smith".to_string()), suffix("Joe Smith Snr"));
        assert_eq!(("fils".to_string(), "Jean Dupont".to_string()), suffix("Jean Dupont fils"));
        assert_eq!(("père".to_string(), "Jean Dupont".to_string()), suffix("Jean Dupont père"));
    }

    #[test]
    fn several() {
        assert_eq!(
            ("Jr DMD".to_string(), "Joe Smith".to_string()),
            suffix("Joe Smith Jr. DMD")
        );
    }

    #[test]
    fn dotted_degrees() {
        assert_eq!(("Ph D".to_string(), "Jane Doe".to_string()), suffix("Jane Doe Ph.D."));
        assert_eq!(("C P A".to_string(), "Jane Doe".to_string()), suffix("Jane Doe C.P.A."));
        assert_eq!(
            ("Attorney-at-Law".to_string(), "Jane Doe".to_string()),
            suffix("Jane Doe Attorney-at-Law")
        );
        assert_eq!(
            ("Attorney at Law".to_string(), "Jane Doe".to_string()),
            suffix("Jane Doe Attorney at Law")
        );
    }

    #[test]
    fn before_comma() {
        let extraction = extract_suffix("Smith III, Joe");
        assert_eq!("III", extraction.found);
        assert_eq!("Smith , Joe", extraction.residue);
    }

    #[test]
    fn roman_numerals() {
        assert_eq!(("XIV".to_string(), "Louis".to_string()), suffix("Louis XIV"));
        assert_eq!(("XXXIX".to_string(), "Louis".to_string()), suffix("Louis XXXIX"));
        assert_eq!(("IX".to_string(), "Pius".to_string()), suffix("Pius IX"));
        assert_eq!(("".to_string(), "Joe Smith IIII".to_string()), suffix("Joe Smith IIII"));
    }

    #[test]
    fn dotted_numeral_is_an_initial() {
        assert_eq!(("".to_string(), "Joe Smith V".to_string()), suffix("Joe Smith V."));
    }

    #[test]
    fn ordinary_words_are_not_suffixes() {
        assert_eq!(("".to_string(), "Vi Mix".to_string()), suffix("Vi Mix"));
        assert_eq!(("".to_string(), "Senior Jones".to_string()), suffix("Senior Jones"));
        assert_eq!(("".to_string(), "Pa Smith".to_string()), suffix("Pa Smith"));
    }

    #[test]
    fn needs_something_before() {
        assert_eq!(("".to_string(), "III".to_string()), suffix("III"));
        assert_eq!(("".to_string(), "Jr".to_string()), suffix("Jr"));
    }

    #[test]
    fn initials_stay() {
        assert_eq!(("".to_string(), "John I Smith".to_string()), suffix("John I Smith"));
        assert_eq!(("".to_string(), "AB Smith".to_string()), suffix("AB Smith"));
    }

    #[test]
    fn empty() {
        assert_eq!(("".to_string(), "".to_string()), suffix(""));
    }
}
