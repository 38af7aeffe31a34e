//! Folding of quote variants and filtering of characters that can't be part
//! of a name.

use crate::config::ParseConfig;
use std::borrow::Cow;
use unicode_normalization::{is_nfc_quick, IsNormalized, UnicodeNormalization};

const FULLWIDTH_DOUBLE: char = '\u{FF02}';
const FULLWIDTH_SINGLE: char = '\u{FF07}';

const LEFT_DOUBLES: &[char] = &[
    '\u{00AB}', '\u{201C}', '\u{201E}', '\u{2036}', '\u{300E}', '\u{301D}', '\u{301F}',
    '\u{FE43}',
];

const RIGHT_DOUBLES: &[char] = &[
    '\u{00BB}', '\u{201D}', '\u{201F}', '\u{2033}', '\u{300F}', '\u{301E}', '\u{FE44}',
];

const LEFT_SINGLES: &[char] = &[
    '\'', '\u{2018}', '\u{201A}', '\u{2035}', '\u{2039}', '\u{300C}', '\u{FE41}', '\u{FF62}',
];

const RIGHT_SINGLES: &[char] = &[
    '\u{2019}', '\u{201B}', '\u{2032}', '\u{203A}', '\u{300D}', '\u{FE42}',
];

const ALLOWED_PUNCTUATION: &[char] = &['-', '&', '/', ' ', '.', ',', '\'', '"', '(', ')'];

// A straight double quote opens when it starts a word and closes otherwise
#[inline]
fn fold_quote(c: char, opening: bool, config: &ParseConfig) -> char {
    let c = match c {
        FULLWIDTH_DOUBLE => '"',
        FULLWIDTH_SINGLE => '\'',
        _ => c,
    };

    if c == '"' {
        if opening {
            config.double_left
        } else {
            config.double_right
        }
    } else if LEFT_DOUBLES.contains(&c) {
        config.double_left
    } else if RIGHT_DOUBLES.contains(&c) {
        config.double_right
    } else if LEFT_SINGLES.contains(&c) {
        config.single_left
    } else if RIGHT_SINGLES.contains(&c) {
        config.single_right
    } else {
        c
    }
}

#[inline]
fn is_allowed(c: char, config: &ParseConfig) -> bool {
    c.is_alphabetic() || ALLOWED_PUNCTUATION.contains(&c) || config.quotes().contains(&c)
}

#[inline]
fn already_normalized(text: &str, config: &ParseConfig) -> bool {
    if text.starts_with(' ') || text.ends_with(' ') || text.contains("  ") {
        return false;
    }

    let foldable = |c: char| {
        c == FULLWIDTH_DOUBLE
            || c == FULLWIDTH_SINGLE
            || fold_quote(c, true, config) != c
            || fold_quote(c, false, config) != c
            || !is_allowed(c, config)
    };

    !text.chars().any(foldable) && is_nfc_quick(text.chars()) == IsNormalized::Yes
}

#[inline(never)]
fn do_normalize(text: &str, config: &ParseConfig) -> String {
    let mut result = String::with_capacity(text.len());
    let mut pending_space = false;
    let mut previous = None;

    for c in text.nfc() {
        let opening = previous.map_or(true, |p: char| !p.is_alphanumeric());
        previous = Some(c);

        let c = fold_quote(c, opening, config);
        if c == ' ' || !is_allowed(c, config) {
            pending_space = !result.is_empty();
        } else {
            if pending_space {
                result.push(' ');
                pending_space = false;
            }
            result.push(c);
        }
    }

    result
}

/// Fold quote glyphs to the configured quote characters, replace anything
/// that can't appear in a name with a space, squeeze spaces and trim.
///
/// ```
/// use nomen::{normalize, ParseConfig};
///
/// let config = ParseConfig::default();
/// assert_eq!("Joe \"John\" O'Smith", normalize("Joe «John» O’Smith", &config));
/// ```
pub fn normalize<'a>(text: &'a str, config: &ParseConfig) -> Cow<'a, str> {
    if already_normalized(text, config) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(do_normalize(text, config))
    }
}

/// Like `normalize`, for input that may not be valid UTF-8. Invalid
/// sequences are replaced, and the replacement character is then dropped
/// like any other non-name character.
pub fn normalize_lossy(bytes: &[u8], config: &ParseConfig) -> String {
    normalize(&String::from_utf8_lossy(bytes), config).into_owned()
}
