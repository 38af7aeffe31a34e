//! The "cut and collect" primitive shared by the nickname, suffix and title
//! passes, and the nickname matcher itself.

use crate::clean::{cleanup, dustoff};
use crate::config::ParseConfig;
use std::ops::Range;

/// Something that can find the next span to cut out of a string.
///
/// Implementations get the whole text so they can look at the characters
/// around a candidate, not just the candidate itself.
pub trait Matcher {
    /// The next span starting at or after byte offset `from`, if any.
    fn find_at(&self, text: &str, from: usize) -> Option<Range<usize>>;
}

/// What a pass found, and what's left of the string without it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extraction {
    pub found: String,
    pub residue: String,
}

/// Remove every non-overlapping match from `text`.
///
/// `found` is the matched fragments, each trimmed, joined with single
/// spaces; `residue` is `text` with the matched spans cut out and nothing
/// else touched. No match means an empty `found` and an unmodified residue.
pub fn extract_all<M: Matcher + ?Sized>(text: &str, matcher: &M) -> Extraction {
    let mut found = String::new();
    let mut residue = String::with_capacity(text.len());
    let mut copied_to = 0;
    let mut from = 0;

    while from <= text.len() {
        let span = match matcher.find_at(text, from) {
            Some(span) => span,
            None => break,
        };
        debug_assert!(span.start >= from && span.end >= span.start);

        let fragment = text[span.clone()].trim();
        if !fragment.is_empty() {
            if !found.is_empty() {
                found.push(' ');
            }
            found.push_str(fragment);
        }

        residue.push_str(&text[copied_to..span.start]);
        copied_to = span.end;

        from = if span.is_empty() {
            match text[span.end..].chars().next() {
                Some(c) => span.end + c.len_utf8(),
                None => break,
            }
        } else {
            span.end
        };
    }

    residue.push_str(&text[copied_to..]);
    Extraction { found, residue }
}

/// Finds text enclosed in a quote or parenthesis pair: `(...)`, the
/// configured double quotes, or the configured single quotes.
///
/// Only the enclosed text is matched, never the delimiters. A pair whose
/// opening and closing characters are the same (straight quotes) only counts
/// when the opener starts a word and the closer ends one, so apostrophes in
/// "O'Neil" or "Van 't Hooft" aren't mistaken for nickname quotes.
pub struct NicknameMatcher<'a> {
    config: &'a ParseConfig,
}

impl<'a> NicknameMatcher<'a> {
    pub fn new(config: &'a ParseConfig) -> Self {
        NicknameMatcher { config }
    }

    #[inline]
    fn closer_for(&self, open: char) -> Option<char> {
        let config = self.config;
        if open == '(' {
            Some(')')
        } else if open == config.double_left || open == '"' {
            Some(config.double_right)
        } else if open == config.single_left || open == '\'' {
            Some(config.single_right)
        } else {
            None
        }
    }

    #[inline]
    fn is_body_char(c: char) -> bool {
        c.is_alphabetic() || matches!(c, '-' | ' ' | '\'' | '.' | ',')
    }

    // Where the enclosed text for the opener at `open_at` ends, if the pair
    // is complete and everything inside it could be a name
    fn find_close(&self, text: &str, open_at: usize, open: char, close: char) -> Option<usize> {
        let symmetric = open == close;
        if symmetric && !text[..open_at].chars().next_back().map_or(true, char::is_whitespace) {
            return None;
        }

        let body_start = open_at + open.len_utf8();
        let mut has_alpha = false;
        for (i, c) in text[body_start..].char_indices() {
            let at = body_start + i;
            if c == close {
                let closes_word = text[at + c.len_utf8()..]
                    .chars()
                    .next()
                    .map_or(true, |next| !next.is_alphanumeric());
                if !symmetric || closes_word {
                    return if has_alpha { Some(at) } else { None };
                }
                // The same quote opening another word ("'t Hooft 'Gerry'")
                // means this one was an apostrophe
                if text[..at].chars().next_back().map_or(false, char::is_whitespace) {
                    return None;
                }
            }

            if !Self::is_body_char(c) {
                return None;
            }
            has_alpha |= c.is_alphabetic();
        }

        None
    }
}

impl<'a> Matcher for NicknameMatcher<'a> {
    fn find_at(&self, text: &str, from: usize) -> Option<Range<usize>> {
        for (i, open) in text[from..].char_indices() {
            let open_at = from + i;
            if let Some(close) = self.closer_for(open) {
                if let Some(close_at) = self.find_close(text, open_at, open, close) {
                    return Some(open_at + open.len_utf8()..close_at);
                }
            }
        }
        None
    }
}

#[inline]
fn is_delimiter(c: char, config: &ParseConfig) -> bool {
    matches!(c, '"' | '\'' | '(' | ')') || config.quotes().contains(&c)
}

// Drop each pair of adjacent delimiters, which is what an emptied quote or
// parenthesis pair looks like
fn strip_doubled_delimiters(text: &str, config: &ParseConfig) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if is_delimiter(c, config) {
            if let Some(&next) = chars.peek() {
                if is_delimiter(next, config) {
                    chars.next();
                    continue;
                }
            }
        }
        result.push(c);
    }
    result
}

/// Pull enclosed nicknames out of a normalized name.
///
/// ```
/// use nomen::{extract_nickname, ParseConfig};
///
/// let nick = extract_nickname("Joe \"Spud\" Smith", &ParseConfig::default());
/// assert_eq!("Spud", nick.found);
/// assert_eq!("Joe Smith", nick.residue);
/// ```
pub fn extract_nickname(text: &str, config: &ParseConfig) -> Extraction {
    let Extraction { found, residue } = extract_all(text, &NicknameMatcher::new(config));
    Extraction {
        found: dustoff(&found),
        residue: cleanup(&strip_doubled_delimiters(&residue, config)),
    }
}
