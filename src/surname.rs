//! The compound-surname grammar: any chain of known prefix tokens ("van",
//! "de la", "Mac", "'t"), each followed by a space, and then one stem
//! token made of letters, hyphens and apostrophes.

use crate::case::lowercase;

static SURNAME_PREFIXES: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/surname_prefixes.rs"));

// Matched exactly as written, e.g. the lowercase conjunction in
// "García y Lorca"; a capital "Y" is more likely an initial
static CASE_SENSITIVE_SURNAME_PREFIXES: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/case_sensitive_surname_prefixes.rs"));

// Longest entry in the prefix table, in tokens
const MAX_PREFIX_TOKENS: usize = 2;

// The lengths, in tokens, of the prefix entries that `words` starts with,
// longest first
fn prefix_lengths<'a>(words: &'a [&'a str]) -> impl Iterator<Item = usize> + 'a {
    (1..=MAX_PREFIX_TOKENS.min(words.len()))
        .rev()
        .filter(move |&len| is_prefix(&words[..len]))
}

fn is_prefix(words: &[&str]) -> bool {
    if let [word] = words {
        if CASE_SENSITIVE_SURNAME_PREFIXES.contains(*word) {
            return true;
        }
    }

    let key = lowercase(&words.join(" "));
    SURNAME_PREFIXES.contains(&*key)
}

/// Can `words` be read, in full, as a sequence of prefix entries?
pub fn is_prefix_chain(words: &[&str]) -> bool {
    words.is_empty()
        || prefix_lengths(words).any(|len| is_prefix_chain(&words[len..]))
}

/// Letters, hyphens and apostrophes only.
pub fn is_stem(word: &str) -> bool {
    !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_alphabetic() || c == '-' || c == '\'')
}

/// For a name in "first last" order: the index of the first token of the
/// surname, if the end of the name matches the grammar. The surname never
/// starts at the first token.
///
/// The leftmost possible start wins, so every prefix in front of the stem
/// is included: "Cecil de De la Smith" gives "de De la Smith".
pub fn find_first_last(words: &[&str]) -> Option<usize> {
    let (stem, chain) = words.split_last()?;
    if !is_stem(stem) {
        return None;
    }

    (1..words.len()).find(|&start| is_prefix_chain(&chain[start..]))
}

/// For a name in "last first" order: the index of the surname stem, if the
/// start of the name matches the grammar and something follows the
/// surname. The longest matching surname wins.
pub fn find_last_first(words: &[&str]) -> Option<usize> {
    let starts_with_letter = |word: &str| word.chars().next().map_or(false, char::is_alphabetic);

    (0..words.len().saturating_sub(1))
        .rev()
        .find(|&stem| {
            is_stem(words[stem])
                && starts_with_letter(words[stem])
                && is_prefix_chain(&words[..stem])
        })
}
