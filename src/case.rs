#[derive(Debug, Clone)]
enum CaseMapping {
    Empty,
    Single(char),
    Double(char, char),
    Triple(char, char, char),
}

impl CaseMapping {
    #[inline]
    fn lowercase(c: char) -> CaseMapping {
        let [x, y] = unicode_case_mapping::to_lowercase(c);
        Self::from_u32s(x, y, 0)
    }

    #[inline]
    fn titlecase(c: char) -> CaseMapping {
        let [x, y, z] = unicode_case_mapping::to_titlecase(c);
        Self::from_u32s(x, y, z)
    }

    // Zero means "no mapping"; anything else that isn't a valid char is
    // treated the same way rather than trusted
    #[inline]
    fn from_u32s(x: u32, y: u32, z: u32) -> CaseMapping {
        match (
            char::from_u32(x).filter(|_| x > 0),
            char::from_u32(y).filter(|_| y > 0),
            char::from_u32(z).filter(|_| z > 0),
        ) {
            (Some(x), Some(y), Some(z)) => CaseMapping::Triple(x, y, z),
            (Some(x), Some(y), None) => CaseMapping::Double(x, y),
            (Some(x), None, _) => CaseMapping::Single(x),
            (None, _, _) => CaseMapping::Empty,
        }
    }

    #[inline]
    fn or_self(self, c: char) -> CaseMapping {
        match self {
            CaseMapping::Empty => CaseMapping::Single(c),
            mapped => mapped,
        }
    }
}

impl Iterator for CaseMapping {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        match *self {
            CaseMapping::Triple(x, y, z) => {
                let _ = std::mem::replace(self, CaseMapping::Double(y, z));
                Some(x)
            }
            CaseMapping::Double(x, y) => {
                let _ = std::mem::replace(self, CaseMapping::Single(y));
                Some(x)
            }
            CaseMapping::Single(x) => {
                let _ = std::mem::replace(self, CaseMapping::Empty);
                Some(x)
            }
            CaseMapping::Empty => None,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = match self {
            CaseMapping::Triple(_, _, _) => 3,
            CaseMapping::Double(_, _) => 2,
            CaseMapping::Single(_) => 1,
            CaseMapping::Empty => 0,
        };
        (size, Some(size))
    }
}

impl ExactSizeIterator for CaseMapping {}

/// First character titlecased, everything after it lowercased.
///
/// Nothing after the first character is ever raised, so "o'reilly" comes out
/// as "O'reilly"; the name-specific rules in `namecase` handle the rest.
pub fn capitalize_word(word: &str) -> String {
    if word.bytes().all(|b| b.is_ascii_alphabetic()) {
        let bytes = word.as_bytes();
        let mut result = String::with_capacity(word.len());
        if let Some((first, rest)) = bytes.split_first() {
            result.push(first.to_ascii_uppercase() as char);
            result.extend(rest.iter().map(|c| c.to_ascii_lowercase() as char));
        }
        result
    } else {
        let mut result = String::with_capacity(word.len());
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            // A multi-character titlecase ("ŉ" to "ʼN") is only used when the
            // characters after its first are already lowercase, or the result
            // would change again on the next pass
            let titled = CaseMapping::titlecase(first).or_self(first);
            let settled = titled.len() == 1
                || titled
                    .clone()
                    .skip(1)
                    .all(|c| CaseMapping::lowercase(c).or_self(c).eq(Some(c)));
            if settled {
                result.extend(titled);
            } else {
                result.push(first);
            }
        }
        for c in chars {
            result.extend(CaseMapping::lowercase(c).or_self(c));
        }
        result
    }
}

/// Every character lowercased.
pub fn lowercase(word: &str) -> String {
    if word.is_ascii() {
        word.to_ascii_lowercase()
    } else {
        word.chars()
            .flat_map(|c| CaseMapping::lowercase(c).or_self(c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalization() {
        assert_eq!("A", capitalize_word("a"));
        assert_eq!("Aa", capitalize_word("aa"));
        assert_eq!("Aa", capitalize_word("AA"));
        assert_eq!("Aa-bb", capitalize_word("AA-BB"));
        assert_eq!("O'reilly", capitalize_word("o'REILLY"));
        assert_eq!("'t", capitalize_word("'T"));
        assert_eq!("Ó", capitalize_word("ó"));
        assert_eq!("Øster", capitalize_word("øSTER"));
        assert_eq!("", capitalize_word(""));
    }

    #[test]
    fn titlecase_digraph() {
        assert_eq!("ǅemal", capitalize_word("ǆemal"));
    }

    #[test]
    fn multi_character_titlecase() {
        assert_eq!("Ssen", capitalize_word("ßen"));
        assert_eq!("ŉa", capitalize_word("ŉA"));
        assert_eq!("ŉa", capitalize_word(&capitalize_word("ŉA")));
    }

    #[test]
    fn lowercasing() {
        assert_eq!("van", lowercase("VAN"));
        assert_eq!("ó", lowercase("Ó"));
        assert_eq!("中", lowercase("中"));
    }
}
