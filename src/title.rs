use crate::clean::{cleanup, dustoff};
use crate::extract::{extract_all, Extraction, Matcher};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

// Honorifics, ranks and forms of address. Matched case-insensitively, as
// whole words, anywhere in the name. Where one entry is a prefix of another
// the longer one comes first.
static TITLE_PATTERNS: &[&str] = &[
    r"خانم",                                         // Persian Mrs
    r"አቶ",                                           // Amharic Mr
    r"Adi",                                          // Fijian
    r"Air (?:Commander|Commodore|Marshall)",
    r"Ald(?:erman|\.)?",
    r"(?:Arch)?Du(?:ke|chess)",
    r"Ato",                                          // Amharic Mr
    r"Baron(?:ess)?",
    r"Bishop",
    r"Bulou",                                        // Fijian
    r"Brig(?:adier)?",
    r"Brother",
    r"Capt(?:ain|\.)?",
    r"Cdr\.?",
    r"Chaplain",
    r"Colonel",
    r"Comm(?:ander|odore)",
    r"Count(?:ess)?",
    r"Dame",
    r"Det\.?",
    r"Dhr\.?",
    r"Doctor",
    r"Dr\.?",
    r"Dom",
    r"Erzherzog(?:in)?",
    r"Father",
    r"Field Marshall",
    r"Flt?\.?(?: (?:Lt|Off)\.?)",
    r"Flight (?:Lieutenant|Officer)",
    r"Frau",
    r"Fr\.?",
    r"Gen(?:eral|\.)?",
    r"H[äe]rra",                                     // Estonian, Finnish Mr
    r"Herr",
    r"Hra?\.?",                                      // Finnish
    r"(?:Rt\.?|Right)? ?Hon\.?(?:ourable)?",
    r"Insp\.?(?:ector)?",
    r"Judge",
    r"Justice",
    r"Khaanom",                                      // Persian Mrs
    r"Lady",
    r"Lieutenant(?: (?:Commander|Colonel|General))?",
    r"Lt\.?(?: (?:Cdr|Col|Gen)\.?)?",
    r"(?:Lt|Leut|Lieut)\.?",
    r"Lord",
    r"Madam(?:e)?",
    r"Mademoiselle",
    r"Maid",
    r"Ma[îi]tre",
    r"Major(?: General)?",
    r"Maj\.?(?: Gen\.?)?",
    r"(?:Master|Technical|Staff)? ?Sergeant",
    r"[MTS]?Sgt\.?",
    r"Mast(?:er|\.)?",
    r"Matron",
    r"Menina",
    r"Messrs",
    r"Meneer",
    r"Mlle\.?",
    r"Miss\.?",
    r"Mister",
    r"Mn[er]\.?",                                    // Afrikaans Mr
    r"Mme\.?",
    r"Mons(?:ignor|\.?)",
    r"Monsieur",
    r"Most Rever[ea]nd",
    r"Mother(?: Superior)?",
    r"Mrs?\.?",
    r"Msgr\.?",
    r"M/?s\.?",
    r"Mt\.? Revd?\.?",
    r"Mx\.?",
    r"(?-i:ông)",                                    // Vietnamese Mr, lowercase only
    r"Pastor",
    r"Private",
    r"Prof(?:essor|esseur|\.)?",
    r"Pte\.?",
    r"Pvt\.?",
    r"PFC",
    r"Rabbi",
    r"Ratu",                                         // Fijian Sir
    r"Reb\.?",                                       // Yiddish Mr
    r"רעב",                                          // Yiddish Mr
    r"Rever[ea]nd",
    r"Revd?\.?",
    r"Ro(?:ko)?",                                    // Fijian
    r"Se[nñ]h?orita",
    r"Se[nñ]h?ora",
    r"Se[nñ][hy]?or(?: Dom)?",
    r"Sénher",
    r"Seigneur",
    r"Signor[ae]",
    r"Sig(?:a|ra)?\.?",
    r"Sioro",                                        // Ido Mr
    r"Sro\.?",                                       // Ido Mr
    r"Sir",
    r"Sister",
    r"Sr(?:a|ta)?\.?",
    r"V\.? Revd?\.?",
    r"Very Rever[ea]nd",
];

// Titles that begin with an apostrophe, so they can't start at a word
// boundary; they start the text or follow whitespace instead
static APOSTROPHE_TITLE_PATTERNS: &[&str] = &[
    r"'ר", // Yiddish Mr
];

static TITLES: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"(?i)\b(?:{})\b|(?:^|\s)(?:{})\b",
        TITLE_PATTERNS.join("|"),
        APOSTROPHE_TITLE_PATTERNS.join("|")
    );
    Regex::new(&pattern).expect("title patterns are valid")
});

pub struct TitleMatcher;

impl Matcher for TitleMatcher {
    #[inline]
    fn find_at(&self, text: &str, from: usize) -> Option<Range<usize>> {
        TITLES.find_at(text, from).map(|m| m.range())
    }
}

/// Pull every title out of `text`. The found titles lose their periods
/// ("Dr." becomes "Dr"); the residue is cleaned of leftover punctuation.
///
/// ```
/// let titles = nomen::extract_title("Mr. Joe Smith");
/// assert_eq!("Mr", titles.found);
/// assert_eq!("Joe Smith", titles.residue);
/// ```
pub fn extract_title(text: &str) -> Extraction {
    if text.is_empty() {
        return Extraction::default();
    }

    let Extraction { found, residue } = extract_all(text, &TitleMatcher);
    Extraction {
        found: dustoff(&found),
        residue: dustoff(&cleanup(&residue)),
    }
}
