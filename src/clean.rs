// Characters that can sit next to each other in a name; runs of two or more
// of anything else are leftovers from extraction
#[inline]
fn is_name_char(c: char) -> bool {
    c.is_alphabetic() || c.is_whitespace() || matches!(c, ',' | '\'' | '.' | '(' | ')')
}

/// Collapse runs of spaces into one and trim the ends.
pub fn squeeze(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(word);
    }
    result
}

/// Periods become spaces, then spaces are squeezed and the ends trimmed.
pub fn dustoff(text: &str) -> String {
    if text.contains('.') {
        squeeze(&text.replace('.', " "))
    } else {
        squeeze(text)
    }
}

/// Remove runs of two or more non-name characters, strip trailing commas,
/// pipes and whitespace, and squeeze what's left.
pub fn cleanup(text: &str) -> String {
    let mut kept = String::with_capacity(text.len());
    let mut run_start = None;

    for (i, c) in text.char_indices() {
        if is_name_char(c) {
            if let Some(start) = run_start.take() {
                if text[start..i].chars().nth(1).is_none() {
                    kept.push_str(&text[start..i]);
                }
            }
            kept.push(c);
        } else if run_start.is_none() {
            run_start = Some(i);
        }
    }
    if let Some(start) = run_start {
        if text[start..].chars().nth(1).is_none() {
            kept.push_str(&text[start..]);
        }
    }

    let trimmed = kept.trim_end_matches(|c: char| c == ',' || c == '|' || c.is_whitespace());
    squeeze(trimmed)
}
