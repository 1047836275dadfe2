//! Hyphenated phone-number rendering.

use super::node::{clean_tail, Candidate};

/// Format a candidate as a hyphenated vanity number.
///
/// Total over any candidate the engine produces.
pub fn format(candidate: &Candidate) -> String {
    render(candidate.wordified())
}

/// Render a wordified string.
///
/// Three hyphen rules, applied in order: a separator after a leading
/// country-code `1`; an area-code/exchange separator at display index 5
/// unless the trailing seven characters are one clean alphabetic span; and
/// a separator at every remaining letter/digit adjacency.
pub(crate) fn render(wordified: &str) -> String {
    let mut chars: Vec<char> = wordified.chars().collect();
    if chars.first() == Some(&'1') {
        chars.insert(1, '-');
    }
    // no exchange separator for strings shorter than a full NANP number
    if wordified.len() >= 10 && !clean_tail(wordified, 7) {
        chars.insert(5, '-');
    }

    let mut out = String::with_capacity(chars.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && letter_digit_boundary(chars[i - 1], c) {
            out.push('-');
        }
        out.push(c);
    }
    out
}

fn letter_digit_boundary(a: char, b: char) -> bool {
    (a.is_ascii_alphabetic() && b.is_ascii_digit())
        || (a.is_ascii_digit() && b.is_ascii_alphabetic())
}
