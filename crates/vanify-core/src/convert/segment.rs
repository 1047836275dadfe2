//! Wordified-string segmentation and validation.

use crate::dict::WordTrie;

/// Metrics extracted from one wordified string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Validation {
    /// At least one alphabetic run exists.
    pub valid: bool,
    /// Longest maximal alphabetic run.
    pub max_run: u32,
    /// Longest word in any run's decomposition; 0 when no run decomposes.
    pub max_word_span: u32,
}

/// Maximal alphabetic runs of `wordified`, bounded by digits or the string
/// edges.
pub(crate) fn letter_runs(wordified: &str) -> Vec<&str> {
    let bytes = wordified.as_bytes();
    let mut runs = Vec::new();
    let mut start = None;
    for (i, byte) in bytes.iter().enumerate() {
        if byte.is_ascii_alphabetic() {
            start.get_or_insert(i);
        } else if let Some(s) = start.take() {
            runs.push(&wordified[s..i]);
        }
    }
    if let Some(s) = start {
        runs.push(&wordified[s..]);
    }
    runs
}

/// Validate a wordified string.
///
/// Any letter run at all makes the string valid; runs that decompose into
/// dictionary words additionally raise `max_word_span`. A run that
/// decomposes into nothing still counts toward `max_run`, so a candidate
/// can validate with `max_word_span == 0` and simply score low.
pub(crate) fn validate(dict: &WordTrie, wordified: &str) -> Validation {
    let mut result = Validation::default();
    for run in letter_runs(wordified) {
        result.valid = true;
        result.max_run = result.max_run.max(run.len() as u32);
        if let Some(split) = dict.split_words(run) {
            result.max_word_span = result.max_word_span.max(split.max_word_len() as u32);
        }
    }
    result
}
