//! Shared fixtures for conversion tests.

use crate::dict::WordTrie;

/// Curated word list for the sample numbers.
///
/// Chosen so each sample resolves to a single best candidate: same-digit
/// homophones of the expected winners (CALL for 2255, CAN/BAM for 226) are
/// deliberately absent, since they would tie on every ranking metric.
pub(crate) const TEST_WORDS: &[&str] = &[
    "APPLE", "BALL", "BAN", "COCONUT", "HELP", "JUMP", "NUT", "QUIZ",
];

pub(crate) fn test_dict() -> WordTrie {
    WordTrie::from_words(TEST_WORDS.iter().copied())
}
