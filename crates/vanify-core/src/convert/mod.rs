//! Digit-string to vanity-number conversion.
//!
//! Explores letter substitutions over the digit positions breadth-first,
//! pruning branches against the word trie, then scores, ranks and formats
//! the surviving candidates. The whole pass is a pure function of the
//! digit string and the dictionary; independent conversions can run in
//! parallel against a shared trie.

mod format;
mod node;
mod search;
mod segment;

#[cfg(test)]
pub(crate) mod testutil;
#[cfg(test)]
mod tests;

use std::borrow::Cow;
use std::cmp::Reverse;

use tracing::{debug, debug_span};

use crate::dict::WordTrie;

pub use format::format;
pub use node::Candidate;

/// Default number of ranked results returned to callers.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Invalid conversion input.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("digit string is empty")]
    EmptyDigits,

    #[error("invalid character {ch:?} at position {position} in digit string")]
    InvalidDigit { ch: char, position: usize },
}

/// Convert a digit string into up to `max_results` ranked vanity candidates.
///
/// A bare ten-digit number is canonicalized by prefixing the NANP country
/// code, so scoring and formatting see the eleven-digit shape. An empty
/// result is a valid outcome: `max_results == 0`, an empty dictionary, or a
/// digit string with no word-forming substitution all yield `Ok(vec![])`.
pub fn convert(
    dict: &WordTrie,
    digits: &str,
    max_results: usize,
) -> Result<Vec<Candidate>, ConvertError> {
    if digits.is_empty() {
        return Err(ConvertError::EmptyDigits);
    }
    if let Some((position, ch)) = digits.char_indices().find(|&(_, c)| !c.is_ascii_digit()) {
        return Err(ConvertError::InvalidDigit { ch, position });
    }
    if max_results == 0 {
        return Ok(Vec::new());
    }

    let digits = canonicalize(digits);
    let _span = debug_span!("convert", digits = %digits, max_results).entered();

    let mut terminals = search::enumerate(dict, &digits);
    terminals.sort_by_key(|node| Reverse(node.rank_key()));
    terminals.truncate(max_results);
    debug!(result_count = terminals.len());

    Ok(terminals.into_iter().map(Candidate::from_node).collect())
}

/// Prefix the country code onto bare ten-digit NANP numbers; every other
/// length passes through untouched.
fn canonicalize(digits: &str) -> Cow<'_, str> {
    if digits.len() == 10 {
        Cow::Owned(format!("1{digits}"))
    } else {
        Cow::Borrowed(digits)
    }
}
