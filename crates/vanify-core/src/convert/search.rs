//! Breadth-first enumeration over digit positions.

use std::collections::VecDeque;
use std::iter;

use tracing::{debug, debug_span};

use crate::dict::WordTrie;
use crate::keypad;

use super::node::WordNode;
use super::segment;

/// The maximal alphabetic run of `wordified` ending just before `position`.
fn char_prefix(wordified: &str, position: usize) -> &str {
    let bytes = wordified.as_bytes();
    let mut start = position;
    while start > 0 && bytes[start - 1].is_ascii_alphabetic() {
        start -= 1;
    }
    &wordified[start..position]
}

/// Collect every valid terminal state reachable from the all-digit start.
///
/// Transition rules at position `p` with digit `d`, for each candidate
/// substitution (the digit's keypad letters, then the digit itself):
/// - keeping the digit requires the preceding letter run to be empty or a
///   complete word, so no word is truncated mid-formation;
/// - a letter before the final position must keep the extended run a
///   plausible word-in-progress;
/// - a letter at the final position must complete a word outright.
///
/// No result cap applies here. Branching is bounded by the prefix pruning,
/// but pathological dictionary/input pairs can still blow up; callers
/// needing a wall-clock bound must impose it themselves.
pub(crate) fn enumerate(dict: &WordTrie, digits: &str) -> Vec<WordNode> {
    let _span = debug_span!("enumerate", len = digits.len()).entered();
    let n = digits.len();
    let mut terminals = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(WordNode::start(digits));

    let mut extended = String::new();
    while let Some(node) = queue.pop_front() {
        if node.position == n {
            // final metrics come from the complete string, not the
            // intermediate signal carried through expansion
            let validation = segment::validate(dict, &node.wordified);
            if validation.valid {
                terminals.push(WordNode {
                    max_run: validation.max_run,
                    max_word_span: validation.max_word_span,
                    ..node
                });
            }
            continue;
        }

        let p = node.position;
        let digit = node.wordified.as_bytes()[p] as char;
        let prefix = char_prefix(&node.wordified, p);

        for c in keypad::letters_for(digit).chars().chain(iter::once(digit)) {
            let accepted = if c.is_ascii_digit() {
                prefix.is_empty() || dict.is_word(prefix)
            } else {
                extended.clear();
                extended.push_str(prefix);
                extended.push(c);
                if p + 1 < n {
                    dict.is_word_or_prefix(&extended)
                } else {
                    dict.is_word(&extended)
                }
            };
            if !accepted {
                continue;
            }

            let wordified: String = node
                .wordified
                .char_indices()
                .map(|(i, ch)| if i == p { c } else { ch })
                .collect();
            let validation = segment::validate(dict, &wordified);
            queue.push_back(WordNode {
                wordified,
                position: p + 1,
                letter_count: node.letter_count + c.is_ascii_alphabetic() as u32,
                max_run: validation.max_run,
                max_word_span: validation.max_word_span,
            });
        }
    }

    debug!(terminal_count = terminals.len());
    terminals
}
