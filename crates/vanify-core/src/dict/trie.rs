use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::NonZeroU32;
use std::path::Path;

use tracing::debug;

use super::DictError;

/// Indexed words are strictly between 2 and 10 characters long.
const MIN_WORD_LEN: usize = 3;
const MAX_WORD_LEN: usize = 9;

#[derive(Clone)]
struct TrieNode {
    /// Child slot per letter A-Z. The root occupies index 0 of the node
    /// vec, so child indices are always nonzero.
    children: [Option<NonZeroU32>; 26],
    terminal: bool,
}

impl TrieNode {
    fn new() -> Self {
        Self { children: [None; 26], terminal: false }
    }

    fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }
}

/// A run's decomposition into at most two dictionary words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSplit<'a> {
    Single(&'a str),
    Pair(&'a str, &'a str),
}

impl WordSplit<'_> {
    /// Length of the longest word in the decomposition.
    pub fn max_word_len(&self) -> usize {
        match self {
            WordSplit::Single(word) => word.len(),
            WordSplit::Pair(left, right) => left.len().max(right.len()),
        }
    }
}

/// Prefix tree over an uppercase A-Z word list.
///
/// Queries are case-insensitive; entries outside the indexable length band
/// or containing anything but letters are skipped at build time, since no
/// keypad substitution can ever produce them.
pub struct WordTrie {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

impl WordTrie {
    pub fn new() -> Self {
        Self { nodes: vec![TrieNode::new()], word_count: 0 }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.add(word.as_ref());
        }
        trie
    }

    /// Build from a newline-delimited word list.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictError> {
        let mut trie = Self::new();
        for line in reader.lines() {
            trie.add(&line?);
        }
        debug!(word_count = trie.word_count, node_count = trie.nodes.len(), "word trie built");
        Ok(trie)
    }

    pub fn open(path: &Path) -> Result<Self, DictError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Index one raw word-list entry; duplicates collapse.
    fn add(&mut self, raw: &str) {
        let word = raw.trim();
        if word.len() < MIN_WORD_LEN || word.len() > MAX_WORD_LEN {
            return;
        }
        if !word.bytes().all(|b| b.is_ascii_alphabetic()) {
            return;
        }

        let mut idx = 0usize;
        for byte in word.bytes() {
            let slot = (byte.to_ascii_uppercase() - b'A') as usize;
            idx = match self.nodes[idx].children[slot] {
                Some(next) => next.get() as usize,
                None => {
                    let next = self.nodes.len() as u32;
                    self.nodes.push(TrieNode::new());
                    self.nodes[idx].children[slot] = NonZeroU32::new(next);
                    next as usize
                }
            };
        }
        if !self.nodes[idx].terminal {
            self.nodes[idx].terminal = true;
            self.word_count += 1;
        }
    }

    /// Number of distinct indexed words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node_at(&self, s: &str) -> Option<&TrieNode> {
        let mut idx = 0usize;
        for byte in s.bytes() {
            if !byte.is_ascii_alphabetic() {
                return None;
            }
            let slot = (byte.to_ascii_uppercase() - b'A') as usize;
            idx = self.nodes[idx].children[slot]?.get() as usize;
        }
        Some(&self.nodes[idx])
    }

    /// Exact membership.
    pub fn is_word(&self, s: &str) -> bool {
        self.node_at(s).is_some_and(|node| node.terminal)
    }

    /// True when some indexed word strictly extends `prefix`.
    pub fn has_word_below(&self, prefix: &str) -> bool {
        self.node_at(prefix).is_some_and(TrieNode::has_children)
    }

    /// True when `s` is a word, a proper prefix of one, or a complete word
    /// followed by the start of another (compound continuations such as
    /// `CALL` + `NOW...`).
    pub fn is_word_or_prefix(&self, s: &str) -> bool {
        if let Some(node) = self.node_at(s) {
            if node.terminal || node.has_children() {
                return true;
            }
        }
        (1..s.len()).any(|i| self.is_word(&s[..i]) && self.has_word_below(&s[i..]))
    }

    /// Decompose `run` into one or two exact words.
    ///
    /// A run that is itself a word wins outright; otherwise the first split
    /// index where both halves are words is taken. Decompositions into
    /// three or more words are not attempted.
    pub fn split_words<'a>(&self, run: &'a str) -> Option<WordSplit<'a>> {
        if self.is_word(run) {
            return Some(WordSplit::Single(run));
        }
        (1..run.len())
            .find(|&i| self.is_word(&run[..i]) && self.is_word(&run[i..]))
            .map(|i| WordSplit::Pair(&run[..i], &run[i..]))
    }
}

impl Default for WordTrie {
    fn default() -> Self {
        Self::new()
    }
}
