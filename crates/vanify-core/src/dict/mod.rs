//! Dictionary word index.
//!
//! `WordTrie` stores an uppercase word list as a flat-vec prefix tree and
//! answers the membership and prefix queries the enumeration engine prunes
//! with. Built once from a newline-delimited list, immutable afterwards,
//! safe to share read-only across conversions.

mod trie;

#[cfg(test)]
mod tests;

pub use trie::{WordSplit, WordTrie};

use std::io;

/// Error type for word-list loading.
///
/// Query misses are expressed as `false`/`None` on the trie itself, never
/// as errors; only reading the word source can fail.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
