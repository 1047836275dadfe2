use super::format;

/// One partially- or fully-substituted digit string, plus the validator
/// metrics that feed scoring. Produced by a single enumeration step and
/// never mutated after validation.
#[derive(Debug, Clone)]
pub(crate) struct WordNode {
    /// Same length as the input; positions before `position` may hold letters.
    pub wordified: String,
    /// Index of the next digit to process.
    pub position: usize,
    /// Letters placed so far.
    pub letter_count: u32,
    /// Longest unbroken alphabetic run at validation time.
    pub max_run: u32,
    /// Longest matched word in any run's decomposition at validation time.
    pub max_word_span: u32,
}

impl WordNode {
    pub fn start(digits: &str) -> Self {
        Self {
            wordified: digits.to_string(),
            position: 0,
            letter_count: 0,
            max_run: 0,
            max_word_span: 0,
        }
    }

    /// Preference score.
    ///
    /// A candidate whose entire alphabetic content is one clean dictionary
    /// word earns +2. Candidates shaped like a real phone number (10 or 11
    /// characters, optional country code) additionally earn +4 for a fully
    /// alphabetic trailing seven, +3 for a trailing four, and +1 for the
    /// three characters preceding the trailing four; the bonuses stack.
    pub fn score(&self) -> u32 {
        let mut score = 0;
        if self.letter_count == self.max_run && self.letter_count == self.max_word_span {
            score += 2;
        }
        let len = self.wordified.len();
        if (10..=11).contains(&len) {
            if clean_tail(&self.wordified, 7) {
                score += 4;
            }
            if clean_tail(&self.wordified, 4) {
                score += 3;
            }
            let bytes = self.wordified.as_bytes();
            if bytes[len - 7..len - 4].iter().all(|b| b.is_ascii_alphabetic()) {
                score += 1;
            }
        }
        score
    }

    /// Ranking key: score first, then the tie-break chain (longest word
    /// span, longest run, letter count). Candidates equal on all four are
    /// equal in rank.
    pub fn rank_key(&self) -> (u32, u32, u32, u32) {
        (self.score(), self.max_word_span, self.max_run, self.letter_count)
    }
}

/// True when the last `n` characters exist and are all letters.
pub(crate) fn clean_tail(wordified: &str, n: usize) -> bool {
    let bytes = wordified.as_bytes();
    bytes.len() >= n && bytes[bytes.len() - n..].iter().all(|b| b.is_ascii_alphabetic())
}

/// A ranked conversion result, renderable as a hyphenated vanity number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    wordified: String,
    score: u32,
    letter_count: u32,
    max_run: u32,
    max_word_span: u32,
}

impl Candidate {
    pub(crate) fn from_node(node: WordNode) -> Self {
        let score = node.score();
        Self {
            wordified: node.wordified,
            score,
            letter_count: node.letter_count,
            max_run: node.max_run,
            max_word_span: node.max_word_span,
        }
    }

    /// The substituted digit string, e.g. `1800COCONUT`.
    pub fn wordified(&self) -> &str {
        &self.wordified
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn letter_count(&self) -> u32 {
        self.letter_count
    }

    pub fn max_run(&self) -> u32 {
        self.max_run
    }

    pub fn max_word_span(&self) -> u32 {
        self.max_word_span
    }

    /// Hyphenated display form, e.g. `1-800-COCONUT`.
    pub fn display(&self) -> String {
        format::render(&self.wordified)
    }
}
