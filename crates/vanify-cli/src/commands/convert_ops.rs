use std::path::Path;
use std::process;

use serde::Serialize;

use vanify_core::convert::{convert, format};
use vanify_core::dict::WordTrie;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// One JSON record per ranked candidate.
#[derive(Debug, Serialize)]
struct CandidateRecord {
    rank: usize,
    display: String,
    wordified: String,
    score: u32,
}

pub fn convert_cmd(word_list: &str, number: &str, n: usize, json: bool) {
    let dict = die!(
        WordTrie::open(Path::new(word_list)),
        "Error loading word list: {}"
    );
    let results = die!(convert(&dict, number, n), "Error converting number: {}");

    if json {
        let records: Vec<CandidateRecord> = results
            .iter()
            .enumerate()
            .map(|(rank, candidate)| CandidateRecord {
                rank,
                display: format(candidate),
                wordified: candidate.wordified().to_string(),
                score: candidate.score(),
            })
            .collect();
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&records), "Error encoding JSON: {}")
        );
    } else if results.is_empty() {
        println!("no vanity candidates");
    } else {
        for (i, candidate) in results.iter().enumerate() {
            println!("#{:>2}: {}  (score {})", i + 1, format(candidate), candidate.score());
        }
    }
}
