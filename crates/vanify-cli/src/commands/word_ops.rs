use std::path::Path;
use std::process;

use vanify_core::dict::WordTrie;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn words_cmd(word_list: &str) {
    let dict = die!(
        WordTrie::open(Path::new(word_list)),
        "Error loading word list: {}"
    );
    println!("{} words indexed ({} trie nodes)", dict.len(), dict.node_count());
}
