use clap::{Parser, Subcommand};

use vanify_cli::commands::{convert_cmd, words_cmd};
use vanify_core::convert::DEFAULT_MAX_RESULTS;

#[derive(Parser)]
#[command(name = "vanitool", about = "Vanity number conversion diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a phone number into ranked vanity candidates
    Convert {
        /// Path to the newline-delimited word list
        word_list: String,
        /// Phone number digits (10- or 11-digit NANP number)
        number: String,
        /// Number of ranked results to return
        #[arg(short, long, default_value_t = DEFAULT_MAX_RESULTS)]
        n: usize,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Report word index statistics for a word list
    Words {
        /// Path to the newline-delimited word list
        word_list: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Convert { word_list, number, n, json } => convert_cmd(&word_list, &number, n, json),
        Command::Words { word_list } => words_cmd(&word_list),
    }
}
