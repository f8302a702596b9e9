//! Command-line interface definition using clap.

use std::path::PathBuf;

use clap::Parser;

/// Analyze a WhatsApp chat export: statistics, activity maps, word and
/// emoji rankings, and smart insights.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt --stop-words stop.txt --emoji emoji.txt
    chatlens chat.txt --stop-words stop.txt --emoji emoji.txt --user Alice
    chatlens chat.txt --stop-words stop.txt --emoji emoji.txt --report summary.csv")]
pub struct Args {
    /// Path to the exported chat file (.txt)
    pub input: PathBuf,

    /// Path to the stop-word list (newline- or whitespace-delimited)
    #[arg(long, value_name = "FILE")]
    pub stop_words: PathBuf,

    /// Path to the emoji membership table
    #[arg(long, value_name = "FILE")]
    pub emoji: PathBuf,

    /// Analyze one participant instead of the whole group
    #[arg(short, long, value_name = "NAME", default_value = "Overall")]
    pub user: String,

    /// Write the summary report as CSV to this path
    #[cfg(feature = "csv-report")]
    #[arg(short, long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// How many ranked words to show
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub top_words: usize,

    /// How many ranked emoji to show
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top_emoji: usize,
}
