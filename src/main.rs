//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::process;

use clap::Parser as ClapParser;

use chatlens::cli::Args;
use chatlens::error::ChatLensError;
use chatlens::insights::smart_insights;
use chatlens::parser::LogParser;
use chatlens::resources::Resources;
use chatlens::stats::{self, UserFilter};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatLensError> {
    let args = Args::parse();

    // Resources are configuration: fail fast before touching the export.
    let resources = Resources::load(&args.stop_words, &args.emoji)?;

    println!("🔎 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());
    println!("👤 User:    {}", args.user);
    println!();

    let parser = LogParser::new();
    let records = parser.parse(&args.input)?;
    let filter = UserFilter::from_selection(&args.user);

    if records.is_empty() {
        println!("⚠️  No recognizable chat entries found in this file.");
    } else {
        let senders = stats::distinct_senders(&records);
        println!("   {} messages from {} senders", records.len(), senders.len());
    }
    println!();

    println!("📊 Top Statistics");
    println!("   Messages:     {}", stats::message_count(&records, &filter));
    println!("   Words:        {}", stats::word_count(&records, &filter));
    println!("   Media shared: {}", stats::media_count(&records, &filter));
    println!("   Links shared: {}", stats::link_count(&records, &filter));
    println!();

    if matches!(filter, UserFilter::Overall) {
        let ranking = stats::top_senders(&records);
        if !ranking.top.is_empty() {
            println!("🏆 Most Active Senders");
            for (sender, count) in &ranking.top {
                println!("   {sender}: {count}");
            }
            println!();
        }
    }

    println!("📈 Activity");
    println!(
        "   Most active day:   {}",
        stats::busiest_weekday(&records, &filter).unwrap_or("N/A")
    );
    println!(
        "   Most active month: {}",
        stats::busiest_month(&records, &filter).unwrap_or("N/A")
    );
    match stats::peak_hour(&records, &filter) {
        Some(hour) => println!("   Peak hour:         {hour}:00"),
        None => println!("   Peak hour:         N/A"),
    }
    println!();

    let words = stats::top_words(&records, &filter, &resources.stop_words, args.top_words);
    if !words.is_empty() {
        println!("📄 Most Common Words");
        for (word, count) in &words {
            println!("   {word}: {count}");
        }
        println!();
    }

    let emoji = stats::top_emoji(&records, &filter, &resources.emoji, args.top_emoji);
    if !emoji.is_empty() {
        println!("😊 Top Emoji");
        for (e, count) in &emoji {
            println!("   {e}: {count}");
        }
        println!();
    }

    println!("🧠 Smart Insights");
    for line in smart_insights(&records, &filter) {
        println!("   {line}");
    }

    #[cfg(feature = "csv-report")]
    if let Some(ref report_path) = args.report {
        let report = chatlens::report::SummaryReport::build(&records, &filter);
        chatlens::report::write_csv(&report, report_path)?;
        println!();
        println!("💾 Summary report written to {}", report_path.display());
    }

    Ok(())
}
