//! # Chatlens
//!
//! A Rust library for parsing WhatsApp chat-log exports into structured
//! records and deriving descriptive statistics and short natural-language
//! insights.
//!
//! ## Overview
//!
//! An exported chat is a semi-structured text file: every entry starts
//! with a timestamp marker whose shape depends on the exporting app's
//! dialect. Chatlens detects the dialect, splits the file into records,
//! derives calendar and sender fields, and exposes a set of pure aggregate
//! queries over the record sequence — message/word/media/link counts,
//! timelines, activity histograms, word and emoji rankings — plus a small
//! templated insight generator.
//!
//! Parsing is lenient: an unrecognized file yields zero records and a
//! malformed timestamp yields a record with null calendar fields. Nothing
//! in the pipeline aborts on bad input; only missing configuration
//! resources (stop-word list, emoji table) and I/O fail.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let parser = LogParser::new();
//! let records = parser.parse_str(
//!     "1/1/24, 9:00 am - Alice: hello there\n1/1/24, 9:05 am - Bob: hi\n",
//! );
//!
//! let filter = UserFilter::from_selection("Overall");
//! assert_eq!(chatlens::stats::message_count(&records, &filter), 2);
//!
//! for line in smart_insights(&records, &filter) {
//!     println!("{line}");
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`format`] — export dialect detection and marker/block splitting
//!   - [`ExportFormat`](format::ExportFormat), [`split_export`](format::split_export)
//! - [`parser`] — [`LogParser`](parser::LogParser): raw text to [`MessageRecord`]s
//! - [`record`] — [`MessageRecord`], [`Sender`](record::Sender), derived [`Calendar`](record::Calendar)
//! - [`stats`] — aggregate queries over record sequences
//!   - [`UserFilter`](stats::UserFilter) and the count/timeline/histogram/ranking functions
//! - [`resources`] — [`StopWords`](resources::StopWords), [`EmojiTable`](resources::EmojiTable)
//! - [`insights`] — [`smart_insights`](insights::smart_insights)
//! - [`report`] — [`SummaryReport`](report::SummaryReport) and CSV serialization
//! - [`cli`] — CLI argument types (feature `cli`)
//! - [`error`] — [`ChatLensError`], [`Result`]

#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod format;
pub mod insights;
pub mod parser;
pub mod record;
pub mod report;
pub mod resources;
pub mod stats;

// Re-export the main types at the crate root for convenience
pub use error::{ChatLensError, Result};
pub use record::MessageRecord;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core record types
    pub use crate::record::{Calendar, MessageRecord, Sender, MEDIA_PLACEHOLDER, NOTIFICATION_SENTINEL};

    // Error types
    pub use crate::error::{ChatLensError, Result};

    // Pipeline
    pub use crate::format::{split_export, ExportFormat};
    pub use crate::parser::LogParser;

    // Aggregates and filtering
    pub use crate::stats::{SenderRanking, UserFilter};

    // Resources
    pub use crate::resources::{EmojiTable, Resources, StopWords};

    // Insights and reporting
    pub use crate::insights::smart_insights;
    pub use crate::report::SummaryReport;
}
