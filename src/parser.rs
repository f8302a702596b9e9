//! The export-to-record pipeline.
//!
//! [`LogParser`] turns the raw marker/block pairs produced by
//! [`split_export`](crate::format::split_export) into [`MessageRecord`]s:
//! it normalizes and parses each timestamp marker (day-first), splits the
//! sender prefix from the body, and derives the calendar fields.
//!
//! Parsing is lenient by design. An unrecognized export yields zero
//! records; an unparseable individual marker yields a record with a null
//! timestamp. Neither ever aborts the pipeline.
//!
//! # Example
//!
//! ```
//! use chatlens::parser::LogParser;
//!
//! let parser = LogParser::new();
//! let records = parser.parse_str("1/1/24, 9:00 am - Alice: hello there\n");
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].sender.as_str(), "Alice");
//! assert_eq!(records[0].body, "hello there\n");
//! assert!(records[0].timestamp.is_some());
//! ```

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::error::Result;
use crate::format::split_export;
use crate::record::{MessageRecord, Sender};

/// Ordered day-first timestamp formats tried against a normalized marker.
///
/// Seconds-precision and 12-hour variants come first; two-digit years
/// before four-digit so `24` parses as 2024 rather than year 24.
const TIMESTAMP_FORMATS: [&str; 8] = [
    "%d/%m/%y, %I:%M:%S %p",
    "%d/%m/%Y, %I:%M:%S %p",
    "%d/%m/%y, %I:%M %p",
    "%d/%m/%Y, %I:%M %p",
    "%d/%m/%y, %H:%M:%S",
    "%d/%m/%Y, %H:%M:%S",
    "%d/%m/%y, %H:%M",
    "%d/%m/%Y, %H:%M",
];

/// Parses raw chat exports into [`MessageRecord`] sequences.
///
/// The parser is stateless apart from its compiled sender-split regex and
/// can be reused across exports.
pub struct LogParser {
    sender_regex: Regex,
}

impl LogParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        // Earliest ": " (colon + any whitespace, newlines included) splits
        // sender from body; the non-greedy name token makes the *first*
        // occurrence win even when the body contains colons.
        Self {
            sender_regex: Regex::new(r"(?s)^(.+?):\s").unwrap(),
        }
    }

    /// Parses the decoded text of one export.
    ///
    /// Always succeeds: unrecognized formats produce an empty sequence and
    /// malformed markers produce records with null timestamps.
    pub fn parse_str(&self, content: &str) -> Vec<MessageRecord> {
        let tokens = split_export(content);
        tokens
            .markers
            .iter()
            .zip(&tokens.blocks)
            .map(|(marker, block)| self.build_record(marker, block))
            .collect()
    }

    /// Reads and parses an export file.
    ///
    /// # Errors
    ///
    /// Returns an error only if the file cannot be read.
    pub fn parse(&self, path: &Path) -> Result<Vec<MessageRecord>> {
        let content = fs::read_to_string(path)?;
        Ok(self.parse_str(&content))
    }

    /// Builds one record from a raw marker and its message block.
    fn build_record(&self, marker: &str, block: &str) -> MessageRecord {
        let timestamp = parse_marker(marker);

        match self.sender_regex.captures(block) {
            Some(caps) => {
                let name = caps.get(1).map_or("", |m| m.as_str()).trim();
                let body = &block[caps.get(0).map_or(0, |m| m.end())..];
                MessageRecord::new(Sender::user(name), body, timestamp)
            }
            None => MessageRecord::new(Sender::Notification, block, timestamp),
        }
    }
}

impl Default for LogParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a raw marker string into a timestamp, day-first.
///
/// Normalizes before parsing: the narrow no-break space some exports put
/// before AM/PM becomes a regular space, and the legacy dialect's trailing
/// ` -` separator is stripped. Returns `None` on failure — the caller
/// keeps the record with null calendar fields.
pub fn parse_marker(raw: &str) -> Option<NaiveDateTime> {
    let normalized = raw.replace('\u{202F}', " ");
    let normalized = normalized.trim();
    let normalized = normalized
        .strip_suffix('-')
        .map_or(normalized, str::trim_end);

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(normalized, format).ok())
}
