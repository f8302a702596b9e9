//! Export dialect detection and raw tokenizing.
//!
//! WhatsApp text exports come in a handful of dialects distinguished by
//! the shape of the timestamp marker that prefixes each entry. This module
//! owns the closed set of supported dialects ([`ExportFormat`]), the
//! priority-ordered detection rule, and [`split_export`], which cuts a raw
//! export into parallel marker/block sequences for the record builder.
//!
//! Supported dialects:
//! - Bracketed, seconds precision: `[1/1/24, 9:00:00 AM] Alice: hi`
//!   (a narrow no-break space may precede AM/PM)
//! - Legacy, minutes precision: `1/1/24, 9:00 am - Alice: hi`
//!   (am/pm optional; 24-hour clock exports omit it)

use regex::Regex;

/// One supported export dialect, described by its marker shape.
///
/// Detection tries dialects in [`ExportFormat::DETECTION_ORDER`] — most
/// specific first — and the first dialect with at least one match anywhere
/// in the text wins. An export matching no dialect yields zero records
/// rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Bracket-delimited marker with seconds and uppercase AM/PM.
    /// Example: `[1/1/24, 9:00:00 AM]`
    BracketedSeconds,
    /// Unbracketed marker with minutes, optional lowercase am/pm, and a
    /// literal ` - ` terminator. Example: `1/1/24, 9:00 am - `
    Legacy,
}

impl ExportFormat {
    /// Dialects in detection priority order, most specific first.
    ///
    /// The bracketed seconds-precision dialect must be tried before the
    /// legacy one: a bracketed export can superficially contain legacy-
    /// shaped substrings, never the other way around.
    pub const DETECTION_ORDER: [ExportFormat; 2] =
        [ExportFormat::BracketedSeconds, ExportFormat::Legacy];

    /// Returns the marker-matching regex pattern for this dialect.
    pub fn marker_pattern(self) -> &'static str {
        match self {
            // [1/1/24, 9:00:00 AM] — optional U+202F before AM/PM
            ExportFormat::BracketedSeconds => {
                r"\[\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}:\d{2}\x{202F}?(?:AM|PM)\]"
            }
            // 1/1/24, 9:00 am -  (am/pm optional)
            ExportFormat::Legacy => {
                r"\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}(?:\s?(?:am|pm))?\s-\s"
            }
        }
    }

    /// Returns `true` if this dialect's marker is bracket-delimited.
    pub fn is_bracketed(self) -> bool {
        matches!(self, ExportFormat::BracketedSeconds)
    }

    /// Returns `true` if this dialect's marker carries seconds.
    pub fn has_seconds(self) -> bool {
        matches!(self, ExportFormat::BracketedSeconds)
    }

    /// Compiles the marker regex for this dialect.
    ///
    /// The patterns are static and known-valid, so compilation cannot fail.
    pub(crate) fn marker_regex(self) -> Regex {
        Regex::new(self.marker_pattern()).unwrap()
    }

    /// Detects which dialect a raw export uses.
    ///
    /// Returns the first dialect in [`DETECTION_ORDER`](Self::DETECTION_ORDER)
    /// whose marker pattern matches anywhere in `text`, or `None` if the
    /// export is unrecognized.
    pub fn detect(text: &str) -> Option<ExportFormat> {
        Self::DETECTION_ORDER
            .into_iter()
            .find(|format| format.marker_regex().is_match(text))
    }
}

/// Parallel marker/block sequences produced by [`split_export`].
///
/// `markers.len() == blocks.len()` always holds: `blocks[i]` is exactly
/// the text between marker `i` and marker `i + 1` (or end-of-text for the
/// last block).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized {
    /// Matched marker substrings, in order, with enclosing brackets
    /// stripped. Otherwise raw: date normalization happens in the record
    /// builder.
    pub markers: Vec<String>,
    /// Message blocks, one per marker, trailing newline included.
    pub blocks: Vec<String>,
}

impl Tokenized {
    /// Returns `true` if no marker matched.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Number of entries found.
    pub fn len(&self) -> usize {
        self.markers.len()
    }
}

/// Splits a raw export into marker and block sequences.
///
/// Detects the dialect, splits the text on every marker occurrence, and
/// discards the segment before the first marker (pre-conversation noise or
/// empty). An unrecognized export returns two empty sequences — this
/// leniency is deliberate; downstream aggregates handle the empty case.
///
/// # Example
///
/// ```
/// use chatlens::format::split_export;
///
/// let tokens = split_export("1/1/24, 9:00 am - Alice: hello\n1/1/24, 9:05 am - Bob: hi\n");
/// assert_eq!(tokens.markers.len(), 2);
/// assert_eq!(tokens.blocks[0], "Alice: hello\n");
/// ```
pub fn split_export(text: &str) -> Tokenized {
    let Some(format) = ExportFormat::detect(text) else {
        return Tokenized::default();
    };

    let regex = format.marker_regex();

    let blocks: Vec<String> = regex
        .split(text)
        .skip(1) // everything before the first marker
        .map(str::to_owned)
        .collect();

    let markers: Vec<String> = regex
        .find_iter(text)
        .map(|m| {
            m.as_str()
                .trim_matches(|c| c == '[' || c == ']')
                .to_owned()
        })
        .collect();

    debug_assert_eq!(markers.len(), blocks.len());
    Tokenized { markers, blocks }
}
