//! Normalized chat record types.
//!
//! This module provides [`MessageRecord`], the central entity of the
//! pipeline: one parsed export entry with its sender, body, timestamp and
//! derived calendar fields. Records are built once per export, held in
//! memory for one analysis session, and never mutated afterwards — every
//! downstream filter works on borrowed views.
//!
//! # Examples
//!
//! ```
//! use chatlens::record::{MessageRecord, Sender};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//! let record = MessageRecord::new(Sender::user("Alice"), "hello there\n", Some(ts));
//!
//! assert_eq!(record.sender.as_str(), "Alice");
//! let cal = record.calendar.unwrap();
//! assert_eq!(cal.year, 2024);
//! assert_eq!(cal.day_name(), "Monday");
//! assert_eq!(cal.hour, 9);
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;

/// Reserved sender value for lines without a `"Name: "` prefix
/// (group creation, member changes, encryption notices and similar
/// system events).
pub const NOTIFICATION_SENTINEL: &str = "group_notification";

/// The exact body text the export tool substitutes for attachments.
///
/// The trailing newline is part of the sentinel: the splitter keeps each
/// block's trailing newline, so a media line arrives as exactly this
/// string. It is matched verbatim and never trimmed.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>\n";

/// Full English month names, January-first. Indexed by `month_num - 1`.
pub(crate) const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English day names, Monday-first. Indexed by `Weekday::num_days_from_monday`.
pub(crate) const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// The author of a record: a real participant or the notification sentinel.
///
/// A sender is never empty. System lines (no `"Name: "` prefix) get
/// [`Sender::Notification`], which renders as [`NOTIFICATION_SENTINEL`].
///
/// # Example
///
/// ```
/// use chatlens::record::Sender;
///
/// assert_eq!(Sender::user("Alice").as_str(), "Alice");
/// assert_eq!(Sender::Notification.as_str(), "group_notification");
/// assert!(Sender::Notification.is_notification());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Sender {
    /// Display name of a chat participant.
    User(String),
    /// System/group-notification line with no author.
    Notification,
}

impl Sender {
    /// Creates a participant sender from a display name.
    pub fn user(name: impl Into<String>) -> Self {
        Sender::User(name.into())
    }

    /// Returns the display string: the participant name, or the
    /// notification sentinel.
    pub fn as_str(&self) -> &str {
        match self {
            Sender::User(name) => name,
            Sender::Notification => NOTIFICATION_SENTINEL,
        }
    }

    /// Returns `true` for the notification sentinel.
    pub fn is_notification(&self) -> bool {
        matches!(self, Sender::Notification)
    }
}

impl From<Sender> for String {
    fn from(sender: Sender) -> Self {
        sender.as_str().to_owned()
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar fields derived from a record's timestamp.
///
/// Computed once at record construction and read-only thereafter. All
/// fields are consistent with the originating timestamp by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Calendar {
    /// Four-digit year.
    pub year: i32,
    /// Month number, 1–12.
    pub month_num: u32,
    /// Day of month, 1–31.
    pub day: u32,
    /// Hour of day, 0–23.
    pub hour: u32,
    /// Day of week.
    pub weekday: Weekday,
    /// Calendar date without the time component.
    pub date: NaiveDate,
}

impl Calendar {
    /// Derives all calendar fields from a parsed timestamp.
    pub fn from_datetime(ts: NaiveDateTime) -> Self {
        Self {
            year: ts.year(),
            month_num: ts.month(),
            day: ts.day(),
            hour: ts.hour(),
            weekday: ts.weekday(),
            date: ts.date(),
        }
    }

    /// Full English month name ("January" .. "December").
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month_num - 1) as usize]
    }

    /// Full English day name ("Monday" .. "Sunday").
    pub fn day_name(&self) -> &'static str {
        DAY_NAMES[self.weekday.num_days_from_monday() as usize]
    }
}

/// One normalized entry of a chat export.
///
/// There is exactly one record per timestamp marker found in the raw
/// export, in original order. A record whose marker failed to parse keeps
/// `timestamp` and `calendar` as `None` but still participates in sender-
/// and content-based aggregates.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `sender` | [`Sender`] | Participant name or the notification sentinel |
/// | `body` | `String` | Message text with the sender prefix stripped |
/// | `timestamp` | `Option<NaiveDateTime>` | Parsed marker, `None` if unparseable |
/// | `calendar` | `Option<Calendar>` | Derived fields, `Some` iff `timestamp` is |
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageRecord {
    /// Who wrote the message.
    pub sender: Sender,

    /// Message text. For notification lines this is the whole line; an
    /// empty body is valid.
    pub body: String,

    /// When the message was sent. Exports carry no timezone, so this is a
    /// naive local instant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<NaiveDateTime>,

    /// Calendar fields derived from `timestamp` at construction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar: Option<Calendar>,
}

impl MessageRecord {
    /// Creates a record, deriving the calendar fields from the timestamp.
    pub fn new(sender: Sender, body: impl Into<String>, timestamp: Option<NaiveDateTime>) -> Self {
        Self {
            sender,
            body: body.into(),
            timestamp,
            calendar: timestamp.map(Calendar::from_datetime),
        }
    }

    /// Returns `true` if the body is exactly the media placeholder.
    pub fn is_media(&self) -> bool {
        self.body == MEDIA_PLACEHOLDER
    }

    /// Returns `true` for system/group-notification records.
    pub fn is_notification(&self) -> bool {
        self.sender.is_notification()
    }
}
