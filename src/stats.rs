//! Aggregate queries over parsed record sequences.
//!
//! Every query in this module is a pure function over `&[MessageRecord]`
//! plus a [`UserFilter`]: nothing is mutated, nothing is cached, and
//! calling a query twice with the same arguments yields identical output.
//! Filtering produces borrowed views, never copies of the records.
//!
//! Ranked lists break count ties by first appearance in the filtered
//! sequence, so output is deterministic and reproducible.
//!
//! Records with null timestamps are excluded from the calendar groupings
//! (monthly/daily/weekday/month/hour) but still count toward the sender-
//! and content-based aggregates.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use crate::record::{DAY_NAMES, MONTH_NAMES, MessageRecord};
use crate::resources::{EmojiTable, StopWords};

/// Default ranking depth for [`top_words`].
pub const DEFAULT_TOP_WORDS: usize = 20;

/// Default ranking depth for [`top_emoji`].
pub const DEFAULT_TOP_EMOJI: usize = 10;

/// Scheme-optional URL shape: domain labels plus a TLD, with an optional
/// path. Matches `https://example.com/x`, `www.example.com` and bare
/// `example.com` alike.
const URL_PATTERN: &str =
    r"(?i)\b(?:https?://)?(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,}(?:/\S*)?";

/// Sender selection for every aggregate query.
///
/// Resolved once at the query boundary; the `"Overall"` pseudo-user is
/// never compared as an ordinary string internally.
///
/// # Example
///
/// ```
/// use chatlens::stats::UserFilter;
///
/// assert_eq!(UserFilter::from_selection("Overall"), UserFilter::Overall);
/// assert_eq!(
///     UserFilter::from_selection("Alice"),
///     UserFilter::User("Alice".into())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserFilter {
    /// No filter: the group as a whole.
    Overall,
    /// Restrict to records from one sender.
    User(String),
}

impl UserFilter {
    /// The pseudo-user label meaning "no filter".
    pub const OVERALL_LABEL: &'static str = "Overall";

    /// Resolves a selection string: `"Overall"` means no filter, anything
    /// else names a sender (the notification sentinel included).
    pub fn from_selection(selection: &str) -> Self {
        if selection == Self::OVERALL_LABEL {
            UserFilter::Overall
        } else {
            UserFilter::User(selection.to_owned())
        }
    }

    /// Returns `true` if `record` passes this filter.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        match self {
            UserFilter::Overall => true,
            UserFilter::User(name) => record.sender.as_str() == name,
        }
    }

    /// Display label for reports and insights.
    pub fn label(&self) -> &str {
        match self {
            UserFilter::Overall => Self::OVERALL_LABEL,
            UserFilter::User(name) => name,
        }
    }
}

/// The filtered view: a fresh borrowed sub-sequence per call.
fn filtered<'a>(
    records: &'a [MessageRecord],
    filter: &'a UserFilter,
) -> impl Iterator<Item = &'a MessageRecord> {
    records.iter().filter(move |r| filter.matches(r))
}

/// Counts items, ranking by count descending with ties broken by first
/// appearance. The accumulator is local to the call (single-pass fold).
fn rank_by_count<K, I>(items: I, limit: usize) -> Vec<(K, usize)>
where
    K: Eq + Hash,
    I: Iterator<Item = K>,
{
    let mut counts: HashMap<K, (usize, usize)> = HashMap::new();
    for (index, item) in items.enumerate() {
        let entry = counts.entry(item).or_insert((0, index));
        entry.0 += 1;
    }

    let mut ranked: Vec<(K, usize, usize)> = counts
        .into_iter()
        .map(|(item, (count, first_seen))| (item, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(limit);
    ranked.into_iter().map(|(item, count, _)| (item, count)).collect()
}

/// Number of records after the filter.
pub fn message_count(records: &[MessageRecord], filter: &UserFilter) -> usize {
    filtered(records, filter).count()
}

/// Sum of whitespace-delimited tokens across all bodies.
pub fn word_count(records: &[MessageRecord], filter: &UserFilter) -> usize {
    filtered(records, filter)
        .map(|r| r.body.split_whitespace().count())
        .sum()
}

/// Number of records whose body is exactly the media placeholder.
pub fn media_count(records: &[MessageRecord], filter: &UserFilter) -> usize {
    filtered(records, filter).filter(|r| r.is_media()).count()
}

/// Sum of URL-shaped substrings across all bodies.
pub fn link_count(records: &[MessageRecord], filter: &UserFilter) -> usize {
    let url_regex = Regex::new(URL_PATTERN).unwrap();
    filtered(records, filter)
        .map(|r| url_regex.find_iter(&r.body).count())
        .sum()
}

/// Sender ranking over the whole group.
///
/// `top` holds the five busiest senders; `percentages` covers every sender
/// with its share of the total, rounded to two decimals. Both are ordered
/// by count descending with first-appearance tie-break, and the
/// notification sentinel appears like any other sender if present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SenderRanking {
    /// Top five `(sender, message_count)` pairs.
    pub top: Vec<(String, usize)>,
    /// All senders with `(sender, percentage_of_total)`.
    pub percentages: Vec<(String, f64)>,
}

/// Ranks senders by message count over the unfiltered group.
///
/// Defined on group context only; a sender filter would be meaningless.
/// Empty input yields empty rankings.
pub fn top_senders(records: &[MessageRecord]) -> SenderRanking {
    let total = records.len();
    let all = rank_by_count(records.iter().map(|r| r.sender.as_str().to_owned()), usize::MAX);

    let percentages = all
        .iter()
        .map(|(sender, count)| {
            let percent = (*count as f64 * 100.0 / total as f64 * 100.0).round() / 100.0;
            (sender.clone(), percent)
        })
        .collect();

    SenderRanking {
        top: all.into_iter().take(5).collect(),
        percentages,
    }
}

/// One point of the monthly timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    /// Four-digit year.
    pub year: i32,
    /// Month number, 1–12.
    pub month_num: u32,
    /// Full English month name.
    pub month: &'static str,
    /// Messages in that (year, month).
    pub count: usize,
}

/// Message counts grouped by (year, month), ascending.
///
/// The grouping key is the pair, so January 2023 and January 2024 are
/// distinct points. Records without a timestamp are skipped.
pub fn monthly_counts(records: &[MessageRecord], filter: &UserFilter) -> Vec<MonthlyCount> {
    let mut groups: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for cal in filtered(records, filter).filter_map(|r| r.calendar.as_ref()) {
        *groups.entry((cal.year, cal.month_num)).or_default() += 1;
    }

    groups
        .into_iter()
        .map(|((year, month_num), count)| MonthlyCount {
            year,
            month_num,
            month: MONTH_NAMES[(month_num - 1) as usize],
            count,
        })
        .collect()
}

/// Message counts per calendar date, ascending.
pub fn daily_counts(records: &[MessageRecord], filter: &UserFilter) -> Vec<(NaiveDate, usize)> {
    let mut groups: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for cal in filtered(records, filter).filter_map(|r| r.calendar.as_ref()) {
        *groups.entry(cal.date).or_default() += 1;
    }
    groups.into_iter().collect()
}

/// Message counts per day of week: exactly seven entries, Monday first,
/// zero-filled.
pub fn weekday_histogram(
    records: &[MessageRecord],
    filter: &UserFilter,
) -> Vec<(&'static str, usize)> {
    let mut counts = [0usize; 7];
    for cal in filtered(records, filter).filter_map(|r| r.calendar.as_ref()) {
        counts[cal.weekday.num_days_from_monday() as usize] += 1;
    }
    DAY_NAMES.iter().copied().zip(counts).collect()
}

/// Message counts per month name: exactly twelve entries, January first,
/// zero-filled.
pub fn month_histogram(
    records: &[MessageRecord],
    filter: &UserFilter,
) -> Vec<(&'static str, usize)> {
    let mut counts = [0usize; 12];
    for cal in filtered(records, filter).filter_map(|r| r.calendar.as_ref()) {
        counts[(cal.month_num - 1) as usize] += 1;
    }
    MONTH_NAMES.iter().copied().zip(counts).collect()
}

/// Message counts per hour of day: exactly 24 entries, zero-filled.
pub fn hourly_histogram(records: &[MessageRecord], filter: &UserFilter) -> Vec<(u32, usize)> {
    let mut counts = [0usize; 24];
    for cal in filtered(records, filter).filter_map(|r| r.calendar.as_ref()) {
        counts[cal.hour as usize] += 1;
    }
    (0..24).zip(counts).collect()
}

/// Ranks lowercased body tokens by frequency.
///
/// Notification records and media placeholders are excluded, and tokens in
/// the stop-word set are dropped. Ties are broken by first appearance in
/// the filtered sequence.
pub fn top_words(
    records: &[MessageRecord],
    filter: &UserFilter,
    stop_words: &StopWords,
    limit: usize,
) -> Vec<(String, usize)> {
    let tokens = filtered(records, filter)
        .filter(|r| !r.is_notification() && !r.is_media())
        .flat_map(|r| r.body.split_whitespace())
        .map(str::to_lowercase)
        .filter(|token| !stop_words.contains(token));
    rank_by_count(tokens, limit)
}

/// Ranks emoji characters by frequency, using the supplied membership
/// table. Ties are broken by first appearance.
pub fn top_emoji(
    records: &[MessageRecord],
    filter: &UserFilter,
    emoji: &EmojiTable,
    limit: usize,
) -> Vec<(char, usize)> {
    let chars = filtered(records, filter)
        .flat_map(|r| r.body.chars())
        .filter(|c| emoji.contains(*c));
    rank_by_count(chars, limit)
}

/// Distinct sender names in first-appearance order.
///
/// The notification sentinel is included if present; deduplication beyond
/// this (sorting, pseudo-user insertion) is the caller's presentation
/// concern.
pub fn distinct_senders(records: &[MessageRecord]) -> Vec<String> {
    let mut seen = Vec::new();
    for record in records {
        let name = record.sender.as_str();
        if !seen.iter().any(|s| s == name) {
            seen.push(name.to_owned());
        }
    }
    seen
}

/// The day name with the highest count, or `None` when every bucket is
/// zero (no data). Ties go to the earlier weekday.
pub fn busiest_weekday(records: &[MessageRecord], filter: &UserFilter) -> Option<&'static str> {
    argmax_bucket(&weekday_histogram(records, filter))
}

/// The month name with the highest count, or `None` when every bucket is
/// zero. Ties go to the earlier month.
pub fn busiest_month(records: &[MessageRecord], filter: &UserFilter) -> Option<&'static str> {
    argmax_bucket(&month_histogram(records, filter))
}

/// The hour of day with the highest count, or `None` when every bucket is
/// zero. Ties go to the earlier hour.
pub fn peak_hour(records: &[MessageRecord], filter: &UserFilter) -> Option<u32> {
    argmax_bucket(&hourly_histogram(records, filter))
}

/// First bucket holding the maximum nonzero count.
fn argmax_bucket<K: Copy>(histogram: &[(K, usize)]) -> Option<K> {
    let mut best: Option<(K, usize)> = None;
    for &(key, count) in histogram {
        match best {
            // Strictly greater replaces, so the earlier bucket wins ties.
            Some((_, max)) if count <= max => {}
            _ => best = Some((key, count)),
        }
    }
    best.filter(|&(_, max)| max > 0).map(|(key, _)| key)
}
