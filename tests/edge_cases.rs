//! Edge case tests: unicode, malformed markers, odd sender names, and
//! boundary conditions the integration suite doesn't cover.

use chatlens::prelude::*;
use chatlens::stats::{self, UserFilter};

fn parse(text: &str) -> Vec<MessageRecord> {
    LogParser::new().parse_str(text)
}

// =========================================================================
// Unicode
// =========================================================================

#[test]
fn test_unicode_senders_and_bodies() {
    let records = parse("1/1/24, 9:00 am - Иван: Привет мир\n1/1/24, 9:01 am - 田中太郎: こんにちは\n");
    assert_eq!(records[0].sender.as_str(), "Иван");
    assert_eq!(records[0].body, "Привет мир\n");
    assert_eq!(records[1].sender.as_str(), "田中太郎");
}

#[test]
fn test_emoji_in_sender_name() {
    let records = parse("1/1/24, 9:00 am - Mom ❤️: dinner at 7\n");
    assert_eq!(records[0].sender.as_str(), "Mom ❤️");
    assert_eq!(records[0].body, "dinner at 7\n");
}

#[test]
fn test_narrow_no_break_space_normalized_before_parsing() {
    let records = parse("[5/6/24, 11:59:59\u{202F}PM] Alice: almost midnight\n");
    let cal = records[0].calendar.unwrap();
    assert_eq!(cal.hour, 23);
    assert_eq!(cal.day, 5);
    assert_eq!(cal.month_num, 6);
}

// =========================================================================
// Sender/body split
// =========================================================================

#[test]
fn test_sender_name_containing_punctuation() {
    let records = parse("1/1/24, 9:00 am - Dr. Smith (work): running late\n");
    assert_eq!(records[0].sender.as_str(), "Dr. Smith (work)");
    assert_eq!(records[0].body, "running late\n");
}

#[test]
fn test_body_with_many_colons_splits_on_first() {
    let records = parse("1/1/24, 9:00 am - Alice: schedule: 9:00 meet, 10:00 code\n");
    assert_eq!(records[0].sender.as_str(), "Alice");
    assert_eq!(records[0].body, "schedule: 9:00 meet, 10:00 code\n");
}

#[test]
fn test_colon_without_space_is_notification() {
    // "http://x" style colon never has the trailing whitespace the split
    // requires, so a bare URL line stays a notification
    let records = parse("1/1/24, 9:00 am - https://example.com/path\n");
    assert!(records[0].is_notification());
    assert_eq!(records[0].body, "https://example.com/path\n");
}

#[test]
fn test_group_subject_change_is_notification() {
    let records = parse("1/1/24, 9:00 am - Alice changed the subject to \"weekend plans\"\n");
    assert!(records[0].is_notification());
    assert_eq!(stats::message_count(&records, &UserFilter::Overall), 1);
}

// =========================================================================
// Malformed timestamps
// =========================================================================

#[test]
fn test_bogus_date_keeps_record_with_null_calendar() {
    let records = parse("25/13/24, 9:00 am - Alice: hi\n1/1/24, 9:01 am - Alice: again\n");
    assert_eq!(records.len(), 2);
    assert!(records[0].timestamp.is_none());
    assert!(records[0].calendar.is_none());
    assert!(records[1].timestamp.is_some());

    // Null-timestamp record still counts for content aggregates
    let alice = UserFilter::from_selection("Alice");
    assert_eq!(stats::message_count(&records, &alice), 2);
    assert_eq!(stats::word_count(&records, &alice), 2);

    // But not for calendar groupings
    let daily = stats::daily_counts(&records, &alice);
    assert_eq!(daily.len(), 1);
    assert_eq!(daily[0].1, 1);
}

#[test]
fn test_february_30_is_null() {
    let records = parse("30/2/24, 9:00 am - Alice: hi\n");
    assert_eq!(records.len(), 1);
    assert!(records[0].timestamp.is_none());
}

#[test]
fn test_four_digit_year() {
    let records = parse("15/6/2023, 22:45 - Alice: late one\n");
    let cal = records[0].calendar.unwrap();
    assert_eq!(cal.year, 2023);
    assert_eq!(cal.hour, 22);
}

// =========================================================================
// Structure boundaries
// =========================================================================

#[test]
fn test_empty_input() {
    assert!(parse("").is_empty());
}

#[test]
fn test_whitespace_only_input() {
    assert!(parse("   \n\n\t\n").is_empty());
}

#[test]
fn test_preamble_discarded() {
    let records = parse(
        "Chat export generated by the app\nwith a two line header\n1/1/24, 9:00 am - Alice: hi\n",
    );
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].body, "hi\n");
}

#[test]
fn test_last_block_without_trailing_newline() {
    let records = parse("1/1/24, 9:00 am - Alice: hi\n1/1/24, 9:01 am - Bob: bye");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].body, "bye");
}

#[test]
fn test_media_without_trailing_newline_not_placeholder() {
    // The sentinel includes the trailing newline; a final block without
    // one is not counted (same behavior as the original exporter quirk)
    let records = parse("1/1/24, 9:00 am - Alice: <Media omitted>");
    assert_eq!(stats::media_count(&records, &UserFilter::Overall), 0);
}

#[test]
fn test_zero_fill_shapes_are_input_independent() {
    for text in ["", "no markers", "1/1/24, 9:00 am - Alice: hi\n"] {
        let records = parse(text);
        let overall = UserFilter::Overall;
        assert_eq!(stats::weekday_histogram(&records, &overall).len(), 7);
        assert_eq!(stats::month_histogram(&records, &overall).len(), 12);
        assert_eq!(stats::hourly_histogram(&records, &overall).len(), 24);
    }
}

#[test]
fn test_filter_for_unknown_sender_is_empty_everywhere() {
    let records = parse("1/1/24, 9:00 am - Alice: hi\n");
    let ghost = UserFilter::from_selection("Ghost");
    assert_eq!(stats::message_count(&records, &ghost), 0);
    assert_eq!(stats::busiest_weekday(&records, &ghost), None);
    assert_eq!(stats::peak_hour(&records, &ghost), None);
    let stop = StopWords::default();
    assert!(stats::top_words(&records, &ghost, &stop, 20).is_empty());
    assert_eq!(smart_insights(&records, &ghost).len(), 1);
}

#[test]
fn test_records_are_views_not_copies() {
    // Aggregates never mutate the sequence: parse once, query many times
    let records = parse("1/1/24, 9:00 am - Alice: hi\n1/1/24, 9:01 am - Bob: yo\n");
    let before = records.clone();
    let overall = UserFilter::Overall;
    let _ = stats::top_senders(&records);
    let _ = stats::monthly_counts(&records, &overall);
    let _ = smart_insights(&records, &overall);
    assert_eq!(records, before);
}
