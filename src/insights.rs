//! Templated natural-language observations over the aggregates.
//!
//! [`smart_insights`] is a thin formatter: every sentence is computed from
//! exactly one aggregate query, with no aggregation logic of its own. An
//! empty filtered set produces a single displayable "no data" line instead
//! of an error.

use crate::record::MessageRecord;
use crate::stats::{self, UserFilter};

/// Fixed peak-hour bands for the insight text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    /// Hours 0–5.
    Night,
    /// Hours 6–11.
    Morning,
    /// Hours 12–17.
    Afternoon,
    /// Hours 18–23.
    Evening,
}

impl TimeOfDay {
    /// Classifies an hour of day (0–23) into its band.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=5 => TimeOfDay::Night,
            6..=11 => TimeOfDay::Morning,
            12..=17 => TimeOfDay::Afternoon,
            _ => TimeOfDay::Evening,
        }
    }

    /// The fixed observation sentence for this band.
    fn sentence(self) -> &'static str {
        match self {
            TimeOfDay::Night => "🌙 Most messages are sent late at night — this chat is a night-owl zone.",
            TimeOfDay::Morning => "🌅 Mornings are the busiest time — the day starts in this chat.",
            TimeOfDay::Afternoon => "☀️ Afternoons see the most activity — peak chatting happens mid-day.",
            TimeOfDay::Evening => "🌆 Evenings are when this chat comes alive.",
        }
    }
}

/// Composes the insight lines for the filtered record sequence.
///
/// Emits, in order: the peak-hour band sentence, the busiest weekday, the
/// busiest month, and a closing line naming the selection. Lines whose
/// underlying aggregate has no data are dropped; with zero messages a
/// single empty-state line is returned.
///
/// # Example
///
/// ```
/// use chatlens::insights::smart_insights;
/// use chatlens::parser::LogParser;
/// use chatlens::stats::UserFilter;
///
/// let records = LogParser::new().parse_str("1/1/24, 9:00 am - Alice: hello\n");
/// let lines = smart_insights(&records, &UserFilter::Overall);
/// assert!(lines.last().unwrap().contains("Overall"));
/// ```
pub fn smart_insights(records: &[MessageRecord], filter: &UserFilter) -> Vec<String> {
    if stats::message_count(records, filter) == 0 {
        return vec!["No messages to analyze for this selection.".to_owned()];
    }

    let mut lines = Vec::new();

    if let Some(hour) = stats::peak_hour(records, filter) {
        lines.push(TimeOfDay::from_hour(hour).sentence().to_owned());
    }

    if let Some(day) = stats::busiest_weekday(records, filter) {
        lines.push(format!("📅 {day} is the most active day of the week."));
    }

    if let Some(month) = stats::busiest_month(records, filter) {
        lines.push(format!("🗓 {month} was the busiest month of the chat."));
    }

    lines.push(format!(
        "🧠 Insights generated for {}. Figures are descriptive only — a quiet week can skew any of them.",
        filter.label()
    ));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::LogParser;

    #[test]
    fn test_time_of_day_bands() {
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(6), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(18), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(23), TimeOfDay::Evening);
    }

    #[test]
    fn test_insights_order_and_content() {
        let text = "1/1/24, 9:00 am - Alice: hello\n1/1/24, 9:05 am - Bob: hi\n";
        let records = LogParser::new().parse_str(text);
        let lines = smart_insights(&records, &UserFilter::Overall);

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Morning"));
        assert!(lines[1].contains("Monday"));
        assert!(lines[2].contains("January"));
        assert!(lines[3].contains("Overall"));
    }

    #[test]
    fn test_insights_empty_state() {
        let lines = smart_insights(&[], &UserFilter::Overall);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("No messages"));
    }

    #[test]
    fn test_insights_respect_filter() {
        let text = "1/1/24, 9:00 am - Alice: hello\n";
        let records = LogParser::new().parse_str(text);
        let lines = smart_insights(&records, &UserFilter::from_selection("Bob"));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("No messages"));
    }

    #[test]
    fn test_insights_without_timestamps_still_close() {
        // Marker matches but the date is bogus: calendar queries have no
        // data, yet the closing line must still appear.
        let text = "25/13/24, 9:00 am - Alice: hi\n";
        let records = LogParser::new().parse_str(text);
        let lines = smart_insights(&records, &UserFilter::Overall);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Overall"));
    }
}
