use chrono::NaiveTime;

const TIME_FORMAT: &str = "%H:%M";

/// Normalizes a time-of-day entry to `HH:MM`. Returns `None` when the text
/// is not a valid 24 hour time.
pub fn normalize_time_of_day(text: &str) -> Option<String> {
    NaiveTime::parse_from_str(text.trim(), TIME_FORMAT)
        .ok()
        .map(|t| t.format(TIME_FORMAT).to_string())
}
