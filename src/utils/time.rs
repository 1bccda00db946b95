//! Time utilities: strict HH:MM validation and the current wall-clock time.

use chrono::NaiveTime;
use regex::Regex;

/// Strict 24-hour HH:MM. Leading zeros are mandatory ("9:30" is invalid).
pub fn is_valid_time(t: &str) -> bool {
    let re = Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").unwrap();
    re.is_match(t)
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    if !is_valid_time(t) {
        return None;
    }
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Current local time as "HH:MM".
pub fn now_hhmm() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}
