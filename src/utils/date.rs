use chrono::NaiveDate;
use regex::Regex;

/// Strict "YYYY-MM-DD": the shape must match (leading zeros included) and the
/// value must be a real calendar date, so "2024-13-40" is rejected.
pub fn is_valid_date(s: &str) -> bool {
    let re = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
    re.is_match(s) && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if !is_valid_date(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Current local date as "YYYY-MM-DD".
pub fn today_string() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
