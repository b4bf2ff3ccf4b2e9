use chrono::NaiveDate;

/// Canonical key of a calendar date: `YYYY-MM-DD`.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a date key as a plain calendar date, no timezone involved.
pub fn parse_date_key(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a date typed by the user and return its canonical key.
pub fn normalize_date(s: &str) -> Option<String> {
    parse_date_key(s).map(date_key)
}
