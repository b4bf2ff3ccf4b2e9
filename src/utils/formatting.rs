//! Formatting used for the day header and the history list.
//! Display only: nothing here feeds back into stored data.

use crate::utils::colors::paint;
use chrono::{DateTime, Datelike, Locale, NaiveDate, NaiveTime, TimeZone, Utc};
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    paint("\x1b[1m", s)
}

/// `day / month / year`, numeric, no zero padding.
pub fn display_date(date: NaiveDate) -> String {
    format!("{} / {} / {}", date.day(), date.month(), date.year())
}

fn at_midnight(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))
}

/// Weekday long name in `locale`.
pub fn weekday_name(date: NaiveDate, locale: Locale) -> String {
    at_midnight(date).format_localized("%A", locale).to_string()
}

/// Day, long month name and year in `locale`, e.g. `15 March 2024`.
pub fn long_date(date: NaiveDate, locale: Locale) -> String {
    at_midnight(date)
        .format_localized("%-d %B %Y", locale)
        .to_string()
}

/// Pad to `width` terminal columns, counting wide and combining characters right.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}
