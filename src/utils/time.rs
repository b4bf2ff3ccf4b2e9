//! Time stamp formatting for the entry and exit cells.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Locale};
use std::fmt::Write;

/// 12-hour clock with two-digit hour and minute, e.g. `08:05 AM`.
pub const DEFAULT_TIME_FORMAT: &str = "%I:%M %p";

/// Fallback used when the configured pattern cannot be rendered.
const FALLBACK_TIME_FORMAT: &str = "%H:%M";

/// True when every specifier of `fmt` is understood by chrono.
pub fn is_valid_format(fmt: &str) -> bool {
    !StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error))
}

/// Render `now` with `fmt` in `locale`.
pub fn format_stamp(now: &DateTime<FixedOffset>, fmt: &str, locale: Locale) -> String {
    let mut out = String::new();
    if write!(out, "{}", now.format_localized(fmt, locale)).is_ok() {
        return out;
    }
    now.format(FALLBACK_TIME_FORMAT).to_string()
}

/// Look up a POSIX locale name such as `en_US` or `ar_EG`.
pub fn parse_locale(name: &str) -> Option<Locale> {
    Locale::try_from(name.trim()).ok()
}
