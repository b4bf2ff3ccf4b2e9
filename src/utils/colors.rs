/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

/// ANSI output is off when `NO_COLOR` is set.
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Wrap `text` in `color`, or return it unchanged when colors are off.
pub fn paint(color: &str, text: &str) -> String {
    if colors_enabled() {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Placeholder shown in an unset time cell.
pub const EMPTY_TIME: &str = ":";

/// Time cell color: grey when unset, green for entry, red for exit.
pub fn color_for_time(value: Option<&str>, is_entry: bool) -> &'static str {
    match value {
        Some(v) if !v.trim().is_empty() => {
            if is_entry {
                GREEN
            } else {
                RED
            }
        }
        _ => GREY,
    }
}

/// Highlight the date currently shown.
pub fn highlight(value: &str) -> String {
    paint(CYAN, value)
}
