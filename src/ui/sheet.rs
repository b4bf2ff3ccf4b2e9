//! Terminal rendering of a day sheet and of the history list.

use crate::config::Config;
use crate::models::{AllLogs, DailyLog, Entry};
use crate::utils::colors::{EMPTY_TIME, GREY, color_for_time, highlight};
use crate::utils::date::parse_date_key;
use crate::utils::formatting::{bold, display_date, long_date, weekday_name};
use crate::utils::table::{Cell, Column, Table};
use chrono::Locale;

const HEADERS: [&str; 7] = ["#", "Name", "Entry", "Exit", "Role", "Vehicle", "Notes"];

fn time_cell(value: Option<&str>, is_entry: bool) -> Cell {
    let color = color_for_time(value, is_entry);
    match value {
        Some(v) if !v.trim().is_empty() => Cell::colored(v, color),
        _ => Cell::colored(EMPTY_TIME, color),
    }
}

fn entry_row(e: &Entry) -> Vec<Cell> {
    let id = if e.is_blank() {
        Cell::colored(e.id.to_string(), GREY)
    } else {
        Cell::plain(e.id.to_string())
    };

    vec![
        id,
        Cell::plain(e.name.clone()),
        time_cell(e.entry_time.as_deref(), true),
        time_cell(e.exit_time.as_deref(), false),
        Cell::plain(e.capacity.clone()),
        Cell::plain(e.vehicle_type.clone()),
        Cell::plain(e.notes.clone()),
    ]
}

/// Header line: numeric date and, if enabled, the weekday name.
pub fn sheet_title(day: &str, show_weekday: bool, locale: Locale) -> String {
    match parse_date_key(day) {
        Some(d) if show_weekday => format!(
            "Date: {}   Day: {}",
            display_date(d),
            weekday_name(d, locale)
        ),
        Some(d) => format!("Date: {}", display_date(d)),
        None => format!("Date: {day}"),
    }
}

pub fn render_sheet(log: &DailyLog, cfg: &Config) -> String {
    let mut columns: Vec<Column> = HEADERS[..6].iter().map(|h| Column::new(h)).collect();
    columns.push(Column::wrapped(HEADERS[6], cfg.notes_width));

    let mut table = Table::new(columns);
    for e in log {
        table.add_row(entry_row(e));
    }
    table.render()
}

/// One line per recorded day, most recent first, today marked with `*`.
pub fn render_history(dates: &[String], logs: &AllLogs, today: &str, locale: Locale) -> String {
    let mut out = String::new();

    for key in dates {
        let named = logs
            .get(key)
            .map_or(0, |log| log.iter().filter(|e| e.has_name()).count());

        let label = match parse_date_key(key) {
            Some(d) => format!(
                "{key}  {} ({})",
                long_date(d, locale),
                weekday_name(d, locale)
            ),
            None => key.clone(),
        };

        let line = format!("{label} - {named} entries");
        if key == today {
            out.push_str(&format!("* {}\n", bold(&highlight(&line))));
        } else {
            out.push_str(&format!("  {line}\n"));
        }
    }

    out
}
