use crate::errors::AppResult;
use crate::storage::log::read_log;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use rusqlite::Connection;
use std::sync::OnceLock;

const MAX_OP_WIDTH: usize = 48;

fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Option<Regex>> = OnceLock::new();
    match ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok()) {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// ANSI color of an operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "in" => Colour::Cyan,
        "out" => Colour::Red,
        "set" => Colour::Yellow,
        "export" => Colour::Blue,
        "migrate_legacy" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

/// Operation plus target, cut to `MAX_OP_WIDTH` visible characters with only
/// the operation word colored.
fn op_label(operation: &str, target: &str) -> (String, usize) {
    let plain = if target.is_empty() {
        operation.to_string()
    } else {
        format!("{operation} ({target})")
    };

    let visible = if plain.chars().count() > MAX_OP_WIDTH {
        let mut s: String = plain.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        plain
    };

    let color = color_for_operation(operation);
    let colored = match visible.split_once(' ') {
        Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
        None => color.paint(visible.as_str()).to_string(),
    };

    let width = strip_ansi(&colored).chars().count();
    (colored, width)
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let rows = read_log(conn)?;

        if rows.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let labels: Vec<(String, usize)> = rows
            .iter()
            .map(|r| op_label(&r.operation, &r.target))
            .collect();

        let op_w = labels.iter().map(|(_, w)| *w).max().unwrap_or(10);
        let id_w = rows
            .iter()
            .map(|r| r.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = rows.iter().map(|r| r.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (row, (label, width)) in rows.iter().zip(labels) {
            let date = chrono::DateTime::parse_from_rfc3339(&row.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| row.date.clone());

            let padding = " ".repeat(op_w.saturating_sub(width));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                row.id,
                date,
                label,
                padding,
                row.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
