//! Table rendering utilities for CLI outputs.
//!
//! Widths are measured in terminal columns, so names written in wide or
//! right-to-left scripts still line up.

use crate::utils::colors::paint;
use crate::utils::formatting::pad_right;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    /// Wrap cells of this column at the given width instead of widening it.
    pub wrap: Option<usize>,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            wrap: None,
        }
    }

    pub fn wrapped(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            wrap: Some(width.max(1)),
        }
    }
}

/// Plain text plus an optional ANSI color applied after padding.
pub struct Cell {
    pub text: String,
    pub color: Option<&'static str>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored(text: impl Into<String>, color: &'static str) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    fn lines_of(&self, col: usize, cell: &Cell) -> Vec<String> {
        match self.columns[col].wrap {
            Some(width) if !cell.text.is_empty() => textwrap::wrap(&cell.text, width)
                .into_iter()
                .map(|l| l.into_owned())
                .collect(),
            _ => vec![cell.text.clone()],
        }
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| UnicodeWidthStr::width(c.header.as_str()))
            .collect();

        let wrapped: Vec<Vec<Vec<String>>> = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .take(self.columns.len())
                    .map(|(i, cell)| self.lines_of(i, cell))
                    .collect()
            })
            .collect();

        for row in &wrapped {
            for (i, lines) in row.iter().enumerate() {
                for l in lines {
                    widths[i] = widths[i].max(UnicodeWidthStr::width(l.as_str()));
                }
            }
        }

        let mut out = String::new();

        // Header
        for (i, col) in self.columns.iter().enumerate() {
            out.push_str(&pad_right(&col.header, widths[i]));
            out.push(' ');
        }
        out.push('\n');
        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for (row, cells) in wrapped.iter().zip(&self.rows) {
            let height = row.iter().map(Vec::len).max().unwrap_or(1);
            for line in 0..height {
                for (i, lines) in row.iter().enumerate() {
                    let text = lines.get(line).map(String::as_str).unwrap_or("");
                    let padded = pad_right(text, widths[i]);
                    match cells[i].color {
                        Some(color) if !text.is_empty() => out.push_str(&paint(color, &padded)),
                        _ => out.push_str(&padded),
                    }
                    out.push(' ');
                }
                out.push('\n');
            }
        }

        out
    }
}
