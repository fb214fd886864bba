//! Table rendering utilities for CLI outputs.
//!
//! Wide cells (task descriptions, remarks) are wrapped to the column width so
//! timesheet rows stay readable in a terminal.

use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width));
            out.push_str("  ");
        }
        out.push('\n');

        for col in &self.columns {
            out.push_str(&"-".repeat(col.width));
            out.push_str("  ");
        }
        out.push('\n');

        for row in &self.rows {
            // Wrap every cell, then emit as many physical lines as the
            // tallest cell needs.
            let wrapped: Vec<Vec<String>> = row
                .iter()
                .zip(&self.columns)
                .map(|(cell, col)| {
                    let lines = wrap(cell, col.width.max(1));
                    if lines.is_empty() {
                        vec![String::new()]
                    } else {
                        lines.into_iter().map(|l| l.into_owned()).collect()
                    }
                })
                .collect();

            let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);

            for line_idx in 0..height {
                for (cell_lines, col) in wrapped.iter().zip(&self.columns) {
                    let text = cell_lines.get(line_idx).map(String::as_str).unwrap_or("");
                    out.push_str(&pad(text, col.width));
                    out.push_str("  ");
                }
                out.push('\n');
            }
        }

        out
    }
}

fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_wide_cells_over_multiple_lines() {
        let mut t = Table::new(vec![Column::new("Date", 10), Column::new("Remark", 12)]);
        t.add_row(vec![
            "2024-01-01".to_string(),
            "a fairly long remark text".to_string(),
        ]);

        let rendered = t.render();
        assert!(rendered.contains("Date"));
        assert!(rendered.contains("2024-01-01"));
        // The remark does not fit in 12 cells, so the row spans lines.
        assert!(rendered.lines().count() > 3);
    }
}
