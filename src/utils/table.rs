//! Table rendering utilities for CLI outputs.

use ansi_term::Style;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: header.chars().count(),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<(Vec<String>, Style)>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row; column widths grow to fit it.
    pub fn add_row(&mut self, row: Vec<String>, style: Style) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(cell.chars().count());
        }
        self.rows.push((row, style));
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .map(|col| format!("{:<width$}", col.header, width = col.width))
            .collect();
        out.push_str(&Style::new().bold().paint(header.join(" ")).to_string());
        out.push('\n');

        // Rows
        for (row, style) in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| {
                    let cell = row.get(i).map(String::as_str).unwrap_or("");
                    format!("{:<width$}", cell, width = col.width)
                })
                .collect();
            out.push_str(&style.paint(cells.join(" ")).to_string());
            out.push('\n');
        }

        out
    }
}
