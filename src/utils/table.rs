//! Table rendering utilities for CLI outputs.

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: header.len(),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

pub enum Row {
    Cells(Vec<String>),
    /// A single message spanning the full table width, used for the
    /// "no entries" placeholder and for fetch errors.
    Span(String),
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            columns: headers.iter().map(|h| Column::new(h)).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a data row and grow column widths to fit it.
    pub fn add_row(&mut self, cells: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&cells) {
            col.width = col.width.max(cell.chars().count());
        }
        self.rows.push(Row::Cells(cells));
    }

    pub fn add_span_row(&mut self, message: String) {
        self.rows.push(Row::Span(message));
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        for col in &self.columns {
            out.push_str(&format!("{:<width$}  ", col.header, width = col.width));
        }
        out.push('\n');

        let total: usize = self.columns.iter().map(|c| c.width + 2).sum();
        out.push_str(&"-".repeat(total));
        out.push('\n');

        for row in &self.rows {
            match row {
                Row::Cells(cells) => {
                    for (col, cell) in self.columns.iter().zip(cells) {
                        out.push_str(&format!("{:<width$}  ", cell, width = col.width));
                    }
                }
                Row::Span(message) => out.push_str(message),
            }
            out.push('\n');
        }

        out
    }
}
