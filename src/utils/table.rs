//! Table rendering utilities for CLI outputs.

use super::formatting::{pad_right, visible_width};
use textwrap::wrap;

pub struct Column {
    pub header: String,
    /// Upper bound for the column; longer cells wrap onto extra lines.
    pub max_width: usize,
}

impl Column {
    pub fn new(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            max_width,
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

    /// Width actually used by each column: the widest header or cell,
    /// capped at `max_width`.
    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let widest = self
                    .rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| visible_width(c))
                    .chain(std::iter::once(visible_width(&col.header)))
                    .max()
                    .unwrap_or(0);
                widest.min(col.max_width.max(1))
            })
            .collect()
    }

    /// Render the table. `style_row` wraps each finished row line (used to
    /// paint row colours); pass `|s| s.to_string()` for plain output.
    pub fn render_with<F>(&self, style_row: F) -> String
    where
        F: Fn(&str) -> String,
    {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad_right(&c.header, *w))
            .collect();
        out.push_str(header.join(" | ").trim_end());
        out.push('\n');

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join("-+-"));
        out.push('\n');

        // Rows
        for row in &self.rows {
            // Wrap every cell, then emit as many physical lines as the
            // tallest cell needs.
            let cells: Vec<Vec<String>> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    let value = row.get(i).map(String::as_str).unwrap_or("");
                    if visible_width(value) <= *w {
                        vec![value.to_string()]
                    } else {
                        wrap(value, *w).into_iter().map(|c| c.into_owned()).collect()
                    }
                })
                .collect();

            let height = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);

            for line in 0..height {
                let parts: Vec<String> = cells
                    .iter()
                    .zip(&widths)
                    .map(|(cell, w)| pad_right(cell.get(line).map(String::as_str).unwrap_or(""), *w))
                    .collect();
                out.push_str(&style_row(&parts.join(" | ")));
                out.push('\n');
            }
        }

        out
    }

    pub fn render(&self) -> String {
        self.render_with(|s| s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligns_columns() {
        let mut t = Table::new(vec![Column::new("SNo", 5), Column::new("Topic", 30)]);
        t.add_row(vec!["1".into(), "Pivot Table".into()]);
        t.add_row(vec!["1.7".into(), "Data Analysis".into()]);

        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "SNo | Topic");
        assert_eq!(lines[2], "1   | Pivot Table  ");
        assert_eq!(lines[3], "1.7 | Data Analysis");
    }

    #[test]
    fn wraps_long_cells() {
        let mut t = Table::new(vec![Column::new("Text", 10)]);
        t.add_row(vec!["Connecting data with different options".into()]);

        let out = t.render();
        // header + rule + wrapped lines
        assert!(out.lines().count() > 3);
        assert!(out.lines().skip(2).all(|l| visible_width(l) <= 10));
    }
}
