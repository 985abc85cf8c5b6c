//! Minimal plain-text table renderer for the entry list.

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Header plus layout constraints for one rendered column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub min_width: usize,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, min_width: usize, alignment: Alignment) -> Self {
        Self {
            header: header.into(),
            min_width,
            alignment,
        }
    }
}

/// A table with column metadata and rows of pre-formatted cells.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Computes content widths from headers, rows, and minimum widths.
    fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = visible_width(&column.header).max(column.min_width);
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(visible_width(cell));
                    }
                }
                width
            })
            .collect()
    }

    fn render_cells(&self, row: &[String], widths: &[usize]) -> String {
        let rendered: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let cell = row.get(idx).map(String::as_str).unwrap_or("");
                pad_cell(cell, widths[idx], column.alignment)
            })
            .collect();
        rendered.join("  ").trim_end().to_string()
    }

    /// Renders headers, a rule, and all rows.
    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();

        let mut out = String::new();
        out.push_str(&self.render_cells(&headers, &widths));
        out.push('\n');
        out.push_str(&horizontal_rule(&widths));
        for row in &self.rows {
            out.push('\n');
            out.push_str(&self.render_cells(row, &widths));
        }
        out
    }
}

fn pad_cell(cell: &str, width: usize, alignment: Alignment) -> String {
    let pad = width.saturating_sub(visible_width(cell));
    match alignment {
        Alignment::Left => format!("{cell}{}", " ".repeat(pad)),
        Alignment::Right => format!("{}{cell}", " ".repeat(pad)),
    }
}

fn horizontal_rule(widths: &[usize]) -> String {
    widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("--")
}

/// Width of the text as the terminal shows it, skipping ANSI color sequences.
pub fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            if chars.peek() == Some(&'[') {
                chars.next();
                for escaped in chars.by_ref() {
                    if ('\u{40}'..='\u{7e}').contains(&escaped) {
                        break;
                    }
                }
            }
            continue;
        }
        width += 1;
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_width_ignores_color_codes() {
        assert_eq!(visible_width("plain"), 5);
        assert_eq!(visible_width("\u{1b}[32mIncome\u{1b}[0m"), 6);
    }

    #[test]
    fn columns_grow_to_fit_and_align() {
        let mut table = Table::new(vec![
            TableColumn::new("Reason", 6, Alignment::Left),
            TableColumn::new("Amount", 6, Alignment::Right),
        ]);
        table.push_row(vec!["Groceries".into(), "₹200".into()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Reason     Amount");
        assert_eq!(lines[1], "-----------------");
        assert_eq!(lines[2], "Groceries    ₹200");
    }
}
