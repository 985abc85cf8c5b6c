//! Renders the two-slice income/expense distribution as a proportional bar.
//!
//! The terminal stands in for the pie widget: one bar split between the two
//! categories, followed by a legend line per slice. Palette is fixed — green
//! for Income, red for Expense.

use colored::Colorize;

use crate::cli::output::format_money;
use crate::ledger::ChartSeries;

/// Bar width used when the terminal size is unknown or in plain mode.
pub const DEFAULT_BAR_WIDTH: usize = 40;

/// Renders the series into legend + bar lines. Empty series (both values
/// zero) renders a placeholder instead of a meaningless bar.
pub fn render(series: &ChartSeries, bar_width: usize, plain: bool) -> String {
    let [income, expense] = series.values;
    let total = income + expense;

    if total <= 0.0 {
        return "(no data to chart yet)".to_string();
    }

    let width = bar_width.max(10);
    let income_cells = ((income / total) * width as f64).round() as usize;
    let income_cells = income_cells.min(width);
    let expense_cells = width - income_cells;

    let income_share = 100.0 * income / total;
    let expense_share = 100.0 * expense / total;

    let income_block = "█".repeat(income_cells);
    let expense_block = "█".repeat(expense_cells);
    let bar = if plain {
        format!("[{income_block}|{expense_block}]")
    } else {
        format!("[{}{}]", income_block.green(), expense_block.red())
    };

    let mut out = String::new();
    out.push_str(&bar);
    out.push('\n');
    out.push_str(&legend_line(series.labels[0], income, income_share, plain, true));
    out.push('\n');
    out.push_str(&legend_line(series.labels[1], expense, expense_share, plain, false));
    out
}

fn legend_line(label: &str, value: f64, share: f64, plain: bool, positive: bool) -> String {
    let text = format!("{label}: {} ({share:.1}%)", format_money(value));
    if plain {
        text
    } else if positive {
        text.green().to_string()
    } else {
        text.red().to_string()
    }
}

/// Picks a bar width from the current terminal, clamped to sane bounds.
pub fn terminal_bar_width() -> usize {
    crossterm::terminal::size()
        .map(|(cols, _)| (cols as usize).saturating_sub(2).clamp(10, 60))
        .unwrap_or(DEFAULT_BAR_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::CHART_LABELS;

    fn series(income: f64, expense: f64) -> ChartSeries {
        ChartSeries {
            labels: CHART_LABELS,
            values: [income, expense],
        }
    }

    #[test]
    fn empty_series_renders_placeholder() {
        assert_eq!(render(&series(0.0, 0.0), 40, true), "(no data to chart yet)");
    }

    #[test]
    fn bar_splits_proportionally() {
        let rendered = render(&series(1000.0, 1000.0), 40, true);
        let bar = rendered.lines().next().unwrap();
        assert_eq!(bar, format!("[{}|{}]", "█".repeat(20), "█".repeat(20)));
    }

    #[test]
    fn legend_reports_value_and_share() {
        let rendered = render(&series(1000.0, 200.0), 40, true);
        assert!(rendered.contains("Income: ₹1000 (83.3%)"));
        assert!(rendered.contains("Expense: ₹200 (16.7%)"));
    }
}
