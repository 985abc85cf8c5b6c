//! Read-only views over the session: summary cards and the entry table.

use colored::Colorize;

use crate::cli::output::format_money;
use crate::cli::table::{Alignment, Table, TableColumn};
use crate::ledger::{Summary, Transaction, TransactionKind};

/// Renders the three summary cards as one line each.
pub fn render_summary_cards(summary: &Summary, plain: bool) -> String {
    let income = format!("Income   {}", format_money(summary.total_income));
    let expense = format!("Expense  {}", format_money(summary.total_expense));
    let balance = format!("Balance  {}", format_money(summary.balance));
    if plain {
        format!("{income}\n{expense}\n{balance}")
    } else {
        format!(
            "{}\n{}\n{}",
            income.green(),
            expense.red(),
            balance.blue()
        )
    }
}

/// Renders the transaction table, kinds tinted by direction.
pub fn render_entries_table(entries: &[Transaction], plain: bool) -> String {
    if entries.is_empty() {
        return "(no entries yet)".to_string();
    }

    let mut table = Table::new(vec![
        TableColumn::new("Reason", 6, Alignment::Left),
        TableColumn::new("Amount", 6, Alignment::Right),
        TableColumn::new("Type", 7, Alignment::Left),
    ]);

    for entry in entries {
        let kind = if plain {
            entry.kind.to_string()
        } else {
            match entry.kind {
                TransactionKind::Income => entry.kind.to_string().green().to_string(),
                TransactionKind::Expense => entry.kind.to_string().red().to_string(),
            }
        };
        table.push_row(vec![
            entry.description.clone(),
            format_money(entry.amount),
            kind,
        ]);
    }

    table.render()
}
