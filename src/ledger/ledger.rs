use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::RejectedSubmission;

use super::transaction::{Transaction, TransactionKind};
use super::validation::{is_non_empty_text, parse_non_zero_amount};

/// Fixed category labels handed to the chart renderer, in series order.
pub const CHART_LABELS: [&str; 2] = ["Income", "Expense"];

/// Append-only collection of entries for one tracker session.
///
/// Aggregates are never stored; `summary` and `chart_series` recompute from
/// `entries` on every read so they cannot drift from the entry list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    entries: Vec<Transaction>,
}

/// Derived totals for the three summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

/// Ordered two-value series for the distribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: [&'static str; 2],
    pub values: [f64; 2],
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the raw drafts and appends a new entry on success.
    ///
    /// Rejections are deliberately quiet: the caller receives the reason for
    /// diagnostics and tests, but nothing is surfaced to the user and the
    /// entry list is left untouched.
    pub fn add_transaction(
        &mut self,
        description_draft: &str,
        amount_draft: &str,
        kind: TransactionKind,
    ) -> Result<Uuid, RejectedSubmission> {
        if !is_non_empty_text(description_draft) {
            tracing::debug!("submission discarded: blank description");
            return Err(RejectedSubmission::BlankDescription);
        }
        let Some(amount) = parse_non_zero_amount(amount_draft) else {
            tracing::debug!(draft = %amount_draft, "submission discarded: unusable amount");
            return Err(RejectedSubmission::UnusableAmount(amount_draft.to_string()));
        };

        // Description is stored verbatim, whitespace and all.
        let transaction = Transaction::new(description_draft, amount, kind);
        let id = transaction.id;
        self.entries.push(transaction);
        tracing::debug!(%id, count = self.entries.len(), "entry appended");
        Ok(id)
    }

    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recomputes the three totals from scratch. `{0, 0, 0}` when empty.
    pub fn summary(&self) -> Summary {
        let total_income = self.sum_by_kind(TransactionKind::Income);
        let total_expense = self.sum_by_kind(TransactionKind::Expense);
        Summary {
            total_income,
            total_expense,
            balance: total_income - total_expense,
        }
    }

    /// Projects the totals into the fixed-label series the chart consumes.
    pub fn chart_series(&self) -> ChartSeries {
        let summary = self.summary();
        ChartSeries {
            labels: CHART_LABELS,
            values: [summary.total_income, summary.total_expense],
        }
    }

    fn sum_by_kind(&self, kind: TransactionKind) -> f64 {
        self.entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .map(|entry| entry.amount)
            .sum()
    }
}
