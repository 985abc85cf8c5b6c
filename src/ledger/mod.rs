pub mod ledger;
pub mod transaction;
pub mod validation;

pub use ledger::{ChartSeries, Ledger, Summary, CHART_LABELS};
pub use transaction::{Transaction, TransactionKind};
