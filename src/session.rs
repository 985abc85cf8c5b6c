//! Session state and the event reducer the presentation layer drives.
//!
//! The shell never mutates the ledger directly: it captures raw field input,
//! wraps it in an [`Event`], and feeds it through [`Session::apply`]. That
//! keeps the whole computational contract of the tracker in one UI-free,
//! independently testable place.

use uuid::Uuid;

use crate::errors::RejectedSubmission;
use crate::ledger::{Ledger, TransactionKind};

/// Presentation-layer events accepted by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    DescriptionChanged(String),
    AmountChanged(String),
    KindChanged(TransactionKind),
    Submitted,
}

/// Outcome of applying one event.
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    /// A field event updated a draft.
    DraftUpdated,
    /// A submission appended the entry with this id and cleared the drafts.
    EntryAdded(Uuid),
    /// A submission was discarded; no state changed.
    SubmissionRejected(RejectedSubmission),
}

/// One tracker session: the ledger plus the transient draft fields.
#[derive(Debug, Clone)]
pub struct Session {
    ledger: Ledger,
    description_draft: String,
    amount_draft: String,
    kind_draft: TransactionKind,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            ledger: Ledger::new(),
            description_draft: String::new(),
            amount_draft: String::new(),
            // The form starts with Expense selected.
            kind_draft: TransactionKind::Expense,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event. The only state transition with any weight is
    /// `Submitted`: on success the description and amount drafts reset to
    /// empty while the selected kind deliberately survives for the next
    /// entry; on rejection every field keeps its value.
    pub fn apply(&mut self, event: Event) -> Applied {
        match event {
            Event::DescriptionChanged(text) => {
                self.description_draft = text;
                Applied::DraftUpdated
            }
            Event::AmountChanged(text) => {
                self.amount_draft = text;
                Applied::DraftUpdated
            }
            Event::KindChanged(kind) => {
                self.kind_draft = kind;
                Applied::DraftUpdated
            }
            Event::Submitted => {
                let result = self.ledger.add_transaction(
                    &self.description_draft,
                    &self.amount_draft,
                    self.kind_draft,
                );
                match result {
                    Ok(id) => {
                        self.description_draft.clear();
                        self.amount_draft.clear();
                        Applied::EntryAdded(id)
                    }
                    Err(reason) => Applied::SubmissionRejected(reason),
                }
            }
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn description_draft(&self) -> &str {
        &self.description_draft
    }

    pub fn amount_draft(&self) -> &str {
        &self.amount_draft
    }

    pub fn kind_draft(&self) -> TransactionKind {
        self.kind_draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_events_overwrite_drafts() {
        let mut session = Session::new();
        session.apply(Event::DescriptionChanged("Salary".into()));
        session.apply(Event::AmountChanged("1000".into()));
        session.apply(Event::KindChanged(TransactionKind::Income));

        assert_eq!(session.description_draft(), "Salary");
        assert_eq!(session.amount_draft(), "1000");
        assert_eq!(session.kind_draft(), TransactionKind::Income);
    }

    #[test]
    fn initial_kind_is_expense() {
        assert_eq!(Session::new().kind_draft(), TransactionKind::Expense);
    }
}
