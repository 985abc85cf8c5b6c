use expense_core::errors::RejectedSubmission;
use expense_core::ledger::TransactionKind;
use expense_core::session::{Applied, Event, Session};

fn submit(session: &mut Session, description: &str, amount: &str, kind: TransactionKind) -> Applied {
    session.apply(Event::DescriptionChanged(description.to_string()));
    session.apply(Event::AmountChanged(amount.to_string()));
    session.apply(Event::KindChanged(kind));
    session.apply(Event::Submitted)
}

#[test]
fn successful_submit_clears_text_drafts_but_keeps_kind() {
    let mut session = Session::new();
    let applied = submit(&mut session, "Salary", "1000", TransactionKind::Income);

    assert!(matches!(applied, Applied::EntryAdded(_)));
    assert_eq!(session.description_draft(), "");
    assert_eq!(session.amount_draft(), "");
    assert_eq!(session.kind_draft(), TransactionKind::Income);
    assert_eq!(session.ledger().entry_count(), 1);
}

#[test]
fn kind_selection_persists_into_the_next_entry() {
    let mut session = Session::new();
    submit(&mut session, "Salary", "1000", TransactionKind::Income);

    // Next submission never touches the kind; it rides on the previous pick.
    session.apply(Event::DescriptionChanged("Bonus".to_string()));
    session.apply(Event::AmountChanged("150".to_string()));
    let applied = session.apply(Event::Submitted);

    assert!(matches!(applied, Applied::EntryAdded(_)));
    assert_eq!(
        session.ledger().entries().last().unwrap().kind,
        TransactionKind::Income
    );
}

#[test]
fn rejected_submit_keeps_every_draft_and_the_ledger() {
    let mut session = Session::new();
    session.apply(Event::DescriptionChanged("Rent".to_string()));
    session.apply(Event::AmountChanged("abc".to_string()));

    let applied = session.apply(Event::Submitted);
    assert_eq!(
        applied,
        Applied::SubmissionRejected(RejectedSubmission::UnusableAmount("abc".to_string()))
    );
    assert_eq!(session.description_draft(), "Rent");
    assert_eq!(session.amount_draft(), "abc");
    assert!(session.ledger().is_empty());
}

#[test]
fn blank_description_is_rejected_before_amount_parsing() {
    let mut session = Session::new();
    session.apply(Event::AmountChanged("50".to_string()));

    let applied = session.apply(Event::Submitted);
    assert_eq!(
        applied,
        Applied::SubmissionRejected(RejectedSubmission::BlankDescription)
    );
    assert!(session.ledger().is_empty());
}

#[test]
fn zero_amount_is_rejected_like_a_missing_amount() {
    let mut session = Session::new();
    let applied = submit(&mut session, "Bonus", "0", TransactionKind::Income);

    assert_eq!(
        applied,
        Applied::SubmissionRejected(RejectedSubmission::UnusableAmount("0".to_string()))
    );
    assert!(session.ledger().is_empty());
    // Drafts survive the rejection untouched.
    assert_eq!(session.description_draft(), "Bonus");
    assert_eq!(session.amount_draft(), "0");
}
