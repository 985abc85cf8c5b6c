//! Interactive add-entry form.
//!
//! The prompts capture raw strings and replay them through the session
//! events; validation happens inside the ledger so a scripted `add` and the
//! form share the exact same acceptance rules.

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::errors::CliError;
use crate::ledger::TransactionKind;
use crate::session::{Applied, Event, Session};

const KIND_CHOICES: [TransactionKind; 2] = [TransactionKind::Income, TransactionKind::Expense];

/// Runs the three-field form and submits the result.
///
/// The kind selector defaults to whatever was chosen last time; only the
/// description and amount fields reset between entries.
pub fn run_add_form(session: &mut Session) -> Result<Applied, CliError> {
    let theme = ColorfulTheme::default();

    let description: String = Input::with_theme(&theme)
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()?;

    let amount: String = Input::with_theme(&theme)
        .with_prompt("Amount")
        .allow_empty(true)
        .interact_text()?;

    let default_index = KIND_CHOICES
        .iter()
        .position(|kind| *kind == session.kind_draft())
        .unwrap_or(0);
    let labels: Vec<String> = KIND_CHOICES.iter().map(ToString::to_string).collect();
    let selected = Select::with_theme(&theme)
        .with_prompt("Type")
        .items(&labels)
        .default(default_index)
        .interact()?;

    session.apply(Event::DescriptionChanged(description));
    session.apply(Event::AmountChanged(amount));
    session.apply(Event::KindChanged(KIND_CHOICES[selected]));
    Ok(session.apply(Event::Submitted))
}
