//! Command table and handlers for the shell.

use strsim::levenshtein;

use crate::cli::output;
use crate::cli::shell::{CliMode, ShellContext};
use crate::cli::{chart, forms, views};
use crate::errors::CliError;
use crate::ledger::TransactionKind;
use crate::session::{Applied, Event};
use crate::utils::build_info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Command names with their help lines, in help display order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("add", "Add an entry (form, or: add <description> <amount> [income|expense])"),
    ("list", "Show the transaction table"),
    ("summary", "Show the income/expense/balance cards"),
    ("chart", "Show the income vs expense distribution"),
    ("overview", "Show cards, chart, and table together"),
    ("version", "Show build information"),
    ("help", "List available commands"),
    ("exit", "Leave the shell"),
];

pub fn command_names() -> Vec<String> {
    COMMANDS.iter().map(|(name, _)| (*name).to_string()).collect()
}

pub fn dispatch(
    context: &mut ShellContext,
    command: &str,
    args: &[&str],
) -> Result<LoopControl, CliError> {
    match command {
        "add" => handle_add(context, args)?,
        "list" => handle_list(context),
        "summary" => handle_summary(context),
        "chart" => handle_chart(context),
        "overview" => handle_overview(context),
        "version" => output::info(build_info::describe()),
        "help" => handle_help(),
        "exit" | "quit" => return Ok(LoopControl::Exit),
        other => handle_unknown(other),
    }
    Ok(LoopControl::Continue)
}

fn handle_add(context: &mut ShellContext, args: &[&str]) -> Result<(), CliError> {
    let applied = if args.is_empty() {
        if context.mode == CliMode::Script {
            output::warning("Scripted add needs arguments: add <description> <amount> [kind]");
            return Ok(());
        }
        forms::run_add_form(&mut context.session)?
    } else {
        if args.len() < 2 {
            output::warning("Usage: add <description> <amount> [income|expense]");
            return Ok(());
        }
        if let Some(kind_arg) = args.get(2) {
            match kind_arg.parse::<TransactionKind>() {
                Ok(kind) => {
                    context.session.apply(Event::KindChanged(kind));
                }
                Err(message) => {
                    output::warning(message);
                    return Ok(());
                }
            }
        }
        context
            .session
            .apply(Event::DescriptionChanged(args[0].to_string()));
        context
            .session
            .apply(Event::AmountChanged(args[1].to_string()));
        context.session.apply(Event::Submitted)
    };

    if let Applied::EntryAdded(_) = applied {
        let entry = context
            .session
            .ledger()
            .entries()
            .last()
            .map(|entry| format!("{} entry `{}`", entry.kind, entry.description.trim()))
            .unwrap_or_else(|| "entry".to_string());
        output::success(format!("Recorded {entry}."));
        if context.mode == CliMode::Interactive {
            handle_overview(context);
        }
    }
    // Rejected submissions stay quiet on purpose; the table simply does not
    // grow. `tracing` carries the reason at debug level for diagnostics.
    Ok(())
}

fn handle_list(context: &ShellContext) {
    let plain = output::current_preferences().plain_mode;
    output::info(views::render_entries_table(
        context.session.ledger().entries(),
        plain,
    ));
}

fn handle_summary(context: &ShellContext) {
    let plain = output::current_preferences().plain_mode;
    output::info(views::render_summary_cards(
        &context.session.ledger().summary(),
        plain,
    ));
}

fn handle_chart(context: &ShellContext) {
    let plain = output::current_preferences().plain_mode;
    let width = if plain {
        chart::DEFAULT_BAR_WIDTH
    } else {
        chart::terminal_bar_width()
    };
    output::info(chart::render(
        &context.session.ledger().chart_series(),
        width,
        plain,
    ));
}

fn handle_overview(context: &ShellContext) {
    output::section("Summary");
    handle_summary(context);
    output::section("Overview");
    handle_chart(context);
    output::section("Transactions");
    handle_list(context);
}

fn handle_help() {
    output::info("Available commands:");
    for (name, help) in COMMANDS {
        output::info(format!("  {name:<9} {help}"));
    }
}

fn handle_unknown(command: &str) {
    match closest_command(command) {
        Some(suggestion) => output::warning(format!(
            "Unknown command `{command}`. Did you mean `{suggestion}`?"
        )),
        None => output::warning(format!(
            "Unknown command `{command}`. Type `help` to list commands."
        )),
    }
}

fn closest_command(input: &str) -> Option<&'static str> {
    COMMANDS
        .iter()
        .map(|(name, _)| (*name, levenshtein(input, name)))
        .min_by_key(|(_, distance)| *distance)
        .filter(|(_, distance)| *distance <= 2)
        .map(|(name, _)| name)
}
