use expense_core::cli::run_cli;

fn main() {
    expense_core::init();

    if let Err(err) = run_cli() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
