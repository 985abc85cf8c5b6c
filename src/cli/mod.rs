mod commands;
mod forms;
mod shell;

pub mod chart;
pub mod output;
pub mod table;
pub mod views;

pub use shell::run_cli;
