use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

/// Fixed currency glyph shown in front of every amount.
pub const CURRENCY_GLYPH: &str = "₹";

#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    /// Suppresses color and icon decoration; used by scripted runs and tests.
    pub plain_mode: bool,
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

/// Formats an amount with the currency glyph and natural f64 display.
///
/// No fixed-point formatting: `1000.0` renders as `₹1000`, `12.5` as `₹12.5`.
pub fn format_money(amount: f64) -> String {
    format!("{CURRENCY_GLYPH}{amount}")
}

pub fn info(message: impl fmt::Display) {
    println!("{message}");
}

pub fn success(message: impl fmt::Display) {
    if current_preferences().plain_mode {
        println!("OK: {message}");
    } else {
        println!("{}", format!("✔ {message}").green());
    }
}

pub fn warning(message: impl fmt::Display) {
    if current_preferences().plain_mode {
        println!("WARNING: {message}");
    } else {
        println!("{}", format!("⚠ {message}").yellow());
    }
}

pub fn section(title: impl fmt::Display) {
    if current_preferences().plain_mode {
        println!("\n=== {title} ===");
    } else {
        println!("\n{}", format!("=== {title} ===").bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_uses_natural_float_display() {
        assert_eq!(format_money(1000.0), "₹1000");
        assert_eq!(format_money(12.5), "₹12.5");
        assert_eq!(format_money(-200.0), "₹-200");
    }
}
