//! Shared CLI output helpers.
//!
//! Confirmations go to stdout, errors and hints to stderr. Colors are
//! dropped when `NO_COLOR` is set or the stream is not a terminal.

use console::{style, Term};

fn colors_enabled(term: &Term) -> bool {
    std::env::var_os("NO_COLOR").is_none() && term.features().colors_supported()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ Updated FIREBASE_ENV_FILE`
pub fn success(msg: &str) {
    if colors_enabled(&Term::stdout()) {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ missing env file: .env.firebase`
pub fn error(msg: &str) {
    if colors_enabled(&Term::stderr()) {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
pub fn hint(msg: &str) {
    if colors_enabled(&Term::stderr()) {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Confirmation line for one uploaded variable.
pub fn updated(name: &str) {
    success(&format!("Updated {}", name));
}
