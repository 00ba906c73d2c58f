//! Terminal output helpers.
//!
//! Everything goes to stderr: stdout belongs to the launched program.
//! Colors respect NO_COLOR and are dropped when stderr is not a terminal.

use console::style;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print an error message (red).
///
/// Example: `✗ executable not found: psql`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red().for_stderr(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ make sure the secret exists and rbw is unlocked`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!(
            "{} {}",
            style("→").cyan().for_stderr(),
            style(msg).cyan().for_stderr()
        );
    } else {
        eprintln!("→ {}", msg);
    }
}
