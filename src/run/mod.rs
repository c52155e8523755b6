//! Application execution for vimodal.
//!
//! The editor only has an interactive terminal mode; this module checks that
//! one is available and hands off to the event loop.

mod tui;

use std::io::IsTerminal;

pub use tui::run_terminal_mode;

/// Fail early when the editor is not attached to an interactive terminal.
pub fn ensure_terminal() -> Result<(), Box<dyn std::error::Error>> {
    check_terminal(std::io::stdin().is_terminal(), std::io::stdout().is_terminal())?;
    Ok(())
}

fn check_terminal(is_stdin_tty: bool, is_stdout_tty: bool) -> Result<(), String> {
    match (is_stdin_tty, is_stdout_tty) {
        (true, true) => Ok(()),
        (false, _) => Err("stdin is not a terminal; vimodal is interactive only".to_string()),
        (true, false) => Err("stdout is not a terminal; vimodal is interactive only".to_string()),
    }
}
