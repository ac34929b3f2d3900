//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Restore the terminal on exit, including panics and early returns.
//!
//! Does NOT handle:
//! - Initial terminal setup (done in `main.rs`).
//!
//! Invariants / Assumptions:
//! - Must be created right after raw mode and the alternate screen are entered.
//! - Drop implementation must not panic.

use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

/// Guard that leaves raw mode and the alternate screen when dropped.
pub struct TerminalGuard {
    mouse_captured: bool,
}

impl TerminalGuard {
    /// Create a guard. `no_mouse` must match what was passed to setup so that
    /// mouse capture is only disabled when it was enabled.
    pub fn new(no_mouse: bool) -> Self {
        Self {
            mouse_captured: !no_mouse,
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored; there is nothing left to report them to.
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        if self.mouse_captured {
            let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        } else {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
    }
}
