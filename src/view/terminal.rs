//! Raw mode and alternate screen lifetime.

use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use std::io::{self, Write};
use std::sync::OnceLock;

/// Holds the terminal in raw mode on the alternate screen until dropped.
///
/// Dropping restores the terminal, so early returns, errors and unwinding
/// panics all leave a usable shell. A panic hook restores the terminal before
/// the panic message is printed.
#[derive(Debug)]
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns the I/O error of either step; whatever was set up is undone.
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        // created first so a failure below still restores
        let guard = Self { _private: () };
        enable_raw_mode()?;
        io::stdout().execute(EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
    }
}

/// Best-effort restore; errors are ignored since there is nothing left to do.
fn restore() {
    let mut stdout = io::stdout();
    let _ = disable_raw_mode();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(crossterm::cursor::Show);
    let _ = stdout.flush();
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore();
            previous(info);
        }));
    });
}
