use std::io::{self, Write};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};

/// Raw mode, alternate screen and mouse capture for the lifetime of the guard.
/// Dropping it restores the terminal, including on `?` returns and panics.
pub struct TerminalGuard<W: Write> {
    out: W,
    restored: bool,
}

impl<W: Write> TerminalGuard<W> {
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on, drop undoes raw mode even if the next step fails.
        let mut guard = Self {
            out,
            restored: false,
        };
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }

    /// Undo `enter`. Runs at most once; later calls are no-ops.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        let raw = disable_raw_mode();
        execute!(self.out, DisableMouseCapture, LeaveAlternateScreen)?;
        raw
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

#[cfg(test)]
impl<W: Write> TerminalGuard<W> {
    /// A guard that believes it entered the terminal, without touching raw mode.
    fn armed(out: W) -> Self {
        Self {
            out,
            restored: false,
        }
    }
}
