use std::io::{self, Stdout};

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use tracing::error;

/// Holds the terminal in raw mode on the alternate screen until dropped.
pub struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut guard = Self {
            stdout: io::stdout(),
        };
        guard.stdout.execute(EnterAlternateScreen)?;
        guard.stdout.execute(Hide)?;
        Ok(guard)
    }

    pub fn stdout(&mut self) -> &mut Stdout {
        &mut self.stdout
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.stdout.execute(Show) {
            error!(?err, "failed to show cursor");
        }
        if let Err(err) = self.stdout.execute(LeaveAlternateScreen) {
            error!(?err, "failed to leave alternate screen");
        }
        if let Err(err) = terminal::disable_raw_mode() {
            error!(?err, "failed to disable raw mode");
        }
    }
}

pub fn viewport() -> io::Result<(u16, u16)> {
    terminal::size()
}
