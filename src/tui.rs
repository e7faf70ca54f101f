// Terminal setup and teardown.
// Raw mode and the alternate screen are undone on drop, so every exit path
// out of `main` (errors included) leaves the shell usable.

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

/// Leave the alternate screen and raw mode, ignoring errors.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Holds the terminal in raw mode on the alternate screen until dropped.
#[must_use]
pub struct TerminalGuard {
    restore: fn(),
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen.
    ///
    /// The guard exists as soon as raw mode is on, so a failure entering the
    /// alternate screen still restores the terminal.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self::with_restore(restore_terminal);
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }

    fn with_restore(restore: fn()) -> Self {
        Self { restore }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        (self.restore)();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    static RESTORES: AtomicUsize = AtomicUsize::new(0);

    fn count_restore() {
        RESTORES.fetch_add(1, Ordering::SeqCst);
    }

    fn fail_after_setup() -> io::Result<()> {
        let _guard = TerminalGuard::with_restore(count_restore);
        Err(io::Error::other("alternate screen unavailable"))
    }

    #[test]
    fn test_restores_on_early_return() {
        let before = RESTORES.load(Ordering::SeqCst);
        assert!(fail_after_setup().is_err());
        assert_eq!(RESTORES.load(Ordering::SeqCst), before + 1);
    }
}
