use std::io::{self, Stdout};
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

/// Terminal handle the driver draws frames through.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw-mode guard around one run of the game.
///
/// Construction flips the terminal into raw mode on the alternate screen
/// with the cursor hidden; dropping the guard undoes all of it. Panics also
/// unwind through `Drop`, but `install_panic_hook` additionally restores the
/// terminal before the default hook prints, so the message lands on a
/// readable screen even when the guard is not reachable from the hook.
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    /// Claims the terminal for the game.
    ///
    /// Rolls back whatever part of the setup already succeeded when a later
    /// part fails, so an aborted start never leaves the shell stuck in raw
    /// mode.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(error) => {
                restore();
                Err(error)
            }
        }
    }

    /// The ratatui terminal for drawing frames.
    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore();
    }
}

/// Hands the terminal back to the shell: raw mode off, main screen, cursor
/// shown. Failures are ignored; this runs on teardown paths where nothing
/// useful can be done about them.
pub fn restore() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
}

/// Chains terminal restoration in front of the default panic hook.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore();
        default_hook(panic_info);
    }));
}
