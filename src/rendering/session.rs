use crossterm::{
    cursor, execute,
    style::ResetColor,
    terminal::{self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout};
use tracing::{debug, error};

/// Puts the terminal into full-screen drawing mode and restores it on drop,
/// whichever way the program leaves.
pub struct TerminalSession {
    out: Stdout,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            out,
            EnterAlternateScreen,
            DisableLineWrap,
            cursor::Hide,
            Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        debug!("terminal session entered");
        Ok(Self { out })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.out, ResetColor, cursor::Show, EnableLineWrap, LeaveAlternateScreen) {
            error!(?err, "failed to leave alternate screen");
        }
        if let Err(err) = terminal::disable_raw_mode() {
            error!(?err, "failed to disable raw mode");
        }
        debug!("terminal session restored");
    }
}

/// Terminal size as (rows, cols)
pub fn terminal_size() -> io::Result<(usize, usize)> {
    let (cols, rows) = terminal::size()?;
    Ok((rows as usize, cols as usize))
}
