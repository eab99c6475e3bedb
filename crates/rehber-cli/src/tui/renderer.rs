//! TUI event loop
//!
//! Sets up the terminal, feeds one event at a time into the tab container and
//! redraws after each. The container owns all state; this module only moves
//! events and frames.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use super::event::{AppEvent, Command, Dimensions};
use super::tabs::TabContainer;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct TuiRenderer {
    container: TabContainer,
}

impl TuiRenderer {
    pub fn new(container: TabContainer) -> Self {
        Self { container }
    }

    /// Run until the container asks to quit.
    ///
    /// The terminal is restored before returning, also when the loop fails.
    pub fn run(mut self) -> Result<()> {
        let guard = TerminalGuard::enter()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

        let result = self.event_loop(&mut terminal);

        terminal.show_cursor()?;
        guard.restore()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        // crossterm only reports changes; the initial size has to be asked for
        let size = terminal.size()?;
        self.container
            .update(AppEvent::Resize(Dimensions::new(size.width, size.height)));

        loop {
            terminal.draw(|f| self.container.render(f))?;

            let event = if event::poll(POLL_INTERVAL)? {
                AppEvent::from(event::read()?)
            } else {
                AppEvent::Tick
            };

            if let Some(Command::Quit) = self.container.update(event) {
                log::info!("quit requested");
                break;
            }
        }

        Ok(())
    }
}

/// Raw mode plus alternate screen, undone on drop
struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }

    /// Restore explicitly so errors are reported instead of swallowed by drop
    fn restore(mut self) -> Result<()> {
        self.active = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
        }
    }
}
