//! Terminal UI for Rewind.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};
pub use input::{digit_position, move_cursor};
pub use ui::draw;

use crate::config::{AppConfig, Theme};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
///
/// The terminal is restored even when setup or the loop fails.
#[instrument(skip(config))]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    let theme = config.theme()?;
    info!("Starting Rewind TUI");

    enable_raw_mode()?;
    let mut terminal = setup_or_restore(setup_terminal, restore_terminal)?;

    let mut app = App::new();
    let res = run_app(&mut terminal, &mut app, &theme);

    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.game().history().len() - 1, "TUI closed");
    res
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Runs `setup`, undoing raw mode with `restore` if it fails.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    setup().or_else(|err| {
        if let Err(restore_err) = restore() {
            error!(error = ?restore_err, "Failed to restore terminal");
        }
        Err(err)
    })
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    theme: &Theme,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app, theme))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
