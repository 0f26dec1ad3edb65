// src/ui/tui.rs
//! Terminal setup, the event loop, and teardown.
//!
//! The screen is drawn on stderr. Stdout carries only the picked path.

use std::{
    io::{self, Stderr},
    panic,
};

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event as CEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::{app::App, config::PickerConfig, picker::PickerOutcome};

/// Run a picker session on the terminal until the user selects or cancels.
pub fn run(config: &PickerConfig) -> Result<PickerOutcome> {
    // Put the terminal back before the default hook prints the panic.
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    if let Err(err) = execute!(io::stderr(), EnterAlternateScreen) {
        let _ = restore_terminal();
        return Err(err.into());
    }

    let result = Terminal::new(CrosstermBackend::new(io::stderr()))
        .map_err(anyhow::Error::from)
        .and_then(|mut terminal| event_loop(&mut terminal, config));

    // Restore the terminal even when the loop failed.
    let restored = restore_terminal();

    let outcome = result?;
    restored?;
    info!("picker finished: {:?}", outcome);
    Ok(outcome)
}

/// Leave raw mode and the alternate screen, and show the cursor.
///
/// Every step runs; the first failure is returned.
fn restore_terminal() -> io::Result<()> {
    first_error([
        disable_raw_mode(),
        execute!(io::stderr(), LeaveAlternateScreen),
        execute!(io::stderr(), Show),
    ])
}

fn first_error<const N: usize>(results: [io::Result<()>; N]) -> io::Result<()> {
    results.into_iter().find(Result::is_err).unwrap_or(Ok(()))
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    config: &PickerConfig,
) -> Result<PickerOutcome> {
    terminal.clear()?;
    let mut app = App::new(config);

    loop {
        terminal.draw(|f| app.draw(f))?;

        // Nothing animates, so block until the next input event.
        if let CEvent::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && app.on_key(key) {
                break;
            }
        }
    }

    Ok(app.outcome().cloned().unwrap_or(PickerOutcome::Cancelled))
}
