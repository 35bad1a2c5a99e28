// trigdrill: terminal quiz game for trigonometric identities

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};

use trigdrill::content::IdentityTable;
use trigdrill::game::{Game, Tuning};
use trigdrill::notation::UnicodeNotation;
use trigdrill::ui::constants::WINDOW_TITLE;
use trigdrill::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build the quiz content up front; a malformed table is fatal here.
    let table = IdentityTable::builtin()?;
    let game = Game::new(table, Tuning::default());

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle(WINDOW_TITLE)
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(game, Box::new(UnicodeNotation));
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
