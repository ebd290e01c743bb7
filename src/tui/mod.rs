//! Terminal User Interface.
//!
//! This module implements the dashboard using ratatui and crossterm:
//! the paginated track list, the per-track point table with the two-image
//! comparison workflow, and the overlays around them.

mod app;
mod event;
mod theme;
mod ui;

pub use app::{App, BasinFilter, Overlay, Screen, TextScale};
pub use event::{Action, Event, EventHandler};
pub use theme::Theme;

use crate::config::Config;
use crate::data::TrackRepository;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

pub async fn run(config: Config, track: Option<String>) -> anyhow::Result<()> {
    // Load the repository before touching the terminal so load errors
    // print normally instead of into the alternate screen.
    let repo = TrackRepository::load(config.data.file.as_deref())?;

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, config, repo, track).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: Config,
    repo: TrackRepository,
    track: Option<String>,
) -> anyhow::Result<()> {
    let mut app = App::new(config.clone(), repo);

    // Deep link straight into a track detail view when requested.
    if let Some(ref track_id) = track {
        app.open_track(track_id);
    }

    let mut events = EventHandler::new(config.ui.tick_interval);

    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => app.apply(Action::from(key)),
                Event::Tick => {}
                Event::Resize(_, _) => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
