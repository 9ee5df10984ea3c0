//! Terminal setup and the blocking event loop.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::app::{App, Flow};
use crate::store::BestScoreStore;
use crate::ui;

/// Takes over the terminal, runs the game until the player quits, then
/// restores the terminal even if the loop failed.
pub fn run_tui<S: BestScoreStore, R: Rng>(app: App<S, R>) -> Result<()> {
    info!("Starting Strictly 2048 TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, wait for one key, apply it. Exactly one command per key press.
#[instrument(skip_all)]
fn run_app<B, S, R>(terminal: &mut Terminal<B>, mut app: App<S, R>) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    S: BestScoreStore,
    R: Rng,
{
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // crossterm reports releases too on some platforms
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if app.handle_key(key.code) == Flow::Quit {
                info!(
                    score = app.session().score(),
                    best = app.session().best_score(),
                    "Player quit"
                );
                return Ok(());
            }
        }
    }
}
