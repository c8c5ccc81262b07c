//! Menu runner — main loop that wires everything together.
//!
//! Loads the project, creates the terminal, runs the TEA loop. Staged
//! side effects (sound cues, URL launches) are drained here after every
//! update so the model itself stays free of them.

use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::time::interval;
use tracing::{error, info, warn};

use crate::audio::Feedback;
use crate::project::Project;

use super::app::MenuApp;
use super::event::MenuMessage;
use super::layout;

/// Run the menu. Blocks until quit.
pub async fn run_tui(project_dir: &Path, columns: Option<u16>, mute: bool) -> anyhow::Result<()> {
    let mut app = MenuApp::new(columns);

    // Load once; a failure is terminal for this run and turns the menu
    // into the fallback screen.
    match Project::load(project_dir).await {
        Ok(project) => {
            info!(tiles = project.tiles.len(), "project loaded");
            app.tiles = project.tiles;
        }
        Err(err) => {
            error!("failed to load project.json: {err}");
            app.load_failed = true;
        }
    }

    let feedback = if mute {
        Feedback::muted()
    } else {
        Feedback::new(project_dir)
    };

    // Setup terminal
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut render_interval = interval(Duration::from_millis(33)); // ~30fps

    loop {
        tokio::select! {
            _ = render_interval.tick() => {
                terminal.draw(|f| layout::draw(f, &mut app))?;
            }
            // Poll crossterm events (non-blocking via tokio::task::spawn_blocking)
            result = tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            }) => {
                match result {
                    Ok(Some(Event::Key(key))) => app.update(MenuMessage::Input(key)),
                    Ok(Some(Event::Mouse(mouse))) => app.update(MenuMessage::Pointer(mouse)),
                    _ => {}
                }
            }
        }

        // Drain staged side effects.
        if let Some(cue) = app.pending_cue.take() {
            feedback.play(cue);
        }
        if let Some(target) = app.pending_open.take() {
            launch(&target);
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    io::stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Open a target in a new browsing context, detached. The launch outcome
/// never reaches the user — the selection already moved on.
fn launch(target: &str) {
    match std::process::Command::new("xdg-open").arg(target).spawn() {
        Ok(_) => info!("opened {target}"),
        Err(err) => warn!("xdg-open {target}: {err}"),
    }
}
