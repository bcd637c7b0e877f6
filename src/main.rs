// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # News Search TUI.
//!
//! A terminal-based client for searching and browsing news articles.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background worker performing HTTP requests against the news search API.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, owns the search
//!   session and renders the UI.
//! * A **Background Worker** performs article fetches, so the UI never
//!   blocks on the network.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even when the run fails. Communication between
//! the UI and the worker is handled via `std::sync::mpsc` channels.

mod api;
mod components;
mod config;
mod events;
mod logging;
mod model;
mod render;
mod session;
mod tasks;
mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{info, warn};

use crate::{
    api::NewsClient,
    components::{ArticleTableState, SearchInput},
    config::AppConfig,
    events::{AppEvent, process_events},
    render::draw,
    session::{FetchRequest, Session},
    tasks::AppTask,
    theme::Theme,
};

const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Which component receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    SearchInput,
    Results,
}

/// Application state.
pub(crate) struct App {
    pub(crate) theme: Theme,
    pub(crate) focus: Focus,
    pub(crate) ticks: u64,

    pub(crate) event_tx: Sender<AppEvent>,
    pub(crate) event_rx: Receiver<AppEvent>,

    pub(crate) task_tx: Sender<AppTask>,

    pub(crate) session: Session,

    pub(crate) search_input: SearchInput,
    pub(crate) article_table: ArticleTableState,
}

impl App {
    /// Create a new instance of application state.
    pub(crate) fn new(config: &AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let session = Session::new(config.default_query.as_str());
        let search_input = SearchInput::new(session.search_text());

        Self {
            theme: Theme::default(),
            focus: Focus::Results,
            ticks: 0,
            event_tx,
            event_rx,
            task_tx,
            session,
            search_input,
            article_table: ArticleTableState::new(),
        }
    }

    pub(crate) fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.search_input.focused = focus == Focus::SearchInput;
        self.article_table.focused = focus == Focus::Results;
    }

    /// Hands a fetch produced by a session transition to the task worker.
    pub(crate) fn dispatch(&self, request: Option<FetchRequest>) -> Result<()> {
        if let Some(request) = request {
            info!(key = %request.key, page = request.page, "dispatching article fetch");
            self.task_tx
                .send(AppTask::FetchArticles(request))
                .context("Task worker is no longer running")?;
        }
        Ok(())
    }
}

/// The entry point of the application.
///
/// Loads configuration, starts logging, initialises the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let (config, config_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    let config = config.with_env_overrides();

    // Logging is best-effort, the application works without it
    if let Err(e) = logging::init(&config) {
        eprintln!("{e:#}");
    }
    if let Some(e) = config_error {
        warn!(error = %e, "failed to load configuration, using defaults");
    }
    if config.api_key.is_none() {
        warn!("no API key configured, every fetch will fail");
    }

    let client = NewsClient::new(&config).context("Failed to initialise HTTP client")?;

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(&config, task_tx);

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app, client, task_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], disabling raw mode
/// and leaving the alternate screen. It also ensures the cursor is made
/// visible again.
///
/// This function is designed to be "best-effort" and does not return a result,
/// as it is typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker performing article fetches.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// It then commits the default search, requests its first page, and hands
/// control to [`process_events`] to manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: NewsClient,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    tasks::spawn_task_worker(client, task_rx, app.event_tx.clone());

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "failed to read terminal event");
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    let request = app.session.initialize();
    app.dispatch(request)?;

    terminal.draw(|f| draw(f, app))?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
