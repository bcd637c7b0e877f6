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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), background worker updates
//! (fetched articles, failed fetches), and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`handle_event`] function applies the event to the
//!    session, and hands any resulting fetch to the task worker.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

mod handlers;
mod key_handlers;
#[cfg(test)]
mod tests;

use handlers::*;
use key_handlers::process_key_event;

use std::{io::Stdout, ops::ControlFlow};

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    api::FetchError,
    model::Article,
    render::draw,
    session::FetchRequest,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    ArticlesReady {
        request: FetchRequest,
        articles: Vec<Article>,
    },
    FetchFailed {
        request: FetchRequest,
        error: FetchError,
    },

    Tick,

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if handle_event(app, event)?.is_break() {
            break;
        }

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

/// Applies a single event to the application state.
///
/// Returns [`ControlFlow::Break`] when the application should exit.
pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<ControlFlow<()>> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::ArticlesReady { request, articles } => {
            handle_articles_ready(app, &request, articles)
        }
        AppEvent::FetchFailed { request, error } => handle_fetch_failed(app, &request, error),
        AppEvent::Tick => handle_tick(app),
        AppEvent::ExitApplication => return Ok(ControlFlow::Break(())),
    }

    Ok(ControlFlow::Continue(()))
}
