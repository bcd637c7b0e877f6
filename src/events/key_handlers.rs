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

//! Keyboard routing.
//!
//! Keys go to whichever component has focus first. Only keys a component does
//! not turn into an action fall through to the global bindings, so typing a
//! 'q' into the search box never quits.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    App, Focus,
    components::{ArticleTableAction, SearchInputAction},
    events::{AppEvent, handlers::*},
    model::Article,
};

/// Maps keyboard input to session transitions.
///
/// # Arguments
///
/// * `app` - A mutable reference to the application state.
/// * `key` - The key event captured from the terminal backend.
///
/// # Errors
///
/// Returns an error if a fetch or event fails to send.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    let event = Event::Key(key);

    match app.focus {
        Focus::SearchInput => process_search_input_event(app, &event),
        Focus::Results => process_results_event(app, &event, key),
    }
}

fn process_search_input_event(app: &mut App, event: &Event) -> Result<()> {
    match app.search_input.process_event(event) {
        Some(SearchInputAction::Changed(text)) => handle_search_text_changed(app, text),
        Some(SearchInputAction::Submitted) => handle_search_submitted(app)?,
        Some(SearchInputAction::Leave) => app.set_focus(Focus::Results),
        None => {}
    }

    Ok(())
}

fn process_results_event(app: &mut App, event: &Event, key: KeyEvent) -> Result<()> {
    // The error notice replaces the rows, so the table acts on none of them
    let articles: &[Article] = match app.session.error() {
        Some(_) => &[],
        None => app.session.articles(),
    };

    let action = app.article_table.as_widget(articles).process_event(event);

    match action {
        Some(ArticleTableAction::Dismiss(url)) => handle_dismiss(app, &url),
        Some(ArticleTableAction::LoadMore) => handle_request_more(app)?,
        Some(ArticleTableAction::FocusSearch) => app.set_focus(Focus::SearchInput),
        None => process_global_key_event(app, key)?,
    }

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        _ => {}
    }

    Ok(())
}
