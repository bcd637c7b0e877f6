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

//! Event loop scenarios, driven through [`handle_event`] and rendered into a
//! test backend.

use std::{
    ops::ControlFlow,
    sync::mpsc::{self, Receiver},
};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use ratatui::{Terminal, backend::TestBackend};

use crate::{
    App, Focus,
    api::FetchError,
    config::AppConfig,
    events::{AppEvent, handle_event},
    model::Article,
    render::draw,
    session::FetchRequest,
    tasks::AppTask,
};

fn mounted_app() -> (App, Receiver<AppTask>) {
    let (task_tx, task_rx) = mpsc::channel();
    let mut app = App::new(&AppConfig::default(), task_tx);

    let request = app.session.initialize();
    app.dispatch(request).unwrap();

    (app, task_rx)
}

fn fetches(task_rx: &Receiver<AppTask>) -> Vec<FetchRequest> {
    task_rx
        .try_iter()
        .map(|task| match task {
            AppTask::FetchArticles(request) => request,
        })
        .collect()
}

fn request(key: &str, page: u32) -> FetchRequest {
    FetchRequest {
        key: key.to_owned(),
        page,
    }
}

fn send(app: &mut App, event: AppEvent) {
    assert_eq!(handle_event(app, event).unwrap(), ControlFlow::Continue(()));
}

fn press(app: &mut App, code: KeyCode) {
    send(app, AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Renders the application and returns the screen, one string per line.
fn render(app: &mut App) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn lines_containing<'a>(screen: &'a [String], text: &str) -> Vec<&'a String> {
    screen.iter().filter(|line| line.contains(text)).collect()
}

#[test]
fn mount_fetch_render_and_dismiss() {
    let (mut app, task_rx) = mounted_app();
    assert_eq!(fetches(&task_rx), vec![request("react", 1)]);

    send(
        &mut app,
        AppEvent::ArticlesReady {
            request: request("react", 1),
            articles: vec![Article::new("u1", "T1")],
        },
    );

    let screen = render(&mut app);
    assert_eq!(lines_containing(&screen, "T1").len(), 1);

    press(&mut app, KeyCode::Char('d'));

    assert!(app.session.articles().is_empty());
    let screen = render(&mut app);
    assert!(lines_containing(&screen, "T1").is_empty());
    assert_eq!(lines_containing(&screen, "[ More ]").len(), 1);
}

#[test]
fn failed_fetch_replaces_the_list_with_a_notice() {
    let (mut app, task_rx) = mounted_app();
    send(
        &mut app,
        AppEvent::ArticlesReady {
            request: request("react", 1),
            articles: vec![Article::new("u1", "T1")],
        },
    );

    press(&mut app, KeyCode::Char('m'));
    assert_eq!(fetches(&task_rx), vec![request("react", 1), request("react", 2)]);

    send(
        &mut app,
        AppEvent::FetchFailed {
            request: request("react", 2),
            error: FetchError::Network("connection refused".to_owned()),
        },
    );

    let screen = render(&mut app);
    assert_eq!(lines_containing(&screen, "Something went wrong.").len(), 1);
    assert!(lines_containing(&screen, "T1").is_empty());
    assert_eq!(lines_containing(&screen, "[ More ]").len(), 1);
}

#[test]
fn late_success_for_a_previous_search_keeps_the_notice() {
    let (mut app, task_rx) = mounted_app();
    send(
        &mut app,
        AppEvent::ArticlesReady {
            request: request("react", 1),
            articles: vec![Article::new("u1", "T1")],
        },
    );
    press(&mut app, KeyCode::Char('m'));

    press(&mut app, KeyCode::Char('/'));
    press(&mut app, KeyCode::Char('s'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        fetches(&task_rx),
        vec![request("react", 1), request("react", 2), request("reacts", 1)]
    );

    send(
        &mut app,
        AppEvent::FetchFailed {
            request: request("reacts", 1),
            error: FetchError::Network("connection refused".to_owned()),
        },
    );
    send(
        &mut app,
        AppEvent::ArticlesReady {
            request: request("react", 2),
            articles: vec![Article::new("u2", "T2")],
        },
    );

    assert_eq!(app.session.search_key(), Some("reacts"));
    let screen = render(&mut app);
    assert_eq!(lines_containing(&screen, "Something went wrong.").len(), 1);
}

#[test]
fn rows_hidden_by_the_notice_cannot_be_dismissed() {
    let (mut app, task_rx) = mounted_app();
    send(
        &mut app,
        AppEvent::ArticlesReady {
            request: request("react", 1),
            articles: vec![Article::new("u1", "T1")],
        },
    );
    press(&mut app, KeyCode::Char('m'));
    send(
        &mut app,
        AppEvent::FetchFailed {
            request: request("react", 2),
            error: FetchError::Network("connection refused".to_owned()),
        },
    );

    for code in [KeyCode::Char('j'), KeyCode::Char('G'), KeyCode::Char('d'), KeyCode::Delete] {
        press(&mut app, code);
    }
    assert_eq!(app.session.articles().len(), 1);

    // Load more still works from the notice
    fetches(&task_rx);
    press(&mut app, KeyCode::Char('m'));
    assert_eq!(fetches(&task_rx), vec![request("react", 2)]);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::SearchInput);
}

#[test]
fn search_round_trip_through_the_keyboard() {
    let (mut app, task_rx) = mounted_app();
    fetches(&task_rx);

    press(&mut app, KeyCode::Char('/'));
    assert_eq!(app.focus, Focus::SearchInput);

    // Typing a 'q' into the search box must not quit
    for _ in 0.."react".len() {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "quic");
    assert_eq!(app.session.search_text(), "quic");
    assert_eq!(app.session.search_key(), Some("react"));
    assert!(fetches(&task_rx).is_empty());

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.focus, Focus::Results);
    assert_eq!(fetches(&task_rx), vec![request("quic", 1)]);

    // Back to a key fetched before: served from the cache
    send(
        &mut app,
        AppEvent::ArticlesReady {
            request: request("react", 1),
            articles: vec![Article::new("u1", "T1")],
        },
    );
    press(&mut app, KeyCode::Tab);
    for _ in 0.."quic".len() {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "react");
    press(&mut app, KeyCode::Enter);

    assert!(fetches(&task_rx).is_empty());
    let screen = render(&mut app);
    assert_eq!(lines_containing(&screen, "T1").len(), 1);
}

#[test]
fn late_results_for_a_previous_search_stay_with_it() {
    let (mut app, task_rx) = mounted_app();

    press(&mut app, KeyCode::Char('/'));
    press(&mut app, KeyCode::Char('s'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(fetches(&task_rx), vec![request("react", 1), request("reacts", 1)]);

    send(
        &mut app,
        AppEvent::ArticlesReady {
            request: request("react", 1),
            articles: vec![Article::new("u1", "T1")],
        },
    );

    assert!(app.session.articles().is_empty());
    assert_eq!(app.session.cached("react").unwrap().articles.len(), 1);
}

#[test]
fn quit_from_the_results() {
    let (mut app, _task_rx) = mounted_app();

    press(&mut app, KeyCode::Char('q'));

    let exit = app.event_rx.try_recv().unwrap();
    assert!(matches!(exit, AppEvent::ExitApplication));
    assert_eq!(handle_event(&mut app, exit).unwrap(), ControlFlow::Break(()));
}
