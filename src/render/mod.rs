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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event. What is drawn depends only on the session and the
//! presentation state of the components.

mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph, Wrap},
};

use crate::{
    App,
    api::FetchError,
    components::draw_more_control,
    render::status::{draw_header, draw_status},
    theme::Theme,
};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// The screen is split, top to bottom, into a header line, the search box,
/// the results (or the error notice), the "More" control and a status line.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the UI
///   to update internal view state (like the highlighted row).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app);

    app.search_input
        .draw(f, outer[1], app.session.search_text(), &app.theme);

    match app.session.error() {
        Some(error) => draw_error_notice(f, outer[2], error, &app.theme),
        None => app
            .article_table
            .as_widget(app.session.articles())
            .draw(f, outer[2], &app.theme),
    }

    draw_more_control(f, outer[3], app.session.is_loading(), &app.theme);

    draw_status(f, outer[4], app);
}

/// Replaces the result list while the session holds a fetch error.
fn draw_error_notice(f: &mut Frame, area: Rect, error: &FetchError, theme: &Theme) {
    let notice = Paragraph::new(vec![
        Line::from(""),
        Line::from("Something went wrong.")
            .style(Style::default().fg(theme.error_fg).add_modifier(Modifier::BOLD)),
        Line::from(error.to_string()).style(Style::default().fg(theme.muted_fg)),
    ])
    .wrap(Wrap { trim: true })
    .centered();

    f.render_widget(notice, area);
}
