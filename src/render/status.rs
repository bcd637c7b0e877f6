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

//! Render the header and status lines.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, Focus};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub(super) fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " newsui",
        Style::default()
            .fg(app.theme.accent_colour)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(key) = app.session.search_key() {
        spans.push(Span::styled(
            format!("  results for \"{key}\""),
            Style::default().fg(app.theme.muted_fg),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub(super) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let session = &app.session;

    let mut status = format!(
        " page {} | {} articles",
        session.current_page(),
        session.articles().len()
    );

    if session.is_loading() {
        let frame = SPINNER[(app.ticks % SPINNER.len() as u64) as usize];
        status.push_str(&format!(" | loading {frame}"));
    }

    let hints = match app.focus {
        Focus::SearchInput => "enter search | esc results | ctrl-c quit ",
        Focus::Results => "/ search | j/k move | d dismiss | m more | q quit ",
    };

    let style = Style::default().fg(app.theme.muted_fg);
    let width = area.width as usize;
    let padding = width.saturating_sub(status.chars().count() + hints.chars().count());

    let line = Line::from(vec![
        Span::styled(status, style),
        Span::raw(" ".repeat(padding)),
        Span::styled(hints, style),
    ]);

    f.render_widget(Paragraph::new(line).alignment(Alignment::Left), area);
}
