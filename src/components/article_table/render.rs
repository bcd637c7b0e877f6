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

//! UI rendering logic for the article table.
//!
//! This module handles the visual representation of the article list: the
//! column layout, the highlighted row and the detail pane revealing the link
//! and thumbnail of the highlighted article. It also draws the "More" control
//! that sits below the list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::{components::article_table::ArticleTable, render::Render, theme::Theme};

impl Render for ArticleTable<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);

        self.clamp_selection();
        self.draw_table(f, chunks[0], theme);
        self.draw_detail(f, chunks[1], theme);
    }
}

impl ArticleTable<'_> {
    fn draw_table(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.articles.iter().map(|item| {
            Row::new(vec![
                Cell::from(Line::from(item.title.as_str()).style(Style::default().fg(theme.table_title_fg))),
                Cell::from(Line::from(item.author.as_deref().unwrap_or("")).style(Style::default().fg(theme.table_author_fg))),
                Cell::from(Line::from(item.source_name.as_deref().unwrap_or("")).style(Style::default().fg(theme.table_source_fg))),
                Cell::from(Line::from("Dismiss").style(Style::default().fg(theme.muted_fg)).alignment(Alignment::Right)),
            ])
        });

        let highlight = if self.focused {
            Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        };

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(60),
                Constraint::Percentage(25),
                Constraint::Percentage(15),
                Constraint::Length(8),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from("Title"),
                Cell::from("Author"),
                Cell::from("Source"),
                Cell::from(""),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(highlight)
        .block(Block::default());

        f.render_stateful_widget(table, area, &mut *self.table_state);
    }

    /// Reveals the link and thumbnail of the highlighted article.
    fn draw_detail(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let label = Style::default().fg(theme.muted_fg);

        let lines = match self.selected_article() {
            Some(article) => {
                let published = article.published_at.as_deref().unwrap_or("");
                vec![
                    Line::from(vec![
                        Span::styled("Link       ", label),
                        Span::styled(article.url.as_str(), Style::default().fg(theme.link_fg).add_modifier(Modifier::UNDERLINED)),
                        Span::styled(format!("  {published}"), label),
                    ]),
                    Line::from(vec![
                        Span::styled("Thumbnail  ", label),
                        Span::raw(article.thumbnail_url.as_deref().unwrap_or("(none)")),
                    ]),
                ]
            }
            None => vec![],
        };

        let detail = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border_colour)),
        );
        f.render_widget(detail, area);
    }
}

/// Draws the control that loads the next page of the active search.
///
/// It is drawn whatever the state of the list above it, even when that list
/// is empty or replaced by an error notice.
pub(crate) fn draw_more_control(f: &mut Frame, area: Rect, loading: bool, theme: &Theme) {
    let label = if loading { "[ More … ]" } else { "[ More ]" };

    let more = Paragraph::new(Line::from(vec![
        Span::styled(label, Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)),
        Span::styled("  m", Style::default().fg(theme.muted_fg)),
    ]))
    .alignment(Alignment::Center);

    f.render_widget(more, area);
}
