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

//! Render the search box.
//!
//! This module renders the visual representation of the search box, the
//! current text, the cursor and the submit control.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use crate::{components::SearchInput, theme::Theme};

impl SearchInput {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, search_text: &str, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(12)])
            .split(area);

        let border_colour = if self.focused {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        // Inner width, less the border on either side
        let width = chunks[0].width.saturating_sub(2) as usize;
        let scroll = self.input.visual_scroll(width);

        let text_box = Paragraph::new(search_text)
            .style(Style::default().fg(theme.input_fg))
            .scroll((0, scroll as u16))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_colour))
                    .title(" Search "),
            );
        f.render_widget(text_box, chunks[0]);

        let submit = Paragraph::new("[ Search ]")
            .alignment(Alignment::Center)
            .style(Style::default().fg(border_colour))
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme.border_colour)));
        f.render_widget(submit, chunks[1]);

        if self.focused {
            let cursor_x = chunks[0].x + 1 + self.input.visual_cursor().saturating_sub(scroll) as u16;
            let cursor_y = chunks[0].y + 1;
            f.set_cursor_position((cursor_x, cursor_y));
        }
    }
}
