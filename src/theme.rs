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

//! Visual styling and color configuration for the TUI.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) muted_fg: Color,
    pub(crate) error_fg: Color,
    pub(crate) input_fg: Color,
    pub(crate) link_fg: Color,

    pub(crate) highlight_bg: Color,
    pub(crate) highlight_fg: Color,

    pub(crate) table_title_fg: Color,
    pub(crate) table_author_fg: Color,
    pub(crate) table_source_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(24, 28, 36),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            muted_fg: Color::Rgb(162, 161, 166),
            error_fg: Color::Rgb(235, 87, 87),
            input_fg: Color::Rgb(255, 255, 255),
            link_fg: Color::Rgb(110, 170, 255),

            highlight_bg: Color::Blue,
            highlight_fg: Color::White,

            table_title_fg: Color::Rgb(255, 255, 255),
            table_author_fg: Color::Rgb(179, 157, 219),
            table_source_fg: Color::Rgb(162, 161, 166),
        }
    }
}
