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

//! Interactive article table widget and state management.
//!
//! This module provides the table component listing the articles of the
//! active search. It separates persistent presentation state
//! ([`ArticleTableState`]) from the transient widget view ([`ArticleTable`])
//! built over the session's article slice for each event or frame.

mod event;
mod render;

pub(crate) use render::draw_more_control;

use ratatui::widgets::TableState;

use crate::model::Article;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ArticleTableAction {
    Dismiss(String),
    LoadMore,
    FocusSearch,
}

pub(crate) struct ArticleTableState {
    pub(crate) table_state: TableState,
    pub(crate) focused: bool,
}

impl ArticleTableState {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::default(),
            focused: true,
        }
    }

    pub(crate) fn as_widget<'a>(&'a mut self, articles: &'a [Article]) -> ArticleTable<'a> {
        ArticleTable {
            articles,
            table_state: &mut self.table_state,
            focused: self.focused,
        }
    }

    /// Moves the highlight back to the top, for when the list is replaced.
    pub(crate) fn reset(&mut self) {
        self.table_state = TableState::default();
    }
}

pub(crate) struct ArticleTable<'a> {
    articles: &'a [Article],
    table_state: &'a mut TableState,
    focused: bool,
}

impl<'a> ArticleTable<'a> {
    /// Keeps the highlight on an existing row after the list has changed.
    fn clamp_selection(&mut self) {
        let len = self.articles.len();
        let selected = match self.table_state.selected() {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };
        self.table_state.select(selected);
    }

    fn selected_article(&self) -> Option<&'a Article> {
        self.table_state.selected().and_then(|i| self.articles.get(i))
    }

    fn goto_next(&mut self) {
        let len = self.articles.len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.articles.len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.articles.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if let Some(last) = self.articles.len().checked_sub(1) {
            self.table_state.select(Some(last));
        }
    }
}
