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

//! Search text entry.
//!
//! This module implements the search box: a text input component that reports
//! every edit with the full new text, and a submit action when typing is
//! finished. The search text itself is owned by the session; the input only
//! keeps the editing cursor.

mod event;
mod render;

use tui_input::Input;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SearchInputAction {
    Changed(String),
    Submitted,
    Leave,
}

pub(crate) struct SearchInput {
    input: Input,
    pub(crate) focused: bool,
}

impl SearchInput {
    pub(crate) fn new(search_text: &str) -> Self {
        Self {
            input: Input::new(search_text.to_owned()),
            focused: false,
        }
    }
}
