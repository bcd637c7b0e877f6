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

//! Interactive view components.
//!
//! Components hold presentation state only (cursor, highlighted row). They
//! translate terminal events into actions for the application to apply to the
//! session, and draw whatever session state they are handed.

mod article_table;
mod search_input;

pub(crate) use article_table::{ArticleTableAction, ArticleTableState, draw_more_control};
pub(crate) use search_input::{SearchInput, SearchInputAction};
