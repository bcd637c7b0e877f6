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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the news
//! [`Article`] and the per-query result sets built from pages of articles.

pub(crate) mod results;

/// A single news article as returned by the search API.
///
/// Articles are immutable once received, and are identified by their `url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Article {
    pub(crate) url: String,
    pub(crate) title: String,
    pub(crate) author: Option<String>,
    pub(crate) thumbnail_url: Option<String>,
    pub(crate) source_name: Option<String>,
    pub(crate) published_at: Option<String>,
}

#[cfg(test)]
impl Article {
    pub(crate) fn new(url: &str, title: &str) -> Self {
        Self {
            url: url.to_owned(),
            title: title.to_owned(),
            author: None,
            thumbnail_url: None,
            source_name: None,
            published_at: None,
        }
    }
}
