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

//! News search API access.
//!
//! This module builds article search requests, performs them over HTTP and
//! validates the JSON responses into [`Article`]s.
//!
//! # Organization
//!
//! * [`client`]: The blocking HTTP client and request URL construction.
//! * [`error`]: The failures a fetch can end in.
//! * `wire`: The raw response shapes and their validation.

pub(crate) mod client;
pub(crate) mod error;
mod wire;

pub(crate) use client::NewsClient;
pub(crate) use error::FetchError;

use crate::model::Article;

/// A source of search results, one page at a time.
///
/// Implementations may block; they are only ever called from the task worker.
pub(crate) trait ArticleSource {
    fn fetch_articles(&self, key: &str, page: u32) -> Result<Vec<Article>, FetchError>;
}
