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

//! Search session state.
//!
//! [`Session`] is the only authoritative state in the application: the live
//! search text, the committed search key, the cached results for every key
//! searched so far and the last fetch error.
//!
//! Transitions never perform I/O themselves. Those that need articles return
//! a [`FetchRequest`] for the caller to hand to the task worker, and the
//! outcome comes back later through [`Session::apply_results`] or
//! [`Session::apply_failure`] carrying that same request.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::{
    api::FetchError,
    model::{
        Article,
        results::{ResultCache, ResultPage},
    },
};

/// One page of results to fetch for one search key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct FetchRequest {
    pub(crate) key: String,
    pub(crate) page: u32,
}

pub(crate) struct Session {
    search_text: String,
    search_key: Option<String>,
    cache: ResultCache,
    error: Option<FetchError>,
    pending: HashSet<FetchRequest>,
}

impl Session {
    pub(crate) fn new(default_query: impl Into<String>) -> Self {
        Self {
            search_text: default_query.into(),
            search_key: None,
            cache: ResultCache::default(),
            error: None,
            pending: HashSet::new(),
        }
    }

    /// Commits the initial search text and requests its first page.
    pub(crate) fn initialize(&mut self) -> Option<FetchRequest> {
        let key = self.search_text.clone();
        self.search_key = Some(key.clone());
        self.fetch_page(key, 1)
    }

    pub(crate) fn set_search_text(&mut self, text: String) {
        self.search_text = text;
    }

    /// Commits the current search text as the search key.
    ///
    /// Only a key that has never been fetched produces a request, a cached key
    /// is shown straight from the cache.
    pub(crate) fn submit_search(&mut self) -> Option<FetchRequest> {
        let key = self.search_text.clone();
        self.search_key = Some(key.clone());

        if self.cache.contains(&key) {
            if let Some(error) = &self.error {
                warn!(%key, %error, "search key is already cached, not retrying after failure");
            }
            return None;
        }

        self.fetch_page(key, 1)
    }

    /// Requests the page after the highest one fetched for the search key.
    pub(crate) fn request_more(&mut self) -> Option<FetchRequest> {
        let key = self.search_key.clone()?;
        let page = self.current_page() + 1;
        self.fetch_page(key, page)
    }

    /// Records a fetch as in flight, returning `None` if the same page of the
    /// same key is already being fetched.
    pub(crate) fn fetch_page(&mut self, key: String, page: u32) -> Option<FetchRequest> {
        let request = FetchRequest { key, page };

        if !self.pending.insert(request.clone()) {
            debug!(key = %request.key, page, "fetch already in flight");
            return None;
        }

        Some(request)
    }

    /// Merges a completed fetch into the cache entry of the key it was
    /// requested for, whichever key is active now.
    ///
    /// Only a completion for the active key clears the error, a late one for
    /// another key leaves the failure notice in place.
    ///
    /// Returns the number of articles added after de-duplication.
    pub(crate) fn apply_results(&mut self, request: &FetchRequest, articles: Vec<Article>) -> usize {
        self.pending.remove(request);
        if self.search_key.as_deref() == Some(request.key.as_str()) {
            self.error = None;
        }
        self.cache.merge(&request.key, articles, request.page)
    }

    pub(crate) fn apply_failure(&mut self, request: &FetchRequest, error: FetchError) {
        self.pending.remove(request);
        self.error = Some(error);
    }

    /// Removes an article from the active key's results.
    pub(crate) fn dismiss(&mut self, url: &str) -> bool {
        match self.search_key.as_deref() {
            Some(key) => self.cache.dismiss(key, url),
            None => false,
        }
    }

    pub(crate) fn search_text(&self) -> &str {
        &self.search_text
    }

    pub(crate) fn search_key(&self) -> Option<&str> {
        self.search_key.as_deref()
    }

    /// The articles for the active search key, empty if it has none yet.
    pub(crate) fn articles(&self) -> &[Article] {
        self.active_page()
            .map(|page| page.articles.as_slice())
            .unwrap_or_default()
    }

    pub(crate) fn current_page(&self) -> u32 {
        self.active_page().map_or(1, |page| page.page)
    }

    #[cfg(test)]
    pub(crate) fn cached(&self, key: &str) -> Option<&ResultPage> {
        self.cache.get(key)
    }

    pub(crate) fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub(crate) fn is_loading(&self) -> bool {
        !self.pending.is_empty()
    }

    fn active_page(&self) -> Option<&ResultPage> {
        self.search_key.as_deref().and_then(|key| self.cache.get(key))
    }
}
