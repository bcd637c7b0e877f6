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

//! Cached search results.
//!
//! This module provides the per-query result sets, each accumulating the
//! articles of every page fetched so far for one search key.

use std::collections::{HashMap, HashSet};

use crate::model::Article;

/// The accumulated articles for one search key, through the highest page
/// fetched so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResultPage {
    pub(crate) articles: Vec<Article>,
    pub(crate) page: u32,
}

impl ResultPage {
    fn empty(page: u32) -> Self {
        Self {
            articles: vec![],
            page,
        }
    }

    /// Appends a page of articles, skipping any whose url is already present.
    ///
    /// Returns the number of articles actually added.
    pub(crate) fn merge(&mut self, articles: Vec<Article>, page: u32) -> usize {
        let mut seen: HashSet<String> = self.articles.iter().map(|a| a.url.clone()).collect();
        let before = self.articles.len();

        self.articles
            .extend(articles.into_iter().filter(|a| seen.insert(a.url.clone())));
        self.page = self.page.max(page);

        self.articles.len() - before
    }

    /// Removes the article with the given url, returning whether anything was
    /// removed.
    pub(crate) fn dismiss(&mut self, url: &str) -> bool {
        let before = self.articles.len();
        self.articles.retain(|a| a.url != url);
        self.articles.len() != before
    }
}

/// Result pages keyed by exact search key.
///
/// Entries are never evicted.
#[derive(Debug, Default)]
pub(crate) struct ResultCache {
    pages: HashMap<String, ResultPage>,
}

impl ResultCache {
    pub(crate) fn get(&self, key: &str) -> Option<&ResultPage> {
        self.pages.get(key)
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.pages.contains_key(key)
    }

    pub(crate) fn merge(&mut self, key: &str, articles: Vec<Article>, page: u32) -> usize {
        self.pages
            .entry(key.to_owned())
            .or_insert_with(|| ResultPage::empty(page))
            .merge(articles, page)
    }

    pub(crate) fn dismiss(&mut self, key: &str, url: &str) -> bool {
        self.pages
            .get_mut(key)
            .is_some_and(|page| page.dismiss(url))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn urls(page: &ResultPage) -> Vec<&str> {
        page.articles.iter().map(|a| a.url.as_str()).collect()
    }

    #[test]
    fn next_page_is_appended_in_order() {
        let mut cache = ResultCache::default();
        cache.merge("rust", vec![Article::new("a", "A"), Article::new("b", "B")], 1);
        cache.merge("rust", vec![Article::new("c", "C"), Article::new("d", "D")], 2);

        let page = cache.get("rust").unwrap();
        assert_eq!(urls(page), vec!["a", "b", "c", "d"]);
        assert_eq!(page.page, 2);
    }

    #[test]
    fn overlapping_pages_keep_first_occurrence() {
        let mut cache = ResultCache::default();
        cache.merge("rust", vec![Article::new("a", "A"), Article::new("b", "B")], 1);
        let added = cache.merge(
            "rust",
            vec![Article::new("b", "B again"), Article::new("c", "C")],
            2,
        );

        let page = cache.get("rust").unwrap();
        assert_eq!(added, 1);
        assert_eq!(urls(page), vec!["a", "b", "c"]);
        assert_eq!(page.articles[1].title, "B");
    }

    #[test]
    fn refetching_an_earlier_page_keeps_the_highest_page() {
        let mut cache = ResultCache::default();
        cache.merge("rust", vec![Article::new("a", "A")], 3);
        cache.merge("rust", vec![Article::new("z", "Z")], 1);

        assert_eq!(cache.get("rust").unwrap().page, 3);
    }

    #[test]
    fn keys_do_not_share_results() {
        let mut cache = ResultCache::default();
        cache.merge("rust", vec![Article::new("a", "A")], 1);
        cache.merge("go", vec![Article::new("b", "B")], 1);

        assert_eq!(urls(cache.get("rust").unwrap()), vec!["a"]);
        assert_eq!(urls(cache.get("go").unwrap()), vec!["b"]);
        assert!(!cache.contains("Rust"));
    }

    #[test]
    fn dismiss_preserves_order_of_the_rest() {
        let mut cache = ResultCache::default();
        cache.merge(
            "rust",
            vec![Article::new("a", "A"), Article::new("b", "B"), Article::new("c", "C")],
            1,
        );

        assert!(cache.dismiss("rust", "b"));
        assert_eq!(urls(cache.get("rust").unwrap()), vec!["a", "c"]);
    }

    #[test]
    fn dismiss_of_unknown_key_or_url_is_a_no_op() {
        let mut cache = ResultCache::default();
        cache.merge("rust", vec![Article::new("a", "A")], 1);

        assert!(!cache.dismiss("go", "a"));
        assert!(!cache.dismiss("rust", "missing"));
        assert_eq!(urls(cache.get("rust").unwrap()), vec!["a"]);
    }
}
