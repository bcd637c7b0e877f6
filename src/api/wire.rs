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

//! Response bodies as sent by the search API.
//!
//! Every field is optional at this layer; [`parse_articles`] decides which
//! ones are actually required.

use serde::Deserialize;

use crate::{api::FetchError, model::Article};

const MAX_MESSAGE_CHARS: usize = 160;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    articles: Vec<ArticleRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArticleRecord {
    title: Option<String>,
    url: Option<String>,
    author: Option<String>,
    url_to_image: Option<String>,
    source: Option<SourceRecord>,
    published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SourceRecord {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}

/// Parses a successful response body into articles.
///
/// The whole page is rejected if any entry lacks a title or url.
pub(super) fn parse_articles(body: &str) -> Result<Vec<Article>, FetchError> {
    let response: SearchResponse = serde_json::from_str(body)
        .map_err(|e| FetchError::Parse(format!("invalid search response: {e}")))?;

    response
        .articles
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_article(index))
        .collect()
}

/// Extracts a human readable message from an error response body.
pub(super) fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|response| response.message)
        .unwrap_or_else(|| truncate_for_message(body.trim(), MAX_MESSAGE_CHARS))
}

impl ArticleRecord {
    fn into_article(self, index: usize) -> Result<Article, FetchError> {
        let url = non_blank(self.url)
            .ok_or_else(|| FetchError::Parse(format!("article {index} has no url")))?;
        let title = self
            .title
            .ok_or_else(|| FetchError::Parse(format!("article {index} has no title")))?;

        Ok(Article {
            url,
            title,
            author: non_blank(self.author),
            thumbnail_url: non_blank(self.url_to_image),
            source_name: non_blank(self.source.and_then(|s| s.name)),
            published_at: non_blank(self.published_at),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn truncate_for_message(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn parses_full_and_sparse_articles() {
        let body = r#"{
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {
                    "source": { "id": null, "name": "The Verge" },
                    "author": "Jane Doe",
                    "title": "Hooks everywhere",
                    "url": "https://example.com/hooks",
                    "urlToImage": "https://example.com/hooks.png",
                    "publishedAt": "2018-07-12T10:00:00Z"
                },
                { "title": "Bare", "url": "https://example.com/bare", "author": null }
            ]
        }"#;

        let articles = parse_articles(body).unwrap();

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].author.as_deref(), Some("Jane Doe"));
        assert_eq!(
            articles[0].thumbnail_url.as_deref(),
            Some("https://example.com/hooks.png")
        );
        assert_eq!(articles[0].source_name.as_deref(), Some("The Verge"));
        assert_eq!(articles[1], Article::new("https://example.com/bare", "Bare"));
    }

    #[rstest]
    #[case::not_json("<html>oops</html>")]
    #[case::no_articles(r#"{ "status": "ok" }"#)]
    #[case::missing_url(r#"{ "articles": [{ "title": "T" }] }"#)]
    #[case::blank_url(r#"{ "articles": [{ "title": "T", "url": " " }] }"#)]
    #[case::missing_title(r#"{ "articles": [{ "url": "u" }] }"#)]
    fn malformed_bodies_are_parse_errors(#[case] body: &str) {
        let error = parse_articles(body).unwrap_err();

        assert!(matches!(error, FetchError::Parse(_)), "got {error:?}");
    }

    #[test]
    fn error_message_prefers_api_message() {
        let body = r#"{ "status": "error", "code": "apiKeyInvalid", "message": "Your API key is invalid." }"#;

        assert_eq!(error_message(body), "Your API key is invalid.");
        assert_eq!(error_message("  Bad Gateway \n"), "Bad Gateway");
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let body = "x".repeat(500);

        assert_eq!(error_message(&body).chars().count(), MAX_MESSAGE_CHARS + 3);
    }
}
