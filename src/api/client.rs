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

//! Blocking HTTP client for the article search endpoint.

use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

use crate::{
    api::{ArticleSource, FetchError, wire},
    config::AppConfig,
    model::Article,
};

pub(crate) struct NewsClient {
    client: Client,
    config: AppConfig,
}

impl NewsClient {
    pub(crate) fn new(config: &AppConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                FetchError::Configuration(format!("failed to configure HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

impl ArticleSource for NewsClient {
    fn fetch_articles(&self, key: &str, page: u32) -> Result<Vec<Article>, FetchError> {
        let url = search_url(&self.config, key, page)?;
        debug!(%key, page, "requesting articles");

        // Transport errors carry the request url, which includes the API key.
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Network(e.without_url().to_string()))?;

        let status = response.status();
        let body = response.text().map_err(|e| {
            FetchError::Network(format!("failed to read response body: {}", e.without_url()))
        })?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: wire::error_message(&body),
            });
        }

        wire::parse_articles(&body)
    }
}

/// Builds the search request url for one page of results.
///
/// Parameters are always emitted in the same order, with the search key form
/// url-encoded.
pub(crate) fn search_url(config: &AppConfig, key: &str, page: u32) -> Result<Url, FetchError> {
    let api_key = config
        .api_key
        .as_deref()
        .filter(|k| !k.is_empty())
        .ok_or_else(|| {
            FetchError::Configuration(
                "no API key configured (set api_key in the config file or NEWSUI_API_KEY)"
                    .to_owned(),
            )
        })?;

    let page = page.to_string();

    Url::parse_with_params(
        &config.base_url,
        &[
            ("q", key),
            ("from", config.from_date.as_str()),
            ("sortBy", config.sort_by.as_str()),
            ("language", config.language.as_str()),
            ("page", page.as_str()),
            ("apiKey", api_key),
        ],
    )
    .map_err(|e| FetchError::Configuration(format!("invalid base url {:?}: {e}", config.base_url)))
}
