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

//! Application configuration.
//!
//! This module manages the application configuration file. The API key is
//! never compiled in: it comes from the configuration file, or from the
//! `NEWSUI_API_KEY` environment variable which takes precedence.

use std::{env, path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "newsui";

const API_KEY_ENV: &str = "NEWSUI_API_KEY";

const DEFAULT_LOG_FILE: &str = "newsui.log";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) base_url: String,
    pub(crate) api_key: Option<String>,
    pub(crate) default_query: String,
    pub(crate) from_date: String,
    pub(crate) sort_by: String,
    pub(crate) language: String,
    pub(crate) timeout_secs: u64,
    pub(crate) log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            base_url: "https://newsapi.org/v2/everything".to_owned(),
            api_key: None,
            default_query: "react".to_owned(),
            from_date: "2018-07-11".to_owned(),
            sort_by: "popularity".to_owned(),
            language: "en".to_owned(),
            timeout_secs: 10,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Applies overrides taken from the process environment.
    pub(crate) fn with_env_overrides(self) -> Self {
        self.with_api_key_override(env::var(API_KEY_ENV).ok())
    }

    /// Replaces the configured API key, ignoring blank overrides.
    pub(crate) fn with_api_key_override(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.map(|k| k.trim().to_owned()).filter(|k| !k.is_empty()) {
            self.api_key = Some(key);
        }
        self
    }

    pub(crate) fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Location of the log file, defaulting to the system temporary directory
    /// since the terminal itself is owned by the user interface.
    pub(crate) fn log_path(&self) -> PathBuf {
        match &self.log_file {
            Some(path) => PathBuf::from(path),
            None => env::temp_dir().join(DEFAULT_LOG_FILE),
        }
    }
}

pub(crate) fn load_config() -> Result<AppConfig, confy::ConfyError> {
    confy::load(CONFIG_NAME, None)
}
