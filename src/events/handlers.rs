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

use anyhow::Result;
use tracing::{debug, info};

use crate::{App, Focus, api::FetchError, model::Article, session::FetchRequest};

pub(super) fn handle_articles_ready(app: &mut App, request: &FetchRequest, articles: Vec<Article>) {
    let received = articles.len();
    let added = app.session.apply_results(request, articles);
    debug!(key = %request.key, page = request.page, received, added, "merged articles");
}

pub(super) fn handle_fetch_failed(app: &mut App, request: &FetchRequest, error: FetchError) {
    app.session.apply_failure(request, error);
}

pub(super) fn handle_search_text_changed(app: &mut App, text: String) {
    app.session.set_search_text(text);
}

pub(super) fn handle_search_submitted(app: &mut App) -> Result<()> {
    let request = app.session.submit_search();
    app.article_table.reset();
    app.set_focus(Focus::Results);
    app.dispatch(request)
}

pub(super) fn handle_dismiss(app: &mut App, url: &str) {
    if app.session.dismiss(url) {
        info!(%url, "dismissed article");
    }
}

pub(super) fn handle_request_more(app: &mut App) -> Result<()> {
    let request = app.session.request_more();
    app.dispatch(request)
}

pub(super) fn handle_tick(app: &mut App) {
    app.ticks = app.ticks.wrapping_add(1);
}
