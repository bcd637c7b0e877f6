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

use std::time::Instant;

use anyhow::Result;
use tracing::{info, warn};

use crate::{api::ArticleSource, events::AppEvent, session::FetchRequest, tasks::TaskContext};

pub(super) fn fetch_articles<S: ArticleSource>(
    ctx: &TaskContext<S>,
    request: FetchRequest,
) -> Result<()> {
    let started = Instant::now();
    let outcome = ctx.source.fetch_articles(&request.key, request.page);
    let elapsed_ms = started.elapsed().as_millis();

    match outcome {
        Ok(articles) => {
            info!(
                key = %request.key,
                page = request.page,
                count = articles.len(),
                elapsed_ms,
                "articles fetched"
            );
            ctx.event_tx.send(AppEvent::ArticlesReady { request, articles })?;
        }
        Err(error) => {
            warn!(
                key = %request.key,
                page = request.page,
                elapsed_ms,
                %error,
                "article fetch failed"
            );
            ctx.event_tx.send(AppEvent::FetchFailed { request, error })?;
        }
    }

    Ok(())
}
