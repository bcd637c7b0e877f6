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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload blocking HTTP
//! requests from the main UI thread. It provides a dedicated worker loop that
//! translates [`AppTask`] requests into calls on an [`ArticleSource`] and
//! broadcasts the results back to the application via [`AppEvent`]s.
//!
//! Only actions that may block, or may take more than a trivial amount of time
//! to process, should be implemented as tasks. Other actions are likely more
//! suited to events.

mod handlers;
use handlers::*;

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread::{self, JoinHandle},
};
use tracing::debug;

use crate::{api::ArticleSource, events::AppEvent, session::FetchRequest};

#[derive(Debug)]
pub(crate) enum AppTask {
    FetchArticles(FetchRequest),
}

/// Spawns a background thread to process application tasks.
///
/// The worker runs until either the task channel is closed or the application
/// event channel goes away.
///
/// # Arguments
///
/// * `source` - Where articles are fetched from.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker<S>(
    source: S,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) -> JoinHandle<()>
where
    S: ArticleSource + Send + 'static,
{
    thread::spawn(move || {
        let ctx = TaskContext {
            source: &source,
            event_tx: &event_tx,
        };

        while let Ok(task) = task_rx.recv() {
            if let Err(e) = handle_task(task, &ctx) {
                debug!(error = %e, "application event channel closed, stopping task worker");
                break;
            }
        }
    })
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a, S> {
    source: &'a S,
    event_tx: &'a Sender<AppEvent>,
}

fn handle_task<S: ArticleSource>(task: AppTask, ctx: &TaskContext<S>) -> Result<()> {
    match task {
        AppTask::FetchArticles(request) => fetch_articles(ctx, request),
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{Arc, Mutex, mpsc},
        time::Duration,
    };

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{api::FetchError, model::Article};

    const TIMEOUT: Duration = Duration::from_secs(5);

    /// Answers every request from a fixed outcome and records what was asked.
    struct ScriptedSource {
        outcome: Result<Vec<Article>, FetchError>,
        calls: Arc<Mutex<Vec<(String, u32)>>>,
    }

    impl ArticleSource for ScriptedSource {
        fn fetch_articles(&self, key: &str, page: u32) -> Result<Vec<Article>, FetchError> {
            self.calls.lock().unwrap().push((key.to_owned(), page));
            self.outcome.clone()
        }
    }

    fn run_one(outcome: Result<Vec<Article>, FetchError>) -> (AppEvent, Vec<(String, u32)>) {
        let calls = Arc::new(Mutex::new(vec![]));
        let source = ScriptedSource {
            outcome,
            calls: Arc::clone(&calls),
        };
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        let worker = spawn_task_worker(source, task_rx, event_tx);
        task_tx
            .send(AppTask::FetchArticles(FetchRequest {
                key: "rust".to_owned(),
                page: 2,
            }))
            .unwrap();

        let event = event_rx.recv_timeout(TIMEOUT).unwrap();
        drop(task_tx);
        worker.join().unwrap();

        let calls = calls.lock().unwrap().clone();
        (event, calls)
    }

    #[test]
    fn successful_fetch_echoes_the_request_with_articles() {
        let (event, calls) = run_one(Ok(vec![Article::new("u1", "T1")]));

        assert_eq!(calls, vec![("rust".to_owned(), 2)]);
        match event {
            AppEvent::ArticlesReady { request, articles } => {
                assert_eq!(request.key, "rust");
                assert_eq!(request.page, 2);
                assert_eq!(articles, vec![Article::new("u1", "T1")]);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn failed_fetch_is_reported_not_propagated() {
        let (event, _) = run_one(Err(FetchError::Network("refused".to_owned())));

        match event {
            AppEvent::FetchFailed { request, error } => {
                assert_eq!(request.page, 2);
                assert_eq!(error, FetchError::Network("refused".to_owned()));
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn worker_stops_when_the_application_goes_away() {
        let source = ScriptedSource {
            outcome: Ok(vec![]),
            calls: Arc::new(Mutex::new(vec![])),
        };
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        drop(event_rx);

        let worker = spawn_task_worker(source, task_rx, event_tx);
        task_tx
            .send(AppTask::FetchArticles(FetchRequest {
                key: "rust".to_owned(),
                page: 1,
            }))
            .unwrap();

        worker.join().unwrap();
    }
}
