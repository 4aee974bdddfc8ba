use std::sync::mpsc::Sender;

use tokio::runtime::Handle;

use crate::api::OmdbClient;
use crate::flow::task::LatestTask;
use crate::ui::events::AppEvent;
use crate::ui::search::SearchIntent;

/// True when `query` is long enough to hit the network.
pub fn is_searchable(query: &str, min_query_len: usize) -> bool {
    query.chars().count() >= min_query_len
}

pub struct SearchFlow {
    client: OmdbClient,
    task: LatestTask,
    events: Sender<AppEvent>,
    min_query_len: usize,
}

impl SearchFlow {
    pub fn new(
        client: OmdbClient,
        runtime: Handle,
        events: Sender<AppEvent>,
        min_query_len: usize,
    ) -> Self {
        Self {
            client,
            task: LatestTask::new(runtime),
            events,
            min_query_len,
        }
    }

    /// Reacts to a new query text.
    ///
    /// Always cancels the previous request. Short queries stop there; longer
    /// ones spawn a search whose outcome arrives as `AppEvent::Search`.
    pub fn query_changed(&mut self, query: &str) -> SearchIntent {
        if !is_searchable(query, self.min_query_len) {
            let generation = self.task.cancel();
            return SearchIntent::Cleared {
                query: query.to_string(),
                generation,
            };
        }

        let client = self.client.clone();
        let events = self.events.clone();
        let owned = query.to_string();
        let generation = self.task.spawn(move |generation| async move {
            let intent = match client.search(&owned).await {
                Ok(results) => {
                    tracing::debug!(query = %owned, count = results.len(), "Search completed");
                    SearchIntent::Loaded {
                        generation,
                        results,
                    }
                }
                Err(err) => {
                    tracing::warn!(query = %owned, kind = err.error_type(), "Search failed: {}", err);
                    SearchIntent::Failed {
                        generation,
                        message: err.search_message().to_string(),
                    }
                }
            };
            if events.send(AppEvent::Search(intent)).is_err() {
                tracing::trace!("Search result dropped (receiver gone)");
            }
        });

        SearchIntent::Started {
            query: query.to_string(),
            generation,
        }
    }

    pub fn generation(&self) -> u64 {
        self.task.generation()
    }

    pub fn is_in_flight(&self) -> bool {
        self.task.is_running()
    }
}
