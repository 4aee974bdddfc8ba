use std::sync::mpsc::Sender;

use tokio::runtime::Handle;

use crate::api::OmdbClient;
use crate::flow::task::LatestTask;
use crate::ui::detail::DetailIntent;
use crate::ui::events::AppEvent;

pub struct DetailFlow {
    client: OmdbClient,
    task: LatestTask,
    events: Sender<AppEvent>,
}

impl DetailFlow {
    pub fn new(client: OmdbClient, runtime: Handle, events: Sender<AppEvent>) -> Self {
        Self {
            client,
            task: LatestTask::new(runtime),
            events,
        }
    }

    /// Starts a lookup for `imdb_id`, replacing any lookup in flight.
    pub fn open(&mut self, imdb_id: &str) -> DetailIntent {
        let client = self.client.clone();
        let events = self.events.clone();
        let id = imdb_id.to_string();
        let generation = self.task.spawn(move |generation| async move {
            let intent = match client.detail(&id).await {
                Ok(detail) => DetailIntent::Loaded { generation, detail },
                Err(err) => {
                    tracing::warn!(imdb_id = %id, kind = err.error_type(), "Detail lookup failed: {}", err);
                    DetailIntent::Failed {
                        generation,
                        message: err.detail_message().to_string(),
                    }
                }
            };
            if events.send(AppEvent::Detail(intent)).is_err() {
                tracing::trace!("Detail result dropped (receiver gone)");
            }
        });

        DetailIntent::Opened {
            imdb_id: imdb_id.to_string(),
            generation,
        }
    }

    /// Cancels any lookup in flight.
    pub fn close(&mut self) -> DetailIntent {
        self.task.cancel();
        DetailIntent::Closed
    }
}
