//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_omdb;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parking_lot::Mutex;
use popcorn::api::OmdbClient;
use popcorn::config::Config;
use popcorn::ui::app::{App, AppServices};
use popcorn::ui::events::{AppEvent, EventHandler};
use popcorn::ui::input::handle_key;
use popcorn::ui::title::TitleSink;
use popcorn::watched::{MemoryStore, WatchedEntry, WatchedStore};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub use mock_omdb::{detail_body, search_body, MockOmdb, MockResponse};

pub const EVENT_TIMEOUT: Duration = Duration::from_secs(5);

/// Config pointing at `base_url` with a dummy key.
pub fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config.api.api_key = "test-key".to_string();
    config.api.timeout_seconds = 5;
    config.api.connect_timeout_seconds = 2;
    config
}

pub fn memory_store() -> WatchedStore {
    WatchedStore::new(Arc::new(MemoryStore::new()), "watched")
}

pub fn entry(id: &str, title: &str, imdb: f64, user: u8, runtime: u32) -> WatchedEntry {
    WatchedEntry {
        imdb_id: id.to_string(),
        title: title.to_string(),
        year: "2013".to_string(),
        poster: String::new(),
        imdb_rating: imdb,
        runtime,
        user_rating: user,
    }
}

/// Title sink that remembers every title written.
#[derive(Clone, Default)]
pub struct RecordingTitle(pub Arc<Mutex<Vec<String>>>);

impl RecordingTitle {
    pub fn writes(&self) -> Vec<String> {
        self.0.lock().clone()
    }
}

impl TitleSink for RecordingTitle {
    fn write_title(&mut self, title: &str) {
        self.0.lock().push(title.to_string());
    }
}

// -- App harness --------------------------------------------------------------

/// An `App` wired to a mock OMDb server and a detached event channel.
///
/// Fields drop in order: the app (aborting its fetches), then the server,
/// then the runtime that hosts both.
pub struct Harness {
    pub app: App,
    pub events: EventHandler,
    pub titles: RecordingTitle,
    pub store: WatchedStore,
    pub mock: MockOmdb,
    pub rt: tokio::runtime::Runtime,
}

impl Harness {
    pub fn start() -> Self {
        Self::with_store(memory_store())
    }

    pub fn with_store(store: WatchedStore) -> Self {
        let rt = tokio::runtime::Runtime::new().expect("runtime");
        let mock = rt.block_on(MockOmdb::start());
        let events = EventHandler::detached();
        let titles = RecordingTitle::default();
        let config = test_config(&mock.base_url());
        let services = AppServices {
            client: OmdbClient::new(&config.api).expect("client"),
            store: store.clone(),
            runtime: rt.handle().clone(),
            events: events.sender(),
            title: Box::new(titles.clone()),
        };
        let app = App::new(config, services).expect("app");
        Self {
            app,
            events,
            titles,
            store,
            mock,
            rt,
        }
    }

    pub fn press(&mut self, code: KeyCode) {
        handle_key(&mut self.app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    pub fn press_ctrl(&mut self, ch: char) {
        handle_key(
            &mut self.app,
            KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL),
        );
    }

    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press(KeyCode::Char(ch));
        }
    }

    /// Feeds background events to the app until `done` holds.
    pub fn pump_until(&mut self, mut done: impl FnMut(&App) -> bool) -> bool {
        let deadline = Instant::now() + EVENT_TIMEOUT;
        while !done(&self.app) {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            match self.events.next(remaining) {
                Ok(event) => self.apply(event),
                Err(_) => return done(&self.app),
            }
        }
        true
    }

    /// Feeds every event that arrives within `window`.
    pub fn pump_for(&mut self, window: Duration) {
        let deadline = Instant::now() + window;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return;
            }
            match self.events.next(remaining) {
                Ok(event) => self.apply(event),
                Err(_) => return,
            }
        }
    }

    fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::Search(intent) => self.app.on_search_event(intent),
            AppEvent::Detail(intent) => self.app.on_detail_event(intent),
            AppEvent::Key(key) => handle_key(&mut self.app, key),
            AppEvent::Paste(text) => self.app.on_paste(&text),
            AppEvent::Tick => self.app.on_tick(),
            AppEvent::Resize(_, _) | AppEvent::Shutdown => {}
        }
    }
}
