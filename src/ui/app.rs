use std::sync::mpsc::Sender;

use crossterm::event::KeyCode;
use tokio::runtime::Handle;

use crate::api::{MovieSummary, OmdbClient};
use crate::config::Config;
use crate::flow::{DetailFlow, SearchFlow};
use crate::ui::detail::{DetailIntent, DetailReducer, DetailState};
use crate::ui::events::AppEvent;
use crate::ui::keymap::{KeyAction, KeySubscriptions, SubscriptionId};
use crate::ui::mvi::Reducer;
use crate::ui::search::{SearchIntent, SearchReducer, SearchState};
use crate::ui::title::{DocumentTitle, TitleSink};
use crate::watched::{StoreError, WatchedEntry, WatchedError, WatchedList, WatchedStore};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Search,
    Results,
    /// The right-hand box while a detail view is open.
    Details,
    /// The right-hand box while it shows the watched list.
    Watched,
}

/// Collapsible boxes. Collapsing only hides content; state keeps updating.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PanelVisibility {
    pub results: bool,
    pub watched: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            results: true,
            watched: true,
        }
    }
}

/// Collaborators `App` needs beyond its config.
pub struct AppServices {
    pub client: OmdbClient,
    pub store: WatchedStore,
    pub runtime: Handle,
    pub events: Sender<AppEvent>,
    pub title: Box<dyn TitleSink>,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    panels: PanelVisibility,
    config: Config,
    /// Search box + result list (MVI pattern).
    search: SearchState,
    /// Detail pane (MVI pattern).
    detail: DetailState,
    watched: WatchedList,
    watched_selection: usize,
    store: WatchedStore,
    search_flow: SearchFlow,
    detail_flow: DetailFlow,
    title: DocumentTitle,
    keys: KeySubscriptions,
    /// Esc-to-close, held only while the detail view is open.
    close_detail_key: Option<SubscriptionId>,
    last_store_error: Option<String>,
    spinner_tick: u8,
}

impl App {
    /// Loads the watched list and wires up the flows.
    pub fn new(config: Config, services: AppServices) -> Result<Self, StoreError> {
        let entries = services.store.load()?;
        let watched = WatchedList::from_entries(entries);
        tracing::info!(count = watched.len(), key = services.store.key(), "Loaded watched list");

        let search_flow = SearchFlow::new(
            services.client.clone(),
            services.runtime.clone(),
            services.events.clone(),
            config.search.min_query_len,
        );
        let detail_flow = DetailFlow::new(services.client, services.runtime, services.events);

        // The search box is mounted for the whole session.
        let mut keys = KeySubscriptions::new();
        keys.subscribe(KeyCode::Enter, KeyAction::FocusSearch);

        Ok(Self {
            should_quit: false,
            focus: Focus::Search,
            panels: PanelVisibility::default(),
            config,
            search: SearchState::default(),
            detail: DetailState::default(),
            watched,
            watched_selection: 0,
            store: services.store,
            search_flow,
            detail_flow,
            title: DocumentTitle::new(services.title),
            keys,
            close_detail_key: None,
            last_store_error: None,
            spinner_tick: 0,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = match focus {
            Focus::Details if !self.detail.is_open() => Focus::Watched,
            Focus::Watched if self.detail.is_open() => Focus::Details,
            other => other,
        };
    }

    pub fn focus_next(&mut self) {
        let next = match self.focus {
            Focus::Search => Focus::Results,
            Focus::Results => self.side_focus(),
            Focus::Details | Focus::Watched => Focus::Search,
        };
        self.set_focus(next);
    }

    pub fn focus_prev(&mut self) {
        let prev = match self.focus {
            Focus::Search => self.side_focus(),
            Focus::Results => Focus::Search,
            Focus::Details | Focus::Watched => Focus::Results,
        };
        self.set_focus(prev);
    }

    fn side_focus(&self) -> Focus {
        if self.detail.is_open() {
            Focus::Details
        } else {
            Focus::Watched
        }
    }

    pub fn panels(&self) -> PanelVisibility {
        self.panels
    }

    pub fn toggle_results_panel(&mut self) {
        self.panels.results = !self.panels.results;
    }

    pub fn toggle_watched_panel(&mut self) {
        self.panels.watched = !self.panels.watched;
    }

    pub fn on_tick(&mut self) {
        if self.search.is_loading || self.detail.is_loading() {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    pub fn spinner_tick(&self) -> u8 {
        self.spinner_tick
    }

    // ========================================================================
    // Search (MVI pattern)
    // ========================================================================

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn query(&self) -> &str {
        &self.search.query
    }

    /// Replaces the query text and re-runs the search flow.
    ///
    /// Every query change closes the detail view first.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.search.query {
            return;
        }
        self.close_detail();
        let intent = self.search_flow.query_changed(&query);
        self.dispatch_search(intent);
    }

    pub fn push_query_char(&mut self, ch: char) {
        let mut query = self.search.query.clone();
        query.push(ch);
        self.set_query(query);
    }

    pub fn pop_query_char(&mut self) {
        let mut query = self.search.query.clone();
        if query.pop().is_some() {
            self.set_query(query);
        }
    }

    pub fn on_paste(&mut self, text: &str) {
        if self.focus != Focus::Search {
            return;
        }
        let pasted: String = text.chars().filter(|c| !c.is_control()).collect();
        if pasted.is_empty() {
            return;
        }
        let mut query = self.search.query.clone();
        query.push_str(&pasted);
        self.set_query(query);
    }

    pub fn move_result_selection(&mut self, direction: i32) {
        let intent = if direction.is_negative() {
            SearchIntent::MoveUp
        } else {
            SearchIntent::MoveDown
        };
        self.dispatch_search(intent);
    }

    /// Background search completed.
    pub fn on_search_event(&mut self, intent: SearchIntent) {
        self.dispatch_search(intent);
    }

    pub fn is_search_in_flight(&self) -> bool {
        self.search_flow.is_in_flight()
    }

    fn dispatch_search(&mut self, intent: SearchIntent) {
        dispatch_mvi!(self, search, SearchReducer, intent);
    }

    // ========================================================================
    // Detail (MVI pattern)
    // ========================================================================

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    /// Opens `imdb_id`, or closes the view if it is already showing it.
    pub fn select_movie(&mut self, imdb_id: &str) {
        if self.detail.imdb_id() == Some(imdb_id) {
            self.close_detail();
            return;
        }
        let intent = self.detail_flow.open(imdb_id);
        self.dispatch_detail(intent);
        self.set_focus(Focus::Details);
    }

    pub fn select_highlighted_movie(&mut self) {
        let Some(MovieSummary { imdb_id, .. }) = self.search.selected_movie().cloned() else {
            return;
        };
        self.select_movie(&imdb_id);
    }

    pub fn close_detail(&mut self) {
        if !self.detail.is_open() {
            return;
        }
        let intent = self.detail_flow.close();
        self.dispatch_detail(intent);
        if self.focus == Focus::Details {
            self.focus = Focus::Results;
        }
    }

    /// Stars for the open detail. Out-of-range values are ignored.
    pub fn set_rating(&mut self, rating: u8) {
        if rating == 0 || rating > self.config.ui.max_rating {
            return;
        }
        self.dispatch_detail(DetailIntent::SetRating { rating });
    }

    pub fn adjust_rating(&mut self, delta: i8) {
        let current = self.detail.user_rating() as i16;
        let next = (current + delta as i16).clamp(1, self.config.ui.max_rating as i16);
        self.set_rating(next as u8);
    }

    /// Background lookup completed.
    pub fn on_detail_event(&mut self, intent: DetailIntent) {
        self.dispatch_detail(intent);
    }

    /// Rating given earlier when the open movie is already on the list.
    pub fn watched_rating_for_open_detail(&self) -> Option<u8> {
        let imdb_id = self.detail.imdb_id()?;
        self.watched.get(imdb_id).map(|entry| entry.user_rating)
    }

    /// True when the add action should be offered.
    pub fn can_add_current(&self) -> bool {
        self.detail.detail().is_some()
            && self.detail.user_rating() > 0
            && self.watched_rating_for_open_detail().is_none()
    }

    fn dispatch_detail(&mut self, intent: DetailIntent) {
        dispatch_mvi!(self, detail, DetailReducer, intent);
        self.sync_detail_effects();
    }

    /// Acquires or releases the resources scoped to an open detail view.
    fn sync_detail_effects(&mut self) {
        match self.detail.detail() {
            Some(detail) if !detail.title.is_empty() => self.title.set_title(&detail.title),
            _ => self.title.restore_title(),
        }

        match (self.detail.is_open(), self.close_detail_key) {
            (true, None) => {
                self.close_detail_key =
                    Some(self.keys.subscribe(KeyCode::Esc, KeyAction::CloseDetail));
            }
            (false, Some(id)) => {
                self.keys.unsubscribe(id);
                self.close_detail_key = None;
            }
            _ => {}
        }
    }

    pub fn document_title(&self) -> &str {
        self.title.current()
    }

    pub fn key_subscriptions(&self) -> &KeySubscriptions {
        &self.keys
    }

    /// Runs a shortcut that reached the subscription table.
    pub fn run_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::CloseDetail => self.close_detail(),
            KeyAction::FocusSearch => {
                if self.focus == Focus::Search {
                    return;
                }
                self.focus = Focus::Search;
                self.set_query(String::new());
            }
        }
    }

    // ========================================================================
    // Watched list
    // ========================================================================

    pub fn watched(&self) -> &WatchedList {
        &self.watched
    }

    pub fn watched_selection(&self) -> usize {
        self.watched_selection
    }

    pub fn last_store_error(&self) -> Option<&str> {
        self.last_store_error.as_deref()
    }

    /// Turns the open detail plus pending stars into a watched entry,
    /// persists the list and closes the view.
    pub fn add_current_to_watched(&mut self) -> Result<(), WatchedError> {
        let Some(detail) = self.detail.detail() else {
            return Ok(());
        };
        let entry = WatchedEntry::from_detail(
            detail,
            self.detail.user_rating(),
            self.config.ui.max_rating,
        )?;
        let imdb_id = entry.imdb_id.clone();
        if !self.watched.add(entry) {
            return Err(WatchedError::AlreadyWatched { imdb_id });
        }
        tracing::info!(imdb_id = %imdb_id, "Added to watched list");
        self.persist();
        self.close_detail();
        Ok(())
    }

    /// Removes `imdb_id`; absent ids are ignored.
    pub fn delete_watched(&mut self, imdb_id: &str) {
        if !self.watched.remove(imdb_id) {
            return;
        }
        tracing::info!(imdb_id = %imdb_id, "Removed from watched list");
        self.clamp_watched_selection();
        self.persist();
    }

    pub fn delete_selected_watched(&mut self) {
        let Some(imdb_id) = self
            .watched
            .entries()
            .get(self.watched_selection)
            .map(|entry| entry.imdb_id.clone())
        else {
            return;
        };
        self.delete_watched(&imdb_id);
    }

    pub fn move_watched_selection(&mut self, direction: i32) {
        let len = self.watched.len();
        if len == 0 {
            self.watched_selection = 0;
            return;
        }
        let current = self.watched_selection.min(len - 1);
        self.watched_selection = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    fn clamp_watched_selection(&mut self) {
        let max_index = self.watched.len().saturating_sub(1);
        if self.watched_selection > max_index {
            self.watched_selection = max_index;
        }
    }

    /// Rewrites the store with the full list.
    ///
    /// On failure the in-memory list is kept and the error is shown.
    fn persist(&mut self) {
        match self.store.save(self.watched.entries()) {
            Ok(()) => self.last_store_error = None,
            Err(err) => {
                tracing::error!("Failed to save watched list: {}", err);
                self.last_store_error = Some(err.to_string());
            }
        }
    }
}
