//! End-to-end keyboard scenarios.

mod common;

use common::{detail_body, entry, search_body, Harness, MockResponse};
use crossterm::event::KeyCode;
use popcorn::ui::app::Focus;
use popcorn::ui::title::DEFAULT_TITLE;
use popcorn::watched::{KeyValueStore, StoreError, WatchedStore};
use std::path::PathBuf;
use std::sync::Arc;

fn serve_rush(h: &Harness) {
    h.mock.on_search(
        "rush",
        MockResponse::json(search_body(&[
            ("tt1979320", "Rush", "2013"),
            ("tt0102820", "Rush", "1991"),
        ])),
    );
    h.mock.on_detail(
        "tt1979320",
        MockResponse::json(detail_body("tt1979320", "Rush", "123 min", "8.1")),
    );
}

#[test]
fn rate_add_and_remove_rush() {
    let mut h = Harness::start();
    serve_rush(&h);

    h.type_text("rush");
    assert!(h.pump_until(|app| app.search().result_count() == 2));

    h.press(KeyCode::Down);
    h.press(KeyCode::Enter);
    assert!(h.pump_until(|app| app.detail().detail().is_some()));
    assert_eq!(h.app.document_title(), "Movie | Rush");

    h.press(KeyCode::Char('9'));
    assert_eq!(h.app.detail().user_rating(), 9);
    h.press(KeyCode::Char('a'));

    assert!(!h.app.detail().is_open());
    assert_eq!(h.app.document_title(), DEFAULT_TITLE);
    let entries = h.app.watched().entries().to_vec();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].imdb_id, "tt1979320");
    assert_eq!(entries[0].runtime, 123);
    assert_eq!(entries[0].imdb_rating, 8.1);
    assert_eq!(entries[0].user_rating, 9);
    assert_eq!(h.store.load().unwrap(), entries);

    let summary = h.app.watched().summary();
    assert_eq!(summary.count, 1);
    assert_eq!(summary.avg_user_rating, 9.0);

    h.press(KeyCode::Tab);
    assert_eq!(h.app.focus(), Focus::Watched);
    h.press(KeyCode::Char('d'));
    assert!(h.app.watched().is_empty());
    assert!(h.store.load().unwrap().is_empty());
}

#[test]
fn add_without_rating_does_nothing() {
    let mut h = Harness::start();
    serve_rush(&h);
    h.app.select_movie("tt1979320");
    assert!(h.pump_until(|app| app.detail().detail().is_some()));

    h.press(KeyCode::Char('a'));
    assert!(h.app.detail().is_open());
    assert!(h.app.watched().is_empty());
}

#[test]
fn zero_key_means_ten_stars() {
    let mut h = Harness::start();
    serve_rush(&h);
    h.app.select_movie("tt1979320");
    assert!(h.pump_until(|app| app.detail().detail().is_some()));

    h.press(KeyCode::Char('0'));
    assert_eq!(h.app.detail().user_rating(), 10);
    h.press(KeyCode::Left);
    assert_eq!(h.app.detail().user_rating(), 9);
    h.press(KeyCode::Right);
    h.press(KeyCode::Right);
    assert_eq!(h.app.detail().user_rating(), 10);
}

#[test]
fn enter_outside_inputs_focuses_search_and_clears_query() {
    let mut h = Harness::start();
    serve_rush(&h);
    h.type_text("rush");
    assert!(h.pump_until(|app| app.search().result_count() == 2));

    h.press(KeyCode::Tab);
    h.press(KeyCode::Tab);
    assert_eq!(h.app.focus(), Focus::Watched);
    h.press(KeyCode::Enter);

    assert_eq!(h.app.focus(), Focus::Search);
    assert_eq!(h.app.query(), "");
    assert!(h.app.search().results.is_empty());
}

#[test]
fn enter_in_search_box_keeps_query() {
    let mut h = Harness::start();
    h.type_text("ab");
    h.press(KeyCode::Enter);
    assert_eq!(h.app.focus(), Focus::Search);
    assert_eq!(h.app.query(), "ab");
}

#[test]
fn typing_closes_open_detail() {
    let mut h = Harness::start();
    serve_rush(&h);
    h.app.select_movie("tt1979320");
    assert!(h.pump_until(|app| app.detail().detail().is_some()));

    h.app.set_focus(Focus::Search);
    h.press(KeyCode::Char('x'));
    assert!(!h.app.detail().is_open());
    assert_eq!(h.app.document_title(), DEFAULT_TITLE);
}

#[test]
fn stored_list_is_loaded_at_startup() {
    let store = common::memory_store();
    store
        .save(&[
            entry("tt1", "One", 8.0, 9, 120),
            entry("tt2", "Two", 6.0, 7, 100),
        ])
        .unwrap();
    let h = Harness::with_store(store);

    assert_eq!(h.app.watched().len(), 2);
    let summary = h.app.watched().summary();
    assert_eq!(summary.avg_imdb_rating, 7.0);
    assert_eq!(summary.avg_user_rating, 8.0);
    assert_eq!(summary.avg_runtime, 110.0);
}

#[test]
fn already_watched_movie_cannot_be_added_twice() {
    let store = common::memory_store();
    store.save(&[entry("tt1979320", "Rush", 8.1, 9, 123)]).unwrap();
    let mut h = Harness::with_store(store);
    serve_rush(&h);

    h.app.select_movie("tt1979320");
    assert!(h.pump_until(|app| app.detail().detail().is_some()));
    assert_eq!(h.app.watched_rating_for_open_detail(), Some(9));

    h.press(KeyCode::Char('5'));
    h.press(KeyCode::Char('a'));
    assert_eq!(h.app.watched().len(), 1);
    assert_eq!(h.app.watched().entries()[0].user_rating, 9);
}

struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Io {
            path: PathBuf::from("/read-only/watched.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

#[test]
fn failed_save_keeps_list_and_reports_error() {
    let mut h = Harness::with_store(WatchedStore::new(Arc::new(ReadOnlyStore), "watched"));
    serve_rush(&h);
    h.app.select_movie("tt1979320");
    assert!(h.pump_until(|app| app.detail().detail().is_some()));

    h.press(KeyCode::Char('8'));
    h.press(KeyCode::Char('a'));
    assert_eq!(h.app.watched().len(), 1);
    let error = h.app.last_store_error().expect("store error");
    assert!(error.contains("read-only"));
}

#[test]
fn panel_toggles_and_quit() {
    let mut h = Harness::start();
    h.press_ctrl('r');
    assert!(!h.app.panels().results);
    h.press_ctrl('w');
    assert!(!h.app.panels().watched);
    h.press_ctrl('r');
    assert!(h.app.panels().results);

    assert!(!h.app.should_quit());
    h.press_ctrl('q');
    assert!(h.app.should_quit());
}
