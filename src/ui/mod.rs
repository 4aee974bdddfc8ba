//! Terminal interface: a search bar, a result list and a side box that
//! shows either the open movie or the watched list.

pub mod app;
pub mod detail;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod keymap;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod search;
pub mod terminal_guard;
pub mod theme;
pub mod title;

pub use runtime::run;
