//! popcorn: search OMDb from the terminal and keep a rated list of the
//! movies you have watched.

pub mod api;
pub mod commands;
pub mod config;
pub mod flow;
pub mod logging;
pub mod shutdown;
pub mod ui;
pub mod watched;
