//! Terminal window title, overridden while a detail view is showing.

use std::io;

use crossterm::terminal::SetTitle;
use crossterm::ExecutableCommand;

pub const DEFAULT_TITLE: &str = "usePopcorn";

/// Where titles are written.
pub trait TitleSink: Send {
    fn write_title(&mut self, title: &str);
}

/// Sets the title of the hosting terminal emulator.
#[derive(Debug, Default)]
pub struct TerminalTitle;

impl TitleSink for TerminalTitle {
    fn write_title(&mut self, title: &str) {
        if let Err(err) = io::stdout().execute(SetTitle(title)) {
            tracing::debug!("Failed to set terminal title: {}", err);
        }
    }
}

/// Title override scoped to the lifetime of a detail view.
///
/// `set_title` acquires the override and `restore_title` releases it; both
/// are idempotent, and dropping the value releases any override still held.
pub struct DocumentTitle {
    sink: Box<dyn TitleSink>,
    current: Option<String>,
}

impl DocumentTitle {
    pub fn new(sink: Box<dyn TitleSink>) -> Self {
        Self {
            sink,
            current: None,
        }
    }

    /// Shows `Movie | <title>`.
    pub fn set_title(&mut self, movie_title: &str) {
        let title = format!("Movie | {movie_title}");
        if self.current.as_deref() == Some(title.as_str()) {
            return;
        }
        self.sink.write_title(&title);
        self.current = Some(title);
    }

    /// Puts back the default title if an override is active.
    pub fn restore_title(&mut self) {
        if self.current.take().is_some() {
            self.sink.write_title(DEFAULT_TITLE);
        }
    }

    /// Title currently shown.
    pub fn current(&self) -> &str {
        self.current.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn is_overridden(&self) -> bool {
        self.current.is_some()
    }
}

impl Drop for DocumentTitle {
    fn drop(&mut self) {
        self.restore_title();
    }
}
