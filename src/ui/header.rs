use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, POPCORN_YELLOW};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const LOGO: &str = "  🍿 usePopcorn";
const SEARCH_PREFIX: &str = "  │  Search: ";
const PLACEHOLDER: &str = "Search movies...";

/// Logo, search box and result count.
pub struct Header<'a> {
    query: &'a str,
    result_count: usize,
}

impl<'a> Header<'a> {
    pub fn new(query: &'a str, result_count: usize) -> Self {
        Self {
            query,
            result_count,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let query_span = if self.query.is_empty() {
            Span::styled(PLACEHOLDER, Style::default().fg(MUTED_TEXT))
        } else {
            Span::styled(self.query.to_string(), text_style)
        };
        let line = Line::from(vec![
            Span::styled(
                LOGO,
                Style::default()
                    .fg(POPCORN_YELLOW)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(SEARCH_PREFIX, separator_style),
            query_span,
            Span::styled("  │  ", separator_style),
            Span::styled(found_label(self.result_count), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }

    /// Column (relative to the header) just past the typed query.
    pub fn cursor_column(&self) -> u16 {
        let prefix = Line::from(vec![
            Span::raw(LOGO),
            Span::raw(SEARCH_PREFIX),
            Span::raw(self.query),
        ]);
        prefix.width() as u16
    }
}

pub fn found_label(count: usize) -> String {
    format!("Found {count} results")
}
