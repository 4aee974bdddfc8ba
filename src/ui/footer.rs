use crate::ui::app::Focus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for the focused box, or the last storage error.
pub struct Footer<'a> {
    focus: Focus,
    error: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(focus: Focus, error: Option<&'a str>) -> Self {
        Self { focus, error }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let (hints, hints_style) = match self.error {
            Some(error) => (
                format!(" Storage error: {error}"),
                Style::default().fg(STATUS_ERROR),
            ),
            None => (hints_for(self.focus).to_string(), text_style),
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let line = Line::from(vec![
            Span::styled(hints, hints_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

fn hints_for(focus: Focus) -> &'static str {
    match focus {
        Focus::Search => " Type to search │ Tab: Next │ Ctrl+R/W: Toggle boxes │ Ctrl+Q: Quit",
        Focus::Results => " ↑/↓: Move │ Enter: Details │ Tab: Next │ Ctrl+Q: Quit",
        Focus::Details => " 1-9,0: Rate │ ←/→: Adjust │ a: Add │ Esc: Back │ Ctrl+Q: Quit",
        Focus::Watched => " ↑/↓: Move │ d: Remove │ Enter: Search │ Ctrl+Q: Quit",
    }
}
