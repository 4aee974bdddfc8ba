use crate::api::MovieDetail;
use crate::ui::app::{App, Focus};
use crate::ui::detail::DetailState;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_columns, layout_regions};
use crate::ui::search::SearchState;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, FOCUSED_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POPCORN_YELLOW,
    STAR_FILLED, STATUS_ERROR,
};
use crate::watched::WatchedList;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.query(), app.search().result_count());
    frame.render_widget(header_widget.widget(), header);
    if app.focus() == Focus::Search && header.height >= 2 && header.width > 0 {
        let column = header_widget
            .cursor_column()
            .min(header.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(header.x + column, header.y + 1));
    }

    frame.render_widget(Clear, body);
    let (left, right) = body_columns(body);
    draw_results(frame, app, left);
    draw_side(frame, app, right);

    let footer_widget = Footer::new(app.focus(), app.last_store_error());
    frame.render_widget(footer_widget.widget(footer), footer);
}

fn boxed(title: &str, open: bool, focused: bool) -> Block<'static> {
    let marker = if open { "[-]" } else { "[+]" };
    let border = if focused { FOCUSED_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled(
            format!(" {marker} {title} "),
            Style::default().fg(POPCORN_YELLOW),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn spinner(app: &App) -> &'static str {
    SPINNER[app.spinner_tick() as usize % SPINNER.len()]
}

fn draw_results(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let open = app.panels().results;
    let block = boxed("Results", open, app.focus() == Focus::Results);
    if !open {
        frame.render_widget(block, area);
        return;
    }

    let search = app.search();
    if let Some(lines) = results_placeholder(search, spinner(app)) {
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    }

    let items: Vec<ListItem> = search
        .results
        .iter()
        .map(|movie| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    movie.title.clone(),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("  🗓 {}", movie.year),
                    Style::default().fg(MUTED_TEXT),
                )),
            ])
        })
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
    let mut state = ListState::default().with_selected(Some(search.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Loader or error text in place of the result list.
///
/// The loader wins over stale results; an error replaces them.
pub fn results_placeholder(search: &SearchState, spinner: &str) -> Option<Vec<Line<'static>>> {
    if search.is_loading {
        return Some(vec![Line::from(format!(" {spinner} Loading..."))]);
    }
    if let Some(error) = &search.error {
        return Some(vec![Line::from(Span::styled(
            format!(" ⛔️ {error}"),
            Style::default().fg(STATUS_ERROR),
        ))]);
    }
    None
}

fn draw_side(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let open = app.panels().watched;
    let detail = app.detail();
    let (title, focused) = if detail.is_open() {
        ("Details", app.focus() == Focus::Details)
    } else {
        ("Watched", app.focus() == Focus::Watched)
    };
    let block = boxed(title, open, focused);
    if !open {
        frame.render_widget(block, area);
        return;
    }

    if detail.is_open() {
        let lines = detail_lines(
            detail,
            app.config().ui.max_rating,
            app.watched_rating_for_open_detail(),
            spinner(app),
        );
        let widget = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(widget, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }
    let summary_area = Rect {
        height: inner.height.min(3),
        ..inner
    };
    let list_area = Rect {
        y: inner.y + summary_area.height,
        height: inner.height.saturating_sub(summary_area.height),
        ..inner
    };
    frame.render_widget(Paragraph::new(summary_lines(app.watched())), summary_area);

    let items: Vec<ListItem> = app
        .watched()
        .entries()
        .iter()
        .map(|entry| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    entry.title.clone(),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!(
                        "  ⭐ {}  🌟 {}  ⏳ {} min",
                        entry.imdb_rating, entry.user_rating, entry.runtime
                    ),
                    Style::default().fg(MUTED_TEXT),
                )),
            ])
        })
        .collect();
    let list = List::new(items).highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
    let selected = (!app.watched().is_empty()).then_some(app.watched_selection());
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, list_area, &mut state);
}

pub fn summary_lines(watched: &WatchedList) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "MOVIES YOU WATCHED",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(watched.summary().to_string()),
        Line::from(""),
    ]
}

/// Body of the detail pane for every non-closed state.
pub fn detail_lines(
    state: &DetailState,
    max_rating: u8,
    watched_rating: Option<u8>,
    spinner: &str,
) -> Vec<Line<'static>> {
    match state {
        DetailState::Closed => Vec::new(),
        DetailState::Loading { .. } => vec![Line::from(format!(" {spinner} Loading..."))],
        DetailState::Failed { message, .. } => vec![
            Line::from(Span::styled(
                format!(" ⛔️ {message}"),
                Style::default().fg(STATUS_ERROR),
            )),
            Line::from(""),
            Line::from(Span::styled(
                " Esc: Back",
                Style::default().fg(MUTED_TEXT),
            )),
        ],
        DetailState::Loaded {
            detail,
            user_rating,
        } => loaded_lines(detail, *user_rating, max_rating, watched_rating),
    }
}

fn loaded_lines(
    detail: &MovieDetail,
    user_rating: u8,
    max_rating: u8,
    watched_rating: Option<u8>,
) -> Vec<Line<'static>> {
    let muted = Style::default().fg(MUTED_TEXT);
    let mut lines = vec![
        Line::from(Span::styled(
            detail.title.clone(),
            Style::default()
                .fg(POPCORN_YELLOW)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} • {}", detail.released, detail.runtime),
            muted,
        )),
        Line::from(Span::styled(detail.genre.clone(), muted)),
        Line::from(format!("⭐ {} IMDb rating", detail.imdb_rating)),
        Line::from(""),
    ];

    match watched_rating {
        Some(rating) => lines.push(Line::from(format!("You rated this movie: {rating} 🌟"))),
        None => {
            lines.push(stars_line(user_rating, max_rating));
            if user_rating > 0 {
                lines.push(Line::from(Span::styled(
                    "+ Add to list (a)",
                    Style::default()
                        .fg(POPCORN_YELLOW)
                        .add_modifier(Modifier::BOLD),
                )));
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        detail.plot.clone(),
        Style::default().add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(format!("Starring {}", detail.actors)));
    lines.push(Line::from(format!("Directed by {}", detail.director)));
    lines
}

/// `max` stars with the first `rating` filled, followed by `rating/max`.
pub fn stars_line(rating: u8, max: u8) -> Line<'static> {
    let mut spans: Vec<Span> = (1..=max)
        .map(|star| {
            if star <= rating {
                Span::styled("★", Style::default().fg(STAR_FILLED))
            } else {
                Span::styled("☆", Style::default().fg(MUTED_TEXT))
            }
        })
        .collect();
    if rating > 0 {
        spans.push(Span::raw(format!("  {rating}/{max}")));
    }
    Line::from(spans)
}
