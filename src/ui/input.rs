use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Raw mode delivers Ctrl+C as a key press rather than SIGINT.
    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.toggle_results_panel();
        return;
    }
    if is_ctrl_char(key, 'w') {
        app.toggle_watched_panel();
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        _ => {}
    }

    let consumed = match app.focus() {
        Focus::Search => handle_search_key(app, key),
        Focus::Results => handle_results_key(app, key),
        Focus::Details => handle_details_key(app, key),
        Focus::Watched => handle_watched_key(app, key),
    };
    if consumed {
        return;
    }

    if let Some(action) = app.key_subscriptions().action_for(key.code) {
        app.run_key_action(action);
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(ch) if !has_command_modifier(key) => {
            app.push_query_char(ch);
            true
        }
        KeyCode::Backspace => {
            app.pop_query_char();
            true
        }
        KeyCode::Down => {
            app.set_focus(Focus::Results);
            true
        }
        // Already focused; clearing the query here would eat what was typed.
        KeyCode::Enter => true,
        _ => false,
    }
}

fn handle_results_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up => {
            app.move_result_selection(-1);
            true
        }
        KeyCode::Down => {
            app.move_result_selection(1);
            true
        }
        KeyCode::Enter if app.search().selected_movie().is_some() => {
            app.select_highlighted_movie();
            true
        }
        _ => false,
    }
}

fn handle_details_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(ch) if ch.is_ascii_digit() && !has_command_modifier(key) => {
            let digit = ch.to_digit(10).unwrap_or(0) as u8;
            app.set_rating(if digit == 0 { 10 } else { digit });
            true
        }
        KeyCode::Left => {
            app.adjust_rating(-1);
            true
        }
        KeyCode::Right => {
            app.adjust_rating(1);
            true
        }
        KeyCode::Char('a') if !has_command_modifier(key) => {
            if let Err(err) = app.add_current_to_watched() {
                tracing::debug!("Add to watched list rejected: {}", err);
            }
            true
        }
        _ => false,
    }
}

fn handle_watched_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up => {
            app.move_watched_selection(-1);
            true
        }
        KeyCode::Down => {
            app.move_watched_selection(1);
            true
        }
        KeyCode::Char('d') | KeyCode::Delete if !has_command_modifier(key) => {
            app.delete_selected_watched();
            true
        }
        _ => false,
    }
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
