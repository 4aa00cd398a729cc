use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::{App, InputMode, Screen};

/// Handle a key event, routed by input mode.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }
    match app.input_mode {
        InputMode::Search => handle_search_key(app, key),
        InputMode::List => handle_list_key(app, key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        _ => match app.screen {
            Screen::Characters => match key.code {
                KeyCode::Char('/') => app.input_mode = InputMode::Search,
                KeyCode::Enter => app.open_detail(),
                _ => {}
            },
            Screen::Detail => match key.code {
                KeyCode::Right | KeyCode::Char('l') => app.select_next(),
                KeyCode::Left | KeyCode::Char('h') => app.select_prev(),
                KeyCode::Esc | KeyCode::Backspace => app.close_detail(),
                _ => {}
            },
        },
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Esc abandons the search: clears the filter and restores browse.
        KeyCode::Esc => {
            app.search_input.clear();
            app.apply_filter();
            app.input_mode = InputMode::List;
        }
        // Enter keeps the filter and hands focus back to the list.
        KeyCode::Enter => app.input_mode = InputMode::List,
        KeyCode::Char(c) => {
            app.search_input.insert_char(c);
            app.apply_filter();
        }
        KeyCode::Backspace => {
            app.search_input.delete_char();
            app.apply_filter();
        }
        KeyCode::Left => app.search_input.move_cursor_left(),
        KeyCode::Right => app.search_input.move_cursor_right(),
        // The result list stays navigable while typing.
        KeyCode::Down => app.select_next(),
        KeyCode::Up => app.select_prev(),
        _ => {}
    }
}

/// Handle a mouse event: the scroll wheel drives list selection.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => app.select_next(),
        MouseEventKind::ScrollUp => app.select_prev(),
        _ => {}
    }
}
