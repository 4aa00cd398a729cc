use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, InputMode, Screen};
use crate::components::character_list::CharacterListWidget;
use crate::components::detail::DetailWidget;
use crate::components::search_bar::SearchBarWidget;
use crate::components::status_bar::StatusBarWidget;
use crate::theme;

/// Render the application UI.
pub fn render(app: &mut App, frame: &mut Frame) {
    let colors = theme::dark_theme();
    let area = frame.area();

    match app.screen {
        Screen::Characters => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(3),
                    Constraint::Length(1),
                ])
                .split(area);

            let search_focused = app.input_mode == InputMode::Search;
            frame.render_widget(
                SearchBarWidget::new(&app.search_input, &colors, search_focused),
                chunks[0],
            );

            let list = CharacterListWidget::new(
                app.characters.current_items(),
                app.selected_index,
                app.characters.is_loading(),
                app.characters.current_total(),
                &colors,
            )
            .searching(app.characters.is_searching());
            frame.render_widget(list, chunks[1]);

            let info = match app.characters.current_total() {
                Some(total) => format!(
                    "{}/{} characters",
                    app.characters.current_items().len(),
                    total
                ),
                None => format!("{} characters", app.characters.current_items().len()),
            };
            let hints = if search_focused {
                " ↵:done  esc:clear "
            } else {
                " /:search  ↵:open  j/k:move  q:quit "
            };
            let mut status = StatusBarWidget::new(&info, hints, &colors);
            if let Some(msg) = &app.status_message {
                status = status.message(&msg.text, msg.is_error);
            }
            frame.render_widget(status, chunks[2]);
        }
        Screen::Detail => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(6), Constraint::Length(1)])
                .split(area);

            let info;
            if let Some(detail) = &app.detail {
                frame.render_widget(DetailWidget::new(detail, &colors), chunks[0]);
                info = detail.character.name.clone();
            } else {
                info = String::new();
            }

            let hints = " j/k:comics  esc:back  q:quit ";
            let mut status = StatusBarWidget::new(&info, hints, &colors);
            if let Some(msg) = &app.status_message {
                status = status.message(&msg.text, msg.is_error);
            }
            frame.render_widget(status, chunks[1]);
        }
    }
}
