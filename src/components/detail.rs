use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::app::DetailState;
use crate::theme::ThemeColors;

/// Character detail widget: the description on top, the incrementally
/// loaded comic appearances below.
pub struct DetailWidget<'a> {
    state: &'a DetailState,
    theme: &'a ThemeColors,
}

impl<'a> DetailWidget<'a> {
    pub fn new(state: &'a DetailState, theme: &'a ThemeColors) -> Self {
        Self { state, theme }
    }

    fn render_description(&self, area: Rect, buf: &mut Buffer) {
        let character = &self.state.character;
        let block = Block::default()
            .title(format!(" {} ", character.name))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_focused_fg));

        let text = if character.has_description() {
            character.description.clone()
        } else {
            "No description available.".to_string()
        };
        let style = if character.has_description() {
            Style::default().fg(self.theme.list_fg)
        } else {
            Style::default().fg(self.theme.dim_fg)
        };

        Paragraph::new(text)
            .style(style)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }

    fn render_comics(&self, area: Rect, buf: &mut Buffer) {
        let comics = &self.state.comics;
        let title = match comics.total() {
            Some(total) => format!(" Comics ({}/{}) ", comics.items().len(), total),
            None => " Comics ".to_string(),
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_fg));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.state.character.comics.available == 0 {
            let line = Line::from(Span::styled(
                format!("{} has no comics.", self.state.character.name),
                Style::default().fg(self.theme.dim_fg),
            ));
            buf.set_line(inner.x, inner.y, &line, inner.width);
            return;
        }

        let visible = inner.height as usize;
        let list_rows = if comics.in_flight() {
            visible.saturating_sub(1)
        } else {
            visible
        };
        let selected = self.state.selected_index;
        let scroll = if list_rows > 0 && selected >= list_rows {
            selected - list_rows + 1
        } else {
            0
        };

        let mut row = inner.y;
        for (i, comic) in comics.items().iter().skip(scroll).take(list_rows).enumerate() {
            let is_selected = i + scroll == selected;
            let style = if is_selected {
                Style::default()
                    .bg(self.theme.list_selected_bg)
                    .fg(self.theme.list_selected_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.list_fg)
            };
            let line = Line::from(vec![
                Span::styled(if is_selected { "▸ " } else { "  " }, Style::default().fg(self.theme.accent_fg)),
                Span::styled(comic.title.as_str(), style),
                Span::styled(
                    format!("  {} page(s)", comic.page_count),
                    Style::default().fg(self.theme.list_meta_fg),
                ),
            ]);
            buf.set_line(inner.x, row, &line, inner.width);
            row += 1;
        }

        if comics.in_flight() {
            let footer = Line::from(Span::styled(
                "⠿ Loading…",
                Style::default()
                    .fg(self.theme.accent_fg)
                    .add_modifier(Modifier::DIM),
            ));
            buf.set_line(inner.x, inner.y + inner.height - 1, &footer, inner.width);
        }
    }
}

impl<'a> Widget for DetailWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 6 || area.width < 10 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(3)])
            .split(area);

        self.render_description(chunks[0], buf);
        self.render_comics(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{Character, Comic, ComicsSummary};
    use crate::paging::cursor::Cursor;
    use crate::paging::Page;
    use crate::theme::dark_theme;

    fn buffer_to_string(buf: &Buffer, area: Rect) -> String {
        let mut s = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                s.push_str(buf.cell((x, y)).unwrap().symbol());
            }
            s.push('\n');
        }
        s
    }

    fn detail_state(description: &str, available: usize) -> DetailState {
        DetailState {
            character: Character {
                id: 7,
                name: "Silver Surfer".to_string(),
                description: description.to_string(),
                comics: ComicsSummary { available },
            },
            comics: Cursor::new(None),
            selected_index: 0,
        }
    }

    #[test]
    fn description_and_loaded_comics_are_rendered() {
        let theme = dark_theme();
        let mut state = detail_state("Herald of Galactus.", 2);
        state.comics.begin(10);
        state.comics.apply(Page {
            items: vec![
                Comic {
                    id: 1,
                    title: "Silver Surfer (1987) #1".to_string(),
                    page_count: 36,
                },
                Comic {
                    id: 2,
                    title: "Annihilation".to_string(),
                    page_count: 48,
                },
            ],
            total: 2,
        });

        let widget = DetailWidget::new(&state, &theme);
        let area = Rect::new(0, 0, 70, 20);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);

        let content = buffer_to_string(&buf, area);
        assert!(content.contains("Silver Surfer"));
        assert!(content.contains("Herald of Galactus."));
        assert!(content.contains("Comics (2/2)"));
        assert!(content.contains("Annihilation"));
        assert!(content.contains("48 page(s)"));
    }

    #[test]
    fn missing_description_shows_placeholder() {
        let theme = dark_theme();
        let state = detail_state("", 1);
        let widget = DetailWidget::new(&state, &theme);
        let area = Rect::new(0, 0, 70, 20);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);

        let content = buffer_to_string(&buf, area);
        assert!(content.contains("No description available."));
    }

    #[test]
    fn character_with_no_comics_shows_notice() {
        let theme = dark_theme();
        let state = detail_state("Bio.", 0);
        let widget = DetailWidget::new(&state, &theme);
        let area = Rect::new(0, 0, 70, 20);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);

        let content = buffer_to_string(&buf, area);
        assert!(content.contains("Silver Surfer has no comics."));
        assert!(!content.contains("Loading…"));
    }

    #[test]
    fn loading_footer_while_comics_in_flight() {
        let theme = dark_theme();
        let mut state = detail_state("Bio.", 5);
        state.comics.begin(10);

        let widget = DetailWidget::new(&state, &theme);
        let area = Rect::new(0, 0, 70, 20);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);

        let content = buffer_to_string(&buf, area);
        assert!(content.contains("Loading…"));
    }

    #[test]
    fn small_area_no_panic() {
        let theme = dark_theme();
        let state = detail_state("Bio.", 1);
        let widget = DetailWidget::new(&state, &theme);
        let area = Rect::new(0, 0, 8, 4);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
    }
}
