use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use crate::app::SearchInput;
use crate::theme::ThemeColors;

/// Search bar widget: a one-line text input with a visible cursor while
/// focused. Every keystroke in it drives a live name-prefix query.
pub struct SearchBarWidget<'a> {
    input: &'a SearchInput,
    theme: &'a ThemeColors,
    focused: bool,
}

impl<'a> SearchBarWidget<'a> {
    pub fn new(input: &'a SearchInput, theme: &'a ThemeColors, focused: bool) -> Self {
        Self {
            input,
            theme,
            focused,
        }
    }
}

impl<'a> Widget for SearchBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 4 {
            return;
        }

        let border_fg = if self.focused {
            self.theme.border_focused_fg
        } else {
            self.theme.border_fg
        };
        let block = Block::default()
            .title(" Search (/) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_fg));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let prompt_style = Style::default()
            .fg(self.theme.search_prompt_fg)
            .add_modifier(Modifier::BOLD);
        let input_style = Style::default().fg(self.theme.search_input_fg);

        if self.input.text.is_empty() && !self.focused {
            let hint = Line::from(vec![
                Span::styled("> ", prompt_style),
                Span::styled(
                    "Type a character name…",
                    Style::default().fg(self.theme.dim_fg),
                ),
            ]);
            buf.set_line(inner.x, inner.y, &hint, inner.width);
            return;
        }

        let query = &self.input.text;
        let cursor_pos = self.input.cursor_position;
        let (before, cursor_char, after) = if cursor_pos < query.len() {
            let next = query[cursor_pos..]
                .chars()
                .next()
                .map(char::len_utf8)
                .unwrap_or(1);
            (
                &query[..cursor_pos],
                &query[cursor_pos..cursor_pos + next],
                &query[cursor_pos + next..],
            )
        } else {
            (query.as_str(), " ", "")
        };

        let mut spans = vec![Span::styled("> ", prompt_style)];
        if self.focused {
            let cursor_style = Style::default()
                .bg(self.theme.search_input_fg)
                .fg(self.theme.list_selected_bg)
                .add_modifier(Modifier::BOLD);
            spans.push(Span::styled(before, input_style));
            spans.push(Span::styled(cursor_char, cursor_style));
            spans.push(Span::styled(after, input_style));
        } else {
            spans.push(Span::styled(query.as_str(), input_style));
        }

        let line = Line::from(spans);
        buf.set_line(inner.x, inner.y, &line, inner.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    #[test]
    fn empty_unfocused_shows_hint() {
        let theme = dark_theme();
        let input = SearchInput::default();
        let widget = SearchBarWidget::new(&input, &theme, false);
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);

        let content = buffer_to_string(&buf, area);
        assert!(content.contains("Search (/)"));
        assert!(content.contains("Type a character name"));
    }

    #[test]
    fn typed_text_is_rendered() {
        let theme = dark_theme();
        let mut input = SearchInput::default();
        for c in "Spider".chars() {
            input.insert_char(c);
        }
        let widget = SearchBarWidget::new(&input, &theme, true);
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);

        let content = buffer_to_string(&buf, area);
        assert!(content.contains("> Spider"));
    }

    #[test]
    fn small_area_no_panic() {
        let theme = dark_theme();
        let input = SearchInput::default();
        let widget = SearchBarWidget::new(&input, &theme, true);
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
    }
}
