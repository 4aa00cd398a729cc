use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use crate::api::models::Character;
use crate::theme::ThemeColors;

/// Character list widget: one row per loaded character, a loading footer
/// row while a page is in flight, scrolled to keep the selection visible.
pub struct CharacterListWidget<'a> {
    items: &'a [Character],
    selected_index: usize,
    loading: bool,
    total: Option<usize>,
    searching: bool,
    theme: &'a ThemeColors,
}

impl<'a> CharacterListWidget<'a> {
    pub fn new(
        items: &'a [Character],
        selected_index: usize,
        loading: bool,
        total: Option<usize>,
        theme: &'a ThemeColors,
    ) -> Self {
        Self {
            items,
            selected_index,
            loading,
            total,
            searching: false,
            theme,
        }
    }

    pub fn searching(mut self, searching: bool) -> Self {
        self.searching = searching;
        self
    }

    fn title(&self) -> String {
        let label = if self.searching { "Results" } else { "Characters" };
        match self.total {
            Some(total) => format!(" {} ({}/{}) ", label, self.items.len(), total),
            None => format!(" {} ", label),
        }
    }
}

impl<'a> Widget for CharacterListWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 4 {
            return;
        }

        let block = Block::default()
            .title(self.title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_fg));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let visible = inner.height as usize;

        if self.items.is_empty() && !self.loading {
            let msg = if self.searching {
                "No characters match this name."
            } else {
                "Nothing loaded yet."
            };
            let line = Line::from(Span::styled(msg, Style::default().fg(self.theme.dim_fg)));
            buf.set_line(inner.x, inner.y, &line, inner.width);
            return;
        }

        // Keep the selection in view; reserve the last row for the loading
        // footer when a fetch is in flight.
        let list_rows = if self.loading {
            visible.saturating_sub(1)
        } else {
            visible
        };
        let scroll = if list_rows > 0 && self.selected_index >= list_rows {
            self.selected_index - list_rows + 1
        } else {
            0
        };

        let mut row = inner.y;
        for (i, character) in self.items.iter().skip(scroll).take(list_rows).enumerate() {
            let is_selected = i + scroll == self.selected_index;

            let (marker, name_style) = if is_selected {
                (
                    "▸ ",
                    Style::default()
                        .bg(self.theme.list_selected_bg)
                        .fg(self.theme.list_selected_fg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(self.theme.list_fg))
            };

            let meta = format!(
                "  comics: {}{}",
                character.comics.available,
                if character.has_description() {
                    " · bio"
                } else {
                    ""
                }
            );
            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(self.theme.accent_fg)),
                Span::styled(character.name.as_str(), name_style),
                Span::styled(meta, Style::default().fg(self.theme.list_meta_fg)),
            ]);
            buf.set_line(inner.x, row, &line, inner.width);
            row += 1;
        }

        if self.loading && row < inner.y + inner.height {
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
