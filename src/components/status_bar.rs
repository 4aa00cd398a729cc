use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::ThemeColors;

/// One-line status bar: context info left, key hints right. A pending
/// one-shot message takes over the whole line until it expires.
pub struct StatusBarWidget<'a> {
    info: &'a str,
    key_hints: &'a str,
    theme: &'a ThemeColors,
    message: Option<(&'a str, bool)>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(info: &'a str, key_hints: &'a str, theme: &'a ThemeColors) -> Self {
        Self {
            info,
            key_hints,
            theme,
            message: None,
        }
    }

    /// Show a one-shot message instead of the info/hints pair.
    pub fn message(mut self, text: &'a str, is_error: bool) -> Self {
        self.message = Some((text, is_error));
        self
    }

    fn render_message(&self, text: &str, is_error: bool, area: Rect, buf: &mut Buffer) {
        let style = if is_error {
            Style::default()
                .bg(self.theme.error_fg)
                .fg(self.theme.status_fg)
        } else {
            Style::default().fg(self.theme.success_fg)
        };
        // Fill the whole line so the background covers it edge to edge.
        let width = area.width as usize;
        let mut display: String = text.chars().take(width).collect();
        let shortfall = width - display.chars().count();
        display.extend(std::iter::repeat(' ').take(shortfall));
        buf.set_line(area.x, area.y, &Line::styled(display, style), area.width);
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        if let Some((text, is_error)) = self.message {
            self.render_message(text, is_error, area, buf);
            return;
        }

        // Hints keep their full width; info gets whatever is left.
        let width = area.width as usize;
        let hints_len = self.key_hints.chars().count();
        let info: String = self
            .info
            .chars()
            .take(width.saturating_sub(hints_len))
            .collect();
        let gap = width
            .saturating_sub(info.chars().count())
            .saturating_sub(hints_len);

        let line = Line::from(vec![
            Span::styled(info, Style::default().fg(self.theme.status_fg)),
            Span::raw(" ".repeat(gap)),
            Span::styled(
                self.key_hints,
                Style::default()
                    .fg(self.theme.dim_fg)
                    .add_modifier(Modifier::DIM),
            ),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::dark_theme;
    use ratatui::style::Color;

    fn render_to_string(widget: StatusBarWidget, width: u16) -> (String, Buffer) {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        let text = (0..width)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect();
        (text, buf)
    }

    #[test]
    fn info_left_hints_right() {
        let theme = dark_theme();
        let (text, _) = render_to_string(
            StatusBarWidget::new("30/120 characters", " /:search  q:quit ", &theme),
            80,
        );
        assert!(text.starts_with("30/120 characters"));
        assert!(text.trim_end().ends_with("q:quit"));
        assert!(text.contains("/:search"));
    }

    #[test]
    fn error_message_takes_over_the_line() {
        let theme = dark_theme();
        let (text, buf) = render_to_string(
            StatusBarWidget::new("info", "hints", &theme)
                .message("✗ Failed to load characters", true),
            80,
        );
        assert!(text.contains("Failed to load characters"));
        assert!(!text.contains("hints"));

        // Error background runs edge to edge, including the padding.
        assert_eq!(buf.cell((0, 0)).unwrap().bg, theme.error_fg);
        assert_eq!(buf.cell((79, 0)).unwrap().bg, theme.error_fg);
    }

    #[test]
    fn success_message_is_green_not_filled() {
        let theme = dark_theme();
        let (_, buf) = render_to_string(
            StatusBarWidget::new("info", "hints", &theme).message("✓ done", false),
            40,
        );
        assert_eq!(buf.cell((0, 0)).unwrap().fg, Color::Rgb(166, 227, 161));
    }

    #[test]
    fn long_message_is_truncated_to_width() {
        let theme = dark_theme();
        let long = "✗ ".to_string() + &"x".repeat(100);
        let (text, _) =
            render_to_string(StatusBarWidget::new("", "", &theme).message(&long, true), 20);
        assert_eq!(text.chars().count(), 20);
    }

    #[test]
    fn zero_area_does_not_panic() {
        let theme = dark_theme();
        let widget = StatusBarWidget::new("info", "hints", &theme);
        let mut buf = Buffer::empty(Rect::new(0, 0, 0, 0));
        widget.render(Rect::new(0, 0, 0, 0), &mut buf);
    }
}
