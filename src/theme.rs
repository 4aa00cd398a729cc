//! Runtime color palette. A single built-in dark palette; theming is
//! deliberately not configurable.

use ratatui::style::Color;

/// All runtime colors used in the UI.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // List panel
    pub list_fg: Color,
    pub list_selected_bg: Color,
    pub list_selected_fg: Color,
    pub list_meta_fg: Color,

    // Search bar
    pub search_prompt_fg: Color,
    pub search_input_fg: Color,

    // Status bar
    pub status_fg: Color,

    // Borders & chrome
    pub border_fg: Color,
    pub border_focused_fg: Color,

    // Semantic colors
    pub error_fg: Color,
    pub success_fg: Color,
    pub accent_fg: Color,
    pub dim_fg: Color,
}

/// The built-in dark palette (Catppuccin Mocha tones).
pub fn dark_theme() -> ThemeColors {
    ThemeColors {
        list_fg: Color::Rgb(205, 214, 244),
        list_selected_bg: Color::Rgb(69, 71, 90),
        list_selected_fg: Color::Rgb(245, 224, 220),
        list_meta_fg: Color::Rgb(147, 153, 178),

        search_prompt_fg: Color::Rgb(137, 180, 250),
        search_input_fg: Color::Rgb(205, 214, 244),

        status_fg: Color::Rgb(205, 214, 244),

        border_fg: Color::Rgb(88, 91, 112),
        border_focused_fg: Color::Rgb(137, 180, 250),

        error_fg: Color::Rgb(243, 139, 168),
        success_fg: Color::Rgb(166, 227, 161),
        accent_fg: Color::Rgb(250, 179, 135),
        dim_fg: Color::Rgb(108, 112, 134),
    }
}
