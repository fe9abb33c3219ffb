use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,
    pub status_running: Color,

    // Branch category colors
    pub category_main: Color,
    pub category_develop: Color,
    pub category_feature: Color,
    pub category_default: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            // Backgrounds
            bg_primary: tailwind::SLATE.c950,
            bg_secondary: tailwind::SLATE.c900,

            // Text
            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c200,
            text_muted: tailwind::SLATE.c400,

            // Accents
            accent_primary: tailwind::CYAN.c400,
            accent_secondary: tailwind::CYAN.c600,

            // Status
            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::YELLOW.c400,
            status_info: tailwind::BLUE.c400,
            status_running: tailwind::YELLOW.c400,

            // Branch categories
            category_main: tailwind::CYAN.c400,
            category_develop: tailwind::PURPLE.c400,
            category_feature: tailwind::GREEN.c400,
            category_default: tailwind::SLATE.c400,

            // Selection
            selected_bg: tailwind::BLUE.c400,
            selected_fg: Color::White,
        }
    }

    // Prebuilt styles for common use cases

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "Tab" in "Tab switch branch")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for section headers in the help panel
    pub fn section_header(&self) -> Style {
        Style::default()
            .fg(self.accent_secondary)
            .add_modifier(Modifier::BOLD)
    }

    /// Background style for floating panels
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_primary)
    }

    /// Style for badges (Latest marker, selected branch tab)
    pub fn badge(&self, bg_color: Color) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(bg_color)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the row under the cursor
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for error messages
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }
}
