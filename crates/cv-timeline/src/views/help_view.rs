//! Key Bindings Help Panel
//!
//! Displays all available keybindings grouped by category as a centered
//! floating window over a dimmed screen.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::state::AppState;
use crate::theme::Theme;

/// Left padding for content
const LEFT_PADDING: &str = "  ";

/// Key bindings, grouped by category
const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "General",
        &[
            ("q / Esc", "Quit"),
            ("Ctrl+C", "Quit"),
            ("?", "Toggle this panel"),
        ],
    ),
    (
        "Branches",
        &[("Tab", "Switch to the next branch"), ("r", "Reload revisions")],
    ),
    (
        "Timeline",
        &[
            ("j / ↓", "Next revision"),
            ("k / ↑", "Previous revision"),
            ("g / G", "Jump to newest / oldest"),
            ("Enter", "Show the selected revision"),
        ],
    ),
    (
        "Document",
        &[
            ("m", "Toggle image / native mode"),
            ("h / ←", "Previous page"),
            ("l / →", "Next page"),
            ("+ / -", "Zoom in / out"),
            ("o", "Open revision in the browser"),
        ],
    ),
];

/// Render the key bindings panel
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let lines = build_content_lines(theme);

    // Centered panel, 60% wide, sized to the content
    let panel_width = (area.width * 60) / 100;
    let panel_height = (lines.len() as u16 + 2).min(area.height * 90 / 100);

    let panel_area = Rect {
        x: area.x + (area.width - panel_width) / 2,
        y: area.y + (area.height.saturating_sub(panel_height)) / 2,
        width: panel_width,
        height: panel_height,
    };

    // Render dimmed overlay over the entire screen
    let overlay = Block::default().style(
        Style::default()
            .bg(Color::Black)
            .add_modifier(Modifier::DIM),
    );
    f.render_widget(overlay, area);

    // Clear the panel area
    f.render_widget(Clear, panel_area);

    let footer_hint = Line::from(vec![
        Span::styled(" ? ", theme.key_hint().bold()),
        Span::styled("close ", theme.muted()),
    ]);

    let block = Block::default()
        .title(" Key Bindings ")
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title())
        .title_alignment(Alignment::Center)
        .title_bottom(footer_hint);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(theme.panel_background());

    f.render_widget(paragraph, panel_area);
}

/// Build all content lines for the panel
fn build_content_lines<'a>(theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![Line::default()];

    for (category, bindings) in BINDINGS {
        // Category header with padding
        lines.push(Line::from(vec![
            Span::raw(LEFT_PADDING),
            Span::styled(*category, theme.section_header()),
        ]));

        // Separator line with padding
        let separator = "─".repeat(category.len());
        lines.push(Line::from(vec![
            Span::raw(LEFT_PADDING),
            Span::styled(separator, theme.muted()),
        ]));

        // Binding rows with padding
        for (keys, description) in *bindings {
            lines.push(Line::from(vec![
                Span::raw(LEFT_PADDING),
                Span::styled(format!("{:<16}", keys), theme.key_hint()),
                Span::styled(*description, theme.key_description()),
            ]));
        }

        // Empty line after section
        lines.push(Line::default());
    }

    lines
}
