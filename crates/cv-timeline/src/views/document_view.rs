//! Document pane
//!
//! Shows the rasterized page of the active revision in image mode, or a
//! link to the hosted viewer in native mode. The pane owns no state; the
//! image surface it draws through is handed in by the draw loop.

use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::state::AppState;
use crate::view_models::{DocumentContent, DocumentViewModel};
use crate::views::PageImageSurface;

pub fn render(state: &AppState, surface: &mut PageImageSurface, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let vm = DocumentViewModel::from_state(state);

    let header = Line::from(format!(" {} ", vm.header))
        .style(theme.muted())
        .right_aligned();

    let block = Block::bordered()
        .border_style(theme.panel_border())
        .title(vm.title.clone())
        .title_style(theme.panel_title())
        .title(header);

    let inner = block.inner(area);
    f.render_widget(block, area);

    match &vm.content {
        DocumentContent::Page => {
            if let Some(page) = &state.document.rendered {
                surface.draw(page, inner, f);
            }
        }
        DocumentContent::Viewer { url } => {
            surface.reset();
            let lines = vec![
                Line::default(),
                Line::from("Native viewer").style(theme.text()).centered(),
                Line::default(),
                Line::from(url.clone()).style(theme.muted()).centered(),
                Line::default(),
                Line::from("Press o to open it in your browser")
                    .style(theme.muted())
                    .centered(),
            ];
            let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
            f.render_widget(paragraph, inner);
        }
        DocumentContent::Loading { message } => {
            let paragraph = Paragraph::new(message.clone())
                .style(theme.muted())
                .alignment(Alignment::Center);
            f.render_widget(paragraph, inner);
        }
        DocumentContent::Error { message } => {
            surface.reset();
            let paragraph = Paragraph::new(message.clone())
                .style(theme.error())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, inner);
        }
        DocumentContent::Empty { hint } => {
            surface.reset();
            let paragraph = Paragraph::new(hint.clone())
                .style(theme.muted())
                .alignment(Alignment::Center);
            f.render_widget(paragraph, inner);
        }
    }
}
