use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::view_models::BranchTabsViewModel;

/// Widget wrapper for rendering branch tabs from view model
pub struct BranchTabsWidget<'a>(pub &'a BranchTabsViewModel);

impl Widget for BranchTabsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 || area.width < 10 {
            return;
        }

        let vm = self.0;

        // Fill the entire row with the line background color first
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(vm.line_bg);
        }

        let mut x = area.x;

        let title = " cv-timeline ";
        buf.set_string(x, area.y, title, vm.title_style);
        x += title.chars().count() as u16;

        for tab in &vm.tabs {
            let padded = format!("  {}  ", tab.name);
            let width = padded.chars().count() as u16;
            if x + width > area.x + area.width {
                break; // Don't overflow
            }
            buf.set_string(x, area.y, &padded, tab.style);
            x += width + 1;
        }

        // Loading or error note after the last tab
        if let Some((status, style)) = &vm.status {
            if x + 1 + status.chars().count() as u16 <= area.x + area.width {
                buf.set_string(x + 1, area.y, status, *style);
            }
        }
    }
}
