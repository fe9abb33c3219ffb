//! Revision timeline pane
//!
//! Draws the commit history of the tracked file as a vertical list, newest
//! first. Each entry spans two rows: the message line with its marker and
//! optional Latest badge, and a dimmed metadata line below it.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span, Text},
    widgets::{Block, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::state::AppState;
use crate::view_models::{TimelineEntryViewModel, TimelineViewModel};

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let vm = TimelineViewModel::from_state(state);

    let count_label = Line::from(format!(" {} revisions ", vm.entries.len()))
        .style(theme.muted())
        .right_aligned();

    let block = Block::bordered()
        .border_style(theme.panel_border())
        .title(" History ")
        .title_style(theme.panel_title())
        .title(count_label);

    if let Some((message, style)) = &vm.placeholder {
        let paragraph = Paragraph::new(message.clone())
            .block(block)
            .style(*style)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = vm.entries.iter().map(entry_item).collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selected());

    let mut list_state = ListState::default();
    list_state.select(Some(vm.cursor));

    f.render_stateful_widget(list, area, &mut list_state);
}

fn entry_item(entry: &TimelineEntryViewModel) -> ListItem<'static> {
    let marker = if entry.active { "▌ " } else { "│ " };

    let mut message_line = vec![
        Span::styled(marker, entry.marker_style),
        Span::styled(entry.message.clone(), entry.message_style),
    ];
    if entry.latest {
        message_line.push(Span::raw(" "));
        message_line.push(Span::styled(" Latest ", entry.badge_style));
    }

    let meta_line = Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!("{} · {} · {}", entry.author, entry.date, entry.short_sha),
            entry.meta_style,
        ),
    ]);

    ListItem::new(Text::from(vec![Line::from(message_line), meta_line]))
}
