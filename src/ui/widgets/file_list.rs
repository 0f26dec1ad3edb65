// src/ui/widgets/file_list.rs
//! Entry list widget.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::fs::DirectoryEntry;
use crate::ui::icons::icon_for_entry;

/// Shown in place of the list when the directory has no visible entries.
pub const EMPTY_LIST_TEXT: &str = "No Files or Folder";

/// Render the directory entries, or the empty message.
pub fn render_file_list(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    entries: &[DirectoryEntry],
    state: &mut ListState,
    focused: bool,
) {
    let border_style = if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string());

    if entries.is_empty() {
        f.render_widget(Paragraph::new(EMPTY_LIST_TEXT).block(block), area);
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let suffix = if entry.is_dir { "/" } else { "" };
            ListItem::new(format!("{} {}{}", icon_for_entry(entry.category), entry.name, suffix))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, state);
}
