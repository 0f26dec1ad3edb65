// src/ui/widgets/header.rs
//! Current folder header.

use std::path::Path;

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the absolute path of the directory being browsed.
pub fn render_header(f: &mut Frame<'_>, area: Rect, title: &str, current_dir: &Path) {
    let header = Paragraph::new(format!(" {}", current_dir.display()))
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(header, area);
}
