// src/ui/widgets/filename_input.rs
//! Save-mode filename field.

use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render the typed filename. Places the terminal cursor at its end while focused.
pub fn render_filename_input(f: &mut Frame<'_>, area: Rect, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    let input = Paragraph::new(value.to_string()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("File name (Enter to save)"),
    );
    f.render_widget(input, area);

    if focused {
        f.set_cursor_position(cursor_position(area, value));
    }
}

/// Cell just past the typed text, clamped inside the field's border.
pub fn cursor_position(area: Rect, value: &str) -> Position {
    let width = u16::try_from(value.width()).unwrap_or(u16::MAX);
    let x = area
        .x
        .saturating_add(1)
        .saturating_add(width)
        .min(area.right().saturating_sub(2));
    Position::new(x, area.y.saturating_add(1))
}
