// src/ui/widgets/help_bar.rs
//! One-line key reference.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::ui::keybindings::Focus;

/// Help text for the focused control.
pub fn help_text(save_mode: bool, focus: Focus) -> &'static str {
    match (save_mode, focus) {
        (false, _) => "↑/↓ move  Enter open  ← parent  Esc cancel",
        (true, Focus::List) => "↑/↓ move  Enter open  ← parent  Tab file name  Esc cancel",
        (true, Focus::FileName) => "type a name  Enter save  Tab list  Esc cancel",
    }
}

pub fn render_help_bar(f: &mut Frame<'_>, area: Rect, save_mode: bool, focus: Focus) {
    let help = Paragraph::new(help_text(save_mode, focus))
        .style(Style::default().add_modifier(Modifier::DIM));
    f.render_widget(help, area);
}
