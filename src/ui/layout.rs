// src/ui/layout.rs
//! Layout computation for the picker screen.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computed layout areas for rendering.
#[derive(Debug, Clone, Copy)]
pub struct ComputedLayout {
    /// Current folder header
    pub header: Rect,
    /// Filename field (save mode only)
    pub filename: Option<Rect>,
    /// Entry list
    pub list: Rect,
    /// Key help line
    pub footer: Rect,
}

/// Stack header, optional filename row, list and footer top to bottom.
pub fn compute_layout(area: Rect, save_mode: bool) -> ComputedLayout {
    let mut constraints = vec![Constraint::Length(3)];
    if save_mode {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(1));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    if save_mode {
        ComputedLayout {
            header: chunks[0],
            filename: Some(chunks[1]),
            list: chunks[2],
            footer: chunks[3],
        }
    } else {
        ComputedLayout {
            header: chunks[0],
            filename: None,
            list: chunks[1],
            footer: chunks[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browse_layout() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24), false);
        assert!(layout.filename.is_none());
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.footer.height, 1);
        assert_eq!(layout.list.height, 20);
    }

    #[test]
    fn test_save_layout() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24), true);
        let filename = layout.filename.unwrap();
        assert_eq!(filename.height, 3);
        assert_eq!(filename.y, 3);
        assert_eq!(layout.list.height, 17);
    }
}
