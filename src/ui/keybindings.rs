// src/ui/keybindings.rs
//! Keyboard input handling and key mappings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which control receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    /// Save-mode filename field
    FileName,
}

/// Navigation actions derived from key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    Up,
    Down,
    Top,
    Bottom,
    Enter,
    Back,
    SwitchFocus,
    Input(char),
    DeleteChar,
    Cancel,
    None,
}

/// Convert a key event to a navigation action for the focused control.
pub fn key_to_action(key: &KeyEvent, focus: Focus) -> NavigationAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => NavigationAction::Cancel,
            _ => NavigationAction::None,
        };
    }

    match (focus, key.code) {
        (_, KeyCode::Esc) => NavigationAction::Cancel,
        (_, KeyCode::Tab) | (_, KeyCode::BackTab) => NavigationAction::SwitchFocus,

        (Focus::FileName, KeyCode::Enter) => NavigationAction::Enter,
        (Focus::FileName, KeyCode::Backspace) => NavigationAction::DeleteChar,
        (Focus::FileName, KeyCode::Char(c)) => NavigationAction::Input(c),
        (Focus::FileName, _) => NavigationAction::None,

        (Focus::List, KeyCode::Down | KeyCode::Char('j')) => NavigationAction::Down,
        (Focus::List, KeyCode::Up | KeyCode::Char('k')) => NavigationAction::Up,
        (Focus::List, KeyCode::Home | KeyCode::Char('g')) => NavigationAction::Top,
        (Focus::List, KeyCode::End | KeyCode::Char('G')) => NavigationAction::Bottom,
        (Focus::List, KeyCode::Enter | KeyCode::Right | KeyCode::Char('l')) => {
            NavigationAction::Enter
        }
        (Focus::List, KeyCode::Left | KeyCode::Backspace | KeyCode::Char('h')) => {
            NavigationAction::Back
        }
        (Focus::List, KeyCode::Char('q')) => NavigationAction::Cancel,
        (Focus::List, _) => NavigationAction::None,
    }
}
