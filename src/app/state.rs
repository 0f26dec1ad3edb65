// src/app/state.rs
//! Picker screen state management.

use crossterm::event::KeyEvent;
use log::debug;
use ratatui::{widgets::ListState, Frame};

use crate::{
    config::PickerConfig,
    fs::{tail_path, DirectoryEntry},
    picker::{
        commit_save_filename, go_to_parent, navigate, BrowserState, PickerOutcome, Selection,
        Stage,
    },
    ui::{
        keybindings::{key_to_action, Focus, NavigationAction},
        layout::compute_layout,
        widgets::{render_file_list, render_filename_input, render_header, render_help_bar},
    },
};

/// Main application state.
pub struct App {
    /// Where we are browsing
    pub browser: BrowserState,
    /// Listing of `browser`'s current directory
    pub entries: Vec<DirectoryEntry>,
    /// List widget state
    pub state: ListState,
    /// Currently selected index
    pub selected: usize,
    /// Type a new name instead of picking a file
    pub save_mode: bool,
    /// Control receiving typed keys
    pub focus: Focus,
    /// Save-mode filename buffer
    pub filename: String,
    /// Browsing or finished
    pub stage: Stage,
}

impl App {
    /// Create a new picker screen from launch options.
    pub fn new(config: &PickerConfig) -> Self {
        let browser = BrowserState::from_config(config);
        let entries = browser.list();
        let mut state = ListState::default();
        state.select(Some(0));

        Self {
            browser,
            entries,
            state,
            selected: 0,
            save_mode: config.save_mode,
            focus: Focus::List,
            filename: String::new(),
            stage: Stage::Browsing,
        }
    }

    /// The session result once finished.
    pub fn outcome(&self) -> Option<&PickerOutcome> {
        match &self.stage {
            Stage::Finished(outcome) => Some(outcome),
            Stage::Browsing => None,
        }
    }

    /// Handle a key event and return true once the session is finished.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        if self.stage.is_finished() {
            return true;
        }

        match key_to_action(&key, self.focus) {
            NavigationAction::Down => {
                if self.selected + 1 < self.entries.len() {
                    self.selected += 1;
                }
            }
            NavigationAction::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
            }
            NavigationAction::Top => self.selected = 0,
            NavigationAction::Bottom => self.selected = self.entries.len().saturating_sub(1),
            NavigationAction::Enter => match self.focus {
                Focus::List => self.activate_selected(),
                Focus::FileName => self.commit_filename(),
            },
            NavigationAction::Back => self.leave_directory(),
            NavigationAction::SwitchFocus => {
                if self.save_mode {
                    self.focus = match self.focus {
                        Focus::List => Focus::FileName,
                        Focus::FileName => Focus::List,
                    };
                }
            }
            NavigationAction::Input(c) => self.filename.push(c),
            NavigationAction::DeleteChar => {
                self.filename.pop();
            }
            NavigationAction::Cancel => {
                debug!("picker cancelled");
                self.stage = Stage::Finished(PickerOutcome::Cancelled);
            }
            NavigationAction::None => {}
        }

        self.state.select(Some(self.selected));
        self.stage.is_finished()
    }

    fn activate_selected(&mut self) {
        let Some(entry) = self.entries.get(self.selected) else {
            return;
        };

        match navigate(&self.browser, entry) {
            Selection::Directory(next) => {
                self.browser = next;
                self.reload(0);
            }
            Selection::File(path) => {
                self.stage = Stage::Finished(PickerOutcome::Selected(path));
            }
        }
    }

    fn leave_directory(&mut self) {
        let left = self.browser.current_dir().to_path_buf();
        let parent = go_to_parent(&self.browser);
        if parent == self.browser {
            return;
        }

        self.browser = parent;
        self.entries = self.browser.list();
        // Land on the directory we just came out of.
        self.selected = self
            .entries
            .iter()
            .position(|e| e.path == left)
            .unwrap_or(0);
    }

    fn commit_filename(&mut self) {
        // An empty name is ignored; the field keeps focus.
        if let Ok(path) = commit_save_filename(&self.browser, &self.filename) {
            self.stage = Stage::Finished(PickerOutcome::Selected(path));
        }
    }

    /// Re-list the current directory and put the cursor at `selected`.
    fn reload(&mut self, selected: usize) {
        self.entries = self.browser.list();
        self.selected = selected.min(self.entries.len().saturating_sub(1));
    }

    /// Draw the picker screen.
    pub fn draw(&mut self, f: &mut Frame<'_>) {
        let layout = compute_layout(f.area(), self.save_mode);
        let title = if self.save_mode { "Save File" } else { "Open File" };

        render_header(f, layout.header, title, self.browser.current_dir());

        if let Some(area) = layout.filename {
            render_filename_input(f, area, &self.filename, self.focus == Focus::FileName);
        }

        self.state.select(Some(self.selected));
        let list_title = format!("Files: {}", tail_path(self.browser.current_dir(), 3));
        render_file_list(
            f,
            layout.list,
            &list_title,
            &self.entries,
            &mut self.state,
            self.focus == Focus::List,
        );

        render_help_bar(f, layout.footer, self.save_mode, self.focus);
    }
}
