use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Config;
use crate::error::Result;
use crate::menu::{self, MenuOption};
use crate::overlays::{TaskInputAction, TaskInputOverlay};
use crate::task_manager::{IndexPicker, RandomPicker, TaskManager};

pub enum Mode {
    Browsing(MenuOption),
    Prompting(TaskInputOverlay),
}

/// Interactive session state. Adding a task or cancelling ends the session;
/// completing and shuffling return to the menu.
pub struct App {
    pub should_quit: bool,
    pub tasks: TaskManager,
    pub config: Config,
    pub mode: Mode,
    picker: Box<dyn IndexPicker>,
}

impl App {
    pub fn new(tasks: TaskManager, config: Config) -> Self {
        Self::with_picker(tasks, config, Box::new(RandomPicker))
    }

    pub fn with_picker(tasks: TaskManager, config: Config, picker: Box<dyn IndexPicker>) -> Self {
        let cursor = menu::lowest(tasks.pending_len());
        Self {
            should_quit: false,
            tasks,
            config,
            mode: Mode::Browsing(cursor),
            picker,
        }
    }

    /// The highlighted menu option, adjusted for the current queue length.
    pub fn cursor(&self) -> Option<MenuOption> {
        match self.mode {
            Mode::Browsing(cursor) => Some(menu::resolve(self.tasks.pending_len(), cursor)),
            Mode::Prompting(_) => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        tracing::debug!(code = ?key.code, modifiers = ?key.modifiers, "key");
        match self.mode {
            Mode::Browsing(cursor) => self.handle_browsing(key, cursor),
            Mode::Prompting(ref mut input) => match input.handle_key(key) {
                TaskInputAction::Consumed => Ok(()),
                TaskInputAction::Dismiss => {
                    self.should_quit = true;
                    Ok(())
                }
                TaskInputAction::Submit(text) => {
                    self.should_quit = true;
                    if text.trim().is_empty() {
                        return Ok(());
                    }
                    self.tasks.add_task(text)
                }
            },
        }
    }

    fn handle_browsing(&mut self, key: KeyEvent, cursor: MenuOption) -> Result<()> {
        let len = self.tasks.pending_len();
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.mode = Mode::Browsing(menu::move_up(len, cursor));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.mode = Mode::Browsing(menu::move_down(len, cursor));
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.select(menu::resolve(len, cursor))?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Carry out a menu option.
    pub fn select(&mut self, option: MenuOption) -> Result<()> {
        match option {
            MenuOption::Complete => {
                self.tasks.complete_current()?;
                let len = self.tasks.pending_len();
                self.mode = Mode::Browsing(menu::resolve(len, MenuOption::Complete));
            }
            MenuOption::Shuffle => {
                if !self.tasks.shuffle_current(self.picker.as_mut())? {
                    self.should_quit = true;
                }
            }
            MenuOption::Add => {
                self.mode = Mode::Prompting(TaskInputOverlay::new());
            }
        }
        Ok(())
    }
}
