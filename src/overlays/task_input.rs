use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::util::render_overlay_frame;
use crate::config::Styles;

const PLACEHOLDER: &str = "Enter your task description";

pub enum TaskInputAction {
    Consumed,
    Dismiss,
    Submit(String),
}

/// Single-line editor for a new task. `cursor` counts chars, not bytes.
#[derive(Debug, Default)]
pub struct TaskInputOverlay {
    pub text: String,
    pub cursor: usize,
}

impl TaskInputOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> TaskInputAction {
        // AltGr arrives as Ctrl+Alt on Windows and must still insert text
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT)
        {
            return match key.code {
                KeyCode::Char('c') => TaskInputAction::Dismiss,
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    TaskInputAction::Consumed
                }
                KeyCode::Char('e') => {
                    self.cursor = self.char_len();
                    TaskInputAction::Consumed
                }
                KeyCode::Char('u') => {
                    let at = self.byte_index(self.cursor);
                    self.text.drain(..at);
                    self.cursor = 0;
                    TaskInputAction::Consumed
                }
                _ => TaskInputAction::Consumed,
            };
        }

        match key.code {
            KeyCode::Esc => TaskInputAction::Dismiss,
            KeyCode::Enter => TaskInputAction::Submit(sanitize_entry(&self.text)),
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let at = self.byte_index(self.cursor - 1);
                    self.text.remove(at);
                    self.cursor -= 1;
                }
                TaskInputAction::Consumed
            }
            KeyCode::Delete => {
                if self.cursor < self.char_len() {
                    let at = self.byte_index(self.cursor);
                    self.text.remove(at);
                }
                TaskInputAction::Consumed
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                TaskInputAction::Consumed
            }
            KeyCode::Right => {
                if self.cursor < self.char_len() {
                    self.cursor += 1;
                }
                TaskInputAction::Consumed
            }
            KeyCode::Home => {
                self.cursor = 0;
                TaskInputAction::Consumed
            }
            KeyCode::End => {
                self.cursor = self.char_len();
                TaskInputAction::Consumed
            }
            KeyCode::Char(c) => {
                let at = self.byte_index(self.cursor);
                self.text.insert(at, c);
                self.cursor += 1;
                TaskInputAction::Consumed
            }
            _ => TaskInputAction::Consumed,
        }
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, styles: &Styles) {
        let inner = render_overlay_frame(frame, area, " Add Task ", styles.selected);

        let rows = Layout::vertical([
            Constraint::Length(1), // input
            Constraint::Length(1), // pad
            Constraint::Length(1), // hints
            Constraint::Min(0),
        ])
        .split(inner);

        let input_area = Rect {
            x: rows[0].x + 1,
            width: rows[0].width.saturating_sub(2),
            ..rows[0]
        };
        let available_width = input_area.width as usize;

        let scroll = self.cursor.saturating_sub(available_width.saturating_sub(1));
        let input_line = if self.text.is_empty() {
            Line::from(Span::styled(PLACEHOLDER, Style::default().fg(styles.disabled)))
        } else {
            let visible_text: String = self
                .text
                .chars()
                .skip(scroll)
                .take(available_width)
                .collect();
            Line::from(Span::styled(visible_text, Style::default().fg(Color::White)))
        };
        frame.render_widget(Paragraph::new(input_line), input_area);

        let cursor_x = input_area.x + (self.cursor - scroll) as u16;
        if cursor_x < input_area.x + input_area.width {
            frame.set_cursor_position((cursor_x, input_area.y));
        }

        let hints = Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::raw(" Add "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ]);
        frame.render_widget(
            Paragraph::new(hints).alignment(Alignment::Center),
            rows[2],
        );
    }
}

/// Task files are newline-delimited, so line breaks become spaces. The rest
/// of the text is kept as typed.
pub fn sanitize_entry(raw: &str) -> String {
    raw.replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut TaskInputOverlay, code: KeyCode) -> TaskInputAction {
        input.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(input: &mut TaskInputOverlay, text: &str) {
        for c in text.chars() {
            press(input, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_and_submit() {
        let mut input = TaskInputOverlay::new();
        type_str(&mut input, "buy milk");

        match press(&mut input, KeyCode::Enter) {
            TaskInputAction::Submit(text) => assert_eq!(text, "buy milk"),
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn editing_in_the_middle_handles_multibyte_chars() {
        let mut input = TaskInputOverlay::new();
        type_str(&mut input, "café au lait");
        for _ in 0..8 {
            press(&mut input, KeyCode::Left);
        }
        press(&mut input, KeyCode::Backspace);
        type_str(&mut input, "e");

        assert_eq!(input.text, "cafe au lait");
        assert_eq!(input.cursor, 4);
    }

    #[test]
    fn delete_home_and_end() {
        let mut input = TaskInputOverlay::new();
        type_str(&mut input, "xtask");
        press(&mut input, KeyCode::Home);
        press(&mut input, KeyCode::Delete);
        press(&mut input, KeyCode::End);
        type_str(&mut input, "!");

        assert_eq!(input.text, "task!");
    }

    #[test]
    fn escape_and_ctrl_c_dismiss() {
        let mut input = TaskInputOverlay::new();
        assert!(matches!(press(&mut input, KeyCode::Esc), TaskInputAction::Dismiss));
        assert!(matches!(
            input.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            TaskInputAction::Dismiss
        ));
        assert!(input.text.is_empty());
    }

    #[test]
    fn sanitize_flattens_line_breaks() {
        assert_eq!(sanitize_entry(" first\r\nsecond\n"), " first  second ");
    }

    #[test]
    fn surrounding_spaces_are_kept() {
        let mut input = TaskInputOverlay::new();
        type_str(&mut input, "  indented task ");

        match press(&mut input, KeyCode::Enter) {
            TaskInputAction::Submit(text) => assert_eq!(text, "  indented task "),
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn altgr_characters_are_inserted() {
        let mut input = TaskInputOverlay::new();
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        input.handle_key(KeyEvent::new(KeyCode::Char('@'), altgr));
        input.handle_key(KeyEvent::new(KeyCode::Char('€'), altgr));

        assert_eq!(input.text, "@€");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn ctrl_shortcuts_still_edit() {
        let mut input = TaskInputOverlay::new();
        type_str(&mut input, "task");
        input.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        assert_eq!(input.cursor, 0);
        assert_eq!(input.text, "task");
    }
}
