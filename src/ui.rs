use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Mode};
use crate::config::Styles;
use crate::menu::MenuOption;
use crate::overlays::shortcut_line;
use crate::task_manager::TaskManager;
use crate::util::BROWSE_SHORTCUTS;

pub const ALL_COMPLETE: &str = "All tasks are complete!";

pub struct AppLayout {
    pub current: Rect,
    pub body: Rect,
    pub hints: Rect,
}

pub fn create_layout(area: Rect) -> AppLayout {
    let chunks = Layout::vertical([
        Constraint::Length(3), // current task
        Constraint::Length(6), // menu or prompt
        Constraint::Length(1), // hints
        Constraint::Min(0),
    ])
    .split(area);

    AppLayout {
        current: chunks[0],
        body: chunks[1],
        hints: chunks[2],
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    let layout = create_layout(frame.area());
    let styles = &app.config.styles;

    render_current_task(frame, layout.current, &app.tasks, styles);

    match &app.mode {
        Mode::Browsing(_) => {
            let cursor = app.cursor().unwrap_or(MenuOption::Add);
            render_menu(frame, layout.body, app.tasks.pending_len(), cursor, styles);
            frame.render_widget(Paragraph::new(shortcut_line(&BROWSE_SHORTCUTS)), layout.hints);
        }
        Mode::Prompting(input) => {
            let prompt_area = Rect {
                height: layout.body.height.min(5),
                ..layout.body
            };
            input.render(frame, prompt_area, styles);
        }
    }
}

fn render_current_task(frame: &mut Frame, area: Rect, tasks: &TaskManager, styles: &Styles) {
    let lines = match tasks.current_task() {
        Some(task) => vec![
            Line::from(Span::styled(
                "Current Task",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(task.to_string()),
        ],
        None => vec![Line::from(Span::styled(
            ALL_COMPLETE,
            Style::default()
                .fg(styles.completed)
                .add_modifier(Modifier::BOLD),
        ))],
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_menu(
    frame: &mut Frame,
    area: Rect,
    pending_len: usize,
    cursor: MenuOption,
    styles: &Styles,
) {
    let selected = Style::default()
        .fg(styles.selected)
        .add_modifier(Modifier::BOLD);

    let lines: Vec<Line> = MenuOption::ALL
        .iter()
        .map(|&option| {
            if option == cursor {
                Line::from(vec![
                    Span::styled("> ", selected),
                    Span::styled(option.label(), selected),
                ])
            } else if option.is_enabled(pending_len) {
                Line::from(vec![Span::raw("  "), Span::raw(option.label())])
            } else {
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(option.label(), Style::default().fg(styles.disabled)),
                ])
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
