use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear},
    Frame,
};

use crate::util::Shortcut;

pub fn render_overlay_frame(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

pub fn shortcut_line(shortcuts: &[Shortcut]) -> Line<'static> {
    let mut spans = Vec::with_capacity(shortcuts.len() * 2);
    for shortcut in shortcuts {
        spans.push(Span::styled(
            format!("[{}]", shortcut.key),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::styled(
            format!(" {}  ", shortcut.description),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}
