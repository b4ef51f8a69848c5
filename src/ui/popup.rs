use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, POPUP_BORDER};

/// Draws a bordered popup centered on the frame, sized to its content.
pub fn render_popup(frame: &mut Frame, title: &str, lines: Vec<Line<'static>>, min_width: u16) {
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = content_width.saturating_add(2).max(min_width);
    let height = (lines.len() as u16).saturating_add(2);
    let area = centered_rect_by_size(frame.area(), width, height);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(format!(" {title} "), Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
