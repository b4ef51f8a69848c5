use crate::model::{RollState, Student};
use crate::ui::app::{App, LoadState};
use crate::ui::theme::{roll_state_color, ACTIVE_HIGHLIGHT, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Draws the board body: a placeholder while loading or empty, else the visible rows.
pub fn render_student_list(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }

    let roster = app.roster();
    if roster.view().is_empty() {
        let lines = placeholder_lines(app);
        let top = area.height.saturating_sub(lines.len() as u16) / 2;
        let area = Rect {
            y: area.y + top,
            height: area.height - top,
            ..area
        };
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
        return;
    }

    let height = area.height as usize;
    let selected = app.selected();
    let offset = if selected >= height {
        selected + 1 - height
    } else {
        0
    };
    let width = area.width as usize;
    let show_badges = roster.is_roll_active();

    let lines: Vec<Line> = roster
        .view()
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(index, student)| {
            let line = student_line(student, width, show_badges);
            if index == selected {
                line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
            } else {
                line
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn placeholder_lines(app: &App) -> Vec<Line<'static>> {
    match app.load_state() {
        LoadState::Loading => {
            let frame = SPINNER[(app.ticks() % SPINNER.len() as u64) as usize];
            vec![Line::from(format!("{frame} Loading students…"))]
        }
        LoadState::Failed(message) => vec![
            Line::from(Span::styled(
                "Failed to load students",
                Style::default().fg(STATUS_ERROR),
            )),
            Line::from(message.clone()),
            Line::from("r: Retry"),
        ],
        LoadState::Idle | LoadState::Loaded => {
            if app.roster().students().is_empty() {
                vec![Line::from("No students")]
            } else {
                vec![Line::from("No students match the search")]
            }
        }
    }
}

fn student_line(student: &Student, width: usize, show_badge: bool) -> Line<'static> {
    let name = student.full_name();
    let name_style = Style::default().fg(HEADER_TEXT);
    if !show_badge && student.roll_state == RollState::Unmarked {
        return Line::from(vec![Span::raw("  "), Span::styled(name, name_style)]);
    }

    let badge = format!("● {}", student.roll_state);
    let padding = width
        .saturating_sub(name.chars().count())
        .saturating_sub(badge.chars().count())
        .saturating_sub(4);
    Line::from(vec![
        Span::raw("  "),
        Span::styled(name, name_style),
        Span::raw(" ".repeat(padding.max(1))),
        Span::styled(
            badge,
            Style::default().fg(roll_state_color(student.roll_state)),
        ),
        Span::raw("  "),
    ])
}
