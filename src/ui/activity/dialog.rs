use chrono::{DateTime, Local, Utc};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::model::Activity;
use crate::roster::RollSummary;
use crate::ui::activity::reducer::page_size;
use crate::ui::activity::state::ActivityDialogState;
use crate::ui::popup::render_popup;
use crate::ui::theme::{HEADER_TEXT, POPUP_BORDER, STATE_ABSENT, STATE_LATE, STATE_PRESENT, STATUS_ERROR};

const DIALOG_WIDTH: u16 = 56;

pub fn render_activity_dialog(frame: &mut Frame, state: &ActivityDialogState) {
    let rows = page_size(frame.area().height);
    let lines = match state {
        ActivityDialogState::Hidden => return,
        ActivityDialogState::Loading => vec![Line::from(" Loading activity…")],
        ActivityDialogState::Failed { message } => vec![
            Line::from(Span::styled(
                " Failed to load activity",
                Style::default().fg(STATUS_ERROR),
            )),
            Line::from(format!(" {message}")),
        ],
        ActivityDialogState::Visible {
            activities,
            scroll_offset,
        } => {
            if activities.is_empty() {
                vec![Line::from(" No completed rolls yet.")]
            } else {
                // The screen may have grown since the last scroll.
                let first = (*scroll_offset).min(activities.len().saturating_sub(rows));
                activities
                    .iter()
                    .skip(first)
                    .take(rows)
                    .map(activity_line)
                    .collect()
            }
        }
    };

    render_popup(frame, "Activity", lines, DIALOG_WIDTH);
}

fn activity_line(activity: &Activity) -> Line<'static> {
    let inner_width = DIALOG_WIDTH.saturating_sub(2) as usize;
    let roll = &activity.entity;
    let summary = RollSummary::from_states(roll.student_roll_states.iter().map(|s| s.roll_state));
    let counts = [
        (format!("●{}", summary.present()), STATE_PRESENT),
        (format!("●{}", summary.late()), STATE_LATE),
        (format!("●{}", summary.absent()), STATE_ABSENT),
    ];
    let counts_width: usize = counts.iter().map(|(text, _)| text.chars().count() + 1).sum();
    let time = format_time(activity.date);

    let padding = inner_width
        .saturating_sub(roll.name.chars().count())
        .saturating_sub(counts_width)
        .saturating_sub(time.chars().count())
        .saturating_sub(3);

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(roll.name.clone(), Style::default().fg(HEADER_TEXT)),
        Span::raw(" ".repeat(padding.max(1))),
    ];
    for (text, color) in counts {
        spans.push(Span::styled(text, Style::default().fg(color)));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw(" "));
    spans.push(Span::styled(time, Style::default().fg(POPUP_BORDER)));
    Line::from(spans)
}

fn format_time(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%d %b %H:%M")
        .to_string()
}
