use crate::model::RollState;
use crate::roster::{StateFilter, SummaryKind};
use crate::ui::app::App;
use crate::ui::theme::{
    roll_state_color, ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const BOARD_HINTS: &str =
    " ↑/↓: Move │ /: Search │ f: Name │ o: Order │ s: Roll │ h: Activity │ r: Reload │ q: Quit";
const ROLL_HINTS: &str = " p/l/a/u: Mark │ Enter: Complete │ Esc: Exit ";

pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let mut spans = if app.roster().is_roll_active() {
            summary_spans(app)
        } else {
            vec![Span::styled(BOARD_HINTS, text_style)]
        };

        let (right, right_style) = if let Some(error) = app.last_error() {
            (format!("{error} "), Style::default().fg(STATUS_ERROR))
        } else if let Some(status) = app.status_message() {
            (format!("{status} "), Style::default().fg(ACCENT))
        } else if app.roster().is_roll_active() {
            (ROLL_HINTS.to_string(), text_style)
        } else {
            (format!("v{} ", VERSION), text_style)
        };

        // Calculate padding using char count, not byte count (for Unicode)
        let left_width: usize = spans.iter().map(|span| span.content.chars().count()).sum();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(left_width)
            .saturating_sub(right.chars().count());

        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(right, right_style));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

/// `1 all 5  2 ● present 2  ...`, with the selected attendance filter highlighted.
fn summary_spans(app: &App) -> Vec<Span<'static>> {
    let summary = app.roster().summary();
    let active_filter = app.roster().filter().attendance_state;
    let mut spans = vec![Span::raw(" ")];

    for (index, bucket) in summary.buckets().iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(HEADER_SEPARATOR)));
        }
        let mut label_style = Style::default().fg(HEADER_TEXT);
        if bucket.kind.filter() == active_filter {
            label_style = label_style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        spans.push(Span::styled(
            format!("{} ", index + 1),
            Style::default().fg(HEADER_SEPARATOR),
        ));
        if let Some(state) = bucket_state(bucket.kind) {
            spans.push(Span::styled("● ", Style::default().fg(roll_state_color(state))));
        }
        spans.push(Span::styled(
            format!("{} {}", bucket.kind.label(), bucket.count),
            label_style,
        ));
    }
    spans
}

fn bucket_state(kind: SummaryKind) -> Option<RollState> {
    match kind.filter() {
        StateFilter::Only(state) => Some(state),
        StateFilter::All => None,
    }
}
