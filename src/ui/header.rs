use crate::roster::StateFilter;
use crate::ui::app::{App, Focus};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Toolbar above the board: sort order, search box, attendance filter, roll mode.
pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let roster = app.roster();
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let sort = roster.sort();
        let sort_label = format!(
            "{} {}",
            if sort.by_first_name {
                "First Name"
            } else {
                "Last Name"
            },
            if sort.ascending { "↑" } else { "↓" }
        );

        let searching = app.focus() == Focus::Search;
        let pattern = &roster.filter().name_pattern;
        let search_text = if pattern.is_empty() && !searching {
            "Search".to_string()
        } else if searching {
            format!("{pattern}▏")
        } else {
            pattern.clone()
        };
        let search_style = if searching {
            Style::default().fg(ACCENT)
        } else {
            text_style
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(sort_label, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled("🔍 ", text_style),
            Span::styled(search_text, search_style),
        ];

        if let StateFilter::Only(state) = roster.filter().attendance_state {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(format!("showing {state}"), text_style));
        }

        spans.push(Span::styled("  │  ", separator_style));
        if roster.is_roll_active() {
            spans.push(Span::styled(
                "ROLL IN PROGRESS",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled("s: Start Roll", text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
