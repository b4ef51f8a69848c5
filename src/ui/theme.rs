use ratatui::style::Color;

use crate::model::RollState;

pub const ACCENT: Color = Color::Rgb(0x34, 0x6b, 0xd1);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

pub const STATE_PRESENT: Color = Color::Rgb(0x13, 0x94, 0x3b);
pub const STATE_LATE: Color = Color::Rgb(0xf5, 0xa6, 0x23);
pub const STATE_ABSENT: Color = Color::Rgb(0x9b, 0x9b, 0x9b);
pub const STATE_UNMARKED: Color = Color::Rgb(0x4a, 0x4a, 0x4a);

pub fn roll_state_color(state: RollState) -> Color {
    match state {
        RollState::Present => STATE_PRESENT,
        RollState::Late => STATE_LATE,
        RollState::Absent => STATE_ABSENT,
        RollState::Unmarked => STATE_UNMARKED,
    }
}
