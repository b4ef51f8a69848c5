use crate::model::Activity;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActivityDialogState {
    #[default]
    Hidden,
    /// Waiting for the activity fetch.
    Loading,
    Visible {
        activities: Vec<Activity>,
        scroll_offset: usize,
    },
    Failed {
        message: String,
    },
}

impl UiState for ActivityDialogState {}

impl ActivityDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
