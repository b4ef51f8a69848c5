use crate::model::Activity;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ActivityIntent {
    /// Dialog opened; a fetch has been requested.
    Open,
    Loaded { activities: Vec<Activity> },
    Failed { message: String },
    ScrollUp,
    /// `page_size` is how many rows the popup shows on the current screen.
    ScrollDown { page_size: usize },
    Close,
}

impl Intent for ActivityIntent {}
