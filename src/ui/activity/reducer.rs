use crate::ui::activity::intent::ActivityIntent;
use crate::ui::activity::state::ActivityDialogState;
use crate::ui::mvi::Reducer;

/// Rows shown on a screen tall enough for the whole popup.
pub const MAX_VISIBLE_ROWS: usize = 10;

/// Activity rows that fit in the popup on a screen `screen_rows` tall.
pub fn page_size(screen_rows: u16) -> usize {
    MAX_VISIBLE_ROWS
        .min(usize::from(screen_rows.saturating_sub(2)))
        .max(1)
}

pub struct ActivityReducer;

impl Reducer for ActivityReducer {
    type State = ActivityDialogState;
    type Intent = ActivityIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ActivityIntent::Open => ActivityDialogState::Loading,
            ActivityIntent::Loaded { mut activities } => match state {
                // A late response after the dialog was closed is dropped.
                ActivityDialogState::Hidden => ActivityDialogState::Hidden,
                _ => {
                    activities.sort_by(|a, b| b.date.cmp(&a.date));
                    ActivityDialogState::Visible {
                        activities,
                        scroll_offset: 0,
                    }
                }
            },
            ActivityIntent::Failed { message } => match state {
                ActivityDialogState::Hidden => ActivityDialogState::Hidden,
                _ => ActivityDialogState::Failed { message },
            },
            ActivityIntent::Close => ActivityDialogState::Hidden,
            ActivityIntent::ScrollUp => match state {
                ActivityDialogState::Visible {
                    activities,
                    scroll_offset,
                } => ActivityDialogState::Visible {
                    activities,
                    scroll_offset: scroll_offset.saturating_sub(1),
                },
                other => other,
            },
            ActivityIntent::ScrollDown { page_size } => match state {
                ActivityDialogState::Visible {
                    activities,
                    scroll_offset,
                } => {
                    let max_offset = activities.len().saturating_sub(page_size.max(1));
                    ActivityDialogState::Visible {
                        activities,
                        scroll_offset: (scroll_offset + 1).min(max_offset),
                    }
                }
                other => other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Activity, Roll};
    use chrono::{TimeZone, Utc};

    fn activity(id: u64, hour: u32) -> Activity {
        Activity::from_roll(Roll {
            id,
            name: format!("Roll {id}"),
            completed_at: Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap(),
            student_roll_states: vec![],
        })
    }

    fn visible(count: u64, scroll_offset: usize) -> ActivityDialogState {
        ActivityDialogState::Visible {
            activities: (0..count).map(|i| activity(i, 8)).collect(),
            scroll_offset,
        }
    }

    #[test]
    fn open_shows_loading() {
        let state = ActivityReducer::reduce(ActivityDialogState::Hidden, ActivityIntent::Open);
        assert!(state.is_loading());
    }

    #[test]
    fn loaded_sorts_newest_first() {
        let state = ActivityReducer::reduce(
            ActivityDialogState::Loading,
            ActivityIntent::Loaded {
                activities: vec![activity(1, 8), activity(2, 10), activity(3, 9)],
            },
        );
        match state {
            ActivityDialogState::Visible { activities, .. } => {
                let ids: Vec<u64> = activities.iter().map(|a| a.entity.id).collect();
                assert_eq!(ids, vec![2, 3, 1]);
            }
            other => panic!("Expected Visible, got {:?}", other),
        }
    }

    #[test]
    fn late_response_after_close_is_ignored() {
        let state = ActivityReducer::reduce(
            ActivityDialogState::Hidden,
            ActivityIntent::Loaded {
                activities: vec![activity(1, 8)],
            },
        );
        assert_eq!(state, ActivityDialogState::Hidden);

        let state = ActivityReducer::reduce(
            ActivityDialogState::Hidden,
            ActivityIntent::Failed {
                message: "boom".into(),
            },
        );
        assert_eq!(state, ActivityDialogState::Hidden);
    }

    #[test]
    fn failure_while_loading_is_shown() {
        let state = ActivityReducer::reduce(
            ActivityDialogState::Loading,
            ActivityIntent::Failed {
                message: "connection refused".into(),
            },
        );
        assert_eq!(
            state,
            ActivityDialogState::Failed {
                message: "connection refused".into()
            }
        );
    }

    #[test]
    fn scroll_is_clamped() {
        let state = ActivityReducer::reduce(visible(3, 0), ActivityIntent::ScrollUp);
        assert!(matches!(
            state,
            ActivityDialogState::Visible { scroll_offset: 0, .. }
        ));

        let full_page = ActivityIntent::ScrollDown {
            page_size: MAX_VISIBLE_ROWS,
        };
        let state = ActivityReducer::reduce(visible(3, 0), full_page.clone());
        assert!(matches!(
            state,
            ActivityDialogState::Visible { scroll_offset: 0, .. }
        ));

        let count = MAX_VISIBLE_ROWS as u64 + 2;
        let mut state = visible(count, 0);
        for _ in 0..5 {
            state = ActivityReducer::reduce(state, full_page.clone());
        }
        assert!(matches!(
            state,
            ActivityDialogState::Visible { scroll_offset: 2, .. }
        ));
    }

    #[test]
    fn short_screen_can_scroll_to_last_row() {
        let rows = page_size(6);
        assert_eq!(rows, 4);

        let count = MAX_VISIBLE_ROWS as u64;
        let mut state = visible(count, 0);
        for _ in 0..count {
            state = ActivityReducer::reduce(
                state,
                ActivityIntent::ScrollDown { page_size: rows },
            );
        }
        assert!(matches!(
            state,
            ActivityDialogState::Visible { scroll_offset: 6, .. }
        ));
    }

    #[test]
    fn page_size_bounds() {
        assert_eq!(page_size(40), MAX_VISIBLE_ROWS);
        assert_eq!(page_size(12), MAX_VISIBLE_ROWS);
        assert_eq!(page_size(11), MAX_VISIBLE_ROWS - 1);
        assert_eq!(page_size(0), 1);
    }

    #[test]
    fn close_hides() {
        let state = ActivityReducer::reduce(visible(2, 1), ActivityIntent::Close);
        assert_eq!(state, ActivityDialogState::Hidden);
    }
}
