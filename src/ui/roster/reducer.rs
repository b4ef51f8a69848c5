//! Reducer for the roster store.

use crate::roster::{merge_attendance, RollSession};
use crate::ui::mvi::Reducer;

use super::intent::RosterIntent;
use super::state::RosterState;

/// Roster state transitions.
///
/// Marks are written through: the session map records them and the
/// canonical record is updated too, so they outlive the session. While roll
/// mode is on the map wins, which is why a reload re-applies it.
pub struct RosterReducer;

impl Reducer for RosterReducer {
    type State = RosterState;
    type Intent = RosterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut state = state;
        match intent {
            RosterIntent::Load { students } => {
                state.students = if state.session.is_roll_active {
                    merge_attendance(&students, &state.session.attendance)
                } else {
                    students
                };
            }

            RosterIntent::Sort(patch) => {
                state.sort = state.sort.apply(patch);
            }

            RosterIntent::Search(patch) => {
                state.filter = std::mem::take(&mut state.filter).apply(patch);
            }

            RosterIntent::StartRoll => {
                if state.session.is_roll_active {
                    return state;
                }
                state.session = RollSession::started();
            }

            RosterIntent::EndRoll { completed } => {
                if completed {
                    state.students = merge_attendance(&state.students, &state.session.attendance);
                }
                state.session.is_roll_active = false;
            }

            RosterIntent::Mark { id, roll_state } => {
                state.session.attendance.mark(id, roll_state);
                if let Some(student) = state.students.iter_mut().find(|s| s.id == id) {
                    student.roll_state = roll_state;
                }
            }

            RosterIntent::Unknown => return state,
        }

        state.refresh_view();
        state
    }
}
