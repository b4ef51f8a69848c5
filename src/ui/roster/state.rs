//! State for the roster store.

use crate::model::{RollInput, Student};
use crate::roster::{
    merge_attendance, project, roll_input, summarize, AttendanceMap, FilterConfig,
    RollSession, RollSummary, SortConfig,
};
use crate::ui::mvi::UiState;

/// Canonical roster plus the configuration the board is viewed through.
///
/// `view` is derived: [`RosterState::refresh_view`] recomputes it from the
/// other fields and the reducer calls it after every transition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RosterState {
    pub(crate) students: Vec<Student>,
    pub(crate) sort: SortConfig,
    pub(crate) filter: FilterConfig,
    pub(crate) session: RollSession,
    pub(crate) view: Vec<Student>,
}

impl UiState for RosterState {}

impl RosterState {
    /// Empty roster with a configured initial sort.
    pub fn with_sort(sort: SortConfig) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn sort(&self) -> &SortConfig {
        &self.sort
    }

    pub fn filter(&self) -> &FilterConfig {
        &self.filter
    }

    pub fn session(&self) -> &RollSession {
        &self.session
    }

    pub fn is_roll_active(&self) -> bool {
        self.session.is_roll_active
    }

    pub fn attendance(&self) -> &AttendanceMap {
        &self.session.attendance
    }

    /// Ordered, filtered list the board renders.
    pub fn view(&self) -> &[Student] {
        &self.view
    }

    /// Whole-class counts (ignores the search), with session marks applied
    /// while roll mode is on.
    pub fn summary(&self) -> RollSummary {
        if self.session.is_roll_active {
            summarize(&merge_attendance(&self.students, &self.session.attendance))
        } else {
            summarize(&self.students)
        }
    }

    /// Payload for saving the current roll.
    pub fn roll_input(&self) -> RollInput {
        roll_input(&merge_attendance(&self.students, &self.session.attendance))
    }

    pub(crate) fn refresh_view(&mut self) {
        self.view = project(&self.students, &self.sort, &self.filter, &self.session);
    }
}
