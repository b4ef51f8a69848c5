use std::collections::BTreeMap;
use std::sync::Arc;

use crate::model::{RollInput, RollState, Student, StudentId, StudentRollState};

/// Marks recorded during a roll session, keyed by student id.
///
/// Copy-on-write: clones share the underlying map until one of them is
/// marked, so every reducer snapshot stays independent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceMap {
    marks: Arc<BTreeMap<StudentId, RollState>>,
}

impl AttendanceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: StudentId) -> Option<RollState> {
        self.marks.get(&id).copied()
    }

    pub fn mark(&mut self, id: StudentId, state: RollState) {
        Arc::make_mut(&mut self.marks).insert(id, state);
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StudentId, RollState)> + '_ {
        self.marks.iter().map(|(id, state)| (*id, *state))
    }
}

impl FromIterator<(StudentId, RollState)> for AttendanceMap {
    fn from_iter<T: IntoIterator<Item = (StudentId, RollState)>>(iter: T) -> Self {
        Self {
            marks: Arc::new(iter.into_iter().collect()),
        }
    }
}

/// Roll mode flag plus the marks taken while it is on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollSession {
    pub is_roll_active: bool,
    pub attendance: AttendanceMap,
}

impl RollSession {
    pub fn started() -> Self {
        Self {
            is_roll_active: true,
            attendance: AttendanceMap::new(),
        }
    }
}

/// Returns fresh records with marks from `attendance` laid over them.
pub fn merge_attendance(students: &[Student], attendance: &AttendanceMap) -> Vec<Student> {
    students
        .iter()
        .map(|student| match attendance.get(student.id) {
            Some(state) => student.clone().with_state(state),
            None => student.clone(),
        })
        .collect()
}

/// Payload for saving a completed roll: one entry per student, in list order.
pub fn roll_input(students: &[Student]) -> RollInput {
    RollInput {
        student_roll_states: students
            .iter()
            .map(|student| StudentRollState {
                student_id: student.id,
                roll_state: student.roll_state,
            })
            .collect(),
    }
}
