use crate::model::Student;
use crate::roster::attendance::{merge_attendance, RollSession};
use crate::roster::compare::{sort_students, SortConfig};
use crate::roster::filter::{filter_students, FilterConfig};

/// Computes the list the board renders: the session's marks laid over the
/// roster while roll mode is active, then filter, then stable sort.
///
/// The attendance filter sees the same state the row shows, so projecting
/// the output again yields the output.
pub fn project(
    students: &[Student],
    sort: &SortConfig,
    filter: &FilterConfig,
    session: &RollSession,
) -> Vec<Student> {
    let mut view = if session.is_roll_active {
        let merged = merge_attendance(students, &session.attendance);
        filter_students(&merged, filter)
    } else {
        filter_students(students, filter)
    };
    sort_students(&mut view, sort);
    view
}
