//! Wire and domain types shared by the roster core, the data sources and the UI.

mod roll;
mod student;

pub use roll::{
    ActivitiesResponse, Activity, ActivityKind, Roll, RollInput, StudentRollState,
};
pub use student::{RollState, Student, StudentId, StudentsResponse, UnknownRollState};
