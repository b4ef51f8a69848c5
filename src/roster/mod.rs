//! Pure list transforms behind the home board.
//!
//! Everything here is a plain function over student slices; the roster store
//! in [`crate::ui::roster`] composes them after every transition.

pub mod attendance;
pub mod compare;
pub mod filter;
pub mod pipeline;
pub mod summary;

pub use attendance::{merge_attendance, roll_input, AttendanceMap, RollSession};
pub use compare::{compare, sort_students, SortConfig, SortPatch};
pub use filter::{filter_students, matches, FilterConfig, FilterPatch, StateFilter};
pub use pipeline::project;
pub use summary::{summarize, RollSummary, SummaryBucket, SummaryKind};
