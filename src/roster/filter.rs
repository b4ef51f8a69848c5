use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::{RollState, Student, UnknownRollState};

/// Attendance part of the search: everything, or exactly one roll state.
///
/// On the wire this is a plain string where `""` and `"all"` both mean
/// [`StateFilter::All`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StateFilter {
    #[default]
    All,
    Only(RollState),
}

impl StateFilter {
    pub fn accepts(&self, state: RollState) -> bool {
        match self {
            StateFilter::All => true,
            StateFilter::Only(wanted) => *wanted == state,
        }
    }
}

impl fmt::Display for StateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateFilter::All => f.write_str("all"),
            StateFilter::Only(state) => state.fmt(f),
        }
    }
}

impl FromStr for StateFilter {
    type Err = UnknownRollState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(StateFilter::All),
            other => other.parse().map(StateFilter::Only),
        }
    }
}

impl TryFrom<String> for StateFilter {
    type Error = UnknownRollState;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StateFilter> for String {
    fn from(value: StateFilter) -> Self {
        value.to_string()
    }
}

/// Search box text plus attendance filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfig {
    pub name_pattern: String,
    pub attendance_state: StateFilter,
}

/// Partial update for [`FilterConfig`]; unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterPatch {
    #[serde(alias = "name")]
    pub name_pattern: Option<String>,
    #[serde(alias = "rollState")]
    pub attendance_state: Option<StateFilter>,
}

impl FilterPatch {
    pub fn name(pattern: impl Into<String>) -> Self {
        Self {
            name_pattern: Some(pattern.into()),
            ..Self::default()
        }
    }

    pub fn attendance(filter: StateFilter) -> Self {
        Self {
            attendance_state: Some(filter),
            ..Self::default()
        }
    }
}

impl FilterConfig {
    pub fn apply(self, patch: FilterPatch) -> Self {
        Self {
            name_pattern: patch.name_pattern.unwrap_or(self.name_pattern),
            attendance_state: patch.attendance_state.unwrap_or(self.attendance_state),
        }
    }
}

/// Ordered, case-insensitive substring match on "first last" combined with
/// the attendance filter.
pub fn matches(student: &Student, config: &FilterConfig) -> bool {
    let full_name = student.full_name().to_lowercase();
    full_name.contains(&config.name_pattern.to_lowercase())
        && config.attendance_state.accepts(student.roll_state)
}

pub fn filter_students(students: &[Student], config: &FilterConfig) -> Vec<Student> {
    students
        .iter()
        .filter(|student| matches(student, config))
        .cloned()
        .collect()
}
