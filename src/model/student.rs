use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Student identifier as issued by the roll-call API.
pub type StudentId = u64;

/// Attendance mark for a single student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RollState {
    #[default]
    #[serde(alias = "unmark")]
    Unmarked,
    Present,
    Late,
    Absent,
}

impl RollState {
    pub const ALL: [RollState; 4] = [
        RollState::Unmarked,
        RollState::Present,
        RollState::Late,
        RollState::Absent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RollState::Unmarked => "unmarked",
            RollState::Present => "present",
            RollState::Late => "late",
            RollState::Absent => "absent",
        }
    }
}

impl fmt::Display for RollState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRollState(pub String);

impl fmt::Display for UnknownRollState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown roll state '{}'", self.0)
    }
}

impl std::error::Error for UnknownRollState {}

impl FromStr for RollState {
    type Err = UnknownRollState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unmarked" | "unmark" => Ok(RollState::Unmarked),
            "present" => Ok(RollState::Present),
            "late" => Ok(RollState::Late),
            "absent" => Ok(RollState::Absent),
            other => Err(UnknownRollState(other.to_string())),
        }
    }
}

/// A student on the home board.
///
/// Identity fields never change after load; only `roll_state` is updated,
/// and only through the roster reducer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "rollState", default)]
    pub roll_state: RollState,
}

impl Student {
    pub fn new(id: StudentId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            roll_state: RollState::Unmarked,
        }
    }

    pub fn with_state(mut self, roll_state: RollState) -> Self {
        self.roll_state = roll_state;
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Body of `GET /get-homeboard-students`, also the on-disk student file format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentsResponse {
    #[serde(default)]
    pub students: Vec<Student>,
}
