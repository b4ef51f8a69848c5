use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::student::{RollState, StudentId};

/// One student's mark inside a submitted roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRollState {
    pub student_id: StudentId,
    pub roll_state: RollState,
}

/// Body of `POST /save-roll`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RollInput {
    pub student_roll_states: Vec<StudentRollState>,
}

/// A completed roll as stored by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roll {
    pub id: u64,
    pub name: String,
    pub completed_at: DateTime<Utc>,
    pub student_roll_states: Vec<StudentRollState>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Roll,
}

/// Entry of the activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub date: DateTime<Utc>,
    pub entity: Roll,
}

impl Activity {
    pub fn from_roll(roll: Roll) -> Self {
        Self {
            kind: ActivityKind::Roll,
            date: roll.completed_at,
            entity: roll,
        }
    }
}

/// Body of `GET /get-activities`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivitiesResponse {
    #[serde(default)]
    pub activity: Vec<Activity>,
}
