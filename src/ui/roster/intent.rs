//! Intents for the roster store.

use serde::Deserialize;

use crate::model::{RollState, Student, StudentId};
use crate::roster::{FilterPatch, SortPatch};
use crate::ui::mvi::Intent;

/// Everything the board can ask of the roster store.
///
/// Also the JSON-lines format accepted by `rollcall replay`, e.g.
/// `{"type":"mark","id":1,"rollState":"late"}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RosterIntent {
    /// A fetch finished; replaces the canonical list.
    Load { students: Vec<Student> },

    Sort(SortPatch),

    Search(FilterPatch),

    /// Enter roll mode with an empty set of marks.
    StartRoll,

    /// Leave roll mode. `completed` folds the session's marks into the list.
    EndRoll {
        #[serde(default)]
        completed: bool,
    },

    Mark {
        id: StudentId,
        #[serde(rename = "rollState")]
        roll_state: RollState,
    },

    /// Any `type` this build does not know. Reduces to the same state.
    #[serde(other)]
    Unknown,
}

impl Intent for RosterIntent {}
