//! Headless driver for the roster store.
//!
//! Reads one JSON intent per line, folds them through [`RosterReducer`] and
//! reports the resulting board.

use serde::Serialize;
use std::io::BufRead;
use thiserror::Error;

use crate::model::Student;
use crate::roster::RollSummary;
use crate::ui::mvi::Reducer;
use crate::ui::roster::{RosterIntent, RosterReducer, RosterState};

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read intents: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid intent on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Applies every non-blank line of `reader` to `state` in order.
///
/// Unrecognized intent types are passed to the reducer, which ignores them;
/// malformed JSON aborts the replay.
pub fn replay<R: BufRead>(mut state: RosterState, reader: R) -> Result<RosterState, ReplayError> {
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let intent: RosterIntent =
            serde_json::from_str(&line).map_err(|source| ReplayError::Parse {
                line: index + 1,
                source,
            })?;
        state = RosterReducer::reduce(state, intent);
    }
    Ok(state)
}

/// What `rollcall replay` prints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayReport<'a> {
    pub view: &'a [Student],
    pub summary: RollSummary,
    pub is_roll_active: bool,
}

impl<'a> ReplayReport<'a> {
    pub fn new(state: &'a RosterState) -> Self {
        Self {
            view: state.view(),
            summary: state.summary(),
            is_roll_active: state.is_roll_active(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RollState;

    const SCRIPT: &str = r#"
{"type":"load","students":[{"id":1,"first_name":"Cara","last_name":"Bell"},{"id":2,"first_name":"abe","last_name":"Dunn"}]}
{"type":"startRoll"}
{"type":"mark","id":1,"rollState":"late"}
{"type":"somethingElse"}
{"type":"search","attendanceState":"late"}
"#;

    #[test]
    fn replays_script() {
        let state = replay(RosterState::default(), SCRIPT.as_bytes()).unwrap();
        assert!(state.is_roll_active());
        assert_eq!(state.view().len(), 1);
        assert_eq!(state.view()[0].roll_state, RollState::Late);

        let report = serde_json::to_value(ReplayReport::new(&state)).unwrap();
        assert_eq!(report["summary"][0]["type"], "all");
        assert_eq!(report["summary"][0]["count"], 2);
        assert_eq!(report["summary"][2]["count"], 1);
        assert_eq!(report["isRollActive"], true);
    }

    #[test]
    fn malformed_line_reports_position() {
        let input = "{\"type\":\"startRoll\"}\n\nnot json\n";
        match replay(RosterState::default(), input.as_bytes()) {
            Err(ReplayError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("Expected parse error, got {:?}", other.map(|s| s.view().len())),
        }
    }
}
