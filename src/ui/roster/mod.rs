//! Roster store feature module.
//!
//! Holds the canonical student list, sort/search configuration and the roll
//! session, and derives the ordered list the board renders.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Roster snapshot and derived view
//! - `intent.rs` - Load, sort, search, roll mode, marks
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::RosterIntent;
pub use reducer::RosterReducer;
pub use state::RosterState;
