//! Activity log feature module.
//!
//! Popup listing completed rolls, newest first, with their present/late/absent
//! counts.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Dialog state enum (Hidden → Loading → Visible | Failed)
//! - `intent.rs` - Open, fetch results, scrolling
//! - `reducer.rs` - State transitions
//! - `dialog.rs` - Rendering

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_activity_dialog;
pub use intent::ActivityIntent;
pub use reducer::{page_size, ActivityReducer, MAX_VISIBLE_ROWS};
pub use state::ActivityDialogState;
