//! Base trait for view state.

/// Marker trait for state snapshots.
///
/// `Clone` produces an independent snapshot, `PartialEq` lets callers skip
/// redraws, `Default` is the state before any intent was applied.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
