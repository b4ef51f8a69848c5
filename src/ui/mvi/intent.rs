//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent is either something the staff member did (a key press on the
/// board) or something the system finished (a roster fetch). Reducers are
/// the only consumers.
pub trait Intent: Send + 'static {}
