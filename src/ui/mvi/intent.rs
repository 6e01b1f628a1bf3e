//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are actions (a toggle button, a CLI command) that a reducer turns
/// into a new state.
pub trait Intent: Send + 'static {}
