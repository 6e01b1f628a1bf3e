//! Base trait for store state.

/// Marker trait for state held by a store.
///
/// `Default` is the state a store starts from when nothing was persisted.
/// `PartialEq` lets stores skip notifying when a transition is a no-op.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
