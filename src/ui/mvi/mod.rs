//! Model-View-Intent primitives shared by client-side stores.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ subscribers
//!    ↑                                 │
//!    └─────────────────────────────────┘
//! ```
//!
//! - **State**: plain value describing what consumers render
//! - **Intent**: an action requested by the user or the system
//! - **Reducer**: pure function producing the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
