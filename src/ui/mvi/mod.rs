//! Model-View-Intent (MVI) primitives shared by the page and dialog
//! components.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers never touch the preference store. Anything with a side effect
//! (the commit write) happens in `App` before the intent is dispatched.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
