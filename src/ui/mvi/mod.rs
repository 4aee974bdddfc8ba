//! Unidirectional data flow for the screen.
//!
//! ```text
//! key / fetch result ──→ Intent ──→ Reducer ──→ State ──→ render
//!         ↑                                                  │
//!         └──────────────────────────────────────────────────┘
//! ```
//!
//! Reducers stay pure. Network fetches, persistence and terminal side
//! effects are run by `App` around each dispatch.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
