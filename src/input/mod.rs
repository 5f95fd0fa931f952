//! Input handling
//!
//! Action-based keyboard/mouse mapping: the game loop asks about actions,
//! never about raw key codes. Keeps the bindings in one place.

mod actions;
mod state;

pub use actions::*;
pub use state::*;
