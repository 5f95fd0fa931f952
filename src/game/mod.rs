//! Per-stage gameplay
//!
//! Frame-driven scripting over the stage data: player movement and tile
//! collision, coin/enemy/portal interactions, the per-stage override table,
//! and the drawing passes. One `StageState` lives per stage attempt and is
//! rebuilt on every death or stage change.

pub mod collision;
pub mod entities;
pub mod hud;
pub mod player;
pub mod render;
pub mod specials;
mod state;

pub use specials::StageOverrides;
pub use state::{DeathCause, StageEvent, StageState};
