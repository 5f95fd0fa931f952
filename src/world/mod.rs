//! World module - stage data loaded from disk
//!
//! A stage is a rectangular character grid stored as RON, plus a plain-text
//! timer table read once at startup. Everything here is pure data with
//! validation; the per-frame gameplay lives in `crate::game`.

mod stage;
mod times;

pub use stage::*;
pub use times::*;
