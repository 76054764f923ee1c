//! Systems that operate on the battle world each tick.
//!
//! Systems are free functions taking `&mut World` (or `&World` for
//! read-only passes). They do not own state — all state lives in
//! components or in the engine.

pub mod cleanup;
pub mod combat;
pub mod movement;
pub mod reinforcement;
pub mod snapshot;
pub mod targeting;
pub mod victory;
