//! Battle simulation engine for FORTDUEL.
//!
//! Owns the hecs ECS world, runs the per-tick system pipeline, and
//! produces BattleSnapshots for the rendering layer.

pub mod difficulty;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::BattleEngine;
pub use fortduel_core as core;
