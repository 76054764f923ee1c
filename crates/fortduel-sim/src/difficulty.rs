//! Escalation curves — pure functions of elapsed battle ticks.
//!
//! Long battles accelerate: reinforcements arrive faster, soldiers move
//! faster, and cooldowns shrink, guaranteeing convergence to a decision.

use fortduel_core::constants::*;

/// Reinforcement interval before jitter: exponential decay from the
/// starting interval toward the floor.
pub fn spawn_interval_base(elapsed_ticks: u64) -> f64 {
    let decay = (-(elapsed_ticks as f64) / SPAWN_DECAY_TICKS).exp();
    SPAWN_INTERVAL_FLOOR + (SPAWN_INTERVAL_START - SPAWN_INTERVAL_FLOOR) * decay
}

/// Soldier seek-speed multiplier: linear ramp, 2x at ~45 s, capped at 4x.
pub fn movement_multiplier(elapsed_ticks: u64) -> f64 {
    (1.0 + elapsed_ticks as f64 / MOVE_MULT_DOUBLE_TICKS).min(MOVE_MULT_CAP)
}

/// Attack-rate multiplier: linear ramp, 2x at ~60 s, capped at 3x.
/// The base cooldown is divided by this, so the effective cooldown
/// floor is FIRE_COOLDOWN_TICKS / ATTACK_MULT_CAP.
pub fn attack_multiplier(elapsed_ticks: u64) -> f64 {
    (1.0 + elapsed_ticks as f64 / ATTACK_MULT_DOUBLE_TICKS).min(ATTACK_MULT_CAP)
}
