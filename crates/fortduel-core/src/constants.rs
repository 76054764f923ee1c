//! Simulation constants and tuning parameters.
//!
//! Distances are in arena units, speeds in units per tick.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Arena layout ---

/// Fort ring radius as a fraction of the smaller arena dimension.
pub const FORT_RING_FACTOR: f64 = 0.35;

/// Initial roster scatter radius around the owning fort.
pub const MUSTER_RADIUS: f64 = 40.0;

// --- Soldiers ---

/// Soldier collision radius.
pub const SOLDIER_RADIUS: f64 = 8.0;

/// Soldier hit points.
pub const SOLDIER_MAX_HP: i32 = 3;

/// Goal-seeking speed (scaled by the movement multiplier).
pub const SEEK_SPEED: f64 = 1.0;

/// Probability per tick that a soldier wanders instead of seeking.
pub const WANDER_CHANCE: f64 = 0.55;

/// Wander step speed.
pub const WANDER_SPEED: f64 = 1.1;

// --- Combat ---

/// Maximum firing range (boundary inclusive).
pub const FIRE_RANGE: f64 = 100.0;

/// Soldiers hold position once closer than this to their goal.
pub const HOLD_OFF_RANGE: f64 = FIRE_RANGE * 0.5;

/// Base cooldown between shots (divided by the attack multiplier).
pub const FIRE_COOLDOWN_TICKS: u32 = 60;

/// Projectile speed.
pub const PROJECTILE_SPEED: f64 = 5.0;

/// Projectile collision radius.
pub const PROJECTILE_RADIUS: f64 = 3.0;

// --- Forts ---

/// Fort collision radius.
pub const FORT_RADIUS: f64 = 28.0;

/// Default fort hit points (the "average battle" tier).
pub const FORT_HP_DEFAULT: i32 = 10;

// --- Teams ---

/// Minimum number of teams in a battle.
pub const MIN_TEAMS: usize = 2;

/// Maximum number of teams in a battle.
pub const MAX_TEAMS: usize = 4;

/// Default initial roster size per team.
pub const SOLDIERS_PER_TEAM: usize = 20;

// --- Death animation ---

/// Per-tick death fade decrement. A dead soldier lingers for
/// 1.0 / DEATH_FADE_STEP ticks before removal.
pub const DEATH_FADE_STEP: f64 = 0.05;

// --- Reinforcements ---

/// Spawn interval at battle start (ticks).
pub const SPAWN_INTERVAL_START: f64 = 300.0;

/// Asymptotic spawn interval floor of the decay curve (ticks).
pub const SPAWN_INTERVAL_FLOOR: f64 = 40.0;

/// Hard lower bound on a fort's spawn interval after jitter (ticks).
pub const SPAWN_INTERVAL_MIN: i64 = 45;

/// Time constant of the interval decay (ticks, ~40 seconds).
pub const SPAWN_DECAY_TICKS: f64 = 2400.0;

/// Uniform jitter applied to each recomputed interval (± ticks).
pub const SPAWN_JITTER_TICKS: i64 = 30;

/// Reinforcements appear between BASE and BASE + SPAN units from the fort.
pub const SPAWN_SCATTER_BASE: f64 = 15.0;
pub const SPAWN_SCATTER_SPAN: f64 = 25.0;

// --- Escalation ---

/// Movement multiplier cap.
pub const MOVE_MULT_CAP: f64 = 4.0;

/// Ticks of elapsed battle time at which movement speed reaches 2x (~45 s).
pub const MOVE_MULT_DOUBLE_TICKS: f64 = 2700.0;

/// Attack rate multiplier cap.
pub const ATTACK_MULT_CAP: f64 = 3.0;

/// Ticks of elapsed battle time at which attack rate reaches 2x (~60 s).
pub const ATTACK_MULT_DOUBLE_TICKS: f64 = 3600.0;
