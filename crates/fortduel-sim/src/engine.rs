//! Battle engine — the core of the simulation.
//!
//! `BattleEngine` owns the hecs ECS world, processes queued commands at
//! tick boundaries, runs the per-tick system pipeline, and produces
//! `BattleSnapshot`s. Completely headless, enabling deterministic
//! testing: same config and seed reproduce the same battle.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use fortduel_core::commands::BattleCommand;
use fortduel_core::components::Fort;
use fortduel_core::config::{BattleConfig, ConfigError};
use fortduel_core::enums::{BattlePhase, Verdict};
use fortduel_core::events::BattleEvent;
use fortduel_core::state::BattleSnapshot;
use fortduel_core::types::{SimTime, TeamId};

use crate::systems;
use crate::world_setup;

/// The battle engine. Owns the ECS world and all per-battle state —
/// no process-wide counters, so concurrent engines never interfere.
pub struct BattleEngine {
    world: World,
    config: BattleConfig,
    time: SimTime,
    phase: BattlePhase,
    rng: ChaCha8Rng,
    next_unit_id: u32,
    command_queue: VecDeque<BattleCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<BattleEvent>,
    eliminated: Vec<TeamId>,
    winner: Option<TeamId>,
    stalemate: bool,
}

impl BattleEngine {
    /// Create a new engine for the given battle configuration.
    pub fn new(config: BattleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Ok(Self {
            world: World::new(),
            config,
            time: SimTime::default(),
            phase: BattlePhase::default(),
            rng,
            next_unit_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            eliminated: Vec::new(),
            winner: None,
            stalemate: false,
        })
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: BattleCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = BattleCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. While paused or completed, no state mutates and the
    /// snapshot reflects the frozen world.
    pub fn tick(&mut self) -> BattleSnapshot {
        self.process_commands();

        if self.phase == BattlePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            &self.time,
            self.phase,
            &self.config,
            &self.eliminated,
            self.winner,
            self.stalemate,
            events,
        )
    }

    /// Get the current battle phase.
    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Winning team, if the battle has been decided.
    pub fn winner(&self) -> Option<TeamId> {
        self.winner
    }

    /// True iff the battle ended with no survivors at all.
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    /// Teams whose fort has been destroyed, in elimination order.
    pub fn eliminated(&self) -> &[TeamId] {
        &self.eliminated
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the battle configuration.
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: BattleCommand) {
        match command {
            BattleCommand::Start => {
                if matches!(self.phase, BattlePhase::Setup | BattlePhase::Complete) {
                    self.world.clear();
                    self.time = SimTime::default();
                    self.next_unit_id = 0;
                    self.eliminated.clear();
                    self.winner = None;
                    self.stalemate = false;

                    world_setup::spawn_forts(&mut self.world, &mut self.rng, &self.config);
                    world_setup::muster_soldiers(
                        &mut self.world,
                        &mut self.rng,
                        &mut self.next_unit_id,
                        &self.config,
                    );

                    self.phase = BattlePhase::Active;
                    tracing::info!(
                        teams = self.config.teams.len(),
                        fort_hp = self.config.fort_hp,
                        "battle started"
                    );
                }
            }
            BattleCommand::Pause => {
                if self.phase == BattlePhase::Active {
                    self.phase = BattlePhase::Paused;
                }
            }
            BattleCommand::Resume => {
                if self.phase == BattlePhase::Paused {
                    self.phase = BattlePhase::Active;
                }
            }
        }
    }

    /// Run all systems in order for one tick.
    fn run_systems(&mut self) {
        let tick = self.time.tick;

        // 1. Movement (wander/seek for every living soldier)
        systems::movement::run(&mut self.world, &mut self.rng, tick, &self.config);
        // 2. Firing decisions (cooldown gate, projectile spawning)
        systems::combat::run_firing(&mut self.world, tick, &mut self.next_unit_id);
        // 3. Projectile advance, bounds check, collisions
        systems::combat::run_projectiles(&mut self.world, &self.config, &mut self.events);
        // 4. Death fades and removal of expired entities
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 5. Reinforcement clocks
        systems::reinforcement::run(
            &mut self.world,
            &mut self.rng,
            tick,
            &mut self.next_unit_id,
            &self.config,
            &mut self.events,
        );
        // 6. Elimination bookkeeping + terminal-state check
        self.record_eliminations();
        self.detect_outcome();
    }

    /// Record newly destroyed forts in the cumulative eliminated set.
    /// A team once eliminated never un-eliminates; its soldiers fight on.
    fn record_eliminations(&mut self) {
        let mut query = self.world.query::<&Fort>();
        for (_entity, fort) in query.iter() {
            if fort.destroyed && !self.eliminated.contains(&fort.team) {
                self.eliminated.push(fort.team);
                self.events.push(BattleEvent::FortDestroyed { team: fort.team });
                tracing::info!(team = fort.team.0, tick = self.time.tick, "fort destroyed");
            }
        }
    }

    /// Check the terminal condition and latch the result.
    fn detect_outcome(&mut self) {
        match systems::victory::evaluate(&self.world) {
            Verdict::Undecided => {}
            Verdict::Winner(team) => {
                self.winner = Some(team);
                self.phase = BattlePhase::Complete;
                self.events.push(BattleEvent::Victory { team });
                tracing::info!(team = team.0, tick = self.time.tick, "battle decided");
            }
            Verdict::Stalemate => {
                self.stalemate = true;
                self.phase = BattlePhase::Complete;
                self.events.push(BattleEvent::Stalemate);
                tracing::info!(tick = self.time.tick, "battle ended in stalemate");
            }
        }
    }
}
