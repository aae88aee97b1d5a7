//! River Crossing - A single-screen road and river crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (obstacle pools, collisions, progression)
//! - `ruleset`: Compiled-in rulesets and their validation
//! - `renderer`: CPU-side geometry for drawing a world snapshot
//! - `host`: Fixed-timestep clock for driving the simulation

pub mod error;
pub mod host;
pub mod renderer;
pub mod ruleset;
pub mod sim;

pub use error::{RulesetError, RulesetResult};
pub use ruleset::{Progression, Ruleset, SpawnTable, Variant};
pub use sim::{Direction, GameEvent, GamePhase, Input, Snapshot, TickOutcome, World, apply_input, tick};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (20 Hz)
    pub const TICK_MS: u64 = 50;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = TICK_MS as f32 / 1000.0;
    /// Maximum ticks per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame the clock will account for (seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Playfield dimensions (pixels)
    pub const PANEL_WIDTH: i32 = 800;
    pub const PANEL_HEIGHT: i32 = 600;

    /// Height of every vehicle and log
    pub const OBSTACLE_HEIGHT: i32 = 40;
    /// Height of the grass strip between river and road
    pub const MEDIAN_HEIGHT: i32 = 50;

    /// Simple ruleset: one endless level, big player
    pub const SIMPLE_PLAYER_SIZE: i32 = 50;
    pub const SIMPLE_INITIAL_OBSTACLES: usize = 5;

    /// Leveled ruleset: five levels between a goal strip and a start zone
    pub const LEVELED_PLAYER_SIZE: i32 = 30;
    pub const LEVELED_INITIAL_OBSTACLES: usize = 8;
    pub const LEVELED_SPEED_MULTIPLIER: i32 = 2;
    pub const LEVELED_TOTAL_LEVELS: u32 = 5;
    pub const LEVELED_GOAL_HEIGHT: i32 = 40;
    pub const LEVELED_START_ZONE_HEIGHT: i32 = 60;
    /// Length of a log in player sizes (minimum)
    pub const LOG_LENGTH_MULTIPLIER: i32 = 5;
}
