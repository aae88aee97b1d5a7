//! Game state and core simulation types
//!
//! The whole session lives in one owned [`World`]; ticks and inputs take it
//! by `&mut`, renders read it (or an owned [`Snapshot`](super::view::Snapshot)).

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::pool;
use super::random::RandomSource;
use crate::error::RulesetResult;
use crate::ruleset::Ruleset;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Hit by a vehicle or fell in the river
    GameOver,
    /// Crossed on the final level
    GameWon,
}

impl GamePhase {
    /// Terminal phases only leave through a restart
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// What an obstacle is; decides its band, spawn ranges and collision outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Road traffic; touching one ends the session
    Vehicle,
    /// River platform; the player must ride one while in the river
    Log,
}

impl ObstacleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleKind::Vehicle => "vehicle",
            ObstacleKind::Log => "log",
        }
    }
}

/// Notable things that happened during the last tick or input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player overlapped a vehicle
    Squashed,
    /// Player was in the river with no log underneath
    Drowned,
    /// Player reached the goal and was sent back to the start
    Crossed { points: u64 },
    /// Level advanced (carries the new level)
    LevelUp { level: u32 },
    /// Final level crossed
    Won { score: u64 },
    /// Session reinitialized by the restart input
    Restarted,
}

/// The player token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
}

impl Player {
    pub fn new(start: IVec2, size: i32) -> Self {
        Self {
            rect: Rect::new(start.x, start.y, size, size),
        }
    }

    #[inline]
    pub fn pos(&self) -> IVec2 {
        self.rect.pos
    }

    /// Grid step and the square's side length
    #[inline]
    pub fn size(&self) -> i32 {
        self.rect.size.x
    }

    pub fn shift(&mut self, delta: IVec2) {
        self.rect.pos += delta;
    }

    pub fn reset(&mut self, start: IVec2) {
        self.rect.pos = start;
    }
}

/// A moving vehicle or log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub rect: Rect,
    /// Horizontal pixels per tick; the sign is the direction of travel
    pub speed: i32,
}

impl Obstacle {
    /// Move one tick along the lane
    #[inline]
    pub fn advance(&mut self) {
        self.rect.pos.x += self.speed;
    }

    /// Fully past the edge it is driving toward
    pub fn has_exited(&self, panel_width: i32) -> bool {
        (self.speed > 0 && self.rect.left() > panel_width)
            || (self.speed < 0 && self.rect.right() < 0)
    }

    /// Where the obstacle will be after the next advance
    #[inline]
    pub fn next_rect(&self) -> Rect {
        self.rect.translated(IVec2::new(self.speed, 0))
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct World<R = Pcg32> {
    pub ruleset: Ruleset,
    /// Spawn randomization
    pub rng: R,
    pub player: Player,
    /// Road traffic
    pub vehicles: Vec<Obstacle>,
    /// River platforms
    pub logs: Vec<Obstacle>,
    pub score: u64,
    /// Current level (always 1 for endless rulesets)
    pub level: u32,
    pub phase: GamePhase,
    /// Ticks simulated while playing, across restarts
    pub time_ticks: u64,
    /// Events from the most recent tick or input
    pub events: Vec<GameEvent>,
}

impl World<Pcg32> {
    /// Create a world whose spawns replay from `seed`
    pub fn seeded(ruleset: Ruleset, seed: u64) -> RulesetResult<Self> {
        Self::new(ruleset, Pcg32::seed_from_u64(seed))
    }
}

impl<R: RandomSource> World<R> {
    /// Validate the ruleset and start the first session
    pub fn new(ruleset: Ruleset, rng: R) -> RulesetResult<Self> {
        ruleset.validate()?;

        let start = start_position(&ruleset);
        let mut world = Self {
            player: Player::new(start, ruleset.player_size),
            ruleset,
            rng,
            vehicles: Vec::new(),
            logs: Vec::new(),
            score: 0,
            level: 1,
            phase: GamePhase::Playing,
            time_ticks: 0,
            events: Vec::new(),
        };
        world.reset_session();
        log::info!(
            "{} session started: {} vehicles, {} logs",
            world.ruleset.variant.as_str(),
            world.vehicles.len(),
            world.logs.len()
        );

        Ok(world)
    }

    /// Reinitialize score, level, phase, both pools and the player
    pub fn reset_session(&mut self) {
        self.score = 0;
        self.level = 1;
        self.phase = GamePhase::Playing;
        self.vehicles.clear();
        self.logs.clear();
        self.reset_player();

        for _ in 0..self.ruleset.vehicles.initial_count {
            self.spawn_obstacle(ObstacleKind::Vehicle);
        }
        for _ in 0..self.ruleset.logs.initial_count {
            self.spawn_obstacle(ObstacleKind::Log);
        }
    }

    /// Add one freshly randomized obstacle to the matching pool
    pub fn spawn_obstacle(&mut self, kind: ObstacleKind) {
        let obstacle = pool::spawn(&self.ruleset, kind, self.level, &mut self.rng);
        self.pool_mut(kind).push(obstacle);
    }

    /// Send the player back to the start line
    pub fn reset_player(&mut self) {
        let start = self.start_position();
        self.player.reset(start);
    }
}

impl<R> World<R> {
    /// Player spawn point: horizontally centred on the start line
    pub fn start_position(&self) -> IVec2 {
        start_position(&self.ruleset)
    }

    pub fn pool(&self, kind: ObstacleKind) -> &[Obstacle] {
        match kind {
            ObstacleKind::Vehicle => &self.vehicles,
            ObstacleKind::Log => &self.logs,
        }
    }

    pub fn pool_mut(&mut self, kind: ObstacleKind) -> &mut Vec<Obstacle> {
        match kind {
            ObstacleKind::Vehicle => &mut self.vehicles,
            ObstacleKind::Log => &mut self.logs,
        }
    }

    pub fn max_level(&self) -> Option<u32> {
        self.ruleset.max_level()
    }
}

fn start_position(ruleset: &Ruleset) -> IVec2 {
    IVec2::new(
        ruleset.panel_width / 2 - ruleset.player_size / 2,
        ruleset.start_y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RulesetError;

    #[test]
    fn test_new_world_starts_playing() {
        let world = World::seeded(Ruleset::leveled(), 1).unwrap();
        assert_eq!(world.phase, GamePhase::Playing);
        assert_eq!(world.score, 0);
        assert_eq!(world.level, 1);
        assert_eq!(world.vehicles.len(), 8);
        assert_eq!(world.logs.len(), 8);
        assert_eq!(world.player.pos(), IVec2::new(385, 510));
    }

    #[test]
    fn test_simple_start_position() {
        let world = World::seeded(Ruleset::simple(), 1).unwrap();
        assert_eq!(world.player.pos(), IVec2::new(375, 550));
        assert_eq!(world.player.size(), 50);
        assert_eq!(world.vehicles.len(), 5);
        assert_eq!(world.logs.len(), 5);
    }

    #[test]
    fn test_invalid_ruleset_is_rejected() {
        let mut rules = Ruleset::simple();
        rules.speed_multiplier = 0;
        let err = World::seeded(rules, 1).unwrap_err();
        assert_eq!(err, RulesetError::InvalidSpeedMultiplier(0));
    }

    #[test]
    fn test_pools_hold_their_own_kind() {
        let world = World::seeded(Ruleset::leveled(), 3).unwrap();
        assert!(world.vehicles.iter().all(|o| o.kind == ObstacleKind::Vehicle));
        assert!(world.logs.iter().all(|o| o.kind == ObstacleKind::Log));
    }

    #[test]
    fn test_obstacle_exit_depends_on_direction() {
        let mut rightward = Obstacle {
            kind: ObstacleKind::Vehicle,
            rect: Rect::new(800, 300, 100, 40),
            speed: 2,
        };
        assert!(!rightward.has_exited(800));
        rightward.advance();
        assert!(rightward.has_exited(800));

        let leftward = Obstacle {
            kind: ObstacleKind::Log,
            rect: Rect::new(-100, 50, 100, 40),
            speed: -2,
        };
        // Right edge sits exactly on zero
        assert!(!leftward.has_exited(800));
        assert!(leftward.next_rect().right() < 0);
    }

    #[test]
    fn test_terminal_phases() {
        assert!(!GamePhase::Playing.is_terminal());
        assert!(GamePhase::GameOver.is_terminal());
        assert!(GamePhase::GameWon.is_terminal());
    }
}
