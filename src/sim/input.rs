//! Discrete player input
//!
//! One call per key press; held keys do not repeat. Moves are grid steps of
//! the player's size and never check obstacles (the next tick does that).

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::random::RandomSource;
use super::state::{GameEvent, World};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Offset of one grid step
    pub fn delta(&self, step: i32) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -step),
            Direction::Down => IVec2::new(0, step),
            Direction::Left => IVec2::new(-step, 0),
            Direction::Right => IVec2::new(step, 0),
        }
    }
}

/// A single input event from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    Move(Direction),
    /// Start a new session; only honoured after game over or win
    Restart,
}

/// Where the player would land, or `None` if the move is not allowed.
///
/// Up is always allowed so the player can step into the goal strip. Down may
/// not pass the start line; left and right may not leave the playfield.
pub fn move_target<R>(world: &World<R>, direction: Direction) -> Option<Rect> {
    let rules = &world.ruleset;
    let target = world
        .player
        .rect
        .translated(direction.delta(world.player.size()));

    let allowed = match direction {
        Direction::Up => true,
        Direction::Down => target.top() <= rules.start_y,
        Direction::Left => target.left() >= 0,
        Direction::Right => target.right() <= rules.panel_width,
    };
    allowed.then_some(target)
}

/// Apply one input event. Returns whether the world changed.
pub fn apply_input<R: RandomSource>(world: &mut World<R>, input: Input) -> bool {
    match input {
        Input::Restart if world.phase.is_terminal() => {
            world.reset_session();
            world.events.clear();
            world.events.push(GameEvent::Restarted);
            log::info!("Session restarted");
            true
        }
        Input::Restart => false,
        Input::Move(_) if world.phase.is_terminal() => false,
        Input::Move(direction) => match move_target(world, direction) {
            Some(target) => {
                world.player.rect = target;
                true
            }
            None => false,
        },
    }
}
