//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected random source only
//! - Stable pool iteration order
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod geometry;
pub mod input;
pub mod pool;
pub mod random;
pub mod state;
pub mod tick;
pub mod view;

pub use collision::{Resolution, resolve};
pub use geometry::{Band, Rect};
pub use input::{Direction, Input, apply_input, move_target};
pub use random::{RandomSource, ScriptedSource};
pub use state::{GameEvent, GamePhase, Obstacle, ObstacleKind, Player, World};
pub use tick::{TickOutcome, tick};
pub use view::{BandKind, BandRect, Drawable, DrawableKind, Hud, Snapshot};
