//! Read-only views for drawing
//!
//! A [`Snapshot`] is an owned copy of everything a frame needs, so a host can
//! hand it to another thread while the simulation keeps a single writer.

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::state::{GamePhase, ObstacleKind, World};

/// What a drawable rectangle represents (used for coloring)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawableKind {
    Player,
    Vehicle,
    Log,
}

impl From<ObstacleKind> for DrawableKind {
    fn from(kind: ObstacleKind) -> Self {
        match kind {
            ObstacleKind::Vehicle => DrawableKind::Vehicle,
            ObstacleKind::Log => DrawableKind::Log,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drawable {
    pub kind: DrawableKind,
    pub rect: Rect,
}

/// Background strip roles, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandKind {
    Goal,
    River,
    Median,
    Road,
    Start,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandRect {
    pub kind: BandKind,
    pub rect: Rect,
}

/// Scalar state for the heads-up display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u64,
    pub level: u32,
    /// `None` for endless rulesets
    pub max_level: Option<u32>,
    pub game_over: bool,
    pub game_won: bool,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub panel_width: i32,
    pub panel_height: i32,
    pub time_ticks: u64,
    pub bands: Vec<BandRect>,
    pub drawables: Vec<Drawable>,
    pub hud: Hud,
}

impl<R> World<R> {
    /// Logs, then vehicles, then the player on top
    pub fn drawables(&self) -> Vec<Drawable> {
        let obstacles = self.logs.iter().chain(self.vehicles.iter());
        let mut drawables: Vec<Drawable> = obstacles
            .map(|o| Drawable {
                kind: o.kind.into(),
                rect: o.rect,
            })
            .collect();
        drawables.push(Drawable {
            kind: DrawableKind::Player,
            rect: self.player.rect,
        });
        drawables
    }

    /// Background strips; the goal strip is omitted when it has no height
    pub fn bands(&self) -> Vec<BandRect> {
        let rules = &self.ruleset;
        let width = rules.panel_width;
        let mut bands = Vec::with_capacity(5);
        if rules.goal_height > 0 {
            bands.push(BandRect {
                kind: BandKind::Goal,
                rect: Rect::new(0, 0, width, rules.goal_height),
            });
        }
        for (kind, band) in [
            (BandKind::River, rules.river),
            (BandKind::Median, rules.median),
            (BandKind::Road, rules.road),
            (BandKind::Start, rules.start_zone),
        ] {
            bands.push(BandRect {
                kind,
                rect: band.to_rect(width),
            });
        }
        bands
    }

    pub fn hud(&self) -> Hud {
        Hud {
            score: self.score,
            level: self.level,
            max_level: self.max_level(),
            game_over: self.phase == GamePhase::GameOver,
            game_won: self.phase == GamePhase::GameWon,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            panel_width: self.ruleset.panel_width,
            panel_height: self.ruleset.panel_height,
            time_ticks: self.time_ticks,
            bands: self.bands(),
            drawables: self.drawables(),
            hud: self.hud(),
        }
    }
}
