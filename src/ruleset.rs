//! Rulesets
//!
//! The endless and leveled games share one core; everything that differs
//! between them lives in a [`Ruleset`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{RulesetError, RulesetResult};
use crate::sim::geometry::Band;
use crate::sim::state::ObstacleKind;

/// Built-in ruleset presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// Single endless level, one point per crossing
    #[default]
    Simple,
    /// Fixed number of levels with a difficulty ratchet
    Leveled,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Simple => "Simple",
            Variant::Leveled => "Leveled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "simple" | "endless" => Some(Variant::Simple),
            "leveled" | "levelled" | "levels" => Some(Variant::Leveled),
            _ => None,
        }
    }
}

/// Per-kind spawn ranges.
///
/// Width is `floor(u * width_span + width_min)` player sizes; speed magnitude
/// is `floor(u * speed_span + level)` times the ruleset's speed multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnTable {
    /// Obstacles created when a session starts
    pub initial_count: usize,
    /// Smallest width in player sizes
    pub width_min: i32,
    /// Number of distinct widths above the minimum
    pub width_span: i32,
    /// Number of distinct speeds above the level's base speed
    pub speed_span: i32,
}

/// How crossings are scored and when the game ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Progression {
    /// Every crossing scores and sends the player back to the start
    Endless { points_per_crossing: u64 },
    /// Each crossing scores `level * points_per_level` and advances the level;
    /// crossing on the last level wins
    Leveled {
        total_levels: u32,
        points_per_level: u64,
    },
}

/// Playfield layout and balance for one game variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ruleset {
    pub variant: Variant,

    // === Playfield ===
    pub panel_width: i32,
    pub panel_height: i32,
    /// Crossing counts once the player's top edge is above this line
    pub goal_height: i32,
    pub river: Band,
    pub median: Band,
    pub road: Band,
    pub start_zone: Band,

    // === Entities ===
    pub player_size: i32,
    /// Top edge of the player at spawn; also the lowest row it may step to
    pub start_y: i32,
    pub obstacle_height: i32,

    // === Balance ===
    pub vehicles: SpawnTable,
    pub logs: SpawnTable,
    pub speed_multiplier: i32,
    pub progression: Progression,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::simple()
    }
}

impl Ruleset {
    /// Endless game: river on the top half, road on the bottom half
    pub fn simple() -> Self {
        let road_top = PANEL_HEIGHT / 2;
        let start_y = PANEL_HEIGHT - SIMPLE_PLAYER_SIZE;
        Self {
            variant: Variant::Simple,
            panel_width: PANEL_WIDTH,
            panel_height: PANEL_HEIGHT,
            goal_height: 0,
            river: Band::new(0, road_top - MEDIAN_HEIGHT),
            median: Band::new(road_top - MEDIAN_HEIGHT, road_top),
            road: Band::new(road_top, start_y),
            start_zone: Band::new(start_y, PANEL_HEIGHT),
            player_size: SIMPLE_PLAYER_SIZE,
            start_y,
            obstacle_height: OBSTACLE_HEIGHT,
            vehicles: SpawnTable {
                initial_count: SIMPLE_INITIAL_OBSTACLES,
                width_min: 2,
                width_span: 3,
                speed_span: 3,
            },
            logs: SpawnTable {
                initial_count: SIMPLE_INITIAL_OBSTACLES,
                width_min: 3,
                width_span: 2,
                speed_span: 2,
            },
            speed_multiplier: 1,
            progression: Progression::Endless {
                points_per_crossing: 1,
            },
        }
    }

    /// Five levels: goal strip, river, median, road, start zone
    pub fn leveled() -> Self {
        let river_bottom = PANEL_HEIGHT / 3;
        let road_top = river_bottom + MEDIAN_HEIGHT;
        let start_zone_top = PANEL_HEIGHT - LEVELED_START_ZONE_HEIGHT;
        Self {
            variant: Variant::Leveled,
            panel_width: PANEL_WIDTH,
            panel_height: PANEL_HEIGHT,
            goal_height: LEVELED_GOAL_HEIGHT,
            river: Band::new(LEVELED_GOAL_HEIGHT, river_bottom),
            median: Band::new(river_bottom, road_top),
            road: Band::new(road_top, start_zone_top),
            start_zone: Band::new(start_zone_top, PANEL_HEIGHT),
            player_size: LEVELED_PLAYER_SIZE,
            start_y: start_zone_top - LEVELED_PLAYER_SIZE,
            obstacle_height: OBSTACLE_HEIGHT,
            vehicles: SpawnTable {
                initial_count: LEVELED_INITIAL_OBSTACLES,
                width_min: 2,
                width_span: 3,
                speed_span: 3,
            },
            logs: SpawnTable {
                initial_count: LEVELED_INITIAL_OBSTACLES,
                width_min: LOG_LENGTH_MULTIPLIER,
                width_span: 2,
                speed_span: 2,
            },
            speed_multiplier: LEVELED_SPEED_MULTIPLIER,
            progression: Progression::Leveled {
                total_levels: LEVELED_TOTAL_LEVELS,
                points_per_level: 10,
            },
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Simple => Self::simple(),
            Variant::Leveled => Self::leveled(),
        }
    }

    /// Band an obstacle kind lives in
    pub fn band_for(&self, kind: ObstacleKind) -> Band {
        match kind {
            ObstacleKind::Vehicle => self.road,
            ObstacleKind::Log => self.river,
        }
    }

    /// Spawn ranges for an obstacle kind
    pub fn spawn_table(&self, kind: ObstacleKind) -> &SpawnTable {
        match kind {
            ObstacleKind::Vehicle => &self.vehicles,
            ObstacleKind::Log => &self.logs,
        }
    }

    /// Highest level, if the game has levels at all
    pub fn max_level(&self) -> Option<u32> {
        match self.progression {
            Progression::Endless { .. } => None,
            Progression::Leveled { total_levels, .. } => Some(total_levels),
        }
    }

    /// Check every layout and balance precondition.
    pub fn validate(&self) -> RulesetResult<()> {
        if self.panel_width <= 0 || self.panel_height <= 0 {
            return Err(RulesetError::EmptyPanel {
                width: self.panel_width,
                height: self.panel_height,
            });
        }
        if self.player_size <= 0 {
            return Err(RulesetError::InvalidPlayerSize(self.player_size));
        }
        if self.obstacle_height <= 0 {
            return Err(RulesetError::InvalidObstacleHeight(self.obstacle_height));
        }
        if self.goal_height < 0 {
            return Err(RulesetError::InvalidGoalHeight(self.goal_height));
        }

        let bands = [
            ("river", self.river),
            ("median", self.median),
            ("road", self.road),
            ("start", self.start_zone),
        ];
        for (name, band) in bands {
            if band.height() <= 0 {
                return Err(RulesetError::EmptyBand {
                    band: name,
                    top: band.top,
                    bottom: band.bottom,
                });
            }
            if band.bottom > self.panel_height {
                return Err(RulesetError::BandOutsidePanel { band: name });
            }
            if self.player_size > band.height() {
                return Err(RulesetError::PlayerTooLarge {
                    band: name,
                    size: self.player_size,
                    height: band.height(),
                });
            }
        }

        if self.river.top < self.goal_height {
            return Err(RulesetError::BandOverlap {
                upper: "goal",
                lower: "river",
            });
        }
        for pair in bands.windows(2) {
            let (upper, upper_band) = pair[0];
            let (lower, lower_band) = pair[1];
            if upper_band.bottom > lower_band.top {
                return Err(RulesetError::BandOverlap { upper, lower });
            }
        }

        for (name, band) in [("river", self.river), ("road", self.road)] {
            if self.obstacle_height > band.height() {
                return Err(RulesetError::ObstacleTooTall {
                    band: name,
                    obstacle: self.obstacle_height,
                    height: band.height(),
                });
            }
        }

        if self.start_y < self.road.top || self.start_y + self.player_size > self.panel_height {
            return Err(RulesetError::InvalidStart(self.start_y));
        }

        for (name, table) in [("vehicle", &self.vehicles), ("log", &self.logs)] {
            if table.width_min <= 0 || table.width_span <= 0 || table.speed_span <= 0 {
                return Err(RulesetError::InvalidSpawnTable(name));
            }
        }
        if self.speed_multiplier <= 0 {
            return Err(RulesetError::InvalidSpeedMultiplier(self.speed_multiplier));
        }
        if self.max_level() == Some(0) {
            return Err(RulesetError::NoLevels);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert_eq!(Ruleset::simple().validate(), Ok(()));
        assert_eq!(Ruleset::leveled().validate(), Ok(()));
    }

    #[test]
    fn test_simple_layout() {
        let rules = Ruleset::simple();
        assert_eq!(rules.start_y, 550);
        assert_eq!(rules.road, Band::new(300, 550));
        assert_eq!(rules.river, Band::new(0, 250));
        assert_eq!(rules.max_level(), None);
    }

    #[test]
    fn test_leveled_layout() {
        let rules = Ruleset::leveled();
        assert_eq!(rules.start_y, 510);
        assert_eq!(rules.river, Band::new(40, 200));
        assert_eq!(rules.road, Band::new(250, 540));
        assert_eq!(rules.max_level(), Some(5));
    }

    #[test]
    fn test_variant_round_trip_names() {
        for variant in [Variant::Simple, Variant::Leveled] {
            assert_eq!(Variant::from_str(variant.as_str()), Some(variant));
        }
        assert_eq!(Variant::from_str("hard"), None);
    }

    #[test]
    fn test_rejects_overlapping_bands() {
        let mut rules = Ruleset::leveled();
        rules.median = Band::new(150, 260);
        assert_eq!(
            rules.validate(),
            Err(RulesetError::BandOverlap {
                upper: "river",
                lower: "median"
            })
        );
    }

    #[test]
    fn test_rejects_oversized_player() {
        let mut rules = Ruleset::simple();
        rules.player_size = 70;
        assert!(matches!(
            rules.validate(),
            Err(RulesetError::PlayerTooLarge { band: "median", .. })
        ));
    }

    #[test]
    fn test_rejects_degenerate_panel() {
        let mut rules = Ruleset::simple();
        rules.panel_width = 0;
        assert!(matches!(
            rules.validate(),
            Err(RulesetError::EmptyPanel { width: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_zero_spawn_range() {
        let mut rules = Ruleset::simple();
        rules.logs.speed_span = 0;
        assert_eq!(rules.validate(), Err(RulesetError::InvalidSpawnTable("log")));
    }

    #[test]
    fn test_rejects_zero_levels() {
        let mut rules = Ruleset::leveled();
        rules.progression = Progression::Leveled {
            total_levels: 0,
            points_per_level: 10,
        };
        assert_eq!(rules.validate(), Err(RulesetError::NoLevels));
    }

    #[test]
    fn test_rejects_start_above_road() {
        let mut rules = Ruleset::leveled();
        rules.start_y = 100;
        assert_eq!(rules.validate(), Err(RulesetError::InvalidStart(100)));
    }
}
