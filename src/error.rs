//! Error types for ruleset validation.

use thiserror::Error;

/// Result type for building a world from a ruleset.
pub type RulesetResult<T> = Result<T, RulesetError>;

/// Configuration problems detected once, before the first tick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesetError {
    /// Panel has a zero or negative dimension.
    #[error("panel must have a positive size, got {width}x{height}")]
    EmptyPanel { width: i32, height: i32 },

    /// Player size is zero or negative.
    #[error("player size must be positive, got {0}")]
    InvalidPlayerSize(i32),

    /// Obstacle height is zero or negative.
    #[error("obstacle height must be positive, got {0}")]
    InvalidObstacleHeight(i32),

    /// Goal strip has a negative height.
    #[error("goal strip height must not be negative, got {0}")]
    InvalidGoalHeight(i32),

    /// A band has no rows.
    #[error("{band} band is empty ({top}..{bottom})")]
    EmptyBand {
        band: &'static str,
        top: i32,
        bottom: i32,
    },

    /// Two neighbouring bands overlap or are out of order.
    #[error("{upper} band must end before the {lower} band starts")]
    BandOverlap {
        upper: &'static str,
        lower: &'static str,
    },

    /// A band extends past the bottom of the panel.
    #[error("{band} band extends below the panel")]
    BandOutsidePanel { band: &'static str },

    /// Player does not fit inside a band.
    #[error("player size {size} does not fit in the {band} band (height {height})")]
    PlayerTooLarge {
        band: &'static str,
        size: i32,
        height: i32,
    },

    /// Obstacles do not fit inside their band.
    #[error("obstacle height {obstacle} does not fit in the {band} band (height {height})")]
    ObstacleTooTall {
        band: &'static str,
        obstacle: i32,
        height: i32,
    },

    /// Start line is not between the road and the bottom edge.
    #[error("start line {0} must lie between the road and the bottom of the panel")]
    InvalidStart(i32),

    /// Spawn table has a non-positive range.
    #[error("{0} spawn table must have positive width and speed ranges")]
    InvalidSpawnTable(&'static str),

    /// Speed multiplier is zero or negative.
    #[error("speed multiplier must be positive, got {0}")]
    InvalidSpeedMultiplier(i32),

    /// Leveled progression with zero levels.
    #[error("leveled progression needs at least one level")]
    NoLevels,
}
