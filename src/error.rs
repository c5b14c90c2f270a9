//! Error types
//!
//! Steady-state play has no error path: crashes, drownings and wins are
//! ordinary game states. Errors only come from building bodies and from
//! validating the start-up configuration.

use crate::sim::BodyKind;

/// Errors raised while constructing simulation entities.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    /// A body was given a zero, negative or non-finite dimension.
    #[error("{kind:?} body needs positive dimensions, got {width}x{height}")]
    InvalidDimensions {
        kind: BodyKind,
        width: f32,
        height: f32,
    },
}

/// Errors raised while loading or validating a [`crate::GameConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("expected {expected} lanes, found {found}")]
    LaneCount { expected: usize, found: usize },

    #[error("lane {lane}: spawn interval must be at least one tick")]
    ZeroSpawnInterval { lane: usize },

    #[error("lane {lane}: speed must be positive, got {speed}")]
    InvalidSpeed { lane: usize, speed: f32 },

    #[error("lane {lane}: kind must be vehicle or platform")]
    FrogLane { lane: usize },

    #[error("lane {lane}: baseline {row_y} lies outside the canvas")]
    RowOutOfBounds { lane: usize, row_y: f32 },

    #[error("lane {lane}: baseline {row_y} overlaps the lane above, which ends at {previous_end}")]
    LaneOverlap {
        lane: usize,
        row_y: f32,
        previous_end: f32,
    },

    #[error("obstacle width set is empty")]
    NoObstacleWidths,

    #[error("tick interval must be at least 1 ms")]
    ZeroTickInterval,

    #[error("tick interval of {ms} ms is too long for the browser timer")]
    TickIntervalTooLong { ms: u32 },

    #[error("frog start ({x}, {y}) lies outside the canvas")]
    FrogStartOutOfBounds { x: f32, y: f32 },

    #[error(transparent)]
    Body(#[from] SimError),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
