//! Frog Crossing - A lane-crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (reducer, spawner, collisions, game state)
//! - `platform`: Clock, keyboard input and the merged event bus
//! - `session`: Single subscriber folding the event bus into states
//! - `renderer`: Render-sync contract and backends
//! - `config`: Start-up configuration

pub mod config;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;

pub use config::{GameConfig, LaneConfig};
pub use error::{ConfigError, SimError};
pub use session::Session;

/// Game configuration constants
pub mod consts {
    /// Canvas edge length (square surface)
    pub const CANVAS_SIZE: f32 = 600.0;

    /// Clock interval between ticks (milliseconds)
    pub const TICK_INTERVAL_MS: u32 = 50;

    /// Frog defaults (position is the centre of its box)
    pub const FROG_START_X: f32 = 300.0;
    pub const FROG_START_Y: f32 = 570.0;
    pub const FROG_SIZE: f32 = 50.0;
    /// Distance covered by one key press
    pub const HOP_DISTANCE: f32 = 60.0;

    /// Obstacle speeds (distance per tick)
    pub const QUICK_VELOCITY: f32 = 2.0;
    pub const SLOW_VELOCITY: f32 = 0.5;

    /// Obstacle sizes
    pub const SMALL_OBJECT: f32 = 80.0;
    pub const LARGE_OBJECT: f32 = 120.0;
    pub const OBJECT_HEIGHT: f32 = 60.0;

    /// Lane baselines (top edge of each band)
    pub const ROW_ONE_Y: f32 = 120.0;
    pub const ROW_TWO_Y: f32 = 180.0;
    pub const ROW_THREE_Y: f32 = 240.0;
    pub const ROW_FOUR_Y: f32 = 360.0;
    pub const ROW_FIVE_Y: f32 = 420.0;
    pub const ROW_SIX_Y: f32 = 480.0;

    /// Number of hazard lanes
    pub const LANE_COUNT: usize = 6;
}
