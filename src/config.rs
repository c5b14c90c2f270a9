//! Start-up configuration
//!
//! Read once when the process starts (a JSON file natively, LocalStorage on
//! the web) and never changed while a session runs.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::{Body, BodyKind};

/// Per-lane obstacle settings. Direction is not configurable: lanes
/// alternate by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneConfig {
    pub kind: BodyKind,
    /// Top edge of the band
    pub row_y: f32,
    /// Speed magnitude (distance per tick)
    pub speed: f32,
    /// Ticks between spawns
    pub spawn_interval: u64,
}

impl LaneConfig {
    fn new(kind: BodyKind, row_y: f32, speed: f32, spawn_interval: u64) -> Self {
        Self {
            kind,
            row_y,
            speed,
            spawn_interval,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for obstacle width rolls
    pub seed: u64,
    /// Clock interval (milliseconds)
    pub tick_interval_ms: u32,
    /// Frog start position (centre)
    pub frog_start: [f32; 2],
    pub obstacle_height: f32,
    /// Widths an obstacle may be spawned with
    pub obstacle_widths: Vec<f32>,
    /// Hazard lanes, top to bottom
    pub lanes: Vec<LaneConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        use BodyKind::{Platform, Vehicle};

        Self {
            seed: 0x5eed,
            tick_interval_ms: TICK_INTERVAL_MS,
            frog_start: [FROG_START_X, FROG_START_Y],
            obstacle_height: OBJECT_HEIGHT,
            obstacle_widths: vec![SMALL_OBJECT, LARGE_OBJECT],
            lanes: vec![
                // River
                LaneConfig::new(Platform, ROW_ONE_Y, SLOW_VELOCITY, 360),
                LaneConfig::new(Platform, ROW_TWO_Y, QUICK_VELOCITY, 90),
                LaneConfig::new(Platform, ROW_THREE_Y, SLOW_VELOCITY, 340),
                // Road
                LaneConfig::new(Vehicle, ROW_FOUR_Y, QUICK_VELOCITY, 140),
                LaneConfig::new(Vehicle, ROW_FIVE_Y, SLOW_VELOCITY, 600),
                LaneConfig::new(Vehicle, ROW_SIX_Y, QUICK_VELOCITY, 130),
            ],
        }
    }
}

impl GameConfig {
    /// Frog start as a vector
    pub fn frog_start(&self) -> Vec2 {
        Vec2::from(self.frog_start)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.tick_interval_ms))
    }

    /// Check every constant before a run is built from it
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lanes.len() != LANE_COUNT {
            return Err(ConfigError::LaneCount {
                expected: LANE_COUNT,
                found: self.lanes.len(),
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if i32::try_from(self.tick_interval_ms).is_err() {
            return Err(ConfigError::TickIntervalTooLong {
                ms: self.tick_interval_ms,
            });
        }
        if self.obstacle_widths.is_empty() {
            return Err(ConfigError::NoObstacleWidths);
        }

        let [x, y] = self.frog_start;
        let in_canvas = |v: f32| (0.0..=CANVAS_SIZE).contains(&v);
        if !in_canvas(x) || !in_canvas(y) {
            return Err(ConfigError::FrogStartOutOfBounds { x, y });
        }

        for (lane, cfg) in self.lanes.iter().enumerate() {
            if cfg.kind == BodyKind::Frog {
                return Err(ConfigError::FrogLane { lane });
            }
            if cfg.spawn_interval == 0 {
                return Err(ConfigError::ZeroSpawnInterval { lane });
            }
            if !(cfg.speed.is_finite() && cfg.speed > 0.0) {
                return Err(ConfigError::InvalidSpeed {
                    lane,
                    speed: cfg.speed,
                });
            }
            if !(0.0..CANVAS_SIZE).contains(&cfg.row_y) {
                return Err(ConfigError::RowOutOfBounds {
                    lane,
                    row_y: cfg.row_y,
                });
            }
            // Every obstacle this lane could spawn must be a valid body
            for &width in &self.obstacle_widths {
                let size = Vec2::new(width, self.obstacle_height);
                Body::new(0, cfg.kind, Vec2::ZERO, size, cfg.speed, 0)?;
            }
        }

        // Lanes run top to bottom and their bands never share a row
        for (lane, pair) in self.lanes.windows(2).enumerate() {
            let previous_end = pair[0].row_y + self.obstacle_height;
            if pair[1].row_y < previous_end {
                return Err(ConfigError::LaneOverlap {
                    lane: lane + 1,
                    row_y: pair[1].row_y,
                    previous_end,
                });
            }
        }

        Ok(())
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "frog_crossing_config";

    /// Load config from LocalStorage (WASM only), falling back to defaults
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Load config from an optional JSON file (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: Option<&std::path::Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                let config = Self::from_json(&json)?;
                log::info!("Loaded config from {}", path.display());
                Ok(config)
            }
            None => {
                log::info!("Using default config");
                Ok(Self::default())
            }
        }
    }
}
