//! Game state and lane types
//!
//! A `GameState` is a complete snapshot: folding the same events over the
//! same initial state always produces the same sequence of snapshots.

use serde::{Deserialize, Serialize};

use super::body::{Body, BodyKind};
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Current status of the run. Everything but `Playing` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    /// Hit by a vehicle
    Crushed,
    /// In a water lane with nothing underneath
    Drowned,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        *self != GameStatus::Playing
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "Playing",
            GameStatus::Won => "Won",
            GameStatus::Crushed => "Crushed",
            GameStatus::Drowned => "Drowned",
        }
    }
}

/// Travel direction of a lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

impl Direction {
    /// Lanes alternate, starting left-to-right at index 0
    pub fn for_lane(index: usize) -> Self {
        if index.is_multiple_of(2) {
            Direction::LeftToRight
        } else {
            Direction::RightToLeft
        }
    }

    #[inline]
    pub fn sign(&self) -> f32 {
        match self {
            Direction::LeftToRight => 1.0,
            Direction::RightToLeft => -1.0,
        }
    }
}

/// One horizontal band of obstacles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    pub index: usize,
    pub kind: BodyKind,
    /// Top edge of the band
    pub row_y: f32,
    pub height: f32,
    /// Speed magnitude (distance per tick)
    pub speed: f32,
    pub direction: Direction,
    /// Ticks between spawns
    pub spawn_interval: u64,
    /// Obstacles, oldest spawn first
    pub bodies: Vec<Body>,
}

impl Lane {
    /// Signed per-tick velocity of every body in this lane
    #[inline]
    pub fn velocity(&self) -> f32 {
        self.speed * self.direction.sign()
    }

    /// Centre line of the band
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.row_y + self.height / 2.0
    }

    /// Water lanes only hold platforms
    pub fn is_water(&self) -> bool {
        self.kind == BodyKind::Platform
    }

    /// Whether a y coordinate falls inside the band `(row_y, row_y + height]`.
    /// The top boundary belongs to the band above, so the goal line at the
    /// top of the first lane is never water.
    pub fn contains_y(&self, y: f32) -> bool {
        y > self.row_y && y <= self.row_y + self.height
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed, mixed into every spawn roll
    pub seed: u64,
    pub frog: Body,
    pub lanes: Vec<Lane>,
    pub elapsed_ticks: u64,
    pub status: GameStatus,
    /// Top boundary of the topmost lane; reaching it wins
    pub goal_y: f32,
    /// Obstacle width choices
    pub widths: Vec<f32>,
    /// Next entity ID (0 is the frog)
    next_id: u32,
}

impl GameState {
    /// Build the initial state for a run from a validated configuration
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let frog = Body::frog(config.frog_start())?;
        let lanes: Vec<Lane> = config
            .lanes
            .iter()
            .enumerate()
            .map(|(index, lane)| Lane {
                index,
                kind: lane.kind,
                row_y: lane.row_y,
                height: config.obstacle_height,
                speed: lane.speed,
                direction: Direction::for_lane(index),
                spawn_interval: lane.spawn_interval,
                bodies: Vec::new(),
            })
            .collect();
        let goal_y = lanes.iter().map(|l| l.row_y).fold(f32::INFINITY, f32::min);

        Ok(Self {
            seed: config.seed,
            frog,
            lanes,
            elapsed_ticks: 0,
            status: GameStatus::Playing,
            goal_y,
            widths: config.obstacle_widths.clone(),
            next_id: 1,
        })
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Every obstacle in lane order
    pub fn obstacles(&self) -> impl Iterator<Item = &Body> {
        self.lanes.iter().flat_map(|lane| lane.bodies.iter())
    }

    /// Lane whose band holds the frog's centre, if any
    pub fn frog_lane(&self) -> Option<&Lane> {
        self.lanes.iter().find(|lane| lane.contains_y(self.frog.pos.y))
    }
}
