//! Events folded by the reducer

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One entry of the merged clock/input stream
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Clock tick, `n` counts up from 0 for each attachment
    Tick(u64),
    /// Frog hop requested by a key press
    Move { dx: f32, dy: f32 },
}

impl GameEvent {
    pub fn movement(delta: Vec2) -> Self {
        GameEvent::Move {
            dx: delta.x,
            dy: delta.y,
        }
    }
}
