//! Headless renderer that reports scene changes through `log`

use super::Renderer;
use super::scene::SceneSync;
use crate::sim::{GameState, GameStatus};

/// Logs spawns, retirements and status changes instead of drawing
#[derive(Debug, Default)]
pub struct LogRenderer {
    scene: SceneSync,
    frames: u64,
    spawned: usize,
    retired: usize,
    last_status: Option<GameStatus>,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// States rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Obstacles that appeared / disappeared since the last reset
    pub fn spawned(&self) -> usize {
        self.spawned
    }

    pub fn retired(&self) -> usize {
        self.retired
    }

    pub fn last_status(&self) -> Option<GameStatus> {
        self.last_status
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, state: &GameState) {
        let diff = self.scene.sync(state);
        self.frames += 1;
        if diff.is_empty() {
            return;
        }
        self.spawned += diff.added.iter().filter(|s| s.id != state.frog.id).count();
        self.retired += diff.removed.len();

        for id in &diff.removed {
            log::debug!("Shape #{} left the board", id);
        }
        if let Some(status) = diff.status {
            log::info!(
                "Status {} after {} ticks ({} on board)",
                status.as_str(),
                state.elapsed_ticks,
                self.scene.len()
            );
            self.last_status = Some(status);
        }
    }

    fn reset(&mut self) {
        let dropped = self.scene.reset();
        log::debug!("Cleared {} shapes", dropped.len());
        self.spawned = 0;
        self.retired = 0;
        self.last_status = None;
    }
}
