//! Rendering
//!
//! Renderers only read snapshots. `SceneSync` works out what changed between
//! two snapshots; backends turn that into visible elements.

pub mod logger;
pub mod scene;
#[cfg(target_arch = "wasm32")]
pub mod svg;

pub use logger::LogRenderer;
pub use scene::{SceneDiff, SceneSync, Shape};
#[cfg(target_arch = "wasm32")]
pub use svg::SvgRenderer;

use crate::sim::GameState;

/// Consumer of emitted states, called once per reduction
pub trait Renderer {
    fn render(&mut self, state: &GameState);

    /// Drop every visible element before a fresh run starts
    fn reset(&mut self) {}
}

impl<F: FnMut(&GameState)> Renderer for F {
    fn render(&mut self, state: &GameState) {
        self(state)
    }
}
