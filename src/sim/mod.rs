//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - State only changes through `reduce`
//! - Seeded RNG only
//! - Stable iteration order (lane order, then spawn order)
//! - No rendering, clock or platform dependencies

pub mod body;
pub mod collision;
pub mod event;
pub mod spawner;
pub mod state;
pub mod tick;

pub use body::{Body, BodyKind};
pub use collision::{carrier_velocity, evaluate, hits_vehicle};
pub use event::GameEvent;
pub use spawner::step_lanes;
pub use state::{Direction, GameState, GameStatus, Lane};
pub use tick::{apply, fold, reduce};
