//! State reducer
//!
//! `reduce` is the only way a `GameState` changes. It consumes the previous
//! snapshot and returns the next one, so folding the same events over the
//! same initial state always lands on the same final state. `apply` is the
//! same step on a borrowed state.

use glam::Vec2;

use super::collision;
use super::event::GameEvent;
use super::spawner;
use super::state::GameState;

/// Fold one event into the state
pub fn reduce(mut state: GameState, event: &GameEvent) -> GameState {
    apply(&mut state, event);
    state
}

/// In-place form of [`reduce`] for owners that keep a single live state
pub fn apply(state: &mut GameState, event: &GameEvent) {
    // Terminal states are sinks
    if state.status.is_terminal() {
        return;
    }

    match *event {
        GameEvent::Move { dx, dy } => {
            // Collisions wait for the next tick
            state.frog.shift(Vec2::new(dx, dy));
        }
        GameEvent::Tick(n) => {
            log::trace!("Tick {} (elapsed {})", n, state.elapsed_ticks);

            spawner::step_lanes(state);

            // Ride whatever platform the frog is standing on
            if let Some(velocity) = collision::carrier_velocity(&state.frog, &state.lanes) {
                state.frog.shift(Vec2::new(velocity, 0.0));
            }

            let status = collision::evaluate(state);
            if status != state.status {
                log::info!(
                    "{} at tick {} (frog at {:.0}, {:.0})",
                    status.as_str(),
                    state.elapsed_ticks,
                    state.frog.pos.x,
                    state.frog.pos.y
                );
                state.status = status;
            }

            state.elapsed_ticks += 1;
        }
    }
}

/// Fold a whole sequence of events
pub fn fold<'a>(state: GameState, events: impl IntoIterator<Item = &'a GameEvent>) -> GameState {
    events.into_iter().fold(state, reduce)
}
