//! Obstacle spawning, motion and retirement
//!
//! Each lane is stepped on its own: existing obstacles move, the ones that
//! left the canvas on the far side are dropped, then a new obstacle enters
//! at the origin edge when the lane's cadence comes up.

use glam::Vec2;
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_pcg::Pcg32;

use super::body::Body;
use super::state::{Direction, GameState, Lane};
use crate::consts::*;

/// Advance every lane by one tick at `state.elapsed_ticks`
pub fn step_lanes(state: &mut GameState) {
    let tick = state.elapsed_ticks;

    for index in 0..state.lanes.len() {
        let lane = &mut state.lanes[index];

        for body in &mut lane.bodies {
            body.advance();
        }

        let before = lane.bodies.len();
        lane.bodies.retain(|b| !b.has_exited());
        let retired = before - lane.bodies.len();
        if retired > 0 {
            log::trace!("Lane {} retired {} obstacle(s) at tick {}", index, retired, tick);
        }

        if tick % lane.spawn_interval == 0 {
            let id = state.next_entity_id();
            let lane = &state.lanes[index];
            match spawn_obstacle(lane, id, tick, state.seed, &state.widths) {
                Some(body) => {
                    log::trace!(
                        "Lane {} spawned {:?} #{} (w={}) at tick {}",
                        index,
                        body.kind,
                        body.id,
                        body.size.x,
                        tick
                    );
                    state.lanes[index].bodies.push(body);
                }
                None => log::error!("Lane {} could not spawn at tick {}", index, tick),
            }
        }
    }
}

/// Build the obstacle a lane emits at `tick`, just outside its origin edge
pub fn spawn_obstacle(lane: &Lane, id: u32, tick: u64, seed: u64, widths: &[f32]) -> Option<Body> {
    let width = roll_width(seed, lane.index, tick, widths)?;
    let size = Vec2::new(width, lane.height);
    let pos = Vec2::new(spawn_x(lane.direction, width), lane.center_y());

    match Body::new(id, lane.kind, pos, size, lane.velocity(), tick) {
        Ok(body) => Some(body),
        Err(e) => {
            log::error!("Rejected spawn: {}", e);
            None
        }
    }
}

/// Centre x that puts a body of `width` flush against the origin edge,
/// entirely off-canvas
pub fn spawn_x(direction: Direction, width: f32) -> f32 {
    match direction {
        Direction::LeftToRight => -width / 2.0,
        Direction::RightToLeft => CANVAS_SIZE + width / 2.0,
    }
}

/// Deterministic width pick for one (lane, tick) slot
fn roll_width(seed: u64, lane: usize, tick: u64, widths: &[f32]) -> Option<f32> {
    let slot_seed = seed ^ ((lane as u64) << 56) ^ tick.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let mut rng = Pcg32::seed_from_u64(slot_seed);
    widths.choose(&mut rng).copied()
}
