//! Collision evaluation
//!
//! Runs once per tick after everything has moved. Outcomes in priority order:
//! 1. touching any vehicle crushes the frog
//! 2. standing in a water lane with no platform underneath drowns it
//! 3. reaching the goal row wins
//!
//! "Touching" is box overlap with non-zero depth on both axes.

use super::body::{Body, BodyKind};
use super::state::{GameState, GameStatus, Lane};

/// Status the frog ends up in for the current configuration
pub fn evaluate(state: &GameState) -> GameStatus {
    let frog = &state.frog;

    if hits_vehicle(frog, &state.lanes) {
        return GameStatus::Crushed;
    }

    if let Some(lane) = state.frog_lane() {
        if lane.is_water() && !lane.bodies.iter().any(|p| frog.overlaps(p)) {
            return GameStatus::Drowned;
        }
    }

    if frog.pos.y <= state.goal_y {
        return GameStatus::Won;
    }

    GameStatus::Playing
}

/// Any vehicle in any lane overlapping the frog
pub fn hits_vehicle(frog: &Body, lanes: &[Lane]) -> bool {
    lanes
        .iter()
        .flat_map(|lane| lane.bodies.iter())
        .any(|b| b.kind == BodyKind::Vehicle && frog.overlaps(b))
}

/// Velocity of the first platform (in lane order) the frog is standing on
pub fn carrier_velocity(frog: &Body, lanes: &[Lane]) -> Option<f32> {
    lanes
        .iter()
        .flat_map(|lane| lane.bodies.iter())
        .find(|b| b.kind == BodyKind::Platform && frog.overlaps(b))
        .map(|b| b.velocity)
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::config::GameConfig;
    use crate::consts::*;

    fn state_with_frog_at(x: f32, y: f32) -> GameState {
        let mut state = GameState::new(&GameConfig::default()).unwrap();
        state.frog.pos = Vec2::new(x, y);
        state
    }

    /// Drop an obstacle centred at `x` into `lane`
    fn place(state: &mut GameState, lane: usize, x: f32, width: f32) {
        let id = state.next_entity_id();
        let l = &state.lanes[lane];
        let body = Body::new(
            id,
            l.kind,
            Vec2::new(x, l.center_y()),
            Vec2::new(width, l.height),
            l.velocity(),
            0,
        )
        .unwrap();
        state.lanes[lane].bodies.push(body);
    }

    #[test]
    fn test_start_zone_is_safe() {
        let state = state_with_frog_at(FROG_START_X, FROG_START_Y);
        assert_eq!(evaluate(&state), GameStatus::Playing);
    }

    #[test]
    fn test_vehicle_crushes() {
        let mut state = state_with_frog_at(300.0, ROW_FOUR_Y + 30.0);
        place(&mut state, 3, 320.0, 80.0);
        assert_eq!(evaluate(&state), GameStatus::Crushed);
    }

    #[test]
    fn test_vehicle_edge_touch_is_not_a_hit() {
        // Frog spans 275..325, car spans 325..405
        let mut state = state_with_frog_at(300.0, ROW_FOUR_Y + 30.0);
        place(&mut state, 3, 365.0, 80.0);
        assert_eq!(evaluate(&state), GameStatus::Playing);
    }

    #[test]
    fn test_water_without_platform_drowns() {
        let mut state = state_with_frog_at(300.0, ROW_TWO_Y + 30.0);
        // Platform in the same lane but far away
        place(&mut state, 1, 50.0, 80.0);
        assert_eq!(evaluate(&state), GameStatus::Drowned);
    }

    #[test]
    fn test_platform_keeps_frog_afloat() {
        let mut state = state_with_frog_at(300.0, ROW_TWO_Y + 30.0);
        place(&mut state, 1, 290.0, 120.0);
        assert_eq!(evaluate(&state), GameStatus::Playing);
        assert_eq!(carrier_velocity(&state.frog, &state.lanes), Some(-QUICK_VELOCITY));
    }

    #[test]
    fn test_platform_in_other_lane_does_not_count() {
        // Frog is in lane 1, platform in lane 2 overlaps its lower edge
        let mut state = state_with_frog_at(300.0, ROW_TWO_Y + 30.0);
        let id = state.next_entity_id();
        let body = Body::new(
            id,
            BodyKind::Platform,
            Vec2::new(300.0, ROW_THREE_Y + 10.0),
            Vec2::new(120.0, OBJECT_HEIGHT),
            SLOW_VELOCITY,
            0,
        )
        .unwrap();
        state.lanes[2].bodies.push(body);
        assert_eq!(evaluate(&state), GameStatus::Drowned);
    }

    #[test]
    fn test_crush_beats_drown() {
        // Frog in water with no platform, a vehicle overlapping it anyway
        let mut state = state_with_frog_at(300.0, ROW_THREE_Y + 30.0);
        let id = state.next_entity_id();
        let car = Body::new(
            id,
            BodyKind::Vehicle,
            Vec2::new(300.0, ROW_THREE_Y + 50.0),
            Vec2::new(80.0, OBJECT_HEIGHT),
            QUICK_VELOCITY,
            0,
        )
        .unwrap();
        state.lanes[3].bodies.push(car);
        assert_eq!(evaluate(&state), GameStatus::Crushed);
    }

    #[test]
    fn test_goal_row_wins() {
        let state = state_with_frog_at(300.0, ROW_ONE_Y);
        assert_eq!(evaluate(&state), GameStatus::Won);

        let state = state_with_frog_at(300.0, 90.0);
        assert_eq!(evaluate(&state), GameStatus::Won);
    }

    #[test]
    fn test_median_is_safe() {
        let state = state_with_frog_at(300.0, 330.0);
        assert!(state.frog_lane().is_none());
        assert_eq!(evaluate(&state), GameStatus::Playing);
    }
}
