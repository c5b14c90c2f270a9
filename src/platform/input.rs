//! Keyboard input
//!
//! Four arrow keys, each press is one hop. Only the down transition counts:
//! auto-repeat while a key is held and key-up never reach the reducer, and
//! any other key is ignored.

use glam::Vec2;

use crate::consts::HOP_DISTANCE;
use crate::sim::GameEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
}

impl Key {
    pub const ALL: [Key; 4] = [Key::Left, Key::Right, Key::Up, Key::Down];

    /// Map a DOM `KeyboardEvent.code` value
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            _ => None,
        }
    }

    /// Frog displacement for one press (y grows downward)
    pub fn delta(self) -> Vec2 {
        match self {
            Key::Left => Vec2::new(-HOP_DISTANCE, 0.0),
            Key::Right => Vec2::new(HOP_DISTANCE, 0.0),
            Key::Up => Vec2::new(0.0, -HOP_DISTANCE),
            Key::Down => Vec2::new(0.0, HOP_DISTANCE),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Edge detector over raw key-down / key-up notifications
#[derive(Debug, Default)]
pub struct InputSource {
    held: [bool; 4],
}

impl InputSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A key went down. Yields a move only on the transition from released.
    pub fn key_down(&mut self, code: &str) -> Option<GameEvent> {
        let key = Key::from_code(code)?;
        let held = &mut self.held[key.index()];
        if *held {
            return None;
        }
        *held = true;
        Some(GameEvent::movement(key.delta()))
    }

    /// A key came back up, arming it for the next press
    pub fn key_up(&mut self, code: &str) {
        if let Some(key) = Key::from_code(code) {
            self.held[key.index()] = false;
        }
    }

    /// Forget held keys (focus loss, restart)
    pub fn release_all(&mut self) {
        self.held = [false; 4];
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_deltas() {
        let moves: Vec<_> = Key::ALL.iter().map(|k| k.delta()).collect();
        assert_eq!(
            moves,
            vec![
                Vec2::new(-60.0, 0.0),
                Vec2::new(60.0, 0.0),
                Vec2::new(0.0, -60.0),
                Vec2::new(0.0, 60.0),
            ]
        );
    }

    #[test]
    fn test_edge_triggered() {
        let mut input = InputSource::new();
        assert_eq!(
            input.key_down("ArrowUp"),
            Some(GameEvent::Move { dx: 0.0, dy: -60.0 })
        );
        // Held: repeats are swallowed
        assert_eq!(input.key_down("ArrowUp"), None);
        assert_eq!(input.key_down("ArrowUp"), None);
        assert!(input.is_held(Key::Up));

        input.key_up("ArrowUp");
        assert!(!input.is_held(Key::Up));
        assert!(input.key_down("ArrowUp").is_some());
    }

    #[test]
    fn test_keys_are_independent() {
        let mut input = InputSource::new();
        assert!(input.key_down("ArrowLeft").is_some());
        assert_eq!(
            input.key_down("ArrowRight"),
            Some(GameEvent::Move { dx: 60.0, dy: 0.0 })
        );
        assert_eq!(input.key_down("ArrowLeft"), None);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut input = InputSource::new();
        assert_eq!(input.key_down("KeyW"), None);
        assert_eq!(input.key_down("Space"), None);
        input.key_up("Enter");
        assert!(Key::ALL.iter().all(|k| !input.is_held(*k)));
    }

    #[test]
    fn test_release_all() {
        let mut input = InputSource::new();
        input.key_down("ArrowDown");
        input.release_all();
        assert!(input.key_down("ArrowDown").is_some());
    }
}
