//! Rectangular bodies and box overlap
//!
//! Every entity in the game is an axis-aligned box:
//! - `pos`: centre of the box
//! - `size`: full width and height
//! - `velocity`: signed distance per tick along x

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;

/// What a body is, for collision and rendering purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    Frog,
    /// Hits the frog on contact
    Vehicle,
    /// Carries the frog across water
    Platform,
}

/// A rectangular game entity (frog or obstacle)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: u32,
    pub kind: BodyKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub velocity: f32,
    /// Elapsed tick at which the body was created
    pub spawned_at: u64,
}

impl Body {
    /// Build a body, rejecting non-positive or non-finite dimensions
    pub fn new(
        id: u32,
        kind: BodyKind,
        pos: Vec2,
        size: Vec2,
        velocity: f32,
        spawned_at: u64,
    ) -> Result<Self, SimError> {
        let valid = |d: f32| d.is_finite() && d > 0.0;
        if !valid(size.x) || !valid(size.y) {
            return Err(SimError::InvalidDimensions {
                kind,
                width: size.x,
                height: size.y,
            });
        }
        Ok(Self {
            id,
            kind,
            pos,
            size,
            velocity,
            spawned_at,
        })
    }

    /// The player's frog, standing still at `pos`
    pub fn frog(pos: Vec2) -> Result<Self, SimError> {
        let mut frog = Self::new(0, BodyKind::Frog, pos, Vec2::splat(FROG_SIZE), 0.0, 0)?;
        frog.clamp_to_canvas();
        Ok(frog)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Box intersection with non-zero overlap on both axes.
    /// Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Body) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Move one tick along x by the body's own velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos.x += self.velocity;
    }

    /// Shift by `delta`, then pull the centre back inside the canvas
    pub fn shift(&mut self, delta: Vec2) {
        self.pos += delta;
        self.clamp_to_canvas();
    }

    /// Keep the centre within `[0, CANVAS_SIZE]` on both axes
    pub fn clamp_to_canvas(&mut self) {
        self.pos = self.pos.clamp(Vec2::ZERO, Vec2::splat(CANVAS_SIZE));
    }

    /// True once the whole box lies past the canvas edge it is heading
    /// toward. A body sitting off-canvas behind its origin edge is not done.
    pub fn has_exited(&self) -> bool {
        if self.velocity > 0.0 {
            self.left() >= CANVAS_SIZE
        } else if self.velocity < 0.0 {
            self.right() <= 0.0
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(x: f32, y: f32, w: f32, h: f32) -> Body {
        Body::new(1, BodyKind::Vehicle, Vec2::new(x, y), Vec2::new(w, h), 0.0, 0).unwrap()
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let err = Body::new(1, BodyKind::Vehicle, Vec2::ZERO, Vec2::new(0.0, 60.0), 1.0, 0);
        assert!(matches!(err, Err(SimError::InvalidDimensions { .. })));

        let err = Body::new(1, BodyKind::Platform, Vec2::ZERO, Vec2::new(80.0, -1.0), 1.0, 0);
        assert!(err.is_err());

        let err = Body::new(1, BodyKind::Platform, Vec2::ZERO, Vec2::new(f32::NAN, 60.0), 1.0, 0);
        assert!(err.is_err());
    }

    #[test]
    fn test_overlap_and_edge_touch() {
        let a = block(100.0, 100.0, 50.0, 50.0);

        // Partial overlap on both axes
        assert!(a.overlaps(&block(140.0, 120.0, 50.0, 50.0)));
        // Sharing the right edge exactly
        assert!(!a.overlaps(&block(150.0, 100.0, 50.0, 50.0)));
        // Sharing the bottom edge exactly
        assert!(!a.overlaps(&block(100.0, 150.0, 50.0, 50.0)));
        // Overlap on x only
        assert!(!a.overlaps(&block(110.0, 300.0, 50.0, 50.0)));
    }

    #[test]
    fn test_frog_clamped_on_creation_and_shift() {
        let mut frog = Body::frog(Vec2::new(-40.0, 700.0)).unwrap();
        assert_eq!(frog.pos, Vec2::new(0.0, CANVAS_SIZE));

        frog.shift(Vec2::new(900.0, -900.0));
        assert_eq!(frog.pos, Vec2::new(CANVAS_SIZE, 0.0));
    }

    #[test]
    fn test_exit_depends_on_heading() {
        // Heading right, fully past the right edge
        let mut b = block(CANVAS_SIZE + 40.0, 150.0, 80.0, 60.0);
        b.velocity = 1.0;
        assert!(b.has_exited());

        // Same place but heading left: it is still arriving
        b.velocity = -1.0;
        assert!(!b.has_exited());

        // Heading left, right edge exactly on the left canvas edge
        let mut b = block(-40.0, 150.0, 80.0, 60.0);
        b.velocity = -1.0;
        assert!(b.has_exited());
    }
}
