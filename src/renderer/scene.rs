//! Scene synchronization
//!
//! Turns successive state snapshots into shape diffs so a backend only has to
//! create, move or delete visible elements. Shapes are keyed by body id; an
//! obstacle that disappears from its lane shows up in `removed` exactly once.

use std::collections::BTreeMap;

use crate::sim::{Body, BodyKind, GameState, GameStatus};

/// Visible rectangle for one body (top-left corner plus size)
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub id: u32,
    pub kind: BodyKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Shape {
    pub fn from_body(body: &Body) -> Self {
        Self {
            id: body.id,
            kind: body.kind,
            x: body.left(),
            y: body.top(),
            width: body.size.x,
            height: body.size.y,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Changes since the previous snapshot
#[derive(Debug, Default, PartialEq)]
pub struct SceneDiff {
    pub added: Vec<Shape>,
    pub moved: Vec<Shape>,
    pub removed: Vec<u32>,
    /// Set when the status differs from the previous snapshot
    pub status: Option<GameStatus>,
}

impl SceneDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.moved.is_empty() && self.removed.is_empty() && self.status.is_none()
    }
}

/// Last shapes handed to a backend
#[derive(Debug, Default)]
pub struct SceneSync {
    shapes: BTreeMap<u32, Shape>,
    status: Option<GameStatus>,
}

impl SceneSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diff `state` against the previous snapshot and remember it
    pub fn sync(&mut self, state: &GameState) -> SceneDiff {
        let mut diff = SceneDiff::default();
        let mut next = BTreeMap::new();

        for body in std::iter::once(&state.frog).chain(state.obstacles()) {
            let shape = Shape::from_body(body);
            match self.shapes.get(&shape.id) {
                None => diff.added.push(shape.clone()),
                Some(old) if *old != shape => diff.moved.push(shape.clone()),
                Some(_) => {}
            }
            next.insert(shape.id, shape);
        }

        diff.removed = self
            .shapes
            .keys()
            .filter(|id| !next.contains_key(id))
            .copied()
            .collect();

        if self.status != Some(state.status) {
            diff.status = Some(state.status);
            self.status = Some(state.status);
        }

        self.shapes = next;
        diff
    }

    /// Forget everything, returning the ids a backend should delete
    pub fn reset(&mut self) -> Vec<u32> {
        self.status = None;
        std::mem::take(&mut self.shapes).into_keys().collect()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
